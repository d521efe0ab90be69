use crate::error::StoreResult;
use crate::repositories::traits::SubscriberRepository;
use crate::store::{AsyncJsonStore, Collection};
use async_trait::async_trait;

/// Subscriber repository backed by `subscribers.json`, an array of email strings.
pub struct JsonSubscriberRepository {
    store: AsyncJsonStore,
}

impl JsonSubscriberRepository {
    pub fn new(store: AsyncJsonStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SubscriberRepository for JsonSubscriberRepository {
    async fn list(&self) -> StoreResult<Vec<String>> {
        self.store.load_or_empty(Collection::Subscribers).await
    }

    async fn add(&self, email: &str) -> StoreResult<bool> {
        // Skip the write entirely for a known subscriber.
        if self.list().await?.iter().any(|e| e == email) {
            return Ok(false);
        }

        let email = email.to_string();
        self.store
            .update(Collection::Subscribers, move |emails: &mut Vec<String>| {
                if emails.contains(&email) {
                    return Ok(false);
                }
                emails.push(email);
                Ok(true)
            })
            .await
    }
}
