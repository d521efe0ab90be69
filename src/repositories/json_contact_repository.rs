use crate::error::StoreResult;
use crate::models::Contact;
use crate::repositories::traits::ContactRepository;
use crate::store::{AsyncJsonStore, Collection};
use async_trait::async_trait;

/// Contact repository backed by `contacts.json`.
pub struct JsonContactRepository {
    store: AsyncJsonStore,
}

impl JsonContactRepository {
    pub fn new(store: AsyncJsonStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ContactRepository for JsonContactRepository {
    async fn insert(&self, contact: &Contact) -> StoreResult<Contact> {
        let mut contact = contact.clone();

        self.store
            .update(Collection::Contacts, move |contacts: &mut Vec<Contact>| {
                contact.id =
                    Contact::next_free_id(&contact.id, contacts.iter().map(|c| c.id.as_str()));
                contacts.push(contact.clone());
                Ok(contact)
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::Metrics;
    use crate::store::JsonFileStore;
    use tempfile::TempDir;

    fn sample_contact(id: &str) -> Contact {
        Contact {
            id: id.to_string(),
            name: "Marek".to_string(),
            email: "marek@example.sk".to_string(),
            phone: Some("+421 900 123 456".to_string()),
            message: "Is the spa open in winter?".to_string(),
            submitted_at: "2024-06-01T09:00:00Z".parse().unwrap(),
        }
    }

    #[tokio::test]
    async fn test_same_millisecond_ids_are_bumped() {
        let dir = TempDir::new().unwrap();
        let store = AsyncJsonStore::new(JsonFileStore::new(dir.path(), Metrics::new()));
        let repo = JsonContactRepository::new(store.clone());

        let first = repo.insert(&sample_contact("1717232400000")).await.unwrap();
        let second = repo.insert(&sample_contact("1717232400000")).await.unwrap();

        assert_eq!(first.id, "1717232400000");
        assert_eq!(second.id, "1717232400001");
        let stored: Vec<Contact> = store.load_or_empty(Collection::Contacts).await.unwrap();
        assert_eq!(stored.len(), 2);
    }
}
