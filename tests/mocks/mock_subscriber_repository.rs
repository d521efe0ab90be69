use async_trait::async_trait;
use kaskady_server::error::StoreResult;
use kaskady_server::repositories::SubscriberRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock subscriber repository for testing.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockSubscriberRepository {
    subscribers: Arc<Mutex<Vec<String>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockSubscriberRepository {
    /// Create a new empty MockSubscriberRepository.
    pub fn new() -> Self {
        Self {
            subscribers: Arc::new(Mutex::new(Vec::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Snapshot of the subscriber list.
    pub fn subscribers(&self) -> Vec<String> {
        self.subscribers.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockSubscriberRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubscriberRepository for MockSubscriberRepository {
    async fn list(&self) -> StoreResult<Vec<String>> {
        self.track_call("list");
        Ok(self.subscribers())
    }

    async fn add(&self, email: &str) -> StoreResult<bool> {
        self.track_call("add");

        let mut subscribers = self.subscribers.lock().unwrap();
        if subscribers.iter().any(|s| s == email) {
            return Ok(false);
        }
        subscribers.push(email.to_string());
        Ok(true)
    }
}
