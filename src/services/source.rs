use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::SourceError;
use crate::models::Contact;

/// Provider of the full contact collection
///
/// Each call to [`list_all`](ContactSource::list_all) must return an
/// independent snapshot; the filter never observes concurrent mutation.
#[async_trait]
pub trait ContactSource: Send + Sync {
    /// Fetch every contact
    async fn list_all(&self) -> Result<Vec<Contact>, SourceError>;

    /// Short label used in logs and the health endpoint
    fn name(&self) -> &'static str;
}

/// Contacts held in process memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryContactStore {
    contacts: Arc<RwLock<Vec<Contact>>>,
}

impl InMemoryContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            contacts: Arc::new(RwLock::new(contacts)),
        }
    }

    pub async fn insert(&self, contact: Contact) {
        self.contacts.write().await.push(contact);
    }

    pub async fn extend(&self, contacts: impl IntoIterator<Item = Contact>) {
        self.contacts.write().await.extend(contacts);
    }

    pub async fn len(&self) -> usize {
        self.contacts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.contacts.read().await.is_empty()
    }
}

#[async_trait]
impl ContactSource for InMemoryContactStore {
    async fn list_all(&self) -> Result<Vec<Contact>, SourceError> {
        Ok(self.contacts.read().await.clone())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
