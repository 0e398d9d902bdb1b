// Service exports
pub mod file;
pub mod query;
pub mod remote;
pub mod source;

pub use file::{read_contacts_file, JsonFileContactSource};
pub use query::CloseContactService;
pub use remote::RemoteContactSource;
pub use source::{ContactSource, InMemoryContactStore};

use std::path::Path;
use std::sync::Arc;

use crate::config::{SourceKind, SourceSettings};
use crate::error::SourceError;

/// Build the contact source described by the configuration
pub async fn build_source(settings: &SourceSettings) -> Result<Arc<dyn ContactSource>, SourceError> {
    match settings.kind {
        SourceKind::Memory => {
            let store = match &settings.path {
                Some(path) => InMemoryContactStore::from_contacts(read_contacts_file(Path::new(path)).await?),
                None => InMemoryContactStore::new(),
            };
            tracing::info!("Using in-memory contact store ({} contacts)", store.len().await);
            Ok(Arc::new(store))
        }
        SourceKind::File => {
            let path = settings
                .path
                .as_deref()
                .ok_or_else(|| SourceError::Config("source.path is required for kind = \"file\"".into()))?;
            tracing::info!("Using contacts file: {}", path);
            Ok(Arc::new(JsonFileContactSource::new(path)))
        }
        SourceKind::Remote => {
            let remote = settings
                .remote
                .as_ref()
                .ok_or_else(|| SourceError::Config("[source.remote] is required for kind = \"remote\"".into()))?;
            tracing::info!("Using remote contact store: {}", remote.endpoint);
            Ok(Arc::new(RemoteContactSource::new(remote)?))
        }
    }
}
