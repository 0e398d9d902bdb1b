use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::config::RemoteSettings;
use crate::error::SourceError;
use crate::models::Contact;
use crate::services::source::ContactSource;

/// Client for a remote document store holding the contacts collection
///
/// Documents are listed page by page until the store returns a short page,
/// giving one complete snapshot per call. The reported `total` may be capped
/// or missing, so it is only logged.
pub struct RemoteContactSource {
    base_url: String,
    api_key: String,
    project_id: String,
    database_id: String,
    collection: String,
    page_size: usize,
    client: Client,
}

impl RemoteContactSource {
    pub fn new(settings: &RemoteSettings) -> Result<Self, SourceError> {
        if settings.page_size == 0 {
            return Err(SourceError::Config("page_size must be at least 1".to_string()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            base_url: settings.endpoint.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
            project_id: settings.project_id.clone(),
            database_id: settings.database_id.clone(),
            collection: settings.collection.clone(),
            page_size: settings.page_size,
            client,
        })
    }

    fn documents_url(&self) -> String {
        format!(
            "{}/databases/{}/collections/{}/documents",
            self.base_url, self.database_id, self.collection
        )
    }

    /// Fetch one page; returns the parsed contacts, the raw document count
    /// and the total reported by the store, if any.
    async fn fetch_page(&self, offset: usize) -> Result<(Vec<Contact>, usize, Option<u64>), SourceError> {
        let queries = vec![
            format!("limit({})", self.page_size),
            format!("offset({})", offset),
        ];
        let queries_json = serde_json::to_string(&queries)?;
        let url = format!(
            "{}?query={}",
            self.documents_url(),
            urlencoding::encode(&queries_json)
        );

        tracing::debug!("Fetching contacts page from: {}", url);

        let response = self
            .client
            .get(&url)
            .header("X-Appwrite-Key", &self.api_key)
            .header("X-Appwrite-Project", &self.project_id)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Contact store returned {} at offset {}: {}", status, offset, body);
            return Err(SourceError::Api(format!("Failed to list contacts: {}", status)));
        }

        let json: Value = response.json().await?;

        let total = json.get("total").and_then(|t| t.as_u64());

        let documents = json
            .get("documents")
            .and_then(|d| d.as_array())
            .ok_or_else(|| SourceError::InvalidResponse("Missing documents array".into()))?;

        let contacts = documents
            .iter()
            .filter_map(|doc| {
                let data = doc.get("data").unwrap_or(doc);
                match serde_json::from_value::<Contact>(data.clone()) {
                    Ok(contact) => Some(contact),
                    Err(e) => {
                        tracing::warn!("Skipping unreadable contact document: {}", e);
                        None
                    }
                }
            })
            .collect();

        Ok((contacts, documents.len(), total))
    }
}

#[async_trait]
impl ContactSource for RemoteContactSource {
    async fn list_all(&self) -> Result<Vec<Contact>, SourceError> {
        let mut contacts = Vec::new();
        let mut offset = 0usize;

        loop {
            let (page, fetched, total) = self.fetch_page(offset).await?;
            contacts.extend(page);
            offset += fetched;

            if fetched < self.page_size {
                tracing::debug!("Listed {} contacts (reported total: {:?})", contacts.len(), total);
                break;
            }
        }

        Ok(contacts)
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(endpoint: &str) -> RemoteSettings {
        RemoteSettings {
            endpoint: endpoint.to_string(),
            api_key: "test_key".to_string(),
            project_id: "test_project".to_string(),
            database_id: "test_db".to_string(),
            collection: "contacts".to_string(),
            page_size: 100,
            timeout_secs: 5,
        }
    }

    #[test]
    fn test_client_creation() {
        let source = RemoteContactSource::new(&settings("https://store.test/v1/")).unwrap();

        assert_eq!(source.base_url, "https://store.test/v1");
        assert_eq!(
            source.documents_url(),
            "https://store.test/v1/databases/test_db/collections/contacts/documents"
        );
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let mut settings = settings("https://store.test/v1");
        settings.page_size = 0;
        assert!(matches!(
            RemoteContactSource::new(&settings),
            Err(SourceError::Config(_))
        ));
    }
}
