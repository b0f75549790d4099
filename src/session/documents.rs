//! Document Registry
//!
//! Client-side cache of the uploaded documents. Every refresh replaces the
//! cache wholesale from the gateway's listing; nothing is ever merged, so
//! the registry cannot drift from the server's view.

use std::collections::HashSet;

use tracing::warn;

use crate::client::{ClientError, GatewayApi};
use crate::types::Document;

/// Cached document listing plus in-flight delete tracking
#[derive(Debug, Default)]
pub struct DocumentRegistry {
    documents: Vec<Document>,
    is_loading: bool,
    error: Option<String>,
    uploaded: bool,
    deleting: HashSet<String>,
}

impl DocumentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached listing, in gateway order
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// True once at least one document is known to exist
    pub fn has_documents(&self) -> bool {
        self.uploaded
    }

    /// True while a refresh is in flight
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// The last refresh failure, if the most recent refresh failed
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// True while a delete for `filename` is in flight
    pub fn is_deleting(&self, filename: &str) -> bool {
        self.deleting.contains(filename)
    }

    /// Replace the cache from the gateway's listing. On failure the cache
    /// is left untouched and the error is recorded for display.
    pub async fn refresh(&mut self, api: &dyn GatewayApi) {
        self.is_loading = true;
        self.error = None;
        match api.list().await {
            Ok(documents) => {
                self.uploaded = !documents.is_empty();
                self.documents = documents;
            }
            Err(err) => {
                warn!("Failed to refresh document list: {}", err);
                self.error = Some(err.to_string());
            }
        }
        self.is_loading = false;
    }

    /// Mark a delete as started. Returns false when one is already in
    /// flight for the same filename, in which case the caller must not
    /// issue another request.
    pub fn begin_delete(&mut self, filename: &str) -> bool {
        self.deleting.insert(filename.to_string())
    }

    fn finish_delete(&mut self, filename: &str) {
        self.deleting.remove(filename);
    }

    /// Delete one document and re-fetch the listing on success. A delete
    /// already in flight for the same filename turns this into a no-op.
    pub async fn delete(
        &mut self,
        api: &dyn GatewayApi,
        filename: &str,
    ) -> Result<(), ClientError> {
        if !self.begin_delete(filename) {
            return Ok(());
        }
        let result = api.delete(filename).await;
        self.finish_delete(filename);
        match result {
            Ok(()) => {
                self.refresh(api).await;
                Ok(())
            }
            Err(err) => Err(err),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::types::ChatReply;

    /// Stub gateway with a scripted listing and a call log
    struct StubApi {
        listings: Mutex<Vec<Result<Vec<Document>, ClientError>>>,
        deletes: Mutex<Vec<String>>,
        delete_result: fn() -> Result<(), ClientError>,
    }

    impl StubApi {
        fn with_listings(listings: Vec<Result<Vec<Document>, ClientError>>) -> Self {
            Self {
                listings: Mutex::new(listings),
                deletes: Mutex::new(Vec::new()),
                delete_result: || Ok(()),
            }
        }
    }

    fn doc(name: &str) -> Document {
        Document {
            file_name: name.to_string(),
            file_url: format!("http://storage/{}", name),
        }
    }

    fn rejected() -> ClientError {
        ClientError::Rejected {
            status: 503,
            message: "unavailable".to_string(),
        }
    }

    #[async_trait]
    impl GatewayApi for StubApi {
        async fn chat(&self, _query: &str) -> Result<ChatReply, ClientError> {
            unreachable!("registry never chats")
        }

        async fn list(&self) -> Result<Vec<Document>, ClientError> {
            self.listings.lock().unwrap().remove(0)
        }

        async fn upload(&self, _file_name: &str, _bytes: Vec<u8>) -> Result<(), ClientError> {
            unreachable!("registry never uploads")
        }

        async fn delete(&self, filename: &str) -> Result<(), ClientError> {
            self.deletes.lock().unwrap().push(filename.to_string());
            (self.delete_result)()
        }
    }

    #[tokio::test]
    async fn refresh_replaces_the_cache() {
        let api = StubApi::with_listings(vec![
            Ok(vec![doc("a.pdf"), doc("b.pdf")]),
            Ok(vec![doc("b.pdf")]),
        ]);
        let mut registry = DocumentRegistry::new();

        registry.refresh(&api).await;
        assert_eq!(registry.documents().len(), 2);
        assert!(registry.has_documents());

        registry.refresh(&api).await;
        let names: Vec<_> = registry.documents().iter().map(|d| &d.file_name).collect();
        assert_eq!(names, ["b.pdf"]);
    }

    #[tokio::test]
    async fn refresh_twice_against_unchanged_listing_is_identical() {
        let listing = vec![doc("a.pdf"), doc("b.pdf")];
        let api = StubApi::with_listings(vec![Ok(listing.clone()), Ok(listing)]);
        let mut registry = DocumentRegistry::new();

        registry.refresh(&api).await;
        let first = registry.documents().to_vec();

        registry.refresh(&api).await;
        assert_eq!(registry.documents(), first);
    }

    #[tokio::test]
    async fn refresh_failure_keeps_the_cache_and_records_the_error() {
        let api = StubApi::with_listings(vec![Ok(vec![doc("a.pdf")]), Err(rejected())]);
        let mut registry = DocumentRegistry::new();

        registry.refresh(&api).await;
        registry.refresh(&api).await;

        assert_eq!(registry.documents().len(), 1);
        assert!(registry.error().unwrap().contains("503"));
        assert!(!registry.is_loading());
    }

    #[tokio::test]
    async fn delete_refreshes_the_listing_on_success() {
        let api = StubApi::with_listings(vec![Ok(vec![])]);
        let mut registry = DocumentRegistry::new();

        registry.delete(&api, "a.pdf").await.unwrap();

        assert_eq!(*api.deletes.lock().unwrap(), ["a.pdf"]);
        assert!(registry.documents().is_empty());
        assert!(!registry.is_deleting("a.pdf"));
    }

    #[tokio::test]
    async fn delete_failure_surfaces_the_error_and_clears_the_flight() {
        let mut api = StubApi::with_listings(vec![]);
        api.delete_result = || Err(rejected());
        let mut registry = DocumentRegistry::new();

        let err = registry.delete(&api, "a.pdf").await.unwrap_err();
        assert!(matches!(err, ClientError::Rejected { status: 503, .. }));
        assert!(!registry.is_deleting("a.pdf"));
    }

    #[tokio::test]
    async fn begin_delete_guards_against_duplicates() {
        let mut registry = DocumentRegistry::new();
        assert!(registry.begin_delete("a.pdf"));
        assert!(!registry.begin_delete("a.pdf"));
        assert!(registry.is_deleting("a.pdf"));
        assert!(registry.begin_delete("b.pdf"));
    }

    #[tokio::test]
    async fn uploaded_flag_tracks_the_latest_listing() {
        let api = StubApi::with_listings(vec![Ok(vec![doc("a.pdf")]), Ok(vec![])]);
        let mut registry = DocumentRegistry::new();

        registry.refresh(&api).await;
        assert!(registry.has_documents());

        registry.refresh(&api).await;
        assert!(!registry.has_documents());
    }
}
