//! Backend Route Table
//!
//! A static mapping from logical operations to absolute backend URLs, built
//! once from the configured base URL. Pure string construction: no retries,
//! no caching.

/// Operation → URL table for the backend
#[derive(Debug, Clone)]
pub struct BackendRoutes {
    base: String,
}

impl BackendRoutes {
    /// Build the table from a base URL. A trailing slash is tolerated.
    pub fn new(base_url: &str) -> Self {
        Self {
            base: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Chat endpoint
    pub fn chat(&self) -> String {
        format!("{}/chat", self.base)
    }

    /// Multipart upload endpoint
    pub fn upload(&self) -> String {
        format!("{}/upload", self.base)
    }

    /// Document listing endpoint
    pub fn list(&self) -> String {
        format!("{}/list", self.base)
    }

    /// Delete endpoint for one document. The filename is URL-encoded before
    /// substitution so reserved characters survive the round trip.
    pub fn delete(&self, filename: &str) -> String {
        format!("{}/delete/{}", self.base, urlencoding::encode(filename))
    }

    /// Presigned-upload-URL endpoint (present in the backend contract, not
    /// yet consumed by any gateway handler)
    pub fn generate_upload_url(&self) -> String {
        format!("{}/generate-upload-url", self.base)
    }

    /// Post-upload processing endpoint (present in the backend contract, not
    /// yet consumed by any gateway handler)
    pub fn process_upload(&self) -> String {
        format!("{}/process-upload", self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_from_base_url() {
        let routes = BackendRoutes::new("http://localhost:8000");
        assert_eq!(routes.chat(), "http://localhost:8000/chat");
        assert_eq!(routes.upload(), "http://localhost:8000/upload");
        assert_eq!(routes.list(), "http://localhost:8000/list");
        assert_eq!(
            routes.generate_upload_url(),
            "http://localhost:8000/generate-upload-url"
        );
        assert_eq!(
            routes.process_upload(),
            "http://localhost:8000/process-upload"
        );
    }

    #[test]
    fn trailing_slash_on_base_is_tolerated() {
        let routes = BackendRoutes::new("http://localhost:8000/");
        assert_eq!(routes.list(), "http://localhost:8000/list");
    }

    #[test]
    fn delete_encodes_plain_filename_unchanged() {
        let routes = BackendRoutes::new("http://localhost:8000");
        assert_eq!(
            routes.delete("report.pdf"),
            "http://localhost:8000/delete/report.pdf"
        );
    }

    #[test]
    fn delete_encodes_reserved_characters() {
        let routes = BackendRoutes::new("http://localhost:8000");
        assert_eq!(
            routes.delete("my report (1).pdf"),
            "http://localhost:8000/delete/my%20report%20%281%29.pdf"
        );
        assert_eq!(
            routes.delete("a/b?.pdf"),
            "http://localhost:8000/delete/a%2Fb%3F.pdf"
        );
        assert_eq!(
            routes.delete("100%.pdf"),
            "http://localhost:8000/delete/100%25.pdf"
        );
    }
}
