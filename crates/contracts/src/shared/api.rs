use serde::{Deserialize, Serialize};

/// One page of a search response.
///
/// Older backend endpoints leave `totalCount` out; callers fall back to the
/// item count of the returned page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagedResponse<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(rename = "totalCount", default)]
    pub total_count: Option<usize>,
}

impl<T> PagedResponse<T> {
    pub fn total(&self) -> usize {
        self.total_count.unwrap_or(self.items.len())
    }
}

/// Error body the backend returns alongside non-2xx statuses. Either field
/// may carry the human-readable text; both may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// The server-reported text, whichever field carries it.
    pub fn text(&self) -> Option<&str> {
        self.message
            .as_deref()
            .or(self.error.as_deref())
            .filter(|s| !s.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paged_response_defaults() {
        let page: PagedResponse<u32> = serde_json::from_str(r#"{"items":[1,2,3]}"#).unwrap();
        assert_eq!(page.total(), 3);

        let page: PagedResponse<u32> =
            serde_json::from_str(r#"{"items":[1],"totalCount":40}"#).unwrap();
        assert_eq!(page.total(), 40);
    }

    #[test]
    fn error_body_prefers_message() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"message":"boom","error":"other"}"#).unwrap();
        assert_eq!(body.text(), Some("boom"));

        let body: ErrorBody = serde_json::from_str(r#"{"error":"only"}"#).unwrap();
        assert_eq!(body.text(), Some("only"));

        let body: ErrorBody = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(body.text(), None);
    }
}
