//! Classification of backend failures.
//!
//! The booking backend reports problems as free-text messages, not stable
//! error codes. The client therefore classifies by substring against a rule
//! table and maps the result onto a small set of user-facing templates. The
//! table lives in one place so the matching can be tested (and adjusted)
//! without touching any controller.

use std::fmt;

use once_cell::sync::Lazy;

use contracts::shared::api::ErrorBody;

/// Which unique field a duplicate-value conflict refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictField {
    Code,
    Name,
    Other,
}

/// Typed view of a failed backend call.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// No response at all (connection refused, DNS, aborted), or a response
    /// body that could not be decoded.
    Transport(String),
    /// Non-2xx response that matched no known pattern.
    Server { status: u16, message: String },
    /// The server rejected a create/update because a unique field is taken.
    ValidationConflict { field: ConflictField, message: String },
    /// The record id no longer exists on the server.
    NotFound,
    /// Delete blocked because dependent records still reference the entity.
    /// `dependents` is the count embedded in the server message, if any.
    ReferentialConflict {
        dependents: Option<u64>,
        message: String,
    },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "transport error: {}", msg),
            ApiError::Server { status, message } => {
                write!(f, "server error ({}): {}", status, message)
            }
            ApiError::ValidationConflict { message, .. } => {
                write!(f, "validation conflict: {}", message)
            }
            ApiError::NotFound => write!(f, "record not found"),
            ApiError::ReferentialConflict { message, .. } => {
                write!(f, "referential conflict: {}", message)
            }
        }
    }
}

/// Substring rule table driving [`classify`]. Matching is case-insensitive.
#[derive(Debug, Clone)]
pub struct ErrorRules {
    pub duplicate: Vec<&'static str>,
    pub not_found: Vec<&'static str>,
    pub referential: Vec<&'static str>,
}

impl Default for ErrorRules {
    fn default() -> Self {
        Self {
            duplicate: vec!["already exists", "already in use", "duplicate"],
            not_found: vec!["not found", "does not exist", "no longer exists"],
            referential: vec!["cannot delete", "still referenced", "in use by"],
        }
    }
}

static DEFAULT_RULES: Lazy<ErrorRules> = Lazy::new(ErrorRules::default);

impl ErrorRules {
    pub fn classify(&self, status: u16, body: &str) -> ApiError {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.text().map(str::to_string))
            .unwrap_or_else(|| format!("HTTP {}", status));
        let lower = message.to_lowercase();

        if status == 404 || self.not_found.iter().any(|p| lower.contains(p)) {
            return ApiError::NotFound;
        }
        if self.duplicate.iter().any(|p| lower.contains(p)) {
            let field = if lower.contains("code") {
                ConflictField::Code
            } else if lower.contains("name") {
                ConflictField::Name
            } else {
                ConflictField::Other
            };
            return ApiError::ValidationConflict { field, message };
        }
        if self.referential.iter().any(|p| lower.contains(p)) {
            return ApiError::ReferentialConflict {
                dependents: first_integer(&message),
                message,
            };
        }

        ApiError::Server { status, message }
    }
}

/// Classify with the default rule table.
pub fn classify(status: u16, body: &str) -> ApiError {
    DEFAULT_RULES.classify(status, body)
}

/// Classification for failed deletes. A blocked delete is not always
/// labeled with one of the referential phrases; some backends answer with
/// just the dependent count ("3 cars depend on this type"). A body-derived
/// message carrying an integer is promoted to a referential conflict when
/// no other rule matched. The `HTTP <status>` fallback text never qualifies.
pub fn classify_delete(status: u16, body: &str) -> ApiError {
    match classify(status, body) {
        ApiError::Server { status, message } => {
            let count = serde_json::from_str::<ErrorBody>(body)
                .ok()
                .and_then(|b| b.text().map(str::to_string))
                .as_deref()
                .and_then(first_integer);
            match count {
                Some(count) => ApiError::ReferentialConflict {
                    dependents: Some(count),
                    message,
                },
                None => ApiError::Server { status, message },
            }
        }
        other => other,
    }
}

/// First run of ASCII digits in `text`, parsed as an integer. Used to pull
/// the dependent-record count out of messages like
/// "cannot delete: 3 cars reference this type".
pub fn first_integer(text: &str) -> Option<u64> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let digits: String = text[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Fixed presentation templates for everything the user can see. Best-effort
/// by design: the server contract only guarantees free text.
pub fn user_message(error: &ApiError) -> String {
    match error {
        ApiError::Transport(_) => "Network error. Check your connection and try again.".to_string(),
        ApiError::Server { .. } => "The server reported an error. Try again later.".to_string(),
        ApiError::ValidationConflict { field, .. } => match field {
            ConflictField::Code => "This type code is already in use".to_string(),
            ConflictField::Name => "This type name is already in use".to_string(),
            ConflictField::Other => "A record with these values already exists".to_string(),
        },
        ApiError::NotFound => {
            "This record no longer exists. Refresh the list and try again.".to_string()
        }
        ApiError::ReferentialConflict { dependents, .. } => match dependents {
            Some(count) => format!(
                "Cannot delete: {} dependent record(s) still reference this item",
                count
            ),
            None => "Cannot delete: dependent records still reference this item".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_duplicate_code() {
        let err = classify(409, r#"{"message":"Car type code already exists"}"#);
        assert_eq!(
            err,
            ApiError::ValidationConflict {
                field: ConflictField::Code,
                message: "Car type code already exists".to_string(),
            }
        );
        assert!(user_message(&err).to_lowercase().contains("type code is already in use"));
    }

    #[test]
    fn classifies_duplicate_name_from_error_field() {
        let err = classify(400, r#"{"error":"Name already exists"}"#);
        assert!(matches!(
            err,
            ApiError::ValidationConflict {
                field: ConflictField::Name,
                ..
            }
        ));
    }

    #[test]
    fn status_404_wins_over_body() {
        assert_eq!(classify(404, ""), ApiError::NotFound);
        assert_eq!(
            classify(400, r#"{"message":"record does not exist"}"#),
            ApiError::NotFound
        );
    }

    #[test]
    fn referential_conflict_extracts_count() {
        let err = classify(409, r#"{"message":"Cannot delete: 3 cars use this type"}"#);
        match &err {
            ApiError::ReferentialConflict { dependents, .. } => {
                assert_eq!(*dependents, Some(3));
            }
            other => panic!("unexpected: {:?}", other),
        }
        assert!(user_message(&err).contains('3'));
    }

    #[test]
    fn unmatched_body_falls_back_to_server_error() {
        let err = classify(500, "plain text, not json");
        assert_eq!(
            err,
            ApiError::Server {
                status: 500,
                message: "HTTP 500".to_string(),
            }
        );
    }

    #[test]
    fn empty_body_uses_status_fallback() {
        assert_eq!(
            classify(502, ""),
            ApiError::Server {
                status: 502,
                message: "HTTP 502".to_string(),
            }
        );
    }

    #[test]
    fn unlabeled_delete_conflict_with_count_is_promoted() {
        let err = classify_delete(409, r#"{"message":"3 cars depend on this type"}"#);
        assert_eq!(
            err,
            ApiError::ReferentialConflict {
                dependents: Some(3),
                message: "3 cars depend on this type".to_string(),
            }
        );
        assert!(user_message(&err).contains('3'));
    }

    #[test]
    fn delete_status_fallback_is_not_promoted() {
        // "HTTP 500" contains digits but carries no dependent count
        assert_eq!(
            classify_delete(500, ""),
            ApiError::Server {
                status: 500,
                message: "HTTP 500".to_string(),
            }
        );
    }

    #[test]
    fn delete_keeps_rule_table_classifications() {
        assert_eq!(classify_delete(404, ""), ApiError::NotFound);
        let err = classify_delete(409, r#"{"message":"Cannot delete: 3 cars use this type"}"#);
        assert!(matches!(
            err,
            ApiError::ReferentialConflict {
                dependents: Some(3),
                ..
            }
        ));
    }

    #[test]
    fn first_integer_scans_past_words() {
        assert_eq!(first_integer("cannot delete: 12 bookings"), Some(12));
        assert_eq!(first_integer("no digits here"), None);
        assert_eq!(first_integer("7"), Some(7));
    }

    #[test]
    fn custom_rule_table() {
        let rules = ErrorRules {
            duplicate: vec!["da ton tai"],
            ..ErrorRules::default()
        };
        let err = rules.classify(409, r#"{"message":"ma loai xe da ton tai"}"#);
        assert!(matches!(err, ApiError::ValidationConflict { .. }));
    }
}
