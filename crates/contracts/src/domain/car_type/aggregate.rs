use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::EntityStatus;

/// Maximum length of the free-text description, in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 255;

// ============================================================================
// ID Type
// ============================================================================

/// Identifier of a car type. Assigned by the server, immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CarTypeId(pub i64);

impl CarTypeId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for CarTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// A vehicle category in the rental catalog ("Xe 7 chỗ" and the like).
///
/// `code` and `name` are unique across the catalog; `code` is written once
/// at creation and is normally not part of the update payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarType {
    pub id: CarTypeId,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub status: EntityStatus,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Payload for creating or updating a car type.
///
/// `code` is `None` on updates when the catalog treats codes as write-once;
/// serde then leaves the field out entirely so the server keeps the stored
/// value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CarTypeDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub name: String,
    pub description: String,
    pub status: u8,
}

impl CarTypeDto {
    /// Build an edit form payload from an existing record.
    pub fn from_entity(entity: &CarType, include_code: bool) -> Self {
        Self {
            code: include_code.then(|| entity.code.clone()),
            name: entity.name.clone(),
            description: entity.description.clone().unwrap_or_default(),
            status: entity.status.as_u8(),
        }
    }

    /// Run every field rule and collect the failures into a field → message
    /// map. An empty map means the payload may go to the server.
    ///
    /// `require_code` is false when editing with write-once codes: the form
    /// does not carry the code, so there is nothing to check.
    pub fn validate(&self, require_code: bool) -> BTreeMap<&'static str, String> {
        let mut errors = BTreeMap::new();

        if require_code {
            match &self.code {
                None => {
                    errors.insert("code", "Code is required".to_string());
                }
                Some(code) => {
                    let code = code.trim();
                    if code.is_empty() {
                        errors.insert("code", "Code is required".to_string());
                    } else if !is_valid_code(code) {
                        errors.insert(
                            "code",
                            "Code may contain only uppercase letters and underscores".to_string(),
                        );
                    }
                }
            }
        }

        if self.name.trim().is_empty() {
            errors.insert("name", "Name is required".to_string());
        } else if !is_valid_name(&self.name) {
            errors.insert(
                "name",
                "Name must follow the \"Xe <seats> chỗ\" pattern, e.g. \"Xe 7 chỗ\"".to_string(),
            );
        }

        if self.description.chars().count() > DESCRIPTION_MAX_CHARS {
            errors.insert(
                "description",
                format!("Description must be at most {} characters", DESCRIPTION_MAX_CHARS),
            );
        }

        if self.status > 1 {
            errors.insert("status", "Status must be 0 or 1".to_string());
        }

        errors
    }
}

// ============================================================================
// Field rules
// ============================================================================

/// `[A-Z_]+` over the trimmed input.
pub fn is_valid_code(code: &str) -> bool {
    let code = code.trim();
    !code.is_empty() && code.chars().all(|c| c.is_ascii_uppercase() || c == '_')
}

/// Case-insensitive match of the display-name template `Xe <digits> chỗ`.
pub fn is_valid_name(name: &str) -> bool {
    let name = name.trim().to_lowercase();
    let Some(rest) = name.strip_prefix("xe ") else {
        return false;
    };
    let Some(seats) = rest.strip_suffix(" chỗ") else {
        return false;
    };
    !seats.is_empty() && seats.chars().all(|c| c.is_ascii_digit())
}

/// Input-time code normalization: uppercase everything typed and drop any
/// character outside `[A-Z_]`.
pub fn normalize_code(input: &str) -> String {
    input
        .chars()
        .map(|c| c.to_ascii_uppercase())
        .filter(|c| c.is_ascii_uppercase() || *c == '_')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_dto() -> CarTypeDto {
        CarTypeDto {
            code: Some("SUV".to_string()),
            name: "Xe 7 chỗ".to_string(),
            description: String::new(),
            status: 1,
        }
    }

    #[test]
    fn accepts_valid_payload() {
        assert!(valid_dto().validate(true).is_empty());
    }

    #[test]
    fn rejects_lowercase_and_digit_codes() {
        for bad in ["suv", "Suv", "SUV1", "SUV-X", "S UV"] {
            let dto = CarTypeDto {
                code: Some(bad.to_string()),
                ..valid_dto()
            };
            assert!(dto.validate(true).contains_key("code"), "code {:?}", bad);
        }
    }

    #[test]
    fn code_not_checked_when_omitted_on_update() {
        let dto = CarTypeDto {
            code: None,
            ..valid_dto()
        };
        assert!(dto.validate(false).is_empty());
        assert!(dto.validate(true).contains_key("code"));
    }

    #[test]
    fn name_template_is_case_insensitive() {
        assert!(is_valid_name("Xe 7 chỗ"));
        assert!(is_valid_name("xe 16 chỗ"));
        assert!(is_valid_name("  XE 4 CHỖ "));
        assert!(!is_valid_name("Xe chỗ"));
        assert!(!is_valid_name("Xe bảy chỗ"));
        assert!(!is_valid_name("7 chỗ"));
        assert!(!is_valid_name(""));
    }

    #[test]
    fn collects_all_errors_at_once() {
        let dto = CarTypeDto {
            code: Some("suv".to_string()),
            name: "sedan".to_string(),
            description: "x".repeat(DESCRIPTION_MAX_CHARS + 1),
            status: 3,
        };
        let errors = dto.validate(true);
        assert_eq!(errors.len(), 4);
        assert!(errors.contains_key("code"));
        assert!(errors.contains_key("name"));
        assert!(errors.contains_key("description"));
        assert!(errors.contains_key("status"));
    }

    #[test]
    fn description_boundary() {
        let dto = CarTypeDto {
            description: "x".repeat(DESCRIPTION_MAX_CHARS),
            ..valid_dto()
        };
        assert!(dto.validate(true).is_empty());
    }

    #[test]
    fn normalizes_code_input() {
        assert_eq!(normalize_code("suv"), "SUV");
        assert_eq!(normalize_code("mini van!"), "MINIVAN");
        assert_eq!(normalize_code("limo_4x4"), "LIMO_X");
        assert_eq!(normalize_code(""), "");
    }

    #[test]
    fn update_payload_omits_code_when_immutable() {
        let dto = CarTypeDto {
            code: None,
            ..valid_dto()
        };
        let json = serde_json::to_string(&dto).unwrap();
        assert!(!json.contains("\"code\""));
    }
}
