use serde::{Deserialize, Serialize};

/// Binary record status shared by all catalog aggregates.
///
/// The backend serializes status as a plain integer (`1` active, `0`
/// inactive), so the enum round-trips through `u8` instead of a string tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum EntityStatus {
    Inactive,
    Active,
}

impl EntityStatus {
    pub fn is_active(self) -> bool {
        matches!(self, EntityStatus::Active)
    }

    pub fn as_u8(self) -> u8 {
        self.into()
    }
}

impl From<EntityStatus> for u8 {
    fn from(status: EntityStatus) -> u8 {
        match status {
            EntityStatus::Inactive => 0,
            EntityStatus::Active => 1,
        }
    }
}

impl TryFrom<u8> for EntityStatus {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(EntityStatus::Inactive),
            1 => Ok(EntityStatus::Active),
            other => Err(format!("invalid status value: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_integer() {
        assert_eq!(serde_json::to_string(&EntityStatus::Active).unwrap(), "1");
        assert_eq!(serde_json::to_string(&EntityStatus::Inactive).unwrap(), "0");
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(serde_json::from_str::<EntityStatus>("2").is_err());
        assert_eq!(
            serde_json::from_str::<EntityStatus>("1").unwrap(),
            EntityStatus::Active
        );
    }
}
