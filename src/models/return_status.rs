use serde::Serialize;

/// Whether a checked-out item has come back.
/// Stored in the database as the canonical text 'Yes' / 'No'.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum ReturnStatus {
    Yes,
    No,
}

impl ReturnStatus {
    /// Parse user input. Case-insensitive: "yes", "NO", "Yes" all work.
    pub fn from_input(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "yes" => Some(Self::Yes),
            "no" => Some(Self::No),
            _ => None,
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            ReturnStatus::Yes => "Yes",
            ReturnStatus::No => "No",
        }
    }

    /// Convert DB string → enum. Only the canonical spelling is stored.
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Yes" => Some(ReturnStatus::Yes),
            "No" => Some(ReturnStatus::No),
            _ => None,
        }
    }

    pub fn is_returned(&self) -> bool {
        matches!(self, ReturnStatus::Yes)
    }
}
