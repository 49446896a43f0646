use super::return_status::ReturnStatus;
use serde::Serialize;
use std::fmt;

/// One checkout record as stored in `checkout_records`.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutRecord {
    pub id: i64,                // ⇔ checkout_records.id (INTEGER PRIMARY KEY)
    pub name: String,           // ⇔ checkout_records.name
    pub gear: String,           // ⇔ checkout_records.gear
    pub checkout_date: String,  // ⇔ checkout_records.checkout_date (TEXT "YYYY-MM-DD")
    pub due_date: String,       // ⇔ checkout_records.due_date (TEXT "YYYY-MM-DD")
    pub returned: ReturnStatus, // ⇔ checkout_records.returned ('Yes' | 'No')
}

impl CheckoutRecord {
    /// The legacy composite key of this record.
    pub fn key(&self) -> RecordKey {
        RecordKey {
            name: self.name.clone(),
            gear: self.gear.clone(),
            checkout_date: self.checkout_date.clone(),
        }
    }
}

/// Validated field set ready for insert or update. Produced only by
/// `core::validate`, so a draft always holds non-empty, format-checked
/// values. Dates stay textual: the format check is fixed-width only,
/// not calendar-aware.
#[derive(Debug, Clone)]
pub struct RecordDraft {
    pub name: String,
    pub gear: String,
    pub checkout_date: String,
    pub due_date: String,
    pub returned: ReturnStatus,
}

/// Legacy composite lookup key (name, gear, checkout date).
/// Not unique: several records may share one key, and key-addressed
/// operations affect every matching row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordKey {
    pub name: String,
    pub gear: String,
    pub checkout_date: String,
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {} / {}", self.name, self.gear, self.checkout_date)
    }
}

/// How a mutation addresses rows: by surrogate id (exactly one row) or by
/// the legacy composite key (every matching row).
#[derive(Debug, Clone)]
pub enum RecordSelector {
    ById(i64),
    ByKey(RecordKey),
}

impl fmt::Display for RecordSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordSelector::ById(id) => write!(f, "record #{}", id),
            RecordSelector::ByKey(key) => write!(f, "key {}", key),
        }
    }
}
