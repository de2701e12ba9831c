use crate::entity::{ActivityCategory, DisplayTimestamp, Transaction};

/// Fallback label for records without an account identifier
pub const NO_CVU_LABEL: &str = "No CVU available";

/// Account identifier shown next to a record, when the backend sent one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountIdentifier {
    HasIdentifier(String),
    NoIdentifier,
}

impl AccountIdentifier {
    /// Blank identifiers are treated as missing
    pub fn from_cvu(cvu: Option<&str>) -> Self {
        match cvu.map(str::trim) {
            Some(cvu) if !cvu.is_empty() => AccountIdentifier::HasIdentifier(cvu.to_string()),
            _ => AccountIdentifier::NoIdentifier,
        }
    }

    pub fn label(&self) -> String {
        match self {
            AccountIdentifier::HasIdentifier(cvu) => format!("CVU: {}", cvu),
            AccountIdentifier::NoIdentifier => NO_CVU_LABEL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordVariant {
    #[default]
    Transaction,
}

/// Presentation-ready projection of a single transaction
#[derive(Debug, Clone, PartialEq)]
pub struct RecordViewModel {
    pub transaction: Transaction,
    pub category: ActivityCategory,
    pub identifier: AccountIdentifier,
    pub timestamp: DisplayTimestamp,
    pub variant: RecordVariant,
}

impl RecordViewModel {
    pub fn id(&self) -> i64 {
        self.transaction.id
    }
}

/// One page of the activity list
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityPage {
    pub records: Vec<RecordViewModel>,
    pub page_number: usize,
    pub total_pages: usize,
    pub has_multiple_pages: bool,
}

impl ActivityPage {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Single activity prepared for the detail page
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityDetail {
    pub id: i64,
    pub category: ActivityCategory,
    pub display_timestamp: DisplayTimestamp,
    pub display_amount: String,
    pub name: Option<String>,
    pub destination: Option<String>,
    pub identifier: AccountIdentifier,
}
