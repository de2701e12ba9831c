use chrono::{DateTime, Utc};

/// Placeholder rendered for dates the backend sent in an unknown format
pub const INVALID_DATE_LABEL: &str = "Fecha no válida";

/// Outcome of normalizing a raw transaction date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayTimestamp {
    Parsed(DateTime<Utc>),
    Unparseable,
}

impl DisplayTimestamp {
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        match self {
            DisplayTimestamp::Parsed(instant) => Some(*instant),
            DisplayTimestamp::Unparseable => None,
        }
    }

    pub fn is_parsed(&self) -> bool {
        matches!(self, DisplayTimestamp::Parsed(_))
    }

    /// Render with a chrono format pattern, or the placeholder label
    pub fn render(&self, pattern: &str) -> String {
        match self {
            DisplayTimestamp::Parsed(instant) => instant.format(pattern).to_string(),
            DisplayTimestamp::Unparseable => INVALID_DATE_LABEL.to_string(),
        }
    }
}
