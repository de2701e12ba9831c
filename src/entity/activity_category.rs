use serde::{Deserialize, Serialize};

/// Display category derived from a transaction's kind and amount sign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityCategory {
    TransferIn,
    TransferOut,
    Deposit,
}

impl ActivityCategory {
    /// Heading shown above the counterpart on the detail page
    pub fn detail_label(&self) -> &'static str {
        match self {
            ActivityCategory::TransferIn => "Detalle",
            ActivityCategory::TransferOut => "Detalle",
            ActivityCategory::Deposit => "Detalle",
        }
    }
}

impl std::fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivityCategory::TransferIn => write!(f, "transfer-in"),
            ActivityCategory::TransferOut => write!(f, "transfer-out"),
            ActivityCategory::Deposit => write!(f, "deposit"),
        }
    }
}
