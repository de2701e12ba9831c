use crate::entity::{ActivityCategory, ActivityError, TransactionKind};

/// Classify a transaction for display.
///
/// Transfers are split by amount sign (zero counts as outgoing). Deposits and
/// any unrecognized kind fall back to `Deposit`.
pub fn classify(amount: f64, kind: &TransactionKind) -> ActivityCategory {
    match kind {
        TransactionKind::Transfer if amount > 0.0 => ActivityCategory::TransferIn,
        TransactionKind::Transfer => ActivityCategory::TransferOut,
        TransactionKind::Deposit | TransactionKind::Unknown(_) => ActivityCategory::Deposit,
    }
}

/// Like [`classify`], but rejects unrecognized kinds instead of defaulting
pub fn classify_strict(amount: f64, kind: &TransactionKind) -> Result<ActivityCategory, ActivityError> {
    match kind {
        TransactionKind::Unknown(tag) => Err(ActivityError::UnknownTransactionType(tag.clone())),
        known => Ok(classify(amount, known)),
    }
}
