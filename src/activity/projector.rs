use crate::activity::classifier::classify;
use crate::activity::date::normalize;
use crate::entity::{AccountIdentifier, PageWindow, RecordVariant, RecordViewModel, Transaction};

/// Turn the window's slice of an ordered list into view-models.
///
/// Window bounds are clamped to the list, so a short last page yields fewer
/// records. Input order is preserved.
pub fn project(transactions: &[Transaction], window: &PageWindow) -> Vec<RecordViewModel> {
    let end = window.end_index.min(transactions.len());
    let start = window.start_index.min(end);

    transactions[start..end].iter().map(to_record).collect()
}

pub fn to_record(transaction: &Transaction) -> RecordViewModel {
    RecordViewModel {
        category: classify(transaction.amount, &transaction.kind),
        identifier: AccountIdentifier::from_cvu(transaction.cvu.as_deref()),
        timestamp: normalize(&transaction.date),
        variant: RecordVariant::Transaction,
        transaction: transaction.clone(),
    }
}
