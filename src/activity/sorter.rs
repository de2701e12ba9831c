use crate::activity::date::normalize;
use crate::entity::Transaction;
use std::cmp::Ordering;

/// Order transactions most recent first.
///
/// The sort is stable: equal timestamps keep their input order, and
/// transactions with unparseable dates go last in input order.
pub fn sort_by_date(transactions: &[Transaction]) -> Vec<Transaction> {
    let mut keyed: Vec<_> = transactions
        .iter()
        .map(|tx| (normalize(&tx.date).instant(), tx))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    keyed.into_iter().map(|(_, tx)| tx.clone()).collect()
}
