use crate::activity::classifier::classify;
use crate::activity::currency::format_currency;
use crate::activity::date::normalize;
use crate::activity::paginator::paginate;
use crate::activity::projector::project;
use crate::activity::sorter::sort_by_date;
use crate::entity::{
    AccountIdentifier, ActivityDetail, ActivityError, ActivityPage, Currency, Transaction,
};
use log::debug;

/// Sort, paginate and project one page of activity.
///
/// A page number past the last page is clamped to the last page.
pub fn get_activity_page(
    transactions: &[Transaction],
    page_number: i64,
    page_size: i64,
) -> Result<ActivityPage, ActivityError> {
    let sorted = sort_by_date(transactions);
    let total_count = sorted.len() as i64;

    let mut window = paginate(total_count, page_size, page_number)?;
    if window.total_pages == 0 && window.page_number > 1 {
        window = paginate(total_count, page_size, 1)?;
    } else if window.total_pages > 0 && window.page_number > window.total_pages {
        debug!(
            "Page {} out of range, clamping to {}",
            window.page_number, window.total_pages
        );
        window = paginate(total_count, page_size, window.total_pages as i64)?;
    }

    let records = project(&sorted, &window);
    debug!(
        "Projected {} of {} activities for page {}/{}",
        records.len(),
        total_count,
        window.page_number,
        window.total_pages
    );

    Ok(ActivityPage {
        records,
        page_number: window.page_number,
        total_pages: window.total_pages,
        has_multiple_pages: window.has_multiple_pages(),
    })
}

/// Classify and normalize a single activity for the detail page
pub fn get_activity_detail(transaction: &Transaction, currency: &Currency) -> ActivityDetail {
    ActivityDetail {
        id: transaction.id,
        category: classify(transaction.amount, &transaction.kind),
        display_timestamp: normalize(&transaction.date),
        display_amount: format_currency(transaction.amount.abs(), currency),
        name: transaction.name.clone(),
        destination: transaction.destination.clone(),
        identifier: AccountIdentifier::from_cvu(transaction.cvu.as_deref()),
    }
}
