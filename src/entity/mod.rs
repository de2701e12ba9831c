mod activity_category;
mod activity_error;
mod currency;
mod display_timestamp;
mod page_window;
mod record;
mod transaction;

pub use activity_category::ActivityCategory;
pub use activity_error::{ActivityError, DEFAULT_API_ERROR};
pub use currency::Currency;
pub use display_timestamp::{DisplayTimestamp, INVALID_DATE_LABEL};
pub use page_window::PageWindow;
pub use record::{
    AccountIdentifier, ActivityDetail, ActivityPage, RecordVariant, RecordViewModel, NO_CVU_LABEL,
};
pub use transaction::{Transaction, TransactionKind};
