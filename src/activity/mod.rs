pub mod classifier;
pub mod currency;
pub mod date;
pub mod paginator;
pub mod pipeline;
pub mod projector;
pub mod sorter;

pub use classifier::{classify, classify_strict};
pub use currency::format_currency;
pub use date::normalize;
pub use paginator::{page_from_query, page_query, paginate};
pub use pipeline::{get_activity_detail, get_activity_page};
pub use projector::project;
pub use sorter::sort_by_date;
