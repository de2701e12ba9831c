pub mod activity_view;

pub use activity_view::{ActivityView, TerminalActivityView};
