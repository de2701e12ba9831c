pub mod activity;
pub mod config;
pub mod di;
pub mod entity;
pub mod interactor;
pub mod presenter;
pub mod repository;
pub mod services;
pub mod session;
pub mod view;

#[cfg(test)]
pub(crate) mod test_support;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Re-export commonly used items
pub use activity::*;
pub use config::Config;
pub use di::*;
pub use entity::*;
pub use interactor::*;
pub use presenter::*;
pub use repository::*;
pub use services::*;
pub use session::*;
pub use view::*;
