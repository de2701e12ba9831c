pub mod activity_presenter;

pub use activity_presenter::{ActivityPresenter, ActivityPresenterImpl, PageState};
