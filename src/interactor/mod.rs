pub mod activity_interactor;

pub use activity_interactor::{ActivityInteractor, ActivityInteractorImpl};
