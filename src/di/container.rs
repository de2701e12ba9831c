use std::sync::Arc;

use crate::config::Config;
use crate::interactor::activity_interactor::ActivityInteractorImpl;
use crate::presenter::activity_presenter::ActivityPresenterImpl;
use crate::repository::{ActivityRepository, HttpActivityRepository};
use crate::session::{EnvSession, SessionHandler};
use crate::view::activity_view::{ActivityView, TerminalActivityView};

/// ServiceContainer provides access to core application dependencies
pub struct ServiceContainer {
    activity_repository: Arc<dyn ActivityRepository + Send + Sync>,
    session: Arc<EnvSession>,

    // Configuration
    config: Config,
}

impl ServiceContainer {
    /// Create a new service container backed by the wallet REST API
    pub fn new(config: Config) -> Self {
        let activity_repository = Arc::new(HttpActivityRepository::from_config(&config))
            as Arc<dyn ActivityRepository + Send + Sync>;

        Self::with_repository(config, activity_repository)
    }

    /// Create a container around an existing repository
    pub fn with_repository(
        config: Config,
        activity_repository: Arc<dyn ActivityRepository + Send + Sync>,
    ) -> Self {
        Self {
            activity_repository,
            session: Arc::new(EnvSession::new()),
            config,
        }
    }

    pub fn activity_interactor(&self) -> Arc<ActivityInteractorImpl> {
        Arc::new(ActivityInteractorImpl::new(
            self.activity_repository.clone(),
            self.config.records_per_page,
            self.config.currency.clone(),
        ))
    }

    pub fn terminal_view(&self) -> Arc<TerminalActivityView> {
        Arc::new(TerminalActivityView::stdout(
            self.config.date_format.clone(),
            self.config.currency.clone(),
        ))
    }

    pub fn activity_presenter<V>(&self, view: Arc<V>) -> ActivityPresenterImpl<ActivityInteractorImpl, V>
    where
        V: ActivityView + 'static,
    {
        ActivityPresenterImpl::new(
            self.activity_interactor(),
            view,
            self.session.clone() as Arc<dyn SessionHandler>,
            self.config.notice_duration,
        )
    }

    pub fn session(&self) -> Arc<EnvSession> {
        self.session.clone()
    }
}
