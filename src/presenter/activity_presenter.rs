use crate::entity::ActivityError;
use crate::interactor::activity_interactor::ActivityInteractor;
use crate::services::notice::NoticeTimer;
use crate::session::SessionHandler;
use crate::view::activity_view::ActivityView;
use anyhow::Result;
use async_trait::async_trait;
use log::{error, warn};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const FETCH_FAILED_NOTICE: &str = "No pudimos cargar tu actividad";

/// Lifecycle of the activity page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageState {
    #[default]
    Loading,
    Loaded,
    Failed,
}

#[async_trait]
pub trait ActivityPresenter: Send + Sync {
    async fn show_activity(&self, user_id: i64, page_number: i64) -> Result<()>;
    async fn show_activity_detail(&self, user_id: i64, activity_id: i64) -> Result<()>;
    fn state(&self) -> PageState;
}

pub struct ActivityPresenterImpl<I, V> {
    interactor: Arc<I>,
    view: Arc<V>,
    session: Arc<dyn SessionHandler>,
    state: Mutex<PageState>,
    notice_duration: Duration,
    notice: Mutex<Option<NoticeTimer>>,
}

impl<I, V> ActivityPresenterImpl<I, V>
where
    I: ActivityInteractor,
    V: ActivityView + 'static,
{
    pub fn new(
        interactor: Arc<I>,
        view: Arc<V>,
        session: Arc<dyn SessionHandler>,
        notice_duration: Duration,
    ) -> Self {
        Self {
            interactor,
            view,
            session,
            state: Mutex::new(PageState::Loading),
            notice_duration,
            notice: Mutex::new(None),
        }
    }

    fn set_state(&self, state: PageState) {
        if let Ok(mut current) = self.state.lock() {
            *current = state;
        }
    }

    async fn handle_failure(&self, e: anyhow::Error) -> Result<()> {
        self.set_state(PageState::Failed);

        match e.downcast_ref::<ActivityError>() {
            Some(ActivityError::Unauthorized) => {
                warn!("Activity request unauthorized, ending session");
                self.session.end_session().await?;
            }
            Some(ActivityError::InvalidArgument(_)) => {
                self.view.display_error(e.to_string()).await?;
                return Ok(());
            }
            _ => {
                error!("Error fetching activities: {}", e);
                self.view.display_empty().await?;
                return self.show_notice(FETCH_FAILED_NOTICE).await;
            }
        }

        self.view.display_empty().await
    }

    // Replacing the stored timer drops, and so cancels, the previous one
    async fn show_notice(&self, text: &str) -> Result<()> {
        self.view.display_notice(text.to_string()).await?;

        let view = self.view.clone();
        let timer = NoticeTimer::start(self.notice_duration, move || async move {
            if let Err(e) = view.clear_notice().await {
                warn!("Failed to clear notice: {}", e);
            }
        });

        if let Ok(mut slot) = self.notice.lock() {
            *slot = Some(timer);
        }
        Ok(())
    }
}

#[async_trait]
impl<I, V> ActivityPresenter for ActivityPresenterImpl<I, V>
where
    I: ActivityInteractor + Send + Sync,
    V: ActivityView + Send + Sync + 'static,
{
    async fn show_activity(&self, user_id: i64, page_number: i64) -> Result<()> {
        self.set_state(PageState::Loading);
        self.view.display_loading().await?;

        match self.interactor.get_activity_page(user_id, page_number).await {
            Ok(page) => {
                self.set_state(PageState::Loaded);
                if page.is_empty() {
                    self.view.display_empty().await?;
                } else {
                    self.view.display_page(page).await?;
                }
                Ok(())
            }
            Err(e) => self.handle_failure(e).await,
        }
    }

    async fn show_activity_detail(&self, user_id: i64, activity_id: i64) -> Result<()> {
        self.set_state(PageState::Loading);
        self.view.display_loading().await?;

        match self.interactor.get_activity_detail(user_id, activity_id).await {
            Ok(detail) => {
                self.set_state(PageState::Loaded);
                self.view.display_detail(detail).await
            }
            Err(e) => self.handle_failure(e).await,
        }
    }

    fn state(&self) -> PageState {
        self.state.lock().map(|state| *state).unwrap_or(PageState::Failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{ActivityDetail, ActivityPage, Currency};
    use crate::interactor::activity_interactor::ActivityInteractorImpl;
    use crate::session::EnvSession;
    use crate::test_support::{deposit, transfer, Failure, StubRepository};

    #[derive(Debug, PartialEq)]
    enum Shown {
        Loading,
        Page(Vec<i64>),
        Detail(i64),
        Empty,
        Error,
        Notice,
        NoticeCleared,
    }

    #[derive(Default)]
    struct RecordingView {
        shown: Mutex<Vec<Shown>>,
    }

    impl RecordingView {
        fn shown(&self) -> Vec<Shown> {
            std::mem::take(&mut *self.shown.lock().unwrap())
        }
    }

    #[async_trait]
    impl ActivityView for RecordingView {
        async fn display_loading(&self) -> Result<()> {
            self.shown.lock().unwrap().push(Shown::Loading);
            Ok(())
        }

        async fn display_page(&self, page: ActivityPage) -> Result<()> {
            let ids = page.records.iter().map(|r| r.id()).collect();
            self.shown.lock().unwrap().push(Shown::Page(ids));
            Ok(())
        }

        async fn display_detail(&self, detail: ActivityDetail) -> Result<()> {
            self.shown.lock().unwrap().push(Shown::Detail(detail.id));
            Ok(())
        }

        async fn display_empty(&self) -> Result<()> {
            self.shown.lock().unwrap().push(Shown::Empty);
            Ok(())
        }

        async fn display_error(&self, _error_message: String) -> Result<()> {
            self.shown.lock().unwrap().push(Shown::Error);
            Ok(())
        }

        async fn display_notice(&self, _text: String) -> Result<()> {
            self.shown.lock().unwrap().push(Shown::Notice);
            Ok(())
        }

        async fn clear_notice(&self) -> Result<()> {
            self.shown.lock().unwrap().push(Shown::NoticeCleared);
            Ok(())
        }
    }

    fn setup(
        repository: StubRepository,
    ) -> (
        ActivityPresenterImpl<ActivityInteractorImpl, RecordingView>,
        Arc<RecordingView>,
        Arc<EnvSession>,
    ) {
        let interactor = Arc::new(ActivityInteractorImpl::new(
            Arc::new(repository),
            10,
            Currency::argentina(),
        ));
        let view = Arc::new(RecordingView::default());
        let session = Arc::new(EnvSession::new());
        let presenter = ActivityPresenterImpl::new(
            interactor,
            view.clone(),
            session.clone(),
            Duration::from_secs(3),
        );
        (presenter, view, session)
    }

    #[tokio::test]
    async fn shows_loaded_page() {
        let (presenter, view, session) = setup(StubRepository::with(vec![
            deposit(1, 10.0, "2024-01-01"),
            transfer(2, -5.0, "2024-01-02"),
        ]));

        presenter.show_activity(1, 1).await.unwrap();

        assert_eq!(view.shown(), vec![Shown::Loading, Shown::Page(vec![2, 1])]);
        assert_eq!(presenter.state(), PageState::Loaded);
        assert!(!session.is_ended());
    }

    #[tokio::test]
    async fn shows_empty_state_without_activity() {
        let (presenter, view, _) = setup(StubRepository::with(Vec::new()));

        presenter.show_activity(1, 1).await.unwrap();

        assert_eq!(view.shown(), vec![Shown::Loading, Shown::Empty]);
        assert_eq!(presenter.state(), PageState::Loaded);
    }

    #[tokio::test]
    async fn unauthorized_ends_session() {
        let (presenter, view, session) = setup(StubRepository::failing(Failure::Unauthorized));

        presenter.show_activity(1, 1).await.unwrap();

        assert!(session.is_ended());
        assert_eq!(view.shown(), vec![Shown::Loading, Shown::Empty]);
        assert_eq!(presenter.state(), PageState::Failed);
    }

    #[tokio::test(start_paused = true)]
    async fn other_failures_keep_session_and_flash_notice() {
        let (presenter, view, session) = setup(StubRepository::failing(Failure::Server));

        presenter.show_activity(1, 1).await.unwrap();

        assert!(!session.is_ended());
        assert_eq!(view.shown(), vec![Shown::Loading, Shown::Empty, Shown::Notice]);
        assert_eq!(presenter.state(), PageState::Failed);

        tokio::time::sleep(Duration::from_secs(4)).await;
        assert_eq!(view.shown(), vec![Shown::NoticeCleared]);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_presenter_cancels_notice() {
        let (presenter, view, _) = setup(StubRepository::failing(Failure::Server));

        presenter.show_activity(1, 1).await.unwrap();
        view.shown();
        drop(presenter);

        tokio::time::sleep(Duration::from_secs(4)).await;
        assert!(view.shown().is_empty());
    }

    #[tokio::test]
    async fn invalid_page_is_reported() {
        let (presenter, view, _) = setup(StubRepository::with(vec![deposit(1, 1.0, "2024-01-01")]));

        presenter.show_activity(1, -1).await.unwrap();

        assert_eq!(view.shown(), vec![Shown::Loading, Shown::Error]);
        assert_eq!(presenter.state(), PageState::Failed);
    }

    #[tokio::test]
    async fn shows_detail_and_handles_unauthorized_detail() {
        let (presenter, view, _) = setup(StubRepository::with(vec![transfer(3, 9.0, "2024-01-01")]));
        presenter.show_activity_detail(1, 3).await.unwrap();
        assert_eq!(view.shown(), vec![Shown::Loading, Shown::Detail(3)]);

        let (presenter, _, session) = setup(StubRepository::failing(Failure::Unauthorized));
        presenter.show_activity_detail(1, 3).await.unwrap();
        assert!(session.is_ended());
    }
}
