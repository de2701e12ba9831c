use log::debug;
use std::future::Future;
use std::time::Duration;
use tokio::select;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::sleep;

/// One-shot timer that dismisses a status notice after a delay.
///
/// The timer is tied to its owner: stopping or dropping it cancels the
/// pending callback, so nothing runs after the owner is gone.
pub struct NoticeTimer {
    stop_tx: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl NoticeTimer {
    /// Schedule `on_expire` to run once after `duration`
    pub fn start<F, Fut>(duration: Duration, on_expire: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let (stop_tx, stop_rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(async move {
            select! {
                _ = sleep(duration) => {
                    debug!("Notice expired after {:?}", duration);
                    on_expire().await;
                }
                _ = stop_rx => {
                    debug!("Notice timer cancelled");
                }
            }
        });

        Self {
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        }
    }

    /// Cancel the pending dismissal, if it has not fired yet
    pub fn stop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, JoinHandle::is_finished)
    }
}

impl Drop for NoticeTimer {
    fn drop(&mut self) {
        self.stop();
    }
}
