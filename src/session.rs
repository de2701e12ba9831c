use anyhow::Result;
use async_trait::async_trait;
use log::warn;
use std::sync::atomic::{AtomicBool, Ordering};

/// Reacts to the backend rejecting the current credentials
#[async_trait]
pub trait SessionHandler: Send + Sync {
    async fn end_session(&self) -> Result<()>;
}

/// Session backed by a token read from the environment
#[derive(Default)]
pub struct EnvSession {
    ended: AtomicBool,
}

impl EnvSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_ended(&self) -> bool {
        self.ended.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SessionHandler for EnvSession {
    async fn end_session(&self) -> Result<()> {
        if !self.ended.swap(true, Ordering::SeqCst) {
            warn!("Access token rejected, session ended. Set a fresh WALLET_ACCESS_TOKEN to log in again");
        }
        Ok(())
    }
}
