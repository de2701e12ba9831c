//! Hand-written doubles shared by interactor and presenter tests

use crate::entity::{ActivityError, Transaction, TransactionKind};
use crate::repository::ActivityRepository;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::Mutex;

pub fn transfer(id: i64, amount: f64, date: &str) -> Transaction {
    Transaction::new(id, amount, TransactionKind::Transfer, date)
}

pub fn deposit(id: i64, amount: f64, date: &str) -> Transaction {
    Transaction::new(id, amount, TransactionKind::Deposit, date)
}

#[derive(Clone, Copy)]
pub enum Failure {
    Unauthorized,
    Server,
}

impl Failure {
    fn to_error(self) -> anyhow::Error {
        match self {
            Failure::Unauthorized => ActivityError::Unauthorized.into(),
            Failure::Server => ActivityError::Api {
                status: 500,
                message: "Internal Server Error".to_string(),
            }
            .into(),
        }
    }
}

/// Repository serving a fixed list, or failing every call
pub struct StubRepository {
    activities: Vec<Transaction>,
    failure: Option<Failure>,
    pub calls: Mutex<Vec<(i64, Option<i64>)>>,
}

impl StubRepository {
    pub fn with(activities: Vec<Transaction>) -> Self {
        Self {
            activities,
            failure: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(failure: Failure) -> Self {
        Self {
            activities: Vec::new(),
            failure: Some(failure),
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ActivityRepository for StubRepository {
    async fn fetch_activities(&self, user_id: i64) -> Result<Vec<Transaction>> {
        self.calls.lock().unwrap().push((user_id, None));
        match self.failure {
            Some(failure) => Err(failure.to_error()),
            None => Ok(self.activities.clone()),
        }
    }

    async fn fetch_activity(&self, user_id: i64, activity_id: i64) -> Result<Transaction> {
        self.calls.lock().unwrap().push((user_id, Some(activity_id)));
        if let Some(failure) = self.failure {
            return Err(failure.to_error());
        }
        self.activities
            .iter()
            .find(|tx| tx.id == activity_id)
            .cloned()
            .ok_or_else(|| {
                anyhow!(ActivityError::Api {
                    status: 404,
                    message: "Not Found".to_string(),
                })
            })
    }
}
