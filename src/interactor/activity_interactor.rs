use crate::activity::{get_activity_detail, get_activity_page};
use crate::entity::{ActivityDetail, ActivityPage, Currency};
use crate::repository::ActivityRepository;
use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

#[async_trait]
pub trait ActivityInteractor: Send + Sync {
    async fn get_activity_page(&self, user_id: i64, page_number: i64) -> Result<ActivityPage>;
    async fn get_activity_detail(&self, user_id: i64, activity_id: i64) -> Result<ActivityDetail>;
}

pub struct ActivityInteractorImpl {
    repository: Arc<dyn ActivityRepository + Send + Sync>,
    records_per_page: i64,
    currency: Currency,
}

impl ActivityInteractorImpl {
    pub fn new(
        repository: Arc<dyn ActivityRepository + Send + Sync>,
        records_per_page: i64,
        currency: Currency,
    ) -> Self {
        Self {
            repository,
            records_per_page,
            currency,
        }
    }
}

#[async_trait]
impl ActivityInteractor for ActivityInteractorImpl {
    async fn get_activity_page(&self, user_id: i64, page_number: i64) -> Result<ActivityPage> {
        // Repository errors pass through untouched so callers can spot Unauthorized
        let activities = self.repository.fetch_activities(user_id).await?;
        debug!("User {} has {} activities", user_id, activities.len());

        let page = get_activity_page(&activities, page_number, self.records_per_page)?;
        Ok(page)
    }

    async fn get_activity_detail(&self, user_id: i64, activity_id: i64) -> Result<ActivityDetail> {
        let activity = self.repository.fetch_activity(user_id, activity_id).await?;
        Ok(get_activity_detail(&activity, &self.currency))
    }
}
