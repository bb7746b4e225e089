use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::results::{ResultStore, StoredResult};
use crate::scoring::aggregator::TestAnalysis;

/// Process-local store. Contents are lost on restart.
#[derive(Default)]
pub struct InMemoryResultStore {
    results: RwLock<Vec<StoredResult>>,
}

impl InMemoryResultStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResultStore for InMemoryResultStore {
    async fn save(&self, user_id: Uuid, analysis: &TestAnalysis) -> Result<StoredResult, AppError> {
        let stored = StoredResult {
            result_id: Uuid::new_v4(),
            user_id,
            created_at: Utc::now(),
            analysis: analysis.clone(),
        };
        self.results.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<StoredResult>, AppError> {
        let results = self.results.read().await;
        // insertion order is chronological; reverse for newest first
        Ok(results
            .iter()
            .rev()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn get(&self, result_id: Uuid) -> Result<Option<StoredResult>, AppError> {
        let results = self.results.read().await;
        Ok(results.iter().find(|r| r.result_id == result_id).cloned())
    }
}
