//! Result persistence — stores scored WAT attempts against a user.
//!
//! The scoring engine never stores anything itself; handlers hand finished
//! analyses to whichever `ResultStore` `AppState` carries.
//! Default backend: `PgResultStore` when `DATABASE_URL` is set, otherwise
//! `InMemoryResultStore`.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::scoring::aggregator::TestAnalysis;

pub use memory::InMemoryResultStore;
pub use postgres::PgResultStore;

/// A persisted test analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredResult {
    pub result_id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub analysis: TestAnalysis,
}

#[async_trait]
pub trait ResultStore: Send + Sync {
    async fn save(&self, user_id: Uuid, analysis: &TestAnalysis) -> Result<StoredResult, AppError>;

    /// All results for a user, newest first.
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<StoredResult>, AppError>;

    async fn get(&self, result_id: Uuid) -> Result<Option<StoredResult>, AppError>;
}
