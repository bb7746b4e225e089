use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::scoring::aggregator::TestAnalysis;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WatResultRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub overall_score: i32,
    pub analysis: Json<TestAnalysis>,
    pub created_at: DateTime<Utc>,
}
