use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::result::WatResultRow;
use crate::results::{ResultStore, StoredResult};
use crate::scoring::aggregator::TestAnalysis;

/// PostgreSQL-backed store over the `wat_results` table.
/// Rows are append-only; a retake is a new row.
#[derive(Clone)]
pub struct PgResultStore {
    pool: PgPool,
}

impl PgResultStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl From<WatResultRow> for StoredResult {
    fn from(row: WatResultRow) -> Self {
        StoredResult {
            result_id: row.id,
            user_id: row.user_id,
            created_at: row.created_at,
            analysis: row.analysis.0,
        }
    }
}

#[async_trait]
impl ResultStore for PgResultStore {
    async fn save(&self, user_id: Uuid, analysis: &TestAnalysis) -> Result<StoredResult, AppError> {
        let row: WatResultRow = sqlx::query_as(
            r#"
            INSERT INTO wat_results (id, user_id, overall_score, analysis)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, overall_score, analysis, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(analysis.overall_score as i32)
        .bind(Json(analysis))
        .fetch_one(&self.pool)
        .await?;

        info!("Stored WAT result {} for user {user_id}", row.id);
        Ok(row.into())
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<StoredResult>, AppError> {
        let rows: Vec<WatResultRow> = sqlx::query_as(
            "SELECT id, user_id, overall_score, analysis, created_at FROM wat_results WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(StoredResult::from).collect())
    }

    async fn get(&self, result_id: Uuid) -> Result<Option<StoredResult>, AppError> {
        let row: Option<WatResultRow> = sqlx::query_as(
            "SELECT id, user_id, overall_score, analysis, created_at FROM wat_results WHERE id = $1",
        )
        .bind(result_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(StoredResult::from))
    }
}
