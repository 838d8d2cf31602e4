use crate::{error::AppResult, models::UsageRecord};
use sqlx::SqlitePool;

/// Persistent per-title usage counter
///
/// The ledger is the only shared mutable state in the service. Each
/// `record_usage` call must land exactly once even when calls for the same
/// name race each other.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait UsageLedger: Send + Sync {
    /// Increments the counter for `name`, creating it at 1 when absent.
    /// Names compare exactly (case-sensitive, no trimming).
    async fn record_usage(&self, name: &str) -> AppResult<()>;

    /// All records, highest count first; equal counts are ordered by name.
    async fn ranked_snapshot(&self) -> AppResult<Vec<UsageRecord>>;

    /// Current count for a single title
    async fn count_for(&self, name: &str) -> AppResult<Option<i64>>;
}

/// SQLite-backed ledger over the `lang (name, num)` table
#[derive(Clone)]
pub struct SqliteUsageLedger {
    pool: SqlitePool,
}

impl SqliteUsageLedger {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl UsageLedger for SqliteUsageLedger {
    async fn record_usage(&self, name: &str) -> AppResult<()> {
        // Single-statement upsert: no window where the row is missing or
        // incremented twice for one call.
        sqlx::query(
            "INSERT INTO lang (name, num) VALUES (?1, 1)
             ON CONFLICT(name) DO UPDATE SET num = num + 1",
        )
        .bind(name)
        .execute(&self.pool)
        .await?;

        tracing::debug!(title = %name, "Usage recorded");

        Ok(())
    }

    async fn ranked_snapshot(&self) -> AppResult<Vec<UsageRecord>> {
        let records = sqlx::query_as::<_, UsageRecord>(
            r#"SELECT name, num AS "count" FROM lang ORDER BY num DESC, name ASC"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    async fn count_for(&self, name: &str) -> AppResult<Option<i64>> {
        let count = sqlx::query_scalar::<_, i64>("SELECT num FROM lang WHERE name = ?1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        Ok(count)
    }
}
