//! Read-only persistence access: parameterized queries per entity table.
//! Identifiers come from `Entity` constants only; values are bound.

use crate::entity::Entity;
use crate::error::ApiError;
use sqlx::PgPool;

pub struct Repository;

impl Repository {
    /// Fetch every row of the entity's table, in storage order.
    pub async fn list<E: Entity>(pool: &PgPool) -> Result<Vec<E>, ApiError> {
        let sql = format!("SELECT {} FROM {}", E::COLUMNS, E::TABLE);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, E>(&sql).fetch_all(pool).await?;
        Ok(rows)
    }

    /// Fetch one row by primary key. Returns None when no row matches.
    pub async fn get_by_id<E: Entity>(pool: &PgPool, id: i32) -> Result<Option<E>, ApiError> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", E::COLUMNS, E::TABLE);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, E>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }
}
