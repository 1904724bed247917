//! Read-only statements against the `inventario` table.
//!
//! Rows are fetched as `to_jsonb(row)` so columns the service does not know
//! about reach the client verbatim.

use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::{Joya, JoyaFilter, ListJoyasQuery, OrderBy, SortField};

const COUNT_SQL: &str = "SELECT COUNT(*) FROM inventario";

const FILTER_SQL: &str = "SELECT to_jsonb(j) FROM inventario AS j \
     WHERE j.precio >= $1::float8 \
     AND ($2::float8 IS NULL OR j.precio <= $2::float8) \
     AND ($3::text IS NULL OR j.categoria = $3::text) \
     AND ($4::text IS NULL OR j.metal = $4::text) \
     ORDER BY j.id ASC";

/// Builds the listing statement. Only the validated sort identifiers are
/// spliced into the text; `LIMIT` and `OFFSET` stay bind parameters.
pub fn list_sql(order_by: &OrderBy) -> String {
    let mut order = format!("j.{}", order_by);
    if order_by.field != SortField::Id {
        // stable paging when the sort column has duplicates
        order.push_str(", j.id ASC");
    }
    format!(
        "SELECT to_jsonb(j) FROM inventario AS j ORDER BY {} LIMIT $1 OFFSET $2",
        order
    )
}

pub async fn list_joyas(pool: &PgPool, query: &ListJoyasQuery) -> Result<Vec<Joya>, sqlx::Error> {
    let sql = list_sql(&query.order_by);
    let rows = sqlx::query_scalar::<_, Json<Joya>>(&sql)
        .bind(query.pagination.limits)
        .bind(query.pagination.offset())
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(|Json(joya)| joya).collect())
}

pub async fn count_joyas(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(COUNT_SQL).fetch_one(pool).await
}

pub async fn filter_joyas(pool: &PgPool, filter: &JoyaFilter) -> Result<Vec<Joya>, sqlx::Error> {
    let rows = sqlx::query_scalar::<_, Json<Joya>>(FILTER_SQL)
        .bind(filter.precio_min)
        .bind(filter.precio_max)
        .bind(filter.categoria.as_deref())
        .bind(filter.metal.as_deref())
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(|Json(joya)| joya).collect())
}
