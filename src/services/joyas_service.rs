use sqlx::PgPool;

use crate::db;
use crate::error::{AppError, AppResult};
use crate::models::{Joya, JoyaFilter, JoyasPage, LinkedJoya, ListJoyasQuery};

#[derive(Clone)]
pub struct JoyasService {
    pool: PgPool,
}

impl JoyasService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// One page of the inventory plus the total row count of the table.
    pub async fn list(&self, query: ListJoyasQuery) -> AppResult<JoyasPage> {
        let (joyas, total) = tokio::try_join!(
            db::list_joyas(&self.pool, &query),
            db::count_joyas(&self.pool),
        )
        .map_err(AppError::listing)?;

        tracing::debug!(
            "Listed {} of {} joyas (page={}, limits={}, order_by={})",
            joyas.len(),
            total,
            query.pagination.page,
            query.pagination.limits,
            query.order_by
        );

        Ok(JoyasPage {
            total,
            page: query.pagination.page,
            limits: query.pagination.limits,
            data: joyas.into_iter().map(LinkedJoya::from).collect(),
        })
    }

    pub async fn filter(&self, filter: JoyaFilter) -> AppResult<Vec<Joya>> {
        let joyas = db::filter_joyas(&self.pool, &filter)
            .await
            .map_err(AppError::filtering)?;

        if joyas.is_empty() {
            tracing::debug!("No joyas match {:?}", filter);
        }

        Ok(joyas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::unreachable_pool;
    use crate::error::{FILTER_ERROR_MESSAGE, LIST_ERROR_MESSAGE};

    #[tokio::test]
    async fn test_list_maps_store_failure() {
        let service = JoyasService::new(unreachable_pool());
        match service.list(ListJoyasQuery::default()).await {
            Err(AppError::Database { message, .. }) => assert_eq!(message, LIST_ERROR_MESSAGE),
            other => panic!("expected a database error, got {:?}", other.map(|p| p.total)),
        }
    }

    #[tokio::test]
    async fn test_filter_maps_store_failure() {
        let service = JoyasService::new(unreachable_pool());
        match service.filter(JoyaFilter::default()).await {
            Err(AppError::Database { message, .. }) => assert_eq!(message, FILTER_ERROR_MESSAGE),
            other => panic!("expected a database error, got {:?}", other),
        }
    }
}
