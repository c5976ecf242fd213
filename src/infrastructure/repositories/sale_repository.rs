//! SeaORM implementation of SaleRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::{DomainError, PurchaseRecord, Sale, SaleRepository};
use crate::models::movie;
use crate::models::sale::{ActiveModel, Column, Entity as SaleEntity};

/// SeaORM-based implementation of SaleRepository
pub struct SeaOrmSaleRepository {
    db: DatabaseConnection,
}

impl SeaOrmSaleRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SaleRepository for SeaOrmSaleRepository {
    async fn exists(&self, user_id: i32, movie_id: i32) -> Result<bool, DomainError> {
        let count = SaleEntity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::MovieId.eq(movie_id))
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }

    async fn create(
        &self,
        user_id: i32,
        movie_id: i32,
        unit_price: i32,
    ) -> Result<Sale, DomainError> {
        let sale = ActiveModel {
            user_id: Set(user_id),
            movie_id: Set(movie_id),
            unit_price: Set(unit_price),
            sale_date: Set(chrono::Utc::now().to_rfc3339()),
            ..Default::default()
        };

        // UNIQUE(user_id, movie_id) is the authoritative duplicate guard
        sale.insert(&self.db)
            .await
            .map_err(|e| DomainError::on_unique_violation(e, DomainError::AlreadyPurchased))
    }

    async fn history(&self, user_id: i32) -> Result<Vec<PurchaseRecord>, DomainError> {
        let rows = SaleEntity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::SaleDate)
            .order_by_desc(Column::Id)
            .find_also_related(movie::Entity)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(sale, movie)| PurchaseRecord {
                sale_id: sale.id,
                movie_id: sale.movie_id,
                title: movie
                    .map(|m| m.title)
                    .unwrap_or_else(|| "Unknown".to_string()),
                unit_price: sale.unit_price,
                sale_date: sale.sale_date,
            })
            .collect())
    }
}
