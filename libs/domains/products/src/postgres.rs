use async_trait::async_trait;
use chrono::Utc;
use database::PageRequest;
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, Order,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::{CreateProduct, Product, ProductSortField},
    repository::ProductRepository,
};

#[derive(Clone)]
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ProductSortField {
    fn column(self) -> entity::Column {
        match self {
            ProductSortField::Id => entity::Column::Id,
            ProductSortField::Name => entity::Column::Name,
            ProductSortField::Price => entity::Column::Price,
            ProductSortField::Qty => entity::Column::Qty,
            ProductSortField::BrandId => entity::Column::BrandId,
            ProductSortField::CreatedAt => entity::Column::CreatedAt,
            ProductSortField::UpdatedAt => entity::Column::UpdatedAt,
        }
    }
}

fn map_write_error(id: i64, err: DbErr) -> ProductError {
    match err {
        DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => ProductError::NotFound(id),
        other => ProductError::Database(other),
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn count(&self) -> ProductResult<u64> {
        Ok(entity::Entity::find()
            .filter(entity::Column::DeletedAt.is_null())
            .count(&self.db)
            .await?)
    }

    async fn find_all(
        &self,
        page: &PageRequest<ProductSortField>,
    ) -> ProductResult<Vec<Product>> {
        let order: Order = page.sort.into();

        let models = entity::Entity::find()
            .filter(entity::Column::DeletedAt.is_null())
            .order_by(page.sort_by.column(), order.clone())
            .order_by(entity::Column::Id, order)
            .limit(page.limit())
            .offset(page.offset())
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let now: DateTimeWithTimeZone = Utc::now().into();
        let txn = self.db.begin().await?;

        let model = entity::ActiveModel {
            name: Set(input.name),
            price: Set(input.price),
            qty: Set(input.qty),
            brand_id: Set(input.brand_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        tracing::info!(product_id = %model.id, brand_id = %model.brand_id, "Created product");
        Ok(model.into())
    }

    async fn update(&self, product: Product) -> ProductResult<Product> {
        let id = product.id;
        let txn = self.db.begin().await?;

        let model = entity::ActiveModel {
            id: Unchanged(id),
            name: Set(product.name),
            price: Set(product.price),
            qty: Set(product.qty),
            brand_id: Set(product.brand_id),
            updated_at: Set(Utc::now().into()),
            ..Default::default()
        }
        .update(&txn)
        .await
        .map_err(|e| map_write_error(id, e))?;

        txn.commit().await?;

        tracing::info!(product_id = %id, "Updated product");
        Ok(model.into())
    }

    async fn delete(&self, product: &Product) -> ProductResult<()> {
        let now: DateTimeWithTimeZone = Utc::now().into();
        let txn = self.db.begin().await?;

        entity::ActiveModel {
            id: Unchanged(product.id),
            deleted_at: Set(Some(now)),
            updated_at: Set(now),
            ..Default::default()
        }
        .update(&txn)
        .await
        .map_err(|e| map_write_error(product.id, e))?;

        txn.commit().await?;

        tracing::info!(product_id = %product.id, "Soft-deleted product");
        Ok(())
    }
}
