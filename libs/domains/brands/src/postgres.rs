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
    error::{BrandError, BrandResult},
    models::{Brand, BrandSortField, CreateBrand},
    repository::BrandRepository,
};

#[derive(Clone)]
pub struct PgBrandRepository {
    db: DatabaseConnection,
}

impl PgBrandRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn sort_column(field: BrandSortField) -> entity::Column {
    match field {
        BrandSortField::Id => entity::Column::Id,
        BrandSortField::Name => entity::Column::Name,
        BrandSortField::CreatedAt => entity::Column::CreatedAt,
        BrandSortField::UpdatedAt => entity::Column::UpdatedAt,
    }
}

fn not_found_on_missing_row(id: i64) -> impl FnOnce(DbErr) -> BrandError {
    move |e| match e {
        DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => BrandError::NotFound(id),
        other => BrandError::Database(other),
    }
}

#[async_trait]
impl BrandRepository for PgBrandRepository {
    async fn count(&self) -> BrandResult<u64> {
        let count = entity::Entity::find()
            .filter(entity::Column::DeletedAt.is_null())
            .count(&self.db)
            .await?;

        Ok(count)
    }

    async fn find_all(&self, page: &PageRequest<BrandSortField>) -> BrandResult<Vec<Brand>> {
        let order: Order = page.sort.into();

        let models = entity::Entity::find()
            .filter(entity::Column::DeletedAt.is_null())
            .order_by(sort_column(page.sort_by), order.clone())
            .order_by(entity::Column::Id, order)
            .limit(page.limit())
            .offset(page.offset())
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> BrandResult<Option<Brand>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn create(&self, input: CreateBrand) -> BrandResult<Brand> {
        let now: DateTimeWithTimeZone = Utc::now().into();
        let txn = self.db.begin().await?;

        let model = entity::ActiveModel {
            name: Set(input.name),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        tracing::info!(brand_id = %model.id, "Created brand");
        Ok(model.into())
    }

    async fn update(&self, brand: Brand) -> BrandResult<Brand> {
        let id = brand.id;
        let txn = self.db.begin().await?;

        let model = entity::ActiveModel {
            id: Unchanged(id),
            name: Set(brand.name),
            updated_at: Set(Utc::now().into()),
            ..Default::default()
        }
        .update(&txn)
        .await
        .map_err(not_found_on_missing_row(id))?;

        txn.commit().await?;

        tracing::info!(brand_id = %id, "Updated brand");
        Ok(model.into())
    }

    async fn delete(&self, brand: &Brand) -> BrandResult<()> {
        let now: DateTimeWithTimeZone = Utc::now().into();
        let txn = self.db.begin().await?;

        entity::ActiveModel {
            id: Unchanged(brand.id),
            deleted_at: Set(Some(now)),
            updated_at: Set(now),
            ..Default::default()
        }
        .update(&txn)
        .await
        .map_err(not_found_on_missing_row(brand.id))?;

        txn.commit().await?;

        tracing::info!(brand_id = %brand.id, "Soft-deleted brand");
        Ok(())
    }
}
