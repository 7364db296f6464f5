//! Generic soft-delete lifecycle shared by every user-facing table.
//!
//! Rows are never removed; deletion flips `is_deleted` and every read path
//! filters on it. The transition is one way, a deleted row stays deleted.

use std::marker::PhantomData;

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoSimpleExpr,
    PaginatorTrait, QueryFilter, QueryOrder,
};

/// Trait for entities that carry the soft-delete columns.
pub trait SoftDeletable: EntityTrait {
    /// Get the ID column for this entity
    fn id_column() -> impl ColumnTrait + IntoSimpleExpr;

    /// Get the column holding the soft-delete flag
    fn deleted_column() -> impl ColumnTrait + IntoSimpleExpr;

    /// Get the column representing when the entity was last updated
    fn updated_at_column() -> impl ColumnTrait + IntoSimpleExpr;
}

impl SoftDeletable for entity::user::Entity {
    fn id_column() -> impl ColumnTrait + IntoSimpleExpr {
        entity::user::Column::Id
    }

    fn deleted_column() -> impl ColumnTrait + IntoSimpleExpr {
        entity::user::Column::IsDeleted
    }

    fn updated_at_column() -> impl ColumnTrait + IntoSimpleExpr {
        entity::user::Column::UpdatedAt
    }
}

impl SoftDeletable for entity::address::Entity {
    fn id_column() -> impl ColumnTrait + IntoSimpleExpr {
        entity::address::Column::Id
    }

    fn deleted_column() -> impl ColumnTrait + IntoSimpleExpr {
        entity::address::Column::IsDeleted
    }

    fn updated_at_column() -> impl ColumnTrait + IntoSimpleExpr {
        entity::address::Column::UpdatedAt
    }
}

impl SoftDeletable for entity::shop::Entity {
    fn id_column() -> impl ColumnTrait + IntoSimpleExpr {
        entity::shop::Column::Id
    }

    fn deleted_column() -> impl ColumnTrait + IntoSimpleExpr {
        entity::shop::Column::IsDeleted
    }

    fn updated_at_column() -> impl ColumnTrait + IntoSimpleExpr {
        entity::shop::Column::UpdatedAt
    }
}

impl SoftDeletable for entity::material_stock::Entity {
    fn id_column() -> impl ColumnTrait + IntoSimpleExpr {
        entity::material_stock::Column::Id
    }

    fn deleted_column() -> impl ColumnTrait + IntoSimpleExpr {
        entity::material_stock::Column::IsDeleted
    }

    fn updated_at_column() -> impl ColumnTrait + IntoSimpleExpr {
        entity::material_stock::Column::UpdatedAt
    }
}

impl SoftDeletable for entity::profession::Entity {
    fn id_column() -> impl ColumnTrait + IntoSimpleExpr {
        entity::profession::Column::Id
    }

    fn deleted_column() -> impl ColumnTrait + IntoSimpleExpr {
        entity::profession::Column::IsDeleted
    }

    fn updated_at_column() -> impl ColumnTrait + IntoSimpleExpr {
        entity::profession::Column::UpdatedAt
    }
}

impl SoftDeletable for entity::job::Entity {
    fn id_column() -> impl ColumnTrait + IntoSimpleExpr {
        entity::job::Column::Id
    }

    fn deleted_column() -> impl ColumnTrait + IntoSimpleExpr {
        entity::job::Column::IsDeleted
    }

    fn updated_at_column() -> impl ColumnTrait + IntoSimpleExpr {
        entity::job::Column::UpdatedAt
    }
}

/// What a soft delete attempt found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoftDeleteOutcome {
    /// The row was active and has now been flagged deleted.
    Deleted,
    /// The row exists but was flagged deleted by an earlier request.
    AlreadyDeleted,
    /// No row with this ID exists.
    NotFound,
}

pub struct LifecycleRepository<'a, E> {
    db: &'a DatabaseConnection,
    entity: PhantomData<E>,
}

impl<'a, E> LifecycleRepository<'a, E>
where
    E: SoftDeletable + Send + Sync,
    <E as EntityTrait>::Model: Send + Sync,
{
    /// Creates a new instance of [`LifecycleRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            entity: PhantomData,
        }
    }

    /// Gets a row by ID, skipping soft-deleted rows
    pub async fn get_active(&self, id: i32) -> Result<Option<E::Model>, DbErr> {
        E::find()
            .filter(E::id_column().eq(id))
            .filter(E::deleted_column().eq(false))
            .one(self.db)
            .await
    }

    /// Lists all active rows in insertion order
    pub async fn list_active(&self) -> Result<Vec<E::Model>, DbErr> {
        E::find()
            .filter(E::deleted_column().eq(false))
            .order_by_asc(E::id_column())
            .all(self.db)
            .await
    }

    /// Checks whether a row with this ID exists, deleted or not
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = E::find()
            .filter(E::id_column().eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Flags an active row as deleted
    ///
    /// Only flips the flag when the row is currently active; a second call
    /// for the same ID reports [`SoftDeleteOutcome::AlreadyDeleted`].
    pub async fn soft_delete(&self, id: i32) -> Result<SoftDeleteOutcome, DbErr> {
        let result = E::update_many()
            .col_expr(E::deleted_column(), Expr::value(true))
            .col_expr(E::updated_at_column(), Expr::value(Utc::now().naive_utc()))
            .filter(E::id_column().eq(id))
            .filter(E::deleted_column().eq(false))
            .exec(self.db)
            .await?;

        if result.rows_affected > 0 {
            return Ok(SoftDeleteOutcome::Deleted);
        }

        if self.exists(id).await? {
            Ok(SoftDeleteOutcome::AlreadyDeleted)
        } else {
            Ok(SoftDeleteOutcome::NotFound)
        }
    }
}
