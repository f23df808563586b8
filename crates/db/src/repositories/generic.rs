//! Generic repository over a single entity type.
//!
//! A `Repository` is a lightweight handle bound to one unit-of-work
//! transaction. Mutations execute inside that open transaction and count
//! toward the unit of work's staged-change tally; nothing is durable until
//! the unit of work commits.

use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, Condition, DatabaseTransaction, DbErr, EntityTrait,
    IntoActiveModel, ModelTrait, PaginatorTrait, PrimaryKeyTrait, QueryFilter, QuerySelect,
};

/// Generic CRUD and predicate-query wrapper over one entity type.
pub struct Repository<'uow, E: EntityTrait> {
    txn: &'uow DatabaseTransaction,
    staged: &'uow AtomicU64,
    entity: PhantomData<E>,
}

impl<'uow, E: EntityTrait> Repository<'uow, E> {
    pub(crate) const fn new(txn: &'uow DatabaseTransaction, staged: &'uow AtomicU64) -> Self {
        Self {
            txn,
            staged,
            entity: PhantomData,
        }
    }

    /// Returns all rows of the entity.
    pub async fn get_all(&self) -> Result<Vec<E::Model>, DbErr> {
        E::find().all(self.txn).await
    }

    /// Returns all rows with the named relationship eagerly resolved.
    pub async fn get_all_including<R>(&self) -> Result<Vec<(E::Model, Option<R::Model>)>, DbErr>
    where
        R: EntityTrait + Default,
        E: sea_orm::Related<R>,
    {
        E::find().find_also_related(R::default()).all(self.txn).await
    }

    /// Returns the row with the given identifier, if any.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<E::Model>, DbErr>
    where
        <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
    {
        E::find_by_id(id).one(self.txn).await
    }

    /// Returns all rows matching the condition.
    pub async fn find(&self, condition: Condition) -> Result<Vec<E::Model>, DbErr> {
        E::find().filter(condition).all(self.txn).await
    }

    /// Returns all rows matching the condition with the named relationship
    /// eagerly resolved.
    pub async fn find_including<R>(
        &self,
        condition: Condition,
    ) -> Result<Vec<(E::Model, Option<R::Model>)>, DbErr>
    where
        R: EntityTrait + Default,
        E: sea_orm::Related<R>,
    {
        E::find()
            .find_also_related(R::default())
            .filter(condition)
            .all(self.txn)
            .await
    }

    /// Returns the single row matching the condition, or `None`.
    ///
    /// This is a contract of exactly zero or one: more than one match is an
    /// error, not a first-match pick.
    pub async fn single(&self, condition: Condition) -> Result<Option<E::Model>, DbErr> {
        let mut rows = E::find().filter(condition).limit(2).all(self.txn).await?;
        if rows.len() > 1 {
            return Err(DbErr::Custom(
                "single: more than one row matched the condition".to_string(),
            ));
        }
        Ok(rows.pop())
    }

    /// Returns whether any row matches the condition.
    pub async fn any(&self, condition: Condition) -> Result<bool, DbErr>
    where
        E::Model: Sync,
    {
        Ok(self.count(condition).await? > 0)
    }

    /// Returns the number of rows matching the condition.
    pub async fn count(&self, condition: Condition) -> Result<u64, DbErr>
    where
        E::Model: Sync,
    {
        E::find().filter(condition).count(self.txn).await
    }
}

impl<E> Repository<'_, E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: ActiveModelBehavior + Send,
{
    /// Stages a row for insert and returns the stored row.
    pub async fn add(&self, entity: E::ActiveModel) -> Result<E::Model, DbErr> {
        let model = entity.insert(self.txn).await?;
        self.staged.fetch_add(1, Ordering::Relaxed);
        Ok(model)
    }

    /// Stages a collection of rows for insert.
    ///
    /// An empty collection is rejected as invalid input.
    pub async fn add_many(&self, entities: Vec<E::ActiveModel>) -> Result<u64, DbErr> {
        if entities.is_empty() {
            return Err(DbErr::Custom(
                "add_many: cannot insert an empty collection".to_string(),
            ));
        }
        let count = entities.len() as u64;
        E::insert_many(entities).exec(self.txn).await?;
        self.staged.fetch_add(count, Ordering::Relaxed);
        Ok(count)
    }

    /// Stages a full overwrite of the row identified by the model's key.
    ///
    /// Callers set every persisted field; unset fields keep their stored
    /// value.
    pub async fn update(&self, entity: E::ActiveModel) -> Result<E::Model, DbErr> {
        let model = entity.update(self.txn).await?;
        self.staged.fetch_add(1, Ordering::Relaxed);
        Ok(model)
    }

    /// Stages a row for delete, returning the number of rows affected.
    pub async fn remove(&self, entity: E::Model) -> Result<u64, DbErr> {
        let result = entity.delete(self.txn).await?;
        self.staged.fetch_add(result.rows_affected, Ordering::Relaxed);
        Ok(result.rows_affected)
    }

    /// Stages a collection of rows for delete, returning the total number
    /// of rows affected.
    pub async fn remove_many(&self, entities: Vec<E::Model>) -> Result<u64, DbErr> {
        let mut total = 0;
        for entity in entities {
            total += self.remove(entity).await?;
        }
        Ok(total)
    }
}
