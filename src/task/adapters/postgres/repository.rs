//! `PostgreSQL` store implementation for task lifecycle storage.

use super::{
    models::{TaskRow, TaskUpsertRow},
    schema::tasks,
};
use crate::platform::{GuildId, UserId};
use crate::task::{
    domain::{PersistedTaskData, Task, TaskId, TaskStatus, TaskTitle},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task store.
#[derive(Debug, Clone)]
pub struct PostgresTaskStore {
    pool: TaskPgPool,
}

impl PostgresTaskStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskStoreError::unavailable)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskStoreError::unavailable)?
    }
}

#[async_trait]
impl TaskStore for PostgresTaskStore {
    async fn get_task(&self, guild_id: GuildId, task_id: TaskId) -> TaskStoreResult<Option<Task>> {
        let guild_key = snowflake_key(guild_id.value())?;
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::guild_id.eq(guild_key))
                .filter(tasks::id.eq(task_id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskStoreError::unavailable)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn list_tasks(&self, guild_id: GuildId) -> TaskStoreResult<Vec<Task>> {
        let guild_key = snowflake_key(guild_id.value())?;
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::guild_id.eq(guild_key))
                .order(tasks::created_at.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskStoreError::unavailable)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn put_task(&self, task: &Task) -> TaskStoreResult<()> {
        let row = to_upsert_row(task)?;
        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&row)
                .on_conflict((tasks::guild_id, tasks::id))
                .do_update()
                .set(&row)
                .execute(connection)
                .map_err(TaskStoreError::unavailable)?;
            Ok(())
        })
        .await
    }
}

/// Converts a validated snowflake to its schema representation.
fn snowflake_key(value: u64) -> TaskStoreResult<i64> {
    i64::try_from(value).map_err(TaskStoreError::unavailable)
}

fn to_upsert_row(task: &Task) -> TaskStoreResult<TaskUpsertRow> {
    Ok(TaskUpsertRow {
        guild_id: snowflake_key(task.guild_id().value())?,
        id: task.id().into_inner(),
        owner_id: snowflake_key(task.owner_id().value())?,
        title: task.title().as_str().to_owned(),
        description: task.description().map(ToOwned::to_owned),
        due_date: task.due_date(),
        status: task.status().as_str().to_owned(),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    })
}

fn row_to_task(row: TaskRow) -> TaskStoreResult<Task> {
    let TaskRow {
        guild_id: persisted_guild,
        id,
        owner_id: persisted_owner,
        title: persisted_title,
        description,
        due_date,
        status: persisted_status,
        created_at,
        updated_at,
    } = row;

    let guild_id = snowflake_from_row(persisted_guild, GuildId::new)?;
    let owner_id = snowflake_from_row(persisted_owner, UserId::new)?;
    let title = TaskTitle::new(persisted_title).map_err(TaskStoreError::unavailable)?;
    let status =
        TaskStatus::try_from(persisted_status.as_str()).map_err(TaskStoreError::unavailable)?;

    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::from_uuid(id),
        guild_id,
        owner_id,
        title,
        description,
        due_date,
        status,
        created_at,
        updated_at,
    }))
}

/// Restores a validated snowflake newtype from its schema representation.
fn snowflake_from_row<T, E>(
    value: i64,
    construct: impl FnOnce(u64) -> Result<T, E>,
) -> TaskStoreResult<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    let raw = u64::try_from(value).map_err(TaskStoreError::unavailable)?;
    construct(raw).map_err(TaskStoreError::unavailable)
}
