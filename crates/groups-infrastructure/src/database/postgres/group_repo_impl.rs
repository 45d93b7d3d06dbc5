// ============================================================================
// Groups Infrastructure - PostgreSQL Group Repository
// File: crates/groups-infrastructure/src/database/postgres/group_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::{error, info};

use groups_core::domain::{Group, NewGroup};
use groups_core::error::DomainError;
use groups_core::repositories::GroupRepository;
use groups_shared::GroupId;

pub struct PgGroupRepository {
    pool: PgPool,
}

impl PgGroupRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct GroupRow {
    pub id: i64,
    pub name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<GroupRow> for Group {
    fn from(row: GroupRow) -> Self {
        Group {
            id: row.id,
            name: row.name,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// The unique constraint on `name` is the final arbiter when two writers race
/// past the existence pre-check.
fn map_write_error(e: sqlx::Error, name: &str) -> DomainError {
    let unique_violation = e
        .as_database_error()
        .map(|db| db.is_unique_violation())
        .unwrap_or(false);

    if unique_violation {
        DomainError::GroupNameAlreadyExists(name.to_string())
    } else {
        DomainError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl GroupRepository for PgGroupRepository {
    async fn find_by_id(&self, id: GroupId) -> Result<Option<Group>, DomainError> {
        let row: Option<GroupRow> = sqlx::query_as(
            r#"
            SELECT id, name, is_active, created_at, updated_at
            FROM groups
            WHERE id = $1
            "#
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding group by id: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, DomainError> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM groups WHERE name = $1)")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error checking group name: {}", e);
                DomainError::DatabaseError(e.to_string())
            })
    }

    async fn exists_by_name_excluding_id(&self, name: &str, id: GroupId) -> Result<bool, DomainError> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM groups WHERE name = $1 AND id <> $2)")
            .bind(name)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e: sqlx::Error| {
                error!("Database error checking group name: {}", e);
                DomainError::DatabaseError(e.to_string())
            })
    }

    async fn find_all(&self) -> Result<Vec<Group>, DomainError> {
        let rows: Vec<GroupRow> = sqlx::query_as(
            r#"
            SELECT id, name, is_active, created_at, updated_at
            FROM groups
            ORDER BY id
            "#
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing groups: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Group::from).collect())
    }

    async fn create(&self, group: &NewGroup) -> Result<Group, DomainError> {
        info!("Creating group: {}", group.name);

        let row: GroupRow = sqlx::query_as(
            r#"
            INSERT INTO groups (name, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, is_active, created_at, updated_at
            "#
        )
        .bind(&group.name)
        .bind(group.is_active)
        .bind(group.created_at)
        .bind(group.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error creating group: {}", e);
            map_write_error(e, &group.name)
        })?;

        info!("Group created successfully: {}", row.id);
        Ok(row.into())
    }

    async fn update(&self, group: &Group) -> Result<Group, DomainError> {
        let row: Option<GroupRow> = sqlx::query_as(
            r#"
            UPDATE groups
            SET
                name = $2,
                is_active = $3,
                updated_at = $4
            WHERE id = $1
            RETURNING id, name, is_active, created_at, updated_at
            "#
        )
        .bind(group.id)
        .bind(&group.name)
        .bind(group.is_active)
        .bind(group.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error updating group: {}", e);
            map_write_error(e, &group.name)
        })?;

        row.map(Group::from)
            .ok_or(DomainError::GroupNotFound(group.id))
    }

    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e: sqlx::Error| DomainError::DatabaseError(e.to_string()))
    }
}
