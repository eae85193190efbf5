use super::SourceStore;
use crate::error::{Error, Result};
use crate::models::{Source, SubSource};
use crate::schema::{sources, sub_sources};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use diesel::{
    prelude::*,
    r2d2::{ConnectionManager, Pool as _Pool},
};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

pub type Pool = _Pool<ConnectionManager<PgConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub fn migrate(db_pool: &Pool) -> Result<()> {
    let mut connection = db_pool.get()?;
    connection
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| Error::DbError(e.to_string()))?;
    Ok(())
}

#[derive(Queryable, Debug)]
struct SourceRow {
    id: String,
    name: String,
    domain: String,
    created_at: NaiveDateTime,
    deleted_at: Option<NaiveDateTime>,
}

impl From<SourceRow> for Source {
    fn from(row: SourceRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            domain: row.domain,
            created_at: row.created_at.and_utc(),
            deleted_at: row.deleted_at.into(),
        }
    }
}

#[derive(Queryable, Debug)]
struct SubSourceRow {
    id: String,
    name: String,
    external_identifier: String,
    avatar_url: String,
    origin_url: String,
    is_from_shared_post: bool,
    source_id: String,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
    deleted_at: Option<NaiveDateTime>,
}

impl From<SubSourceRow> for SubSource {
    fn from(row: SubSourceRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            external_identifier: row.external_identifier,
            avatar_url: row.avatar_url,
            origin_url: row.origin_url,
            is_from_shared_post: row.is_from_shared_post,
            source_id: row.source_id,
            created_at: row.created_at.and_utc(),
            updated_at: row.updated_at.and_utc(),
            deleted_at: row.deleted_at.into(),
        }
    }
}

/// PostgreSQL-backed store. Queries run on the blocking pool.
#[derive(Clone)]
pub struct PgStore {
    db_pool: Pool,
}

impl PgStore {
    pub fn new(db_pool: Pool) -> Self {
        Self { db_pool }
    }

    pub fn connect(database_url: &str) -> Result<Self> {
        let manager = ConnectionManager::<PgConnection>::new(database_url);
        let db_pool = Pool::builder().build(manager)?;
        Ok(Self::new(db_pool))
    }

    pub fn pool(&self) -> &Pool {
        &self.db_pool
    }
}

#[async_trait]
impl SourceStore for PgStore {
    async fn get_source(&self, id: &str) -> Result<Option<Source>> {
        let db_pool = self.db_pool.clone();
        let id = id.to_string();
        tokio::task::spawn_blocking(move || -> Result<Option<Source>> {
            let mut connection = db_pool.get()?;
            let row = sources::table
                .find(id)
                .first::<SourceRow>(&mut connection)
                .optional()?;
            Ok(row.map(Source::from))
        })
        .await?
    }

    async fn get_sources(&self, ids: &[String]) -> Result<Vec<Source>> {
        if ids.is_empty() {
            return Ok(vec![]);
        }
        let db_pool = self.db_pool.clone();
        let ids = ids.to_vec();
        tokio::task::spawn_blocking(move || -> Result<Vec<Source>> {
            let mut connection = db_pool.get()?;
            Ok(sources::table
                .filter(sources::id.eq_any(ids))
                .load::<SourceRow>(&mut connection)?
                .into_iter()
                .map(Source::from)
                .collect())
        })
        .await?
    }

    async fn get_sub_source(&self, id: &str) -> Result<Option<SubSource>> {
        let db_pool = self.db_pool.clone();
        let id = id.to_string();
        tokio::task::spawn_blocking(move || -> Result<Option<SubSource>> {
            let mut connection = db_pool.get()?;
            let row = sub_sources::table
                .find(id)
                .first::<SubSourceRow>(&mut connection)
                .optional()?;
            Ok(row.map(SubSource::from))
        })
        .await?
    }

    async fn list_sub_sources(&self) -> Result<Vec<SubSource>> {
        let db_pool = self.db_pool.clone();
        tokio::task::spawn_blocking(move || -> Result<Vec<SubSource>> {
            let mut connection = db_pool.get()?;
            Ok(sub_sources::table
                .order(sub_sources::created_at.asc())
                .load::<SubSourceRow>(&mut connection)?
                .into_iter()
                .map(SubSource::from)
                .collect())
        })
        .await?
    }
}
