//! `PostgreSQL` implementation of the `WorkRepository` trait.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::debug;
use uuid::Uuid;

use feciaq_core::error::DomainError;
use feciaq_core::model::{Area, Author, Gender, NewWork, Work};
use feciaq_core::repository::WorkRepository;

/// PostgreSQL-backed work repository.
#[derive(Debug, Clone)]
pub struct PgWorkRepository {
    pool: PgPool,
}

impl PgWorkRepository {
    /// Creates a new `PgWorkRepository`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct WorkRow {
    id: Uuid,
    title: String,
    area: String,
    code: String,
    submitted_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct WorkAuthorRow {
    work_id: Uuid,
    id: Uuid,
    name: String,
    gender: String,
    national_id: String,
}

fn storage_error(context: &'static str) -> impl FnOnce(sqlx::Error) -> DomainError {
    move |err| DomainError::InternalFailure(format!("{context}: {err}"))
}

impl WorkAuthorRow {
    fn into_author(self) -> Result<Author, DomainError> {
        let gender = Gender::parse(&self.gender).ok_or_else(|| {
            DomainError::InternalFailure(format!(
                "author {} has unknown gender code {:?}",
                self.id, self.gender
            ))
        })?;
        Ok(Author {
            id: self.id,
            name: self.name,
            gender,
            national_id: self.national_id,
        })
    }
}

impl WorkRow {
    fn into_work(self, authors: Vec<Author>) -> Result<Work, DomainError> {
        let area = Area::parse(&self.area).ok_or_else(|| {
            DomainError::InternalFailure(format!(
                "work {} has unknown area code {:?}",
                self.id, self.area
            ))
        })?;
        Ok(Work {
            id: self.id,
            title: self.title,
            area,
            code: self.code,
            submitted_at: self.submitted_at,
            authors,
        })
    }
}

#[async_trait]
impl WorkRepository for PgWorkRepository {
    async fn create_work(&self, work: &NewWork) -> Result<Work, DomainError> {
        // Dropping `tx` on any early return rolls the whole unit back.
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(storage_error("failed to begin transaction"))?;

        let mut authors = Vec::with_capacity(work.authors.len());
        for author in &work.authors {
            let id: Uuid = sqlx::query_scalar(
                r"INSERT INTO authors (name, gender, national_id)
                  VALUES ($1, $2, $3)
                  RETURNING id",
            )
            .bind(&author.name)
            .bind(author.gender.as_str())
            .bind(&author.national_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(storage_error("failed to insert author"))?;

            authors.push(Author {
                id,
                name: author.name.clone(),
                gender: author.gender,
                national_id: author.national_id.clone(),
            });
        }

        // TIMESTAMPTZ truncates to microseconds; echo the stored value.
        let (work_id, submitted_at): (Uuid, DateTime<Utc>) = sqlx::query_as(
            r"INSERT INTO works (title, area, code, submitted_at)
              VALUES ($1, $2, $3, $4)
              RETURNING id, submitted_at",
        )
        .bind(&work.title)
        .bind(work.area.as_str())
        .bind(&work.code)
        .bind(work.submitted_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(storage_error("failed to insert work"))?;

        for (position, author) in authors.iter().enumerate() {
            let position = i32::try_from(position).map_err(|_| {
                DomainError::InternalFailure(format!("author position {position} out of range"))
            })?;
            sqlx::query(
                r"INSERT INTO work_authors (work_id, author_id, position)
                  VALUES ($1, $2, $3)",
            )
            .bind(work_id)
            .bind(author.id)
            .bind(position)
            .execute(&mut *tx)
            .await
            .map_err(storage_error("failed to link author to work"))?;
        }

        tx.commit()
            .await
            .map_err(storage_error("failed to commit transaction"))?;

        debug!(%work_id, author_count = authors.len(), "work committed");

        Ok(Work {
            id: work_id,
            title: work.title.clone(),
            area: work.area,
            code: work.code.clone(),
            submitted_at,
            authors,
        })
    }

    async fn find_works_by_area(&self, area: Area) -> Result<Vec<Work>, DomainError> {
        let works: Vec<WorkRow> = sqlx::query_as(
            r"SELECT id, title, area, code, submitted_at
              FROM works
              WHERE area = $1
              ORDER BY submitted_at, id",
        )
        .bind(area.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error("failed to load works"))?;

        if works.is_empty() {
            return Ok(Vec::new());
        }

        let work_ids: Vec<Uuid> = works.iter().map(|work| work.id).collect();
        let author_rows: Vec<WorkAuthorRow> = sqlx::query_as(
            r"SELECT wa.work_id, a.id, a.name, a.gender, a.national_id
              FROM work_authors wa
              JOIN authors a ON a.id = wa.author_id
              WHERE wa.work_id = ANY($1)
              ORDER BY wa.work_id, wa.position",
        )
        .bind(work_ids.as_slice())
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error("failed to load work authors"))?;

        let mut authors_by_work: HashMap<Uuid, Vec<Author>> = HashMap::new();
        for row in author_rows {
            let work_id = row.work_id;
            authors_by_work
                .entry(work_id)
                .or_default()
                .push(row.into_author()?);
        }

        works
            .into_iter()
            .map(|row| {
                let authors = authors_by_work.remove(&row.id).unwrap_or_default();
                row.into_work(authors)
            })
            .collect()
    }
}
