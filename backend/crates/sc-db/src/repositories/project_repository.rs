//! Project repository: create, list, read and hard-delete project records.
//!
//! Records are immutable once inserted, so there is no update path here. `contributors` and `images` are stored as JSON text; the
//! uploader union is stored as a `uploader_kind` discriminator plus the
//! columns of whichever variant applies.
//!
//! Listing order is `created_at DESC, rowid DESC`: creation timestamps have
//! millisecond resolution, and rowid keeps records inserted within the same
//! millisecond newest-first.

use crate::{DbError, Result as DbErrorResult};

use sc_core::{Contributors, ExpandedProject, NewProject, ProjectRecord, Uploader, UserProfile};

use chrono::DateTime;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const TABLE: &str = "projects";

const SELECT_COLUMNS: &str = r#"
    p.id, p.title, p.description, p.external_link, p.contributors, p.images,
    p.uploader_kind, p.uploader_id, p.uploaded_by, p.uploader_name, p.uploader_email,
    p.created_at
"#;

pub struct ProjectRepository {
    pool: SqlitePool,
}

impl ProjectRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new record, assigning its id and creation time.
    pub async fn create(&self, project: NewProject) -> DbErrorResult<ProjectRecord> {
        let record = ProjectRecord::new(project);

        let id = record.id.to_string();
        let contributors = record.contributors.encode()?;
        let images = serde_json::to_string(&record.images)
            .map_err(|e| DbError::corrupt(TABLE, format!("Cannot encode images: {}", e)))?;
        let created_at = record.created_at.timestamp_millis();

        let (uploader_id, uploaded_by, uploader_name, uploader_email) = match &record.uploader {
            Uploader::Account { id } => (Some(id.as_str()), None, None, None),
            Uploader::Submitted {
                uploaded_by,
                name,
                email,
            } => (
                None,
                uploaded_by.as_deref(),
                name.as_deref(),
                email.as_deref(),
            ),
        };

        sqlx::query(
            r#"
                INSERT INTO projects (
                    id, title, description, external_link, contributors, images,
                    uploader_kind, uploader_id, uploaded_by, uploader_name, uploader_email,
                    created_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&record.title)
        .bind(&record.description)
        .bind(&record.external_link)
        .bind(&contributors)
        .bind(&images)
        .bind(record.uploader.kind())
        .bind(uploader_id)
        .bind(uploaded_by)
        .bind(uploader_name)
        .bind(uploader_email)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(record)
    }

    /// All records, newest first. Uploaders are not expanded.
    pub async fn find_all(&self) -> DbErrorResult<Vec<ProjectRecord>> {
        let sql = format!(
            "SELECT {} FROM projects p ORDER BY p.created_at DESC, p.rowid DESC",
            SELECT_COLUMNS
        );

        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;

        rows.iter().map(Self::map_row).collect()
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<ProjectRecord>> {
        let sql = format!("SELECT {} FROM projects p WHERE p.id = ?", SELECT_COLUMNS);

        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::map_row).transpose()
    }

    /// Read one record with an `Account` uploader joined to its cached profile.
    pub async fn find_by_id_expanded(&self, id: Uuid) -> DbErrorResult<Option<ExpandedProject>> {
        let sql = format!(
            r#"
                SELECT {}, u.id AS profile_id, u.name AS profile_name, u.email AS profile_email
                FROM projects p
                LEFT JOIN users u
                    ON p.uploader_kind = 'account' AND u.id = p.uploader_id
                WHERE p.id = ?
            "#,
            SELECT_COLUMNS
        );

        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let record = Self::map_row(&row)?;
        let profile_id: Option<String> = row.try_get("profile_id")?;
        let uploader_profile = match profile_id {
            Some(profile_id) => Some(UserProfile {
                id: profile_id,
                name: row.try_get("profile_name")?,
                email: row.try_get("profile_email")?,
            }),
            None => None,
        };

        Ok(Some(ExpandedProject {
            record,
            uploader_profile,
        }))
    }

    /// Permanently remove a record. Returns `false` if nothing was deleted.
    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM projects")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    fn map_row(row: &SqliteRow) -> DbErrorResult<ProjectRecord> {
        let id: String = row.try_get("id")?;
        let contributors: String = row.try_get("contributors")?;
        let images: String = row.try_get("images")?;
        let kind: String = row.try_get("uploader_kind")?;
        let created_at: i64 = row.try_get("created_at")?;

        Ok(ProjectRecord {
            id: Uuid::parse_str(&id)
                .map_err(|e| DbError::corrupt(TABLE, format!("Invalid UUID in id: {}", e)))?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            external_link: row.try_get("external_link")?,
            contributors: Contributors::decode(&contributors)?,
            images: serde_json::from_str(&images)
                .map_err(|e| DbError::corrupt(TABLE, format!("Invalid images JSON: {}", e)))?,
            uploader: Uploader::from_columns(
                &kind,
                row.try_get("uploader_id")?,
                row.try_get("uploaded_by")?,
                row.try_get("uploader_name")?,
                row.try_get("uploader_email")?,
            )?,
            created_at: DateTime::from_timestamp_millis(created_at)
                .ok_or_else(|| DbError::corrupt(TABLE, "Invalid timestamp in created_at"))?,
        })
    }
}
