use async_trait::async_trait;
use recruit_core::controller::{ApplicationInserter, InsertError};
use recruit_core::models::{Application, ApplicationRecord};
use recruit_core::AppError;
use sqlx::{PgPool, Postgres};

/// Repository for application rows
#[derive(Clone)]
pub struct ApplicationRepository {
    pool: PgPool,
}

impl ApplicationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert one application row. The record is already trimmed and
    /// normalized; `vertical2` and `portfolio` map to nullable columns.
    #[tracing::instrument(
        skip(self, record),
        fields(db.table = "applications", db.operation = "insert")
    )]
    pub async fn insert_application(
        &self,
        record: &ApplicationRecord,
    ) -> Result<Application, AppError> {
        let application = sqlx::query_as::<Postgres, Application>(
            r#"
            INSERT INTO applications (name, sc_no, branch, vertical1, vertical2, mob_no, section, mail, portfolio)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, name, sc_no, branch, vertical1, vertical2, mob_no, section, mail, portfolio, created_at
            "#,
        )
        .bind(&record.name)
        .bind(&record.sc_no)
        .bind(&record.branch)
        .bind(&record.vertical1)
        .bind(&record.vertical2)
        .bind(&record.mob_no)
        .bind(&record.section)
        .bind(&record.mail)
        .bind(&record.portfolio)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(application_id = %application.id, "Application stored");

        Ok(application)
    }
}

#[async_trait]
impl ApplicationInserter for ApplicationRepository {
    async fn insert(&self, record: &ApplicationRecord) -> Result<(), InsertError> {
        self.insert_application(record)
            .await
            .map(drop)
            .map_err(|e| {
                tracing::error!(error = %e, "Application insert failed");
                InsertError::new(insert_message(&e))
            })
    }
}

/// Surface the database's own message (e.g. a constraint violation) so the
/// form banner shows what the collaborator reported.
fn insert_message(err: &AppError) -> String {
    match err {
        AppError::Database(sqlx::Error::Database(db_err)) => db_err.message().to_string(),
        other => other.client_message(),
    }
}
