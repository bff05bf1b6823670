use super::STUDENT_COLUMNS;
use crate::{
    abstract_trait::student::repository::StudentCommandRepositoryTrait,
    model::student::Student as StudentModel, repository::Patch,
};
use async_trait::async_trait;
use shared::{
    config::ConnectionPool,
    domain::requests::student::{CreateStudentRequest, UpdateStudentRequest},
    errors::RepositoryError,
};
use tracing::{error, info};

#[derive(Clone)]
pub struct StudentCommandRepository {
    db: ConnectionPool,
}

impl StudentCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StudentCommandRepositoryTrait for StudentCommandRepository {
    async fn create_student(
        &self,
        req: &CreateStudentRequest,
    ) -> Result<StudentModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let sql = format!(
            "INSERT INTO student (name, email, profile_image) VALUES ($1, $2, $3) \
             RETURNING {STUDENT_COLUMNS}"
        );

        let student = sqlx::query_as::<_, StudentModel>(&sql)
            .bind(&req.name)
            .bind(&req.email)
            .bind(req.profile_image.as_deref())
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to insert student {}: {:?}", req.email, e);
                RepositoryError::from(e)
            })?;

        info!("✅ Inserted student with id {}", student.id);

        Ok(student)
    }

    async fn update_student(
        &self,
        req: &UpdateStudentRequest,
    ) -> Result<StudentModel, RepositoryError> {
        let patch = Patch::from(req);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let mut qb = patch.build(req.id, STUDENT_COLUMNS);

        let student = qb
            .build_query_as::<StudentModel>()
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to update student {}: {:?}", req.id, e);
                RepositoryError::from(e)
            })?
            .ok_or(RepositoryError::NotFound)?;

        info!(
            "✅ Updated student {} (columns: {:?})",
            req.id,
            patch.columns()
        );

        Ok(student)
    }

    async fn delete_student(&self, id: i32) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let result = sqlx::query("DELETE FROM student WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete student {}: {:?}", id, e);
                RepositoryError::from(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!("🗑️ Deleted student with id {}", id);

        Ok(())
    }
}
