use super::STUDENT_COLUMNS;
use crate::{
    abstract_trait::student::repository::StudentQueryRepositoryTrait,
    model::student::Student as StudentModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct StudentQueryRepository {
    db: ConnectionPool,
}

impl StudentQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StudentQueryRepositoryTrait for StudentQueryRepository {
    async fn find_all(&self) -> Result<Vec<StudentModel>, RepositoryError> {
        info!("🔍 Fetching all students");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let sql = format!("SELECT {STUDENT_COLUMNS} FROM student ORDER BY id");

        let students = sqlx::query_as::<_, StudentModel>(&sql)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch students: {:?}", e);
                RepositoryError::from(e)
            })?;

        info!("✅ Found {} students", students.len());

        Ok(students)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<StudentModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let sql = format!("SELECT {STUDENT_COLUMNS} FROM student WHERE id = $1");

        let student = sqlx::query_as::<_, StudentModel>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch student {}: {:?}", id, e);
                RepositoryError::from(e)
            })?;

        Ok(student)
    }
}
