use super::USER_COLUMNS;
use crate::{
    abstract_trait::user::repository::UserQueryRepositoryTrait, model::user::User as UserModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct UserQueryRepository {
    db: ConnectionPool,
}

impl UserQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserQueryRepositoryTrait for UserQueryRepository {
    async fn find_all(&self) -> Result<Vec<UserModel>, RepositoryError> {
        info!("🔍 Fetching all users");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let sql = format!("SELECT {USER_COLUMNS} FROM usermaster ORDER BY userid");

        let users = sqlx::query_as::<_, UserModel>(&sql)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch users: {:?}", e);
                RepositoryError::from(e)
            })?;

        info!("✅ Found {} users", users.len());

        Ok(users)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<UserModel>, RepositoryError> {
        info!("🔍 Fetching user with id {}", id);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let sql = format!("SELECT {USER_COLUMNS} FROM usermaster WHERE userid = $1");

        let user = sqlx::query_as::<_, UserModel>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch user {}: {:?}", id, e);
                RepositoryError::from(e)
            })?;

        Ok(user)
    }
}
