use super::USER_COLUMNS;
use crate::{
    abstract_trait::user::repository::UserCommandRepositoryTrait, model::user::User as UserModel,
};
use async_trait::async_trait;
use shared::{
    config::ConnectionPool,
    domain::requests::user::{CreateUserRequest, UpdateUserRequest},
    errors::RepositoryError,
};
use tracing::{error, info};

#[derive(Clone)]
pub struct UserCommandRepository {
    db: ConnectionPool,
}

impl UserCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserCommandRepositoryTrait for UserCommandRepository {
    async fn create_user(&self, req: &CreateUserRequest) -> Result<UserModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let sql = format!(
            r#"
            INSERT INTO usermaster (
                username,
                user_firstname,
                user_lastname,
                user_email,
                user_phone,
                user_password,
                user_confirmpassword,
                role,
                isactive,
                isdeleted
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {USER_COLUMNS}
            "#
        );

        let user = sqlx::query_as::<_, UserModel>(&sql)
            .bind(&req.username)
            .bind(&req.user_firstname)
            .bind(&req.user_lastname)
            .bind(&req.user_email)
            .bind(&req.user_phone)
            .bind(&req.user_password)
            .bind(&req.user_confirmpassword)
            .bind(&req.role)
            .bind(req.isactive)
            .bind(req.isdeleted)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to insert user {}: {:?}", req.username, e);
                RepositoryError::from(e)
            })?;

        info!("✅ Inserted user with id {}", user.userid);

        Ok(user)
    }

    async fn update_user(&self, req: &UpdateUserRequest) -> Result<UserModel, RepositoryError> {
        let (Some(userid), Some(status)) = (req.userid, req.resolved_status()) else {
            return Err(RepositoryError::Custom(
                "update requires a user id and status flags".into(),
            ));
        };

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let sql = format!(
            r#"
            UPDATE usermaster
            SET username = $2,
                user_firstname = $3,
                user_lastname = $4,
                user_email = $5,
                user_phone = $6,
                user_password = $7,
                user_confirmpassword = $8,
                role = $9,
                isactive = $10,
                isdeleted = $11
            WHERE userid = $1
            RETURNING {USER_COLUMNS}
            "#
        );

        let user = sqlx::query_as::<_, UserModel>(&sql)
            .bind(userid)
            .bind(&req.username)
            .bind(&req.user_firstname)
            .bind(&req.user_lastname)
            .bind(&req.user_email)
            .bind(&req.user_phone)
            .bind(&req.user_password)
            .bind(&req.user_confirmpassword)
            .bind(&req.role)
            .bind(status.isactive)
            .bind(status.isdeleted)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to update user {}: {:?}", userid, e);
                RepositoryError::from(e)
            })?
            .ok_or(RepositoryError::NotFound)?;

        info!("✅ Updated user with id {}", userid);

        Ok(user)
    }

    async fn delete_user(&self, id: i32) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let result = sqlx::query("DELETE FROM usermaster WHERE userid = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete user {}: {:?}", id, e);
                RepositoryError::from(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!("🗑️ Deleted user with id {}", id);

        Ok(())
    }
}
