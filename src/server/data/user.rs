use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

/// Fields required to create a user.
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
}

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user
    ///
    /// Fails with a unique constraint violation if the username or email is already in use.
    pub async fn create(&self, user: NewUser) -> Result<entity::dealership_user::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let user = entity::dealership_user::ActiveModel {
            username: ActiveValue::Set(user.username),
            email: ActiveValue::Set(user.email),
            first_name: ActiveValue::Set(user.first_name),
            last_name: ActiveValue::Set(user.last_name),
            password_hash: ActiveValue::Set(user.password_hash),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::dealership_user::Model>, DbErr> {
        entity::prelude::DealershipUser::find()
            .filter(entity::dealership_user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    pub async fn get_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::dealership_user::Model>, DbErr> {
        entity::prelude::DealershipUser::find()
            .filter(entity::dealership_user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Lists all users ordered by username
    pub async fn list(&self) -> Result<Vec<entity::dealership_user::Model>, DbErr> {
        entity::prelude::DealershipUser::find()
            .order_by_asc(entity::dealership_user::Column::Username)
            .all(self.db)
            .await
    }

    /// Updates name and email of a user
    ///
    /// Returns `None` if no user with `username` exists.
    pub async fn update_profile(
        &self,
        username: &str,
        first_name: String,
        last_name: String,
        email: String,
    ) -> Result<Option<entity::dealership_user::Model>, DbErr> {
        let Some(user) = self.get_by_username(username).await? else {
            return Ok(None);
        };

        let mut user_am = user.into_active_model();
        user_am.first_name = ActiveValue::Set(first_name);
        user_am.last_name = ActiveValue::Set(last_name);
        user_am.email = ActiveValue::Set(email);
        user_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(user_am.update(self.db).await?))
    }

    /// Replaces the stored password hash of a user
    ///
    /// Returns `None` if no user with `username` exists.
    pub async fn update_password_hash(
        &self,
        username: &str,
        password_hash: String,
    ) -> Result<Option<entity::dealership_user::Model>, DbErr> {
        let Some(user) = self.get_by_username(username).await? else {
            return Ok(None);
        };

        let mut user_am = user.into_active_model();
        user_am.password_hash = ActiveValue::Set(password_hash);
        user_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(user_am.update(self.db).await?))
    }

    /// Deletes a user
    ///
    /// Returns OK regardless of user existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete_by_username(&self, username: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::DealershipUser::delete_many()
            .filter(entity::dealership_user::Column::Username.eq(username))
            .exec(self.db)
            .await
    }
}
