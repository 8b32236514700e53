use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::{NewUser, UserRepository},
    error::{account::AccountError, Error},
    model::form::SignUpForm,
    service::password::{hash_password, verify_password},
};

const USERNAME_LENGTH: std::ops::RangeInclusive<usize> = 3..=32;
const MIN_PASSWORD_LENGTH: usize = 8;

/// Service for account creation, sign-in and password reset requests.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    admin_username: &'a str,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    /// - `admin_username` - Administrative identity, which cannot be claimed through sign-up
    pub fn new(db: &'a DatabaseConnection, admin_username: &'a str) -> Self {
        Self { db, admin_username }
    }

    /// Validates a sign-up form and stores the new account.
    ///
    /// Names, username and email are trimmed and the email is lowercased before storage.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created user
    /// - `Err(Error::AccountError)` - A field is missing or invalid, or the username/email is taken
    /// - `Err(Error::DbErr)` - Database unavailable
    pub async fn sign_up(
        &self,
        form: &SignUpForm,
    ) -> Result<entity::dealership_user::Model, Error> {
        let first_name = required(&form.first_name, "first name")?;
        let last_name = required(&form.last_name, "last name")?;
        let username = validate_username(&form.username)?;
        let email = validate_email(&form.email)?;
        validate_password(&form.password)?;

        if username.eq_ignore_ascii_case(self.admin_username) {
            return Err(AccountError::UsernameTaken.into());
        }

        self.create_account(NewUser {
            username,
            email,
            first_name,
            last_name,
            password_hash: hash_password(&form.password),
        })
        .await
    }

    /// Checks credentials and returns the stored username on success.
    ///
    /// Unknown usernames and wrong passwords are indistinguishable to the caller.
    ///
    /// # Returns
    /// - `Ok(String)` - Credentials match
    /// - `Err(Error::AccountError(AccountError::InvalidCredentials))` - Unknown user or wrong password
    /// - `Err(Error::DbErr)` - Database unavailable
    pub async fn sign_in(&self, username: &str, password: &str) -> Result<String, Error> {
        let user_repository = UserRepository::new(self.db);
        let username = username.trim();

        if username.is_empty() || password.is_empty() {
            return Err(AccountError::InvalidCredentials.into());
        }

        let Some(user) = user_repository.get_by_username(username).await? else {
            tracing::debug!(username = %username, "Sign-in attempt for unknown user");

            return Err(AccountError::InvalidCredentials.into());
        };

        if !verify_password(password, &user.password_hash) {
            tracing::info!(username = %username, "Sign-in attempt with wrong password");

            return Err(AccountError::InvalidCredentials.into());
        }

        Ok(user.username)
    }

    /// Creates the admin account, or resets its password when it no longer matches.
    ///
    /// # Arguments
    /// - `password` - Password the admin signs in with
    pub async fn ensure_admin(&self, password: &str) -> Result<(), Error> {
        validate_password(password)?;

        let user_repository = UserRepository::new(self.db);

        match user_repository.get_by_username(self.admin_username).await? {
            Some(admin) if verify_password(password, &admin.password_hash) => {}
            Some(_) => {
                user_repository
                    .update_password_hash(self.admin_username, hash_password(password))
                    .await?;

                tracing::info!(username = %self.admin_username, "Reset admin account password");
            }
            None => {
                self.create_account(NewUser {
                    username: self.admin_username.to_string(),
                    email: format!("{}@dealership.local", self.admin_username.to_lowercase()),
                    first_name: self.admin_username.to_string(),
                    last_name: String::new(),
                    password_hash: hash_password(password),
                })
                .await?;

                tracing::info!(username = %self.admin_username, "Created admin account");
            }
        }

        Ok(())
    }

    /// Records a password reset request.
    ///
    /// The outcome is only logged; callers show the same acknowledgement whether or not the
    /// address belongs to an account.
    pub async fn request_password_reset(&self, email: &str) -> Result<(), Error> {
        let email = email.trim().to_lowercase();
        if email.is_empty() {
            return Ok(());
        }

        match UserRepository::new(self.db).get_by_email(&email).await? {
            Some(user) => {
                tracing::info!(username = %user.username, "Password reset requested");
            }
            None => {
                tracing::debug!("Password reset requested for unknown email");
            }
        }

        Ok(())
    }

    async fn create_account(
        &self,
        new_user: NewUser,
    ) -> Result<entity::dealership_user::Model, Error> {
        let user_repository = UserRepository::new(self.db);

        if user_repository
            .get_by_username(&new_user.username)
            .await?
            .is_some()
        {
            return Err(AccountError::UsernameTaken.into());
        }

        if user_repository.get_by_email(&new_user.email).await?.is_some() {
            return Err(AccountError::EmailTaken.into());
        }

        Ok(user_repository.create(new_user).await?)
    }
}

/// Trimmed `value`, or `MissingField` when nothing but whitespace was entered
pub(crate) fn required(value: &str, field: &'static str) -> Result<String, AccountError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AccountError::MissingField(field));
    }

    Ok(value.to_string())
}

pub(crate) fn validate_username(username: &str) -> Result<String, AccountError> {
    let username = required(username, "username")?;

    let valid_chars = username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !valid_chars || !USERNAME_LENGTH.contains(&username.len()) {
        return Err(AccountError::InvalidUsername);
    }

    Ok(username)
}

pub(crate) fn validate_email(email: &str) -> Result<String, AccountError> {
    let email = required(email, "email")?.to_lowercase();

    match email.split_once('@') {
        Some((local, domain))
            if !local.is_empty() && domain.contains('.') && !domain.contains('@') =>
        {
            Ok(email)
        }
        _ => Err(AccountError::InvalidEmail),
    }
}

fn validate_password(password: &str) -> Result<(), AccountError> {
    if password.is_empty() {
        return Err(AccountError::MissingField("password"));
    }

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AccountError::WeakPassword);
    }

    Ok(())
}
