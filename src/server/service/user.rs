use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        order::OrderDto,
        user::{PaymentDto, UserDataDto, UserDto},
    },
    server::{
        data::{
            order::OrderRepository,
            payment::{NewPayment, PaymentRepository},
            user::UserRepository,
        },
        error::{account::AccountError, Error},
        model::form::{PaymentForm, UpdateUserForm},
        service::auth::{required, validate_email},
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves profile, stored payment details and order history of a user.
    ///
    /// # Returns
    /// - `Ok(Some(UserDataDto))` - User exists
    /// - `Ok(None)` - No user with that username
    /// - `Err(Error::DbErr)` - Database unavailable
    pub async fn get_user_data(&self, username: &str) -> Result<Option<UserDataDto>, Error> {
        let Some(user) = UserRepository::new(self.db)
            .get_by_username(username)
            .await?
        else {
            return Ok(None);
        };

        let payment = PaymentRepository::new(self.db)
            .get_by_user_id(user.id)
            .await?
            .map(PaymentDto::from);

        let orders = OrderRepository::new(self.db)
            .list_by_user(user.id)
            .await?
            .into_iter()
            .filter_map(|(order, vehicle)| vehicle.map(|vehicle| OrderDto::from((order, vehicle))))
            .collect();

        Ok(Some(UserDataDto {
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            payment,
            orders,
        }))
    }

    /// Stored payment details of a user, `None` when nothing has been saved yet
    pub async fn get_payment(&self, username: &str) -> Result<Option<PaymentDto>, Error> {
        let Some(user) = UserRepository::new(self.db)
            .get_by_username(username)
            .await?
        else {
            return Ok(None);
        };

        let payment = PaymentRepository::new(self.db)
            .get_by_user_id(user.id)
            .await?;

        Ok(payment.map(PaymentDto::from))
    }

    /// Validates and stores the payment details of a user.
    ///
    /// Only the last four digits of the card number are kept.
    ///
    /// # Returns
    /// - `Ok(PaymentDto)` - The stored details
    /// - `Err(Error::AccountError)` - Missing field, malformed card number or expiry, or
    ///   unknown user
    /// - `Err(Error::DbErr)` - Database unavailable
    pub async fn update_payment(
        &self,
        username: &str,
        form: &PaymentForm,
    ) -> Result<PaymentDto, Error> {
        let card_holder = required(&form.card_holder, "card holder")?;
        let mailing_address = required(&form.mailing_address, "mailing address")?;
        let card_last_four = card_last_four(&form.card_number)?;
        let card_expiry = validate_card_expiry(&form.card_expiry)?;

        let user = UserRepository::new(self.db)
            .get_by_username(username)
            .await?
            .ok_or_else(|| AccountError::UserNotFound(username.to_string()))?;

        let payment = PaymentRepository::new(self.db)
            .upsert(
                user.id,
                NewPayment {
                    card_holder,
                    card_last_four,
                    card_expiry,
                    mailing_address,
                },
            )
            .await?;

        tracing::info!(username = %user.username, "Updated payment details");

        Ok(payment.into())
    }

    pub async fn list_users(&self) -> Result<Vec<UserDto>, Error> {
        let users = UserRepository::new(self.db).list().await?;

        Ok(users.into_iter().map(UserDto::from).collect())
    }

    /// Updates name and email of an existing user on behalf of the admin.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The updated user
    /// - `Err(Error::AccountError)` - Invalid field, email used by another account, or unknown user
    /// - `Err(Error::DbErr)` - Database unavailable
    pub async fn update_user(&self, form: &UpdateUserForm) -> Result<UserDto, Error> {
        let username = required(&form.username, "username")?;
        let first_name = required(&form.first_name, "first name")?;
        let last_name = required(&form.last_name, "last name")?;
        let email = validate_email(&form.email)?;

        let user_repository = UserRepository::new(self.db);

        if let Some(owner) = user_repository.get_by_email(&email).await? {
            if owner.username != username {
                return Err(AccountError::EmailTaken.into());
            }
        }

        let user = user_repository
            .update_profile(&username, first_name, last_name, email)
            .await?
            .ok_or(AccountError::UserNotFound(username))?;

        tracing::info!(username = %user.username, "Admin updated user profile");

        Ok(user.into())
    }

    /// Deletes a user together with their payment details and orders.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(Error::AccountError(AccountError::ProtectedAccount))` - Attempt to delete the admin
    /// - `Err(Error::AccountError(AccountError::UserNotFound))` - No user with that username
    pub async fn delete_user(&self, username: &str, admin_username: &str) -> Result<(), Error> {
        let username = required(username, "username")?;

        if username == admin_username {
            return Err(AccountError::ProtectedAccount.into());
        }

        let result = UserRepository::new(self.db)
            .delete_by_username(&username)
            .await?;
        if result.rows_affected == 0 {
            return Err(AccountError::UserNotFound(username).into());
        }

        tracing::info!(username = %username, "Admin deleted user");

        Ok(())
    }
}

/// Strips spaces and dashes from a card number and returns its last four digits.
fn card_last_four(card_number: &str) -> Result<String, AccountError> {
    let digits: String = card_number
        .chars()
        .filter(|c| !matches!(c, ' ' | '-'))
        .collect();

    if digits.is_empty() {
        return Err(AccountError::MissingField("card number"));
    }

    if !(12..=19).contains(&digits.len()) || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(AccountError::InvalidCardNumber);
    }

    Ok(digits[digits.len() - 4..].to_string())
}

fn validate_card_expiry(expiry: &str) -> Result<String, AccountError> {
    let expiry = required(expiry, "card expiry")?;

    let valid = match expiry.split_once('/') {
        Some((month, year)) => {
            month.len() == 2
                && year.len() == 2
                && year.chars().all(|c| c.is_ascii_digit())
                && month
                    .parse::<u8>()
                    .is_ok_and(|month| (1..=12).contains(&month))
        }
        None => false,
    };

    if !valid {
        return Err(AccountError::InvalidCardExpiry);
    }

    Ok(expiry)
}
