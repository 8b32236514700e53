use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

/// Payment details as stored; the full card number never reaches this layer.
pub struct NewPayment {
    pub card_holder: String,
    pub card_last_four: String,
    pub card_expiry: String,
    pub mailing_address: String,
}

pub struct PaymentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PaymentRepository<'a, C> {
    /// Creates a new instance of [`PaymentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::user_payment::Model>, DbErr> {
        entity::prelude::UserPayment::find()
            .filter(entity::user_payment::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Inserts the user's payment details or replaces the existing ones
    pub async fn upsert(
        &self,
        user_id: i32,
        payment: NewPayment,
    ) -> Result<entity::user_payment::Model, DbErr> {
        let now = Utc::now().naive_utc();

        match self.get_by_user_id(user_id).await? {
            Some(existing) => {
                let mut payment_am = existing.into_active_model();
                payment_am.card_holder = ActiveValue::Set(payment.card_holder);
                payment_am.card_last_four = ActiveValue::Set(payment.card_last_four);
                payment_am.card_expiry = ActiveValue::Set(payment.card_expiry);
                payment_am.mailing_address = ActiveValue::Set(payment.mailing_address);
                payment_am.updated_at = ActiveValue::Set(now);

                payment_am.update(self.db).await
            }
            None => {
                let payment_am = entity::user_payment::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    card_holder: ActiveValue::Set(payment.card_holder),
                    card_last_four: ActiveValue::Set(payment.card_last_four),
                    card_expiry: ActiveValue::Set(payment.card_expiry),
                    mailing_address: ActiveValue::Set(payment.mailing_address),
                    updated_at: ActiveValue::Set(now),
                    ..Default::default()
                };

                payment_am.insert(self.db).await
            }
        }
    }
}
