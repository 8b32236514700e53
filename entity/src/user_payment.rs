use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_payment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub user_id: i32,
    pub card_holder: String,
    pub card_last_four: String,
    pub card_expiry: String,
    pub mailing_address: String,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::dealership_user::Entity",
        from = "Column::UserId",
        to = "super::dealership_user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    DealershipUser,
}

impl Related<super::dealership_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DealershipUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
