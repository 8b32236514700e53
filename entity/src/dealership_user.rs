use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "dealership_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::user_payment::Entity")]
    UserPayment,
    #[sea_orm(has_many = "super::vehicle_order::Entity")]
    VehicleOrder,
}

impl Related<super::user_payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserPayment.def()
    }
}

impl Related<super::vehicle_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VehicleOrder.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
