use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "vehicle")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub price_cents: i64,
    pub stock: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::vehicle_order::Entity")]
    VehicleOrder,
}

impl Related<super::vehicle_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VehicleOrder.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
