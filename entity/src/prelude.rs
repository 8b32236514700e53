pub use super::dealership_user::Entity as DealershipUser;
pub use super::user_payment::Entity as UserPayment;
pub use super::vehicle::Entity as Vehicle;
pub use super::vehicle_order::Entity as VehicleOrder;
