pub use super::address::Entity as Address;
pub use super::job::Entity as Job;
pub use super::job_acceptor::Entity as JobAcceptor;
pub use super::material_stock::Entity as MaterialStock;
pub use super::profession::Entity as Profession;
pub use super::role::Entity as Role;
pub use super::shop::Entity as Shop;
pub use super::shop_category::Entity as ShopCategory;
pub use super::shop_type::Entity as ShopType;
pub use super::user::Entity as User;
pub use super::user_role::Entity as UserRole;
pub use super::verification::Entity as Verification;
pub use super::work_type::Entity as WorkType;
