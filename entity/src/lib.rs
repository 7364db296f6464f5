//! Database entity definitions for the Setu marketplace.

pub mod prelude;

pub mod address;
pub mod job;
pub mod job_acceptor;
pub mod material_stock;
pub mod profession;
pub mod role;
pub mod shop;
pub mod shop_category;
pub mod shop_type;
pub mod user;
pub mod user_role;
pub mod verification;
pub mod work_type;
