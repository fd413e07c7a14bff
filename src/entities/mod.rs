//! Row models for the storefront tables.
//!
//! The schema itself is declared in [`crate::schema`]; these entities are the
//! typed view of the same tables for the CRUD layers built on top of it. The
//! closed value sets (roles, statuses, discount types) live here and the
//! schema derives its `CHECK` constraints from them.

pub mod banner;
pub mod category;
pub mod coupon;
pub mod order;
pub mod order_item;
pub mod product;
pub mod product_image;
pub mod product_variation;
pub mod user;
pub mod vendor;

pub use coupon::{CouponStatus, DiscountType};
pub use order::OrderStatus;
pub use product::ProductStatus;
pub use user::UserRole;
pub use vendor::VendorStatus;
