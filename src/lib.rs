//! Storefront schema library
//!
//! Creates and inspects the relational schema of a multi-vendor storefront:
//! users, vendors, categories, products with variations and images, coupons,
//! orders with their line items, and marketing banners.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod schema;

pub use errors::{AppError, AppResult, SchemaError};
pub use schema::{initialize, InitMode, InitReport, SchemaInitializer};
