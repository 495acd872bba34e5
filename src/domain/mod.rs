//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.
//!
//! DDD: Domain layer has NO external dependencies (except error types).
//! Contains: Entities, Value Objects, Domain Services.

pub mod cart;
pub mod catalog;
pub mod order;
pub mod user;
pub mod waste;

pub use cart::{Cart, CartLine, CartRecord};
pub use catalog::{Category, Item};
pub use order::{remaining_quantity, round2, Order, OrderLine, OrderTotals};
pub use user::User;
pub use waste::{WasteLine, WasteRecord};
