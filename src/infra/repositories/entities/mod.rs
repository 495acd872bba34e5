//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.
//! One entity per store collection; order lines, cart lines, and waste
//! lines are kept as JSON documents inside their parent rows.

pub mod inventory_category;
pub mod inventory_item;
pub mod invoice;
pub mod order;
pub mod user;
pub mod user_cart;
pub mod wastage;
