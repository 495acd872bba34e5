//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and migrations
//! - Repositories over the store tables
//! - Unit of Work for transaction management

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use repositories::{
    CartRepository, CartStore, CatalogRepository, CatalogStore, OrderRepository, OrderStore,
    UserRepository, UserStore, WasteRepository, WasteStore,
};
pub use unit_of_work::{OrderCommit, Persistence, UnitOfWork};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{
    MockCartRepository, MockCatalogRepository, MockOrderRepository, MockUserRepository,
    MockWasteRepository,
};
#[cfg(any(test, feature = "test-utils"))]
pub use unit_of_work::MockUnitOfWork;
