//! Service Container - Centralized service access.
//!
//! SOLID (SRP): Manages service lifecycle and access.
//! SOLID (DIP): Depends on service traits, not implementations.

use std::sync::Arc;

use super::{AuthService, CartService, CatalogService, OrderService, WasteService};
use crate::config::Config;
use crate::infra::Persistence;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
///
/// Provides centralized access to all application services.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get catalog service
    fn catalog(&self) -> Arc<dyn CatalogService>;

    /// Get cart service
    fn carts(&self) -> Arc<dyn CartService>;

    /// Get order service
    fn orders(&self) -> Arc<dyn OrderService>;

    /// Get waste service
    fn waste(&self) -> Arc<dyn WasteService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    catalog_service: Arc<dyn CatalogService>,
    cart_service: Arc<dyn CartService>,
    order_service: Arc<dyn OrderService>,
    waste_service: Arc<dyn WasteService>,
}

impl Services {
    /// Create a new service container with all services initialized
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        catalog_service: Arc<dyn CatalogService>,
        cart_service: Arc<dyn CartService>,
        order_service: Arc<dyn OrderService>,
        waste_service: Arc<dyn WasteService>,
    ) -> Self {
        Self {
            auth_service,
            catalog_service,
            cart_service,
            order_service,
            waste_service,
        }
    }

    /// Create service container from database connection and config
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: Config) -> Self {
        use super::{Authenticator, CartManager, CatalogReader, OrderWorkflow, WasteRecorder};

        let uow = Arc::new(Persistence::new(db));
        let auth_service = Arc::new(Authenticator::new(uow.clone()));
        let catalog_service = Arc::new(CatalogReader::new(uow.clone()));
        let cart_service = Arc::new(CartManager::new(uow.clone()));
        let order_service = Arc::new(OrderWorkflow::new(uow.clone(), config.clone()));
        let waste_service = Arc::new(WasteRecorder::new(uow.clone(), config));

        Self {
            auth_service,
            catalog_service,
            cart_service,
            order_service,
            waste_service,
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn catalog(&self) -> Arc<dyn CatalogService> {
        self.catalog_service.clone()
    }

    fn carts(&self) -> Arc<dyn CartService> {
        self.cart_service.clone()
    }

    fn orders(&self) -> Arc<dyn OrderService> {
        self.order_service.clone()
    }

    fn waste(&self) -> Arc<dyn WasteService> {
        self.waste_service.clone()
    }
}
