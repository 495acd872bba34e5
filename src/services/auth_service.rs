//! Authentication service - Handles login.
//!
//! SOLID (SRP): Handles authentication concerns only.
//! DDD: Uses Unit of Work for repository access.
//!
//! Accounts carry plaintext passwords; login is a straight
//! lookup-and-compare with no tokens or sessions issued.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::User;
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Login with email and password, returning the account on success
    async fn login(&self, email: String, password: String) -> AppResult<User>;
}

/// Concrete implementation of AuthService using Unit of Work.
pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> Authenticator<U> {
    /// Create new auth service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> AuthService for Authenticator<U> {
    async fn login(&self, email: String, password: String) -> AppResult<User> {
        // Unknown email and wrong password are indistinguishable to the
        // caller
        let user = self
            .uow
            .users()
            .find_by_email(&email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !user.password_matches(&password) {
            return Err(AppError::InvalidCredentials);
        }

        Ok(user)
    }
}
