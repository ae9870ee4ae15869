//! Authenticate user use case

use std::sync::Arc;

use tracing::debug;

use crate::domain::result::{Error, Result};
use crate::domain::Email;
use crate::ports::UserRepository;
use crate::usecases::dto::{AuthenticationRequest, AuthenticationResponse};

/// Verifies credentials and issues a session token
///
/// Unknown email and wrong password produce the same error on purpose:
/// the response must not reveal whether an account exists.
pub struct AuthenticateUserUseCase {
    users: Arc<dyn UserRepository>,
}

impl AuthenticateUserUseCase {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub fn execute(&self, request: AuthenticationRequest) -> Result<AuthenticationResponse> {
        validate_request(&request)?;

        let email = Email::new(&request.email)?;

        let user = self
            .users
            .find_by_email(&email)?
            .ok_or(Error::InvalidCredentials)?;

        if !user.verify_password(&request.password) {
            return Err(Error::InvalidCredentials);
        }

        // TODO: replace with real token issuance once the JWT infrastructure
        // adapter exists
        let token = format!("temporary-token-{}", user.id());

        debug!(user_id = %user.id(), "user authenticated");
        Ok(AuthenticationResponse {
            user_id: user.id(),
            name: user.name().to_string(),
            email: user.email().as_str().to_string(),
            token,
        })
    }
}

fn validate_request(request: &AuthenticationRequest) -> Result<()> {
    if request.email.trim().is_empty() || request.password.trim().is_empty() {
        return Err(Error::validation("Email and password are required"));
    }
    Ok(())
}
