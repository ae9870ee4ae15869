//! Create user use case

use std::sync::Arc;

use tracing::info;

use crate::domain::result::{Error, Result};
use crate::domain::{Email, User};
use crate::ports::UserRepository;
use crate::usecases::dto::{CreateUserRequest, UserResponse};

/// Registers a new user, enforcing email uniqueness
///
/// The uniqueness check and the save are two separate repository calls;
/// closing the race between them is the adapter's concern.
pub struct CreateUserUseCase {
    users: Arc<dyn UserRepository>,
}

impl CreateUserUseCase {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub fn execute(&self, request: CreateUserRequest) -> Result<UserResponse> {
        validate_request(&request)?;

        let email = Email::new(&request.email)?;

        if self.users.find_by_email(&email)?.is_some() {
            return Err(Error::Duplicate(format!(
                "User with email {} already exists",
                request.email
            )));
        }

        let user = User::create(&request.name, email, &request.password)?;
        let saved = self.users.save(user)?;

        info!(user_id = %saved.id(), "user created");
        Ok(UserResponse::from_entity(&saved))
    }
}

fn validate_request(request: &CreateUserRequest) -> Result<()> {
    if request.name.trim().is_empty() {
        return Err(Error::validation("Name cannot be null or empty"));
    }
    if request.password.trim().is_empty() {
        return Err(Error::validation("Password cannot be null or empty"));
    }
    Ok(())
}
