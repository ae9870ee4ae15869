//! User domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::email::Email;
use super::result::{Error, Result};

const MIN_PASSWORD_LEN: usize = 6;

/// A registered user, identified by `id`
///
/// Instances only exist in a valid state: construction goes through
/// [`User::create`], which validates every field and hashes the password
/// before the value is returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    id: Uuid,
    name: String,
    email: Email,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a freshly generated id
    ///
    /// The name must be non-blank and the password at least six characters.
    /// The plain password is hashed immediately and never stored.
    pub fn create(name: &str, email: Email, plain_password: &str) -> Result<Self> {
        validate_name(name)?;
        validate_password(plain_password)?;

        Ok(Self {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
            email,
            password_hash: hash_password(plain_password),
            created_at: Utc::now(),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Whether the given plain password matches the stored hash
    pub fn verify_password(&self, plain_password: &str) -> bool {
        self.password_hash == hash_password(plain_password)
    }

    /// Update the user's name, re-validating it
    pub fn update_name(&mut self, new_name: &str) -> Result<()> {
        validate_name(new_name)?;
        self.name = new_name.trim().to_string();
        Ok(())
    }

    /// Change the password after verifying the current one
    pub fn change_password(&mut self, current_password: &str, new_password: &str) -> Result<()> {
        if !self.verify_password(current_password) {
            return Err(Error::validation("Current password is incorrect"));
        }
        validate_password(new_password)?;
        self.password_hash = hash_password(new_password);
        Ok(())
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::validation("Name cannot be null or empty"));
    }
    Ok(())
}

fn validate_password(password: &str) -> Result<()> {
    if password.is_empty() {
        return Err(Error::validation("Password cannot be null or empty"));
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(Error::validation(
            "Password must be at least 6 characters long",
        ));
    }
    Ok(())
}

/// Reversible placeholder hash, kept for compatibility with existing stored
/// hashes. Real key derivation belongs to the infrastructure layer.
fn hash_password(plain_password: &str) -> String {
    format!("hashed_{}_{}", plain_password, plain_password.len())
}
