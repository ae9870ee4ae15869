//! Category domain model

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::result::{Error, Result};
use super::transaction::TransactionType;

const HEX_COLOR_PATTERN: &str = r"^#[0-9A-Fa-f]{6}$";

/// A user-defined transaction category
///
/// Supports one level of hierarchy through `parent_category_id`. Parents and
/// children are linked by id only; nothing here walks the hierarchy, and
/// cycles are not detected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    id: Uuid,
    user_id: Uuid,
    name: String,
    kind: TransactionType,
    parent_category_id: Option<Uuid>,
    color: Option<String>,
    created_at: DateTime<Utc>,
}

impl Category {
    /// Create a new category with a freshly generated id
    pub fn create(
        user_id: Uuid,
        name: &str,
        kind: TransactionType,
        parent_category_id: Option<Uuid>,
    ) -> Result<Self> {
        validate_name(name)?;

        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            name: name.trim().to_string(),
            kind,
            parent_category_id,
            color: None,
            created_at: Utc::now(),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> TransactionType {
        self.kind
    }

    pub fn parent_category_id(&self) -> Option<Uuid> {
        self.parent_category_id
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Rename the category, re-validating the name
    pub fn update_name(&mut self, new_name: &str) -> Result<()> {
        validate_name(new_name)?;
        self.name = new_name.trim().to_string();
        Ok(())
    }

    /// Attach to (or detach from) a parent category
    pub fn set_parent_category(&mut self, parent_category_id: Option<Uuid>) {
        self.parent_category_id = parent_category_id;
    }

    /// Set or clear the display color; must be `#RRGGBB` when present
    pub fn set_color(&mut self, color: Option<String>) -> Result<()> {
        if let Some(value) = &color {
            validate_color(value)?;
        }
        self.color = color;
        Ok(())
    }

    /// Whether this category has a parent
    pub fn is_subcategory(&self) -> bool {
        self.parent_category_id.is_some()
    }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Category {}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::validation("Category name cannot be empty"));
    }
    Ok(())
}

fn validate_color(color: &str) -> Result<()> {
    if color.trim().is_empty() {
        return Err(Error::validation("Color cannot be empty"));
    }
    let pattern = Regex::new(HEX_COLOR_PATTERN).unwrap();
    if !pattern.is_match(color) {
        return Err(Error::validation(
            "Color must be in hex format (e.g., #FF5733)",
        ));
    }
    Ok(())
}
