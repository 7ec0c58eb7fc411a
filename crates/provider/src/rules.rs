//! Name validation rules.

use crate::NameValidator;
use roster_core::error::{RosterError, RosterResult};

/// Stock rule set: a name must contain something other than whitespace,
/// carry no control characters, and fit within a character budget.
///
/// Validation never rewrites the name; whatever the prompt returned is what
/// the list carries, so a host that wants trimming applies it before the
/// engine sees the value.
pub struct NameRules {
    max_chars: usize,
}

impl NameRules {
    pub fn new() -> Self {
        Self { max_chars: 64 }
    }

    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }
}

impl Default for NameRules {
    fn default() -> Self {
        Self::new()
    }
}

impl NameValidator for NameRules {
    fn validate(&self, name: &str) -> RosterResult<()> {
        if name.trim().is_empty() {
            return Err(RosterError::InvalidName("name must not be blank".into()));
        }
        if name.chars().any(char::is_control) {
            return Err(RosterError::InvalidName(
                "name must not contain control characters".into(),
            ));
        }
        if name.chars().count() > self.max_chars {
            return Err(RosterError::InvalidName(format!(
                "name exceeds {} characters",
                self.max_chars
            )));
        }
        Ok(())
    }
}
