//! Error types for fallible docking operations.
//!
//! Structural rejections (a guide that does not apply, a maximized target
//! area) are reported as `false` by the mutation entry points; only
//! operations on the item registry and whole-layout application return a
//! [`DockError`].

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DockError {
    /// The layout referenced items that are not registered with the manager.
    UnknownItems(Vec<String>),
    /// An item with this name is already registered.
    DuplicateItem(String),
}

impl fmt::Display for DockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DockError::UnknownItems(names) => {
                write!(f, "layout references unknown dock items: {}", names.join(", "))
            }
            DockError::DuplicateItem(name) => write!(f, "dock item '{}' is already registered", name),
        }
    }
}

impl std::error::Error for DockError {}

/// Result type for docking operations.
pub type DockResult<T> = Result<T, DockError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_items_lists_every_name() {
        let err = DockError::UnknownItems(vec!["a".into(), "b".into()]);
        assert_eq!(err.to_string(), "layout references unknown dock items: a, b");
    }
}
