#![forbid(unsafe_code)]

//! Accessibility description of a rendered element.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Button,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Button => "button",
        }
    }
}

/// Sequential-navigation reachability of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabIndex {
    /// Reachable with the tab key (`0`).
    Sequential,
    /// Focusable only programmatically (`-1`).
    Programmatic,
}

impl TabIndex {
    #[must_use]
    pub const fn value(self) -> i8 {
        match self {
            Self::Sequential => 0,
            Self::Programmatic => -1,
        }
    }

    #[must_use]
    pub const fn is_tabbable(self) -> bool {
        matches!(self, Self::Sequential)
    }
}

impl fmt::Display for TabIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct A11yNode {
    pub role: Role,
    /// `aria-label`.
    pub label: String,
    /// `aria-hidden`.
    pub hidden: bool,
    pub tab_index: TabIndex,
    pub disabled: bool,
}

impl A11yNode {
    /// Whether assistive technology should announce this node.
    #[must_use]
    pub fn is_exposed(&self) -> bool {
        !self.hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_index_values() {
        assert_eq!(TabIndex::Sequential.value(), 0);
        assert_eq!(TabIndex::Programmatic.value(), -1);
        assert_eq!(TabIndex::Programmatic.to_string(), "-1");
        assert!(TabIndex::Sequential.is_tabbable());
    }

    #[test]
    fn role_name() {
        assert_eq!(Role::Button.as_str(), "button");
    }
}
