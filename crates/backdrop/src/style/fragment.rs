//! Style fragments: the structured output of the emitters.
//!
//! A [`StyleFragment`] is an ordered list of CSS declarations plus an optional
//! `&:before` block. It renders to CSS text through [`Display`](fmt::Display)
//! and serializes with serde for consumers that build styles another way.
//!
//! ```rust
//! use backdrop::StyleFragment;
//!
//! let fragment = StyleFragment::new()
//!     .with("background-color", "#7D4CDB")
//!     .with("color", "#f8f8f8");
//!
//! assert_eq!(fragment.get("color"), Some("#f8f8f8"));
//! assert_eq!(
//!     fragment.to_string(),
//!     "background-color: #7D4CDB;\ncolor: #f8f8f8;\n"
//! );
//! ```

use std::fmt;

use serde::Serialize;

/// A single `property: value` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {};", self.property, self.value)
    }
}

/// CSS declarations for one element, in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StyleFragment {
    declarations: Vec<Declaration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    before: Option<Vec<Declaration>>,
}

impl StyleFragment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a declaration.
    pub fn declare(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.declarations.push(Declaration::new(property, value));
    }

    /// Builder form of [`declare`](Self::declare).
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.declare(property, value);
        self
    }

    /// Sets the `&:before` pseudo-element block.
    pub fn with_before(mut self, declarations: Vec<Declaration>) -> Self {
        self.before = Some(declarations);
        self
    }

    /// The last value declared for `property` on the element itself.
    pub fn get(&self, property: &str) -> Option<&str> {
        find(&self.declarations, property)
    }

    /// The last value declared for `property` inside the `&:before` block.
    pub fn get_before(&self, property: &str) -> Option<&str> {
        self.before
            .as_deref()
            .and_then(|before| find(before, property))
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    pub fn before(&self) -> Option<&[Declaration]> {
        self.before.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty() && self.before.as_ref().map_or(true, Vec::is_empty)
    }

    /// Appends another fragment's declarations. A `before` block in `other`
    /// replaces this fragment's block.
    pub fn extend(&mut self, other: StyleFragment) {
        self.declarations.extend(other.declarations);
        if other.before.is_some() {
            self.before = other.before;
        }
    }
}

fn find<'a>(declarations: &'a [Declaration], property: &str) -> Option<&'a str> {
    declarations
        .iter()
        .rev()
        .find(|d| d.property == property)
        .map(|d| d.value.as_str())
}

impl fmt::Display for StyleFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for declaration in &self.declarations {
            writeln!(f, "{}", declaration)?;
        }
        if let Some(before) = &self.before {
            writeln!(f, "&:before {{")?;
            for declaration in before {
                writeln!(f, "  {}", declaration)?;
            }
            writeln!(f, "}}")?;
        }
        Ok(())
    }
}
