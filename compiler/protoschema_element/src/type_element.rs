//! Contains the definition of [`TypeElement`], the closed set of declarations
//! that can appear in a scope.

use std::fmt::{Display, Formatter};

use derive_more::From;
use enum_as_inner::EnumAsInner;

use crate::{
    display::IndentDisplay, message::MessageElement, option::OptionElement,
    r#enum::EnumElement,
};

/// A type declaration nested directly inside a scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumAsInner, From)]
#[allow(missing_docs)]
pub enum TypeElement {
    Enum(EnumElement),
    Message(MessageElement),
}

impl TypeElement {
    /// Gets the simple name of the declaration.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Enum(element) => element.name(),
            Self::Message(element) => element.name(),
        }
    }

    /// Gets the fully qualified name of the declaration.
    #[must_use]
    pub fn qualified_name(&self) -> &str {
        match self {
            Self::Enum(element) => element.qualified_name(),
            Self::Message(element) => element.qualified_name(),
        }
    }

    /// Gets the documentation comment of the declaration.
    #[must_use]
    pub fn documentation(&self) -> &str {
        match self {
            Self::Enum(element) => element.documentation(),
            Self::Message(element) => element.documentation(),
        }
    }

    /// Gets the options of the declaration, in declaration order.
    #[must_use]
    pub fn options(&self) -> &[OptionElement] {
        match self {
            Self::Enum(element) => element.options(),
            Self::Message(element) => element.options(),
        }
    }

    /// Gets the type declarations nested inside this declaration.
    #[must_use]
    pub fn nested_elements(&self) -> &[Self] {
        match self {
            Self::Enum(element) => element.nested_elements(),
            Self::Message(element) => element.nested_elements(),
        }
    }
}

impl IndentDisplay for TypeElement {
    fn indent_fmt(
        &self,
        f: &mut Formatter<'_>,
        indent: usize,
    ) -> std::fmt::Result {
        match self {
            Self::Enum(element) => element.indent_fmt(f, indent),
            Self::Message(element) => element.indent_fmt(f, indent),
        }
    }
}

impl Display for TypeElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.indent_fmt(f, 0)
    }
}
