//! Contains all kinds of errors that can occur while building the schema
//! elements.

use derive_more::From;
use enum_as_inner::EnumAsInner;
use protoschema_diagnostic::{Diagnostic, Report, Severity};

/// A required part of a declaration was never supplied to its builder.
///
/// This is a bug in the caller that assembled the declaration rather than an
/// error in the user's schema.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error,
)]
#[error("`{parameter}` is required")]
pub struct MissingArgument {
    /// The name of the parameter that was not supplied.
    pub parameter: &'static str,
}

impl Report for MissingArgument {
    fn report(&self) -> Diagnostic {
        Diagnostic {
            message: format!(
                "`{}` is required to build an enum declaration",
                self.parameter
            ),
            severity: Severity::Error,
            help_message: None,
        }
    }
}

/// Two constants of one enum share a tag while aliasing is not allowed.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error,
)]
#[error("Duplicate tag {tag} in {qualified_name}")]
pub struct DuplicateTag {
    /// The tag declared more than once.
    pub tag: i32,

    /// The qualified name of the enum declaring the tag.
    pub qualified_name: String,
}

impl Report for DuplicateTag {
    fn report(&self) -> Diagnostic {
        Diagnostic {
            message: self.to_string(),
            severity: Severity::Error,
            help_message: Some(
                "add `option allow_alias = true;` to the enum if the \
                 constants are meant to be aliases"
                    .to_string(),
            ),
        }
    }
}

/// Two enum constants declared in the same scope share a name.
///
/// Enum constants are siblings of their enum rather than children of it, so
/// the constants of every enum in one scope share a single namespace.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error,
)]
#[error("Duplicate enum constant {name} in scope {qualified_name}")]
pub struct DuplicateConstantName {
    /// The constant name declared more than once.
    pub name: String,

    /// The qualified name of the enclosing scope.
    pub qualified_name: String,
}

impl Report for DuplicateConstantName {
    fn report(&self) -> Diagnostic {
        Diagnostic {
            message: self.to_string(),
            severity: Severity::Error,
            help_message: Some(format!(
                "enum constants are scoped to `{}`, not to their enum; rename \
                 one of the `{}` constants",
                self.qualified_name, self.name
            )),
        }
    }
}

/// Is an enumeration containing all kinds of errors that can occur while
/// building the schema elements.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumAsInner,
    From,
    thiserror::Error,
)]
#[allow(missing_docs)]
pub enum Error {
    #[error(transparent)]
    MissingArgument(MissingArgument),

    #[error(transparent)]
    DuplicateTag(DuplicateTag),

    #[error(transparent)]
    DuplicateConstantName(DuplicateConstantName),
}

impl Report for Error {
    fn report(&self) -> Diagnostic {
        match self {
            Self::MissingArgument(error) => error.report(),
            Self::DuplicateTag(error) => error.report(),
            Self::DuplicateConstantName(error) => error.report(),
        }
    }
}

#[cfg(test)]
mod test;
