//! Contains the definition of the [`Diagnostic`] struct and related types.

use std::fmt::{Display, Formatter};

/// Implement this trait for a type that can report a diagnostic.
///
/// This trait is typically implemented by structs or enums that encode the
/// error conditions found while building the schema elements. Keeping the
/// error value separate from its [`Diagnostic`] lets the caller decide whether
/// to abort on the first error or to collect them for a batched report.
pub trait Report {
    /// Creates a diagnostic.
    fn report(&self) -> Diagnostic;
}

/// Enumeration of the severity levels of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// An error that makes the schema invalid.
    Error,

    /// A warning that does not invalidate the schema.
    Warning,

    /// An informational message.
    Info,
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        })
    }
}

/// A struct containing all the information required to display the diagnostic
/// to the user.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Diagnostic {
    /// The message to display to the user.
    pub message: String,

    /// The severity of the diagnostic.
    pub severity: Severity,

    /// The optional help message to display to the user. This will be
    /// displayed alongside the main message.
    pub help_message: Option<String>,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;

        if let Some(help_message) = self.help_message.as_deref() {
            write!(f, "\n  = help: {help_message}")?;
        }

        Ok(())
    }
}
