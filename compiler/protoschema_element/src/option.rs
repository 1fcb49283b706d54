//! Contains the definition of [`OptionElement`], a name/value annotation that
//! can be attached to declarations and enum constants.

use std::fmt::{Display, Formatter, Write};

use enum_as_inner::EnumAsInner;
use getset::{CopyGetters, Getters};

use crate::display::{self, IndentDisplay};

/// The literal value assigned to an option.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumAsInner)]
pub enum OptionValue {
    /// `true` or `false`.
    Boolean(bool),

    /// A numeric literal, kept as written in the source code.
    Number(String),

    /// A string literal, stored unescaped.
    String(String),

    /// A bare identifier such as an enum constant (`optimize_for = SPEED`).
    Identifier(String),

    /// A braced aggregate of `key: value` entries, in declaration order.
    Aggregate(Vec<(String, OptionValue)>),
}

fn write_quoted(f: &mut Formatter<'_>, string: &str) -> std::fmt::Result {
    f.write_char('"')?;

    for character in string.chars() {
        match character {
            '\\' => f.write_str("\\\\")?,
            '"' => f.write_str("\\\"")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            character => f.write_char(character)?,
        }
    }

    f.write_char('"')
}

impl IndentDisplay for OptionValue {
    fn indent_fmt(
        &self,
        f: &mut Formatter<'_>,
        indent: usize,
    ) -> std::fmt::Result {
        match self {
            Self::Boolean(boolean) => write!(f, "{boolean}"),
            Self::Number(literal) | Self::Identifier(literal) => {
                f.write_str(literal)
            }
            Self::String(string) => write_quoted(f, string),
            Self::Aggregate(entries) if entries.is_empty() => f.write_str("{}"),
            Self::Aggregate(entries) => {
                f.write_str("{\n")?;
                display::write_separated_lines(
                    f,
                    entries,
                    indent + 1,
                    |f, (key, value)| {
                        write!(f, "{key}: ")?;
                        value.indent_fmt(f, indent + 1)
                    },
                )?;
                display::write_indent(f, indent)?;
                f.write_char('}')
            }
        }
    }
}

impl Display for OptionValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.indent_fmt(f, 0)
    }
}

/// A single `name = value` option.
///
/// The inline form rendered by [`Display`] is the one used inside the
/// brackets of an enum constant; [`OptionElement::declaration`] gives the
/// `option ...;` statement form used in a declaration body.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, CopyGetters)]
pub struct OptionElement {
    /// The name of the option, without parentheses.
    #[get = "pub"]
    name: String,

    /// The value assigned to the option.
    #[get = "pub"]
    value: OptionValue,

    /// Whether the name is a parenthesized custom (extension) option.
    #[get_copy = "pub"]
    is_parenthesized: bool,
}

impl OptionElement {
    /// Creates a new option.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        value: OptionValue,
        is_parenthesized: bool,
    ) -> Self {
        Self { name: name.into(), value, is_parenthesized }
    }

    /// Finds the first option with the given name, in declaration order.
    #[must_use]
    pub fn find_by_name<'a>(
        options: &'a [Self],
        name: &str,
    ) -> Option<&'a Self> {
        options.iter().find(|option| option.name == name)
    }

    /// Gets the `option <name> = <value>;` statement form of this option.
    #[must_use]
    pub const fn declaration(&self) -> Declaration<'_> { Declaration(self) }
}

impl IndentDisplay for OptionElement {
    fn indent_fmt(
        &self,
        f: &mut Formatter<'_>,
        indent: usize,
    ) -> std::fmt::Result {
        if self.is_parenthesized {
            write!(f, "({}) = ", self.name)?;
        } else {
            write!(f, "{} = ", self.name)?;
        }

        self.value.indent_fmt(f, indent)
    }
}

impl Display for OptionElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.indent_fmt(f, 0)
    }
}

/// The statement form of an [`OptionElement`], terminated by a newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Declaration<'a>(&'a OptionElement);

impl IndentDisplay for Declaration<'_> {
    fn indent_fmt(
        &self,
        f: &mut Formatter<'_>,
        indent: usize,
    ) -> std::fmt::Result {
        display::write_indent(f, indent)?;
        f.write_str("option ")?;
        self.0.indent_fmt(f, indent)?;
        f.write_str(";\n")
    }
}

impl Display for Declaration<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.indent_fmt(f, 0)
    }
}

#[cfg(test)]
pub(crate) mod strategy;
