//! Contains the definition of [`EnumConstantElement`], one named and tagged
//! member of an enum declaration.

use std::fmt::{Display, Formatter, Write};

use getset::{CopyGetters, Getters};

use crate::{
    display::{self, IndentDisplay},
    option::OptionElement,
};

/// An enum constant such as `RED = 1 [deprecated = true];`.
///
/// Constants are compared by value: uniqueness checks look at the
/// [`Self::name`] within a scope and the [`Self::tag`] within one enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, CopyGetters)]
pub struct EnumConstantElement {
    /// The name of the constant.
    #[get = "pub"]
    name: String,

    /// The numeric value of the constant.
    #[get_copy = "pub"]
    tag: i32,

    /// The documentation comment attached to the constant, possibly empty.
    #[get = "pub"]
    documentation: String,

    options: Vec<OptionElement>,
}

impl EnumConstantElement {
    /// Creates a new enum constant.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        tag: i32,
        documentation: impl Into<String>,
        options: Vec<OptionElement>,
    ) -> Self {
        Self {
            name: name.into(),
            tag,
            documentation: documentation.into(),
            options,
        }
    }

    /// Gets the options of the constant, in declaration order.
    #[must_use]
    pub fn options(&self) -> &[OptionElement] { &self.options }
}

impl IndentDisplay for EnumConstantElement {
    fn indent_fmt(
        &self,
        f: &mut Formatter<'_>,
        indent: usize,
    ) -> std::fmt::Result {
        display::write_documentation(f, &self.documentation, indent)?;
        display::write_indent(f, indent)?;
        write!(f, "{} = {}", self.name, self.tag)?;

        if !self.options.is_empty() {
            f.write_str(" [\n")?;
            display::write_separated_lines(
                f,
                &self.options,
                indent + 1,
                |f, option| option.indent_fmt(f, indent + 1),
            )?;
            display::write_indent(f, indent)?;
            f.write_char(']')?;
        }

        f.write_str(";\n")
    }
}

impl Display for EnumConstantElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.indent_fmt(f, 0)
    }
}

#[cfg(test)]
pub(crate) mod strategy;
