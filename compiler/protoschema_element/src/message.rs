//! Contains the definition of [`MessageElement`], a message type declaration
//! acting as the enclosing scope of its nested declarations.

use std::fmt::{Display, Formatter, Write};

use getset::Getters;
use log::debug;

use crate::{
    display::{self, IndentDisplay},
    error::DuplicateConstantName,
    option::OptionElement,
    r#enum::validate_value_uniqueness_in_scope,
    type_element::TypeElement,
};

/// A message type declaration.
///
/// Only the parts that take part in scoping are modelled: the options and the
/// nested type declarations. Fields belong to the field declarations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters)]
pub struct MessageElement {
    /// The simple name of the message.
    #[get = "pub"]
    name: String,

    /// The fully qualified name of the message, used to label diagnostics.
    #[get = "pub"]
    qualified_name: String,

    /// The documentation comment attached to the message, possibly empty.
    #[get = "pub"]
    documentation: String,

    options: Vec<OptionElement>,
    nested_elements: Vec<TypeElement>,
}

impl MessageElement {
    /// Creates a new message declaration.
    ///
    /// The message is the enclosing scope of `nested_elements`, so the enum
    /// constants declared by its nested enums are checked for uniqueness here.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateConstantName`] if two nested enums declare a
    /// constant with the same name.
    pub fn create(
        name: impl Into<String>,
        qualified_name: impl Into<String>,
        documentation: impl Into<String>,
        options: Vec<OptionElement>,
        nested_elements: Vec<TypeElement>,
    ) -> Result<Self, DuplicateConstantName> {
        let qualified_name = qualified_name.into();

        validate_value_uniqueness_in_scope(&qualified_name, &nested_elements)?;

        debug!(
            "created message `{qualified_name}` with {} nested element(s)",
            nested_elements.len()
        );

        Ok(Self {
            name: name.into(),
            qualified_name,
            documentation: documentation.into(),
            options,
            nested_elements,
        })
    }

    /// Gets the options of the message, in declaration order.
    #[must_use]
    pub fn options(&self) -> &[OptionElement] { &self.options }

    /// Gets the type declarations nested inside the message.
    #[must_use]
    pub fn nested_elements(&self) -> &[TypeElement] { &self.nested_elements }

    /// Renders the canonical source text of the message.
    #[must_use]
    pub fn render(&self) -> String { self.to_string() }
}

impl IndentDisplay for MessageElement {
    fn indent_fmt(
        &self,
        f: &mut Formatter<'_>,
        indent: usize,
    ) -> std::fmt::Result {
        display::write_documentation(f, &self.documentation, indent)?;
        display::write_indent(f, indent)?;
        write!(f, "message {} {{", self.name)?;

        if !self.options.is_empty() {
            f.write_char('\n')?;
            for option in &self.options {
                option.declaration().indent_fmt(f, indent + 1)?;
            }
        }

        if !self.nested_elements.is_empty() {
            f.write_char('\n')?;
            for element in &self.nested_elements {
                element.indent_fmt(f, indent + 1)?;
            }
        }

        display::write_block_end(
            f,
            indent,
            self.options.is_empty() && self.nested_elements.is_empty(),
        )
    }
}

impl Display for MessageElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.indent_fmt(f, 0)
    }
}
