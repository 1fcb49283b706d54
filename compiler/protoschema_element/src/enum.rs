//! Contains the definition of [`EnumElement`], an enumerated type declaration,
//! and the scope-level validation of enum constant names.

use std::{
    collections::HashSet,
    fmt::{Display, Formatter, Write},
};

use getset::Getters;
use log::{debug, trace};

use crate::{
    constant::EnumConstantElement,
    display::{self, IndentDisplay},
    error::{DuplicateConstantName, DuplicateTag, Error, MissingArgument},
    option::OptionElement,
    type_element::TypeElement,
};

/// The option that permits constants of one enum to share a tag.
pub const ALLOW_ALIAS: &str = "allow_alias";

/// An enumerated type declaration.
///
/// The only way to obtain an [`EnumElement`] is through [`Self::create`] (or
/// [`EnumElementBuilder::build`]), which rejects duplicate tags unless the
/// enum sets `allow_alias = true`. The element is never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters)]
pub struct EnumElement {
    /// The simple name of the enum.
    #[get = "pub"]
    name: String,

    /// The fully qualified name of the enum, used to label diagnostics.
    #[get = "pub"]
    qualified_name: String,

    /// The documentation comment attached to the enum, possibly empty.
    #[get = "pub"]
    documentation: String,

    options: Vec<OptionElement>,
    constants: Vec<EnumConstantElement>,
}

/// Returns `true` if the options contain `allow_alias = true`.
///
/// A non-boolean `allow_alias` value does not permit aliasing.
fn parse_allow_alias(options: &[OptionElement]) -> bool {
    OptionElement::find_by_name(options, ALLOW_ALIAS)
        .and_then(|option| option.value().as_boolean())
        .is_some_and(|allow_alias| *allow_alias)
}

fn validate_tag_uniqueness(
    qualified_name: &str,
    constants: &[EnumConstantElement],
) -> Result<(), DuplicateTag> {
    let mut tags = HashSet::with_capacity(constants.len());

    for constant in constants {
        if !tags.insert(constant.tag()) {
            return Err(DuplicateTag {
                tag: constant.tag(),
                qualified_name: qualified_name.to_owned(),
            });
        }
    }

    Ok(())
}

/// Checks that no two enum constants declared directly inside one scope share
/// a name.
///
/// Enum constants follow C++ scoping rules: they are siblings of their
/// declaring enum, not children of it. Therefore the constants of *every*
/// enum in `elements` share one namespace. Elements other than enums don't
/// declare constants and are skipped.
///
/// This can only run once the whole scope has been assembled, so it is
/// invoked by the enclosing declaration rather than by
/// [`EnumElement::create`].
///
/// # Errors
///
/// Returns [`DuplicateConstantName`] for the first constant name, in
/// declaration order, that was already declared in the scope.
pub fn validate_value_uniqueness_in_scope(
    qualified_name: &str,
    elements: &[TypeElement],
) -> Result<(), DuplicateConstantName> {
    let mut names = HashSet::new();

    for constant in elements
        .iter()
        .filter_map(TypeElement::as_enum)
        .flat_map(EnumElement::constants)
    {
        if !names.insert(constant.name().as_str()) {
            return Err(DuplicateConstantName {
                name: constant.name().clone(),
                qualified_name: qualified_name.to_owned(),
            });
        }
    }

    debug!(
        "validated {} enum constant name(s) in scope `{qualified_name}`",
        names.len()
    );

    Ok(())
}

impl EnumElement {
    /// Creates a new enum declaration.
    ///
    /// The options and constants keep their declaration order, which is the
    /// order they are rendered in.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateTag`] for the first tag declared twice among
    /// `constants`, unless `options` contains `allow_alias = true`. In that
    /// case tags are not checked at all.
    pub fn create(
        name: impl Into<String>,
        qualified_name: impl Into<String>,
        documentation: impl Into<String>,
        options: Vec<OptionElement>,
        constants: Vec<EnumConstantElement>,
    ) -> Result<Self, DuplicateTag> {
        let qualified_name = qualified_name.into();

        if parse_allow_alias(&options) {
            trace!("`{qualified_name}` allows aliases, skipping tag checks");
        } else {
            validate_tag_uniqueness(&qualified_name, &constants)?;
        }

        debug!(
            "created enum `{qualified_name}` with {} option(s) and {} \
             constant(s)",
            options.len(),
            constants.len()
        );

        Ok(Self {
            name: name.into(),
            qualified_name,
            documentation: documentation.into(),
            options,
            constants,
        })
    }

    /// Creates a builder for assembling an enum declaration part by part.
    #[must_use]
    pub fn builder() -> EnumElementBuilder { EnumElementBuilder::default() }

    /// Gets the options of the enum, in declaration order.
    #[must_use]
    pub fn options(&self) -> &[OptionElement] { &self.options }

    /// Gets the constants of the enum, in declaration order.
    #[must_use]
    pub fn constants(&self) -> &[EnumConstantElement] { &self.constants }

    /// Gets the type declarations nested inside the enum.
    ///
    /// Enums cannot declare nested types, so this is always empty.
    #[must_use]
    pub const fn nested_elements(&self) -> &[TypeElement] { &[] }

    /// Returns `true` if the enum sets `allow_alias = true`.
    #[must_use]
    pub fn allows_alias(&self) -> bool { parse_allow_alias(&self.options) }

    /// Renders the canonical source text of the enum.
    #[must_use]
    pub fn render(&self) -> String { self.to_string() }
}

impl IndentDisplay for EnumElement {
    fn indent_fmt(
        &self,
        f: &mut Formatter<'_>,
        indent: usize,
    ) -> std::fmt::Result {
        display::write_documentation(f, &self.documentation, indent)?;
        display::write_indent(f, indent)?;
        write!(f, "enum {} {{", self.name)?;

        if !self.options.is_empty() {
            f.write_char('\n')?;
            for option in &self.options {
                option.declaration().indent_fmt(f, indent + 1)?;
            }
        }

        if !self.constants.is_empty() {
            f.write_char('\n')?;
            for constant in &self.constants {
                constant.indent_fmt(f, indent + 1)?;
            }
        }

        display::write_block_end(
            f,
            indent,
            self.options.is_empty() && self.constants.is_empty(),
        )
    }
}

impl Display for EnumElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.indent_fmt(f, 0)
    }
}

/// Assembles an [`EnumElement`] from parts supplied one at a time.
///
/// The name and the qualified name are required; the documentation, options
/// and constants default to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumElementBuilder {
    name: Option<String>,
    qualified_name: Option<String>,
    documentation: Option<String>,
    options: Vec<OptionElement>,
    constants: Vec<EnumConstantElement>,
}

impl EnumElementBuilder {
    /// Sets the simple name of the enum.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the fully qualified name of the enum.
    #[must_use]
    pub fn qualified_name(mut self, qualified_name: impl Into<String>) -> Self {
        self.qualified_name = Some(qualified_name.into());
        self
    }

    /// Sets the documentation comment of the enum.
    #[must_use]
    pub fn documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = Some(documentation.into());
        self
    }

    /// Appends an option after the ones added so far.
    #[must_use]
    pub fn option(mut self, option: OptionElement) -> Self {
        self.options.push(option);
        self
    }

    /// Appends a constant after the ones added so far.
    #[must_use]
    pub fn constant(mut self, constant: EnumConstantElement) -> Self {
        self.constants.push(constant);
        self
    }

    /// Validates the collected parts and builds the [`EnumElement`].
    ///
    /// # Errors
    ///
    /// - [`MissingArgument`] if the name or the qualified name was never set.
    /// - [`DuplicateTag`] as described in [`EnumElement::create`].
    pub fn build(self) -> Result<EnumElement, Error> {
        let name = self.name.ok_or(MissingArgument { parameter: "name" })?;
        let qualified_name = self
            .qualified_name
            .ok_or(MissingArgument { parameter: "qualified_name" })?;

        Ok(EnumElement::create(
            name,
            qualified_name,
            self.documentation.unwrap_or_default(),
            self.options,
            self.constants,
        )?)
    }
}

#[cfg(test)]
pub(crate) mod strategy;
