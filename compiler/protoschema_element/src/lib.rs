//! This crate implements the immutable element model of the Protocol Buffers
//! schema language.
//!
//! The elements are built from already tokenized parts. Every factory checks
//! the semantic rules of its declaration before producing the element, so a
//! successfully constructed element is always well-formed. Each element can be
//! rendered back to its canonical source text through [`std::fmt::Display`]
//! or [`display::IndentDisplay`].

pub mod constant;
pub mod display;
pub mod r#enum;
pub mod error;
pub mod message;
pub mod option;
pub mod type_element;

pub use constant::EnumConstantElement;
pub use error::{DuplicateConstantName, DuplicateTag, Error, MissingArgument};
pub use message::MessageElement;
pub use option::{OptionElement, OptionValue};
pub use r#enum::{validate_value_uniqueness_in_scope, EnumElement};
pub use type_element::TypeElement;
