use proptest::prelude::{any, Arbitrary, BoxedStrategy, Strategy};

use super::EnumConstantElement;
use crate::option::OptionElement;

/// Generates an uppercase identifier usable as an enum constant name.
pub fn constant_name() -> impl Strategy<Value = String> {
    "[A-Z][A-Z0-9_]{0,10}"
}

/// Generates a documentation comment of up to three lines.
pub fn documentation() -> impl Strategy<Value = String> {
    "([A-Za-z][A-Za-z ]{0,16}(\n[A-Za-z ]{0,16}){0,2})?"
}

impl Arbitrary for EnumConstantElement {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        (
            constant_name(),
            any::<i32>(),
            documentation(),
            proptest::collection::vec(OptionElement::arbitrary(), 0..3),
        )
            .prop_map(|(name, tag, documentation, options)| {
                Self::new(name, tag, documentation, options)
            })
            .boxed()
    }
}
