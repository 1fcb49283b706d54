use proptest::{
    prelude::{any, Arbitrary, BoxedStrategy, Just, Strategy},
    prop_oneof,
};

use super::{OptionElement, OptionValue};

/// Generates a lowercase identifier usable as an option or constant name.
pub fn identifier() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,8}"
}

impl Arbitrary for OptionValue {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        let leaf = prop_oneof![
            any::<bool>().prop_map(Self::Boolean),
            "-?[0-9]{1,6}(\\.[0-9]{1,3})?".prop_map(Self::Number),
            "[ -~\n\t]{0,12}".prop_map(Self::String),
            "[A-Z][A-Z0-9_]{0,8}".prop_map(Self::Identifier),
            Just(Self::Aggregate(Vec::new())),
        ];

        leaf.prop_recursive(3, 12, 4, |inner| {
            proptest::collection::vec((identifier(), inner), 1..4)
                .prop_map(Self::Aggregate)
        })
        .boxed()
    }
}

impl Arbitrary for OptionElement {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        (
            identifier().prop_filter("reserved for aliasing", |name| {
                name != "allow_alias"
            }),
            OptionValue::arbitrary(),
            any::<bool>(),
        )
            .prop_map(|(name, value, is_parenthesized)| {
                Self::new(name, value, is_parenthesized)
            })
            .boxed()
    }
}
