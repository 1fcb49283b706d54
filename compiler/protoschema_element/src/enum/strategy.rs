use proptest::{
    prelude::{any, Arbitrary, BoxedStrategy, Strategy},
    prop_assert_eq,
    test_runner::TestCaseResult,
};
use protoschema_test_input::Input;

use crate::{
    constant::{
        strategy::{constant_name, documentation},
        EnumConstantElement,
    },
    option::OptionElement,
    r#enum::EnumElement,
};

/// The parts of a well-formed enum declaration: every constant has a distinct
/// name and a distinct tag, and no option is named `allow_alias`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enum {
    pub name: String,
    pub package: String,
    pub documentation: String,
    pub options: Vec<OptionElement>,
    pub constants: Vec<EnumConstantElement>,
}

impl Enum {
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.package, self.name)
    }

    pub fn create(&self) -> Result<EnumElement, crate::error::DuplicateTag> {
        EnumElement::create(
            self.name.clone(),
            self.qualified_name(),
            self.documentation.clone(),
            self.options.clone(),
            self.constants.clone(),
        )
    }
}

impl Input<&EnumConstantElement, ()> for &EnumConstantElement {
    fn assert(self, output: &EnumConstantElement, (): ()) -> TestCaseResult {
        prop_assert_eq!(self, output);
        Ok(())
    }
}

impl Input<&OptionElement, ()> for &OptionElement {
    fn assert(self, output: &OptionElement, (): ()) -> TestCaseResult {
        prop_assert_eq!(self, output);
        Ok(())
    }
}

impl Input<&EnumElement, ()> for &Enum {
    fn assert(self, output: &EnumElement, (): ()) -> TestCaseResult {
        prop_assert_eq!(&self.name, output.name());
        prop_assert_eq!(&self.qualified_name(), output.qualified_name());
        prop_assert_eq!(&self.documentation, output.documentation());
        prop_assert_eq!(output.nested_elements().len(), 0);
        self.options.as_slice().assert(output.options(), ())?;
        self.constants.as_slice().assert(output.constants(), ())
    }
}

impl Arbitrary for Enum {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        let constants = (
            proptest::collection::btree_set(constant_name(), 0..8),
            proptest::collection::btree_set(any::<i32>(), 8),
        )
            .prop_flat_map(|(names, tags)| {
                let names = names.into_iter().collect::<Vec<_>>();
                let tags = tags.into_iter().collect::<Vec<_>>();
                let len = names.len();

                (
                    proptest::sample::subsequence(tags, len)
                        .prop_shuffle(),
                    proptest::collection::vec(
                        (
                            documentation(),
                            proptest::collection::vec(
                                OptionElement::arbitrary(),
                                0..2,
                            ),
                        ),
                        len,
                    ),
                )
                    .prop_map(move |(tags, parts)| {
                        names
                            .iter()
                            .zip(tags)
                            .zip(parts)
                            .map(|((name, tag), (documentation, options))| {
                                EnumConstantElement::new(
                                    name.clone(),
                                    tag,
                                    documentation,
                                    options,
                                )
                            })
                            .collect::<Vec<_>>()
                    })
            });

        (
            "[A-Z][A-Za-z0-9]{0,10}",
            "[a-z]{1,6}(\\.[a-z]{1,6}){0,2}",
            documentation(),
            proptest::collection::vec(OptionElement::arbitrary(), 0..3),
            constants,
        )
            .prop_map(|(name, package, documentation, options, constants)| {
                Self { name, package, documentation, options, constants }
            })
            .boxed()
    }
}
