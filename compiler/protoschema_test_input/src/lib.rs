//! This crate provides a trait [`Input`] for representing inputs generated for
//! testing purposes.

use std::fmt::Debug;

use proptest::{prop_assert_eq, test_runner::TestCaseResult};

/// Represents an input generated for testing purposes.
pub trait Input<Output: Debug, Parameters>: Debug {
    /// Verifies that the given output complies with this input.
    ///
    /// # Errors
    /// [`proptest::test_runner::TestCaseError`]: for any reason the assertion
    /// fails.
    fn assert(self, output: Output, parameters: Parameters) -> TestCaseResult;
}

impl<T: Debug, U: Debug, P: Clone> Input<&[T], P> for &[U]
where
    for<'a, 'b> &'a U: Input<&'b T, P>,
{
    fn assert(self, output: &[T], parameters: P) -> TestCaseResult {
        prop_assert_eq!(self.len(), output.len());

        for (input, output) in self.iter().zip(output.iter()) {
            input.assert(output, parameters.clone())?;
        }

        Ok(())
    }
}
