//! Stage abstractions for the transformer pipeline.
//!
//! A `Stage` turns one snapshot of the catalog into the next. Stages never
//! see each other's intermediate state; the pipeline hands each one the
//! previous stage's complete output.

use crate::boundmap_error::BoundmapError;
use crate::core::ServiceBoundary;
use std::marker::PhantomData;

pub trait Stage {
    type Input;
    type Output;
    type Error;

    /// Execute this stage with the given input.
    fn execute(&self, input: Self::Input) -> Result<Self::Output, Self::Error>;

    /// Stage name for logs and crash reports.
    fn name(&self) -> &str;
}

/// A stage backed by an infallible function.
///
/// # Example
///
/// ```rust
/// use boundmap::transform::stage::{PureStage, Stage};
///
/// let stage = PureStage::new("double", |x: i32| x * 2);
/// assert_eq!(stage.execute(21), Ok(42));
/// ```
pub struct PureStage<F, I, O> {
    name: String,
    func: F,
    _phantom: PhantomData<fn(I) -> O>,
}

impl<F, I, O> PureStage<F, I, O>
where
    F: Fn(I) -> O,
{
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
            _phantom: PhantomData,
        }
    }
}

impl<F, I, O> Stage for PureStage<F, I, O>
where
    F: Fn(I) -> O,
{
    type Input = I;
    type Output = O;
    type Error = std::convert::Infallible;

    fn execute(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        Ok((self.func)(input))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Catalog-to-catalog stage with the error type erased to [`BoundmapError`],
/// so stages of different types can share one pipeline.
pub trait BoundaryStage: Send + Sync {
    fn apply(&self, input: Vec<ServiceBoundary>) -> Result<Vec<ServiceBoundary>, BoundmapError>;
    fn stage_name(&self) -> &str;
}

impl<S> BoundaryStage for S
where
    S: Stage<Input = Vec<ServiceBoundary>, Output = Vec<ServiceBoundary>> + Send + Sync,
    S::Error: Into<BoundmapError>,
{
    fn apply(&self, input: Vec<ServiceBoundary>) -> Result<Vec<ServiceBoundary>, BoundmapError> {
        self.execute(input).map_err(Into::into)
    }

    fn stage_name(&self) -> &str {
        Stage::name(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::BoundaryBuilder;

    #[test]
    fn test_pure_stage_execution() {
        let stage = PureStage::new("double", |x: i32| x * 2);
        assert_eq!(stage.execute(21), Ok(42));
        assert_eq!(Stage::name(&stage), "double");
    }

    #[test]
    fn test_pure_stage_is_a_boundary_stage() {
        let stage = PureStage::new("reverse", |mut boundaries: Vec<ServiceBoundary>| {
            boundaries.reverse();
            boundaries
        });
        let input = vec![
            BoundaryBuilder::new("a", "d").build(),
            BoundaryBuilder::new("b", "d").build(),
        ];

        let output = crate::assert_result_ok!(stage.apply(input));
        assert_eq!(output[0].name, "b");
        assert_eq!(stage.stage_name(), "reverse");
    }
}
