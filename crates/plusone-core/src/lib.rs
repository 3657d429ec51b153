#![doc = include_str!("../README.md")]

mod bump;
pub mod contract;
mod iter;

pub use bump::{Bump, OverflowPolicy};
pub use iter::{BumpExt, IncrementPositive};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
    #[error("incrementing {value} at position {index} overflows {ty}")]
    Overflow {
        /// Position of the offending element in the input.
        index: usize,
        value: String,
        ty: &'static str,
    },
}

impl TransformError {
    pub(crate) fn overflow<T: Bump>(index: usize, value: T) -> Self {
        TransformError::Overflow {
            index,
            value: value.to_string(),
            ty: T::TYPE_NAME,
        }
    }
}

/// Increments every element of `input` and keeps the results that are
/// strictly greater than zero, in input order.
///
/// Incrementing the largest value of `T` is an error; see [`transform_with`]
/// for the other overflow policies.
///
/// ```
/// assert_eq!(plusone_core::transform(&[-1, 0, 5]), Ok(vec![1, 6]));
/// ```
pub fn transform<T: Bump>(input: &[T]) -> Result<Vec<T>, TransformError> {
    transform_with(input, OverflowPolicy::Checked)
}

/// Like [`transform`], with an explicit overflow policy.
///
/// Only [`OverflowPolicy::Checked`] can fail.
pub fn transform_with<T: Bump>(
    input: &[T],
    policy: OverflowPolicy,
) -> Result<Vec<T>, TransformError> {
    let output = input
        .iter()
        .copied()
        .increment_positive(policy)
        .collect::<Result<Vec<_>, _>>()?;
    contract::verify_transform(input, &output, policy, contract::ACTIVE);
    Ok(output)
}

/// Widening variant of [`transform`] that computes in `i128` and cannot overflow.
pub fn transform_i128(input: &[i64]) -> Vec<i128> {
    input
        .iter()
        .map(|&v| i128::from(v) + 1)
        .filter(|&v| v > 0)
        .collect()
}
