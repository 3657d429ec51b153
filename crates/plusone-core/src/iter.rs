use std::iter::{Enumerate, FusedIterator};

use crate::{Bump, OverflowPolicy, TransformError};

/// Lazy form of [`transform_with`](crate::transform_with).
///
/// Yields each incremented value that is strictly positive, in input order.
/// After an overflow under [`OverflowPolicy::Checked`] it yields that error
/// once and then stops.
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IncrementPositive<I> {
    iter: Enumerate<I>,
    policy: OverflowPolicy,
    failed: bool,
}

impl<I: Iterator> IncrementPositive<I> {
    pub(crate) fn new(iter: I, policy: OverflowPolicy) -> Self {
        Self {
            iter: iter.enumerate(),
            policy,
            failed: false,
        }
    }
}

impl<I> Iterator for IncrementPositive<I>
where
    I: Iterator,
    I::Item: Bump,
{
    type Item = Result<I::Item, TransformError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        for (index, value) in self.iter.by_ref() {
            match self.policy.bump(value) {
                Some(bumped) if bumped > <I::Item as Bump>::ZERO => return Some(Ok(bumped)),
                Some(_) => {}
                None => {
                    self.failed = true;
                    return Some(Err(TransformError::overflow(index, value)));
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            (0, Some(0))
        } else {
            (0, self.iter.size_hint().1)
        }
    }
}

impl<I> FusedIterator for IncrementPositive<I>
where
    I: Iterator,
    I::Item: Bump,
{
}

/// Adds [`increment_positive`](BumpExt::increment_positive) to every iterator.
pub trait BumpExt: Iterator + Sized {
    fn increment_positive(self, policy: OverflowPolicy) -> IncrementPositive<Self>
    where
        Self::Item: Bump,
    {
        IncrementPositive::new(self, policy)
    }
}

impl<I: Iterator> BumpExt for I {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_lazily_in_order() {
        let mut it = [-1i32, 0, 5, -7, 2]
            .into_iter()
            .increment_positive(OverflowPolicy::Checked);
        assert_eq!(it.next(), Some(Ok(1)));
        assert_eq!(it.next(), Some(Ok(6)));
        assert_eq!(it.next(), Some(Ok(3)));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn stops_after_first_overflow() {
        let mut it = [1u8, u8::MAX, 3, u8::MAX]
            .into_iter()
            .increment_positive(OverflowPolicy::Checked);
        assert_eq!(it.next(), Some(Ok(2)));
        assert_eq!(
            it.next(),
            Some(Err(TransformError::Overflow {
                index: 1,
                value: "255".to_string(),
                ty: "u8",
            }))
        );
        assert_eq!(it.next(), None);
        assert_eq!(it.size_hint(), (0, Some(0)));
    }

    #[test]
    fn adapts_non_slice_iterators() {
        let kept: Vec<_> = (-3i16..3)
            .filter(|v| v % 2 != 0)
            .increment_positive(OverflowPolicy::Checked)
            .collect();
        assert_eq!(kept, vec![Ok(2)]);
    }

    #[test]
    fn upper_bound_is_input_length() {
        let it = [1i64, 2, 3]
            .iter()
            .copied()
            .increment_positive(OverflowPolicy::Wrapping);
        assert_eq!(it.size_hint(), (0, Some(3)));
    }
}
