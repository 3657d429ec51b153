//! Runtime checks of the postconditions of [`transform_with`](crate::transform_with).
//!
//! A [`Backend`] decides what happens when a check fails. The backend used by
//! the transform functions is [`ACTIVE`], chosen at compile time by the
//! `runtime-*` cargo features.


use crate::{Bump, OverflowPolicy};

#[derive(Debug, Clone, Copy)]
pub struct Backend {
    /// When `false`, no check is evaluated.
    pub enabled: bool,
    pub report: fn(&str),
}

impl Backend {
    pub const CHECK_AND_PANIC: Backend = Backend {
        enabled: true,
        report: report_panic,
    };

    pub const CHECK_AND_PRINT: Backend = Backend {
        enabled: true,
        report: report_eprint,
    };

    pub const NO_CHECK: Backend = Backend {
        enabled: false,
        report: report_inert,
    };
}

/// The backend selected by cargo features.
///
/// `runtime-no-check` wins over `runtime-check-and-print`, which wins over
/// `runtime-check-and-panic`. Without any of them, debug builds panic and
/// release builds skip the checks.
pub const ACTIVE: Backend = if cfg!(feature = "runtime-no-check") {
    Backend::NO_CHECK
} else if cfg!(feature = "runtime-check-and-print") {
    Backend::CHECK_AND_PRINT
} else if cfg!(feature = "runtime-check-and-panic") || cfg!(debug_assertions) {
    Backend::CHECK_AND_PANIC
} else {
    Backend::NO_CHECK
};

fn report_panic(repr: &str) {
    panic!("Postcondition failed: {}", repr);
}

fn report_eprint(repr: &str) {
    eprintln!("Postcondition failed: {}", repr);
}

fn report_inert(_repr: &str) {}

/// Checks that `output` is a valid result of transforming `input` under `policy`.
///
/// Returns `true` when every postcondition holds, or when the backend is
/// disabled. Each failed postcondition is passed to the backend's `report`.
pub fn verify_transform<T: Bump>(
    input: &[T],
    output: &[T],
    policy: OverflowPolicy,
    backend: Backend,
) -> bool {
    if !backend.enabled {
        return true;
    }

    let checks = [
        (
            output.len() <= input.len(),
            "output.len() <= input.len()",
        ),
        (
            output.iter().all(|e| *e > T::ZERO),
            "output.iter().all(|e| *e > 0)",
        ),
        (
            is_bumped_subsequence(input, output, policy),
            "output is the incremented subsequence of input",
        ),
    ];

    let mut holds = true;
    for (ok, repr) in checks {
        if !ok {
            (backend.report)(repr);
            holds = false;
        }
    }
    holds
}

/// Whether every element of `output` is the increment of an element of
/// `input`, with the sources appearing in the same relative order.
fn is_bumped_subsequence<T: Bump>(input: &[T], output: &[T], policy: OverflowPolicy) -> bool {
    let mut sources = input.iter();
    output
        .iter()
        .all(|e| sources.any(|v| policy.bump(*v) == Some(*e)))
}
