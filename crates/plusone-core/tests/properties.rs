use plusone_core::{
    BumpExt, OverflowPolicy, TransformError, contract, transform, transform_with,
};
use pretty_assertions::assert_eq;

/// Every sequence of length `len` over `alphabet`.
fn sequences(alphabet: &[i8], len: usize) -> Vec<Vec<i8>> {
    (0..len).fold(vec![vec![]], |acc, _| {
        acc.into_iter()
            .flat_map(|prefix| {
                alphabet.iter().map(move |&v| {
                    let mut next = prefix.clone();
                    next.push(v);
                    next
                })
            })
            .collect()
    })
}

#[test]
fn guarantees_hold_for_small_inputs() {
    let alphabet = [i8::MIN, -3, -2, -1, 0, 1, 7];
    for len in 0..=4 {
        for input in sequences(&alphabet, len) {
            let output = transform(&input).expect("no element is i8::MAX");

            assert!(output.len() <= input.len());
            assert!(output.iter().all(|&e| e > 0));

            let expected_len = input.iter().filter(|&&v| v + 1 > 0).count();
            assert_eq!(output.len(), expected_len, "input: {input:?}");

            assert!(contract::verify_transform(
                &input,
                &output,
                OverflowPolicy::Checked,
                contract::Backend::CHECK_AND_PRINT,
            ));
        }
    }
}

#[test]
fn survivors_keep_their_relative_order() {
    let input = [9i32, -4, 3, 0, -1, 3, 12];
    let output = transform(&input).unwrap();
    assert_eq!(output, vec![10, 4, 1, 4, 13]);
}

#[test]
fn transform_is_not_idempotent() {
    let once = transform(&[0i32, 1]).unwrap();
    let twice = transform(&once).unwrap();
    assert_eq!(once, vec![1, 2]);
    assert_eq!(twice, vec![2, 3]);
}

#[test]
fn iterator_agrees_with_transform() {
    let input = [-8i64, 4, -1, 0, 15];
    let lazy = input
        .iter()
        .copied()
        .increment_positive(OverflowPolicy::Checked)
        .collect::<Result<Vec<_>, _>>();
    assert_eq!(lazy, transform(&input));
}

#[test]
fn policies_differ_only_at_max() {
    let input = [i32::MAX, -1, 4];
    assert_eq!(
        transform_with(&input, OverflowPolicy::Checked),
        Err(TransformError::Overflow {
            index: 0,
            value: "2147483647".to_string(),
            ty: "i32",
        })
    );
    assert_eq!(
        transform_with(&input, OverflowPolicy::Saturating),
        Ok(vec![i32::MAX, 5])
    );
    assert_eq!(transform_with(&input, OverflowPolicy::Wrapping), Ok(vec![5]));
}

#[test]
fn safe_to_share_across_threads() {
    let input: Vec<i64> = (-50..50).collect();
    let results: Vec<_> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|_| s.spawn(|| transform(&input))).collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    let expected: Vec<i64> = (1..=50).collect();
    for result in results {
        assert_eq!(result, Ok(expected.clone()));
    }
}
