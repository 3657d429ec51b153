use plusone_core::{OverflowPolicy, transform_with};

fn main() {
    let input = [i8::MAX - 1, i8::MAX, -1];

    for policy in [
        OverflowPolicy::Checked,
        OverflowPolicy::Saturating,
        OverflowPolicy::Wrapping,
    ] {
        match transform_with(&input, policy) {
            Ok(kept) => println!("{:>10}: {:?}", policy, kept),
            Err(e) => println!("{:>10}: {}", policy, e),
        }
    }
}
