use plusone_core::transform;

fn main() {
    let readings = vec![-5, -1, 0, 3, 41];

    match transform(&readings) {
        Ok(kept) => println!("{:?} -> {:?}", readings, kept),
        Err(e) => eprintln!("{}", e),
    }

    // Nothing survives: the increments are -4, -1 and 0.
    println!("{:?} -> {:?}", [-5, -2, -1], transform(&[-5, -2, -1]));
}
