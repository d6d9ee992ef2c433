use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use rtree2d::Envelope;

//// Utility functions

pub(crate) fn get_random_envelopes(n: usize, span: i64, seed: u64) -> Vec<Envelope> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut results = Vec::with_capacity(n);
    for _i in 0..n {
        let x = rng.gen_range(0..span);
        let y = rng.gen_range(0..span);
        let w = rng.gen_range(1..span / 20 + 2);
        let h = rng.gen_range(1..span / 20 + 2);
        results.push(Envelope::new(x, y, x + w, y + h));
    }

    results
}

pub(crate) fn get_random_points(n: usize, span: i64, seed: u64) -> Vec<Envelope> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut results = Vec::new();
    for _i in 0..n {
        results.push(Envelope::point(
            rng.gen_range(0..span),
            rng.gen_range(0..span),
        ));
    }

    results
}
