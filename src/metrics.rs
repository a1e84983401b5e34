use std::hint::black_box;
use std::time::Instant;

use crate::hash_functions::PointHash;

/// Sentinel for "no measurement": the probe could not produce a mean, as
/// opposed to having measured a zero-cost call.
pub const NO_RESULT: f64 = -1.0;

/// Mean per-call latency of `hash` in nanoseconds.
///
/// One point per trial, walking the front of the dataset so consecutive
/// trials do not replay the same cache-resident point. Returns [`NO_RESULT`]
/// when the dataset is smaller than the trial count, or when the clock never
/// observed a nonzero duration.
pub fn measure_latency<P>(db: &[P], hash: &dyn PointHash<P>, trials: usize) -> f64 {
    if db.len() < trials {
        return NO_RESULT;
    }

    let mut samples = Vec::with_capacity(trials);
    for pt in db.iter().take(trials) {
        let start = Instant::now();
        black_box(hash.digest(black_box(pt)));
        samples.push(start.elapsed().as_nanos() as f64);
    }
    mean(&samples)
}

fn mean(samples: &[f64]) -> f64 {
    let sum: f64 = samples.iter().sum();
    if sum == 0.0 {
        return NO_RESULT;
    }
    sum / samples.len() as f64
}

/// Bucket every digest into `bin_count` slots and score the histogram.
///
/// Returns `None` for an empty dataset; the quality formula has no meaning
/// there.
pub fn evaluate_collisions<P>(db: &[P], hash: &dyn PointHash<P>, bin_count: usize) -> Option<f64> {
    assert!(bin_count > 0, "bin_count must be positive");
    if db.is_empty() {
        return None;
    }

    let mut slots = vec![0usize; bin_count];
    for pt in db {
        slots[(hash.digest(pt) % bin_count as u64) as usize] += 1;
    }
    Some(calc_quality(&slots))
}

/// Collision quality of a bucket histogram, per the "Red Dragon Book"
/// formula (see <http://www.strchr.com/hash_functions>).
///
/// An ideal function scores 1.0; in practice a good one lands between 0.95
/// and 1.05. Higher means clustering (many collisions, slow). Lower means
/// the function spreads better than a randomly distributing one, which is
/// not bad.
///
/// The histogram must hold at least one element; an all-zero histogram puts
/// a zero in the denominator.
pub fn calc_quality(slots: &[usize]) -> f64 {
    debug_assert!(slots.iter().any(|&v| v > 0));

    let m = slots.len() as f64;
    let mut n = 0.0;
    for &v in slots {
        n += v as f64;
    }
    let mut quality = 0.0;
    for &v in slots {
        quality += v as f64 * (v as f64 + 1.0);
    }
    quality / (2.0 * (n + 2.0 * m - 1.0) * n / (2.0 * m))
}
