use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// A 2-component point. Plain value type; equality is exact component
/// equality.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point2<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point2<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

/// A 3-component point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> Point3<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

/// Non-negative 31-bit draw from the stream.
fn draw(rng: &mut ChaCha20Rng) -> u32 {
    rng.next_u32() >> 1
}

/// One signed 16-bit component: a raw draw divided by `i16::MAX`, then cast
/// with wrap into 16 bits. Quotients reach 65538, so roughly half of all
/// draws wrap; the wrapped values are part of the distribution being
/// measured.
fn short_component(rng: &mut ChaCha20Rng) -> i16 {
    (draw(rng) as i32 / i16::MAX as i32) as i16
}

/// Generate `count` i16 triples from a stream seeded with `seed`.
///
/// The stream is reseeded on every call, so two calls with the same seed
/// produce identical datasets no matter what ran in between.
pub fn generate_short3(count: usize, seed: u64) -> Vec<Point3<i16>> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            Point3::new(
                short_component(&mut rng),
                short_component(&mut rng),
                short_component(&mut rng),
            )
        })
        .collect()
}

/// Generate `count` f32 triples: raw draws stored as floats, unscaled.
pub fn generate_float3(count: usize, seed: u64) -> Vec<Point3<f32>> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            Point3::new(
                draw(&mut rng) as f32,
                draw(&mut rng) as f32,
                draw(&mut rng) as f32,
            )
        })
        .collect()
}

/// Generate `count` i16 pairs.
pub fn generate_short2(count: usize, seed: u64) -> Vec<Point2<i16>> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| Point2::new(short_component(&mut rng), short_component(&mut rng)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_count_yields_empty_dataset() {
        assert!(generate_short3(0, 47853).is_empty());
        assert!(generate_float3(0, 1).is_empty());
        assert!(generate_short2(0, 99).is_empty());
    }

    #[test]
    fn same_seed_reproduces_the_same_sequence() {
        assert_eq!(generate_short3(1000, 47853), generate_short3(1000, 47853));
        assert_eq!(generate_float3(1000, 47853), generate_float3(1000, 47853));
        assert_eq!(generate_short2(1000, 47853), generate_short2(1000, 47853));
    }

    #[test]
    fn different_seeds_diverge() {
        assert_ne!(generate_short3(1000, 1), generate_short3(1000, 2));
    }

    #[test]
    fn short_components_wrap_past_the_signed_range() {
        let db = generate_short3(1000, 47853);
        assert!(db.iter().any(|p| p.x < 0 || p.y < 0 || p.z < 0));
    }

    #[test]
    fn float_components_are_unscaled_draws() {
        let db = generate_float3(1000, 47853);
        assert!(db.iter().all(|p| p.x >= 0.0 && p.x <= 2_147_483_648.0));
        assert!(db.iter().any(|p| p.x > 32768.0));
    }
}
