use ahash::RandomState;
use std::hash::BuildHasher;

use crate::points::{Point2, Point3};

/// The three classic spatial-hashing primes.
pub const PRIME_X: u64 = 73856093;
pub const PRIME_Y: u64 = 19349669;
pub const PRIME_Z: u64 = 83492791;

/// Seed for the scalar hash inside the composite fixtures, fixed so digests
/// are reproducible within a run.
const SCALAR_HASH_SEED: usize = 42;

fn scalar_hasher() -> RandomState {
    RandomState::with_seed(SCALAR_HASH_SEED)
}

/// A hash fixture under evaluation: maps a point to an unsigned 64-bit
/// digest.
pub trait PointHash<P>: Send + Sync {
    fn name(&self) -> &'static str;
    fn digest(&self, pt: &P) -> u64;
}

fn prime_component_sum(pt: &Point3<i16>) -> u64 {
    (PRIME_X as i64 * pt.x as i64 + PRIME_Y as i64 * pt.y as i64 + PRIME_Z as i64 * pt.z as i64)
        as u64
}

/// Prime-multiplier sum over the raw integer components, no rehash step.
pub struct PrimeSumHash;

impl PointHash<Point3<i16>> for PrimeSumHash {
    fn name(&self) -> &'static str {
        "prime-sum"
    }
    fn digest(&self, pt: &Point3<i16>) -> u64 {
        prime_component_sum(pt)
    }
}

/// The same prime-multiplier sum, pushed through a general-purpose integer
/// hash afterwards.
pub struct RehashedPrimeSumHash {
    builder: RandomState,
}

impl RehashedPrimeSumHash {
    pub fn new() -> Self {
        Self {
            builder: scalar_hasher(),
        }
    }
}

impl PointHash<Point3<i16>> for RehashedPrimeSumHash {
    fn name(&self) -> &'static str {
        "prime-sum-rehashed"
    }
    fn digest(&self, pt: &Point3<i16>) -> u64 {
        self.builder.hash_one(prime_component_sum(pt))
    }
}

/// Each component hashed on its own, then combined with prime-multiplier
/// XOR. Float components are hashed through their bit pattern.
pub struct HashedComponentsHash {
    builder: RandomState,
}

impl HashedComponentsHash {
    pub fn new() -> Self {
        Self {
            builder: scalar_hasher(),
        }
    }

    fn combine(h1: u64, h2: u64, h3: u64) -> u64 {
        PRIME_X.wrapping_mul(h1) ^ PRIME_Y.wrapping_mul(h2) ^ PRIME_Z.wrapping_mul(h3)
    }
}

impl PointHash<Point3<i16>> for HashedComponentsHash {
    fn name(&self) -> &'static str {
        "hashed-components"
    }
    fn digest(&self, pt: &Point3<i16>) -> u64 {
        Self::combine(
            self.builder.hash_one(pt.x),
            self.builder.hash_one(pt.y),
            self.builder.hash_one(pt.z),
        )
    }
}

impl PointHash<Point3<f32>> for HashedComponentsHash {
    fn name(&self) -> &'static str {
        "hashed-components-f32"
    }
    fn digest(&self, pt: &Point3<f32>) -> u64 {
        Self::combine(
            self.builder.hash_one(pt.x.to_bits()),
            self.builder.hash_one(pt.y.to_bits()),
            self.builder.hash_one(pt.z.to_bits()),
        )
    }
}

impl PointHash<Point2<i16>> for HashedComponentsHash {
    fn name(&self) -> &'static str {
        "hashed-components-2d"
    }
    fn digest(&self, pt: &Point2<i16>) -> u64 {
        PRIME_X.wrapping_mul(self.builder.hash_one(pt.x))
            ^ PRIME_Y.wrapping_mul(self.builder.hash_one(pt.y))
    }
}

/// Casts each float component straight to an integer before combining.
///
/// Known bad: every float in `[k, k + 1)` truncates to the same digest
/// input, and negative components all saturate to zero. Kept as the bad
/// baseline the other fixtures are compared against.
pub struct TruncatedCastHash;

impl PointHash<Point3<f32>> for TruncatedCastHash {
    fn name(&self) -> &'static str {
        "truncated-cast-f32"
    }
    fn digest(&self, pt: &Point3<f32>) -> u64 {
        let h1 = pt.x as u64;
        let h2 = pt.y as u64;
        let h3 = pt.z as u64;
        PRIME_X.wrapping_mul(h1) ^ PRIME_Y.wrapping_mul(h2) ^ PRIME_Z.wrapping_mul(h3)
    }
}

/// A fixture paired with the dataset kind it consumes, so the driver can
/// iterate a heterogeneous set.
pub enum HashFixture {
    Short3(Box<dyn PointHash<Point3<i16>>>),
    Float3(Box<dyn PointHash<Point3<f32>>>),
    Short2(Box<dyn PointHash<Point2<i16>>>),
}

impl HashFixture {
    pub fn name(&self) -> &'static str {
        match self {
            HashFixture::Short3(hash) => hash.name(),
            HashFixture::Float3(hash) => hash.name(),
            HashFixture::Short2(hash) => hash.name(),
        }
    }
}

/// Every fixture, in evaluation order.
pub fn get_all_fixtures() -> Vec<HashFixture> {
    vec![
        HashFixture::Short3(Box::new(RehashedPrimeSumHash::new())),
        HashFixture::Short3(Box::new(PrimeSumHash)),
        HashFixture::Short3(Box::new(HashedComponentsHash::new())),
        HashFixture::Float3(Box::new(HashedComponentsHash::new())),
        HashFixture::Short2(Box::new(HashedComponentsHash::new())),
        HashFixture::Float3(Box::new(TruncatedCastHash)),
    ]
}

/// Get fixtures by name (case-insensitive).
pub fn get_fixtures_by_names(names: &[String]) -> Vec<HashFixture> {
    let names_lower: Vec<String> = names.iter().map(|s| s.to_lowercase()).collect();

    get_all_fixtures()
        .into_iter()
        .filter(|f| names_lower.contains(&f.name().to_lowercase()))
        .collect()
}

/// Get available fixture names.
pub fn get_available_fixture_names() -> Vec<&'static str> {
    get_all_fixtures().iter().map(|f| f.name()).collect()
}
