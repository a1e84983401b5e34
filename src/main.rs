#![doc = r#"
# Spatial Hash Evals: latency and collision quality for point hashes

Measures two properties of each candidate hash over 2D/3D points: the mean
wall-clock cost of a single call, and how evenly its digests spread over a
fixed number of buckets, scored with the "Red Dragon Book" collision formula.

## Usage

```sh
# Evaluate every fixture with the reference parameters
cargo run --release

# Evaluate specific fixtures
cargo run --release -- --hash prime-sum --hash truncated-cast-f32

# List available fixtures
cargo run -- --list-hashes

# Smaller dataset, different bucket count
cargo run --release -- --count 100000 --bins 4096
```

## Reading the output

Each fixture prints a three-line report:

```text
Eval: prime-sum
Speed(ns): 41.350000
Quality:   0.999987
```

- `Speed(ns)`: mean cost of one hash call, `-1.0` when unmeasured
- `Quality`: 1.0 is ideal; 0.95 to 1.05 is good; higher means collisions
- `truncated-cast-f32` is expected to score badly (it exists for contrast)
"#]

mod hash_functions;
mod metrics;
mod points;

use clap::Parser;

use hash_functions::{
    get_all_fixtures, get_available_fixture_names, get_fixtures_by_names, HashFixture, PointHash,
};

/// Command line arguments
#[derive(Parser)]
#[command(name = "spatial-hash-evals")]
#[command(about = "Latency and collision quality for 2D/3D point hash fixtures")]
#[command(version)]
struct Args {
    /// Hash fixtures to evaluate (can be specified multiple times)
    #[arg(long = "hash", value_name = "HASH")]
    hash_fixtures: Vec<String>,

    /// List all available fixtures
    #[arg(long = "list-hashes")]
    list_hashes: bool,

    /// Points per generated dataset
    #[arg(long = "count", default_value = "1000000")]
    count: usize,

    /// Timed hash invocations per fixture
    #[arg(long = "trials", default_value = "20")]
    trials: usize,

    /// Buckets in the collision histogram
    #[arg(long = "bins", default_value = "2048")]
    bins: usize,

    /// Seed for the dataset stream
    #[arg(long = "seed", default_value = "47853")]
    seed: u64,
}

fn report<P>(db: &[P], hash: &dyn PointHash<P>, args: &Args) {
    println!(
        "Speed(ns): {:.6}",
        metrics::measure_latency(db, hash, args.trials)
    );
    if let Some(quality) = metrics::evaluate_collisions(db, hash, args.bins) {
        println!("Quality:   {:.6}", quality);
    }
}

/// Each fixture gets a freshly generated dataset; the generator reseeds
/// itself, so every fixture of the same kind sees identical points.
fn run_eval(fixture: &HashFixture, args: &Args) {
    println!("Eval: {}", fixture.name());
    match fixture {
        HashFixture::Short3(hash) => {
            let db = points::generate_short3(args.count, args.seed);
            report(&db, hash.as_ref(), args);
        }
        HashFixture::Float3(hash) => {
            let db = points::generate_float3(args.count, args.seed);
            report(&db, hash.as_ref(), args);
        }
        HashFixture::Short2(hash) => {
            let db = points::generate_short2(args.count, args.seed);
            report(&db, hash.as_ref(), args);
        }
    }
}

fn main() {
    let args = Args::parse();

    if args.list_hashes {
        println!("Available hash fixtures:");
        for name in get_available_fixture_names() {
            println!("  {}", name);
        }
        return;
    }

    if args.bins == 0 {
        eprintln!("Error: --bins must be positive");
        std::process::exit(1);
    }

    let fixtures = if args.hash_fixtures.is_empty() {
        get_all_fixtures()
    } else {
        let selected = get_fixtures_by_names(&args.hash_fixtures);
        if selected.is_empty() {
            eprintln!("Error: no matching hash fixtures. Available fixtures:");
            for name in get_available_fixture_names() {
                eprintln!("  {}", name);
            }
            std::process::exit(1);
        }
        selected
    };

    for fixture in &fixtures {
        run_eval(fixture, &args);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash_functions::{HashedComponentsHash, TruncatedCastHash};
    use crate::points::Point3;

    const COUNT: usize = 1_000_000;
    const SEED: u64 = 47853;
    const BINS: usize = 2048;

    #[test]
    fn hashed_components_lands_in_the_good_band() {
        let db = points::generate_short3(COUNT, SEED);
        let hash: Box<dyn PointHash<Point3<i16>>> = Box::new(HashedComponentsHash::new());
        let quality = metrics::evaluate_collisions(&db, hash.as_ref(), BINS).unwrap();
        assert!(
            (0.95..=1.05).contains(&quality),
            "quality drifted out of the good band: {}",
            quality
        );
    }

    #[test]
    fn prime_sum_variants_also_land_near_one() {
        let db = points::generate_short3(COUNT, SEED);
        let picked =
            get_fixtures_by_names(&["prime-sum".to_string(), "prime-sum-rehashed".to_string()]);
        assert_eq!(picked.len(), 2);
        for fixture in picked {
            if let HashFixture::Short3(hash) = fixture {
                let quality = metrics::evaluate_collisions(&db, hash.as_ref(), BINS).unwrap();
                assert!(
                    (0.95..=1.05).contains(&quality),
                    "{} scored {}",
                    hash.name(),
                    quality
                );
            }
        }
    }

    #[test]
    fn truncated_cast_scores_far_worse_on_the_same_floats() {
        let db = points::generate_float3(COUNT, SEED);
        let good: Box<dyn PointHash<Point3<f32>>> = Box::new(HashedComponentsHash::new());
        let bad: Box<dyn PointHash<Point3<f32>>> = Box::new(TruncatedCastHash);

        let good_quality = metrics::evaluate_collisions(&db, good.as_ref(), BINS).unwrap();
        let bad_quality = metrics::evaluate_collisions(&db, bad.as_ref(), BINS).unwrap();

        assert!(
            (0.95..=1.05).contains(&good_quality),
            "good fixture drifted: {}",
            good_quality
        );
        assert!(
            bad_quality > 1.5,
            "cast fixture should cluster heavily, got {}",
            bad_quality
        );
        assert!(bad_quality > good_quality);
    }

    #[test]
    fn latency_probe_measures_every_default_fixture() {
        for fixture in get_all_fixtures() {
            let mean = match &fixture {
                HashFixture::Short3(hash) => {
                    let db = points::generate_short3(1000, SEED);
                    metrics::measure_latency(&db, hash.as_ref(), 20)
                }
                HashFixture::Float3(hash) => {
                    let db = points::generate_float3(1000, SEED);
                    metrics::measure_latency(&db, hash.as_ref(), 20)
                }
                HashFixture::Short2(hash) => {
                    let db = points::generate_short2(1000, SEED);
                    metrics::measure_latency(&db, hash.as_ref(), 20)
                }
            };
            assert!(mean > 0.0, "{} was not measured: {}", fixture.name(), mean);
        }
    }
}
