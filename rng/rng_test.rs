//! RNG test binary - samples generated characters and reports uniformity.
//!
//! Usage:
//!   ./rng_test                  # 1,000,000 characters over the full pool
//!   ./rng_test -n 100000        # custom sample size
//!   ./rng_test -c digits        # restrict the pool
//!   ./rng_test --raw | dieharder -a -g 200
//!
//! The report gives the chi-squared statistic and its degrees of freedom. A
//! statistic far above `df + 4 * sqrt(2 * df)` points at a biased sampler.

use std::collections::HashMap;
use std::io::{self, Write};
use std::process;

use passforge::pass::{self, ClassSet, GenerationConfig, LengthBounds};
use passforge::rand::{OsRandom, SecureRandom};

const CHUNK: usize = 1024;

fn usage() -> ! {
    eprintln!("Usage: rng_test [OPTIONS]");
    eprintln!();
    eprintln!("Samples generated characters and reports a chi-squared uniformity check.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -n <N>         Characters to sample (default: 1000000)");
    eprintln!("  -c <LIST>      Classes: upper,lower,digits,symbols (default: all)");
    eprintln!("      --raw      Stream raw OS random bytes to stdout instead");
    eprintln!("  -h, --help     Show this help");
    process::exit(0);
}

fn fail(msg: &str) -> ! {
    eprintln!("rng_test: {msg}");
    process::exit(2);
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let mut samples: usize = 1_000_000;
    let mut classes = ClassSet::all();
    let mut raw = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => usage(),
            "--raw" => raw = true,
            "-n" => {
                i += 1;
                samples = args
                    .get(i)
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(|| fail("-n needs a number"));
            }
            "-c" => {
                i += 1;
                let list = args.get(i).unwrap_or_else(|| fail("-c needs a list"));
                classes = ClassSet::parse_list(list).unwrap_or_else(|e| fail(&e.to_string()));
            }
            other => fail(&format!("unknown argument: {other}")),
        }
        i += 1;
    }

    if raw {
        stream_raw();
    }
    if samples == 0 {
        fail("-n must be positive");
    }

    report(samples, classes);
}

fn stream_raw() -> ! {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut rng = OsRandom;
    let mut buf = [0u8; 8192];

    loop {
        if let Err(e) = rng.fill_bytes(&mut buf) {
            fail(&e.to_string());
        }
        if out.write_all(&buf).is_err() {
            process::exit(0);
        }
    }
}

fn report(samples: usize, classes: ClassSet) {
    let pool = pass::charset::pool(classes);
    if pool.is_empty() {
        fail("Select at least one character set");
    }

    let config = GenerationConfig::new(CHUNK, classes).with_bounds(LengthBounds::up_to(CHUNK));
    let mut counts: HashMap<char, u64> = HashMap::with_capacity(pool.len());
    let mut remaining = samples;

    while remaining > 0 {
        let length = remaining.min(CHUNK);
        let password = pass::generate(&GenerationConfig { length, ..config })
            .unwrap_or_else(|e| fail(&e.to_string()));
        for c in password.chars() {
            *counts.entry(c).or_default() += 1;
        }
        remaining -= length;
    }

    let expected = samples as f64 / pool.len() as f64;
    let chi_squared: f64 = pool
        .iter()
        .map(|c| {
            let observed = *counts.get(c).unwrap_or(&0) as f64;
            (observed - expected).powi(2) / expected
        })
        .sum();
    let df = pool.len() - 1;
    let threshold = df as f64 + 4.0 * (2.0 * df as f64).sqrt();

    println!("Source:      {}", OsRandom::source_name());
    println!("Pool:        {} chars [{}]", pool.len(), classes);
    println!("Samples:     {samples}");
    println!("Chi-squared: {chi_squared:.2} (df = {df})");
    if chi_squared > threshold {
        println!("Result:      SUSPICIOUS (above {threshold:.1})");
        process::exit(1);
    }
    println!("Result:      ok (below {threshold:.1})");
}
