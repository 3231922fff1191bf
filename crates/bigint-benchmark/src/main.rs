use std::hint::black_box;
use std::time::Instant;

use bigint_buffer::{ByteOrder, Codec};
use num_bigint::BigUint;
use tracing_subscriber::EnvFilter;

// ---------------------------------------------------------------------------
// Backend trait -- each conversion path implements this
// ---------------------------------------------------------------------------

trait ConversionBackend {
    fn name() -> &'static str;

    fn codec() -> Codec;
}

// ---------------------------------------------------------------------------
// Portable backend
// ---------------------------------------------------------------------------

#[cfg(feature = "portable")]
mod portable_backend {
    use super::*;

    pub struct PortableBackend;

    impl ConversionBackend for PortableBackend {
        fn name() -> &'static str {
            "portable"
        }

        fn codec() -> Codec {
            Codec::portable()
        }
    }
}

// ---------------------------------------------------------------------------
// Accelerated backend
// ---------------------------------------------------------------------------

#[cfg(feature = "accelerated")]
mod accelerated_backend {
    use super::*;
    use bigint_buffer::{BackendKind, CodecConfig};

    pub struct AcceleratedBackend;

    impl ConversionBackend for AcceleratedBackend {
        fn name() -> &'static str {
            "accelerated"
        }

        fn codec() -> Codec {
            Codec::new(&CodecConfig::new().backend(BackendKind::Accelerated))
        }
    }
}

// ---------------------------------------------------------------------------
// Benchmark harness
// ---------------------------------------------------------------------------

struct BenchResult {
    label: String,
    decode_le_ns: f64,
    decode_be_ns: f64,
    encode_ns: f64,
    encode_padded_ns: f64,
}

fn time_iterations<F: FnMut()>(mut f: F, iterations: usize) -> f64 {
    let start = Instant::now();
    for _ in 0..iterations {
        f();
    }
    start.elapsed().as_secs_f64() * 1e9 / iterations as f64
}

fn generate_bytes(n: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(n);
    let mut state: u64 = 0xdeadbeef;
    for _ in 0..n {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        data.push((state >> 56) as u8);
    }
    // Keep the top byte non-zero so the natural width is exactly `n`.
    if let Some(first) = data.first_mut() {
        *first |= 0x80;
    }
    data
}

fn bench_size(codec: Codec, label: &str, len: usize, iterations: usize) -> BenchResult {
    let bytes = generate_bytes(len);
    let value = BigUint::from_bytes_be(&bytes);
    let padded = len + len / 2 + 1;

    // Warmup
    let _ = black_box(codec.decode(&bytes, ByteOrder::BigEndian));

    let decode_le_ns = time_iterations(
        || drop(black_box(codec.le_to_bigint(black_box(&bytes)))),
        iterations,
    );
    let decode_be_ns = time_iterations(
        || drop(black_box(codec.be_to_bigint(black_box(&bytes)))),
        iterations,
    );
    let encode_ns = time_iterations(
        || drop(black_box(codec.to_le_buffer(black_box(&value), len))),
        iterations,
    );
    let encode_padded_ns = time_iterations(
        || drop(black_box(codec.to_be_buffer(black_box(&value), padded))),
        iterations,
    );

    BenchResult {
        label: label.to_string(),
        decode_le_ns,
        decode_be_ns,
        encode_ns,
        encode_padded_ns,
    }
}

fn run_benchmarks<B: ConversionBackend>() -> Vec<BenchResult> {
    let codec = B::codec();
    tracing::info!(requested = B::name(), selected = codec.name(), "running benchmarks");
    let mut results = Vec::new();

    let sizes: &[(&str, usize, usize)] = &[
        ("small (4 B, unaligned)", 4, 500_000),
        ("mid (8 B, aligned)", 8, 500_000),
        ("huge (48 B)", 48, 200_000),
        ("page (4096 B)", 4096, 5_000),
    ];

    for &(label, len, iterations) in sizes {
        eprint!("  {}: {} ...", B::name(), label);
        results.push(bench_size(codec, label, len, iterations));
        eprintln!(" done");
    }

    results
}

fn print_results(backend_name: &str, results: &[BenchResult]) {
    println!("\n### {backend_name}\n");
    println!(
        "| {:24} | {:>12} | {:>12} | {:>12} | {:>14} |",
        "Input", "LE->int ns", "BE->int ns", "int->LE ns", "int->BE pad ns"
    );
    println!(
        "|{:-<26}|{:->14}|{:->14}|{:->14}|{:->16}|",
        "", "", "", "", ""
    );
    for r in results {
        println!(
            "| {:24} | {:>12.1} | {:>12.1} | {:>12.1} | {:>14.1} |",
            r.label, r.decode_le_ns, r.decode_be_ns, r.encode_ns, r.encode_padded_ns
        );
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    println!("# Buffer/BigInt Conversion Benchmark\n");
    println!("Measuring conversion latency between byte buffers and integers.");
    println!("Each test converts the same input many times and reports the average.");
    println!("int->BE pad encodes into a buffer wider than the value.\n");

    #[cfg(feature = "portable")]
    {
        use portable_backend::PortableBackend;
        let results = run_benchmarks::<PortableBackend>();
        print_results(PortableBackend::name(), &results);
    }

    #[cfg(feature = "accelerated")]
    {
        use accelerated_backend::AcceleratedBackend;
        let results = run_benchmarks::<AcceleratedBackend>();
        print_results(AcceleratedBackend::name(), &results);
    }
}
