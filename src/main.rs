mod check;
mod cli;
mod primes;
mod profiler;

use std::{
    hint::black_box,
    io::{self, IsTerminal},
    process,
};

use clap::Parser;
use tracing::debug;

fn main() {
    set_panic_handler();

    let args = cli::CliArgs::parse();
    init_logging(&args);

    let (ok, _) = profiler::profile("top", || {
        if args.repeat == 0 {
            let mut pass = 0;
            loop {
                pass += 1;
                if !run(&args, pass) {
                    return false;
                }
            }
        } else {
            (1..=args.repeat).all(|pass| run(&args, pass))
        }
    });

    if args.profile {
        profiler::profile_log();
    }

    if !ok {
        process::exit(1);
    }
}

/// One pass over the range. Returns false only when `--check` finds a mismatch.
fn run(args: &cli::CliArgs, pass: u64) -> bool {
    let limit = black_box(primes::LIMIT);

    let (prime_count, elapsed) =
        profiler::profile("count_primes", || primes::count_primes(limit));
    let elapsed_s = elapsed.as_secs_f64();

    println!(
        "Found {} primes up to {} in {} s",
        prime_count, limit, elapsed_s
    );
    let total_s = profiler::total("count_primes").map_or(0.0, |t| t.as_secs_f64());
    debug!(pass, limit, count = prime_count, elapsed_s, total_s, "pass done");

    if args.check {
        check::report(&check::verify(limit, prime_count))
    } else {
        true
    }
}

/// Logs go to stderr so stdout stays the result line.
fn init_logging(args: &cli::CliArgs) {
    let fallback = if args.verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback)),
        )
        .try_init();
}

/// When any thread panics, close the process.
fn set_panic_handler() {
    let orig_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        orig_hook(panic_info);
        process::exit(1);
    }));
}
