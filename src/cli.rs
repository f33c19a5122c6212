use clap::Parser;

/// Count primes up to a fixed limit by trial division, to give profilers some load
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Number of passes over the range. 0 runs forever.
    #[clap(long, default_value_t = 1)]
    pub repeat: u64,

    /// Dump timing information after running.
    #[clap(long)]
    pub profile: bool,

    /// Cross-check each count against a sieve.
    #[clap(long)]
    pub check: bool,

    /// Print debug information.
    #[clap(long, short)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_single_pass() {
        let args = CliArgs::parse_from(["primeburn"]);
        assert_eq!(args.repeat, 1);
        assert!(!args.profile);
        assert!(!args.check);
        assert!(!args.verbose);
    }

    #[test]
    fn parses_flags() {
        let args = CliArgs::parse_from(["primeburn", "--repeat", "0", "--check", "-v"]);
        assert_eq!(args.repeat, 0);
        assert!(args.check);
        assert!(args.verbose);
    }
}
