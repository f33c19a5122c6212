use std::time::Duration;

use crate::profiler;

pub struct CheckReport {
    pub expected: u64,
    pub time_sieve: Duration,
}

/// Compare a trial-division count against a sieve over the same range.
pub fn verify(limit: u64, count: u64) -> Result<CheckReport, String> {
    let (expected, time_sieve) = profiler::profile("sieve", || sieve_count(limit));

    if count != expected {
        Err(format!(
            "count mismatch up to {}: got {}, sieve says {}",
            limit, count, expected
        ))
    } else {
        Ok(CheckReport {
            expected,
            time_sieve,
        })
    }
}

/// Print the outcome of `verify` to stderr. Returns false on mismatch.
pub fn report(res: &Result<CheckReport, String>) -> bool {
    use colored::Colorize;

    match res {
        Err(msg) => {
            eprintln!("{}", format!("FAIL: {}", msg).red());
            false
        }
        Ok(res) => {
            eprintln!(
                "{} {} primes (sieve {:?})",
                "GOOD:".green(),
                res.expected,
                res.time_sieve
            );
            true
        }
    }
}

/// Sieve of Eratosthenes over `0..=limit`.
pub fn sieve_count(limit: u64) -> u64 {
    if limit < 2 {
        return 0;
    }
    let limit = limit as usize;
    let mut is_prime = vec![true; limit + 1];
    is_prime[0] = false;
    is_prime[1] = false;

    let mut i = 2;
    while i * i <= limit {
        if is_prime[i] {
            let mut j = i * i;
            while j <= limit {
                is_prime[j] = false;
                j += i;
            }
        }
        i += 1;
    }

    is_prime.iter().filter(|p| **p).count() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sieve_reference_counts() {
        assert_eq!(sieve_count(0), 0);
        assert_eq!(sieve_count(1), 0);
        assert_eq!(sieve_count(2), 1);
        assert_eq!(sieve_count(10), 4);
        assert_eq!(sieve_count(100), 25);
        assert_eq!(sieve_count(100_000), 9592);
    }

    #[test]
    fn verify_accepts_matching_count() {
        let res = verify(100, 25).expect("25 primes up to 100");
        assert_eq!(res.expected, 25);
        assert!(report(&Ok(res)));
    }

    #[test]
    fn verify_rejects_wrong_count() {
        let res = verify(100, 24);
        let msg = res.as_ref().err().expect("mismatch not detected");
        assert!(msg.contains("got 24"));
        assert!(msg.contains("sieve says 25"));
        assert!(!report(&res));
    }
}
