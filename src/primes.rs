/// Upper bound of the scanned range.
pub const LIMIT: u64 = 100_000;

/// Trial division up to the integer square root.
///
/// The square is checked so the loop also ends once `i * i` leaves `u64`.
#[inline(never)]
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut i: u64 = 2;
    while i.checked_mul(i).is_some_and(|sq| sq <= n) {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// Count primes in `2..=limit`, in increasing order, one `is_prime` call per candidate.
#[inline(never)]
pub fn count_primes(limit: u64) -> u64 {
    let mut prime_count = 0;
    for n in 2..=limit {
        if is_prime(n) {
            prime_count += 1;
        }
    }
    prime_count
}
