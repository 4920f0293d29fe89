//! Trial-division primality test.
//!
//! Diagnostic only: the verification scheme accepts any non-zero modulus.

/// Return true if `n` is prime.
///
/// Values `<= 1` are not prime. Candidates are trial-divided by `6k ± 1` up to
/// `sqrt(n)`.
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    // `i <= n / i` instead of `i * i <= n` so large n cannot overflow
    let mut i: i64 = 5;
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }

    true
}
