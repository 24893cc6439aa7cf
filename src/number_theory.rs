// Primality, factorization, Fibonacci membership, digit statistics
use crate::models::{NumberTheory, Parity};
use tracing::debug;

/// How many preceding primes the analysis collects.
pub const PRECEDING_PRIME_COUNT: usize = 8;

/// Prime factors of n in ascending order with multiplicity, by trial
/// division. For n < 2 there is no factorization; the degenerate
/// single-element list `[n]` is returned instead.
pub fn factorize(n: i128) -> Vec<i128> {
    if n < 2 {
        return vec![n];
    }

    let mut factors = Vec::new();
    let mut m = n;
    let mut d: i128 = 2;
    while d <= m / d {
        while m % d == 0 {
            factors.push(d);
            m /= d;
        }
        d += 1;
    }
    if m > 1 {
        factors.push(m);
    }
    factors
}

/// Trial-division primality test, O(sqrt n).
pub fn is_prime(n: i128) -> bool {
    if n < 2 {
        return false;
    }
    let limit = (n as u128).isqrt() as i128;
    for d in 2..=limit {
        if n % d == 0 {
            return false;
        }
    }
    true
}

/// Up to `count` primes strictly below n, nearest first. Empty for n <= 2.
pub fn preceding_primes(n: i128, count: usize) -> Vec<i128> {
    let mut primes = Vec::with_capacity(count);
    let mut candidate = n.saturating_sub(1);
    while primes.len() < count && candidate > 1 {
        if is_prime(candidate) {
            primes.push(candidate);
        }
        candidate -= 1;
    }
    primes
}

/// Fibonacci membership: n is a Fibonacci number iff 5n²+4 or 5n²-4 is a
/// perfect square. When 5n² exceeds u128 the closed form is unusable, so
/// the sequence itself is walked instead (it reaches any i128 in under
/// 200 steps).
pub fn is_fibonacci(n: i128) -> bool {
    if n < 0 {
        return false;
    }
    let m = n as u128;
    match m.checked_mul(m).and_then(|sq| sq.checked_mul(5)) {
        Some(x) => {
            let plus = x.checked_add(4).is_some_and(is_perfect_square);
            plus || (x >= 4 && is_perfect_square(x - 4))
        }
        None => {
            debug!("closed-form overflow for {}, walking the sequence", n);
            fibonacci_by_iteration(m)
        }
    }
}

fn is_perfect_square(x: u128) -> bool {
    let r = x.isqrt();
    r * r == x
}

fn fibonacci_by_iteration(target: u128) -> bool {
    let (mut a, mut b): (u128, u128) = (0, 1);
    while a < target {
        let next = match a.checked_add(b) {
            Some(v) => v,
            None => return false,
        };
        a = b;
        b = next;
    }
    a == target
}

/// Sum of the decimal digits of |n|.
pub fn digit_sum(n: i128) -> u32 {
    let mut m = n.unsigned_abs();
    let mut sum = 0u32;
    loop {
        sum += (m % 10) as u32;
        m /= 10;
        if m == 0 {
            break;
        }
    }
    sum
}

/// Number of decimal digits of |n|.
pub fn digit_count(n: i128) -> usize {
    n.unsigned_abs().to_string().len()
}

/// n×2 through n×9, stopping at the first product that overflows i128.
pub fn multiples(n: i128) -> Vec<i128> {
    (2..=9).map_while(|i| n.checked_mul(i)).collect()
}

/// Assemble the full number-theoretic portion of the analysis.
pub fn analyze(n: i128) -> NumberTheory {
    NumberTheory {
        parity: Parity::of(n),
        factors: factorize(n),
        is_prime: is_prime(n),
        preceding_primes: preceding_primes(n, PRECEDING_PRIME_COUNT),
        digit_sum: digit_sum(n),
        digit_count: digit_count(n),
        is_fibonacci: is_fibonacci(n),
        successor: n.checked_add(1),
        predecessor: n.checked_sub(1),
        multiples: multiples(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorize_multiplies_back() {
        for n in [2i128, 3, 4, 12, 97, 255, 360, 1_612_519] {
            let factors = factorize(n);
            let product: i128 = factors.iter().product();
            assert_eq!(product, n, "factors of {} do not multiply back", n);
            assert!(factors.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn test_factorize_known() {
        assert_eq!(factorize(255), vec![3, 5, 17]);
        assert_eq!(factorize(360), vec![2, 2, 2, 3, 3, 5]);
        assert_eq!(factorize(97), vec![97]);
    }

    #[test]
    fn test_factorize_degenerate_below_two() {
        assert_eq!(factorize(1), vec![1]);
        assert_eq!(factorize(0), vec![0]);
        assert_eq!(factorize(-6), vec![-6]);
    }

    #[test]
    fn test_is_prime() {
        let primes = [2i128, 3, 5, 7, 11, 13, 97, 7919];
        let composites = [4i128, 6, 8, 9, 10, 255, 7917];
        for p in primes {
            assert!(is_prime(p), "{} should be prime", p);
        }
        for c in composites {
            assert!(!is_prime(c), "{} should be composite", c);
        }
        assert!(!is_prime(1));
        assert!(!is_prime(0));
        assert!(!is_prime(-7));
    }

    #[test]
    fn test_prime_agrees_with_factorization() {
        for n in 2i128..500 {
            assert_eq!(is_prime(n), factorize(n).len() == 1);
        }
    }

    #[test]
    fn test_preceding_primes() {
        assert_eq!(preceding_primes(20, 8), vec![19, 17, 13, 11, 7, 5, 3, 2]);
        assert_eq!(preceding_primes(7, 8), vec![5, 3, 2]);
        assert_eq!(preceding_primes(3, 8), vec![2]);
        assert!(preceding_primes(2, 8).is_empty());
        assert!(preceding_primes(-5, 8).is_empty());

        let primes = preceding_primes(1_000_000, 8);
        assert_eq!(primes.len(), 8);
        assert!(primes.windows(2).all(|w| w[0] > w[1]));
        assert!(primes.iter().all(|&p| p < 1_000_000 && is_prime(p)));
    }

    #[test]
    fn test_is_fibonacci() {
        for f in [0i128, 1, 2, 3, 5, 8, 13, 21, 34, 55, 6765] {
            assert!(is_fibonacci(f), "{} is a Fibonacci number", f);
        }
        for n in [4i128, 6, 7, 9, 10, 100, 6764] {
            assert!(!is_fibonacci(n), "{} is not a Fibonacci number", n);
        }
        assert!(!is_fibonacci(-8));
    }

    #[test]
    fn test_is_fibonacci_overflow_fallback() {
        // 99194853094755497 is F(83); squaring it times 5 still fits, but
        // i128-scale non-members must not panic either way.
        assert!(is_fibonacci(99_194_853_094_755_497));
        assert!(!is_fibonacci(i128::MAX));
    }

    #[test]
    fn test_digit_statistics() {
        assert_eq!(digit_sum(255), 12);
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(-42), 6);
        assert_eq!(digit_count(255), 3);
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(-42), 2);
    }

    #[test]
    fn test_multiples_and_neighbors() {
        let nt = analyze(7);
        assert_eq!(nt.multiples, vec![14, 21, 28, 35, 42, 49, 56, 63]);
        assert_eq!(nt.successor, Some(8));
        assert_eq!(nt.predecessor, Some(6));
        assert_eq!(nt.parity, Parity::Odd);
    }

    #[test]
    fn test_multiples_truncate_on_overflow() {
        assert!(multiples(i128::MAX).is_empty());
        // Overflows between the 2x and 9x products cut the list short
        let n = i128::MAX / 5;
        assert_eq!(multiples(n).len(), 4);
    }
}
