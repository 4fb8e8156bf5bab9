//! Pure numeric predicates used to classify a number.
//!
//! Everything here is deterministic and side-effect free; the handlers own
//! all I/O and call into this module with the parsed integer.

/// Returns true if `n` is prime.
///
/// Trial division in steps of 6 after ruling out the small cases, so the
/// cost is O(√n).
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
    let mut i: i64 = 5;
    // i <= n / i is the overflow-safe form of i * i <= n.
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Returns true if `n` equals the sum of its proper divisors.
///
/// 6 is perfect because 1 + 2 + 3 = 6. Non-positive numbers and 1 are
/// never perfect.
pub fn is_perfect(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    // 1 is always a proper divisor for n > 1.
    let mut total: i64 = 1;
    let mut i: i64 = 2;
    while i <= n / i {
        if n % i == 0 {
            total += i;
            let pair = n / i;
            if pair != i {
                total += pair;
            }
        }
        i += 1;
    }
    total == n
}

/// Returns true if `n` is an Armstrong (narcissistic) number: the sum of
/// its decimal digits each raised to the power of the digit count.
///
/// 371 → 3³ + 7³ + 1³ = 371. Defined for non-negative numbers only; note
/// that 0 counts as one digit, so 0¹ = 0 makes 0 an Armstrong number.
pub fn is_armstrong(n: i64) -> bool {
    if n < 0 {
        return false;
    }
    let digits = n.to_string();
    let power = digits.len() as u32;
    // Accumulate in i128: 19 digits of 9^19 overflows i64.
    let total: i128 = digits
        .bytes()
        .map(|d| i128::from(d - b'0').pow(power))
        .sum();
    total == i128::from(n)
}

/// Sum of the decimal digits of |n|.
pub fn digit_sum(n: i64) -> i64 {
    n.unsigned_abs()
        .to_string()
        .bytes()
        .map(|d| i64::from(d - b'0'))
        .sum()
}
