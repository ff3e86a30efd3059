//! Arbitrary-precision signed decimal integers.
//!
//! Sign-and-magnitude over base-10 digits, least significant first.
//! Arithmetic mutates the left operand in place: `n.add(&m)` computes
//! `n = n + m`.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Errors from parsing a decimal integer literal.
///
/// Every variant means the same thing to a caller ("not a valid integer
/// representation"); the split exists only for diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseBigIntError {
    /// The input was empty.
    Empty,
    /// A high-order zero in front of other digits, e.g. `"007"`.
    LeadingZero,
    /// A `-` with no digits after it.
    MissingDigits,
    /// `-0` in any spelling; zero has no negative form.
    NegativeZero,
    /// A character outside `0`–`9`.
    InvalidDigit(char),
}

impl fmt::Display for ParseBigIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseBigIntError::Empty => write!(f, "empty integer literal"),
            ParseBigIntError::LeadingZero => write!(f, "integer literal has a leading zero"),
            ParseBigIntError::MissingDigits => write!(f, "sign without digits"),
            ParseBigIntError::NegativeZero => write!(f, "zero cannot be negative"),
            ParseBigIntError::InvalidDigit(c) => {
                write!(f, "invalid character {c:?} in integer literal")
            }
        }
    }
}

impl std::error::Error for ParseBigIntError {}

/// Arbitrary-precision signed decimal integer.
///
/// Digits are stored in little-endian order (`digits[0]` is least
/// significant) and kept canonical: no high-order zero digits, and zero is
/// the single digit `0` with `negative == false`. Canonical form makes
/// structural equality coincide with numeric equality, so `PartialEq` is
/// derived.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    negative: bool,
    digits: Vec<u8>,
}

// ============================================================================
// Magnitude helpers
// ============================================================================

/// Compare two magnitudes: digit count first, then digit-by-digit from the
/// most significant end.
fn cmp_magnitudes(a: &[u8], b: &[u8]) -> Ordering {
    if a.len() != b.len() {
        return a.len().cmp(&b.len());
    }
    for i in (0..a.len()).rev() {
        match a[i].cmp(&b[i]) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}

/// Drop high-order zero digits, keeping at least one digit.
fn strip_leading_zeros(digits: &mut Vec<u8>) {
    while digits.len() > 1 && digits.last() == Some(&0) {
        digits.pop();
    }
}

/// Digit-wise sum with carry. The result may be one digit longer than the
/// longer input.
fn add_magnitudes(a: &[u8], b: &[u8]) -> Vec<u8> {
    let len = a.len().max(b.len());
    let mut out = Vec::with_capacity(len + 1);
    let mut carry = 0u8;
    for i in 0..len {
        let mut digit = carry;
        if i < a.len() {
            digit += a[i];
        }
        if i < b.len() {
            digit += b[i];
        }
        carry = digit / 10;
        out.push(digit % 10);
    }
    if carry > 0 {
        out.push(carry);
    }
    out
}

/// Digit-wise difference with borrow.
///
/// Requires `larger >= smaller` by magnitude; equal magnitudes yield the
/// canonical zero.
fn sub_magnitudes(larger: &[u8], smaller: &[u8]) -> Vec<u8> {
    debug_assert_ne!(cmp_magnitudes(larger, smaller), Ordering::Less);
    let mut out = Vec::with_capacity(larger.len());
    let mut borrow = 0i8;
    for i in 0..larger.len() {
        let mut digit = larger[i] as i8 - borrow;
        if i < smaller.len() {
            digit -= smaller[i] as i8;
        }
        if digit < 0 {
            digit += 10;
            borrow = 1;
        } else {
            borrow = 0;
        }
        out.push(digit as u8);
    }
    strip_leading_zeros(&mut out);
    out
}

/// Multiply a magnitude by a single digit, with carry.
fn mul_digit(a: &[u8], d: u8) -> Vec<u8> {
    let mut out = Vec::with_capacity(a.len() + 1);
    let mut carry = 0u8;
    for &x in a {
        let product = x * d + carry;
        out.push(product % 10);
        carry = product / 10;
    }
    if carry > 0 {
        out.push(carry);
    }
    out
}

// ============================================================================
// BigInt public API
// ============================================================================

impl BigInt {
    /// The canonical zero.
    ///
    /// ```
    /// use bignum::BigInt;
    ///
    /// let z = BigInt::zero();
    /// assert!(z.is_zero());
    /// assert_eq!(z.to_string(), "0");
    /// ```
    pub fn zero() -> Self {
        Self {
            negative: false,
            digits: vec![0],
        }
    }

    /// Create a BigInt from a native integer.
    ///
    /// ```
    /// use bignum::BigInt;
    ///
    /// assert_eq!(BigInt::from_i64(-507).to_string(), "-507");
    /// ```
    pub fn from_i64(value: i64) -> Self {
        let negative = value < 0;
        let mut rest = value.unsigned_abs();
        let mut digits = Vec::new();
        loop {
            digits.push((rest % 10) as u8);
            rest /= 10;
            if rest == 0 {
                break;
            }
        }
        Self { negative, digits }
    }

    /// Parse a decimal integer literal.
    ///
    /// Accepts an optional single leading `-` followed by one or more ASCII
    /// digits and nothing else. Leading (extraneous) zeros and `-0` are
    /// rejected, so every accepted string is already canonical and
    /// round-trips through [`fmt::Display`] unchanged.
    ///
    /// ```
    /// use bignum::BigInt;
    ///
    /// let n = BigInt::parse("-5678").unwrap();
    /// assert_eq!(n.to_string(), "-5678");
    ///
    /// assert!(BigInt::parse("007").is_err());
    /// assert!(BigInt::parse("-0").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, ParseBigIntError> {
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        if body.is_empty() {
            return Err(if negative {
                ParseBigIntError::MissingDigits
            } else {
                ParseBigIntError::Empty
            });
        }
        if let Some(bad) = body.chars().find(|c| !c.is_ascii_digit()) {
            return Err(ParseBigIntError::InvalidDigit(bad));
        }
        if body.len() > 1 && body.starts_with('0') {
            return Err(ParseBigIntError::LeadingZero);
        }
        if negative && body == "0" {
            return Err(ParseBigIntError::NegativeZero);
        }
        let digits = body.bytes().rev().map(|b| b - b'0').collect();
        Ok(Self { negative, digits })
    }

    /// Whether this value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits == [0]
    }

    /// Whether this value is strictly negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// In-place addition: `self = self + other`.
    ///
    /// ```
    /// use bignum::BigInt;
    ///
    /// let mut n = BigInt::parse("123").unwrap();
    /// n.add(&BigInt::parse("456").unwrap());
    /// assert_eq!(n.to_string(), "579");
    /// ```
    pub fn add(&mut self, other: &BigInt) {
        self.add_signed(other, other.negative);
    }

    /// In-place subtraction: `self = self - other`.
    ///
    /// ```
    /// use bignum::BigInt;
    ///
    /// let mut n = BigInt::parse("100").unwrap();
    /// n.sub(&BigInt::parse("999").unwrap());
    /// assert_eq!(n.to_string(), "-899");
    /// ```
    pub fn sub(&mut self, other: &BigInt) {
        self.add_signed(other, !other.negative);
    }

    /// Signed addition of `other` taken with the sign `other_negative`.
    /// Subtraction flips that sign instead of mutating `other`.
    fn add_signed(&mut self, other: &BigInt, other_negative: bool) {
        if self.negative == other_negative {
            self.digits = add_magnitudes(&self.digits, &other.digits);
        } else {
            match cmp_magnitudes(&self.digits, &other.digits) {
                Ordering::Less => {
                    self.digits = sub_magnitudes(&other.digits, &self.digits);
                    self.negative = other_negative;
                }
                _ => {
                    self.digits = sub_magnitudes(&self.digits, &other.digits);
                }
            }
        }
        if self.is_zero() {
            self.negative = false;
        }
    }

    /// In-place multiplication: `self = self * other`.
    ///
    /// Grade-school long multiplication: each digit of `other` produces a
    /// single-digit partial product of `self`, shifted by its position and
    /// accumulated into a running total.
    ///
    /// ```
    /// use bignum::BigInt;
    ///
    /// let mut n = BigInt::parse("123").unwrap();
    /// n.mul(&BigInt::parse("-4").unwrap());
    /// assert_eq!(n.to_string(), "-492");
    /// ```
    pub fn mul(&mut self, other: &BigInt) {
        let negative = self.negative != other.negative;
        let mut total = vec![0u8];
        for (i, &d) in other.digits.iter().enumerate() {
            if d == 0 {
                continue;
            }
            // Shift the partial product left by i digit positions.
            let mut partial = vec![0u8; i];
            partial.extend(mul_digit(&self.digits, d));
            total = add_magnitudes(&total, &partial);
        }
        strip_leading_zeros(&mut total);
        self.digits = total;
        self.negative = negative && !self.is_zero();
    }

    /// In-place truncating division: `self = self / other`, rounded toward
    /// zero. The remainder is discarded.
    ///
    /// Long division on magnitudes, most significant digit first: bring
    /// down one dividend digit into the running remainder, then count how
    /// many times (0–9) the divisor magnitude fits.
    ///
    /// # Panics
    ///
    /// Panics if `other` is zero; callers must check first.
    ///
    /// ```
    /// use bignum::BigInt;
    ///
    /// let mut n = BigInt::parse("-17").unwrap();
    /// n.div(&BigInt::parse("5").unwrap());
    /// assert_eq!(n.to_string(), "-3");
    /// ```
    pub fn div(&mut self, other: &BigInt) {
        assert!(!other.is_zero(), "BigInt division by zero");
        let negative = self.negative != other.negative;
        let mut remainder = vec![0u8];
        // Quotient digits are produced most significant first.
        let mut quotient = Vec::with_capacity(self.digits.len());
        for &d in self.digits.iter().rev() {
            remainder.insert(0, d);
            strip_leading_zeros(&mut remainder);
            let mut q = 0u8;
            while cmp_magnitudes(&remainder, &other.digits) != Ordering::Less {
                remainder = sub_magnitudes(&remainder, &other.digits);
                q += 1;
            }
            quotient.push(q);
        }
        quotient.reverse();
        strip_leading_zeros(&mut quotient);
        self.digits = quotient;
        self.negative = negative && !self.is_zero();
    }
}

// ============================================================================
// Trait impls
// ============================================================================

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => cmp_magnitudes(&self.digits, &other.digits),
            // Both negative: the larger magnitude is the smaller value.
            (true, true) => cmp_magnitudes(&other.digits, &self.digits),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for BigInt {
    type Err = ParseBigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-")?;
        }
        for &d in self.digits.iter().rev() {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt({self})")
    }
}

// ============================================================================
// Tests
// ============================================================================
