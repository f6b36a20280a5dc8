//! Arbitrary-precision unsigned integers backed by a little-endian byte buffer.
//!
//! Values are kept in canonical form: the most significant byte is never zero,
//! and zero is the empty buffer. Addition and subtraction mutate the receiver
//! in place and return it for chaining.

use std::cmp::Ordering;
use std::fmt;
use std::ops::AddAssign;

use crate::error::BigUIntError;

/// Unsigned integer of unbounded width.
///
/// Digits are stored in little-endian order (digits[0] is least significant).
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct BigUInt {
    digits: Vec<u8>,
}

// ============================================================================
// Low-level helpers
// ============================================================================

/// Add with carry: (result, carry) = a + b + carry_in
#[inline(always)]
const fn adc(a: u8, b: u8, carry: u8) -> (u8, u8) {
    let tmp = a as u16 + b as u16 + carry as u16;
    (tmp as u8, (tmp >> 8) as u8)
}

/// Subtract with borrow: (result, borrow) = a - b - borrow_in
#[inline(always)]
const fn sbb(a: u8, b: u8, borrow: u8) -> (u8, u8) {
    let tmp = (a as u16)
        .wrapping_sub(b as u16)
        .wrapping_sub(borrow as u16);
    (tmp as u8, (tmp >> 15) as u8) // borrow is 0 or 1
}

/// Minimal little-endian byte decomposition of `src`. Zero yields no bytes.
pub(crate) fn bytes_from_u64(src: u64) -> Vec<u8> {
    let mut res = Vec::with_capacity(8);
    let mut acc = src;
    while acc != 0 {
        res.push((acc & 0xff) as u8);
        acc >>= 8;
    }
    res
}

/// Magnitude ordering of two canonical digit buffers.
fn cmp_digits(a: &[u8], b: &[u8]) -> Ordering {
    // Canonical buffers have no leading zeros, so length decides first
    match a.len().cmp(&b.len()) {
        Ordering::Equal => {}
        ord => return ord,
    }
    for i in (0..a.len()).rev() {
        match a[i].cmp(&b[i]) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}

// ============================================================================
// BigUInt public API
// ============================================================================

impl BigUInt {
    /// Create a BigUInt from a u64 value.
    ///
    /// ```
    /// use biguint::BigUInt;
    ///
    /// let b = BigUInt::new(0x1234);
    /// assert_eq!(b.bytes(), &[0x34, 0x12]);
    /// assert!(BigUInt::new(0).bytes().is_empty());
    /// ```
    pub fn new(val: u64) -> Self {
        Self {
            digits: bytes_from_u64(val),
        }
    }

    /// The value zero.
    pub fn zero() -> Self {
        Self { digits: Vec::new() }
    }

    /// Whether this value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// Raw digits (LE order, canonical).
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.digits
    }

    /// Deep copy. The returned value shares no storage with `self`.
    pub fn copy(&self) -> Self {
        Self {
            digits: self.digits.to_vec(),
        }
    }

    #[inline]
    fn is_canonical(&self) -> bool {
        self.digits.last() != Some(&0)
    }

    /// Drop most-significant zero bytes.
    fn normalize(&mut self) {
        while self.digits.last() == Some(&0) {
            self.digits.pop();
        }
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Increase `self` by `other`, returning `self`.
    ///
    /// The receiver grows as needed; addition never fails.
    ///
    /// ```
    /// use biguint::BigUInt;
    ///
    /// let mut a = BigUInt::new(0xff);
    /// a.add(&BigUInt::new(0xff));
    /// assert_eq!(a.to_string(), "0x1fe");
    /// ```
    pub fn add(&mut self, other: &Self) -> &mut Self {
        if self.digits.len() < other.digits.len() {
            tracing::trace!(
                from = self.digits.len(),
                to = other.digits.len(),
                "growing receiver for addition"
            );
            self.digits.resize(other.digits.len(), 0);
        }

        let mut carry = 0u8;
        for (i, digit) in self.digits.iter_mut().enumerate() {
            if i >= other.digits.len() && carry == 0 {
                break;
            }
            let rhs = other.digits.get(i).copied().unwrap_or(0);
            let (r, c) = adc(*digit, rhs, carry);
            *digit = r;
            carry = c;
        }
        if carry != 0 {
            self.digits.push(carry);
        }

        debug_assert!(self.is_canonical());
        self
    }

    /// Decrease `self` by `other`, returning `self`.
    ///
    /// If `other > self`, returns [`BigUIntError::Underflow`] and leaves
    /// `self` untouched.
    ///
    /// ```
    /// use biguint::{BigUInt, BigUIntError};
    ///
    /// let mut a = BigUInt::new(0xff00);
    /// a.subtract(&BigUInt::new(0xf0)).unwrap();
    /// assert_eq!(a.to_string(), "0xfe10");
    ///
    /// let mut z = BigUInt::new(0);
    /// assert_eq!(z.subtract(&BigUInt::new(1)).unwrap_err(), BigUIntError::Underflow);
    /// assert!(z.is_zero());
    /// ```
    pub fn subtract(&mut self, other: &Self) -> Result<&mut Self, BigUIntError> {
        if cmp_digits(&self.digits, &other.digits) == Ordering::Less {
            tracing::trace!(
                lhs_len = self.digits.len(),
                rhs_len = other.digits.len(),
                "subtraction would underflow"
            );
            return Err(BigUIntError::Underflow);
        }

        let mut borrow = 0u8;
        for (i, digit) in self.digits.iter_mut().enumerate() {
            let rhs = other.digits.get(i).copied().unwrap_or(0);
            let (r, b) = sbb(*digit, rhs, borrow);
            *digit = r;
            borrow = b;
        }
        debug_assert_eq!(borrow, 0);

        self.normalize();
        Ok(self)
    }
}

// ============================================================================
// Trait impls
// ============================================================================

impl From<u64> for BigUInt {
    fn from(val: u64) -> Self {
        Self::new(val)
    }
}

impl AddAssign<&BigUInt> for BigUInt {
    fn add_assign(&mut self, rhs: &BigUInt) {
        BigUInt::add(self, rhs);
    }
}

/// Lowercase hex with a `0x` prefix and an underscore every 8 digits,
/// counted from the least significant end.
impl fmt::Display for BigUInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((msb, rest)) = self.digits.split_last() else {
            return f.write_str("0x0");
        };
        write!(f, "0x{:x}", msb)?;
        let top = rest.len();
        if top != 0 && top % 4 == 0 {
            f.write_str("_")?;
        }
        for (i, byte) in rest.iter().enumerate().rev() {
            write!(f, "{:02x}", byte)?;
            if i != 0 && i % 4 == 0 {
                f.write_str("_")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for BigUInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigUInt({})", self)
    }
}

// ============================================================================
// Tests
// ============================================================================
