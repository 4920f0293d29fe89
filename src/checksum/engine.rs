//! Checksum generation and sender/receiver verification.
//!
//! All remainders use floor ("Euclidean") semantics: the result is always in
//! `[0, |modulus|)` whatever the sign of the data or of the modulus. This is
//! different from Rust's `%` operator, which truncates toward zero.
//!
//! Equal checksums do not prove the data arrived intact. Any corruption that
//! shifts the value by a multiple of the modulus goes unnoticed, e.g.
//! `verify(5, 5, 10)` reports a match. That limit is part of the model being
//! simulated and is kept as-is.

use crate::error::ChecksumError;

/// Message reported when sender and receiver checksums agree.
pub const NO_ERROR_MESSAGE: &str = "No Error Detected";

/// Message reported when sender and receiver checksums differ.
pub const ERROR_DETECTED_MESSAGE: &str = "Error Detected - Data Corrupted";

// =============================================================================
// Checksum
// =============================================================================

/// Compute the checksum of `data` under `modulus`.
///
/// Returns `data mod |modulus|` using floor semantics, so the result is
/// always non-negative and strictly less than `|modulus|`.
///
/// # Errors
///
/// Returns [`ChecksumError::InvalidModulus`] if `modulus` is zero.
///
/// # Example
///
/// ```
/// use modcheck::checksum::generate_checksum;
///
/// assert_eq!(generate_checksum(10, 3).unwrap(), 1);
/// assert_eq!(generate_checksum(-1, 5).unwrap(), 4);
/// assert_eq!(generate_checksum(7, -3).unwrap(), 1);
/// assert!(generate_checksum(7, 0).is_err());
/// ```
pub fn generate_checksum(data: i64, modulus: i64) -> Result<i64, ChecksumError> {
    if modulus == 0 {
        return Err(ChecksumError::InvalidModulus);
    }

    // rem_euclid already ignores the sign of the divisor. The wrapping form
    // only differs for i64::MIN % -1, where the true remainder is 0.
    Ok(data.wrapping_rem_euclid(modulus))
}

// =============================================================================
// Verification
// =============================================================================

/// Result of comparing sender and receiver checksums.
///
/// Built fresh for each verification and never shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerificationOutcome {
    sent_data: i64,
    modulus: i64,
    received_data: i64,
    sender_checksum: i64,
    receiver_checksum: i64,
}

impl VerificationOutcome {
    /// Data as sent, echoed verbatim.
    pub fn sent_data(&self) -> i64 {
        self.sent_data
    }

    /// Modulus as supplied, including its sign.
    pub fn modulus(&self) -> i64 {
        self.modulus
    }

    /// Data as received, echoed verbatim.
    pub fn received_data(&self) -> i64 {
        self.received_data
    }

    /// Checksum computed over the sent data.
    pub fn sender_checksum(&self) -> i64 {
        self.sender_checksum
    }

    /// Checksum recomputed over the received data.
    pub fn receiver_checksum(&self) -> i64 {
        self.receiver_checksum
    }

    /// True iff both checksums are equal.
    pub fn matched(&self) -> bool {
        self.sender_checksum == self.receiver_checksum
    }

    /// Human-readable verdict for this outcome.
    pub fn message(&self) -> &'static str {
        if self.matched() {
            NO_ERROR_MESSAGE
        } else {
            ERROR_DETECTED_MESSAGE
        }
    }
}

/// Verify `received_data` against `sent_data` under a shared modulus.
///
/// # Errors
///
/// Returns [`ChecksumError::InvalidModulus`] if `modulus` is zero.
pub fn verify(
    sent_data: i64,
    modulus: i64,
    received_data: i64,
) -> Result<VerificationOutcome, ChecksumError> {
    let sender_checksum = generate_checksum(sent_data, modulus)?;
    let receiver_checksum = generate_checksum(received_data, modulus)?;

    Ok(VerificationOutcome {
        sent_data,
        modulus,
        received_data,
        sender_checksum,
        receiver_checksum,
    })
}

// =============================================================================
// Floor Division
// =============================================================================

/// Quotient/remainder breakdown of `data` by `|modulus|`.
///
/// Satisfies `data == quotient * |modulus| + remainder` with
/// `0 <= remainder < |modulus|`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Explanation {
    /// Dividend, echoed verbatim
    pub data: i64,

    /// Modulus as supplied, including its sign
    pub modulus: i64,

    /// Floor quotient of `data / |modulus|`
    pub quotient: i64,

    /// Floor remainder, identical to the checksum
    pub remainder: i64,
}

/// Break `data` into a floor quotient and remainder by `|modulus|`.
///
/// # Errors
///
/// Returns [`ChecksumError::InvalidModulus`] if `modulus` is zero.
///
/// # Example
///
/// ```
/// use modcheck::checksum::explain;
///
/// let e = explain(-7, 3).unwrap();
/// assert_eq!((e.quotient, e.remainder), (-3, 2));
/// ```
pub fn explain(data: i64, modulus: i64) -> Result<Explanation, ChecksumError> {
    if modulus == 0 {
        return Err(ChecksumError::InvalidModulus);
    }

    // |i64::MIN| does not fit in i64
    let divisor = i128::from(modulus).abs();
    let dividend = i128::from(data);

    // |quotient| <= |data| and remainder < |modulus| <= 2^63, so both fit.
    let quotient = dividend.div_euclid(divisor) as i64;
    let remainder = dividend.rem_euclid(divisor) as i64;

    Ok(Explanation {
        data,
        modulus,
        quotient,
        remainder,
    })
}

// =============================================================================
// Tests
// =============================================================================
