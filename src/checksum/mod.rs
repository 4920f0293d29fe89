//! Checksum engine.
//!
//! Pure modular-arithmetic functions that simulate a sender/receiver
//! error-detection scheme. The sender transmits `data` together with
//! `data mod |modulus|`; the receiver recomputes the checksum from whatever
//! arrived and compares the two.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          HTTP Handlers / Console        │
//! └────────────────────┬────────────────────┘
//!                      │ (data, modulus, received)
//!                      ▼
//! ┌─────────────────────────────────────────┐
//! │             Checksum Engine             │
//! │  ┌──────────────┐  ┌─────────────────┐  │
//! │  │   engine     │  │     prime       │  │
//! │  │ (checksum,   │  │ (diagnostic     │  │
//! │  │  verify)     │  │  primality)     │  │
//! │  └──────────────┘  └─────────────────┘  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! Nothing in this module performs I/O or holds state, so every function is
//! safe to call from any number of request handlers at once.
//!
//! # Example
//!
//! ```
//! use modcheck::checksum::{generate_checksum, verify};
//!
//! assert_eq!(generate_checksum(-1, 5).unwrap(), 4);
//!
//! let outcome = verify(10, 3, 11).unwrap();
//! assert!(!outcome.matched());
//! assert_eq!(outcome.message(), "Error Detected - Data Corrupted");
//! ```

mod engine;
mod prime;

pub use engine::{
    explain, generate_checksum, verify, Explanation, VerificationOutcome, ERROR_DETECTED_MESSAGE,
    NO_ERROR_MESSAGE,
};
pub use prime::is_prime;
