//! HMAC-SHA256 codec for paymac.
//!
//! Takes UTF-8 text plus a shared secret and produces a 64-character
//! lowercase hex digest; verification recomputes and compares in
//! constant time. Both operations are pure and need no coordination
//! between concurrent callers.

pub mod codec;
pub mod error;
pub mod secret;
pub mod timing;

pub use codec::{compute, verify};
pub use error::CodecError;
pub use secret::Secret;
pub use timing::constant_time_eq;
