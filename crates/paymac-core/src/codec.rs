use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::CodecError;
use crate::secret::Secret;
use crate::timing::constant_time_eq;

type HmacSha256 = Hmac<Sha256>;

/// Compute HMAC-SHA256 over `data` keyed by `secret`, rendered as a
/// 64-character lowercase hex string.
///
/// Pure function of its inputs: same `(data, secret)` always yields the
/// same digest.
pub fn compute(data: &str, secret: &Secret) -> Result<String, CodecError> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())?;
    mac.update(data.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Recompute the digest for `data` and compare it to `candidate`.
///
/// Comparison is constant-time over the digest bytes. A mismatch is a
/// normal `false` result, never an error; only codec initialization can
/// fail. `compute` emits lowercase hex, so an uppercase candidate never
/// matches.
pub fn verify(data: &str, secret: &Secret, candidate: &str) -> Result<bool, CodecError> {
    let expected = compute(data, secret)?;
    Ok(constant_time_eq(expected.as_bytes(), candidate.as_bytes()))
}
