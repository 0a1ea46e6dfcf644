use thiserror::Error;

/// Failures from the codec.
///
/// HMAC-SHA256 accepts keys of any length, so `AlgorithmUnavailable` is
/// unreachable with the linked primitive; it exists so the one
/// initialization path that can fail is propagated instead of panicking.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("MAC primitive could not be initialized")]
    AlgorithmUnavailable(#[from] hmac::digest::InvalidLength),
}
