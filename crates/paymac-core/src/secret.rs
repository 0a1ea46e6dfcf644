/// Shared MAC key, fixed for the lifetime of the process.
///
/// Constructed once at startup from configuration and passed down by
/// reference; never mutated afterwards.
#[derive(Clone)]
pub struct Secret(Vec<u8>);

impl Secret {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into().into_bytes())
    }

    /// Raw key bytes for MAC initialization.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// Keep the key out of logs and error messages.
impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Secret(<{} bytes redacted>)", self.0.len())
    }
}
