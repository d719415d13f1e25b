/// How hard the harness drives a scheme.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Number of cycles for the repeated checks
    pub iterations: usize,
    /// Length of the random messages that get signed
    pub message_bytes: usize,
}

impl HarnessConfig {
    /// A configuration with the given cycle count and message length.
    #[must_use]
    pub const fn new(iterations: usize, message_bytes: usize) -> Self {
        Self {
            iterations,
            message_bytes,
        }
    }
}

impl Default for HarnessConfig {
    /// 15 cycles over 32-byte messages.
    fn default() -> Self {
        Self::new(15, 32)
    }
}
