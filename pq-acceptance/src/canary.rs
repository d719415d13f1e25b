use crate::error::{AcceptanceError, BufferKind, Call, Side};

/// Sentinel written on both sides of every guarded buffer.
pub const CANARY: [u8; 8] = [0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF];

const GUARD: usize = CANARY.len();

/// A zero-initialized byte buffer with a [`CANARY`] immediately before and after it.
///
/// Only the interior is handed to scheme calls; [`check`](Self::check) confirms afterwards
/// that neither guard changed.
#[derive(Clone, Debug)]
pub struct CanaryBuffer {
    kind: BufferKind,
    storage: Vec<u8>,
}

impl CanaryBuffer {
    /// A guarded buffer of `len` bytes.
    #[must_use]
    pub fn new(kind: BufferKind, len: usize) -> Self {
        let mut storage = vec![0u8; len + 2 * GUARD];
        storage[..GUARD].copy_from_slice(&CANARY);
        storage[GUARD + len..].copy_from_slice(&CANARY);
        Self { kind, storage }
    }

    /// What the buffer holds.
    #[must_use]
    pub fn kind(&self) -> BufferKind {
        self.kind
    }

    /// Length of the interior.
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage.len() - 2 * GUARD
    }

    /// Whether the interior is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The interior.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        let end = self.storage.len() - GUARD;
        &self.storage[GUARD..end]
    }

    /// The interior, mutably. The guards stay out of reach.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        let end = self.storage.len() - GUARD;
        &mut self.storage[GUARD..end]
    }

    /// Confirms both guards are intact after `call`.
    ///
    /// # Errors
    /// [`AcceptanceError::CanaryOverwritten`] naming the damaged side, the one before the
    /// buffer first.
    pub fn check(&self, call: Call) -> Result<(), AcceptanceError> {
        let (before, rest) = self.storage.split_at(GUARD);
        let after = &rest[rest.len() - GUARD..];
        for (guard, side) in [(before, Side::Before), (after, Side::After)] {
            if guard != CANARY {
                return Err(AcceptanceError::CanaryOverwritten {
                    call,
                    buffer: self.kind,
                    side,
                });
            }
        }
        Ok(())
    }

    /// Checks every buffer in `buffers` after `call`.
    ///
    /// # Errors
    /// The first [`AcceptanceError::CanaryOverwritten`] found.
    pub fn check_all(call: Call, buffers: &[&CanaryBuffer]) -> Result<(), AcceptanceError> {
        buffers.iter().try_for_each(|b| b.check(call))
    }
}
