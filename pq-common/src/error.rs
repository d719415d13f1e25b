use thiserror::Error;

/// The errors a scheme call can report.
///
/// Every variant maps to a negative [`status`](Error::status), the value a C-style
/// interface would have returned. The exception is [`Error::Status`], which carries
/// whatever a foreign backend returned unchanged.
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The signed message or ciphertext did not verify under the given key
    #[error("verification failed")]
    Verification,
    /// A caller-supplied buffer does not have the length the scheme requires
    #[error("invalid buffer length: expected {expected}, got {actual}")]
    InvalidLength {
        /// The length the scheme requires
        expected: usize,
        /// The length that was supplied
        actual: usize,
    },
    /// A key could not be parsed from its encoding
    #[error("invalid key encoding")]
    InvalidKey,
    /// A raw status code reported by a backend with a numeric calling convention
    #[error("scheme returned status {0}")]
    Status(i32),
}

impl Error {
    /// The numeric status of this failure: success is 0, and well-behaved failures are
    /// negative.
    #[must_use]
    pub const fn status(&self) -> i32 {
        match *self {
            Error::Verification => -1,
            Error::InvalidLength { .. } => -2,
            Error::InvalidKey => -3,
            Error::Status(code) => code,
        }
    }

    /// Checks that a buffer has exactly the length a scheme requires.
    ///
    /// # Errors
    /// [`Error::InvalidLength`] if `buf.len() != expected`.
    pub fn check_length(buf: &[u8], expected: usize) -> Result<(), Error> {
        if buf.len() == expected {
            Ok(())
        } else {
            Err(Error::InvalidLength {
                expected,
                actual: buf.len(),
            })
        }
    }
}

#[cfg(test)]
mod test {
    use super::Error;

    #[test]
    fn statuses_are_negative() {
        let errors = [
            Error::Verification,
            Error::InvalidLength {
                expected: 32,
                actual: 31,
            },
            Error::InvalidKey,
            Error::Status(-7),
        ];
        for e in errors {
            assert!(e.status() < 0, "{e:?}");
        }
    }

    #[test]
    fn raw_status_passes_through() {
        assert_eq!(Error::Status(3).status(), 3);
    }

    #[test]
    fn length_check() {
        assert_eq!(Error::check_length(&[0u8; 4], 4), Ok(()));
        assert_eq!(
            Error::check_length(&[0u8; 4], 5),
            Err(Error::InvalidLength {
                expected: 5,
                actual: 4
            })
        );
    }
}
