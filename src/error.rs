use thiserror::Error;

/// Why a user-submitted withdrawal address was rejected.
///
/// This is the only user-recoverable error in the bot; everything else is
/// either fatal at startup or swallowed by the dispatcher's error hook.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("address must start with 0x")]
    MissingPrefix,

    #[error("address must be exactly {expected} characters, got {actual}")]
    BadLength { expected: usize, actual: usize },
}
