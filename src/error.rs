use thiserror::Error;

/// Widest field a single read can return.
pub const MAX_WIDTH: u32 = u64::BITS;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BitStrmError {
    #[error("{width} bits exceeds maximum bit size (64)")]
    InvalidWidth { width: u32 },
    #[error("BitStrm buffer ran out of bits")]
    BufferExhausted,
    #[error("bit limit {bit_limit} exceeds buffer capacity of {capacity} bits")]
    BitLimitTooLarge { bit_limit: usize, capacity: usize },
}

pub type Result<T, E = BitStrmError> = std::result::Result<T, E>;
