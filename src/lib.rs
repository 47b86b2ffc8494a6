//! MSB-first bit field extraction over immutable byte buffers.
//!
//! ```
//! use bitstrm::BitReader;
//!
//! let mut reader = BitReader::new([0xaau8, 0x55]);
//! assert_eq!(reader.getbits(3).unwrap(), 0b101);
//! assert_eq!(reader.getbits(9).unwrap(), 0b0_1010_0101);
//! assert_eq!(reader.remaining(), 4);
//! ```

pub mod error;
pub mod bitcursor;

pub use bitcursor::BitReader;
pub use error::{BitStrmError, Result, MAX_WIDTH};
