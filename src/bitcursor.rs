use byteorder::{BigEndian, ByteOrder};
use tracing::{debug, trace, warn};

use crate::error::{BitStrmError, Result, MAX_WIDTH};

/// Reads MSB-first bit fields out of a fixed byte buffer.
///
/// The cursor only moves forward, and only when a read succeeds.
#[derive(Debug, Clone)]
#[must_use]
pub struct BitReader<T> {
    data: T,
    bit_limit: usize,
    position: usize,
}

impl<T: AsRef<[u8]>> BitReader<T> {
    /// Creates a reader over every bit of `data`.
    pub fn new(data: T) -> BitReader<T> {
        let bit_limit = data.as_ref().len() * 8;
        debug!(bytes = data.as_ref().len(), bit_limit, "bit reader created");

        BitReader {
            data,
            bit_limit,
            position: 0,
        }
    }

    /// Creates a reader that only exposes the first `bit_limit` bits of `data`.
    ///
    /// The trailing bits of the last byte(s) are ignored. A limit larger than
    /// the buffer holds is rejected.
    pub fn with_bit_limit(data: T, bit_limit: usize) -> Result<BitReader<T>> {
        let capacity = data.as_ref().len() * 8;
        if bit_limit > capacity {
            warn!(bit_limit, capacity, "bit limit exceeds buffer");
            return Err(BitStrmError::BitLimitTooLarge {
                bit_limit,
                capacity,
            });
        }
        debug!(bytes = data.as_ref().len(), bit_limit, "bit reader created");

        Ok(BitReader {
            data,
            bit_limit,
            position: 0,
        })
    }

    /// Reads `width` bits as an unsigned integer, first bit most significant.
    ///
    /// Fails with [`BitStrmError::InvalidWidth`] for widths above 64 and with
    /// [`BitStrmError::BufferExhausted`] if fewer than `width` bits are left.
    /// Neither failure moves the cursor. A zero width reads nothing and
    /// returns 0.
    pub fn getbits(&mut self, width: u32) -> Result<u64> {
        if width > MAX_WIDTH {
            trace!(width, position = self.position, "bit read too wide");
            return Err(BitStrmError::InvalidWidth { width });
        }

        let width_bits = width as usize;
        if width_bits > self.remaining() {
            trace!(
                width,
                position = self.position,
                bit_limit = self.bit_limit,
                "bit read past limit"
            );
            return Err(BitStrmError::BufferExhausted);
        }

        if width == 0 {
            return Ok(0);
        }

        let value = extract(self.data.as_ref(), self.position, width);
        self.position += width_bits;
        Ok(value)
    }

    /// Reads a single bit.
    pub fn read_bit(&mut self) -> Result<bool> {
        Ok(self.getbits(1)? == 1)
    }
}

impl<T> BitReader<T> {
    /// Index of the next unread bit.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    #[inline]
    pub fn bit_limit(&self) -> usize {
        self.bit_limit
    }

    /// Bits left before the limit.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.bit_limit - self.position
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.position == self.bit_limit
    }

    /// Returns a reference to the underlying buffer
    #[inline]
    pub fn get_ref(&self) -> &T {
        &self.data
    }

    /// Returns the underlying buffer
    #[inline]
    pub fn into_inner(self) -> T {
        self.data
    }
}

// Caller guarantees 1 <= width <= 64 and position + width <= 8 * bytes.len().
fn extract(bytes: &[u8], position: usize, width: u32) -> u64 {
    let first = position / 8;
    let skip = (position % 8) as u32;
    // A 64 bit field starting mid-byte touches 9 bytes.
    let span = (skip + width + 7) / 8;
    let window = &bytes[first..first + span as usize];

    let (mut acc, tail) = if window.len() >= 8 {
        (u128::from(BigEndian::read_u64(&window[..8])), &window[8..])
    } else {
        (0u128, window)
    };
    for &byte in tail {
        acc = (acc << 8) | u128::from(byte);
    }

    let trailing = span * 8 - skip - width;
    let mask = u64::MAX >> (MAX_WIDTH - width);
    (acc >> trailing) as u64 & mask
}
