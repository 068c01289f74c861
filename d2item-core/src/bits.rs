use thiserror::Error;

/// Errors raised by the bit field codec.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BitError {
    #[error("bit width {width} is outside 1..=32")]
    InvalidWidth { width: u32 },

    #[error("{width} bits at bit offset {offset} overrun a {len}-byte buffer")]
    OutOfRange { offset: usize, width: u32, len: usize },
}

fn check_span(len: usize, bit_offset: usize, bit_width: u32) -> Result<(), BitError> {
    if bit_width == 0 || bit_width > 32 {
        return Err(BitError::InvalidWidth { width: bit_width });
    }
    let end = bit_offset
        .checked_add(bit_width as usize)
        .ok_or(BitError::OutOfRange {
            offset: bit_offset,
            width: bit_width,
            len,
        })?;
    if end > len * 8 {
        return Err(BitError::OutOfRange {
            offset: bit_offset,
            width: bit_width,
            len,
        });
    }
    Ok(())
}

/// Read `bit_width` bits starting at `bit_offset`.
///
/// Bits are taken least-significant first within each byte, and the first
/// bit read becomes bit 0 of the result.
pub fn read_bits(buf: &[u8], bit_offset: usize, bit_width: u32) -> Result<u32, BitError> {
    check_span(buf.len(), bit_offset, bit_width)?;

    let mut value: u64 = 0;
    let mut done = 0u32;
    let mut pos = bit_offset;
    while done < bit_width {
        let shift = (pos % 8) as u32;
        let take = (8 - shift).min(bit_width - done);
        let chunk = (buf[pos / 8] >> shift) as u64 & ((1u64 << take) - 1);
        value |= chunk << done;
        done += take;
        pos += take as usize;
    }

    Ok(value as u32)
}

/// Write the low `bit_width` bits of `value` at `bit_offset`.
///
/// Bits outside the span are left untouched; higher bits of `value` are
/// dropped.
pub fn write_bits(
    buf: &mut [u8],
    bit_offset: usize,
    bit_width: u32,
    value: u32,
) -> Result<(), BitError> {
    check_span(buf.len(), bit_offset, bit_width)?;

    let mut done = 0u32;
    let mut pos = bit_offset;
    while done < bit_width {
        let shift = (pos % 8) as u32;
        let take = (8 - shift).min(bit_width - done);
        let mask = (((1u16 << take) - 1) as u8) << shift;
        let chunk = (((value as u64) >> done) as u8) << shift;
        let byte = &mut buf[pos / 8];
        *byte = (*byte & !mask) | (chunk & mask);
        done += take;
        pos += take as usize;
    }

    Ok(())
}

/// Cursor over a borrowed buffer.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn at(buf: &'a [u8], bit_offset: usize) -> Self {
        Self {
            buf,
            pos: bit_offset,
        }
    }

    pub fn read(&mut self, bit_width: u32) -> Result<u32, BitError> {
        let value = read_bits(self.buf, self.pos, bit_width)?;
        self.pos += bit_width as usize;
        Ok(value)
    }

    /// Look at the next bits without moving the cursor.
    pub fn peek(&self, bit_width: u32) -> Result<u32, BitError> {
        read_bits(self.buf, self.pos, bit_width)
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn seek(&mut self, bit_offset: usize) {
        self.pos = bit_offset;
    }

    pub fn remaining(&self) -> usize {
        (self.buf.len() * 8).saturating_sub(self.pos)
    }
}

/// Append-only writer that grows its buffer as needed.
#[derive(Debug, Clone, Default)]
pub struct BitWriter {
    buf: Vec<u8>,
    pos: usize,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write(&mut self, bit_width: u32, value: u32) -> Result<(), BitError> {
        if bit_width == 0 || bit_width > 32 {
            return Err(BitError::InvalidWidth { width: bit_width });
        }
        let needed = (self.pos + bit_width as usize + 7) / 8;
        if self.buf.len() < needed {
            self.buf.resize(needed, 0);
        }
        write_bits(&mut self.buf, self.pos, bit_width, value)?;
        self.pos += bit_width as usize;
        Ok(())
    }

    /// Write a value wider than 32 bits, low part first.
    pub fn write_u64(&mut self, bit_width: u32, value: u64) -> Result<(), BitError> {
        let mut left = bit_width;
        let mut rest = value;
        while left > 0 {
            let take = left.min(32);
            self.write(take, rest as u32)?;
            rest = rest.checked_shr(take).unwrap_or(0);
            left -= take;
        }
        Ok(())
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
