pub use crate::stream::{Reader, Writer};

use crate::bit_repr::{buffer_to_stream, lower_bits, num_bits_to_num_words};
use log::trace;

/// Writer storing bits in a vector of `u64`, the first bit in the lowest bit
/// of the first word.
pub struct VecWriter {
    buffer: Vec<u64>,
    // total number of bits written, like `Vec::len`
    end: usize,
}

impl VecWriter {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(reserve_bits: usize) -> Self {
        trace!("bit writer reserving {} bits", reserve_bits);
        VecWriter {
            buffer: Vec::with_capacity(num_bits_to_num_words(reserve_bits, 64)),
            end: 0,
        }
    }

    /// The underlying words. Bits past `bits_written` are zero.
    pub fn words(&self) -> &[u64] {
        &self.buffer
    }

    pub fn into_words(self) -> Vec<u64> {
        self.buffer
    }

    /// The written bits as a stream, zero padded to a multiple of 64.
    pub fn stream_padded64(&self) -> String {
        buffer_to_stream(&self.buffer)
    }
}

impl Default for VecWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer for VecWriter {
    fn write_bits(&mut self, bits: u64, count: u8) {
        assert!(count <= 64, "can't write {} bits at once", count);
        if count == 0 {
            return;
        }

        let bits = lower_bits(bits, count);
        let offset = self.end % 64;
        if offset == 0 {
            self.buffer.push(bits);
        } else {
            // there is a partially filled word whenever offset != 0
            if let Some(last) = self.buffer.last_mut() {
                *last |= bits << offset;
            }
            if offset + count as usize > 64 {
                self.buffer.push(bits >> (64 - offset));
            }
        }
        self.end += count as usize;
    }

    fn bits_written(&self) -> usize {
        self.end
    }

    fn to_bytes(&self) -> Vec<u8> {
        let mut bytes: Vec<u8> = self.buffer.iter().flat_map(|word| word.to_le_bytes()).collect();
        bytes.truncate(self.byte_len());
        bytes
    }
}

/// Reader over a vector of `u64` it owns, either taken over from the caller or
/// copied from bytes.
pub struct VecReader {
    buffer: Vec<u64>,
    pos: usize,
    // number of readable bits, at most buffer.len() * 64
    end: usize,
}

impl VecReader {
    /// Takes over `words`; every bit of them is readable.
    pub fn from_owned_words(words: Vec<u64>) -> Self {
        let end = words.len() * 64;
        trace!("bit reader over {} owned words", words.len());
        VecReader { buffer: words, pos: 0, end: end }
    }

    /// Copies `bytes` into words. Reading past the last byte hits the end even
    /// if the last word has room left.
    pub fn from_byte_copy(bytes: &[u8]) -> Self {
        let buffer = bytes
            .chunks(8)
            .map(|chunk| {
                let mut word = [0u8; 8];
                word[..chunk.len()].copy_from_slice(chunk);
                u64::from_le_bytes(word)
            })
            .collect();
        trace!("bit reader over a copy of {} bytes", bytes.len());
        VecReader { buffer: buffer, pos: 0, end: bytes.len() * 8 }
    }

    /// Number of bits read so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn capacity_bits(&self) -> usize {
        self.end
    }
}

impl From<Vec<u64>> for VecReader {
    fn from(words: Vec<u64>) -> Self {
        Self::from_owned_words(words)
    }
}

impl Reader for VecReader {
    fn read_bits(&mut self, count: u8) -> (u64, u8) {
        assert!(count <= 64, "can't read {} bits at once", count);
        let count = count.min((self.end - self.pos).min(64) as u8);
        if count == 0 {
            return (0, 0);
        }

        let index = self.pos / 64;
        let offset = self.pos % 64;
        let mut bits = self.buffer[index] >> offset;
        if offset + count as usize > 64 {
            // only possible with offset > 0, and the next word exists since
            // pos + count <= end
            bits |= self.buffer[index + 1] << (64 - offset);
        }
        self.pos += count as usize;
        (lower_bits(bits, count), count)
    }

    fn reached_end(&self) -> bool {
        self.pos >= self.end
    }

    fn only_zeroes_left(&self) -> bool {
        if self.reached_end() {
            return true;
        }

        // only the last word is inspected, earlier positions give up
        let index = self.pos / 64;
        if index + 1 != self.buffer.len() {
            return false;
        }
        let remaining = self.end - self.pos;
        lower_bits(self.buffer[index] >> (self.pos % 64), remaining as u8) == 0
    }
}
