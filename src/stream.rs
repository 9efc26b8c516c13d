use crate::bit_repr::{bits_to_stream, num_bits_to_num_words, stream_to_bits};
use crate::error::Result;
use crate::variable_width::{read_signed, read_unsigned, write_signed, write_unsigned};

/// Sink for a sequence of bits. Implementors provide `write_bits` and the
/// bookkeeping accessors, everything else is built on top of them.
pub trait Writer {
    /// write the `count` least significant bits of `bits`, lowest first
    fn write_bits(&mut self, bits: u64, count: u8);

    /// Total number of bits written so far.
    fn bits_written(&self) -> usize;

    /// The written bits as bytes, zero padded to a whole byte. The returned
    /// vector is a copy and is not affected by later writes.
    fn to_bytes(&self) -> Vec<u8>;

    fn byte_len(&self) -> usize {
        num_bits_to_num_words(self.bits_written(), 8)
    }

    /// Writes a left-to-right string of `'0'` and `'1'` of at most 64 chars.
    /// "01" is written as 0b10: the string is a sequence of bits, not a number.
    fn write_stream(&mut self, stream: &str) {
        self.write_bits(stream_to_bits(stream), stream.len() as u8);
    }

    /// Writes `val` in chunks of `chunk_length` bits, each followed by a bit
    /// telling whether more chunks follow. 255 with chunk length 4 becomes
    /// 1111 1 1111 0. Once all 8 bits of the type are written the signal bit
    /// is dropped, and a final chunk may be shorter than `chunk_length`.
    fn write_variable_width_u8(&mut self, val: u8, chunk_length: u8) {
        write_unsigned(self, val, chunk_length);
    }

    fn write_variable_width_u16(&mut self, val: u16, chunk_length: u8) {
        write_unsigned(self, val, chunk_length);
    }

    fn write_variable_width_u32(&mut self, val: u32, chunk_length: u8) {
        write_unsigned(self, val, chunk_length);
    }

    fn write_variable_width_u64(&mut self, val: u64, chunk_length: u8) {
        write_unsigned(self, val, chunk_length);
    }

    /// Zigzag encodes `val` in blocks of `2^zigzag_exponent` and writes the
    /// result like `write_variable_width_u8`.
    fn write_variable_width_s8(&mut self, val: i8, chunk_length: u8, zigzag_exponent: u8) {
        write_signed(self, val, chunk_length, zigzag_exponent);
    }

    fn write_variable_width_s16(&mut self, val: i16, chunk_length: u8, zigzag_exponent: u8) {
        write_signed(self, val, chunk_length, zigzag_exponent);
    }

    fn write_variable_width_s32(&mut self, val: i32, chunk_length: u8, zigzag_exponent: u8) {
        write_signed(self, val, chunk_length, zigzag_exponent);
    }

    fn write_variable_width_s64(&mut self, val: i64, chunk_length: u8, zigzag_exponent: u8) {
        write_signed(self, val, chunk_length, zigzag_exponent);
    }
}

/// Source of a sequence of bits.
pub trait Reader {
    /// Reads up to `count` bits. Returns the bits, lowest first, and how many
    /// were actually read. Fewer than `count` are read only at the end of the
    /// data; the missing high bits are zero.
    fn read_bits(&mut self, count: u8) -> (u64, u8);

    /// Hard EOF: every bit of the buffer has been consumed.
    fn reached_end(&self) -> bool;

    /// Soft EOF: the end was reached or only zero padding is left. May return
    /// false even when only zeroes are left, but never true while a one bit
    /// remains unread.
    fn only_zeroes_left(&self) -> bool {
        self.reached_end()
    }

    /// Reads `count` bits as a left-to-right stream. The stream is shorter
    /// than `count` if the end was reached.
    fn read_stream(&mut self, count: u8) -> String {
        let (bits, read) = self.read_bits(count);
        bits_to_stream(bits, read)
    }

    /// Reads a value written by `Writer::write_variable_width_u8`. Reader and
    /// writer have to agree on `chunk_length` and the type.
    fn read_variable_width_u8(&mut self, chunk_length: u8) -> Result<u8> {
        read_unsigned(self, chunk_length)
    }

    fn read_variable_width_u16(&mut self, chunk_length: u8) -> Result<u16> {
        read_unsigned(self, chunk_length)
    }

    fn read_variable_width_u32(&mut self, chunk_length: u8) -> Result<u32> {
        read_unsigned(self, chunk_length)
    }

    fn read_variable_width_u64(&mut self, chunk_length: u8) -> Result<u64> {
        read_unsigned(self, chunk_length)
    }

    fn read_variable_width_s8(&mut self, chunk_length: u8, zigzag_exponent: u8) -> Result<i8> {
        read_signed(self, chunk_length, zigzag_exponent)
    }

    fn read_variable_width_s16(&mut self, chunk_length: u8, zigzag_exponent: u8) -> Result<i16> {
        read_signed(self, chunk_length, zigzag_exponent)
    }

    fn read_variable_width_s32(&mut self, chunk_length: u8, zigzag_exponent: u8) -> Result<i32> {
        read_signed(self, chunk_length, zigzag_exponent)
    }

    fn read_variable_width_s64(&mut self, chunk_length: u8, zigzag_exponent: u8) -> Result<i64> {
        read_signed(self, chunk_length, zigzag_exponent)
    }
}
