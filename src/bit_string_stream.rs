//! Streams of `'0'` and `'1'` characters, in the order the bits are written.
//! Slow, but handy for stating exact bit patterns.

pub use crate::stream::{Reader, Writer};

use crate::bit_repr::{bits_to_stream, pad_to_word, stream_to_bits, stream_to_buffer};

pub struct StringWriter {
    pub string: String,
}

pub struct StringReader {
    pub string: String,
    pub position: usize,
}

impl StringWriter {
    pub fn new() -> Self {
        StringWriter {
            string: String::new(),
        }
    }
}

impl Default for StringWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl StringReader {
    /// Panics if `string` holds anything but `'0'` and `'1'`.
    pub fn new(string: String) -> Self {
        assert!(
            string.bytes().all(|c| c == b'0' || c == b'1'),
            "stream may only contain '0' and '1'"
        );
        StringReader {
            string: string,
            position: 0,
        }
    }
}

impl Writer for StringWriter {
    fn write_bits(&mut self, bits: u64, count: u8) {
        self.string.push_str(&bits_to_stream(bits, count));
    }

    fn bits_written(&self) -> usize {
        self.string.len()
    }

    fn to_bytes(&self) -> Vec<u8> {
        stream_to_buffer(&pad_to_word(self.string.clone(), 8))
    }
}

impl Reader for StringReader {
    fn read_bits(&mut self, count: u8) -> (u64, u8) {
        assert!(count <= 64, "can't read {} bits at once", count);
        let start_position = self.position;
        let end_position = self.string.len().min(start_position + count as usize);
        self.position = end_position;

        let bits = stream_to_bits(&self.string[start_position..end_position]);
        (bits, (end_position - start_position) as u8)
    }

    fn reached_end(&self) -> bool {
        self.position >= self.string.len()
    }

    fn only_zeroes_left(&self) -> bool {
        self.string[self.position..].bytes().all(|c| c == b'0')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec_stream::{VecReader, VecWriter};

    #[test]
    fn writes_left_to_right() {
        let mut w = StringWriter::new();
        w.write_bits(0b110, 3); assert_eq!(w.string, "011");
        w.write_bits(0, 0); assert_eq!(w.string, "011");
        w.write_stream("1001"); assert_eq!(w.string, "0111001");
        w.write_bits(u64::MAX, 2); assert_eq!(w.string, "011100111");
        assert_eq!(w.bits_written(), 9);
        assert_eq!(w.byte_len(), 2);
        assert_eq!(w.to_bytes(), vec![0b1100_1110, 0b1]);
    }

    #[test]
    fn same_bytes_as_vec_writer() {
        let mut s = StringWriter::new();
        let mut v = VecWriter::new();
        for (i, &count) in [1u8, 7, 64, 13, 0, 33, 5].iter().enumerate() {
            let bits = 0x9e37_79b9_7f4a_7c15u64.rotate_left(i as u32 * 11);
            s.write_bits(bits, count);
            v.write_bits(bits, count);
        }
        assert_eq!(s.bits_written(), v.bits_written());
        assert_eq!(s.to_bytes(), v.to_bytes());
        assert_eq!(pad_to_word(s.string.clone(), 64), v.stream_padded64());
    }

    #[test]
    fn reads_left_to_right() {
        let mut r = StringReader::new("0111001".to_string());
        assert_eq!(r.read_bits(3), (0b110, 3));
        assert_eq!(r.read_stream(2), "10");
        assert!(!r.only_zeroes_left());
        assert_eq!(r.read_bits(10), (0b10, 2));
        assert!(r.reached_end());
        assert_eq!(r.read_bits(10), (0, 0));
    }

    #[test]
    fn exact_soft_end() {
        let mut r = StringReader::new("1000".to_string());
        assert!(!r.only_zeroes_left());
        r.read_bits(1);
        assert!(r.only_zeroes_left());
        assert!(!r.reached_end());
    }

    #[test]
    fn reads_vec_writer_output() {
        let mut w = VecWriter::new();
        w.write_stream("1100101");
        w.write_variable_width_s16(-300, 6, 3);

        let mut expected = StringWriter::new();
        expected.write_stream("1100101");
        expected.write_variable_width_s16(-300, 6, 3);

        let mut r = VecReader::from_byte_copy(&w.to_bytes());
        let read = r.read_stream(expected.string.len() as u8);
        assert_eq!(read, expected.string);
        assert!(r.only_zeroes_left());
    }

    #[test]
    #[should_panic]
    fn rejects_non_binary() {
        StringReader::new("01x".to_string());
    }
}
