//! Conversions between the three ways this crate looks at bits.
//!
//! * bits: a `u64` (or smaller word) where the first bit is the lowest one.
//! * stream: a `String` of `'0'` and `'1'` read left to right, so the first bit
//!   is at the front. Note that this is the reverse of `format!("{:b}", x)`.
//! * buffer: a slice of words, filled from the lowest bit of the first word.

/// Unsigned integer used as a unit of storage.
pub trait Word: Copy {
    const BITS: usize;

    fn to_u64(self) -> u64;

    /// Keeps the lowest `Self::BITS` bits of `bits`.
    fn from_u64(bits: u64) -> Self;
}

macro_rules! impl_word {
    ($($t:ty),*) => {$(
        impl Word for $t {
            const BITS: usize = <$t>::BITS as usize;

            fn to_u64(self) -> u64 {
                self as u64
            }

            fn from_u64(bits: u64) -> Self {
                bits as $t
            }
        }
    )*};
}

impl_word!(u8, u16, u32, u64);

/// Number of `word_bits` sized words needed to hold `num_bits`, e.g. with
/// `word_bits == 8` the number of bytes.
pub fn num_bits_to_num_words(num_bits: usize, word_bits: usize) -> usize {
    (num_bits + (word_bits - 1)) / word_bits
}

/// Returns `bits` with everything but the lowest `num_bits` set to zero.
pub fn lower_bits(bits: u64, num_bits: u8) -> u64 {
    assert!(num_bits <= 64, "can't keep {} bits of a u64", num_bits);
    if num_bits == 64 {
        bits
    } else {
        bits & ((1u64 << num_bits) - 1)
    }
}

/// Appends `'0'` to `stream` until its length is a multiple of `word_bits`.
pub fn pad_to_word(mut stream: String, word_bits: usize) -> String {
    let tail = stream.len() % word_bits;
    if tail != 0 {
        stream.extend(std::iter::repeat('0').take(word_bits - tail));
    }
    stream
}

/// The first `num_bits` of `bits` as a stream.
pub fn bits_to_stream(bits: u64, num_bits: u8) -> String {
    assert!(num_bits <= 64);
    (0..num_bits)
        .map(|i| if (bits >> i) & 1 == 1 { '1' } else { '0' })
        .collect()
}

/// Packs a stream of at most 64 bits into a `u64`. "01" becomes 0b10.
pub fn stream_to_bits(stream: &str) -> u64 {
    assert!(stream.len() <= 64, "stream of {} bits doesn't fit a u64", stream.len());
    stream.bytes().enumerate().fold(0u64, |bits, (i, c)| match c {
        b'0' => bits,
        b'1' => bits | (1u64 << i),
        _ => panic!("stream may only contain '0' and '1', found {:?}", c as char),
    })
}

pub fn buffer_to_stream<T: Word>(buffer: &[T]) -> String {
    buffer
        .iter()
        .map(|word| bits_to_stream(word.to_u64(), T::BITS as u8))
        .collect()
}

/// Splits `stream` into words. A trailing partial word is filled from its
/// lowest bit, the rest stays zero.
pub fn stream_to_buffer<T: Word>(stream: &str) -> Vec<T> {
    assert!(stream.is_ascii(), "stream may only contain '0' and '1'");
    stream
        .as_bytes()
        .chunks(T::BITS)
        .map(|chunk| {
            // chunks of an ascii string are valid utf8
            let chunk = std::str::from_utf8(chunk).unwrap_or_default();
            T::from_u64(stream_to_bits(chunk))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_for_bits() {
        assert_eq!(num_bits_to_num_words(0, 8), 0);
        assert_eq!(num_bits_to_num_words(1, 8), 1);
        assert_eq!(num_bits_to_num_words(8, 8), 1);
        assert_eq!(num_bits_to_num_words(9, 8), 2);
        assert_eq!(num_bits_to_num_words(64, 64), 1);
        assert_eq!(num_bits_to_num_words(65, 64), 2);
    }

    #[test]
    fn lower_bits_full_width() {
        assert_eq!(lower_bits(u64::MAX, 64), u64::MAX);
        assert_eq!(lower_bits(u64::MAX, 0), 0);
        assert_eq!(lower_bits(0b1011_0110, 4), 0b0110);
        assert_eq!(lower_bits(u64::MAX, 63), u64::MAX >> 1);
    }

    #[test]
    fn padding() {
        assert_eq!(pad_to_word(String::new(), 8), "");
        assert_eq!(pad_to_word("1".to_string(), 8), "10000000");
        assert_eq!(pad_to_word("10101010".to_string(), 8), "10101010");
        assert_eq!(pad_to_word("101010101".to_string(), 4), "101010101000");
    }

    #[test]
    fn first_bit_is_lowest() {
        assert_eq!(stream_to_bits("01"), 0b10);
        assert_eq!(stream_to_bits("1"), 1);
        assert_eq!(stream_to_bits(""), 0);
        assert_eq!(bits_to_stream(0b10, 2), "01");
        assert_eq!(bits_to_stream(0b1101, 6), "101100");
        assert_eq!(bits_to_stream(u64::MAX, 0), "");
        assert_eq!(stream_to_bits(&bits_to_stream(u64::MAX, 64)), u64::MAX);
    }

    #[test]
    #[should_panic]
    fn stream_rejects_other_chars() {
        stream_to_bits("0120");
    }

    #[test]
    fn buffers() {
        assert_eq!(buffer_to_stream(&[1u8, 0x80]), "1000000000000001");
        assert_eq!(stream_to_buffer::<u8>("1000000000000001"), vec![1u8, 0x80]);
        assert_eq!(stream_to_buffer::<u8>("1000000011"), vec![1u8, 3]);
        assert_eq!(stream_to_buffer::<u16>("0000000000000000111"), vec![0u16, 7]);

        let words = vec![0x0123_4567_89ab_cdefu64, 42];
        assert_eq!(stream_to_buffer::<u64>(&buffer_to_stream(&words)), words);
    }
}
