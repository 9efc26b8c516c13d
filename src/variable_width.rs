//! Chunked variable-width integers.
//!
//! A value is cut into `chunk_length` bit chunks, lowest first. Every chunk is
//! followed by a signal bit, 1 if more chunks follow and 0 otherwise. The
//! stream is not self-describing: the reader must use the same chunk length,
//! zigzag exponent and type as the writer. Because the reader knows the type's
//! width, the signal bit is left out once that many bits were written, and the
//! last chunk is cut short if the width is not a multiple of `chunk_length`.

use log::debug;

use crate::error::{Error, Result};
use crate::stream::{Reader, Writer};
use crate::zigzag;

/// Unsigned types that can be written with a variable width.
pub trait Unsigned: Copy {
    const BITS: u8;

    fn to_u64(self) -> u64;

    /// Only called with values that fit in `Self::BITS` bits.
    fn from_u64(val: u64) -> Self;
}

/// Signed types that can be written with a variable width.
pub trait Signed: Copy {
    const BITS: u8;

    fn to_i64(self) -> i64;

    /// Only called with values in range of `Self`.
    fn from_i64(val: i64) -> Self;
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {$(
        impl Unsigned for $t {
            const BITS: u8 = <$t>::BITS as u8;

            fn to_u64(self) -> u64 {
                self as u64
            }

            fn from_u64(val: u64) -> Self {
                val as $t
            }
        }
    )*};
}

macro_rules! impl_signed {
    ($($t:ty),*) => {$(
        impl Signed for $t {
            const BITS: u8 = <$t>::BITS as u8;

            fn to_i64(self) -> i64 {
                self as i64
            }

            fn from_i64(val: i64) -> Self {
                val as $t
            }
        }
    )*};
}

impl_unsigned!(u8, u16, u32, u64);
impl_signed!(i8, i16, i32, i64);

pub fn write_unsigned<W, T>(writer: &mut W, val: T, chunk_length: u8)
where
    W: Writer + ?Sized,
    T: Unsigned,
{
    write_payload(writer, val.to_u64(), chunk_length, T::BITS);
}

pub fn write_signed<W, T>(writer: &mut W, val: T, chunk_length: u8, zigzag_exponent: u8)
where
    W: Writer + ?Sized,
    T: Signed,
{
    let exponent = zigzag::effective_exponent(zigzag_exponent, T::BITS);
    write_payload(writer, zigzag::encode_block(val.to_i64(), exponent), chunk_length, T::BITS);
}

pub fn read_unsigned<R, T>(reader: &mut R, chunk_length: u8) -> Result<T>
where
    R: Reader + ?Sized,
    T: Unsigned,
{
    read_payload(reader, chunk_length, T::BITS).map(T::from_u64)
}

pub fn read_signed<R, T>(reader: &mut R, chunk_length: u8, zigzag_exponent: u8) -> Result<T>
where
    R: Reader + ?Sized,
    T: Signed,
{
    let exponent = zigzag::effective_exponent(zigzag_exponent, T::BITS);
    let code = read_payload(reader, chunk_length, T::BITS)?;
    Ok(T::from_i64(zigzag::decode_block(code, exponent)))
}

/// Writes `val`, which must fit in `max_payload` bits.
fn write_payload<W: Writer + ?Sized>(writer: &mut W, mut val: u64, chunk_length: u8, max_payload: u8) {
    assert!(chunk_length > 0, "chunk length must not be zero");
    assert!(
        chunk_length <= max_payload,
        "chunk length {} exceeds the {} bit payload",
        chunk_length,
        max_payload
    );
    debug_assert!(max_payload == 64 || val >> max_payload == 0);

    let mut payload_written = 0;
    while payload_written < max_payload {
        if payload_written + chunk_length >= max_payload {
            // last chunk, the reader stops here without a signal bit
            writer.write_bits(val, max_payload - payload_written);
            break;
        }

        writer.write_bits(val, chunk_length);
        payload_written += chunk_length;
        val >>= chunk_length;

        let more = val != 0;
        writer.write_bits(more as u64, 1);
        if !more {
            break;
        }
    }
}

fn read_payload<R: Reader + ?Sized>(reader: &mut R, chunk_length: u8, max_payload: u8) -> Result<u64> {
    assert!(chunk_length > 0, "chunk length must not be zero");
    assert!(
        chunk_length <= max_payload,
        "chunk length {} exceeds the {} bit payload",
        chunk_length,
        max_payload
    );

    let premature_end = |payload_read| {
        debug!(
            "variable width value ended after {} of {} payload bits",
            payload_read, max_payload
        );
        Error::PrematureEnd { payload_read, max_payload }
    };

    let mut val = 0;
    let mut payload_read = 0;
    while payload_read < max_payload {
        let to_read = chunk_length.min(max_payload - payload_read);
        let (bits, read) = reader.read_bits(to_read);
        if read != to_read {
            return Err(premature_end(payload_read));
        }
        val |= bits << payload_read;
        payload_read += to_read;

        if payload_read == max_payload {
            break;
        }

        match reader.read_bits(1) {
            (1, 1) => {}
            (0, 1) => break,
            _ => return Err(premature_end(payload_read)),
        }
    }
    Ok(val)
}
