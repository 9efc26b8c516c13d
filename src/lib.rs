//! Reading and writing values of arbitrary bit width.
//!
//! A producer writes fixed-width and variable-width values with a `Writer`,
//! a consumer reads them back with a `Reader` by calling the mirrored methods
//! in the same order and with the same parameters. Nothing about the layout is
//! stored in the stream itself.
//!
//! ```
//! use varbits::vec_stream::{Reader, VecReader, VecWriter, Writer};
//!
//! let mut writer = VecWriter::new();
//! writer.write_bits(0b101, 3);
//! writer.write_variable_width_s32(-1000, 5, 2);
//!
//! let mut reader = VecReader::from_byte_copy(&writer.to_bytes());
//! assert_eq!(reader.read_bits(3), (0b101, 3));
//! assert_eq!(reader.read_variable_width_s32(5, 2), Ok(-1000));
//! assert!(reader.only_zeroes_left());
//! ```

pub mod bit_repr;
pub mod bit_string_stream;
pub mod error;
pub mod stream;
pub mod variable_width;
pub mod vec_stream;
pub mod zigzag;

pub use error::{Error, Result};
pub use stream::*;
