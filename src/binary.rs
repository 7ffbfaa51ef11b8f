//! The three byte wire form.
//!
//! A color is sent as exactly [WIRE_LENGTH] bytes, one unsigned byte per channel in red, green,
//! blue order. Every three byte sequence is a valid color.

use crate::{Color, Error, Result};
use byteorder::{ReadBytesExt, WriteBytesExt};
use log::{Level, log};
use std::io::{ErrorKind, Read, Write};

/// The number of bytes in the wire form of a color.
pub const WIRE_LENGTH: usize = 3;

impl Color {
    /// Encodes this color into its wire form.
    ///
    /// # Examples
    ///
    /// ```
    /// use pgcolor::Color;
    /// assert_eq!([1, 2, 3], Color::new(1, 2, 3).encode());
    /// ```
    pub fn encode(&self) -> [u8; WIRE_LENGTH] {
        self.channels()
    }

    /// Decodes a color from the front of a buffer.
    ///
    /// Bytes after the first three are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use pgcolor::Color;
    /// assert_eq!(Color::new(1, 2, 3), Color::decode(&[1, 2, 3]).unwrap());
    /// assert!(Color::decode(&[1, 2]).is_err());
    /// ```
    pub fn decode(bytes: &[u8]) -> Result<Color> {
        match bytes {
            [red, green, blue, rest @ ..] => {
                if !rest.is_empty() {
                    log!(
                        Level::Debug,
                        "ignoring {} bytes after the color wire form",
                        rest.len()
                    );
                }
                Ok(Color::new(*red, *green, *blue))
            }
            _ => Err(Error::TruncatedBuffer {
                needed: WIRE_LENGTH,
                available: bytes.len(),
            }),
        }
    }

    /// Reads a color from a `Read`.
    ///
    /// A read that runs out of bytes is a truncated buffer error.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io::Cursor;
    /// use pgcolor::Color;
    /// let mut cursor = Cursor::new(vec![1, 2, 3, 4, 5, 6]);
    /// assert_eq!(Color::new(1, 2, 3), Color::read_from(&mut cursor).unwrap());
    /// assert_eq!(Color::new(4, 5, 6), Color::read_from(&mut cursor).unwrap());
    /// assert!(Color::read_from(&mut cursor).is_err());
    /// ```
    pub fn read_from<R: Read>(mut read: R) -> Result<Color> {
        let mut available = 0;
        let mut channel = || match read.read_u8() {
            Ok(byte) => {
                available += 1;
                Ok(byte)
            }
            Err(err) if err.kind() == ErrorKind::UnexpectedEof => Err(Error::TruncatedBuffer {
                needed: WIRE_LENGTH,
                available,
            }),
            Err(err) => Err(Error::from(err)),
        };
        let red = channel()?;
        let green = channel()?;
        let blue = channel()?;
        Ok(Color::new(red, green, blue))
    }

    /// Writes this color to a `Write`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pgcolor::Color;
    /// let mut buf = Vec::new();
    /// Color::new(1, 2, 3).write_to(&mut buf).unwrap();
    /// assert_eq!(vec![1, 2, 3], buf);
    /// ```
    pub fn write_to<W: Write>(&self, mut write: W) -> Result<()> {
        write.write_u8(self.red)?;
        write.write_u8(self.green)?;
        write.write_u8(self.blue)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn channel_order() {
        assert_eq!([0xff, 0x00, 0x80], Color::new(255, 0, 128).encode());
    }

    #[test]
    fn decode_short_buffer() {
        let cases: [&[u8]; 3] = [&[], &[0x01], &[0x01, 0x02]];
        for bytes in cases {
            match Color::decode(bytes) {
                Err(Error::TruncatedBuffer { needed, available }) => {
                    assert_eq!(WIRE_LENGTH, needed);
                    assert_eq!(bytes.len(), available);
                }
                other => panic!("expected a truncated buffer error, got {:?}", other),
            }
        }
    }

    #[test]
    fn decode_ignores_trailing_bytes() {
        assert_eq!(Color::new(1, 2, 3), Color::decode(&[1, 2, 3, 4]).unwrap());
    }

    #[test]
    fn read_short_stream() {
        match Color::read_from(Cursor::new(vec![9, 8])) {
            Err(Error::TruncatedBuffer { needed, available }) => {
                assert_eq!(3, needed);
                assert_eq!(2, available);
            }
            other => panic!("expected a truncated buffer error, got {:?}", other),
        }
    }

    #[test]
    fn write_then_read() {
        let color = Color::new(12, 34, 56);
        let mut cursor = Cursor::new(Vec::new());
        color.write_to(&mut cursor).unwrap();
        assert_eq!(color.encode().to_vec(), *cursor.get_ref());
        cursor.set_position(0);
        assert_eq!(color, Color::read_from(cursor).unwrap());
    }
}
