//! The `(r,g,b)` text form.
//!
//! Colors are written as three decimal channels inside parentheses, separated by commas, with no
//! whitespace anywhere:
//!
//! ```
//! use pgcolor::Color;
//! let color: Color = "(10,20,30)".parse().unwrap();
//! assert_eq!(Color::new(10, 20, 30), color);
//! assert_eq!("(10,20,30)", color.to_string());
//! ```
//!
//! Parsing stops at the first violation of the grammar and reports what was expected and the
//! byte offset where it was expected:
//!
//! ```
//! use pgcolor::{Error, text::Expected};
//! match "(1,2,3".parse::<pgcolor::Color>() {
//!     Err(Error::MalformedInput { expected, offset }) => {
//!         assert_eq!(Expected::CloseParen, expected);
//!         assert_eq!(6, offset);
//!     }
//!     _ => unreachable!(),
//! }
//! ```

use crate::{Color, Error, Result};
use log::{Level, log};
use std::fmt;
use std::str::FromStr;

/// What to do with a channel value that doesn't fit in eight bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Narrowing {
    /// Out-of-range channels are a [Expected::ChannelInRange] error.
    #[default]
    Reject,

    /// Out-of-range channels keep their low eight bits, so `256` becomes `0` and `-1` becomes
    /// `255`.
    ///
    /// Values beyond the `i64` range saturate before they are narrowed.
    Wrap,
}

/// The token or condition a parser was looking for when it failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Expected {
    /// The opening `(`.
    OpenParen,
    /// An optionally signed decimal integer.
    Integer,
    /// A `,` between channels.
    Comma,
    /// The closing `)`.
    CloseParen,
    /// Nothing at all after the closing `)`.
    EndOfInput,
    /// A channel value between 0 and 255.
    ChannelInRange,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::OpenParen => write!(f, "'('"),
            Expected::Integer => write!(f, "number"),
            Expected::Comma => write!(f, "','"),
            Expected::CloseParen => write!(f, "')'"),
            Expected::EndOfInput => write!(f, "end of input"),
            Expected::ChannelInRange => write!(f, "channel value between 0 and 255"),
        }
    }
}

/// Parses colors from text.
///
/// # Examples
///
/// ```
/// use pgcolor::{Color, text::{Narrowing, Parser}};
///
/// let parser = Parser::default();
/// assert!(parser.parse("(256,0,0)").is_err());
///
/// let parser = Parser::new(Narrowing::Wrap);
/// assert_eq!(Color::new(0, 0, 255), parser.parse("(256,0,-1)").unwrap());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Parser {
    /// How out-of-range channel values are handled.
    pub narrowing: Narrowing,
}

impl Parser {
    /// Creates a new parser with the given narrowing policy.
    ///
    /// # Examples
    ///
    /// ```
    /// use pgcolor::text::{Narrowing, Parser};
    /// let parser = Parser::new(Narrowing::Wrap);
    /// ```
    pub fn new(narrowing: Narrowing) -> Parser {
        Parser { narrowing }
    }

    /// Parses a color.
    ///
    /// # Examples
    ///
    /// ```
    /// use pgcolor::{Color, text::Parser};
    /// let color = Parser::default().parse("(1,2,3)").unwrap();
    /// assert_eq!(Color::new(1, 2, 3), color);
    /// ```
    pub fn parse(&self, s: &str) -> Result<Color> {
        self.parse_color(s).inspect_err(|err| {
            log!(Level::Debug, "rejected color {:?}: {}", s, err);
        })
    }

    fn parse_color(&self, s: &str) -> Result<Color> {
        let mut scanner = Scanner::new(s);
        scanner.expect(b'(', Expected::OpenParen)?;
        let red = self.channel(&mut scanner)?;
        scanner.expect(b',', Expected::Comma)?;
        let green = self.channel(&mut scanner)?;
        scanner.expect(b',', Expected::Comma)?;
        let blue = self.channel(&mut scanner)?;
        scanner.expect(b')', Expected::CloseParen)?;
        if scanner.peek().is_some() {
            return Err(malformed(Expected::EndOfInput, scanner.position));
        }
        Ok(Color::new(red, green, blue))
    }

    fn channel(&self, scanner: &mut Scanner<'_>) -> Result<u8> {
        let offset = scanner.position;
        let value = scanner.integer()?;
        if let Ok(channel) = u8::try_from(value) {
            return Ok(channel);
        }
        match self.narrowing {
            Narrowing::Reject => Err(malformed(Expected::ChannelInRange, offset)),
            Narrowing::Wrap => {
                let channel = value as u8;
                log!(
                    Level::Warn,
                    "channel value {} at position {} wrapped to {}",
                    value,
                    offset,
                    channel
                );
                Ok(channel)
            }
        }
    }
}

struct Scanner<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> Scanner<'a> {
    fn new(s: &'a str) -> Scanner<'a> {
        Scanner {
            bytes: s.as_bytes(),
            position: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.position).copied()
    }

    fn expect(&mut self, byte: u8, expected: Expected) -> Result<()> {
        if self.peek() == Some(byte) {
            self.position += 1;
            Ok(())
        } else {
            Err(malformed(expected, self.position))
        }
    }

    fn integer(&mut self) -> Result<i64> {
        let start = self.position;
        let negative = match self.peek() {
            Some(b'-') => {
                self.position += 1;
                true
            }
            Some(b'+') => {
                self.position += 1;
                false
            }
            _ => false,
        };
        let digits = self.position;
        let mut value = 0i64;
        while let Some(byte @ b'0'..=b'9') = self.peek() {
            let digit = i64::from(byte - b'0');
            value = value.saturating_mul(10);
            value = if negative {
                value.saturating_sub(digit)
            } else {
                value.saturating_add(digit)
            };
            self.position += 1;
        }
        if self.position == digits {
            return Err(malformed(Expected::Integer, start));
        }
        Ok(value)
    }
}

fn malformed(expected: Expected, offset: usize) -> Error {
    Error::MalformedInput { expected, offset }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Color> {
        Parser::default().parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.red, self.green, self.blue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error_at(s: &str) -> (Expected, usize) {
        match s.parse::<Color>() {
            Err(Error::MalformedInput { expected, offset }) => (expected, offset),
            other => panic!("expected a malformed input error, got {:?}", other),
        }
    }

    #[test]
    fn parse() {
        assert_eq!(Color::new(1, 2, 3), "(1,2,3)".parse().unwrap());
        assert_eq!(Color::new(255, 0, 128), "(255,0,128)".parse().unwrap());
    }

    #[test]
    fn signs_and_leading_zeros() {
        assert_eq!(Color::new(1, 2, 0), "(+1,002,-0)".parse().unwrap());
        assert_eq!(Color::new(7, 0, 0), "(007,-0,+0)".parse().unwrap());
    }

    #[test]
    fn missing_open_paren() {
        assert_eq!((Expected::OpenParen, 0), error_at("1,2,3)"));
        assert_eq!((Expected::OpenParen, 0), error_at(""));
        assert_eq!((Expected::OpenParen, 0), error_at(" (1,2,3)"));
    }

    #[test]
    fn missing_integer() {
        assert_eq!((Expected::Integer, 1), error_at("(a,2,3)"));
        assert_eq!((Expected::Integer, 3), error_at("(1,,3)"));
        assert_eq!((Expected::Integer, 5), error_at("(1,2,)"));
        assert_eq!((Expected::Integer, 1), error_at("(-,2,3)"));
        assert_eq!((Expected::Integer, 1), error_at("( 1,2,3)"));
    }

    #[test]
    fn missing_comma() {
        assert_eq!((Expected::Comma, 2), error_at("(1;2,3)"));
        assert_eq!((Expected::Comma, 4), error_at("(1,2)"));
        assert_eq!((Expected::Comma, 2), error_at("(1 ,2,3)"));
    }

    #[test]
    fn missing_close_paren() {
        assert_eq!((Expected::CloseParen, 6), error_at("(1,2,3"));
        assert_eq!((Expected::CloseParen, 6), error_at("(1,2,3,4)"));
    }

    #[test]
    fn trailing_characters() {
        assert_eq!((Expected::EndOfInput, 7), error_at("(1,2,3)x"));
        assert_eq!((Expected::EndOfInput, 7), error_at("(1,2,3) "));
    }

    #[test]
    fn reject_out_of_range() {
        assert_eq!((Expected::ChannelInRange, 1), error_at("(256,0,0)"));
        assert_eq!((Expected::ChannelInRange, 3), error_at("(0,-1,0)"));
        assert_eq!((Expected::ChannelInRange, 5), error_at("(0,0,999)"));
    }

    #[test]
    fn wrap_out_of_range() {
        let parser = Parser::new(Narrowing::Wrap);
        assert_eq!(Color::new(0, 255, 231), parser.parse("(256,-1,999)").unwrap());
        assert_eq!(
            Color::new(255, 0, 0),
            parser.parse("(99999999999999999999,-99999999999999999999,0)").unwrap()
        );
    }

    #[test]
    fn wrap_still_rejects_malformed_input() {
        let parser = Parser::new(Narrowing::Wrap);
        assert!(parser.parse("(1,2,3)x").is_err());
        assert!(parser.parse("(x,2,3)").is_err());
    }

    #[test]
    fn format() {
        assert_eq!("(10,20,30)", Color::new(10, 20, 30).to_string());
        assert_eq!("(0,0,0)", Color::default().to_string());
        assert_eq!("(255,255,255)", Color::new(255, 255, 255).to_string());
    }

    #[test]
    fn error_message() {
        let err = "1,2,3)".parse::<Color>().unwrap_err();
        assert_eq!("expected '(' at position 0", err.to_string());
    }
}
