//! Functions and operators for registration with a host engine.
//!
//! Each free function here is one of the named entry points a host needs to support the color
//! type: input and output, send and receive, the six comparison operators, the btree comparison
//! function, and the distance operator.
//!
//! ```
//! use pgcolor::operator;
//!
//! let a = operator::parse("(1,2,3)").unwrap();
//! let b = operator::decode(&[1, 2, 4]).unwrap();
//! assert!(operator::lt(&a, &b));
//! assert_eq!(-1, operator::cmp(&a, &b));
//! assert_eq!("(1,2,4)", operator::format(&b));
//! ```
//!
//! [Operator] describes the comparison operators themselves:
//!
//! ```
//! use pgcolor::operator::Operator;
//! assert_eq!("<=", Operator::Le.symbol());
//! assert_eq!(Operator::Ge, Operator::Le.commutator());
//! assert_eq!(Operator::Gt, Operator::Le.negator());
//! ```

use crate::{Color, Result, binary::WIRE_LENGTH};
use std::fmt;

/// Parses a color from its text form.
pub fn parse(s: &str) -> Result<Color> {
    s.parse()
}

/// Formats a color in its canonical text form.
pub fn format(color: &Color) -> String {
    color.to_string()
}

/// Encodes a color into its wire form.
pub fn encode(color: &Color) -> [u8; WIRE_LENGTH] {
    color.encode()
}

/// Decodes a color from its wire form.
pub fn decode(bytes: &[u8]) -> Result<Color> {
    Color::decode(bytes)
}

/// Are these colors equal?
pub fn eq(a: &Color, b: &Color) -> bool {
    a == b
}

/// Are these colors different?
pub fn ne(a: &Color, b: &Color) -> bool {
    a != b
}

/// Three-way comparison, returning -1, 0, or 1.
pub fn cmp(a: &Color, b: &Color) -> i32 {
    a.compare(b)
}

/// Is `a` less than `b`?
pub fn lt(a: &Color, b: &Color) -> bool {
    a < b
}

/// Is `a` less than or equal to `b`?
pub fn le(a: &Color, b: &Color) -> bool {
    a <= b
}

/// Is `a` greater than `b`?
pub fn gt(a: &Color, b: &Color) -> bool {
    a > b
}

/// Is `a` greater than or equal to `b`?
pub fn ge(a: &Color, b: &Color) -> bool {
    a >= b
}

/// Euclidean distance between two colors.
pub fn distance(a: &Color, b: &Color) -> f64 {
    a.distance(b)
}

/// A comparison operator over colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Operator {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl Operator {
    /// Every comparison operator.
    pub const ALL: [Operator; 6] = [
        Operator::Eq,
        Operator::Ne,
        Operator::Lt,
        Operator::Le,
        Operator::Gt,
        Operator::Ge,
    ];

    /// Returns the operator's symbol.
    ///
    /// # Examples
    ///
    /// ```
    /// use pgcolor::operator::Operator;
    /// assert_eq!("<>", Operator::Ne.symbol());
    /// ```
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Ne => "<>",
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
        }
    }

    /// Returns the name of the function that implements this operator.
    ///
    /// # Examples
    ///
    /// ```
    /// use pgcolor::operator::Operator;
    /// assert_eq!("color_lt", Operator::Lt.function_name());
    /// ```
    pub fn function_name(&self) -> &'static str {
        match self {
            Operator::Eq => "color_eq",
            Operator::Ne => "color_ne",
            Operator::Lt => "color_lt",
            Operator::Le => "color_le",
            Operator::Gt => "color_gt",
            Operator::Ge => "color_ge",
        }
    }

    /// Returns the operator that gives the same result with its arguments swapped.
    pub fn commutator(&self) -> Operator {
        match self {
            Operator::Eq => Operator::Eq,
            Operator::Ne => Operator::Ne,
            Operator::Lt => Operator::Gt,
            Operator::Le => Operator::Ge,
            Operator::Gt => Operator::Lt,
            Operator::Ge => Operator::Le,
        }
    }

    /// Returns the operator that gives the opposite result for the same arguments.
    pub fn negator(&self) -> Operator {
        match self {
            Operator::Eq => Operator::Ne,
            Operator::Ne => Operator::Eq,
            Operator::Lt => Operator::Ge,
            Operator::Le => Operator::Gt,
            Operator::Gt => Operator::Le,
            Operator::Ge => Operator::Lt,
        }
    }

    /// Applies this operator.
    ///
    /// # Examples
    ///
    /// ```
    /// use pgcolor::{Color, operator::Operator};
    /// let a = Color::new(0, 0, 1);
    /// let b = Color::new(0, 1, 0);
    /// assert!(Operator::Lt.evaluate(&a, &b));
    /// assert!(!Operator::Eq.evaluate(&a, &b));
    /// ```
    pub fn evaluate(&self, a: &Color, b: &Color) -> bool {
        match self {
            Operator::Eq => eq(a, b),
            Operator::Ne => ne(a, b),
            Operator::Lt => lt(a, b),
            Operator::Le => le(a, b),
            Operator::Gt => gt(a, b),
            Operator::Ge => ge(a, b),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
