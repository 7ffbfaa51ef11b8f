use std::cmp::Ordering;

/// A RGB color value.
///
/// Colors are ordered channel by channel: red first, then green, then blue. This is the order
/// used when the type is an index or sort key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Color {
    /// Red channel.
    pub red: u8,

    /// Green channel.
    pub green: u8,

    /// Blue channel.
    pub blue: u8,
}

impl Color {
    /// Creates a new color.
    ///
    /// # Examples
    ///
    /// ```
    /// use pgcolor::Color;
    /// let color = Color::new(1, 2, 3);
    /// assert_eq!(1, color.red);
    /// assert_eq!(2, color.green);
    /// assert_eq!(3, color.blue);
    /// ```
    pub const fn new(red: u8, green: u8, blue: u8) -> Color {
        Color { red, green, blue }
    }

    /// Returns the channels as a `(red, green, blue)` array.
    ///
    /// # Examples
    ///
    /// ```
    /// use pgcolor::Color;
    /// assert_eq!([10, 20, 30], Color::new(10, 20, 30).channels());
    /// ```
    pub const fn channels(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// Compares two colors, returning -1, 0, or 1.
    ///
    /// This is the three-way comparison a host engine's btree support function expects, and it
    /// always agrees with [Ord].
    ///
    /// # Examples
    ///
    /// ```
    /// use pgcolor::Color;
    /// let a = Color::new(1, 2, 3);
    /// assert_eq!(0, a.compare(&a));
    /// assert_eq!(-1, a.compare(&Color::new(1, 2, 4)));
    /// assert_eq!(1, a.compare(&Color::new(0, 255, 255)));
    /// ```
    pub fn compare(&self, other: &Color) -> i32 {
        match self.cmp(other) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// Returns the euclidean distance between two colors, treating each as a point in rgb space.
    ///
    /// # Examples
    ///
    /// ```
    /// use pgcolor::Color;
    /// let black = Color::new(0, 0, 0);
    /// let red = Color::new(255, 0, 0);
    /// assert_eq!(255., black.distance(&red));
    /// assert_eq!(0., red.distance(&red));
    /// ```
    pub fn distance(&self, other: &Color) -> f64 {
        let dr = f64::from(self.red) - f64::from(other.red);
        let dg = f64::from(self.green) - f64::from(other.green);
        let db = f64::from(self.blue) - f64::from(other.blue);
        (dr * dr + dg * dg + db * db).sqrt()
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((red, green, blue): (u8, u8, u8)) -> Color {
        Color::new(red, green, blue)
    }
}

impl From<[u8; 3]> for Color {
    fn from([red, green, blue]: [u8; 3]) -> Color {
        Color::new(red, green, blue)
    }
}

impl From<Color> for [u8; 3] {
    fn from(color: Color) -> [u8; 3] {
        color.channels()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn red_has_priority() {
        assert!(Color::new(1, 0, 0) > Color::new(0, 255, 255));
        assert!(Color::new(0, 1, 0) > Color::new(0, 0, 255));
        assert!(Color::new(0, 0, 1) > Color::new(0, 0, 0));
    }

    #[test]
    fn compare_agrees_with_ord() {
        let colors = [
            Color::new(0, 0, 0),
            Color::new(0, 0, 1),
            Color::new(0, 1, 0),
            Color::new(1, 0, 0),
            Color::new(255, 255, 255),
        ];
        for a in &colors {
            for b in &colors {
                assert_eq!(a.cmp(b), a.compare(b).cmp(&0));
                assert_eq!(a == b, a.compare(b) == 0);
            }
        }
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Color::new(10, 200, 30);
        let b = Color::new(250, 0, 99);
        assert_eq!(a.distance(&b), b.distance(&a));
    }

    #[test]
    fn distance_across_all_channels() {
        let a = Color::new(0, 0, 0);
        let b = Color::new(1, 2, 2);
        assert_eq!(3., a.distance(&b));
    }

    #[test]
    fn distance_of_distinct_colors_is_positive() {
        assert!(Color::new(0, 0, 0).distance(&Color::new(0, 0, 1)) > 0.);
    }

    #[test]
    fn conversions() {
        let color = Color::from((1, 2, 3));
        assert_eq!(color, Color::from([1, 2, 3]));
        assert_eq!([1, 2, 3], <[u8; 3]>::from(color));
    }
}
