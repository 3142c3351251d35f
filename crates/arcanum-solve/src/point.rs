//! Points and ordered point collections.

use arcanum_integers::Integer;

/// A single sample of the hidden polynomial.
///
/// `x` is the share identifier as declared by the input; `y` is the
/// fully decoded value. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Point {
    x: i64,
    y: Integer,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: i64, y: Integer) -> Self {
        Self { x, y }
    }

    /// Returns the x coordinate.
    #[must_use]
    pub fn x(&self) -> i64 {
        self.x
    }

    /// Returns the exact y value.
    #[must_use]
    pub fn y(&self) -> &Integer {
        &self.y
    }
}

/// An ordered sequence of points.
///
/// Insertion order is significant: when more points are available than
/// a reconstruction needs, the first `k` in insertion order are the
/// ones used.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Creates an empty point set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a point, preserving insertion order.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the set holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the point at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    /// Iterates over the points in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Returns the first `k` points in insertion order, or `None` when
    /// fewer than `k` are available.
    #[must_use]
    pub fn first_k(&self, k: usize) -> Option<&[Point]> {
        self.points.get(..k)
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{Point, PointSet};
    use arcanum_integers::Integer;

    fn sample() -> PointSet {
        (1..=5)
            .map(|x| Point::new(x, Integer::new(x * x)))
            .collect()
    }

    #[test]
    fn preserves_insertion_order() {
        let set = sample();
        let xs: Vec<i64> = set.iter().map(Point::x).collect();
        assert_eq!(xs, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn first_k_truncates_or_refuses() {
        let set = sample();
        assert_eq!(set.first_k(3).map(<[Point]>::len), Some(3));
        assert_eq!(set.first_k(5).map(<[Point]>::len), Some(5));
        assert!(set.first_k(6).is_none());
    }
}
