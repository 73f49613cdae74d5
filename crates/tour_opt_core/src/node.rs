use std::fmt;

/// A single TSP node.
/// `x`/`y` are planar coordinates straight from the instance file.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node {
    pub x: f64,
    pub y: f64,
}

impl Node {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// TSPLIB EUC_2D distance: planar Euclidean distance rounded to the
    /// nearest integer, half away from zero (`f64::round`). Always an
    /// integer-valued, non-negative f64.
    pub fn dist(self, rhs: &Self) -> f64 {
        let dx = self.x - rhs.x;
        let dy = self.y - rhs.y;
        (dx * dx + dy * dy).sqrt().round()
    }

    pub(crate) fn is_valid(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut b1 = ryu::Buffer::new();
        let mut b2 = ryu::Buffer::new();
        write!(f, "{} {}", b1.format(self.x), b2.format(self.y))
    }
}

#[cfg(test)]
mod tests {
    use super::Node;

    #[test]
    fn dist_rounds_to_nearest_integer() {
        // sqrt(2) ~= 1.414 rounds down, sqrt(8) ~= 2.828 rounds up
        let origin = Node::new(0.0, 0.0);
        assert_eq!(origin.dist(&Node::new(1.0, 1.0)), 1.0);
        assert_eq!(origin.dist(&Node::new(2.0, 2.0)), 3.0);
    }

    #[test]
    fn dist_rounds_halves_away_from_zero() {
        let a = Node::new(0.0, 0.0);
        let b = Node::new(2.5, 0.0);
        assert_eq!(a.dist(&b), 3.0);
    }

    #[test]
    fn dist_is_symmetric_and_zero_for_same_point() {
        let a = Node::new(3.0, 7.0);
        let b = Node::new(-4.5, 12.25);
        assert_eq!(a.dist(&b), b.dist(&a));
        assert_eq!(a.dist(&a), 0.0);
    }

    #[test]
    fn non_finite_coordinates_are_rejected() {
        assert!(Node::new(1.0, 2.0).is_valid());
        assert!(!Node::new(f64::NAN, 0.0).is_valid());
        assert!(!Node::new(0.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn display_formats_as_x_y() {
        assert_eq!(Node::new(1.5, -2.25).to_string(), "1.5 -2.25");
    }
}
