/// Immutable integer point.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn distance_from_origin(&self) -> f64 {
        let (x, y) = (f64::from(self.x), f64::from(self.y));
        (x * x + y * y).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_four_five() {
        assert_eq!(Point::new(3, 4).distance_from_origin(), 5.0);
    }

    #[test]
    fn origin_is_zero() {
        assert_eq!(Point::new(0, 0).distance_from_origin(), 0.0);
    }

    #[test]
    fn large_coordinates_do_not_overflow() {
        let d = Point::new(i32::MAX, i32::MAX).distance_from_origin();
        assert!(d > f64::from(i32::MAX));
    }
}
