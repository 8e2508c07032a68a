use crate::error::RectError;

/// Labeled form of a two-component position.
///
/// Anchor setters on [`Rect`](super::Rect) take `impl Into<Point>`, so a
/// position can be passed either as a plain `(x, y)` tuple or as a `Point`
/// with the fields spelled out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<[i32; 2]> for Point {
    fn from([x, y]: [i32; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (i32, i32) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}

impl TryFrom<&[i32]> for Point {
    type Error = RectError;

    fn try_from(values: &[i32]) -> Result<Self, Self::Error> {
        match values {
            &[x, y] => Ok(Self { x, y }),
            _ => Err(RectError::InvalidPair(values.len())),
        }
    }
}

/// Labeled form of a width/height pair, accepted when writing a rect's
/// `size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub w: i32,
    pub h: i32,
}

impl Size {
    pub fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }
}

impl From<(i32, i32)> for Size {
    fn from((w, h): (i32, i32)) -> Self {
        Self { w, h }
    }
}

impl From<[i32; 2]> for Size {
    fn from([w, h]: [i32; 2]) -> Self {
        Self { w, h }
    }
}

impl From<Size> for (i32, i32) {
    fn from(size: Size) -> Self {
        (size.w, size.h)
    }
}

impl TryFrom<&[i32]> for Size {
    type Error = RectError;

    fn try_from(values: &[i32]) -> Result<Self, Self::Error> {
        match values {
            &[w, h] => Ok(Self { w, h }),
            _ => Err(RectError::InvalidPair(values.len())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_from_tuple_and_array() {
        assert_eq!(Point::from((3, -7)), Point::new(3, -7));
        assert_eq!(Point::from([3, -7]), Point::new(3, -7));

        let pair: (i32, i32) = Point::new(3, -7).into();
        assert_eq!(pair, (3, -7));
    }

    #[test]
    fn test_size_from_tuple_and_array() {
        assert_eq!(Size::from((100, 50)), Size::new(100, 50));
        assert_eq!(Size::from([100, 50]), Size::new(100, 50));

        let pair: (i32, i32) = Size::new(100, 50).into();
        assert_eq!(pair, (100, 50));
    }

    #[test]
    fn test_slice_conversion() {
        let values = [1, 2];
        assert_eq!(Point::try_from(&values[..]).unwrap(), Point::new(1, 2));
        assert_eq!(Size::try_from(&values[..]).unwrap(), Size::new(1, 2));
    }

    #[test]
    fn test_slice_wrong_length() {
        let values = [1, 2, 3];
        assert!(matches!(
            Point::try_from(&values[..]),
            Err(RectError::InvalidPair(3))
        ));
        assert!(matches!(
            Size::try_from(&values[..]),
            Err(RectError::InvalidPair(3))
        ));
        assert!(matches!(
            Point::try_from(&values[..1]),
            Err(RectError::InvalidPair(1))
        ));
    }
}
