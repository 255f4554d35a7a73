use crate::geometry::{Color, Rect};

/// Describes a border drawn along one edge of a view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Border {
    /// Thickness of the border, perpendicular to the edge it sits on
    pub thickness: f32,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Border {
    pub fn new(thickness: f32, color: Color) -> Self {
        Self { thickness, color }
    }

    /// Frame of the border view in the local coordinates of a view with `bounds`
    ///
    /// Top and bottom borders span `width - offset`, left and right ones `height - offset`.
    /// Bottom and right borders sit flush against the far edge.
    pub fn frame(&self, edge: Edge, bounds: &Rect, offset: f32) -> Rect {
        let width = bounds.width();
        let height = bounds.height();
        let thickness = self.thickness;
        match edge {
            Edge::Top => Rect::new(0.0, 0.0, (width - offset).max(0.0), thickness),
            Edge::Bottom => Rect::new(
                0.0,
                height - thickness,
                (width - offset).max(0.0),
                thickness,
            ),
            Edge::Left => Rect::new(0.0, 0.0, thickness, (height - offset).max(0.0)),
            Edge::Right => Rect::new(
                width - thickness,
                0.0,
                thickness,
                (height - offset).max(0.0),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn border() -> Border {
        Border::new(2.0, Color::new(0.0, 0.0, 0.0, 1.0))
    }

    fn bounds() -> Rect {
        Rect::new(0.0, 0.0, 100.0, 40.0)
    }

    #[test]
    fn test_top() {
        assert_eq!(
            border().frame(Edge::Top, &bounds(), 0.0),
            Rect::new(0.0, 0.0, 100.0, 2.0)
        );
        assert_eq!(
            border().frame(Edge::Top, &bounds(), 10.0),
            Rect::new(0.0, 0.0, 90.0, 2.0)
        );
    }

    #[test]
    fn test_bottom() {
        assert_eq!(
            border().frame(Edge::Bottom, &bounds(), 0.0),
            Rect::new(0.0, 38.0, 100.0, 2.0)
        );
    }

    #[test]
    fn test_left() {
        assert_eq!(
            border().frame(Edge::Left, &bounds(), 5.0),
            Rect::new(0.0, 0.0, 2.0, 35.0)
        );
    }

    #[test]
    fn test_right() {
        assert_eq!(
            border().frame(Edge::Right, &bounds(), 0.0),
            Rect::new(98.0, 0.0, 2.0, 40.0)
        );
    }

    #[test]
    fn test_offset_larger_than_view() {
        let frame = border().frame(Edge::Top, &bounds(), 500.0);
        assert_eq!(frame.width(), 0.0);
    }
}
