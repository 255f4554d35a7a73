/// RGBA color, every component in `0.0..=1.0`
pub type Color = glam::Vec4;

/// Axis aligned rectangle, origin at the top left
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: glam::Vec2,
    pub size: glam::Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: glam::Vec2::new(x, y),
            size: glam::Vec2::new(width, height),
        }
    }

    pub fn from_size(size: glam::Vec2) -> Self {
        Self {
            origin: glam::Vec2::ZERO,
            size,
        }
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn min(&self) -> glam::Vec2 {
        self.origin
    }

    pub fn max(&self) -> glam::Vec2 {
        self.origin + self.size
    }

    /// Shrinks the rectangle by the insets, never below a zero size
    pub fn inset(&self, insets: &EdgeInsets) -> Self {
        let origin = self.origin + glam::Vec2::new(insets.leading, insets.top);
        let size = self.size
            - glam::Vec2::new(
                insets.leading + insets.trailing,
                insets.top + insets.bottom,
            );
        Self {
            origin,
            size: size.max(glam::Vec2::ZERO),
        }
    }
}

/// Distances kept between a view and each edge of its container
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeInsets {
    pub leading: f32,
    pub trailing: f32,
    pub top: f32,
    pub bottom: f32,
}

impl EdgeInsets {
    pub fn uniform(inset: f32) -> Self {
        Self {
            leading: inset,
            trailing: inset,
            top: inset,
            bottom: inset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inset() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        let insets = EdgeInsets {
            leading: 5.0,
            trailing: 15.0,
            top: 2.0,
            bottom: 8.0,
        };
        assert_eq!(rect.inset(&insets), Rect::new(15.0, 22.0, 80.0, 40.0));
    }

    #[test]
    fn test_inset_clamps_to_zero() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let inset = rect.inset(&EdgeInsets::uniform(20.0));
        assert_eq!(inset.size, glam::Vec2::ZERO);
        assert_eq!(inset.origin, glam::Vec2::new(20.0, 20.0));
    }

    #[test]
    fn test_extents() {
        let rect = Rect::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(rect.min(), glam::Vec2::new(1.0, 2.0));
        assert_eq!(rect.max(), glam::Vec2::new(4.0, 6.0));
    }
}
