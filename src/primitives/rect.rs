//! Rect - axis-aligned element bounds in viewport pixels
//!
//! Always read fresh from the DOM per pointer-move; layout can shift
//! between events, so bounds are never cached.

/// Element bounding box in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    pub fn from_dom(rect: &web_sys::DomRect) -> Self {
        Self {
            left: rect.left() as f32,
            top: rect.top() as f32,
            width: rect.width() as f32,
            height: rect.height() as f32,
        }
    }

    pub fn center(&self) -> (f32, f32) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Zero-area rects come from hidden or not-yet-laid-out elements
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left
            && x <= self.left + self.width
            && y >= self.top
            && y <= self.top + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_center() {
        let r = Rect::new(100.0, 100.0, 200.0, 100.0);
        assert_eq!(r.center(), (200.0, 150.0));
    }

    #[test]
    fn rect_degenerate() {
        assert!(Rect::new(0.0, 0.0, 0.0, 50.0).is_degenerate());
        assert!(Rect::new(0.0, 0.0, 50.0, 0.0).is_degenerate());
        assert!(!Rect::new(0.0, 0.0, 1.0, 1.0).is_degenerate());
    }

    #[test]
    fn rect_contains() {
        let r = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(r.contains(15.0, 15.0));
        assert!(r.contains(10.0, 30.0));
        assert!(!r.contains(31.0, 15.0));
    }
}
