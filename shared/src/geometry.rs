/// the size of the terminal the game is played in, in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub cols: i32,
    pub lines: i32,
}

impl Bounds {
    pub fn new(cols: u16, lines: u16) -> Self {
        Self {
            cols: cols as i32,
            lines: lines as i32,
        }
    }
}

/// an axis-aligned rectangle of terminal cells. `x` is the column and `y` the row of its top-left
/// corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// pulls the rectangle back inside `bounds`. if the terminal is smaller than the rectangle the
    /// origin is pinned to the top-left corner.
    pub fn clamp_to(&mut self, bounds: Bounds) {
        self.x = self.x.min(bounds.cols - self.width).max(0);
        self.y = self.y.min(bounds.lines - self.height).max(0);
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use crate::geometry::{Bounds, Rect};

    #[test]
    fn clamp_inside_is_noop() {
        let mut rect = Rect::new(3, 4, 2, 10);
        rect.clamp_to(Bounds::new(80, 24));
        assert_eq!(rect, Rect::new(3, 4, 2, 10));
    }

    #[test]
    fn clamp_pulls_back_from_every_edge() {
        let bounds = Bounds::new(80, 24);
        let mut rect = Rect::new(-5, -1, 3, 2);
        rect.clamp_to(bounds);
        assert_eq!((rect.x, rect.y), (0, 0));
        let mut rect = Rect::new(79, 23, 3, 2);
        rect.clamp_to(bounds);
        assert_eq!((rect.x, rect.y), (77, 22));
        assert_eq!((rect.right(), rect.bottom()), (80, 24));
    }

    #[test]
    fn clamp_in_tiny_terminal_pins_origin() {
        let mut rect = Rect::new(4, 4, 2, 10);
        rect.clamp_to(Bounds::new(1, 5));
        assert_eq!((rect.x, rect.y), (0, 0));
    }
}
