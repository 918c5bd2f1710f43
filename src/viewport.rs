/// The scrollable window a document is viewed through. Offsets are in
/// document space and always clamped so the viewport never scrolls past
/// the content.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
    pub scroll_x: u16,
    pub scroll_y: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            scroll_x: 0,
            scroll_y: 0,
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Set the scroll offset, clamped against the document size.
    pub fn scroll_to(&mut self, x: u16, y: u16, content: (u16, u16)) {
        self.scroll_x = x.min(self.max_scroll_x(content));
        self.scroll_y = y.min(self.max_scroll_y(content));
    }

    /// Scroll by a delta amount. Returns true if the offset changed.
    pub fn scroll_by(&mut self, dx: i16, dy: i16, content: (u16, u16)) -> bool {
        let new_x = (self.scroll_x as i32 + dx as i32)
            .clamp(0, self.max_scroll_x(content) as i32) as u16;
        let new_y = (self.scroll_y as i32 + dy as i32)
            .clamp(0, self.max_scroll_y(content) as i32) as u16;

        if new_x != self.scroll_x || new_y != self.scroll_y {
            self.scroll_x = new_x;
            self.scroll_y = new_y;
            true
        } else {
            false
        }
    }

    fn max_scroll_x(&self, content: (u16, u16)) -> u16 {
        content.0.saturating_sub(self.width)
    }

    fn max_scroll_y(&self, content: (u16, u16)) -> u16 {
        content.1.saturating_sub(self.height)
    }
}
