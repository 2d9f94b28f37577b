#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

// helper methods
impl Rect {
    pub fn width(&self) -> u32 {
        self.max_x - self.min_x
    }
    pub fn height(&self) -> u32 {
        self.max_y - self.min_y
    }
    pub fn contains_row(&self, y: i32) -> bool {
        y >= self.min_y as i32 && y < self.max_y as i32
    }
}

/// Cut a `width` x `height` area into horizontal strips of whole rows.
///
/// Strip heights differ by at most one, the taller ones come first.
pub fn split_rows(width: usize, height: usize, parts: usize) -> Vec<Rect> {
    let parts = parts.clamp(1, height.max(1));
    let base = height / parts;
    let extra = height % parts;

    let mut rects = Vec::with_capacity(parts);
    let mut min_y = 0;
    for i in 0..parts {
        let rows = base + usize::from(i < extra);
        rects.push(Rect {
            min_x: 0,
            min_y: min_y as u32,
            max_x: width as u32,
            max_y: (min_y + rows) as u32,
        });
        min_y += rows;
    }
    rects
}

// Strips per worker so idle threads can steal rows with less geometry
pub fn default_parts(threads: usize) -> usize {
    threads.max(1) * 2
}
