/// State of the page-flip surface: which spread is open and at what pixel
/// size the pages are drawn.
///
/// Indices here are zero-based; the toolbar's 1-based counter is kept by the
/// flip controller, which consumes the index every flip operation returns.
/// The surface caches its pixel size from construction; [`FlipBook::resize`]
/// is the only way that cache changes, so callers must invoke it whenever the
/// layout size moves.
#[derive(Debug, Clone, Copy)]
pub struct FlipBook {
    page_count: u16,
    index: u16,
    width: f32,
    height: f32,
}

impl FlipBook {
    pub fn new(page_count: u16, width: f32, height: f32) -> Self {
        Self {
            page_count,
            index: 0,
            width,
            height,
        }
    }

    /// Pixel size each page slot is drawn at.
    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Open the spread containing `index`. Out-of-range requests are ignored;
    /// the resulting index is reported back so the page counter can follow.
    pub fn flip_to(&mut self, index: u16) -> u16 {
        if index < self.page_count {
            self.index = index;
        }
        self.index
    }

    pub fn flip_next(&mut self) -> u16 {
        if self.index + 1 < self.page_count {
            self.index += 1;
        }
        self.index
    }

    pub fn flip_prev(&mut self) -> u16 {
        self.index = self.index.saturating_sub(1);
        self.index
    }

    /// The zero-based pages of the open spread: the current page and, when one
    /// exists, its facing page.
    pub fn spread(&self) -> (u16, Option<u16>) {
        let right = (self.index + 1 < self.page_count).then(|| self.index + 1);
        (self.index, right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flips_clamp_at_boundaries() {
        let mut book = FlipBook::new(3, 400.0, 600.0);
        assert_eq!(book.flip_prev(), 0);
        assert_eq!(book.flip_next(), 1);
        assert_eq!(book.flip_next(), 2);
        assert_eq!(book.flip_next(), 2);
        assert_eq!(book.flip_prev(), 1);
    }

    #[test]
    fn flip_to_ignores_out_of_range() {
        let mut book = FlipBook::new(5, 400.0, 600.0);
        assert_eq!(book.flip_to(4), 4);
        assert_eq!(book.flip_to(5), 4);
        assert_eq!(book.flip_to(0), 0);
    }

    #[test]
    fn spread_pairs_until_the_last_page() {
        let mut book = FlipBook::new(3, 400.0, 600.0);
        assert_eq!(book.spread(), (0, Some(1)));
        book.flip_to(2);
        assert_eq!(book.spread(), (2, None));
    }

    #[test]
    fn resize_updates_the_cached_geometry() {
        let mut book = FlipBook::new(3, 400.0, 600.0);
        book.resize(450.0, 675.0);
        assert_eq!(book.size(), (450.0, 675.0));
    }
}
