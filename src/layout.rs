/// Layout constants for the book display.
///
/// The defaults reproduce the observed viewer behavior: the book occupies the
/// window height minus a fixed chrome allowance, zooms in 50px-width steps,
/// never shrinks below 200px in either dimension, and is drawn 100 width-pixels
/// smaller than the logical zoom size as a visual margin.
#[derive(Debug, Clone, Copy)]
pub struct LayoutConfig {
    /// Vertical space reserved for toolbars around the book.
    pub chrome_allowance: f32,
    /// Width-pixel delta applied per zoom step.
    pub zoom_step: f32,
    /// Minimum width/height a zoom-out may produce.
    pub min_dimension: f32,
    /// Width-pixel inset between the logical size and the rendered book.
    pub render_inset: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            chrome_allowance: 100.0,
            zoom_step: 50.0,
            min_dimension: 200.0,
            render_inset: 100.0,
        }
    }
}

/// Display size of the book at the current zoom level.
///
/// `ratio` is the intrinsic width/height ratio of page 1 and stays constant
/// across zoom; width and height always scale together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BookSize {
    pub width: f32,
    pub height: f32,
    pub ratio: f32,
}

/// Sizing and zoom state for the book.
///
/// Uninitialized until the decoder has reported page 1's intrinsic size; every
/// operation on an uninitialized layout is a silent no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct BookLayout {
    config: LayoutConfig,
    size: Option<BookSize>,
}

impl BookLayout {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config, size: None }
    }

    /// Derive the initial display size from page 1's intrinsic dimensions and
    /// the window height. Called once per document load; non-positive
    /// intrinsic dimensions leave the layout uninitialized.
    pub fn initialize(&mut self, intrinsic_width: f32, intrinsic_height: f32, viewport_height: f32) {
        if intrinsic_width <= 0.0 || intrinsic_height <= 0.0 {
            return;
        }
        let ratio = intrinsic_width / intrinsic_height;
        let height = viewport_height - self.config.chrome_allowance;
        self.size = Some(BookSize {
            width: height * ratio,
            height,
            ratio,
        });
    }

    pub fn size(&self) -> Option<BookSize> {
        self.size
    }

    /// Scale both dimensions by `(width + delta) / width`.
    ///
    /// The delta is a width-pixel amount at the *current* size, so successive
    /// adjustments compound multiplicatively: the width leg of a +d/-d pair
    /// cancels exactly, the height leg only up to rounding.
    fn adjust(size: BookSize, delta: f32) -> (f32, f32) {
        let factor = (size.width + delta) / size.width;
        (size.width * factor, size.height * factor)
    }

    /// Apply a zoom delta. Negative deltas are rejected outright when either
    /// resulting dimension would fall below the configured floor; positive
    /// deltas always commit.
    pub fn zoom_by(&mut self, delta: f32) {
        let Some(size) = self.size else { return };
        let (width, height) = Self::adjust(size, delta);
        if delta < 0.0 && (width < self.config.min_dimension || height < self.config.min_dimension) {
            return;
        }
        self.size = Some(BookSize { width, height, ..size });
    }

    pub fn zoom_in(&mut self) {
        self.zoom_by(self.config.zoom_step);
    }

    pub fn zoom_out(&mut self) {
        self.zoom_by(-self.config.zoom_step);
    }

    /// Pixel size actually handed to the flip surface: the logical size inset
    /// by `render_inset` width-pixels.
    pub fn render_size(&self) -> Option<(f32, f32)> {
        self.size.map(|size| Self::adjust(size, -self.config.render_inset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn initialized(viewport_height: f32) -> BookLayout {
        let mut layout = BookLayout::default();
        // A4-ish portrait page.
        layout.initialize(595.0, 842.0, viewport_height);
        layout
    }

    #[test]
    fn initialize_derives_size_from_first_page_and_viewport() {
        let layout = initialized(900.0);
        let size = layout.size().unwrap();
        assert_relative_eq!(size.height, 800.0);
        assert_relative_eq!(size.ratio, 595.0 / 842.0);
        assert_relative_eq!(size.width, 800.0 * 595.0 / 842.0);
    }

    #[test]
    fn initialize_rejects_degenerate_page_dimensions() {
        let mut layout = BookLayout::default();
        layout.initialize(0.0, 842.0, 900.0);
        assert!(layout.size().is_none());
        layout.initialize(595.0, -1.0, 900.0);
        assert!(layout.size().is_none());
    }

    #[test]
    fn operations_before_initialize_are_noops() {
        let mut layout = BookLayout::default();
        layout.zoom_in();
        layout.zoom_out();
        assert!(layout.size().is_none());
        assert!(layout.render_size().is_none());
    }

    #[test]
    fn zoom_preserves_aspect_ratio() {
        let mut layout = initialized(900.0);
        let before = layout.size().unwrap();
        layout.zoom_in();
        layout.zoom_in();
        let after = layout.size().unwrap();
        assert_relative_eq!(after.width / after.height, before.width / before.height, epsilon = 1e-4);
        assert_relative_eq!(after.ratio, before.ratio);
    }

    #[test]
    fn zoom_in_then_out_restores_width_exactly_and_height_approximately() {
        let mut layout = initialized(900.0);
        let before = layout.size().unwrap();
        layout.zoom_in();
        let zoomed = layout.size().unwrap();
        assert_relative_eq!(zoomed.width, before.width + 50.0, epsilon = 1e-3);
        layout.zoom_out();
        let after = layout.size().unwrap();
        // The width delta cancels exactly; the height only went through
        // multiplicative factors, so allow rounding slack there.
        assert_relative_eq!(after.width, before.width, epsilon = 1e-3);
        assert_relative_eq!(after.height, before.height, epsilon = 1e-2);
    }

    #[test]
    fn zoom_out_rejected_below_floor() {
        let mut layout = BookLayout::default();
        // Height floor trips first here: 210 * (250/300) < 200.
        layout.size = Some(BookSize { width: 300.0, height: 210.0, ratio: 300.0 / 210.0 });
        layout.zoom_out();
        let size = layout.size().unwrap();
        assert_relative_eq!(size.width, 300.0);
        assert_relative_eq!(size.height, 210.0);

        // Width floor: 220 - 50 < 200.
        layout.size = Some(BookSize { width: 220.0, height: 400.0, ratio: 0.55 });
        layout.zoom_out();
        assert_relative_eq!(layout.size().unwrap().width, 220.0);
    }

    #[test]
    fn large_negative_delta_rejected() {
        let mut layout = BookLayout::default();
        layout.size = Some(BookSize { width: 400.0, height: 300.0, ratio: 4.0 / 3.0 });
        layout.zoom_by(-500.0);
        let size = layout.size().unwrap();
        assert_relative_eq!(size.width, 400.0);
        assert_relative_eq!(size.height, 300.0);
    }

    #[test]
    fn zoom_in_commits_unconditionally() {
        let mut layout = BookLayout::default();
        layout.size = Some(BookSize { width: 100.0, height: 100.0, ratio: 1.0 });
        layout.zoom_in();
        assert_relative_eq!(layout.size().unwrap().width, 150.0);
    }

    #[test]
    fn render_size_is_inset_from_logical_size() {
        let mut layout = BookLayout::default();
        layout.size = Some(BookSize { width: 500.0, height: 700.0, ratio: 5.0 / 7.0 });
        let (width, height) = layout.render_size().unwrap();
        assert_relative_eq!(width, 400.0, epsilon = 1e-3);
        assert_relative_eq!(height, 700.0 * 400.0 / 500.0, epsilon = 1e-3);
        // The logical size is untouched.
        assert_relative_eq!(layout.size().unwrap().width, 500.0);
    }
}
