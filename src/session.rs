use iced::widget::image::Handle;
use std::path::PathBuf;

use crate::bookmarks::BookmarkSet;
use crate::controller::FlipController;
use crate::flipbook::FlipBook;
use crate::layout::{BookLayout, LayoutConfig};
use crate::pdf_viewer::PdfBook;
use crate::renderer::{PdfError, PdfRenderer};

/// Pixel width of the bookmark sidebar previews.
const THUMBNAIL_WIDTH: f32 = 100.0;

/// Everything tied to the currently open document: the decoded PDF, the
/// sizing/zoom state, the page counter, the flip surface and the bookmarks.
///
/// A session is built whole when a decode completes and replaced whole when
/// the user opens another file, so every piece of mutable state resets on
/// document change and never otherwise.
#[derive(Debug)]
pub struct Session {
    book: PdfBook,
    pub layout: BookLayout,
    pub controller: FlipController,
    pub flipbook: FlipBook,
    pub bookmarks: BookmarkSet,
}

impl Session {
    /// Decode `path` and derive the initial display state from page 1 and the
    /// window height. Fails (and renders nothing) when the document cannot be
    /// decoded or its first page reports a degenerate size.
    pub fn open(
        renderer: &PdfRenderer,
        path: PathBuf,
        viewport_height: f32,
        config: LayoutConfig,
    ) -> Result<Self, PdfError> {
        let book = PdfBook::open(renderer, path)?;
        let total_pages = book.page_count();

        let (intrinsic_width, intrinsic_height) = book.page_size(0)?;
        let mut layout = BookLayout::new(config);
        layout.initialize(intrinsic_width, intrinsic_height, viewport_height);
        let (width, height) = layout.render_size().ok_or(PdfError::DegenerateSize {
            width: intrinsic_width,
            height: intrinsic_height,
        })?;

        Ok(Self {
            book,
            layout,
            controller: FlipController::new(total_pages),
            flipbook: FlipBook::new(total_pages, width, height),
            bookmarks: BookmarkSet::new(),
        })
    }

    pub fn file_name(&self) -> String {
        self.book.file_name()
    }

    pub fn zoom_in(&mut self) {
        self.layout.zoom_in();
        self.sync_surface();
    }

    pub fn zoom_out(&mut self) {
        self.layout.zoom_out();
        self.sync_surface();
    }

    // The flip surface caches its geometry, so every layout change must be
    // followed by a resize notification.
    fn sync_surface(&mut self) {
        if let Some((width, height)) = self.layout.render_size() {
            self.flipbook.resize(width, height);
        }
    }

    /// Rendered image for a zero-based page at the surface's current size.
    pub fn page_image(&self, page_index: u16) -> Option<Handle> {
        let (width, height) = self.flipbook.size();
        self.book.page_image(page_index, width, height)
    }

    /// Small preview of a 1-based page for the bookmark sidebar.
    pub fn thumbnail(&self, page: u16) -> Option<Handle> {
        if page == 0 {
            return None;
        }
        let size = self.layout.size()?;
        let height = THUMBNAIL_WIDTH / size.ratio;
        self.book.page_image(page - 1, THUMBNAIL_WIDTH, height)
    }
}
