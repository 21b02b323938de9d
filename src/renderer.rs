use pdfium_render::prelude::*;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("failed to bind to the PDFium library (install PDFium or place it next to the executable): {0}")]
    LibraryUnavailable(PdfiumError),
    #[error("failed to decode document: {0}")]
    Decode(PdfiumError),
    #[error("page {0} out of bounds")]
    PageOutOfBounds(u16),
    #[error("failed to render page {page}: {source}")]
    Render { page: u16, source: PdfiumError },
    #[error("page 1 has a degenerate size ({width} x {height})")]
    DegenerateSize { width: f32, height: f32 },
}

/// PDF decoder and rasterizer backed by pdfium.
///
/// Binding to the native library happens exactly once, here, when the hosting
/// application constructs the renderer; pdfium handles never leave the UI
/// thread.
pub struct PdfRenderer {
    pdfium: &'static Pdfium,
}

impl PdfRenderer {
    pub fn new() -> Result<Self, PdfError> {
        let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
            .or_else(|_| Pdfium::bind_to_system_library())
            .map_err(PdfError::LibraryUnavailable)?;
        // The binding lives for the whole process; leaking it gives document
        // handles the 'static lifetime they need to sit in app state.
        let pdfium = Box::leak(Box::new(Pdfium::new(bindings)));
        Ok(Self { pdfium })
    }

    pub fn load_document(&self, path: &Path) -> Result<Document, PdfError> {
        let document = self
            .pdfium
            .load_pdf_from_file(path, None)
            .map_err(PdfError::Decode)?;
        Ok(Document { inner: document })
    }
}

pub struct Document {
    inner: PdfDocument<'static>,
}

impl Document {
    pub fn page_count(&self) -> u16 {
        self.inner.pages().len()
    }

    /// Intrinsic page size in PDF points at scale 1.
    pub fn page_size(&self, page_index: u16) -> Result<(f32, f32), PdfError> {
        let page = self
            .inner
            .pages()
            .get(page_index)
            .map_err(|_| PdfError::PageOutOfBounds(page_index))?;
        Ok((page.width().value, page.height().value))
    }

    /// Rasterize a page at the given pixel size.
    pub fn render_page(
        &self,
        page_index: u16,
        width: u32,
        height: u32,
    ) -> Result<image::RgbaImage, PdfError> {
        let page = self
            .inner
            .pages()
            .get(page_index)
            .map_err(|_| PdfError::PageOutOfBounds(page_index))?;

        let render_config = PdfRenderConfig::new()
            .set_target_width(width.max(1) as i32)
            .set_maximum_height(height.max(1) as i32)
            .rotate_if_landscape(PdfPageRenderRotation::None, false);

        let bitmap = page
            .render_with_config(&render_config)
            .map_err(|source| PdfError::Render { page: page_index, source })?;

        Ok(bitmap.as_image().to_rgba8())
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("page_count", &self.page_count())
            .finish()
    }
}
