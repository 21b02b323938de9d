use crate::renderer::{Document, PdfError, PdfRenderer};
use iced::widget::image::Handle;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

/// Rendered-page entries kept before the cache is dropped wholesale.
const CACHE_CAP: usize = 24;

/// A loaded PDF with a cache of rasterized pages.
///
/// Cache keys include the pixel width, so every zoom level renders each page
/// at most once. The cache is interior-mutable because the view reads pages
/// while holding `&self`; the app is single-threaded, so a `RefCell` suffices.
pub struct PdfBook {
    path: PathBuf,
    document: Document,
    page_cache: RefCell<HashMap<(u16, u32), Handle>>,
}

impl PdfBook {
    pub fn open(renderer: &PdfRenderer, path: PathBuf) -> Result<Self, PdfError> {
        let document = renderer.load_document(&path)?;
        Ok(Self {
            path,
            document,
            page_cache: RefCell::new(HashMap::new()),
        })
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("Untitled")
            .to_string()
    }

    pub fn page_count(&self) -> u16 {
        self.document.page_count()
    }

    /// Intrinsic size of a page in points at scale 1.
    pub fn page_size(&self, page_index: u16) -> Result<(f32, f32), PdfError> {
        self.document.page_size(page_index)
    }

    /// Rasterize `page_index` at the given pixel size, serving repeats from
    /// the cache. Render failures are logged and yield `None`; the slot is
    /// simply left blank.
    pub fn page_image(&self, page_index: u16, width: f32, height: f32) -> Option<Handle> {
        let width_px = width.max(1.0) as u32;
        let height_px = height.max(1.0) as u32;
        let cache_key = (page_index, width_px);

        if let Some(handle) = self.page_cache.borrow().get(&cache_key) {
            return Some(handle.clone());
        }

        match self.document.render_page(page_index, width_px, height_px) {
            Ok(img) => {
                let (w, h) = (img.width(), img.height());
                let handle = Handle::from_rgba(w, h, img.into_raw());

                let mut cache = self.page_cache.borrow_mut();
                if cache.len() >= CACHE_CAP {
                    cache.clear();
                }
                cache.insert(cache_key, handle.clone());
                Some(handle)
            }
            Err(e) => {
                tracing::error!("failed to render page {}: {}", page_index, e);
                None
            }
        }
    }
}

impl std::fmt::Debug for PdfBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PdfBook")
            .field("path", &self.path)
            .field("page_count", &self.page_count())
            .finish()
    }
}
