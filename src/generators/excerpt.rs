// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Sheet-music excerpts.
//!
//! Excerpts are not generated: one entry of a fixed catalogue is drawn and
//! its document is rendered page by page by an external loader. Pages are
//! rendered strictly in order, each awaited before the next is requested.

use std::future::Future;
use std::time::Duration;

use serde::Serialize;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::error::{PracticeError, Result};

/// Zoom applied to each page's intrinsic size
pub const EXCERPT_ZOOM: f64 = 2.0;

/// Longest wait for a document load or a single page
pub const EXCERPT_TIMEOUT: Duration = Duration::from_secs(30);

/// A catalogue entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Excerpt {
    pub title: &'static str,
    pub url: &'static str,
}

const LIBRARY: &str = "https://xade.eu/music-library/horn-excerpts";

macro_rules! excerpt {
    ($title:expr, $file:expr) => {
        Excerpt {
            title: $title,
            url: concat!("https://xade.eu/music-library/horn-excerpts/", $file),
        }
    };
}

/// The excerpt catalogue, in draw order
pub static EXCERPTS: [Excerpt; 13] = [
    excerpt!("Beethoven: Sonata, Op. 17", "Beethoven_-_Sonata_Op17_Horn.pdf"),
    excerpt!("Cherubini: Sonata No. 2", "Cherubini-2_Sonatas_horn.pdf"),
    excerpt!(
        "Mozart: Concerto No. 1 in D, K. 412",
        "Mozart-Horn_Concerto_No.1_horn_part.pdf"
    ),
    excerpt!(
        "Mozart: Concerto No. 2 in E-flat, K. 417",
        "Mozart-Horn_Concerto_No.2_horn_part.pdf"
    ),
    excerpt!(
        "Mozart: Concerto No. 3 in E-flat, K 447",
        "Mozart-Horn_Concerto_No.3_horn_part.pdf"
    ),
    excerpt!(
        "Mozart: Concerto No. 4 in E-flat, K. 495",
        "Mozart-Horn_Concerto_No.4_horn_part.pdf"
    ),
    excerpt!(
        "Saint-Saens: Morceau de Concert",
        "Saint-saens-Morceau_De_Concert_orig_horn.pdf"
    ),
    excerpt!(
        "Schumann: Adagio and Allegro, Op. 70",
        "Schumann_Adagio_and_Allegro_Op.70_parts.pdf"
    ),
    excerpt!(
        "Schumann: Konzertstuck for four horns and orchestra",
        "Schumann_Concertpiece_for_4_Horns_Op.86_horns.pdf"
    ),
    excerpt!("Strauss, F.: Nocturno, Op. 7", "Strauss-F-Nocturno-Op-7-horn.pdf"),
    excerpt!("Strauss, F.: Concerto, Op. 8", "Strauss-F-Concerto-Op-8-horn.pdf"),
    excerpt!(
        "Strauss, R.: Concerto No. 1, Op. 11",
        "Strauss-R-Concerto-Op-11-horn.pdf"
    ),
    excerpt!("Weber: Concertino in E", "Weber-Concertino__Op.45-Horn_Part.pdf"),
];

impl Excerpt {
    /// Look up a catalogue entry by title
    pub fn by_title(title: &str) -> Option<&'static Excerpt> {
        EXCERPTS.iter().find(|e| e.title == title)
    }

    /// File name part of the document URL
    pub fn file_name(&self) -> &'static str {
        self.url
            .strip_prefix(LIBRARY)
            .map(|rest| rest.trim_start_matches('/'))
            .unwrap_or(self.url)
    }
}

/// Drawing size of one page
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub zoom: f64,
}

impl Viewport {
    /// Viewport for a page of intrinsic size `width` x `height`
    pub fn for_page(width: f64, height: f64, zoom: f64) -> Self {
        Self {
            width: width * zoom,
            height: height * zoom,
            zoom,
        }
    }
}

/// A rendered page surface
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage {
    /// 1-based page number
    pub number: u32,
    pub viewport: Viewport,
    /// Opaque pixel data produced by the document backend
    pub pixels: Vec<u8>,
}

/// A loaded excerpt document
#[allow(async_fn_in_trait)]
pub trait ExcerptDocument {
    fn page_count(&self) -> u32;

    /// Intrinsic (unzoomed) size of a 1-based page
    async fn page_size(&mut self, number: u32) -> Result<(f64, f64)>;

    async fn render_page(&mut self, number: u32, viewport: Viewport) -> Result<Vec<u8>>;
}

/// Fetches excerpt documents by URL
#[allow(async_fn_in_trait)]
pub trait ExcerptLoader {
    type Document: ExcerptDocument;

    async fn load(&self, url: &str) -> Result<Self::Document>;
}

/// Visible state of the excerpt slot
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ExcerptStatus {
    /// Render requested, not yet resolved
    #[default]
    Loading,
    Rendered {
        title: &'static str,
        pages: Vec<RenderedPage>,
    },
    /// Shown in place of the excerpt; never left loading
    Failed { title: &'static str, reason: String },
}

impl ExcerptStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, ExcerptStatus::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ExcerptStatus::Failed { .. })
    }
}

/// The excerpt exercise of a session and what it currently shows
#[derive(Debug, Clone, PartialEq)]
pub struct ExcerptSlot {
    excerpt: &'static Excerpt,
    status: ExcerptStatus,
}

impl ExcerptSlot {
    /// A slot shows [`ExcerptStatus::Loading`] until rendered
    pub fn new(excerpt: &'static Excerpt) -> Self {
        Self {
            excerpt,
            status: ExcerptStatus::Loading,
        }
    }

    pub fn excerpt(&self) -> &'static Excerpt {
        self.excerpt
    }

    pub fn status(&self) -> &ExcerptStatus {
        &self.status
    }

    pub fn into_status(self) -> ExcerptStatus {
        self.status
    }

    /// Render through `loader`; the slot always leaves the loading state
    pub async fn render<L: ExcerptLoader>(&mut self, loader: &L) -> &ExcerptStatus {
        self.status = ExcerptStatus::Loading;
        self.status = render_excerpt(loader, self.excerpt).await;
        &self.status
    }
}

async fn bounded<T>(what: &str, step: impl Future<Output = Result<T>>) -> Result<T> {
    match timeout(EXCERPT_TIMEOUT, step).await {
        Ok(result) => result,
        Err(_) => Err(PracticeError::Excerpt(format!("timed out waiting for {}", what))),
    }
}

async fn render_pages<L: ExcerptLoader>(
    loader: &L,
    excerpt: &Excerpt,
) -> Result<Vec<RenderedPage>> {
    let mut document = bounded("document", loader.load(excerpt.url)).await?;
    let count = document.page_count();
    if count == 0 {
        return Err(PracticeError::Excerpt(format!("{} has no pages", excerpt.url)));
    }

    let mut pages = Vec::with_capacity(count as usize);
    for number in 1..=count {
        let (width, height) = bounded("page size", document.page_size(number)).await?;
        let viewport = Viewport::for_page(width, height, EXCERPT_ZOOM);
        let pixels = bounded("page", document.render_page(number, viewport)).await?;
        debug!(number, width = viewport.width, height = viewport.height, "rendered excerpt page");
        pages.push(RenderedPage {
            number,
            viewport,
            pixels,
        });
    }
    Ok(pages)
}

/// Load and render every page of `excerpt` in order.
///
/// Must run inside a tokio runtime with the time driver enabled. Any
/// failure, including a step exceeding [`EXCERPT_TIMEOUT`], is reported
/// through [`ExcerptStatus::Failed`] so the slot can show it.
pub async fn render_excerpt<L: ExcerptLoader>(loader: &L, excerpt: &Excerpt) -> ExcerptStatus {
    match render_pages(loader, excerpt).await {
        Ok(pages) => {
            info!(title = excerpt.title, pages = pages.len(), "excerpt rendered");
            ExcerptStatus::Rendered {
                title: excerpt.title,
                pages,
            }
        }
        Err(e) => {
            warn!(title = excerpt.title, error = %e, "excerpt rendering failed");
            ExcerptStatus::Failed {
                title: excerpt.title,
                reason: e.to_string(),
            }
        }
    }
}
