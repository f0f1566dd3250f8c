//! Page window, fetch status and request tagging.

use std::fmt;

/// Which page of the catalog is displayed, and how large pages are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// 0-based page index.
    index: usize,
    /// Rows per page.
    size: usize,
    /// Total record count last reported by the catalog.
    total: u64,
}

impl PageWindow {
    /// Create a window on the first page. A zero size is treated as 1.
    pub fn new(size: usize) -> Self {
        Self {
            index: 0,
            size: size.max(1),
            total: 0,
        }
    }

    /// The 0-based page index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Rows per page.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Known total record count.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Record the catalog's total count.
    pub fn set_total(&mut self, total: u64) {
        self.total = total;
    }

    /// Number of pages, never less than 1.
    pub fn page_count(&self) -> usize {
        let pages = self.total.div_ceil(self.size as u64);
        usize::try_from(pages).unwrap_or(usize::MAX).max(1)
    }

    /// Index of the first row on this page across the whole catalog.
    pub fn first_row(&self) -> u64 {
        self.index as u64 * self.size as u64
    }

    /// Move to `index`, clamped to the known page range.
    ///
    /// Until a total is known only page 0 is reachable. Returns true if the
    /// index changed.
    pub fn go_to(&mut self, index: usize) -> bool {
        let target = index.min(self.page_count() - 1);
        if target == self.index {
            return false;
        }
        self.index = target;
        true
    }

    /// Move to the next page.
    pub fn next(&mut self) -> bool {
        self.go_to(self.index.saturating_add(1))
    }

    /// Move to the previous page.
    pub fn prev(&mut self) -> bool {
        self.go_to(self.index.saturating_sub(1))
    }

    /// Move to the first page.
    pub fn first(&mut self) -> bool {
        self.go_to(0)
    }

    /// Move to the last known page.
    pub fn last(&mut self) -> bool {
        self.go_to(self.page_count() - 1)
    }
}

/// A fetch tagged with the page it was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Monotonic request counter.
    pub generation: u64,
    /// 0-based page index.
    pub page: usize,
    /// Rows per page.
    pub size: usize,
}

/// Issues request tags and remembers which one is current.
#[derive(Debug, Default)]
pub struct RequestTracker {
    generation: u64,
    current: Option<PageRequest>,
}

impl RequestTracker {
    /// Create a tracker with nothing in flight.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new request for `window`, superseding any earlier one.
    pub fn issue(&mut self, window: &PageWindow) -> PageRequest {
        self.generation += 1;
        let request = PageRequest {
            generation: self.generation,
            page: window.index(),
            size: window.size(),
        };
        self.current = Some(request);
        request
    }

    /// Accept a response if its tag is the current request.
    ///
    /// Returns false for stale or unknown tags.
    pub fn complete(&mut self, request: &PageRequest) -> bool {
        if self.current.as_ref() == Some(request) {
            self.current = None;
            true
        } else {
            false
        }
    }
}

/// Status of the visible page's data.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchStatus {
    /// A fetch for the current page is in flight.
    #[default]
    Loading,
    /// The rows on screen belong to the current page.
    Ready,
    /// The last fetch failed; rows on screen may be stale.
    Failed(String),
}

impl FetchStatus {
    /// Check if a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchStatus::Loading)
    }

    /// Check if the last fetch failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, FetchStatus::Failed(_))
    }
}

impl fmt::Display for FetchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchStatus::Loading => write!(f, "Loading"),
            FetchStatus::Ready => write!(f, "Ready"),
            FetchStatus::Failed(msg) => write!(f, "Failed: {}", msg),
        }
    }
}
