//! Pagination types for list operations.

use serde::{Deserialize, Serialize};

/// A request for a page of results.
///
/// Pages are 1-indexed. Construction normalizes out-of-range input instead of
/// rejecting it: a page index below one becomes the first page, a zero size
/// becomes [`PageRequest::DEFAULT_SIZE`] and oversized pages are capped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// The page number (1-indexed).
    pub page_index: usize,
    /// The number of items per page.
    pub page_size: usize,
}

impl PageRequest {
    /// The default page size.
    pub const DEFAULT_SIZE: usize = 10;
    /// The maximum allowed page size.
    pub const MAX_SIZE: usize = 100;

    /// Creates a new, normalized page request.
    #[must_use]
    pub fn new(page_index: usize, page_size: usize) -> Self {
        let page_size = match page_size {
            0 => Self::DEFAULT_SIZE,
            size => size.min(Self::MAX_SIZE),
        };

        Self {
            page_index: page_index.max(1),
            page_size,
        }
    }

    /// Creates a page request for the first page with default size.
    #[must_use]
    pub fn first() -> Self {
        Self::new(1, Self::DEFAULT_SIZE)
    }

    /// Returns the offset for database queries.
    ///
    /// Saturates instead of overflowing for absurd page indexes.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.page_index.saturating_sub(1).saturating_mul(self.page_size)
    }

    /// Returns the limit for database queries.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.page_size
    }

    /// Slices an in-memory collection according to this request.
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset().min(items.len());
        let end = start.saturating_add(self.limit()).min(items.len());
        &items[start..end]
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

/// Folds a display name into the form stored in `SearchName` columns and
/// compared against [`SearchRequest::like_pattern`]. Case folding is full
/// Unicode, so `ÉTÉ` and `été` share one key.
#[must_use]
pub fn search_key(text: &str) -> String {
    text.trim().to_lowercase()
}

/// A free-text filter combined with a page request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Case-insensitive substring to match, if any.
    pub search_term: Option<String>,
    /// The page to return.
    pub page: PageRequest,
}

impl SearchRequest {
    #[must_use]
    pub fn new(search_term: Option<String>, page: PageRequest) -> Self {
        Self { search_term, page }
    }

    /// Returns the trimmed search term, or `None` when blank.
    #[must_use]
    pub fn term(&self) -> Option<&str> {
        self.search_term
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }

    /// Returns the lowercased term as a SQL `LIKE` pattern, or `%` when
    /// unfiltered. Wildcards in the term are escaped with a backslash.
    #[must_use]
    pub fn like_pattern(&self) -> String {
        match self.term() {
            Some(term) => {
                let mut pattern = String::with_capacity(term.len() + 2);
                pattern.push('%');
                for c in search_key(term).chars() {
                    if matches!(c, '%' | '_' | '\\') {
                        pattern.push('\\');
                    }
                    pattern.push(c);
                }
                pattern.push('%');
                pattern
            }
            None => "%".to_string(),
        }
    }

    /// Returns true when `value` matches the term, ignoring case.
    #[must_use]
    pub fn matches(&self, value: &str) -> bool {
        self.term()
            .map_or(true, |term| search_key(value).contains(&search_key(term)))
    }
}

/// Information about a page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PageInfo {
    /// The current page number (1-indexed).
    pub page_index: usize,
    /// The number of items per page.
    pub page_size: usize,
    /// The total number of items across all pages.
    pub total_elements: u64,
    /// The total number of pages.
    pub total_pages: u64,
    /// Whether this is the first page.
    pub first: bool,
    /// Whether this is the last page.
    pub last: bool,
    /// The number of items on this page.
    pub number_of_elements: usize,
}

impl PageInfo {
    /// Creates a new page info.
    #[must_use]
    pub fn new(request: PageRequest, total_elements: u64, number_of_elements: usize) -> Self {
        let size = request.page_size as u64;
        let total_pages = if size > 0 {
            total_elements.div_ceil(size)
        } else {
            0
        };

        Self {
            page_index: request.page_index,
            page_size: request.page_size,
            total_elements,
            total_pages,
            first: request.page_index == 1,
            last: request.page_index as u64 >= total_pages,
            number_of_elements,
        }
    }
}

/// A page of results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items on this page.
    pub content: Vec<T>,
    /// Information about this page.
    #[serde(flatten)]
    pub info: PageInfo,
}

impl<T> Page<T> {
    /// Creates a new page.
    #[must_use]
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        let number_of_elements = content.len();
        Self {
            content,
            info: PageInfo::new(request, total_elements, number_of_elements),
        }
    }

    /// Creates an empty page.
    #[must_use]
    pub fn empty(request: PageRequest) -> Self {
        Self::new(Vec::new(), request, 0)
    }

    /// Maps the page content to a different type.
    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            info: self.info,
        }
    }

    /// Returns true if the page is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Returns the total number of elements across all pages.
    #[must_use]
    pub const fn total_elements(&self) -> u64 {
        self.info.total_elements
    }

    /// Returns the total number of pages.
    #[must_use]
    pub const fn total_pages(&self) -> u64 {
        self.info.total_pages
    }

    /// Returns true if there is a next page.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        !self.info.last
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty(PageRequest::first())
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.content.into_iter()
    }
}
