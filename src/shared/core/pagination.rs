pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 10;

/// One-based offset pagination window.
///
/// The window itself does not reject zero values: `page == 0` or `limit == 0`
/// simply select nothing. Coercion of user input happens in [`PageRequest::from_params`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub limit: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    pub fn new(page: usize, limit: usize) -> Self {
        Self { page, limit }
    }

    /// Missing, non-numeric and non-positive values fall back to the defaults.
    pub fn from_params(page: Option<&str>, limit: Option<&str>, default_limit: usize) -> Self {
        Self {
            page: coerce(page, DEFAULT_PAGE),
            limit: coerce(limit, default_limit),
        }
    }

    pub fn offset(&self) -> Option<usize> {
        self.page.checked_sub(1)?.checked_mul(self.limit)
    }

    pub fn total_pages(&self, total: usize) -> usize {
        if self.limit == 0 {
            return 0;
        }
        total.div_ceil(self.limit)
    }

    pub fn slice<T: Clone>(&self, items: &[T]) -> Vec<T> {
        let Some(start) = self.offset() else {
            return Vec::new();
        };
        if start >= items.len() {
            return Vec::new();
        }
        let end = start.saturating_add(self.limit).min(items.len());
        items[start..end].to_vec()
    }
}

fn coerce(raw: Option<&str>, default: usize) -> usize {
    raw.and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(default)
}
