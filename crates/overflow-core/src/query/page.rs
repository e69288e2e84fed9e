//! Pagination parameters.

use std::num::NonZeroU64;

/// A normalized page request: 1-based page number and a positive page size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    page: NonZeroU64,
    limit: NonZeroU64,
}

impl PageRequest {
    /// Create a page request. A page of 0 is treated as page 1.
    pub fn new(page: u64, limit: NonZeroU64) -> Self {
        Self {
            page: NonZeroU64::new(page).unwrap_or(NonZeroU64::MIN),
            limit,
        }
    }

    /// Build a page request from raw query-string values.
    ///
    /// Parsing is permissive, like `parseInt`: leading whitespace and an
    /// optional sign are accepted and trailing garbage is ignored. An absent,
    /// non-numeric or non-positive page becomes 1; an absent, non-numeric or
    /// non-positive limit becomes `default_limit`; limits above `max_limit`
    /// are clamped.
    pub fn from_raw(
        page: Option<&str>,
        limit: Option<&str>,
        default_limit: NonZeroU64,
        max_limit: NonZeroU64,
    ) -> Self {
        let page = page
            .and_then(parse_leading_int)
            .and_then(|p| u64::try_from(p).ok())
            .unwrap_or(1);

        let limit = limit
            .and_then(parse_leading_int)
            .and_then(|l| u64::try_from(l).ok())
            .and_then(NonZeroU64::new)
            .unwrap_or(default_limit)
            .min(max_limit);

        Self::new(page, limit)
    }

    /// 1-based page number.
    pub fn page(&self) -> u64 {
        self.page.get()
    }

    /// Page size.
    pub fn limit(&self) -> u64 {
        self.limit.get()
    }

    /// Number of records skipped before this page: `(page - 1) * limit`.
    pub fn skip(&self) -> u64 {
        (self.page() - 1).saturating_mul(self.limit())
    }

    /// Number of pages needed for `total` records; 0 when `total` is 0.
    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.limit())
    }

    /// Number of records this page holds out of `total`.
    pub fn expected_count(&self, total: u64) -> u64 {
        total.saturating_sub(self.skip()).min(self.limit())
    }
}

/// Parse the leading integer of `s`, `parseInt` style.
fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits: &str = {
        let end = digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(digits.len());
        &digits[..end]
    };

    if digits.is_empty() {
        return None;
    }

    let value = digits.bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });

    Some(if negative { -value } else { value })
}
