//! Cursor pagination via the `Link` response header.
//!
//! The Admin API advertises adjacent pages in a single `Link` header holding
//! comma-separated web-link entries:
//!
//! ```text
//! <https://shop.myshopify.com/admin/api/2024-04/products.json?limit=250&page_info=PREV>; rel="previous",
//! <https://shop.myshopify.com/admin/api/2024-04/products.json?limit=250&page_info=NEXT>; rel="next"
//! ```
//!
//! Only the `next` relation matters here; the URL is followed verbatim, cursor
//! and all.

/// Returns the URL of the entry whose `rel` parameter names `next`, or `None`
/// when the header has no such entry (last page reached).
#[must_use]
pub fn extract_next_link(link_header: &str) -> Option<String> {
    link_header
        .split(',')
        .map(str::trim)
        .find(|entry| has_next_relation(entry))
        .and_then(extract_angle_bracket_url)
        .map(str::to_owned)
}

/// `true` if any `rel` parameter of the entry lists `next`. `rel` may carry
/// several space-separated relation types and may be quoted or bare.
fn has_next_relation(entry: &str) -> bool {
    entry.split(';').skip(1).any(|param| {
        let Some((key, value)) = param.split_once('=') else {
            return false;
        };
        key.trim().eq_ignore_ascii_case("rel")
            && value
                .trim()
                .trim_matches('"')
                .split_whitespace()
                .any(|rel| rel.eq_ignore_ascii_case("next"))
    })
}

/// Extracts the URL between `<` and `>` in a link entry.
fn extract_angle_bracket_url(entry: &str) -> Option<&str> {
    let start = entry.find('<')? + 1;
    let end = entry.find('>')?;
    if start >= end {
        return None;
    }
    let url = entry[start..end].trim();
    (!url.is_empty()).then_some(url)
}
