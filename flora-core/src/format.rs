//! Display formatting for prices, dates and listing captions.
use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::catalog::{PLACEHOLDER_IMAGE, ProductDetail};

/// Characters kept by [`truncate_content`] when callers have no preference.
pub const DEFAULT_EXCERPT_LEN: usize = 150;

/// Format a VND amount the way vi-VN locales print currency: `450.000 ₫`.
#[must_use]
pub fn format_price(price: i64) -> String {
    let digits = price.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    if price < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped.push_str(" ₫");
    grouped
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .map(|stamp| stamp.naive_local())
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// `dd/mm/yyyy`, or `None` when `raw` is not a recognised timestamp.
#[must_use]
pub fn format_blog_date(raw: &str) -> Option<String> {
    parse_timestamp(raw).map(|stamp| stamp.format("%d/%m/%Y").to_string())
}

/// `dd/mm/yyyy HH:MM`, or `None` when `raw` is not a recognised timestamp.
#[must_use]
pub fn format_blog_datetime(raw: &str) -> Option<String> {
    parse_timestamp(raw).map(|stamp| stamp.format("%d/%m/%Y %H:%M").to_string())
}

/// Cut `content` to `max_len` characters and mark the cut with `...`.
#[must_use]
pub fn truncate_content(content: &str, max_len: usize) -> String {
    match content.char_indices().nth(max_len) {
        Some((cut, _)) => format!("{}...", &content[..cut]),
        None => content.to_string(),
    }
}

/// Catalogue code shown for products that were never given one.
#[must_use]
pub fn product_code_for(id: u64) -> String {
    format!("FL-{id:04}")
}

/// Gallery order for a detail page: primary image first, then the extra shots.
#[must_use]
pub fn all_product_images(detail: &ProductDetail) -> Vec<String> {
    let mut images = Vec::with_capacity(detail.image_urls.len() + 1);
    if !detail.product.image_url.is_empty() {
        images.push(detail.product.image_url.clone());
    }
    images.extend(detail.image_urls.iter().filter(|url| !url.is_empty()).cloned());
    if images.is_empty() {
        images.push(PLACEHOLDER_IMAGE.to_string());
    }
    images
}

/// 1-based `(first, last)` item numbers visible on `current_page`.
///
/// `None` for an empty collection or a page past the end.
#[must_use]
pub fn display_range(current_page: usize, page_size: usize, total_items: usize) -> Option<(usize, usize)> {
    if total_items == 0 || current_page == 0 || page_size == 0 {
        return None;
    }
    let offset = (current_page - 1).checked_mul(page_size)?;
    if offset >= total_items {
        return None;
    }
    let end = offset.saturating_add(page_size).min(total_items);
    Some((offset + 1, end))
}
