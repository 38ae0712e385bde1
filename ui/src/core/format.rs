//! Formatting helpers for presenting listing and account data.

use time::{format_description::well_known::Rfc3339, macros::format_description, OffsetDateTime};

/// Whole-currency nightly price, thousands separated: 142 00 cents -> "$142",
/// 1 234 00 cents -> "$1,234". Sub-dollar remainders are dropped on purpose;
/// card copy never shows cents.
pub fn format_price(cents: u32) -> String {
    let dollars = cents / 100;
    let digits = dollars.to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${grouped}")
}

/// "Mar 2023" badge for an RFC 3339 timestamp; em dash when unparsable.
pub fn format_member_since(iso: &str) -> String {
    OffsetDateTime::parse(iso, &Rfc3339)
        .ok()
        .and_then(|date| {
            date.format(&format_description!("[month repr:short] [year]"))
                .ok()
        })
        .unwrap_or_else(|| "—".to_string())
}
