use crate::listing::Record;
use crate::store::{CollectionState, LoadStatus};

const CURRENCY: &str = "VND";

/// `18500000.0` → `"18,500,000 VND"`. Fractions keep two decimals.
pub fn format_price(price: f64) -> String {
    let cents = (price.abs() * 100.0).round() as u128;
    let whole = group_thousands(cents / 100);
    let fraction = cents % 100;
    let sign = if price < 0.0 && cents != 0 { "-" } else { "" };

    if fraction == 0 {
        format!("{}{} {}", sign, whole, CURRENCY)
    } else {
        format!("{}{}.{:02} {}", sign, whole, fraction, CURRENCY)
    }
}

fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// One listing as a short block of text.
pub fn render_listing(record: &Record) -> String {
    format!(
        "[{}] {}\n    Color: {}\n    Price: {}\n    {}\n    {}",
        record.id,
        record.name,
        record.color,
        format_price(record.price),
        first_line(&record.description),
        record.image_url
    )
}

/// Status header for a view of the collection: load status plus the last
/// list error when there is one.
pub fn render_status(state: &CollectionState) -> String {
    match (&state.status, &state.last_error) {
        (LoadStatus::Failed, Some(error)) => format!("-- status: {}: {}", state.status, error),
        _ => format!(
            "-- status: {}, {} listing(s)",
            state.status,
            state.items.len()
        ),
    }
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("")
}
