use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

use super::super::domain::Item;

const ROUND_DOLLAR_BONUS: u32 = 50;
const QUARTER_MULTIPLE_BONUS: u32 = 25;
const POINTS_PER_ITEM_PAIR: u32 = 5;
const DESCRIPTION_PRICE_MULTIPLIER: f64 = 0.2;
const ODD_DAY_BONUS: u32 = 6;
const AFTERNOON_BONUS: u32 = 10;
const AFTERNOON_HOURS: std::ops::RangeInclusive<u32> = 14..=16;

// `#` stands for one ASCII digit; every other byte must match exactly.
const DATE_LAYOUT: &str = "####-##-##";
const TIME_LAYOUTS: [&str; 2] = ["#:##", "##:##"];

/// Fixed-width shape check in front of chrono, which tolerates short fields and padding.
fn matches_layout(raw: &str, layout: &str) -> bool {
    raw.len() == layout.len()
        && raw
            .bytes()
            .zip(layout.bytes())
            .all(|(byte, expected)| match expected {
                b'#' => byte.is_ascii_digit(),
                _ => byte == expected,
            })
}

/// Parse a decimal amount such as `"35.35"`. Non-finite values count as unparseable.
pub fn parse_amount(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|value| value.is_finite())
}

pub fn retailer_points(retailer: &str) -> u32 {
    let count = retailer
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

pub fn round_dollar_points(total: Option<f64>) -> u32 {
    match total {
        Some(value) if value == value.trunc() => ROUND_DOLLAR_BONUS,
        _ => 0,
    }
}

pub fn quarter_multiple_points(total: Option<f64>) -> u32 {
    let Some(value) = total else {
        return 0;
    };
    if value == 0.0 {
        return 0;
    }

    let cents = (value * 100.0).round() as i64;
    if cents != 0 && cents % 25 == 0 {
        QUARTER_MULTIPLE_BONUS
    } else {
        0
    }
}

pub fn item_pair_points(item_count: usize) -> u32 {
    let pairs = u32::try_from(item_count / 2).unwrap_or(u32::MAX);
    pairs.saturating_mul(POINTS_PER_ITEM_PAIR)
}

pub fn description_points(items: &[Item]) -> u32 {
    items
        .iter()
        .map(item_description_points)
        .fold(0u32, u32::saturating_add)
}

fn item_description_points(item: &Item) -> u32 {
    if item.short_description.trim().len() % 3 != 0 {
        return 0;
    }

    match parse_amount(&item.price) {
        Some(price) => {
            let bonus = (price * DESCRIPTION_PRICE_MULTIPLIER).ceil();
            if bonus > 0.0 {
                bonus as u32
            } else {
                0
            }
        }
        None => 0,
    }
}

pub fn odd_day_points(purchase_date: &str) -> u32 {
    if !matches_layout(purchase_date, DATE_LAYOUT) {
        return 0;
    }
    match NaiveDate::parse_from_str(purchase_date, "%Y-%m-%d") {
        Ok(date) if date.day() % 2 == 1 => ODD_DAY_BONUS,
        _ => 0,
    }
}

/// Only the hour is inspected, so 16:59 still qualifies.
pub fn afternoon_window_points(purchase_time: &str) -> u32 {
    if !TIME_LAYOUTS
        .iter()
        .any(|layout| matches_layout(purchase_time, layout))
    {
        return 0;
    }
    match NaiveTime::parse_from_str(purchase_time, "%H:%M") {
        Ok(time) if AFTERNOON_HOURS.contains(&time.hour()) => AFTERNOON_BONUS,
        _ => 0,
    }
}
