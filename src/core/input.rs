// DataBudget - core/input.rs
//
// Parsing of user-typed numbers (budget field and admin price fields).
// Lenient leading-integer semantics: "500", " 500", "500 FCFA" all read
// as 500. Anything without leading digits is rejected.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::Price;

/// Why a budget entry was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoredBudget {
    /// The field is empty or whitespace.
    Empty,
    /// The text does not start with a number.
    NotNumeric,
    /// The number is zero.
    Zero,
}

/// Outcome of reading the budget field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetInput {
    /// A usable budget. May be negative, in which case nothing matches.
    Budget(i64),
    /// The search must leave the current results untouched.
    Ignored(IgnoredBudget),
}

/// Outcome of reading an admin price field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceInput {
    Price(Price),
    /// Not a number, negative, or larger than [`Price::MAX`].
    Invalid,
}

/// Parse the leading integer of `raw`.
///
/// Leading whitespace and one sign character are accepted; parsing stops at
/// the first non-digit. Values beyond the `i64` range saturate. Returns
/// `None` when no digit follows the optional sign.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

/// Read the budget field.
pub fn parse_budget(raw: &str) -> BudgetInput {
    if raw.trim().is_empty() {
        return BudgetInput::Ignored(IgnoredBudget::Empty);
    }
    match parse_leading_int(raw) {
        None => BudgetInput::Ignored(IgnoredBudget::NotNumeric),
        Some(0) => BudgetInput::Ignored(IgnoredBudget::Zero),
        Some(budget) => BudgetInput::Budget(budget),
    }
}

/// Read an admin price field.
pub fn parse_price(raw: &str) -> PriceInput {
    match parse_leading_int(raw).map(Price::try_from) {
        Some(Ok(price)) => PriceInput::Price(price),
        _ => PriceInput::Invalid,
    }
}
