//! Euro currency formatting for the fr-FR locale.
//!
//! Display parity with the reference formatter
//! (`Intl.NumberFormat('fr-FR', { style: 'currency', currency: 'EUR',
//! maximumFractionDigits: 0 })`) requires the exact CLDR output for French:
//! amounts rounded to whole euros with halves away from zero, digit groups
//! of three separated by U+202F NARROW NO-BREAK SPACE, and a U+00A0
//! NO-BREAK SPACE before the euro sign.

use rust_decimal::{Decimal, RoundingStrategy};

/// The fr-FR digit group separator (U+202F NARROW NO-BREAK SPACE).
const GROUP_SEPARATOR: char = '\u{202F}';

/// The space between the amount and the euro sign (U+00A0 NO-BREAK SPACE).
const CURRENCY_SPACE: char = '\u{A0}';

/// Formats an amount as a whole-euro fr-FR currency string.
///
/// The pipeline never produces negative amounts, but the formatter is total
/// and renders a leading minus sign for them. The sign comes from the
/// unrounded amount, so a negative fraction that rounds to zero renders as
/// `-0 €`, matching the reference formatter.
///
/// # Example
///
/// ```
/// use paie_engine::display::format_eur;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_eur(Decimal::from(4260)), "4\u{202F}260\u{A0}€");
/// assert_eq!(format_eur(Decimal::new(35625, 1)), "3\u{202F}563\u{A0}€");
/// assert_eq!(format_eur(Decimal::ZERO), "0\u{A0}€");
/// ```
pub fn format_eur(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let negative = amount.is_sign_negative() && !amount.is_zero();
    let digits = rounded.abs().normalize().to_string();

    // Group digits in threes from the right.
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }
    let mut out = String::with_capacity(grouped.len() + 4);
    if negative {
        out.push('-');
    }
    out.extend(grouped.chars().rev());
    out.push(CURRENCY_SPACE);
    out.push('€');
    out
}
