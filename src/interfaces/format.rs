// ============================================================================
// Formatting Interface
// Defines the contract for display-formatting collaborators
// ============================================================================

use crate::domain::Currency;

/// Display-formatting contract.
///
/// The core hands over the exact decimal amount and the currency; everything
/// locale-aware (symbol placement, separators, translations) belongs to the
/// implementation.
pub trait CurrencyFormatter: Send + Sync {
    /// Render a decimal amount in the given currency for display.
    fn format(&self, decimal_amount: &str, currency: &Currency) -> String;
}

/// Locale-free formatter: grouped amount followed by the currency code.
pub struct SimpleFormatter;

impl CurrencyFormatter for SimpleFormatter {
    fn format(&self, decimal_amount: &str, currency: &Currency) -> String {
        format!("{} {}", group_thousands(decimal_amount, '.', ','), currency.code())
    }
}

/// Formatter that logs what it renders, for tracing display paths.
pub struct LoggingFormatter;

impl CurrencyFormatter for LoggingFormatter {
    fn format(&self, decimal_amount: &str, currency: &Currency) -> String {
        tracing::debug!(amount = decimal_amount, currency = currency.code(), "formatting amount");
        SimpleFormatter.format(decimal_amount, currency)
    }
}

/// Regroup a plain decimal string (`-?digits[.digits]`) with the given
/// separators.
pub(crate) fn group_thousands(
    plain: &str,
    decimal_separator: char,
    thousands_separator: char,
) -> String {
    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let mut grouped = String::new();
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(thousands_separator);
        }
        grouped.push(digit);
    }

    match frac_part {
        Some(frac) => format!("{}{}{}{}", sign, grouped, decimal_separator, frac),
        None => format!("{}{}", sign, grouped),
    }
}
