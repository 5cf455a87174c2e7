//! Robux tax arithmetic for the donation commands.
//!
//! No remote calls are involved; these commands are pure arithmetic on the
//! supplied amount.

use serde::{Deserialize, Serialize};

/// Which donation flavor is being taxed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxKind {
    /// Direct donation, taxed at 40%.
    Donation,
    /// Gamepass donation, taxed at 30%.
    Gamepass,
}

impl TaxKind {
    /// The platform's cut for this donation flavor.
    pub fn rate(&self) -> f64 {
        match self {
            Self::Donation => 0.40,
            Self::Gamepass => 0.30,
        }
    }

    /// Tax rate as a whole percentage for display.
    pub fn percent(&self) -> u32 {
        match self {
            Self::Donation => 40,
            Self::Gamepass => 30,
        }
    }

    /// Heading line for the reply message.
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Donation => "Donate (donation tax 40%)",
            Self::Gamepass => "Gamepass donation (tax 30%)",
        }
    }
}

/// Net amount the recipient keeps after the platform's cut.
pub fn net_after_tax(amount: f64, rate: f64) -> f64 {
    amount * (1.0 - rate)
}

/// Format an amount: integers stay bare, everything else rounds to two
/// decimal places with trailing zeros trimmed.
///
/// Rounding happens before the integer check, so 19.9998 renders as "20",
/// not "20.00".
pub fn format_amount(amount: f64) -> String {
    let rounded = (amount * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        let fixed = format!("{:.2}", rounded);
        fixed
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

/// Build the full reply message for a tax command.
pub fn tax_reply(kind: TaxKind, amount: f64) -> String {
    let net = net_after_tax(amount, kind.rate());
    format!(
        "{}\nOriginal: {} → After {}% tax: {}",
        kind.heading(),
        format_amount(amount),
        kind.percent(),
        format_amount(net),
    )
}
