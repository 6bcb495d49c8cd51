use std::fmt::{Debug, Display, Formatter};

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

pub type Figure = Decimal;

/// Largest expense or salary the tracker accepts, a crore crore rupees.
/// Sums over any realistic number of records stay far inside `Decimal`.
pub const MAX_AMOUNT: Figure = dec!(1000000000000000);

pub fn in_accepted_range(figure: Figure) -> bool {
    figure > Decimal::ZERO && figure <= MAX_AMOUNT
}

pub const RUPEE_SIGN: &str = "₹";

// Up to three fractional digits are shown, trailing zeros dropped
const DISPLAY_DECIMALS: u32 = 3;

/// An amount of money as shown to the user: `₹12,34,567.5`
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Rupees(pub Figure);

impl Display for Rupees {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let figure = self
            .0
            .round_dp_with_strategy(DISPLAY_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
            .normalize();
        let sign = if figure.is_sign_negative() && !figure.is_zero() {
            "-"
        } else {
            ""
        };

        let digits = figure.abs().to_string();
        let (integer, fraction) = match digits.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (digits.as_str(), None),
        };

        write!(f, "{}{}{}", RUPEE_SIGN, sign, group_indian(integer))?;
        if let Some(fraction) = fraction {
            write!(f, ".{}", fraction)?;
        }
        Ok(())
    }
}

impl Debug for Rupees {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

/// Groups the last three digits, then every two digits (lakh / crore).
fn group_indian(integer: &str) -> String {
    if integer.len() <= 3 {
        return integer.to_string();
    }

    let (head, tail) = integer.split_at(integer.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// A share of a total, always shown with one decimal: `60.0%`
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Percentage(pub Figure);

impl Display for Percentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut value = self.0.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
        value.rescale(1);
        write!(f, "{}%", value)
    }
}

impl Debug for Percentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}
