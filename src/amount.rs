use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Whole-unit money value.
///
/// Arithmetic saturates at the `i64` bounds so state transitions stay total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(i64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    /// Balance credited when an account is opened.
    pub const OPENING_DEPOSIT: Amount = Amount(500);

    pub const fn new(value: i64) -> Self {
        Amount(value)
    }

    pub const fn value(self) -> i64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

/// Reasons a user-supplied amount is discarded instead of staged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("amount is empty")]
    Empty,
    #[error("'{0}' is not a whole number")]
    NotNumeric(String),
    #[error("amount {0} is negative")]
    Negative(i64),
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AmountError::Empty);
        }
        let value: i64 = s
            .parse()
            .map_err(|_| AmountError::NotNumeric(s.to_string()))?;
        if value < 0 {
            return Err(AmountError::Negative(value));
        }
        Ok(Amount(value))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::ops::Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Amount(self.0.saturating_add(rhs.0))
    }
}

impl std::ops::Sub for Amount {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Amount(self.0.saturating_sub(rhs.0))
    }
}

impl std::ops::AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl std::ops::SubAssign for Amount {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_preserves_value() {
        assert_eq!(Amount::new(123).value(), 123);
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Amount::default(), Amount::ZERO);
        assert!(Amount::default().is_zero());
    }

    #[test]
    fn opening_deposit_is_500() {
        assert_eq!(Amount::OPENING_DEPOSIT, Amount::new(500));
    }

    #[test]
    fn parse_accepts_whole_numbers() {
        assert_eq!("200".parse::<Amount>(), Ok(Amount::new(200)));
        assert_eq!(" 0 ".parse::<Amount>(), Ok(Amount::ZERO));
    }

    #[test]
    fn parse_rejects_empty() {
        assert_eq!("".parse::<Amount>(), Err(AmountError::Empty));
        assert_eq!("   ".parse::<Amount>(), Err(AmountError::Empty));
    }

    #[test]
    fn parse_rejects_non_numeric() {
        assert_eq!(
            "abc".parse::<Amount>(),
            Err(AmountError::NotNumeric("abc".to_string()))
        );
        // fractional amounts are not whole units
        assert_eq!(
            "10.5".parse::<Amount>(),
            Err(AmountError::NotNumeric("10.5".to_string()))
        );
    }

    #[test]
    fn parse_rejects_negative() {
        assert_eq!("-5".parse::<Amount>(), Err(AmountError::Negative(-5)));
    }

    #[test]
    fn display_formats_plain_integer() {
        assert_eq!(Amount::new(700).to_string(), "700");
        assert_eq!(Amount::new(-300).to_string(), "-300");
        assert_eq!(Amount::ZERO.to_string(), "0");
    }

    #[test]
    fn add_and_sub() {
        let a = Amount::new(100);
        let b = Amount::new(30);
        assert_eq!(a + b, Amount::new(130));
        assert_eq!(a - b, Amount::new(70));
        assert_eq!(b - a, Amount::new(-70));
    }

    #[test]
    fn assign_ops() {
        let mut a = Amount::new(100);
        a += Amount::new(50);
        assert_eq!(a, Amount::new(150));
        a -= Amount::new(200);
        assert_eq!(a, Amount::new(-50));
    }

    #[test]
    fn arithmetic_saturates() {
        assert_eq!(Amount::new(i64::MAX) + Amount::new(1), Amount::new(i64::MAX));
        assert_eq!(Amount::new(i64::MIN) - Amount::new(1), Amount::new(i64::MIN));
    }

    #[test]
    fn ordering() {
        assert!(Amount::new(-1) < Amount::ZERO);
        assert!(Amount::ZERO < Amount::new(1));
    }
}
