//! Rejection reasons for account operations.

use std::fmt;

use thiserror::Error;

use crate::Amount;

/// Why an operation left the account unchanged.
///
/// Rejections are outcomes, not failures: the transition still succeeds and
/// returns the prior record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("account is not active")]
    Inactive,

    #[error("a loan of {loan} is already outstanding")]
    LoanOutstanding { loan: Amount },

    #[error("insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds { balance: Amount, requested: Amount },

    #[error("payment {payment} exceeds outstanding loan {loan}")]
    PaymentExceedsLoan { loan: Amount, payment: Amount },

    #[error("account cannot close with balance {balance} and loan {loan}")]
    CloseBlocked { balance: Amount, loan: Amount },
}

impl Rejection {
    /// User-facing advisory for the rejections that announce themselves.
    /// The rest are silent.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            Rejection::InsufficientFunds { .. } => Some(Notice::new("Not enough money!")),
            Rejection::PaymentExceedsLoan { loan, .. } => {
                Some(Notice::new(format!("Current loan is {loan} $ !")))
            }
            Rejection::Inactive
            | Rejection::LoanOutstanding { .. }
            | Rejection::CloseBlocked { .. } => None,
        }
    }
}

/// Advisory message for the presentation layer. Never affects state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice(String);

impl Notice {
    fn new(message: impl Into<String>) -> Self {
        Notice(message.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
