use crate::Amount;

/// The single account: balances, activation flag and the four staged amounts.
///
/// The default value is the initial record: everything zero, inactive.
/// A successful close returns the account to exactly this shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccountRecord {
    pub balance: Amount,
    /// Outstanding loan; zero means no active loan.
    pub loan: Amount,
    pub is_active: bool,
    pub pending_deposit: Amount,
    pub pending_withdrawal: Amount,
    pub pending_loan_request: Amount,
    pub pending_loan_payment: Amount,
}

impl AccountRecord {
    pub fn has_loan(&self) -> bool {
        !self.loan.is_zero()
    }

    /// Closing requires a zero balance and no loan.
    pub fn is_settled(&self) -> bool {
        self.balance.is_zero() && self.loan.is_zero()
    }
}
