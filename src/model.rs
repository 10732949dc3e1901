//! Core domain types for the account state machine.

use std::fmt;

use crate::Amount;

/// A user-requested account action or a pending-amount update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Activate the account with the opening deposit.
    OpenAccount,
    /// Credit the pending deposit to the balance.
    Deposit,
    /// Stage the amount the next `Deposit` credits.
    SetPendingDeposit(Amount),
    /// Debit the pending withdrawal from the balance.
    Withdraw,
    /// Stage the amount the next `Withdraw` debits.
    SetPendingWithdrawal(Amount),
    /// Take out the pending loan amount, if no loan is outstanding.
    RequestLoan,
    /// Stage the amount the next `RequestLoan` borrows.
    SetPendingLoanAmount(Amount),
    /// Pay down the outstanding loan by the pending payment.
    PayLoan,
    /// Stage the amount the next `PayLoan` repays.
    SetPendingPayment(Amount),
    /// Deactivate a settled account.
    CloseAccount,
}

impl Operation {
    /// Stable snake_case name, shared by logs and operation scripts.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::OpenAccount => "open_account",
            Operation::Deposit => "deposit",
            Operation::SetPendingDeposit(_) => "set_pending_deposit",
            Operation::Withdraw => "withdraw",
            Operation::SetPendingWithdrawal(_) => "set_pending_withdrawal",
            Operation::RequestLoan => "request_loan",
            Operation::SetPendingLoanAmount(_) => "set_pending_loan_amount",
            Operation::PayLoan => "pay_loan",
            Operation::SetPendingPayment(_) => "set_pending_payment",
            Operation::CloseAccount => "close_account",
        }
    }

    /// The staged amount carried by `SetPending*` operations.
    pub fn amount(&self) -> Option<Amount> {
        match *self {
            Operation::SetPendingDeposit(amount)
            | Operation::SetPendingWithdrawal(amount)
            | Operation::SetPendingLoanAmount(amount)
            | Operation::SetPendingPayment(amount) => Some(amount),
            _ => None,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.amount() {
            Some(amount) => write!(f, "{}({amount})", self.name()),
            None => f.write_str(self.name()),
        }
    }
}
