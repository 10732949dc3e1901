//! Account state machine.
//!
//! [`apply`] is the pure transition function: it takes the current record and an
//! operation and returns the next record, never mutating in place.
//! [`AccountStateMachine`] owns the record, threads it through `apply` and logs
//! each outcome. Also supports an async stream of operations.

use tokio_stream::{Stream, StreamExt};
use tracing::{info, warn};

use crate::Amount;
use crate::model::Operation;

mod state;
pub use state::AccountRecord;

mod error;
pub use error::{Notice, Rejection};

/// Result of applying one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// The next record; identical to the prior one when rejected.
    pub state: AccountRecord,
    pub rejection: Option<Rejection>,
}

impl Transition {
    fn applied(state: AccountRecord) -> Self {
        Self {
            state,
            rejection: None,
        }
    }

    fn rejected(state: AccountRecord, rejection: Rejection) -> Self {
        Self {
            state,
            rejection: Some(rejection),
        }
    }

    pub fn is_applied(&self) -> bool {
        self.rejection.is_none()
    }

    /// Advisory message to surface to the user, if any.
    pub fn notice(&self) -> Option<Notice> {
        self.rejection.as_ref().and_then(Rejection::notice)
    }
}

/// Compute the record that follows `state` under `op`.
///
/// Every operation except [`Operation::OpenAccount`] is an identity transition on
/// an inactive account.
///
/// Two behaviors are kept as-is:
/// - `OpenAccount` on an already active account resets the balance to the
///   opening deposit, discarding the previous balance. The loan is left untouched.
/// - `PayLoan` debits the whole pre-payment loan from the balance, even when the
///   payment only covers part of it.
pub fn apply(state: AccountRecord, op: Operation) -> Transition {
    if !state.is_active && op != Operation::OpenAccount {
        return Transition::rejected(state, Rejection::Inactive);
    }

    match op {
        Operation::OpenAccount => Transition::applied(AccountRecord {
            balance: Amount::OPENING_DEPOSIT,
            is_active: true,
            ..state
        }),
        Operation::Deposit => Transition::applied(AccountRecord {
            balance: state.balance + state.pending_deposit,
            ..state
        }),
        Operation::SetPendingDeposit(amount) => Transition::applied(AccountRecord {
            pending_deposit: amount,
            ..state
        }),
        Operation::Withdraw => {
            if state.pending_withdrawal > state.balance {
                return Transition::rejected(
                    state,
                    Rejection::InsufficientFunds {
                        balance: state.balance,
                        requested: state.pending_withdrawal,
                    },
                );
            }
            Transition::applied(AccountRecord {
                balance: state.balance - state.pending_withdrawal,
                ..state
            })
        }
        Operation::SetPendingWithdrawal(amount) => Transition::applied(AccountRecord {
            pending_withdrawal: amount,
            ..state
        }),
        Operation::RequestLoan => {
            if state.has_loan() {
                let rejection = Rejection::LoanOutstanding { loan: state.loan };
                return Transition::rejected(state, rejection);
            }
            Transition::applied(AccountRecord {
                loan: state.pending_loan_request,
                balance: state.balance + state.pending_loan_request,
                ..state
            })
        }
        Operation::SetPendingLoanAmount(amount) => Transition::applied(AccountRecord {
            pending_loan_request: amount,
            ..state
        }),
        Operation::PayLoan => {
            if state.pending_loan_payment > state.loan {
                return Transition::rejected(
                    state,
                    Rejection::PaymentExceedsLoan {
                        loan: state.loan,
                        payment: state.pending_loan_payment,
                    },
                );
            }
            Transition::applied(AccountRecord {
                loan: state.loan - state.pending_loan_payment,
                // the full prior loan, not the payment
                balance: state.balance - state.loan,
                ..state
            })
        }
        Operation::SetPendingPayment(amount) => Transition::applied(AccountRecord {
            pending_loan_payment: amount,
            ..state
        }),
        Operation::CloseAccount => {
            if !state.is_settled() {
                return Transition::rejected(
                    state,
                    Rejection::CloseBlocked {
                        balance: state.balance,
                        loan: state.loan,
                    },
                );
            }
            Transition::applied(AccountRecord {
                pending_deposit: Amount::ZERO,
                pending_withdrawal: Amount::ZERO,
                pending_loan_request: Amount::ZERO,
                pending_loan_payment: Amount::ZERO,
                is_active: false,
                ..state
            })
        }
    }
}

/// Owner of the account record.
///
/// Calls must be serialized by the holder; `run` does so by draining a single
/// stream in order.
#[derive(Debug, Default)]
pub struct AccountStateMachine {
    record: AccountRecord,
}

/// Public API
impl AccountStateMachine {
    pub fn new() -> Self {
        Self {
            record: AccountRecord::default(),
        }
    }

    /// Resume from an existing record.
    pub fn with_state(record: AccountRecord) -> Self {
        Self { record }
    }

    /// Return the current record.
    pub fn state(&self) -> &AccountRecord {
        &self.record
    }

    /// Apply a single operation on top of the current record and keep the result.
    pub fn dispatch(&mut self, op: Operation) -> Transition {
        let transition = apply(self.record, op);
        Self::log_transition(op, &transition);
        self.record = transition.state;
        transition
    }

    /// Run the machine with the given operation stream
    pub async fn run(&mut self, mut stream: impl Stream<Item = Operation> + Unpin) {
        while let Some(op) = stream.next().await {
            // rejections never stop the run; they are logged by `dispatch`
            let _ = self.dispatch(op);
        }
    }
}

/// Private API
impl AccountStateMachine {
    fn log_transition(op: Operation, transition: &Transition) {
        let state = &transition.state;
        match (&transition.rejection, transition.notice()) {
            (None, _) => {
                info!(
                    balance = %state.balance,
                    loan = %state.loan,
                    active = state.is_active,
                    "{op} applied"
                );
            }
            (Some(rejection), Some(notice)) => {
                warn!(op = op.name(), reason = %rejection, "{notice}");
            }
            (Some(rejection), None) => {
                info!(reason = %rejection, "{op} skipped");
            }
        }
    }
}
