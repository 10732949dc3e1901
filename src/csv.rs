use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::amount::AmountError;
use crate::{AccountRecord, Amount, Operation};

/// Errors that can occur when reading operation scripts or writing the account
#[derive(Debug, Error)]
pub enum CsvError {
    #[error("failed to open {}: {source}", path.display())]
    Open { path: PathBuf, source: csv::Error },

    #[error("line {line}: failed to parse row: {source}")]
    Parse { line: usize, source: csv::Error },

    #[error("line {line}: unrecognized operation '{op}'")]
    UnrecognizedOperation { line: usize, op: String },

    #[error("line {line}: {op} missing amount")]
    MissingAmount { line: usize, op: &'static str },

    #[error("line {line}: {op} discarded: {source}")]
    InvalidAmount {
        line: usize,
        op: &'static str,
        source: AmountError,
    },

    #[error("failed to write account: {0}")]
    Write(#[from] csv::Error),

    #[error("failed to flush account: {0}")]
    Flush(#[from] io::Error),
}

impl CsvError {
    /// Fatal errors abort the script; the rest only discard one row.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            CsvError::Open { .. } | CsvError::UnrecognizedOperation { .. }
        )
    }
}

#[derive(Debug, Deserialize)]
struct InputRow {
    op: String,
    amount: Option<String>,
}

#[derive(Debug, Serialize)]
struct OutputRow {
    balance: i64,
    loan: i64,
    active: bool,
    pending_deposit: i64,
    pending_withdrawal: i64,
    pending_loan_request: i64,
    pending_loan_payment: i64,
}

impl From<&AccountRecord> for OutputRow {
    fn from(record: &AccountRecord) -> Self {
        Self {
            balance: record.balance.value(),
            loan: record.loan.value(),
            active: record.is_active,
            pending_deposit: record.pending_deposit.value(),
            pending_withdrawal: record.pending_withdrawal.value(),
            pending_loan_request: record.pending_loan_request.value(),
            pending_loan_payment: record.pending_loan_payment.value(),
        }
    }
}

/// Read operations from a csv script with `op,amount` columns
pub fn read_operations(
    path: impl AsRef<Path>,
) -> Result<impl Iterator<Item = Result<Operation, CsvError>>, CsvError> {
    let path = path.as_ref();
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|source| CsvError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(reader
        .into_deserialize::<InputRow>()
        .enumerate()
        .map(|(idx, result)| {
            let line = idx + 2; // 1-indexed, skip header
            let row = result.map_err(|source| CsvError::Parse { line, source })?;
            parse_row(line, row)
        }))
}

/// Map one row to an operation. `set_pending_*` rows need a non-negative whole amount.
fn parse_row(line: usize, row: InputRow) -> Result<Operation, CsvError> {
    type Stage = fn(Amount) -> Operation;

    let staged = |op: &'static str, stage: Stage| -> Result<Operation, CsvError> {
        let raw = row
            .amount
            .as_deref()
            .ok_or(CsvError::MissingAmount { line, op })?;
        let amount = raw
            .parse::<Amount>()
            .map_err(|source| CsvError::InvalidAmount { line, op, source })?;
        Ok(stage(amount))
    };

    match row.op.as_str() {
        "open_account" => Ok(Operation::OpenAccount),
        "deposit" => Ok(Operation::Deposit),
        "withdraw" => Ok(Operation::Withdraw),
        "request_loan" => Ok(Operation::RequestLoan),
        "pay_loan" => Ok(Operation::PayLoan),
        "close_account" => Ok(Operation::CloseAccount),
        "set_pending_deposit" => staged("set_pending_deposit", Operation::SetPendingDeposit),
        "set_pending_withdrawal" => {
            staged("set_pending_withdrawal", Operation::SetPendingWithdrawal)
        }
        "set_pending_loan_amount" => {
            staged("set_pending_loan_amount", Operation::SetPendingLoanAmount)
        }
        "set_pending_payment" => staged("set_pending_payment", Operation::SetPendingPayment),
        other => Err(CsvError::UnrecognizedOperation {
            line,
            op: other.to_string(),
        }),
    }
}

/// Write the account record as a single csv row
pub fn write_account(writer: impl io::Write, record: &AccountRecord) -> Result<(), CsvError> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.serialize(OutputRow::from(record))?;
    writer.flush()?;
    Ok(())
}
