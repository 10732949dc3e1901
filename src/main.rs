use std::env;
use std::io;
use std::process::ExitCode;

use bank_acct::AccountStateMachine;
use bank_acct::csv::{CsvError, read_operations, write_account};
use tokio_stream::wrappers::ReceiverStream;
use tracing::level_filters::LevelFilter;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(LevelFilter::WARN.into()))
        .with_writer(std::io::stderr)
        .init();

    let Some(path) = env::args().nth(1) else {
        eprintln!("usage: bank-acct <operations.csv>");
        return ExitCode::from(2);
    };

    if !path.ends_with(".csv") {
        warn!(path, "input file seems to not be a csv file");
    }

    let mut machine = AccountStateMachine::new();
    let (op_sender, op_receiver) = tokio::sync::mpsc::channel(16);

    // single producer: the machine sees operations in script order
    let reader = tokio::spawn(async move {
        for result in read_operations(&path)? {
            match result {
                Ok(op) => {
                    if op_sender.send(op).await.is_err() {
                        break;
                    }
                }
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    warn!("{e}");
                }
            }
        }
        Ok::<(), CsvError>(())
    });

    machine.run(ReceiverStream::new(op_receiver)).await;

    match reader.await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            error!("operation reader failed: {e}");
            return ExitCode::FAILURE;
        }
    }

    if let Err(e) = write_account(io::stdout().lock(), machine.state()) {
        error!("{e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
