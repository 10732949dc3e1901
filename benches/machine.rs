use bank_acct::{AccountRecord, AccountStateMachine, Amount, Operation, apply};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

/// Generates a full account lifecycle, repeated `cycles` times.
///
/// Per cycle: open, deposit 200, borrow 300, repay 300, withdraw everything, close.
/// Every operation in the cycle is applied (none are rejected).
pub struct LifecycleGenerator {
    remaining: u32,
    step: usize,
}

const CYCLE: [Operation; 10] = [
    Operation::OpenAccount,
    Operation::SetPendingDeposit(Amount::new(200)),
    Operation::Deposit,
    Operation::SetPendingLoanAmount(Amount::new(300)),
    Operation::RequestLoan,
    Operation::SetPendingPayment(Amount::new(300)),
    Operation::PayLoan,
    Operation::SetPendingWithdrawal(Amount::new(700)),
    Operation::Withdraw,
    Operation::CloseAccount,
];

impl LifecycleGenerator {
    pub fn new(cycles: u32) -> Self {
        Self {
            remaining: cycles,
            step: 0,
        }
    }
}

impl Iterator for LifecycleGenerator {
    type Item = Operation;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let op = CYCLE[self.step];
        self.step += 1;
        if self.step == CYCLE.len() {
            self.step = 0;
            self.remaining -= 1;
        }

        Some(op)
    }
}

fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply");

    for cycles in [1_000u32, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(cycles), &cycles, |b, &cycles| {
            b.iter(|| {
                LifecycleGenerator::new(cycles)
                    .fold(AccountRecord::default(), |state, op| {
                        black_box(apply(state, op)).state
                    })
            });
        });
    }

    group.finish();
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");

    // includes log macro overhead with no subscriber installed
    for cycles in [1_000u32, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(cycles), &cycles, |b, &cycles| {
            b.iter(|| {
                let mut machine = AccountStateMachine::new();
                for op in LifecycleGenerator::new(cycles) {
                    let _ = black_box(machine.dispatch(op));
                }
                machine
            });
        });
    }

    group.finish();
}

fn bench_rejections(c: &mut Criterion) {
    // inactive account: every operation hits the guard clause
    c.bench_function("rejected_100k", |b| {
        b.iter(|| {
            let mut state = AccountRecord::default();
            for _ in 0..100_000 {
                state = black_box(apply(state, Operation::Withdraw)).state;
            }
            state
        });
    });
}

criterion_group!(benches, bench_apply, bench_dispatch, bench_rejections);
criterion_main!(benches);
