//! Print the tableaux of a small shape, then check that tableau enumeration and the Weyl
//! formula agree on every partition of n <= 5.
//!
//! Run with `RUST_LOG=debug` to see per-partition counts, or `RUST_LOG=trace` for every search
//! step.
use std::cell::Cell as Counter;
use std::process::ExitCode;

use schur_tableaux::csp::{LogTrace, SearchEvent, SearchTrace};
use schur_tableaux::prelude::*;

/// Counts pruned branches, forwarding everything to the log as well.
struct PruneCounter {
    prunes: Counter<usize>,
}

impl SearchTrace for PruneCounter {
    fn on_event(&self, event: SearchEvent) {
        if let SearchEvent::Prune { .. } = event {
            self.prunes.set(self.prunes.get() + 1);
        }
        LogTrace.on_event(event);
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let partition = Partition::from([2, 1]);
    let shape = partition.shape();
    let trace = PruneCounter {
        prunes: Counter::new(0),
    };
    let tableaux = enumerate_tableaux_with(&shape, 3, &SearchConfig::default(), &trace);
    println!(
        "shape {partition}, labels 1..=3: {} tableaux, {} constraints, {} pruned branches",
        tableaux.len(),
        count_constraints(&shape),
        trace.prunes.get()
    );
    for tableau in &tableaux {
        println!("{tableau}\n");
    }
    println!("s{partition}(x1, x2, x3) = {}\n", schur_by_enumeration(&partition, 3));

    let mut failures = 0;
    for n in 1..=5 {
        for partition in partitions_of(n) {
            match cross_validate(&partition, partition.len()) {
                Ok(s) => println!("s{partition} = {s}"),
                Err(err) => {
                    eprintln!("{err}");
                    failures += 1;
                }
            }
        }
    }

    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
