//! Deferred backend setup example
//!
//! Demonstrates handing out named loggers before the backend exists and
//! installing the backend later.
//!
//! Run with: cargo run --example deferred_setup

use delegating_logger::prelude::*;
use delegating_logger::info;
use std::sync::Arc;

struct Controller {
    log: Logger,
}

impl Controller {
    fn new(ctx: &LogContext) -> Self {
        Self {
            log: from_context(ctx, &kvs!["controller" => "deployment"]).with_name("reconciler"),
        }
    }

    fn reconcile(&self, name: &str) {
        info!(self.log, "reconciling {}", name);
    }
}

fn main() -> Result<()> {
    println!("=== Delegating Logger - Deferred Setup Example ===\n");

    // Components grab their loggers before any backend is configured
    let controller = Controller::new(&LogContext::new());
    controller.reconcile("web-0"); // discarded: no backend yet

    // The backend is chosen later, e.g. after parsing flags
    let recorder = RecordingSink::new();
    set_logger(Logger::new(Arc::new(recorder.clone())));

    controller.reconcile("web-1");
    controller.reconcile("web-2");

    for entry in recorder.entries() {
        println!("{}", entry);
    }

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
