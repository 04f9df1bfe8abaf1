//! Standalone reporter: same as `tt report`, with its own `--delimiter`.

use tt::run_report;
use tt::ui::messages::error;

fn main() {
    if let Err(e) = run_report() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
