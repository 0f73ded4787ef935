//! One module invocation: arguments in, result document out.

use tracing::{info, warn};

use crate::converge::converge;
use crate::io::args::{ArgsSource, load_args};
use crate::output::ModuleOutput;

/// Run the module once. Never fails: errors become failure documents.
///
/// `force_check` turns on check mode regardless of the argument document.
pub fn run_module(source: &ArgsSource, force_check: bool) -> ModuleOutput {
    let args = match load_args(source) {
        Ok(args) => args,
        Err(err) => {
            warn!(error = %format!("{:#}", err), "rejecting module arguments");
            return ModuleOutput::failure(format!("{:#}", err), None);
        }
    };
    let request = args.into_request(force_check);
    info!(path = %request.path.display(), dry_run = request.dry_run, "converging");

    match converge(&request) {
        Ok(outcome) => ModuleOutput::success(&outcome),
        Err(err) => {
            let err = anyhow::Error::new(err);
            warn!(error = %format!("{:#}", err), "convergence failed");
            ModuleOutput::failure(format!("{:#}", err), Some(&request))
        }
    }
}
