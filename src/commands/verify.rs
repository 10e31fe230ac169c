//! Verification run entry point: preconditions, detection, dispatch.

use std::path::Path;
use tracing::info;

use crate::analyze::analyzer_for;
use crate::detect::detect_toolchain;
use crate::report::{ErrorReport, VerificationReport};
use crate::step::ShellRunner;

/// Run one verification pass over a service directory.
///
/// Precondition failures (missing path, unrecognized toolchain) become
/// error reports, not program errors: the report carries the verdict and
/// the caller derives the process exit status from it.
pub fn execute(service: &Path, deep: bool) -> VerificationReport {
    if !service.exists() {
        return VerificationReport::Error(ErrorReport::path_not_found(service));
    }

    let kind = detect_toolchain(service);
    info!(%kind, service = %service.display(), deep, "starting verification run");

    match analyzer_for(kind) {
        Some(analyzer) => VerificationReport::Run(analyzer.analyze(&ShellRunner, service, deep)),
        None => VerificationReport::Error(ErrorReport::unknown_toolchain()),
    }
}
