use crate::error::AnalysisError;

/// Report a failed command once, on the diagnostic log, and pick the exit
/// status.
///
/// The default filter lets `error` events through, so this is what the
/// user sees on stderr. Errors that are not an [`AnalysisError`] exit 1.
pub fn report_failure(err: &anyhow::Error) -> u8 {
    let code = err
        .downcast_ref::<AnalysisError>()
        .map(AnalysisError::exit_code)
        .unwrap_or(1);

    let chain = format!("{err:#}");
    tracing::error!(error = %chain, exit_code = code, "logscope failed");

    code
}
