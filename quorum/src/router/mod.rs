pub mod disclosures;
pub mod esg;
pub mod leadership;
pub mod scorecard;
pub mod translate;

use quorum_core::{Capability, QuorumError};

/// Collapse a set of provider errors into a uniform `QuorumError` outcome.
///
/// Rules:
/// - If `attempted_any` is false → `Unsupported(capability)`.
/// - If all errors are `ProviderTimeout` → `AllProvidersTimedOut(capability)`.
/// - If `not_found_what` is `Some` and all errors are `NotFound` → `NotFound(what)`.
/// - Else → `AllProvidersFailed(errors)`.
pub fn collapse_errors(
    capability: Capability,
    attempted_any: bool,
    errors: Vec<QuorumError>,
    not_found_what: Option<String>,
) -> QuorumError {
    if !attempted_any {
        return QuorumError::unsupported(capability.to_string());
    }
    if !errors.is_empty()
        && errors
            .iter()
            .all(|e| matches!(e, QuorumError::ProviderTimeout { .. }))
    {
        return QuorumError::AllProvidersTimedOut {
            capability: capability.to_string(),
        };
    }
    if let Some(what) = not_found_what
        && !errors.is_empty()
        && errors
            .iter()
            .all(|e| matches!(e, QuorumError::NotFound { .. }))
    {
        return QuorumError::not_found(what);
    }
    QuorumError::AllProvidersFailed(errors)
}
