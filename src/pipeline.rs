//! The declared interceptor chain for the request pipeline.
//!
//! The chain is data, not registration order: [`validate_chain`] rejects a
//! bad chain before any route or listener exists. Raw-body capture for the
//! payment webhook must come ahead of JSON body parsing; reversed, the
//! webhook would see a re-encoded body and every signature check would
//! fail.

use std::fmt;

/// One interceptor stage of the request pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Exact raw-byte body capture, scoped to the payment webhook path.
    RawBodyCapture,
    /// JSON body parsing for every other route group.
    JsonBodyParsing,
    /// Cookie parsing into the request context for the auth gate.
    CookieExtraction,
    /// Cross-origin policy enforcement.
    CorsPolicy,
}

impl Stage {
    const ALL: [Stage; 4] = [
        Stage::RawBodyCapture,
        Stage::JsonBodyParsing,
        Stage::CookieExtraction,
        Stage::CorsPolicy,
    ];
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::RawBodyCapture => "raw-body-capture",
            Stage::JsonBodyParsing => "json-body-parsing",
            Stage::CookieExtraction => "cookie-extraction",
            Stage::CorsPolicy => "cors-policy",
        };
        f.write_str(name)
    }
}

/// The canonical chain the server runs with.
pub const STANDARD_CHAIN: [Stage; 4] = [
    Stage::RawBodyCapture,
    Stage::JsonBodyParsing,
    Stage::CookieExtraction,
    Stage::CorsPolicy,
];

/// Rejected chain shapes. Construction-time only; never seen by a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    MissingStage(Stage),
    DuplicateStage(Stage),
    /// JSON parsing was ordered ahead of raw-body capture.
    RawBodyAfterJson,
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::MissingStage(stage) => {
                write!(f, "pipeline chain is missing the {stage} stage")
            }
            PipelineError::DuplicateStage(stage) => {
                write!(f, "pipeline chain lists the {stage} stage twice")
            }
            PipelineError::RawBodyAfterJson => {
                write!(f, "raw-body capture must be installed before JSON body parsing")
            }
        }
    }
}

impl std::error::Error for PipelineError {}

/// Checks the structural invariants of an interceptor chain: every stage
/// present exactly once, and raw-body capture ahead of JSON parsing.
pub fn validate_chain(stages: &[Stage]) -> Result<(), PipelineError> {
    for stage in Stage::ALL {
        match stages.iter().filter(|s| **s == stage).count() {
            0 => return Err(PipelineError::MissingStage(stage)),
            1 => {}
            _ => return Err(PipelineError::DuplicateStage(stage)),
        }
    }

    let raw = stages.iter().position(|s| *s == Stage::RawBodyCapture);
    let json = stages.iter().position(|s| *s == Stage::JsonBodyParsing);

    if let (Some(raw), Some(json)) = (raw, json) {
        if raw > json {
            return Err(PipelineError::RawBodyAfterJson);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_chain_is_valid() {
        assert_eq!(validate_chain(&STANDARD_CHAIN), Ok(()));
    }

    #[test]
    fn json_before_raw_body_is_rejected() {
        let chain = [
            Stage::JsonBodyParsing,
            Stage::RawBodyCapture,
            Stage::CookieExtraction,
            Stage::CorsPolicy,
        ];

        assert_eq!(validate_chain(&chain), Err(PipelineError::RawBodyAfterJson));
    }

    #[test]
    fn missing_stage_is_rejected() {
        let chain = [
            Stage::RawBodyCapture,
            Stage::JsonBodyParsing,
            Stage::CorsPolicy,
        ];

        assert_eq!(
            validate_chain(&chain),
            Err(PipelineError::MissingStage(Stage::CookieExtraction))
        );
    }

    #[test]
    fn duplicate_stage_is_rejected() {
        let chain = [
            Stage::RawBodyCapture,
            Stage::JsonBodyParsing,
            Stage::JsonBodyParsing,
            Stage::CookieExtraction,
            Stage::CorsPolicy,
        ];

        assert_eq!(
            validate_chain(&chain),
            Err(PipelineError::DuplicateStage(Stage::JsonBodyParsing))
        );
    }

    #[test]
    fn empty_chain_is_rejected() {
        assert!(validate_chain(&[]).is_err());
    }
}
