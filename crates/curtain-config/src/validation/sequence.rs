//! Sequence timing validation.

use crate::schema::{CurtainConfig, MAX_DELAY_MS};

use super::helpers::validate_range;

/// Delays must be in range and strictly increasing.
pub(crate) fn validate_sequence(errors: &mut Vec<String>, config: &CurtainConfig) {
    let seq = &config.sequence;
    validate_range(
        errors,
        "sequence.reveal_delay_ms",
        seq.reveal_delay_ms,
        0,
        MAX_DELAY_MS,
    );
    validate_range(
        errors,
        "sequence.status_delay_ms",
        seq.status_delay_ms,
        0,
        MAX_DELAY_MS,
    );
    validate_range(
        errors,
        "sequence.complete_delay_ms",
        seq.complete_delay_ms,
        0,
        MAX_DELAY_MS,
    );

    if seq.reveal_delay_ms >= seq.status_delay_ms {
        errors.push(format!(
            "sequence.reveal_delay_ms ({}) must be less than sequence.status_delay_ms ({})",
            seq.reveal_delay_ms, seq.status_delay_ms
        ));
    }
    if seq.status_delay_ms >= seq.complete_delay_ms {
        errors.push(format!(
            "sequence.status_delay_ms ({}) must be less than sequence.complete_delay_ms ({})",
            seq.status_delay_ms, seq.complete_delay_ms
        ));
    }
}
