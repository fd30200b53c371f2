//! Theme phase checks.
//!
//! A theme moves through submission, voting and review phases, each closed
//! by its own deadline.

use crate::error::CoreError;
use crate::types::Timestamp;

/// Deadlines must not run backwards: submission ≤ voting ≤ review.
pub fn validate_deadlines(
    submission: Option<Timestamp>,
    voting: Timestamp,
    review: Option<Timestamp>,
) -> Result<(), CoreError> {
    if let Some(submission) = submission {
        if submission > voting {
            return Err(CoreError::Validation(
                "submission_deadline must not be after voting_deadline".to_string(),
            ));
        }
    }
    if let Some(review) = review {
        if review < voting {
            return Err(CoreError::Validation(
                "review_deadline must not be before voting_deadline".to_string(),
            ));
        }
    }
    Ok(())
}

/// Ideas may be submitted until the submission deadline (or, without one,
/// until voting closes).
pub fn ensure_submission_open(
    now: Timestamp,
    submission: Option<Timestamp>,
    voting: Timestamp,
) -> Result<(), CoreError> {
    if now < submission.unwrap_or(voting) {
        Ok(())
    } else {
        Err(CoreError::Precondition(
            "Idea submission for this theme has closed".to_string(),
        ))
    }
}

/// Votes are accepted strictly before the voting deadline.
pub fn ensure_voting_open(now: Timestamp, voting: Timestamp) -> Result<(), CoreError> {
    if now < voting {
        Ok(())
    } else {
        Err(CoreError::Precondition(
            "Voting for this theme has closed".to_string(),
        ))
    }
}
