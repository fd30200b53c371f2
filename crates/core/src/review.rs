//! Peer review constants and validation.

use crate::error::CoreError;
use crate::types::DbId;

/// Lowest accepted rating.
pub const MIN_RATING: i16 = 1;

/// Highest accepted rating.
pub const MAX_RATING: i16 = 5;

/// Maximum length of a review comment.
pub const MAX_COMMENT_LENGTH: usize = 5_000;

/// Validate a rating value.
pub fn validate_rating(rating: i16) -> Result<(), CoreError> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Rating must be between {MIN_RATING} and {MAX_RATING}, got {rating}"
        )))
    }
}

/// A student may not review themselves.
pub fn validate_review_pair(reviewer_id: DbId, reviewee_id: DbId) -> Result<(), CoreError> {
    if reviewer_id == reviewee_id {
        return Err(CoreError::Validation(
            "Reviewer and reviewee must be different users".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn rating_bounds() {
        assert!(validate_rating(1).is_ok());
        assert!(validate_rating(5).is_ok());
        assert_matches!(validate_rating(0), Err(CoreError::Validation(_)));
        assert_matches!(validate_rating(6), Err(CoreError::Validation(_)));
    }

    #[test]
    fn self_review_rejected() {
        assert_matches!(validate_review_pair(3, 3), Err(CoreError::Validation(_)));
        assert!(validate_review_pair(3, 4).is_ok());
    }
}
