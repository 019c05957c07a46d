//! Rating submission rules.
//!
//! The displayed rating on a lawyer profile is derived, not incremental: the
//! storage layer recomputes the one-decimal mean from all stored ratings in
//! a single statement whenever a rating is upserted. This module only owns
//! the bounds a submitted value must satisfy.

/// Lowest accepted rating value.
pub const RATING_MIN: i16 = 0;
/// Highest accepted rating value.
pub const RATING_MAX: i16 = 5;

/// Validate that a submitted rating is within the accepted 0..=5 range.
pub fn validate_rating(rating: i16) -> Result<(), String> {
    if !(RATING_MIN..=RATING_MAX).contains(&rating) {
        return Err(format!(
            "Rating must be an integer between {RATING_MIN} and {RATING_MAX}"
        ));
    }
    Ok(())
}
