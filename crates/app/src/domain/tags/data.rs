//! Tag Data

use crate::domain::tags::{errors::TagsServiceError, records::TagUuid};

pub const TAG_NAME_MAX_LENGTH: usize = 32;
pub const TAG_SLUG_MAX_LENGTH: usize = 32;

/// New Tag Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewTag {
    pub uuid: TagUuid,
    pub name: String,
    pub slug: String,
}

impl NewTag {
    /// # Errors
    ///
    /// Returns [`TagsServiceError::Validation`] for an empty name or a malformed slug.
    pub fn validate(&self) -> Result<(), TagsServiceError> {
        let name_len = self.name.chars().count();

        if name_len == 0 || name_len > TAG_NAME_MAX_LENGTH {
            return Err(TagsServiceError::Validation(
                "tag name must be between 1 and 32 characters".to_string(),
            ));
        }

        if !is_valid_slug(&self.slug) {
            return Err(TagsServiceError::Validation(format!(
                "tag slug {:?} must be 1 to 32 letters, digits, '-' or '_'",
                self.slug
            )));
        }

        Ok(())
    }
}

/// Slugs are `[-a-zA-Z0-9_]{1,32}`.
#[must_use]
pub fn is_valid_slug(slug: &str) -> bool {
    (1..=TAG_SLUG_MAX_LENGTH).contains(&slug.len())
        && slug
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_accepts_letters_digits_dash_and_underscore() {
        assert!(is_valid_slug("breakfast"));
        assert!(is_valid_slug("low-carb_2"));
        assert!(is_valid_slug(&"a".repeat(TAG_SLUG_MAX_LENGTH)));
    }

    #[test]
    fn slug_rejects_empty_overlong_and_punctuation() {
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug(&"a".repeat(TAG_SLUG_MAX_LENGTH + 1)));
        assert!(!is_valid_slug("has space"));
        assert!(!is_valid_slug("dinner!"));
        assert!(!is_valid_slug("завтрак"));
    }

    #[test]
    fn empty_name_is_rejected() {
        let tag = NewTag {
            uuid: TagUuid::new(),
            name: String::new(),
            slug: "lunch".to_string(),
        };

        assert!(matches!(
            tag.validate(),
            Err(TagsServiceError::Validation(_))
        ));
    }
}
