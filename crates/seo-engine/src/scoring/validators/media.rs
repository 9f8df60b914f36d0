use std::sync::LazyLock;

use regex::Regex;

use super::{matches, value_relation, Pattern};
use crate::scoring::{ValidationResult, Validator};

static IMAGE_EXTENSION_PATTERN: Pattern =
    LazyLock::new(|| Regex::new(r"(?i)\.(png|svg|jpg|jpeg|webp)$").ok());

const SOCIAL_IMAGE_WIDTH: f64 = 1200.0;
const SOCIAL_IMAGE_HEIGHT: f64 = 630.0;
const MIN_SOCIAL_IMAGE_WIDTH: f64 = 600.0;
const MIN_SOCIAL_IMAGE_HEIGHT: f64 = 314.0;

/// Extension check on the URL path; query strings and fragments are ignored.
pub fn has_allowed_image_extension(url: &str) -> bool {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    matches(&IMAGE_EXTENSION_PATTERN, path)
}

/// Media relation presence plus format allow-list.
pub fn image(label: &'static str, required: bool) -> Validator {
    Validator::new(move |value, _, _| {
        match value_relation(value).and_then(|media| media.url()) {
            Some(url) if has_allowed_image_extension(url) => {
                ValidationResult::good(10, format!("{label} is set"))
            }
            Some(_) => ValidationResult::warning(
                5,
                format!("{label} should be PNG, SVG, JPG or WebP"),
            ),
            None if required => ValidationResult::error(0, format!("{label} is missing")),
            None => ValidationResult::warning(0, format!("{label} is not set")),
        }
    })
}

/// Alt text only counts once the image it describes exists.
pub fn image_alt_text(label: &'static str) -> Validator {
    Validator::new(move |value, _, _| {
        let Some(media) = value_relation(value).filter(|media| media.url().is_some()) else {
            return ValidationResult::info(format!("No image uploaded; {label} not needed"));
        };
        match media.text("altText") {
            Some(_) => ValidationResult::good(5, format!("{label} is set")),
            None => ValidationResult::error(
                0,
                format!("{label} is missing for an uploaded image"),
            ),
        }
    })
}

/// Social sharing images score best at exactly 1200x630.
pub fn image_dimensions() -> Validator {
    Validator::new(|value, _, _| {
        let media = value_relation(value);
        let has_image = media.and_then(|media| media.url()).is_some();
        let width = media.and_then(|media| media.number("width"));
        let height = media.and_then(|media| media.number("height"));

        match (width, height) {
            (Some(width), Some(height)) => {
                if width == SOCIAL_IMAGE_WIDTH && height == SOCIAL_IMAGE_HEIGHT {
                    ValidationResult::good(5, "Image is the recommended 1200x630")
                } else if width >= MIN_SOCIAL_IMAGE_WIDTH && height >= MIN_SOCIAL_IMAGE_HEIGHT {
                    ValidationResult::warning(
                        3,
                        format!("Image is {width}x{height}; 1200x630 is recommended"),
                    )
                } else {
                    ValidationResult::warning(
                        1,
                        format!("Image is {width}x{height}; below the 600x314 minimum"),
                    )
                }
            }
            (Some(_), None) | (None, Some(_)) => {
                ValidationResult::warning(1, "Only one image dimension is known")
            }
            (None, None) if has_image => {
                ValidationResult::warning(0, "Image dimensions are unknown")
            }
            (None, None) => ValidationResult::info("No image uploaded; dimensions not checked"),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_check_ignores_query_and_case() {
        assert!(has_allowed_image_extension("https://cdn.acme.com/logo.PNG?v=3"));
        assert!(has_allowed_image_extension("https://cdn.acme.com/hero.webp#top"));
        assert!(!has_allowed_image_extension("https://cdn.acme.com/logo.gif"));
        assert!(!has_allowed_image_extension("https://cdn.acme.com/logo"));
    }
}
