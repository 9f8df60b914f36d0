use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE_MIN_LENGTH: usize = 30;
pub const DEFAULT_TITLE_MAX_LENGTH: usize = 60;
pub const DEFAULT_DESCRIPTION_MIN_LENGTH: usize = 120;
pub const DEFAULT_DESCRIPTION_MAX_LENGTH: usize = 160;
pub const DEFAULT_TWITTER_TITLE_MAX_LENGTH: usize = 70;
pub const DEFAULT_TWITTER_DESCRIPTION_MAX_LENGTH: usize = 200;

/// Site-wide SEO thresholds supplied by the settings store.
///
/// Every field is optional on the wire; missing values take the documented defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeoSettings {
    pub title_min_length: usize,
    pub title_max_length: usize,
    pub description_min_length: usize,
    pub description_max_length: usize,
    pub twitter_title_max_length: usize,
    pub twitter_description_max_length: usize,
    /// Titles beyond the maximum are errors rather than overflow warnings.
    pub restrict_title_length: bool,
    pub restrict_description_length: bool,
}

impl Default for SeoSettings {
    fn default() -> Self {
        Self {
            title_min_length: DEFAULT_TITLE_MIN_LENGTH,
            title_max_length: DEFAULT_TITLE_MAX_LENGTH,
            description_min_length: DEFAULT_DESCRIPTION_MIN_LENGTH,
            description_max_length: DEFAULT_DESCRIPTION_MAX_LENGTH,
            twitter_title_max_length: DEFAULT_TWITTER_TITLE_MAX_LENGTH,
            twitter_description_max_length: DEFAULT_TWITTER_DESCRIPTION_MAX_LENGTH,
            restrict_title_length: false,
            restrict_description_length: false,
        }
    }
}

impl SeoSettings {
    /// Resolves an optional snapshot, falling back to defaults.
    pub fn resolve(settings: Option<&Self>) -> Self {
        settings.copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let settings: SeoSettings =
            serde_json::from_str(r#"{"titleMaxLength": 70, "restrictTitleLength": true}"#)
                .expect("settings parse");

        assert_eq!(settings.title_max_length, 70);
        assert!(settings.restrict_title_length);
        assert_eq!(settings.title_min_length, DEFAULT_TITLE_MIN_LENGTH);
        assert_eq!(
            settings.description_max_length,
            DEFAULT_DESCRIPTION_MAX_LENGTH
        );
        assert!(!settings.restrict_description_length);
    }

    #[test]
    fn resolve_without_snapshot_uses_defaults() {
        assert_eq!(SeoSettings::resolve(None), SeoSettings::default());
    }
}
