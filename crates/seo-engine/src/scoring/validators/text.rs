use std::sync::LazyLock;

use regex::Regex;

use super::{char_len, matches, value_text, Pattern};
use crate::scoring::{ValidationResult, Validator};
use crate::settings::SeoSettings;

static SLUG_PATTERN: Pattern =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").ok());

const OPTIMAL_SCORE: u32 = 15;
const SHORT_SCORE: u32 = 10;
const SLIGHTLY_LONG_SCORE: u32 = 12;
const TOO_LONG_SCORE: u32 = 8;
const TOO_SHORT_SCORE: u32 = 5;

const TITLE_OPTIMAL_SPAN: usize = 10;
const TITLE_OVERFLOW_SPAN: usize = 10;
const DESCRIPTION_OPTIMAL_SPAN: usize = 10;
const DESCRIPTION_OVERFLOW_SPAN: usize = 20;

const PROSE_MIN_LENGTH: usize = 50;
const BIO_RICH_LENGTH: usize = 150;

/// Length tiers for titles and descriptions derived from a settings snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBands {
    pub min: usize,
    pub max: usize,
    pub optimal_span: usize,
    pub overflow_span: usize,
    /// Lengths past `max` are rejected outright.
    pub restrict: bool,
}

/// Tier a length falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthGrade {
    Empty,
    TooShort,
    Short,
    Optimal,
    SlightlyLong,
    TooLong,
    OverLimit,
}

impl LengthBands {
    pub fn title(settings: &SeoSettings) -> Self {
        Self {
            min: settings.title_min_length,
            max: settings.title_max_length,
            optimal_span: TITLE_OPTIMAL_SPAN,
            overflow_span: TITLE_OVERFLOW_SPAN,
            restrict: settings.restrict_title_length,
        }
    }

    pub fn description(settings: &SeoSettings) -> Self {
        Self {
            min: settings.description_min_length,
            max: settings.description_max_length,
            optimal_span: DESCRIPTION_OPTIMAL_SPAN,
            overflow_span: DESCRIPTION_OVERFLOW_SPAN,
            restrict: settings.restrict_description_length,
        }
    }

    /// Lower edge of the optimal window, never below `min`.
    pub fn optimal_floor(&self) -> usize {
        self.max.saturating_sub(self.optimal_span).max(self.min)
    }

    pub fn grade(&self, length: usize) -> LengthGrade {
        if length == 0 {
            LengthGrade::Empty
        } else if length < self.min {
            LengthGrade::TooShort
        } else if length < self.optimal_floor() {
            LengthGrade::Short
        } else if length <= self.max {
            LengthGrade::Optimal
        } else if self.restrict {
            LengthGrade::OverLimit
        } else if length <= self.max.saturating_add(self.overflow_span) {
            LengthGrade::SlightlyLong
        } else {
            LengthGrade::TooLong
        }
    }

    fn result(&self, label: &str, text: Option<&str>) -> ValidationResult {
        let length = text.map(char_len).unwrap_or(0);
        let floor = self.optimal_floor();
        match self.grade(length) {
            LengthGrade::Empty => ValidationResult::error(0, format!("{label} is missing")),
            LengthGrade::TooShort => ValidationResult::error(
                TOO_SHORT_SCORE,
                format!(
                    "{label} is too short ({length} characters, minimum {})",
                    self.min
                ),
            ),
            LengthGrade::Short => ValidationResult::warning(
                SHORT_SCORE,
                format!(
                    "{label} could be longer ({length} characters, aim for {floor}-{})",
                    self.max
                ),
            ),
            LengthGrade::Optimal => ValidationResult::good(
                OPTIMAL_SCORE,
                format!("{label} length is optimal ({length} characters)"),
            ),
            LengthGrade::SlightlyLong => ValidationResult::warning(
                SLIGHTLY_LONG_SCORE,
                format!(
                    "{label} is slightly long ({length} characters, may be truncated after {})",
                    self.max
                ),
            ),
            LengthGrade::TooLong => ValidationResult::warning(
                TOO_LONG_SCORE,
                format!("{label} is too long ({length} characters, will be truncated)"),
            ),
            LengthGrade::OverLimit => ValidationResult::error(
                0,
                format!(
                    "{label} exceeds the enforced maximum of {} characters ({length})",
                    self.max
                ),
            ),
        }
    }
}

/// Threshold rules read the evaluation's settings when given one, else the snapshot
/// captured when the rule was built.
fn effective(captured: &SeoSettings, runtime: Option<&SeoSettings>) -> SeoSettings {
    runtime.copied().unwrap_or(*captured)
}

pub fn seo_title(settings: Option<&SeoSettings>) -> Validator {
    let captured = SeoSettings::resolve(settings);
    Validator::new(move |value, _, runtime| {
        LengthBands::title(&effective(&captured, runtime)).result("SEO title", value_text(value))
    })
}

pub fn seo_description(settings: Option<&SeoSettings>) -> Validator {
    let captured = SeoSettings::resolve(settings);
    Validator::new(move |value, _, runtime| {
        LengthBands::description(&effective(&captured, runtime))
            .result("SEO description", value_text(value))
    })
}

pub fn twitter_title(settings: Option<&SeoSettings>) -> Validator {
    capped_text("Twitter title", "SEO title", SeoSettings::resolve(settings), |settings| {
        settings.twitter_title_max_length
    })
}

pub fn twitter_description(settings: Option<&SeoSettings>) -> Validator {
    capped_text(
        "Twitter description",
        "SEO description",
        SeoSettings::resolve(settings),
        |settings| settings.twitter_description_max_length,
    )
}

fn capped_text(
    label: &'static str,
    fallback: &'static str,
    captured: SeoSettings,
    max_length: fn(&SeoSettings) -> usize,
) -> Validator {
    Validator::new(move |value, _, runtime| match value_text(value) {
        None => ValidationResult::info(format!("{label} not set; the {fallback} is used instead")),
        Some(text) => {
            let max = max_length(&effective(&captured, runtime));
            let length = char_len(text);
            if length <= max {
                ValidationResult::good(5, format!("{label} fits within {max} characters"))
            } else {
                ValidationResult::warning(
                    2,
                    format!("{label} is {length} characters and will be cut at {max}"),
                )
            }
        }
    })
}

pub fn required_text(score: u32, label: &'static str) -> Validator {
    Validator::new(move |value, _, _| match value_text(value) {
        Some(_) => ValidationResult::good(score, format!("{label} is set")),
        None => ValidationResult::error(0, format!("{label} is required")),
    })
}

/// Presence check for fields that improve a listing but are not mandatory.
pub fn optional_text(score: u32, label: &'static str, hint: &'static str) -> Validator {
    Validator::new(move |value, _, _| match value_text(value) {
        Some(_) => ValidationResult::good(score, format!("{label} is set")),
        None => ValidationResult::warning(0, format!("{label} is missing; {hint}")),
    })
}

pub fn slug() -> Validator {
    Validator::new(|value, _, _| match value_text(value) {
        None => ValidationResult::error(0, "URL slug is required"),
        Some(text) if matches(&SLUG_PATTERN, text) => {
            ValidationResult::good(5, "URL slug is clean")
        }
        Some(_) => ValidationResult::warning(
            2,
            "URL slug should only contain lowercase letters, digits and single hyphens",
        ),
    })
}

pub fn prose(label: &'static str) -> Validator {
    Validator::new(move |value, _, _| match value_text(value).map(char_len) {
        None => ValidationResult::error(0, format!("{label} is missing")),
        Some(length) if length >= PROSE_MIN_LENGTH => {
            ValidationResult::good(10, format!("{label} is descriptive ({length} characters)"))
        }
        Some(length) => ValidationResult::warning(
            5,
            format!("{label} is brief ({length} characters, aim for at least {PROSE_MIN_LENGTH})"),
        ),
    })
}

/// Author biography depth, an E-E-A-T signal.
pub fn biography() -> Validator {
    Validator::new(|value, _, _| match value_text(value).map(char_len) {
        None => ValidationResult::error(0, "Biography is missing"),
        Some(length) if length >= BIO_RICH_LENGTH => ValidationResult::good(
            15,
            format!("Biography demonstrates expertise ({length} characters)"),
        ),
        Some(length) if length >= PROSE_MIN_LENGTH => ValidationResult::warning(
            8,
            format!("Biography could say more ({length} characters, aim for {BIO_RICH_LENGTH})"),
        ),
        Some(length) => ValidationResult::warning(
            3,
            format!("Biography is very short ({length} characters)"),
        ),
    })
}
