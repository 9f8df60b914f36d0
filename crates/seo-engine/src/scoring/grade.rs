use serde::Serialize;

/// Badge level for a health percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    Excellent,
    Good,
    NeedsImprovement,
    Poor,
}

impl Grade {
    pub const fn ordered() -> [Self; 4] {
        [Self::Excellent, Self::Good, Self::NeedsImprovement, Self::Poor]
    }

    pub const fn from_percentage(percentage: u8) -> Self {
        match percentage {
            80.. => Self::Excellent,
            60..=79 => Self::Good,
            40..=59 => Self::NeedsImprovement,
            _ => Self::Poor,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::NeedsImprovement => "Needs Improvement",
            Self::Poor => "Poor",
        }
    }
}
