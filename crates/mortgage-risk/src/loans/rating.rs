use std::fmt;

use serde::{Deserialize, Serialize};

/// Highest risk score still rated `AAA`.
pub const AAA_MAX_SCORE: i32 = 2;
/// Highest risk score still rated `BBB`.
pub const BBB_MAX_SCORE: i32 = 5;

/// RMBS-style credit grade, ordered from lowest to highest risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RatingGrade {
    #[serde(rename = "AAA")]
    Aaa,
    #[serde(rename = "BBB")]
    Bbb,
    #[serde(rename = "C")]
    C,
}

impl RatingGrade {
    pub const ALL: [RatingGrade; 3] = [RatingGrade::Aaa, RatingGrade::Bbb, RatingGrade::C];

    pub fn label(&self) -> &'static str {
        match self {
            RatingGrade::Aaa => "AAA",
            RatingGrade::Bbb => "BBB",
            RatingGrade::C => "C",
        }
    }
}

impl fmt::Display for RatingGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Map a risk score onto a grade. Total over every `i32`.
pub fn classify(score: i32) -> RatingGrade {
    if score <= AAA_MAX_SCORE {
        RatingGrade::Aaa
    } else if score <= BBB_MAX_SCORE {
        RatingGrade::Bbb
    } else {
        RatingGrade::C
    }
}
