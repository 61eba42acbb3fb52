use serde::{Deserialize, Serialize};

use super::rating::RatingGrade;
use super::scoring::RiskAssessment;

/// Number of loans per grade.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeCounts {
    #[serde(rename = "AAA")]
    pub aaa: usize,
    #[serde(rename = "BBB")]
    pub bbb: usize,
    #[serde(rename = "C")]
    pub c: usize,
}

impl GradeCounts {
    fn record(&mut self, grade: RatingGrade) {
        match grade {
            RatingGrade::Aaa => self.aaa += 1,
            RatingGrade::Bbb => self.bbb += 1,
            RatingGrade::C => self.c += 1,
        }
    }

    pub fn get(&self, grade: RatingGrade) -> usize {
        match grade {
            RatingGrade::Aaa => self.aaa,
            RatingGrade::Bbb => self.bbb,
            RatingGrade::C => self.c,
        }
    }
}

/// Portfolio-level view across every assessed loan.
///
/// The pool is rated by its riskiest loan; an empty pool has no rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolSummary {
    pub loan_count: usize,
    pub pool_rating: Option<RatingGrade>,
    pub grade_counts: GradeCounts,
    pub average_score: Option<f64>,
}

impl PoolSummary {
    pub fn from_assessments<'a, I>(assessments: I) -> Self
    where
        I: IntoIterator<Item = &'a RiskAssessment>,
    {
        let mut loan_count = 0usize;
        let mut total_score: i64 = 0;
        let mut grade_counts = GradeCounts::default();
        let mut pool_rating: Option<RatingGrade> = None;

        for assessment in assessments {
            loan_count += 1;
            total_score += i64::from(assessment.score);
            grade_counts.record(assessment.grade);
            pool_rating = Some(match pool_rating {
                Some(current) => current.max(assessment.grade),
                None => assessment.grade,
            });
        }

        let average_score = if loan_count == 0 {
            None
        } else {
            Some(total_score as f64 / loan_count as f64)
        };

        Self {
            loan_count,
            pool_rating,
            grade_counts,
            average_score,
        }
    }

    pub fn rating_label(&self) -> &'static str {
        match self.pool_rating {
            Some(grade) => grade.label(),
            None => "N/A (no mortgages found)",
        }
    }
}
