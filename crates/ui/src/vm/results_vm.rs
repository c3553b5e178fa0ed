use onboard_core::model::{AssessmentResults, QUESTIONS, UserProfile};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreRowVm {
    pub label: &'static str,
    pub score: u32,
    /// Share of all questions, 0..=100.
    pub percent: u32,
    pub dominant: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub name: String,
    pub age: String,
    pub aim: String,
    pub dominant: &'static str,
    pub rows: Vec<ScoreRowVm>,
    pub careers: &'static [&'static str],
}

impl ResultsVm {
    #[must_use]
    pub fn new(profile: &UserProfile, results: &AssessmentResults) -> Self {
        let total = u32::try_from(QUESTIONS.len()).unwrap_or(u32::MAX).max(1);
        let rows = results
            .scores
            .iter()
            .map(|entry| ScoreRowVm {
                label: entry.aptitude.label(),
                score: entry.score,
                percent: entry.score * 100 / total,
                dominant: entry.aptitude == results.dominant,
            })
            .collect();

        Self {
            name: profile.name.clone(),
            age: profile.age.clone(),
            aim: profile.aim.clone(),
            dominant: results.dominant.label(),
            rows,
            careers: results.dominant.suggested_careers(),
        }
    }
}
