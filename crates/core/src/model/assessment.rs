use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssessmentError {
    #[error("question {question} has no option {option}")]
    UnknownOption { question: usize, option: usize },

    #[error("no question at index {0}")]
    UnknownQuestion(usize),

    #[error("{unanswered} question(s) still unanswered")]
    Incomplete { unanswered: usize },
}

/// Broad aptitude a questionnaire option points towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Aptitude {
    Analytical,
    Creative,
    Social,
    Leadership,
}

impl Aptitude {
    pub const ALL: [Aptitude; 4] = [
        Aptitude::Analytical,
        Aptitude::Creative,
        Aptitude::Social,
        Aptitude::Leadership,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Aptitude::Analytical => "Analytical",
            Aptitude::Creative => "Creative",
            Aptitude::Social => "Social",
            Aptitude::Leadership => "Leadership",
        }
    }

    #[must_use]
    pub const fn suggested_careers(self) -> &'static [&'static str] {
        match self {
            Aptitude::Analytical => &["Software Engineer", "Chartered Accountant", "Doctor"],
            Aptitude::Creative => &["Creative Designer", "Architect", "Writer"],
            Aptitude::Social => &["Teacher", "Doctor", "Counsellor"],
            Aptitude::Leadership => &["IAS Officer", "Lawyer", "Entrepreneur"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub prompt: &'static str,
    pub options: [(&'static str, Aptitude); 4],
}

pub const QUESTIONS: [Question; 5] = [
    Question {
        prompt: "How do you like to spend a free afternoon?",
        options: [
            ("Solving puzzles or brain teasers", Aptitude::Analytical),
            ("Drawing, writing or making music", Aptitude::Creative),
            ("Hanging out with friends", Aptitude::Social),
            ("Organising an event or a game", Aptitude::Leadership),
        ],
    },
    Question {
        prompt: "Which school subject do you enjoy most?",
        options: [
            ("Mathematics or Science", Aptitude::Analytical),
            ("Art or Literature", Aptitude::Creative),
            ("Social Studies", Aptitude::Social),
            ("Debate or Civics", Aptitude::Leadership),
        ],
    },
    Question {
        prompt: "In a group project you usually...",
        options: [
            ("Check the facts and the numbers", Aptitude::Analytical),
            ("Come up with the ideas", Aptitude::Creative),
            ("Keep everyone working together", Aptitude::Social),
            ("Lead the team and split the work", Aptitude::Leadership),
        ],
    },
    Question {
        prompt: "Which achievement would make you proudest?",
        options: [
            ("Cracking a really hard problem", Aptitude::Analytical),
            ("Creating something original", Aptitude::Creative),
            ("Helping someone through a tough time", Aptitude::Social),
            ("Leading a team to victory", Aptitude::Leadership),
        ],
    },
    Question {
        prompt: "How do you usually make decisions?",
        options: [
            ("By analysing the options carefully", Aptitude::Analytical),
            ("By following my intuition", Aptitude::Creative),
            ("By talking it over with others", Aptitude::Social),
            ("Quickly, and I take charge", Aptitude::Leadership),
        ],
    },
];

/// One optional option index per entry in [`QUESTIONS`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssessmentAnswers {
    choices: [Option<usize>; QUESTIONS.len()],
}

impl AssessmentAnswers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    ///
    /// Returns `AssessmentError` if the question or option index is out of range.
    pub fn answer(&mut self, question: usize, option: usize) -> Result<(), AssessmentError> {
        let q = QUESTIONS
            .get(question)
            .ok_or(AssessmentError::UnknownQuestion(question))?;
        if option >= q.options.len() {
            return Err(AssessmentError::UnknownOption { question, option });
        }
        self.choices[question] = Some(option);
        Ok(())
    }

    #[must_use]
    pub fn choice(&self, question: usize) -> Option<usize> {
        self.choices.get(question).copied().flatten()
    }

    #[must_use]
    pub fn unanswered(&self) -> usize {
        self.choices.iter().filter(|c| c.is_none()).count()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unanswered() == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AptitudeScore {
    pub aptitude: Aptitude,
    pub score: u32,
}

/// Scored questionnaire; persisted as `personalityResults`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResults {
    pub scores: Vec<AptitudeScore>,
    pub dominant: Aptitude,
    pub completed_at: DateTime<Utc>,
}

impl AssessmentResults {
    /// Tally answers per aptitude. Ties go to the aptitude listed first in [`Aptitude::ALL`].
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError::Incomplete` if any question is unanswered.
    pub fn score(
        answers: &AssessmentAnswers,
        completed_at: DateTime<Utc>,
    ) -> Result<Self, AssessmentError> {
        if !answers.is_complete() {
            return Err(AssessmentError::Incomplete {
                unanswered: answers.unanswered(),
            });
        }

        let mut scores = Aptitude::ALL.map(|aptitude| AptitudeScore { aptitude, score: 0 });
        for (question, choice) in QUESTIONS.iter().zip(answers.choices.iter()) {
            if let Some(option) = choice {
                let (_, aptitude) = question.options[*option];
                if let Some(entry) = scores.iter_mut().find(|s| s.aptitude == aptitude) {
                    entry.score += 1;
                }
            }
        }

        let mut dominant = scores[0];
        for entry in &scores[1..] {
            if entry.score > dominant.score {
                dominant = *entry;
            }
        }

        Ok(Self {
            scores: scores.to_vec(),
            dominant: dominant.aptitude,
            completed_at,
        })
    }

    #[must_use]
    pub fn score_for(&self, aptitude: Aptitude) -> u32 {
        self.scores
            .iter()
            .find(|s| s.aptitude == aptitude)
            .map_or(0, |s| s.score)
    }
}
