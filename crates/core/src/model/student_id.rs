use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const MIN_SEQUENCE: u16 = 1;
pub const MAX_SEQUENCE: u16 = 999;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StudentIdError {
    #[error("institute code must not be empty")]
    InvalidInstituteCode,

    #[error("grade must be a non-empty number, got {0:?}")]
    InvalidGrade(String),

    #[error("sequence {0} is outside 1..=999")]
    SequenceOutOfRange(u16),

    #[error("malformed student id: {0:?}")]
    Malformed(String),
}

/// Class section drawn for a student id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    A,
    B,
    C,
    D,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::A, Section::B, Section::C, Section::D];

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Section::A => 'A',
            Section::B => 'B',
            Section::C => 'C',
            Section::D => 'D',
        }
    }

    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'A' => Some(Section::A),
            'B' => Some(Section::B),
            'C' => Some(Section::C),
            'D' => Some(Section::D),
            _ => None,
        }
    }
}

/// Institute-scoped student identifier, rendered as `{code}_{grade}_{section}{seq:03}`.
///
/// Ids are immutable once built. Nothing checks them against earlier ids, so two
/// registrations can receive the same value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StudentId {
    institute_code: String,
    grade: String,
    section: Section,
    sequence: u16,
}

impl StudentId {
    /// Build an id from the institute's code field and a grade.
    ///
    /// Only the first character of `institute_code` is kept, uppercased. Some
    /// characters uppercase to more than one (`ß` becomes `SS`).
    ///
    /// # Errors
    ///
    /// Returns `StudentIdError` when the institute code is empty or blank,
    /// the grade is not a number, or the sequence is outside `1..=999`.
    pub fn new(
        institute_code: &str,
        grade: &str,
        section: Section,
        sequence: u16,
    ) -> Result<Self, StudentIdError> {
        let first = institute_code
            .trim()
            .chars()
            .next()
            .ok_or(StudentIdError::InvalidInstituteCode)?;

        let grade = grade.trim();
        if grade.is_empty() || !grade.chars().all(|ch| ch.is_ascii_digit()) {
            return Err(StudentIdError::InvalidGrade(grade.to_string()));
        }

        if !(MIN_SEQUENCE..=MAX_SEQUENCE).contains(&sequence) {
            return Err(StudentIdError::SequenceOutOfRange(sequence));
        }

        Ok(Self {
            institute_code: first.to_uppercase().collect(),
            grade: grade.to_string(),
            section,
            sequence,
        })
    }

    #[must_use]
    pub fn institute_code(&self) -> &str {
        &self.institute_code
    }

    #[must_use]
    pub fn grade(&self) -> &str {
        &self.grade
    }

    #[must_use]
    pub fn section(&self) -> Section {
        self.section
    }

    #[must_use]
    pub fn sequence(&self) -> u16 {
        self.sequence
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}_{}_{}{:03}",
            self.institute_code,
            self.grade,
            self.section.as_char(),
            self.sequence
        )
    }
}

impl FromStr for StudentId {
    type Err = StudentIdError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let malformed = || StudentIdError::Malformed(raw.to_string());

        let mut parts = raw.split('_');
        let (Some(code), Some(grade), Some(tail), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(malformed());
        };

        if code.is_empty() || tail.len() != 4 {
            return Err(malformed());
        }
        let mut tail_chars = tail.chars();
        let section = tail_chars
            .next()
            .and_then(Section::from_char)
            .ok_or_else(malformed)?;
        let digits = tail_chars.as_str();
        if !digits.chars().all(|ch| ch.is_ascii_digit()) {
            return Err(malformed());
        }
        let sequence: u16 = digits.parse().map_err(|_| malformed())?;

        let id = Self::new(code, grade, section, sequence)?;
        if id.to_string() != raw {
            return Err(malformed());
        }
        Ok(id)
    }
}

impl TryFrom<String> for StudentId {
    type Error = StudentIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StudentId> for String {
    fn from(id: StudentId) -> Self {
        id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_zero_padded_sequence() {
        let id = StudentId::new("KV", "10", Section::B, 42).unwrap();
        assert_eq!(id.to_string(), "K_10_B042");
        assert_eq!(id.institute_code(), "K");
        assert_eq!(id.grade(), "10");
    }

    #[test]
    fn non_ascii_code_keeps_its_uppercased_first_char() {
        let id = StudentId::new("école", "10", Section::A, 3).unwrap();
        assert_eq!(id.institute_code(), "É");
        assert_eq!(id.to_string(), "É_10_A003");
        assert_eq!("É_10_A003".parse::<StudentId>(), Ok(id));

        let id = StudentId::new("हिंदी विद्यालय", "6", Section::C, 12).unwrap();
        assert_eq!(id.to_string(), "ह_6_C012");
    }

    #[test]
    fn lowercase_code_is_uppercased() {
        let id = StudentId::new("dps", "7", Section::D, 999).unwrap();
        assert_eq!(id.to_string(), "D_7_D999");
    }

    #[test]
    fn rejects_bad_inputs() {
        assert_eq!(
            StudentId::new("", "10", Section::A, 1),
            Err(StudentIdError::InvalidInstituteCode)
        );
        assert_eq!(
            StudentId::new(" \t", "10", Section::A, 1),
            Err(StudentIdError::InvalidInstituteCode)
        );
        assert_eq!(
            StudentId::new("KV", "ten", Section::A, 1),
            Err(StudentIdError::InvalidGrade("ten".into()))
        );
        assert_eq!(
            StudentId::new("KV", "10", Section::A, 0),
            Err(StudentIdError::SequenceOutOfRange(0))
        );
        assert_eq!(
            StudentId::new("KV", "10", Section::A, 1000),
            Err(StudentIdError::SequenceOutOfRange(1000))
        );
    }

    #[test]
    fn parses_rendered_form() {
        let id: StudentId = "S_12_C007".parse().unwrap();
        assert_eq!(id.section(), Section::C);
        assert_eq!(id.sequence(), 7);

        assert!("S_12_E007".parse::<StudentId>().is_err());
        assert!("S_12_C07".parse::<StudentId>().is_err());
        assert!("SS_12_C007".parse::<StudentId>().is_err());
        assert!("S_12_C000".parse::<StudentId>().is_err());
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = StudentId::new("NV", "9", Section::A, 5).unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"N_9_A005\"");
        let back: StudentId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
