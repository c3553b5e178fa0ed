use onboard_core::model::{MAX_SEQUENCE, MIN_SEQUENCE, Section, StudentId, StudentIdError};
use rand::Rng;
use tracing::debug;

/// Derives institute-scoped student identifiers such as `K_10_B042`.
///
/// Section and sequence are drawn at random with no uniqueness check, so two
/// registrations may collide.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentifierGenerator;

impl IdentifierGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// # Errors
    ///
    /// Returns `StudentIdError` for an empty institute code or a non-numeric grade.
    pub fn generate(&self, institute_code: &str, grade: &str) -> Result<StudentId, StudentIdError> {
        self.generate_with(&mut rand::rng(), institute_code, grade)
    }

    /// Same as [`generate`](Self::generate) with a caller-supplied RNG.
    ///
    /// # Errors
    ///
    /// Returns `StudentIdError` for an empty institute code or a non-numeric grade.
    pub fn generate_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        institute_code: &str,
        grade: &str,
    ) -> Result<StudentId, StudentIdError> {
        let section = Section::ALL[rng.random_range(0..Section::ALL.len())];
        let sequence = rng.random_range(MIN_SEQUENCE..=MAX_SEQUENCE);
        let id = StudentId::new(institute_code, grade, section, sequence)?;
        debug!(%id, "student id generated");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn matches_pattern(id: &str, code: &str, grade: &str) -> bool {
        let prefix = format!("{code}_{grade}_");
        let Some(rest) = id.strip_prefix(&prefix) else {
            return false;
        };
        let mut chars = rest.chars();
        let section_ok = chars.next().is_some_and(|c| ('A'..='D').contains(&c));
        let digits: String = chars.collect();
        section_ok && digits.len() == 3 && digits.chars().all(|c| c.is_ascii_digit())
    }

    #[test]
    fn kendriya_vidyalaya_grade_ten_matches_pattern() {
        let generator = IdentifierGenerator::new();
        for _ in 0..200 {
            let id = generator.generate("KV", "10").unwrap().to_string();
            assert!(matches_pattern(&id, "K", "10"), "unexpected id {id}");
        }
    }

    #[test]
    fn every_catalog_institute_and_grade_produces_a_valid_id() {
        let generator = IdentifierGenerator::new();
        let mut rng = StdRng::seed_from_u64(7);
        for institute in onboard_core::model::catalog::INSTITUTES {
            for grade in onboard_core::model::catalog::GRADES {
                let id = generator
                    .generate_with(&mut rng, institute.code, grade)
                    .unwrap();
                let first = &institute.code[..1];
                assert!(matches_pattern(&id.to_string(), first, grade));
            }
        }
    }

    #[test]
    fn seeded_rng_is_deterministic() {
        let generator = IdentifierGenerator::new();
        let a = generator
            .generate_with(&mut StdRng::seed_from_u64(42), "dps", "8")
            .unwrap();
        let b = generator
            .generate_with(&mut StdRng::seed_from_u64(42), "dps", "8")
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(a.institute_code(), "D");
        assert!((1..=999).contains(&a.sequence()));
    }

    #[test]
    fn non_ascii_institute_code_matches_pattern() {
        let generator = IdentifierGenerator::new();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let id = generator.generate_with(&mut rng, "école", "10").unwrap();
            assert!(matches_pattern(&id.to_string(), "É", "10"), "unexpected id {id}");
        }
    }

    #[test]
    fn empty_institute_code_is_rejected() {
        let generator = IdentifierGenerator::new();
        assert_eq!(
            generator.generate("  ", "10"),
            Err(StudentIdError::InvalidInstituteCode)
        );
        assert!(matches!(
            generator.generate("KV", ""),
            Err(StudentIdError::InvalidGrade(_))
        ));
    }
}
