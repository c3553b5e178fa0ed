mod assessment;
pub mod catalog;
mod forms;
mod ids;
mod notice;
mod profile;
mod stage;
mod student_id;

pub use assessment::{
    Aptitude, AptitudeScore, AssessmentAnswers, AssessmentError, AssessmentResults, Question,
    QUESTIONS,
};
pub use catalog::{AgeCategory, CareerPreview, Institute};
pub use forms::{
    AdminSignInDraft, AuthMode, ExplorerDraft, ProfileDraft, RegistrationDraft, SignInDraft,
    ValidationError,
};
pub use ids::SessionId;
pub use notice::{Notice, NoticeLevel};
pub use profile::UserProfile;
pub use stage::{SessionKey, Stage};
pub use student_id::{Section, StudentId, StudentIdError, MAX_SEQUENCE, MIN_SEQUENCE};
