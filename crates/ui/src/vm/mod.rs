mod assessment_vm;
mod capture_vm;
mod intro_vm;
mod results_vm;

pub use assessment_vm::{QuestionVm, map_questions};
pub use capture_vm::{LISTENING_NOTICE, capture_notice, greeting_notice};
pub use intro_vm::{IntroVm, playback_notice, playback_status, unsupported_notice};
pub use results_vm::{ResultsVm, ScoreRowVm};
