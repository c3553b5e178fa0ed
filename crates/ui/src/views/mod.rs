mod admin_login;
mod auth;
mod career_visualization;
mod home;
pub(crate) mod notices;
mod personality_assessment;
mod personality_intro;
mod personality_results;
mod partition_login;
mod state;
mod voice;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use admin_login::AdminLoginView;
pub use auth::AuthView;
pub use career_visualization::CareerVisualizationView;
pub use home::HomeView;
pub use notices::{NoticeEntry, NoticeStack, Notices, use_notices, use_notices_provider};
pub use partition_login::PartitionLoginView;
pub use personality_assessment::PersonalityAssessmentView;
pub use personality_intro::PersonalityIntroView;
pub use personality_results::PersonalityResultsView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use voice::MicButton;
