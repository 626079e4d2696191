//! UI components shared across pages.

pub mod assessment_tab;
pub mod auth;
pub mod charts;
pub mod chatbot;
pub mod community_tab;
pub mod dashboard_tab;
pub mod mood_tab;
pub mod resources_tab;
pub mod toast;

pub use assessment_tab::AssessmentTab;
pub use auth::{LoginDialog, RegisterDialog};
pub use charts::{DistributionBar, LineChart, TrendChart, TrendSeries};
pub use chatbot::CrisisChatbot;
pub use community_tab::CommunityTab;
pub use dashboard_tab::DashboardTab;
pub use mood_tab::MoodTab;
pub use resources_tab::ResourcesTab;
pub use toast::{Toaster, Toasts};
