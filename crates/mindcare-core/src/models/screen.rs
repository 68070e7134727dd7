use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::risk::RiskLevel;

/// The screens the frontend can show. Navigation state is an explicit
/// enumerated value threaded through the app, not ambient mutable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Screen {
    Login,
    Onboarding,
    Home,
    Assessment,
    Results,
    SelfHelp,
    Chatbot,
    Booking,
    Profile,
    PeerSupport,
    Crisis,
}

impl Screen {
    /// The destination screen for a triage outcome.
    pub fn for_risk(risk: RiskLevel) -> Self {
        match risk {
            RiskLevel::Crisis => Screen::Crisis,
            RiskLevel::Elevated => Screen::Results,
            RiskLevel::Low => Screen::SelfHelp,
        }
    }
}
