use mindcare_core::models::risk::RiskLevel;
use mindcare_core::models::screen::Screen;

#[test]
fn crisis_routes_to_crisis_screen() {
    assert_eq!(Screen::for_risk(RiskLevel::Crisis), Screen::Crisis);
}

#[test]
fn elevated_routes_to_results_screen() {
    assert_eq!(Screen::for_risk(RiskLevel::Elevated), Screen::Results);
}

#[test]
fn low_routes_to_self_help_screen() {
    assert_eq!(Screen::for_risk(RiskLevel::Low), Screen::SelfHelp);
}
