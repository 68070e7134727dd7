use crate::Instrument;
use crate::scoring::Item;

/// PHQ-9: Patient Health Questionnaire, nine-item depression screen.
/// Each item rated 0–3 ("not at all" to "nearly every day"). Total 0–27.
/// The ninth item screens for self-harm/suicidal ideation and is treated
/// as an independent safety signal by the triage rule.
pub struct Phq9;

impl Instrument for Phq9 {
    fn id(&self) -> &str {
        "phq9"
    }

    fn name(&self) -> &str {
        "PHQ-9"
    }

    fn items(&self) -> &[Item] {
        static ITEMS: std::sync::LazyLock<Vec<Item>> = std::sync::LazyLock::new(|| {
            let items = [
                ("interest", "Little interest or pleasure in doing things"),
                ("mood", "Feeling down, depressed, or hopeless"),
                ("sleep", "Trouble falling or staying asleep, or sleeping too much"),
                ("energy", "Feeling tired or having little energy"),
                ("appetite", "Poor appetite or overeating"),
                (
                    "self_worth",
                    "Feeling bad about yourself, or that you are a failure or have let yourself or your family down",
                ),
                (
                    "concentration",
                    "Trouble concentrating on things, such as reading or schoolwork",
                ),
                (
                    "psychomotor",
                    "Moving or speaking slowly, or being fidgety or restless, noticeably to others",
                ),
                (
                    "self_harm",
                    "Thoughts that you would be better off dead, or of hurting yourself in some way",
                ),
            ];

            items
                .iter()
                .map(|(id, text)| Item {
                    id: id.to_string(),
                    text: text.to_string(),
                })
                .collect()
        });
        &ITEMS
    }
}
