use crate::Instrument;
use crate::scoring::Item;

/// GAD-7: Generalized Anxiety Disorder seven-item screen.
/// Each item rated 0–3 ("not at all" to "nearly every day"). Total 0–21.
pub struct Gad7;

impl Instrument for Gad7 {
    fn id(&self) -> &str {
        "gad7"
    }

    fn name(&self) -> &str {
        "GAD-7"
    }

    fn items(&self) -> &[Item] {
        static ITEMS: std::sync::LazyLock<Vec<Item>> = std::sync::LazyLock::new(|| {
            let items = [
                ("nervousness", "Feeling nervous, anxious, or on edge"),
                ("worry_control", "Not being able to stop or control worrying"),
                ("worry_breadth", "Worrying too much about different things"),
                ("relaxing", "Trouble relaxing"),
                ("restlessness", "Being so restless that it is hard to sit still"),
                ("irritability", "Becoming easily annoyed or irritable"),
                ("dread", "Feeling afraid, as if something awful might happen"),
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
