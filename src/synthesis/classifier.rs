use crate::entities::HazardCategory;

/// Maps free text (a turn instruction or a route warning) to the hazard
/// categories it mentions.
pub trait HazardClassifier {
    fn classify(&self, text: &str) -> Vec<HazardCategory>;
}

/// Whole-word keyword matching. Categories are reported at most once, in the
/// order of the keyword table.
#[derive(Clone, Debug)]
pub struct KeywordClassifier {
    table: Vec<(HazardCategory, Vec<String>)>,
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new(vec![
            (
                HazardCategory::Construction,
                vec!["construction", "closed", "work"],
            ),
            (HazardCategory::RoadSurfaceDamage, vec!["caution", "careful"]),
            (HazardCategory::Flooding, vec!["flooded", "water"]),
        ])
    }
}

impl KeywordClassifier {
    pub fn new(table: Vec<(HazardCategory, Vec<&str>)>) -> Self {
        Self {
            table: table
                .into_iter()
                .map(|(category, keywords)| {
                    (
                        category,
                        keywords.into_iter().map(|k| k.to_lowercase()).collect(),
                    )
                })
                .collect(),
        }
    }

    fn matches(keyword: &str, word: &str) -> bool {
        word == keyword || word.strip_suffix('s') == Some(keyword)
    }
}

impl HazardClassifier for KeywordClassifier {
    fn classify(&self, text: &str) -> Vec<HazardCategory> {
        let text = strip_markup(text).to_lowercase();
        let words: Vec<&str> = text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();

        self.table
            .iter()
            .filter(|(_, keywords)| {
                keywords
                    .iter()
                    .any(|keyword| words.iter().any(|word| Self::matches(keyword, word)))
            })
            .map(|(category, _)| *category)
            .collect()
    }
}

/// Removes `<...>` tags from HTML-ish instruction text, leaving a space where
/// a tag stood so adjacent words stay apart.
pub fn strip_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;

    for c in text.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                out.push(' ');
            }
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }

    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags() {
        let html = "Turn <b>left</b> onto <b>Ayala Ave</b><div style=\"font-size:0.9em\">\
                    Road closed</div>";

        assert_eq!(strip_markup(html), "Turn left onto Ayala Ave Road closed");
    }

    #[test]
    fn classifies_keyword_groups() {
        let classifier = KeywordClassifier::default();

        assert_eq!(
            classifier.classify("Continue straight, construction ahead"),
            vec![HazardCategory::Construction]
        );
        assert_eq!(
            classifier.classify("Be CAREFUL near the bridge"),
            vec![HazardCategory::RoadSurfaceDamage]
        );
        assert_eq!(
            classifier.classify("Street flooded after rain"),
            vec![HazardCategory::Flooding]
        );
        assert_eq!(
            classifier.classify("Road works; caution, water on road"),
            vec![
                HazardCategory::Construction,
                HazardCategory::RoadSurfaceDamage,
                HazardCategory::Flooding
            ]
        );
    }

    #[test]
    fn ignores_partial_words() {
        let classifier = KeywordClassifier::default();

        assert!(classifier.classify("Turn right onto Waterfront Dr").is_empty());
        assert!(classifier.classify("Use the sidewalk network").is_empty());
        assert!(classifier.classify("Head <b>north</b>").is_empty());
    }

    #[test]
    fn compound_words_do_not_match() {
        let classifier = KeywordClassifier::default();

        assert!(classifier.classify("Roadwork ahead").is_empty());
        assert!(classifier.classify("Crews working on the shoulder").is_empty());
        assert_eq!(classifier.classify("Road works"), vec![HazardCategory::Construction]);
    }

    #[test]
    fn custom_table() {
        let classifier =
            KeywordClassifier::new(vec![(HazardCategory::CollisionRisk, vec!["Crash"])]);

        assert_eq!(
            classifier.classify("crash reported ahead"),
            vec![HazardCategory::CollisionRisk]
        );
    }
}
