//! Aspect categories and the ordered catalog they live in.

use serde::{Deserialize, Serialize};

/// A topical category of feedback with the substrings that trigger it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawAspectCategory")]
pub struct AspectCategory {
    pub id: String,
    pub label: String,
    pub keywords: Vec<String>,
}

/// Deserialized form; converted through [`AspectCategory::new`].
#[derive(Deserialize)]
struct RawAspectCategory {
    id: String,
    label: String,
    keywords: Vec<String>,
}

impl From<RawAspectCategory> for AspectCategory {
    fn from(raw: RawAspectCategory) -> Self {
        Self::new(raw.id, raw.label, raw.keywords)
    }
}

impl AspectCategory {
    /// Keywords are stored trimmed and lowercased; empty ones are dropped.
    pub fn new<I>(id: impl Into<String>, label: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self {
            id: id.into(),
            label: label.into(),
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    /// Whether any keyword occurs as a substring of the lowercased sentence.
    pub fn is_mentioned_in(&self, sentence: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| sentence.contains(keyword.as_str()))
    }
}

/// Ordered set of aspects; output follows this order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AspectCatalog {
    aspects: Vec<AspectCategory>,
}

impl AspectCatalog {
    pub fn new(aspects: Vec<AspectCategory>) -> Self {
        Self { aspects }
    }

    /// The six aspects of the dietitian feedback form.
    pub fn reference() -> Self {
        Self::new(vec![
            AspectCategory::new(
                "dietitian",
                "Dietitian Guidance",
                ["dietitian", "dietician", "nutritionist", "guidance", "counsel"],
            ),
            AspectCategory::new(
                "treatment",
                "Treatment Plan",
                ["treatment", "plan", "therapy", "medication", "follow-up", "progress"],
            ),
            AspectCategory::new(
                "staff",
                "Care Staff",
                ["staff", "nurse", "receptionist", "caregiver", "team"],
            ),
            AspectCategory::new(
                "infrastructure",
                "Infrastructure",
                [
                    "clinic",
                    "facility",
                    "building",
                    "room",
                    "hospital",
                    "parking",
                    "equipment",
                    "hardware",
                ],
            ),
            AspectCategory::new(
                "charts",
                "Diet Charts",
                ["chart", "meal plan", "diet plan", "menu", "portion"],
            ),
            AspectCategory::new(
                "recommendation",
                "Recommendation Model",
                ["recommend", "suggestion", "suggested", "algorithm", "model"],
            ),
        ])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AspectCategory> {
        self.aspects.iter()
    }

    pub fn get(&self, id: &str) -> Option<&AspectCategory> {
        self.aspects.iter().find(|aspect| aspect.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.aspects.iter().map(|aspect| aspect.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.aspects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aspects.is_empty()
    }
}

impl<'a> IntoIterator for &'a AspectCatalog {
    type Item = &'a AspectCategory;
    type IntoIter = std::slice::Iter<'a, AspectCategory>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Vec<AspectCategory>> for AspectCatalog {
    fn from(aspects: Vec<AspectCategory>) -> Self {
        Self::new(aspects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_catalog_order() {
        let catalog = AspectCatalog::reference();
        assert_eq!(
            catalog.ids().collect::<Vec<_>>(),
            vec![
                "dietitian",
                "treatment",
                "staff",
                "infrastructure",
                "charts",
                "recommendation"
            ]
        );
    }

    #[test]
    fn test_keywords_are_normalized() {
        let aspect = AspectCategory::new("food", "Food", [" Menu ", "", "SNACK"]);
        assert_eq!(aspect.keywords, vec!["menu", "snack"]);
    }

    #[test]
    fn test_mention_is_substring_based() {
        let catalog = AspectCatalog::reference();
        let staff = catalog.get("staff").unwrap();
        assert!(staff.is_mentioned_in("the staffing was thin"));
        assert!(!staff.is_mentioned_in("the doctor was late"));
    }

    #[test]
    fn test_deserialized_keywords_are_normalized() {
        let catalog: AspectCatalog = serde_json::from_str(
            r#"[{"id": "food", "label": "Food", "keywords": [" Menu ", "", "SNACK"]}]"#,
        )
        .unwrap();
        let aspect = catalog.get("food").unwrap();
        assert_eq!(aspect.keywords, vec!["menu", "snack"]);
        assert!(aspect.is_mentioned_in("the menu was short"));
    }

    #[test]
    fn test_aspect_without_keywords_is_never_mentioned() {
        let aspect = AspectCategory::new("empty", "Empty", Vec::<String>::new());
        assert!(!aspect.is_mentioned_in("anything at all"));
    }
}
