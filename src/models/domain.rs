use serde::{Deserialize, Serialize};

/// Tourism category a destination belongs to
///
/// The product vocabulary is Spanish, so the wire labels are the Spanish
/// ones shown to travelers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Cultura")]
    Culture,
    #[serde(rename = "Aventura")]
    Adventure,
    #[serde(rename = "Naturaleza")]
    Nature,
}

impl Category {
    /// Display label used on the wire and in the catalog data
    pub fn label(&self) -> &'static str {
        match self {
            Category::Culture => "Cultura",
            Category::Adventure => "Aventura",
            Category::Nature => "Naturaleza",
        }
    }

    /// Parse a category from its label, case-insensitively
    pub fn parse(label: &str) -> Option<Category> {
        match label.to_lowercase().as_str() {
            "cultura" => Some(Category::Culture),
            "aventura" => Some(Category::Adventure),
            "naturaleza" => Some(Category::Nature),
            _ => None,
        }
    }
}

/// A tourist destination in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Destination {
    pub name: String,
    pub category: Category,
    pub activities: Vec<String>,
    /// Image path for the presentation layer; stored and returned verbatim
    pub image: String,
}

/// Budget tier from the traveler questionnaire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Economico,
    Moderado,
    Premium,
}

impl BudgetTier {
    /// Display label shown to travelers
    pub fn label(&self) -> &'static str {
        match self {
            BudgetTier::Economico => "Económico",
            BudgetTier::Moderado => "Moderado",
            BudgetTier::Premium => "Premium",
        }
    }
}

/// Traveler questionnaire data used for personalized scoring
///
/// Built per request and dropped once the response is written; nothing is
/// stored server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelerProfile {
    pub name: String,
    pub age: u8,
    #[serde(rename = "stayDays")]
    pub stay_days: u8,
    pub budget: BudgetTier,
    #[serde(default)]
    pub interests: Vec<String>,
}

/// A destination paired with its score for one scoring pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredDestination {
    pub destination: Destination,
    pub score: u32,
    /// Interests that contributed points, for the presentation layer
    #[serde(rename = "matchedInterests")]
    pub matched_interests: Vec<String>,
}

/// Point values for the additive scoring rules
#[derive(Debug, Clone, Copy)]
pub struct ScoringPoints {
    pub category_match: u32,
    pub activity_match: u32,
    pub budget_match: u32,
}

impl Default for ScoringPoints {
    fn default() -> Self {
        Self {
            category_match: 3,
            activity_match: 2,
            budget_match: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_case_insensitive() {
        assert_eq!(Category::parse("Cultura"), Some(Category::Culture));
        assert_eq!(Category::parse("cultura"), Some(Category::Culture));
        assert_eq!(Category::parse("AVENTURA"), Some(Category::Adventure));
        assert_eq!(Category::parse("naturaleza"), Some(Category::Nature));
        assert_eq!(Category::parse("gastronomia"), None);
    }

    #[test]
    fn test_category_label_round_trip() {
        for category in [Category::Culture, Category::Adventure, Category::Nature] {
            assert_eq!(Category::parse(category.label()), Some(category));
        }
    }

    #[test]
    fn test_default_points() {
        let points = ScoringPoints::default();
        assert_eq!(points.category_match, 3);
        assert_eq!(points.activity_match, 2);
        assert_eq!(points.budget_match, 1);
    }
}
