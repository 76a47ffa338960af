use std::collections::HashSet;

use thiserror::Error;

use crate::core::filters::matches_category;
use crate::models::{Category, Destination};

/// Errors that can occur while building the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate destination name: {0}")]
    DuplicateName(String),
}

/// Seed record for the compiled-in catalog data
struct DestinationSeed {
    name: &'static str,
    category: Category,
    activities: &'static [&'static str],
    image: &'static str,
}

/// The compiled-in destination data, in presentation order.
///
/// Names are unique; they are the join key used by decision-tree leaves.
const DESTINATIONS: &[DestinationSeed] = &[
    DestinationSeed {
        name: "Cartagena",
        category: Category::Culture,
        activities: &["Ciudad amurallada", "Playas", "Museos"],
        image: "imagenes/cartagena.jpg",
    },
    DestinationSeed {
        name: "San Andrés",
        category: Category::Adventure,
        activities: &["Buceo", "Snorkel", "Kayak"],
        image: "imagenes/isla-de-san-andres.jpg",
    },
    DestinationSeed {
        name: "Eje Cafetero",
        category: Category::Nature,
        activities: &["Paisajes", "Cafetales", "Senderismo"],
        image: "imagenes/eje_cafetero.jpg",
    },
    DestinationSeed {
        name: "Villa de Leyva",
        category: Category::Culture,
        activities: &["Arquitectura colonial", "Museos", "Fósiles"],
        image: "imagenes/villa_de_leyva.jpg",
    },
    DestinationSeed {
        name: "Santa Marta",
        category: Category::Adventure,
        activities: &["Playas", "Parque Tayrona", "Senderismo"],
        image: "imagenes/santa_marta.jpg",
    },
    DestinationSeed {
        name: "Guatapé",
        category: Category::Nature,
        activities: &["Escalar la piedra", "Paseos en lancha", "Fotografía"],
        image: "imagenes/guatape.jpg",
    },
    DestinationSeed {
        name: "Caño Cristales",
        category: Category::Nature,
        activities: &["Senderismo", "Fotografía", "Exploración ecológica"],
        image: "imagenes/cano_cristales.jpg",
    },
    DestinationSeed {
        name: "Barichara",
        category: Category::Culture,
        activities: &["Arquitectura colonial", "Caminatas", "Artesanías"],
        image: "imagenes/barichara.jpg",
    },
    DestinationSeed {
        name: "Amazonas",
        category: Category::Nature,
        activities: &["Selva", "Fauna", "Ríos"],
        image: "imagenes/leticia.jpg",
    },
    DestinationSeed {
        name: "Bogotá",
        category: Category::Culture,
        activities: &["Museos", "Gastronomía", "Historia"],
        image: "imagenes/bogota.png",
    },
];

/// Static registry of destination records
///
/// Built once at startup and immutable afterwards. Destination order is the
/// presentation order and the tiebreak order for equal scores.
#[derive(Debug, Clone)]
pub struct Catalog {
    destinations: Vec<Destination>,
}

impl Catalog {
    /// Build the standard compiled-in catalog
    pub fn standard() -> Result<Self, CatalogError> {
        let destinations = DESTINATIONS
            .iter()
            .map(|seed| Destination {
                name: seed.name.to_string(),
                category: seed.category,
                activities: seed.activities.iter().map(|a| a.to_string()).collect(),
                image: seed.image.to_string(),
            })
            .collect();

        Self::from_destinations(destinations)
    }

    /// Build a catalog from explicit records, enforcing unique names
    pub fn from_destinations(destinations: Vec<Destination>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for destination in &destinations {
            if !seen.insert(destination.name.clone()) {
                return Err(CatalogError::DuplicateName(destination.name.clone()));
            }
        }

        Ok(Self { destinations })
    }

    /// All destinations in catalog order
    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    /// Distinct category labels in first-appearance order
    pub fn categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.destinations
            .iter()
            .filter(|d| seen.insert(d.category))
            .map(|d| d.category.label().to_string())
            .collect()
    }

    /// Look up a destination by its exact name
    pub fn find_by_name(&self, name: &str) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.name == name)
    }

    /// All destinations matching a category label, case-insensitively
    ///
    /// Unknown labels yield an empty list.
    pub fn filter_by_category(&self, label: &str) -> Vec<&Destination> {
        self.destinations
            .iter()
            .filter(|d| matches_category(d, label))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_builds() {
        let catalog = Catalog::standard().expect("standard catalog should build");
        assert_eq!(catalog.len(), 10);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_categories_in_first_appearance_order() {
        let catalog = Catalog::standard().expect("standard catalog should build");
        assert_eq!(catalog.categories(), vec!["Cultura", "Aventura", "Naturaleza"]);
    }

    #[test]
    fn test_find_by_name_is_exact() {
        let catalog = Catalog::standard().expect("standard catalog should build");
        assert!(catalog.find_by_name("San Andrés").is_some());
        assert!(catalog.find_by_name("san andrés").is_none());
        assert!(catalog.find_by_name("Medellín").is_none());
    }

    #[test]
    fn test_filter_by_category_case_insensitive() {
        let catalog = Catalog::standard().expect("standard catalog should build");

        let culture = catalog.filter_by_category("cultura");
        assert_eq!(culture.len(), 4);
        assert!(culture.iter().all(|d| d.category == Category::Culture));

        let upper = catalog.filter_by_category("NATURALEZA");
        assert_eq!(upper.len(), 4);
    }

    #[test]
    fn test_filter_unknown_category_is_empty() {
        let catalog = Catalog::standard().expect("standard catalog should build");
        assert!(catalog.filter_by_category("Playa").is_empty());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let duplicate = Destination {
            name: "Cartagena".to_string(),
            category: Category::Culture,
            activities: vec![],
            image: String::new(),
        };

        let result = Catalog::from_destinations(vec![duplicate.clone(), duplicate]);
        assert!(matches!(result, Err(CatalogError::DuplicateName(name)) if name == "Cartagena"));
    }
}
