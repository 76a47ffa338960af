// Integration tests for Rumbo Algo

use rumbo_algo::core::{Catalog, DecisionTree, Recommender};
use rumbo_algo::models::{BudgetTier, Category, TravelerProfile};

fn create_profile(name: &str, budget: BudgetTier, interests: &[&str]) -> TravelerProfile {
    TravelerProfile {
        name: name.to_string(),
        age: 31,
        stay_days: 5,
        budget,
        interests: interests.iter().map(|i| i.to_string()).collect(),
    }
}

#[test]
fn test_integration_end_to_end_recommendation() {
    let catalog = Catalog::standard().expect("standard catalog should build");
    let recommender = Recommender::with_default_points();

    let profile = create_profile(
        "Camila",
        BudgetTier::Premium,
        &["Historia", "Playas", "Gastronomía"],
    );

    let result = recommender.rank(&profile, &catalog);

    assert_eq!(result.total_considered, 10);
    assert!(!result.ranked.is_empty());

    // Sorted descending, zero scores excluded
    for pair in result.ranked.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    for scored in &result.ranked {
        assert!(scored.score > 0);
    }

    // Bogotá: Historia -> Cultura (3), "Historia" tag (2), "Gastronomía" tag (2)
    let primary = result.primary().expect("ranking should not be empty");
    assert_eq!(primary.destination.name, "Bogotá");
    assert_eq!(primary.score, 7);
    assert!(primary.matched_interests.contains(&"Historia".to_string()));
    assert!(primary.matched_interests.contains(&"Gastronomía".to_string()));

    // Cartagena follows: category (3) + "Playas" tag (2) + premium pick (1)
    let alternatives = result.alternatives(2);
    assert_eq!(alternatives.len(), 2);
    assert_eq!(alternatives[0].destination.name, "Cartagena");
    assert_eq!(alternatives[0].score, 6);

    // A premium pick with no interest overlap still trails with the bonus alone
    let san_andres = result
        .ranked
        .iter()
        .find(|s| s.destination.name == "San Andrés")
        .expect("San Andrés should carry the premium bonus");
    assert_eq!(san_andres.score, 1);
    assert!(san_andres.matched_interests.is_empty());
}

#[test]
fn test_integration_budget_shifts_ranking() {
    let catalog = Catalog::standard().expect("standard catalog should build");
    let recommender = Recommender::with_default_points();

    let premium = recommender.rank(
        &create_profile("Luis", BudgetTier::Premium, &["Aventura"]),
        &catalog,
    );
    let moderado = recommender.rank(
        &create_profile("Luis", BudgetTier::Moderado, &["Aventura"]),
        &catalog,
    );

    // Premium promotes San Andrés over Santa Marta; moderado leaves the tie
    // in catalog order, which San Andrés also leads
    let premium_primary = premium.primary().expect("ranking should not be empty");
    assert_eq!(premium_primary.destination.name, "San Andrés");
    assert_eq!(premium_primary.score, 4);

    let moderado_primary = moderado.primary().expect("ranking should not be empty");
    assert_eq!(moderado_primary.destination.name, "San Andrés");
    assert_eq!(moderado_primary.score, 3);
}

#[test]
fn test_integration_category_filter_covers_catalog() {
    let catalog = Catalog::standard().expect("standard catalog should build");

    let categories = catalog.categories();
    assert_eq!(categories, vec!["Cultura", "Aventura", "Naturaleza"]);

    let mut filtered_total = 0;
    for label in &categories {
        let matches = catalog.filter_by_category(label);
        assert!(!matches.is_empty());
        filtered_total += matches.len();
    }

    // Every destination belongs to exactly one category
    assert_eq!(filtered_total, catalog.len());

    assert_eq!(catalog.filter_by_category("cultura").len(), 4);
    assert_eq!(catalog.filter_by_category("Aventura").len(), 2);
    assert_eq!(catalog.filter_by_category("NATURALEZA").len(), 4);
}

#[test]
fn test_integration_tree_walks_match_catalog() {
    let catalog = Catalog::standard().expect("standard catalog should build");
    let tree = DecisionTree::standard(&catalog).expect("standard tree should build");

    // Root presents the three categories
    assert_eq!(tree.options(tree.root()), vec!["Cultura", "Aventura", "Naturaleza"]);

    let walks = [
        (["Cultura", "Colonial"], "Cartagena", Category::Culture),
        (["Cultura", "Moderno"], "Bogotá", Category::Culture),
        (["Aventura", "Mar"], "San Andrés", Category::Adventure),
        (["Aventura", "Montaña"], "Santa Marta", Category::Adventure),
        (["Naturaleza", "Café"], "Eje Cafetero", Category::Nature),
        (["Naturaleza", "Selva"], "Amazonas", Category::Nature),
    ];

    for (answers, expected_name, expected_category) in walks {
        let leaf = tree.walk(answers).expect("walk should reach a node");
        let destination = tree
            .resolve(leaf, &catalog)
            .expect("leaf should resolve against the catalog");

        assert_eq!(destination.name, expected_name);
        assert_eq!(destination.category, expected_category);
    }
}

#[test]
fn test_integration_partial_walk_reaches_follow_up_question() {
    let catalog = Catalog::standard().expect("standard catalog should build");
    let tree = DecisionTree::standard(&catalog).expect("standard tree should build");

    let node = tree.walk(["Naturaleza"]).expect("walk should reach a node");

    assert_eq!(tree.prompt(node), Some("¿Te gusta más el café o la selva?"));
    assert_eq!(tree.options(node), vec!["Café", "Selva"]);
    assert!(tree.resolve(node, &catalog).is_none());
}

#[test]
fn test_integration_empty_walk_stays_at_root() {
    let catalog = Catalog::standard().expect("standard catalog should build");
    let tree = DecisionTree::standard(&catalog).expect("standard tree should build");

    let node = tree.walk([]).expect("empty walk should stay at the root");
    assert_eq!(node, tree.root());
}
