//! Integration tests for kindred-engine
//!
//! These tests run the public entry points over small but complete families:
//! matching, relative sets and the pedigree layout.

use kindred_domain::{ConditionId, FamilySnapshot, Gender, Person, PersonId, RelationshipEdge, RelationshipType};
use kindred_engine::{
    blood_relatives, genetic_match, layout, BirthOrder, KinshipEngine, LayoutConfig, Locale, MatchContext,
    RelationshipLabel,
};

fn id(value: &str) -> PersonId {
    PersonId::from(value)
}

/// Two paternal grandparents with a son, two maternal grandparents with two
/// daughters, and the son and elder daughter married with one child.
fn three_generations() -> FamilySnapshot {
    let people = vec![
        Person::new("pgf", "George", "Lee").with_gender(Gender::Male),
        Person::new("pgm", "Helen", "Lee").with_gender(Gender::Female),
        Person::new("mgf", "Arthur", "Park").with_gender(Gender::Male),
        Person::new("mgm", "Betty", "Park").with_gender(Gender::Female),
        Person::new("father", "Frank", "Lee")
            .with_gender(Gender::Male)
            .with_birth_date("1962-08-14"),
        Person::new("mother", "Mary", "Lee")
            .with_gender(Gender::Female)
            .with_birth_date("1964-02-02"),
        Person::new("aunt", "Ruth", "Park")
            .with_gender(Gender::Female)
            .with_birth_date("1967-10-30"),
        Person::new("ego", "Sam", "Lee").with_birth_date("1990-06-01"),
    ];

    let edges = vec![
        RelationshipEdge::new("e01", "pgf", "father", RelationshipType::Parent),
        RelationshipEdge::new("e02", "pgm", "father", RelationshipType::Parent),
        RelationshipEdge::new("e03", "mgf", "mother", RelationshipType::Parent),
        RelationshipEdge::new("e04", "mgm", "mother", RelationshipType::Parent),
        RelationshipEdge::new("e05", "mgf", "aunt", RelationshipType::Parent),
        RelationshipEdge::new("e06", "mgm", "aunt", RelationshipType::Parent),
        RelationshipEdge::new("e07", "mother", "aunt", RelationshipType::Sibling),
        RelationshipEdge::new("e08", "father", "mother", RelationshipType::Spouse),
        RelationshipEdge::new("e09", "mother", "ego", RelationshipType::Parent),
        RelationshipEdge::new("e10", "father", "ego", RelationshipType::Parent),
        RelationshipEdge::new("e11", "pgf", "pgm", RelationshipType::Spouse),
        RelationshipEdge::new("e12", "mgf", "mgm", RelationshipType::Spouse),
    ];

    FamilySnapshot::new(people, edges)
}

#[test]
fn test_regression_aunt_beside_mother() {
    let family = three_generations();
    let config = LayoutConfig::default();
    let chart = layout(&family.people, &family.relationships, &id("ego"), &config).unwrap();

    let mother = chart.node(&id("mother")).unwrap();
    let aunt = chart.node(&id("aunt")).unwrap();
    let father = chart.node(&id("father")).unwrap();

    assert_eq!(mother.generation, 1);
    assert_eq!(aunt.generation, 1);
    assert_eq!(father.generation, 1);
    assert_eq!(mother.y, aunt.y);

    // Neighbors in the same row
    assert!((aunt.x - mother.x).abs() <= config.node_width + config.horizontal_gap);
    assert!(aunt.x > chart.width / 2.0, "aunt should sit in the right half");

    for pgp in ["pgf", "pgm", "mgf", "mgm"] {
        assert_eq!(chart.node(&id(pgp)).unwrap().generation, 2);
    }

    let segments = chart.sibship_connectors(&config);
    assert!(!segments.is_empty());
    assert!(segments.iter().all(|s| s.is_axis_aligned()), "diagonal connector produced");
}

#[test]
fn test_regression_sibships() {
    let family = three_generations();
    let chart = layout(&family.people, &family.relationships, &id("ego"), &LayoutConfig::default()).unwrap();

    assert_eq!(chart.sibships.len(), 3);
    let maternal = chart
        .sibships
        .iter()
        .find(|s| s.parents == vec![id("mgf"), id("mgm")])
        .unwrap();
    assert_eq!(maternal.children, vec![id("aunt"), id("mother")]);
}

#[test]
fn test_layout_is_deterministic() {
    let family = three_generations();
    let config = LayoutConfig::default();
    let first = layout(&family.people, &family.relationships, &id("ego"), &config).unwrap();
    let second = layout(&family.people, &family.relationships, &id("ego"), &config).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_match_is_deterministic() {
    let family = three_generations();
    let context = MatchContext::with_people(&family.people);
    let first = genetic_match(&id("ego"), &id("aunt"), &family.relationships, &context);
    let second = genetic_match(&id("ego"), &id("aunt"), &family.relationships, &context);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_disconnected_member_still_laid_out() {
    let mut family = three_generations();
    family.people.push(Person::new("lodger", "Lou", "Stone"));
    let chart = layout(&family.people, &family.relationships, &id("ego"), &LayoutConfig::default()).unwrap();

    assert_eq!(chart.nodes.len(), family.people.len());
    let lodger = chart.node(&id("lodger")).unwrap();
    let lowest_connected = chart
        .nodes
        .iter()
        .filter(|n| n.person.id != id("lodger"))
        .map(|n| n.generation)
        .min()
        .unwrap();
    assert!(lodger.generation < lowest_connected);
}

#[test]
fn test_same_generation_same_row() {
    let family = three_generations();
    let chart = layout(&family.people, &family.relationships, &id("mother"), &LayoutConfig::default()).unwrap();
    for a in &chart.nodes {
        for b in &chart.nodes {
            if a.generation == b.generation {
                assert_eq!(a.y, b.y, "{} and {} split across rows", a.person.id, b.person.id);
            }
        }
    }
}

#[test]
fn test_maternal_labels_and_coefficients() {
    let family = three_generations();
    let context = MatchContext::with_people(&family.people);

    let aunt = genetic_match(&id("ego"), &id("aunt"), &family.relationships, &context);
    assert_eq!(aunt.percentage, 25.0);
    assert_eq!(aunt.label_kind, RelationshipLabel::MaternalAunt);
    assert_eq!(aunt.path, vec![id("ego"), id("mother"), id("aunt")]);

    let grandfather = genetic_match(&id("ego"), &id("pgf"), &family.relationships, &context);
    assert_eq!(grandfather.percentage, 25.0);
    assert_eq!(grandfather.label, "Paternal Grandfather");

    let niece = genetic_match(&id("aunt"), &id("ego"), &family.relationships, &context);
    assert_eq!(niece.percentage, 25.0);
    assert_eq!(niece.label_kind, RelationshipLabel::NieceNephew);
}

#[test]
fn test_cousin_is_twelve_and_a_half() {
    let mut family = three_generations();
    family.people.push(Person::new("cousin", "Cleo", "Park").with_gender(Gender::Female));
    family
        .relationships
        .push(RelationshipEdge::new("e13", "aunt", "cousin", RelationshipType::Parent));

    let result = genetic_match(
        &id("ego"),
        &id("cousin"),
        &family.relationships,
        &MatchContext::with_people(&family.people),
    );
    assert_eq!(result.percentage, 12.5);
    assert_eq!(result.label_kind, RelationshipLabel::FirstCousin);
    assert_eq!(result.label, "First Cousin");
}

#[test]
fn test_in_laws_are_not_blood() {
    let family = three_generations();
    let all = family.people.iter().map(|p| p.id.clone()).collect::<Vec<_>>();

    let relatives = blood_relatives(&id("father"), &all, &family.relationships);
    assert!(relatives.contains(&id("father")));
    assert!(relatives.contains(&id("ego")));
    assert!(relatives.contains(&id("pgf")));
    assert!(!relatives.contains(&id("mother")));
    assert!(!relatives.contains(&id("aunt")));
    assert!(!relatives.contains(&id("mgm")));
    assert!(relatives.iter().all(|r| all.contains(r)));

    let wife = genetic_match(&id("father"), &id("mother"), &family.relationships, &MatchContext::default());
    assert_eq!(wife.percentage, 0.0);
    assert_eq!(wife.label_kind, RelationshipLabel::Spouse);
}

#[test]
fn test_paternal_uncle_birth_order() {
    let mut family = three_generations();
    family.people.push(
        Person::new("uncle", "Tom", "Lee")
            .with_gender(Gender::Male)
            .with_birth_date("1958-01-09"),
    );
    family.people.push(Person::new("uncle2", "Ned", "Lee").with_gender(Gender::Male));
    family
        .relationships
        .push(RelationshipEdge::new("e13", "uncle", "father", RelationshipType::Sibling));
    family
        .relationships
        .push(RelationshipEdge::new("e14", "father", "uncle2", RelationshipType::Sibling));

    let context = MatchContext::with_people(&family.people);
    let elder = genetic_match(&id("ego"), &id("uncle"), &family.relationships, &context);
    assert_eq!(elder.label_kind, RelationshipLabel::PaternalUncleElder);
    assert_eq!(elder.birth_order, Some(BirthOrder::Elder));

    // No birth date: the order stays unknown instead of being guessed
    let unknown = genetic_match(&id("ego"), &id("uncle2"), &family.relationships, &context);
    assert_eq!(unknown.label_kind, RelationshipLabel::PaternalUncle);
    assert_eq!(unknown.birth_order, Some(BirthOrder::Unknown));
    assert_eq!(unknown.label, "Paternal Uncle");
}

#[test]
fn test_engine_over_snapshot() {
    let family = three_generations()
        .with_condition("mother", ConditionId::from("brca1"))
        .with_condition("aunt", ConditionId::from("brca1"))
        .with_condition("father", ConditionId::from("brca1"));
    let engine = KinshipEngine::default_config();

    let shared = engine.shared_condition_relatives(&family, &id("ego"), &ConditionId::from("brca1"), Some(Locale::Es));
    let found: Vec<&str> = shared.iter().map(|(id, _)| id.as_str()).collect();
    assert_eq!(found, vec!["father", "mother", "aunt"]);
    assert_eq!(shared[1].1.label, "Madre");

    let analytics = engine.generation_analytics(&family, &id("ego")).unwrap();
    assert_eq!(analytics.total_members(), family.people.len());
    let parents = analytics.generation(1).unwrap();
    assert_eq!(parents.member_count, 3);
    assert_eq!(parents.oldest, Some(id("father")));
    assert_eq!(parents.youngest, Some(id("aunt")));
}
