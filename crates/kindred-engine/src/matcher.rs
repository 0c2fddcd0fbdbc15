//! Genetic match between two people
//!
//! Wires the pipeline together: graph builder, path finder, coefficient,
//! labeler, then the locale pass.

use crate::graph::FamilyGraph;
use crate::labeler::{BirthOrder, Labeler};
use crate::path::{shortest_path, to_percentage};
use crate::{Locale, RelationshipLabel};
use kindred_domain::{Gender, Person, PersonId, RelationshipEdge};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Result of matching a source person against a target person
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneticMatchResult {
    /// Shared genetic material, 0-100 with one decimal
    pub percentage: f64,

    /// Localized, gendered label of what the target is to the source
    pub label: String,

    /// The label before localization
    pub label_kind: RelationshipLabel,

    /// Ids from source to target; empty when unrelated
    pub path: Vec<PersonId>,

    /// Elder/younger detail, set only for paternal uncles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_order: Option<BirthOrder>,
}

impl GeneticMatchResult {
    /// The canonical result for two unconnected people
    pub fn not_related(locale: Locale) -> Self {
        Self {
            percentage: 0.0,
            label: locale.render(RelationshipLabel::NotRelated),
            label_kind: RelationshipLabel::NotRelated,
            path: Vec::new(),
            birth_order: None,
        }
    }

    /// True when the two people share blood
    pub fn is_blood_relative(&self) -> bool {
        self.percentage > 0.0
    }
}

/// Optional per-call context for a match
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchContext<'a> {
    /// Gender of the target, overriding the target's record
    pub target_gender: Option<Gender>,

    /// Display locale for the label
    pub locale: Locale,

    /// People used for side, gender and birth-order disambiguation
    pub people: Option<&'a [Person]>,
}

impl<'a> MatchContext<'a> {
    /// Context with people for disambiguation
    pub fn with_people(people: &'a [Person]) -> Self {
        Self {
            people: Some(people),
            ..Self::default()
        }
    }

    /// Set the display locale
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Set the target's gender
    pub fn target_gender(mut self, gender: Gender) -> Self {
        self.target_gender = Some(gender);
        self
    }
}

/// Match two people over the given edges
///
/// Builds the adjacency for this call only; nothing is kept afterwards.
pub fn genetic_match(
    source: &PersonId,
    target: &PersonId,
    edges: &[RelationshipEdge],
    context: &MatchContext<'_>,
) -> GeneticMatchResult {
    if source == target {
        return GeneticMatchResult {
            percentage: 100.0,
            label: context.locale.render(RelationshipLabel::SelfPerson),
            label_kind: RelationshipLabel::SelfPerson,
            path: vec![source.clone()],
            birth_order: None,
        };
    }

    let graph = FamilyGraph::from_edges(edges);
    let labeler = match context.people {
        Some(people) => Labeler::new(people),
        None => Labeler::without_people(),
    }
    .with_graph(&graph);
    match_in_graph(&graph, &labeler, source, target, context)
}

/// Match against an already-built graph
///
/// Lets set-valued queries build the adjacency once per call instead of once
/// per pair.
pub(crate) fn match_in_graph(
    graph: &FamilyGraph,
    labeler: &Labeler<'_>,
    source: &PersonId,
    target: &PersonId,
    context: &MatchContext<'_>,
) -> GeneticMatchResult {
    let Some(path) = shortest_path(graph, source, target) else {
        debug!(%source, %target, "No path between people");
        return GeneticMatchResult::not_related(context.locale);
    };

    let percentage = to_percentage(path.coefficient());
    let resolved = labeler.label(&path, context.target_gender);
    debug!(
        %source,
        %target,
        hops = path.len(),
        percentage,
        by_marriage = path.crosses_marriage(),
        label = %resolved.label,
        "Resolved relationship"
    );

    GeneticMatchResult {
        percentage,
        label: context.locale.render(resolved.label),
        label_kind: resolved.label,
        path: path.ids,
        birth_order: resolved.birth_order,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kindred_domain::RelationshipType;

    fn id(value: &str) -> PersonId {
        PersonId::from(value)
    }

    fn edges() -> Vec<RelationshipEdge> {
        vec![
            RelationshipEdge::new("e1", "mum", "ego", RelationshipType::Parent),
            RelationshipEdge::new("e2", "mum", "sis", RelationshipType::Parent),
            RelationshipEdge::new("e3", "ego", "sis", RelationshipType::Sibling),
            RelationshipEdge::new("e4", "ego", "half", RelationshipType::HalfSibling),
            RelationshipEdge::new("e5", "ego", "wife", RelationshipType::Spouse),
        ]
    }

    #[test]
    fn test_self_match() {
        let result = genetic_match(&id("ego"), &id("ego"), &[], &MatchContext::default());
        assert_eq!(result.percentage, 100.0);
        assert_eq!(result.label, "Self");
        assert_eq!(result.path, vec![id("ego")]);
    }

    #[test]
    fn test_parent_child() {
        let people = vec![
            Person::new("mum", "Mary", "Lee").with_gender(Gender::Female),
            Person::new("ego", "Sam", "Lee").with_gender(Gender::Male),
        ];
        let context = MatchContext::with_people(&people);

        let mother = genetic_match(&id("ego"), &id("mum"), &edges(), &context);
        assert_eq!(mother.percentage, 50.0);
        assert_eq!(mother.label, "Mother");

        let son = genetic_match(&id("mum"), &id("ego"), &edges(), &context);
        assert_eq!(son.percentage, 50.0);
        assert_eq!(son.label, "Son");
    }

    #[test]
    fn test_sibling_coefficients() {
        let context = MatchContext::default();
        assert_eq!(genetic_match(&id("ego"), &id("sis"), &edges(), &context).percentage, 50.0);
        assert_eq!(genetic_match(&id("ego"), &id("half"), &edges(), &context).percentage, 25.0);
    }

    #[test]
    fn test_spouse_is_zero_but_labeled() {
        let result = genetic_match(&id("ego"), &id("wife"), &edges(), &MatchContext::default());
        assert_eq!(result.percentage, 0.0);
        assert_eq!(result.label_kind, RelationshipLabel::Spouse);
        assert!(!result.is_blood_relative());
        assert_eq!(result.path, vec![id("ego"), id("wife")]);
    }

    #[test]
    fn test_not_related() {
        let result = genetic_match(&id("ego"), &id("stranger"), &edges(), &MatchContext::default());
        assert_eq!(result, GeneticMatchResult::not_related(Locale::En));
        assert!(result.path.is_empty());
        assert_eq!(result.label, "Not Related");
    }

    #[test]
    fn test_localized_label() {
        let people = vec![Person::new("mum", "Mary", "Lee").with_gender(Gender::Female)];
        let context = MatchContext::with_people(&people).locale(Locale::Zh);
        let result = genetic_match(&id("ego"), &id("mum"), &edges(), &context);
        assert_eq!(result.label, "母亲");
        assert_eq!(result.label_kind, RelationshipLabel::Mother);
    }

    #[test]
    fn test_aunt_spouse_not_localized_by_guess() {
        let edges = vec![
            RelationshipEdge::new("e1", "mum", "ego", RelationshipType::Parent),
            RelationshipEdge::new("e2", "mum", "aunt", RelationshipType::Sibling),
            RelationshipEdge::new("e3", "aunt", "partner", RelationshipType::Spouse),
        ];
        let mut people = vec![
            Person::new("mum", "Mary", "Lee").with_gender(Gender::Female),
            Person::new("aunt", "Ruth", "Park").with_gender(Gender::Female),
            Person::new("partner", "Alex", "Park"),
        ];

        let context = MatchContext::with_people(&people).locale(Locale::Zh);
        let unknown = genetic_match(&id("ego"), &id("partner"), &edges, &context);
        assert_eq!(unknown.label_kind, RelationshipLabel::MaternalAuntSpouse);
        assert_eq!(unknown.label, "Maternal Aunt's Spouse");

        people[2] = Person::new("partner", "Alex", "Park").with_gender(Gender::Female);
        let context = MatchContext::with_people(&people).locale(Locale::Zh);
        let known = genetic_match(&id("ego"), &id("partner"), &edges, &context);
        assert_eq!(known.label, "Maternal Aunt's Spouse");
    }

    #[test]
    fn test_declared_paternal_uncle_birth_order() {
        let edges = vec![
            RelationshipEdge::new("e1", "dad", "ego", RelationshipType::Parent),
            RelationshipEdge::new("e2", "uncle", "ego", RelationshipType::PaternalUncle),
        ];
        let people = vec![
            Person::new("dad", "Frank", "Lee")
                .with_gender(Gender::Male)
                .with_birth_date("1960-01-01"),
            Person::new("uncle", "Bill", "Lee")
                .with_gender(Gender::Male)
                .with_birth_date("1950-01-01"),
        ];

        let result = genetic_match(&id("ego"), &id("uncle"), &edges, &MatchContext::with_people(&people));
        assert_eq!(result.label, "Paternal Uncle (Elder)");
        assert_eq!(result.birth_order, Some(BirthOrder::Elder));
        assert_eq!(result.percentage, 25.0);
    }

    #[test]
    fn test_locale_falls_back_without_gender() {
        let context = MatchContext::default().locale(Locale::Es);
        let result = genetic_match(&id("ego"), &id("sis"), &edges(), &context);
        assert_eq!(result.label, "Sibling");

        let gendered = genetic_match(&id("ego"), &id("sis"), &edges(), &context.target_gender(Gender::Female));
        assert_eq!(gendered.label, "Hermana");
    }
}
