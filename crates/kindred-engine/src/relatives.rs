//! Blood-relative and shared-condition queries
//!
//! Both are filters over [`crate::genetic_match`]: nothing here adds a new
//! graph algorithm.

use crate::graph::FamilyGraph;
use crate::labeler::Labeler;
use crate::matcher::{match_in_graph, GeneticMatchResult, MatchContext};
use kindred_domain::{ConditionId, PersonId, RelationshipEdge};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Everyone sharing blood with `person`, including `person`
///
/// Runs one match per id, so the cost is O(V·(V+E)); sized for a single
/// family, not for arbitrary graphs.
pub fn blood_relatives(
    person: &PersonId,
    all_ids: &[PersonId],
    edges: &[RelationshipEdge],
) -> BTreeSet<PersonId> {
    let graph = FamilyGraph::from_edges(edges);
    let labeler = Labeler::without_people();
    let context = MatchContext::default();

    let mut relatives = BTreeSet::from([person.clone()]);
    for other in all_ids {
        if other == person || relatives.contains(other) {
            continue;
        }
        if match_in_graph(&graph, &labeler, person, other, &context).is_blood_relative() {
            relatives.insert(other.clone());
        }
    }

    debug!(%person, members = all_ids.len(), relatives = relatives.len(), "Collected blood relatives");
    relatives
}

/// Other carriers of a condition who are blood relatives of `person`
///
/// Sorted by percentage, highest first; equal percentages keep id order.
pub fn shared_condition_relatives(
    person: &PersonId,
    condition: &ConditionId,
    edges: &[RelationshipEdge],
    carriers: &BTreeMap<PersonId, Vec<ConditionId>>,
    context: &MatchContext<'_>,
) -> Vec<(PersonId, GeneticMatchResult)> {
    let graph = FamilyGraph::from_edges(edges);
    let labeler = match context.people {
        Some(people) => Labeler::new(people),
        None => Labeler::without_people(),
    }
    .with_graph(&graph);

    let mut matches: Vec<(PersonId, GeneticMatchResult)> = carriers
        .iter()
        .filter(|(id, conditions)| *id != person && conditions.contains(condition))
        .map(|(id, _)| {
            // Labels are per target, so the shared context's gender must not leak
            let per_target = MatchContext {
                target_gender: None,
                ..*context
            };
            (id.clone(), match_in_graph(&graph, &labeler, person, id, &per_target))
        })
        .filter(|(_, result)| result.is_blood_relative())
        .collect();

    matches.sort_by(|a, b| b.1.percentage.total_cmp(&a.1.percentage));

    debug!(%person, %condition, carriers = matches.len(), "Collected shared-condition relatives");
    matches
}
