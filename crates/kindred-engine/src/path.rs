//! Path finder and coefficient calculator
//!
//! Breadth-first search over a [`FamilyGraph`] gives the shortest chain of
//! edges between two people (ties go to the neighbor inserted first). The
//! coefficient of relationship is the product of the per-edge coefficients
//! along that chain.

use crate::graph::FamilyGraph;
use kindred_domain::{PersonId, RelationshipType};
use std::collections::{HashMap, VecDeque};

/// A chain of edges from a source person to a target person
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KinPath {
    /// Person ids from source to target, inclusive
    pub ids: Vec<PersonId>,

    /// Per hop, what the earlier person is to the later one
    pub kinds: Vec<RelationshipType>,

    /// Per hop, what the later person is to the earlier one
    pub relations: Vec<RelationshipType>,
}

impl KinPath {
    /// Number of edges in the chain
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// True for the zero-hop path from a person to themselves
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Product of the per-edge coefficients
    pub fn coefficient(&self) -> f64 {
        coefficient(&self.kinds)
    }

    /// True when a spouse edge sits anywhere on the chain
    pub fn crosses_marriage(&self) -> bool {
        self.kinds.contains(&RelationshipType::Spouse)
    }
}

/// Find the shortest path between two people
///
/// Returns `None` when no chain of edges connects them. A person always has
/// the zero-hop path to themselves.
pub fn shortest_path(graph: &FamilyGraph, source: &PersonId, target: &PersonId) -> Option<KinPath> {
    if source == target {
        return Some(KinPath {
            ids: vec![source.clone()],
            kinds: Vec::new(),
            relations: Vec::new(),
        });
    }
    if !graph.contains(source) || !graph.contains(target) {
        return None;
    }

    // Predecessor of each discovered person and the link used to reach it
    let mut discovered: HashMap<&PersonId, (&PersonId, RelationshipType, RelationshipType)> = HashMap::new();
    let mut queue: VecDeque<&PersonId> = VecDeque::from([source]);
    let mut found = false;

    'search: while let Some(current) = queue.pop_front() {
        for link in graph.links(current) {
            if &link.to == source || discovered.contains_key(&link.to) {
                continue;
            }
            discovered.insert(&link.to, (current, link.kind, link.relation));
            if &link.to == target {
                found = true;
                break 'search;
            }
            queue.push_back(&link.to);
        }
    }

    if !found {
        return None;
    }

    let mut ids = vec![target.clone()];
    let mut kinds = Vec::new();
    let mut relations = Vec::new();
    let mut cursor = target;
    while let Some(&(previous, kind, relation)) = discovered.get(cursor) {
        ids.push(previous.clone());
        kinds.push(kind);
        relations.push(relation);
        cursor = previous;
    }

    ids.reverse();
    kinds.reverse();
    relations.reverse();

    Some(KinPath { ids, kinds, relations })
}

/// Product of the per-type coefficients (1.0 for an empty chain)
pub fn coefficient(kinds: &[RelationshipType]) -> f64 {
    kinds.iter().map(RelationshipType::coefficient).product()
}

/// Convert a coefficient to a percentage with one decimal of precision
pub fn to_percentage(coefficient: f64) -> f64 {
    (coefficient * 1000.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use kindred_domain::RelationshipEdge;

    fn id(value: &str) -> PersonId {
        PersonId::from(value)
    }

    fn cousin_graph() -> FamilyGraph {
        FamilyGraph::from_edges(&[
            RelationshipEdge::new("e1", "mum", "ego", RelationshipType::Parent),
            RelationshipEdge::new("e2", "mum", "aunt", RelationshipType::Sibling),
            RelationshipEdge::new("e3", "aunt", "cousin", RelationshipType::Parent),
            RelationshipEdge::new("e4", "aunt", "uncle_in_law", RelationshipType::Spouse),
        ])
    }

    #[test]
    fn test_self_path() {
        let graph = FamilyGraph::default();
        let path = shortest_path(&graph, &id("ego"), &id("ego")).unwrap();
        assert_eq!(path.ids, vec![id("ego")]);
        assert!(path.is_empty());
        assert_eq!(path.coefficient(), 1.0);
    }

    #[test]
    fn test_three_hop_cousin_path() {
        let path = shortest_path(&cousin_graph(), &id("ego"), &id("cousin")).unwrap();
        assert_eq!(path.ids, vec![id("ego"), id("mum"), id("aunt"), id("cousin")]);
        assert_eq!(
            path.kinds,
            vec![RelationshipType::Child, RelationshipType::Sibling, RelationshipType::Parent]
        );
        assert_eq!(
            path.relations,
            vec![RelationshipType::Parent, RelationshipType::Sibling, RelationshipType::Child]
        );
        assert_eq!(to_percentage(path.coefficient()), 12.5);
    }

    #[test]
    fn test_spouse_zeroes_coefficient() {
        let path = shortest_path(&cousin_graph(), &id("ego"), &id("uncle_in_law")).unwrap();
        assert!(path.crosses_marriage());
        assert_eq!(path.coefficient(), 0.0);
    }

    #[test]
    fn test_disconnected_returns_none() {
        assert!(shortest_path(&cousin_graph(), &id("ego"), &id("stranger")).is_none());
    }

    #[test]
    fn test_shortest_path_preferred() {
        // ego -> mum -> gran is two hops; the direct grandparent edge is one
        let graph = FamilyGraph::from_edges(&[
            RelationshipEdge::new("e1", "mum", "ego", RelationshipType::Parent),
            RelationshipEdge::new("e2", "gran", "mum", RelationshipType::Parent),
            RelationshipEdge::new("e3", "gran", "ego", RelationshipType::Grandparent),
        ]);
        let path = shortest_path(&graph, &id("ego"), &id("gran")).unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(path.relations, vec![RelationshipType::Grandparent]);
    }

    #[test]
    fn test_ties_follow_insertion_order() {
        // Two equal-length routes to the target; the first inserted wins
        let graph = FamilyGraph::from_edges(&[
            RelationshipEdge::new("e1", "ego", "a", RelationshipType::Sibling),
            RelationshipEdge::new("e2", "ego", "b", RelationshipType::Sibling),
            RelationshipEdge::new("e3", "b", "t", RelationshipType::Parent),
            RelationshipEdge::new("e4", "a", "t", RelationshipType::Parent),
        ]);
        let path = shortest_path(&graph, &id("ego"), &id("t")).unwrap();
        assert_eq!(path.ids, vec![id("ego"), id("a"), id("t")]);
    }

    #[test]
    fn test_percentage_rounding() {
        assert_eq!(to_percentage(0.5), 50.0);
        assert_eq!(to_percentage(0.125), 12.5);
        assert_eq!(to_percentage(0.0625 * 0.5), 3.1);
        assert_eq!(to_percentage(1.0), 100.0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_kind() -> impl Strategy<Value = RelationshipType> {
        prop::sample::select(RelationshipType::ALL.to_vec())
    }

    proptest! {
        /// Property: coefficients stay in [0, 1] for any chain
        #[test]
        fn test_coefficient_range(kinds in prop::collection::vec(any_kind(), 0..8)) {
            let c = coefficient(&kinds);
            prop_assert!((0.0..=1.0).contains(&c));
        }

        /// Property: any chain containing a spouse hop has zero coefficient
        #[test]
        fn test_spouse_anywhere_is_zero(
            mut kinds in prop::collection::vec(any_kind(), 0..6),
            position in 0usize..6,
        ) {
            let at = position.min(kinds.len());
            kinds.insert(at, RelationshipType::Spouse);
            prop_assert_eq!(coefficient(&kinds), 0.0);
        }
    }
}
