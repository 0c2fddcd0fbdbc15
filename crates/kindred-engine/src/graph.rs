//! Relationship graph builder
//!
//! Turns the flat list of directed edges into an adjacency map keyed by
//! person id. Every edge is stored from both ends, so a traversal can walk
//! it in either direction.

use kindred_domain::{PersonId, RelationshipEdge, RelationshipType};
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// One end of a stored edge, seen from the person that owns the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// The neighbor
    pub to: PersonId,

    /// What the owner is to the neighbor
    pub kind: RelationshipType,

    /// What the neighbor is to the owner
    ///
    /// Usually `kind.inverse()`, except that a declared specialization
    /// (e.g. `PaternalUncle`) survives here when the edge is walked backwards.
    pub relation: RelationshipType,
}

/// Bidirectional adjacency over person ids
#[derive(Debug, Clone, Default)]
pub struct FamilyGraph {
    adjacency: HashMap<PersonId, Vec<Link>>,
}

impl FamilyGraph {
    /// Build the graph from every edge
    pub fn from_edges(edges: &[RelationshipEdge]) -> Self {
        let mut graph = Self::default();
        for edge in edges {
            graph.add_edge(edge);
        }
        debug!(
            edges = edges.len(),
            people = graph.person_count(),
            links = graph.link_count(),
            "Built family graph"
        );
        graph
    }

    /// Build the graph from the edges whose endpoints are both members
    ///
    /// Edges naming anyone else are skipped; the rest of the graph is kept.
    pub fn from_edges_within(edges: &[RelationshipEdge], members: &HashSet<&PersonId>) -> Self {
        let mut graph = Self::default();
        for edge in edges {
            if members.contains(&edge.source) && members.contains(&edge.target) {
                graph.add_edge(edge);
            } else {
                debug!(
                    edge = %edge.id,
                    source = %edge.source,
                    target = %edge.target,
                    "Skipping edge that references an unknown person"
                );
            }
        }
        graph
    }

    /// Insert an edge and its inverse
    ///
    /// Re-inserting an identical (source, target, type) triple is a no-op.
    pub fn add_edge(&mut self, edge: &RelationshipEdge) {
        if edge.is_self_loop() {
            warn!(edge = %edge.id, person = %edge.source, "Ignoring self-referencing edge");
            return;
        }

        self.insert(&edge.source, Link {
            to: edge.target.clone(),
            kind: edge.kind,
            relation: edge.kind.inverse(),
        });
        self.insert(&edge.target, Link {
            to: edge.source.clone(),
            kind: edge.kind.inverse(),
            relation: edge.kind,
        });
    }

    fn insert(&mut self, owner: &PersonId, link: Link) {
        let links = self.adjacency.entry(owner.clone()).or_default();
        if !links.contains(&link) {
            links.push(link);
        }
    }

    /// Neighbors of a person, in insertion order
    pub fn links(&self, id: &PersonId) -> &[Link] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// True if the person has at least one edge
    pub fn contains(&self, id: &PersonId) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Number of people with at least one edge
    pub fn person_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of stored links (two per distinct edge)
    pub fn link_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}
