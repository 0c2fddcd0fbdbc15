//! Pedigree chart layout
//!
//! Assigns every person a generation row by walking the graph from a root,
//! then places each row centered on the canvas. Alongside the positioned
//! nodes it derives the connections a renderer draws and the sibships that
//! share one connector bar.
//!
//! Generation levels grow toward ancestors: the root is 0, parents are +1,
//! children are -1. People the walk never reaches still get a row each,
//! below the deepest one found.

use crate::config::LayoutConfig;
use crate::graph::FamilyGraph;
use crate::EngineError;
use kindred_domain::{Person, PersonId, RelationshipEdge, RelationshipType};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use tracing::debug;

/// A person placed on the chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeLayoutNode {
    /// The person on this card
    pub person: Person,

    /// Generation level relative to the root
    pub generation: i32,

    /// Horizontal center of the card
    pub x: f64,

    /// Vertical center of the card; equal for everyone in a generation
    pub y: f64,
}

/// Kind of line drawn between two cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionKind {
    /// Marriage line between two partners
    Spouse,
    /// Descent line from a parent to a child
    ParentChild,
}

/// A line between two people
///
/// Spouse connections are stored with the smaller id in `from`. Parent/child
/// connections always point from the parent to the child.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Connection {
    /// Start of the line
    pub from: PersonId,
    /// End of the line
    pub to: PersonId,
    /// What the line means
    pub kind: ConnectionKind,
}

/// Children who share exactly the same set of parents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sibship {
    /// Parent ids, sorted
    pub parents: Vec<PersonId>,
    /// Child ids, sorted
    pub children: Vec<PersonId>,
}

/// A complete pedigree chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeLayout {
    /// Cards in row order, top row first and left to right within a row
    pub nodes: Vec<TreeLayoutNode>,

    /// Unique spouse and parent/child lines
    pub connections: Vec<Connection>,

    /// Sibling groups, ordered by parent set
    pub sibships: Vec<Sibship>,

    /// Canvas width
    pub width: f64,

    /// Canvas height
    pub height: f64,
}

impl TreeLayout {
    /// Find the card for a person
    pub fn node(&self, id: &PersonId) -> Option<&TreeLayoutNode> {
        self.nodes.iter().find(|node| &node.person.id == id)
    }

    /// Number of distinct generation rows
    pub fn row_count(&self) -> usize {
        self.nodes
            .iter()
            .map(|node| node.generation)
            .collect::<BTreeSet<_>>()
            .len()
    }
}

/// Lay out a family as a generation-banded chart rooted at `root`
///
/// Edges naming someone outside `people` are skipped. Every person in
/// `people` appears exactly once in the result.
///
/// # Errors
///
/// Returns [`EngineError::UnknownPerson`] when `root` is not in `people`.
pub fn layout(
    people: &[Person],
    edges: &[RelationshipEdge],
    root: &PersonId,
    config: &LayoutConfig,
) -> Result<TreeLayout, EngineError> {
    let members = unique_members(people);
    if !members.iter().any(|person| &person.id == root) {
        return Err(EngineError::UnknownPerson(root.clone()));
    }

    let member_ids: HashSet<&PersonId> = members.iter().map(|person| &person.id).collect();
    let graph = FamilyGraph::from_edges_within(edges, &member_ids);

    let generations = assign_generations(&graph, &members, root);
    let (nodes, width, height) = place_rows(&members, &generations, config);

    let connections = connections(edges, &member_ids);
    let sibships = sibships(&connections);

    debug!(
        %root,
        nodes = nodes.len(),
        connections = connections.len(),
        sibships = sibships.len(),
        width,
        height,
        "Computed tree layout"
    );

    Ok(TreeLayout {
        nodes,
        connections,
        sibships,
        width,
        height,
    })
}

/// First occurrence of each id, in input order
fn unique_members(people: &[Person]) -> Vec<&Person> {
    let mut seen = HashSet::new();
    people
        .iter()
        .filter(|person| {
            let fresh = seen.insert(&person.id);
            if !fresh {
                debug!(person = %person.id, "Ignoring duplicate person record");
            }
            fresh
        })
        .collect()
}

/// Generation change when stepping to a neighbor who is `relation` to us
fn generation_delta(relation: RelationshipType) -> i32 {
    match relation {
        RelationshipType::Parent | RelationshipType::Grandparent => 1,
        RelationshipType::Child | RelationshipType::Grandchild => -1,
        _ => 0,
    }
}

fn assign_generations<'a>(
    graph: &'a FamilyGraph,
    members: &[&'a Person],
    root: &'a PersonId,
) -> HashMap<&'a PersonId, i32> {
    let mut generations: HashMap<&PersonId, i32> = HashMap::from([(root, 0)]);
    let mut queue: VecDeque<&PersonId> = VecDeque::from([root]);

    while let Some(current) = queue.pop_front() {
        let level = generations.get(current).copied().unwrap_or_default();
        for link in graph.links(current) {
            if generations.contains_key(&link.to) {
                continue;
            }
            generations.insert(&link.to, level + generation_delta(link.relation));
            queue.push_back(&link.to);
        }
    }

    // Disconnected people each get their own row under the deepest one
    let mut next_row = generations.values().copied().min().unwrap_or(0);
    for &person in members {
        if !generations.contains_key(&person.id) {
            next_row -= 1;
            debug!(person = %person.id, generation = next_row, "Person unreachable from root");
            generations.insert(&person.id, next_row);
        }
    }

    generations
}

fn place_rows(
    members: &[&Person],
    generations: &HashMap<&PersonId, i32>,
    config: &LayoutConfig,
) -> (Vec<TreeLayoutNode>, f64, f64) {
    let mut rows: BTreeMap<i32, Vec<&Person>> = BTreeMap::new();
    for &person in members {
        let generation = generations.get(&person.id).copied().unwrap_or_default();
        rows.entry(generation).or_default().push(person);
    }
    for row in rows.values_mut() {
        row.sort_by(|a, b| a.full_name().cmp(&b.full_name()).then_with(|| a.id.cmp(&b.id)));
    }

    let widest = rows
        .values()
        .map(|row| config.row_width(row.len()))
        .fold(0.0, f64::max);
    let width = widest + 2.0 * config.margin;
    let height = if rows.is_empty() {
        2.0 * config.margin
    } else {
        2.0 * config.margin + (rows.len() - 1) as f64 * config.row_gap + config.node_height
    };
    let midpoint = width / 2.0;

    let mut nodes = Vec::with_capacity(members.len());
    // Highest generation (oldest ancestors) on the top row
    for (row_index, (generation, row)) in rows.iter().rev().enumerate() {
        let y = config.margin + config.node_height / 2.0 + row_index as f64 * config.row_gap;
        let step = config.node_width + config.gap_for(row.len());
        let start = midpoint - config.row_width(row.len()) / 2.0 + config.node_width / 2.0;

        for (column, person) in row.iter().enumerate() {
            nodes.push(TreeLayoutNode {
                person: (*person).clone(),
                generation: *generation,
                x: start + column as f64 * step,
                y,
            });
        }
    }

    (nodes, width, height)
}

fn connections(edges: &[RelationshipEdge], members: &HashSet<&PersonId>) -> Vec<Connection> {
    let mut seen = HashSet::new();
    let mut connections = Vec::new();

    for edge in edges {
        if edge.is_self_loop() || !members.contains(&edge.source) || !members.contains(&edge.target) {
            continue;
        }

        let connection = match edge.kind {
            RelationshipType::Spouse => {
                let (from, to) = if edge.source <= edge.target {
                    (&edge.source, &edge.target)
                } else {
                    (&edge.target, &edge.source)
                };
                Connection {
                    from: from.clone(),
                    to: to.clone(),
                    kind: ConnectionKind::Spouse,
                }
            }
            RelationshipType::Parent => Connection {
                from: edge.source.clone(),
                to: edge.target.clone(),
                kind: ConnectionKind::ParentChild,
            },
            RelationshipType::Child => Connection {
                from: edge.target.clone(),
                to: edge.source.clone(),
                kind: ConnectionKind::ParentChild,
            },
            _ => continue,
        };

        if seen.insert(connection.clone()) {
            connections.push(connection);
        }
    }

    connections
}

fn sibships(connections: &[Connection]) -> Vec<Sibship> {
    let mut parents_of: BTreeMap<&PersonId, BTreeSet<&PersonId>> = BTreeMap::new();
    for connection in connections {
        if connection.kind == ConnectionKind::ParentChild {
            parents_of.entry(&connection.to).or_default().insert(&connection.from);
        }
    }

    let mut groups: BTreeMap<Vec<&PersonId>, Vec<&PersonId>> = BTreeMap::new();
    for (child, parents) in parents_of {
        groups.entry(parents.into_iter().collect()).or_default().push(child);
    }

    groups
        .into_iter()
        .map(|(parents, children)| Sibship {
            parents: parents.into_iter().cloned().collect(),
            children: children.into_iter().cloned().collect(),
        })
        .collect()
}
