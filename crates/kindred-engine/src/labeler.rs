//! Relationship labeler
//!
//! Turns a [`KinPath`] into a [`RelationshipLabel`]:
//! 1. Look the chain of relations up in the pattern table
//! 2. Resolve maternal/paternal sides from the people along the path
//! 3. Apply the target's gender
//! 4. Split a paternal uncle into elder/younger by birth date

use crate::graph::FamilyGraph;
use crate::path::KinPath;
use crate::RelationshipLabel;
use chrono::NaiveDate;
use kindred_domain::{Gender, Person, PersonId, RelationshipType};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

use RelationshipLabel as L;
use RelationshipType as R;

/// Chain of relations (what each next person is to the previous) to label
///
/// Direct aunt/uncle specializations have their own one-hop entries, so a
/// declared `PaternalUncle` edge is labeled without consulting anyone's gender.
static CHAIN_LABELS: &[(&[RelationshipType], RelationshipLabel)] = &[
    // One hop
    (&[R::Parent], L::Parent),
    (&[R::Child], L::Child),
    (&[R::Sibling], L::Sibling),
    (&[R::HalfSibling], L::HalfSibling),
    (&[R::Spouse], L::Spouse),
    (&[R::Grandparent], L::Grandparent),
    (&[R::Grandchild], L::Grandchild),
    (&[R::AuntUncle], L::AuntUncle),
    (&[R::MaternalAunt], L::MaternalAunt),
    (&[R::MaternalUncle], L::MaternalUncle),
    (&[R::PaternalAunt], L::PaternalAunt),
    (&[R::PaternalUncle], L::PaternalUncle),
    (&[R::NieceNephew], L::NieceNephew),
    (&[R::Cousin], L::FirstCousin),
    // Two hops
    (&[R::Parent, R::Parent], L::Grandparent),
    (&[R::Child, R::Child], L::Grandchild),
    (&[R::Parent, R::Sibling], L::AuntUncle),
    (&[R::Parent, R::HalfSibling], L::AuntUncle),
    (&[R::Grandparent, R::Child], L::AuntUncle),
    (&[R::Sibling, R::Child], L::NieceNephew),
    (&[R::HalfSibling, R::Child], L::NieceNephew),
    (&[R::Sibling, R::Sibling], L::Sibling),
    (&[R::Parent, R::Child], L::Sibling),
    (&[R::Parent, R::Grandparent], L::GreatGrandparent),
    (&[R::Grandparent, R::Parent], L::GreatGrandparent),
    (&[R::Child, R::Grandchild], L::GreatGrandchild),
    (&[R::Grandchild, R::Child], L::GreatGrandchild),
    (&[R::Parent, R::AuntUncle], L::GreatAuntUncle),
    (&[R::Grandparent, R::Sibling], L::GreatAuntUncle),
    (&[R::Sibling, R::Grandchild], L::GrandNieceNephew),
    (&[R::NieceNephew, R::Child], L::GrandNieceNephew),
    (&[R::AuntUncle, R::Child], L::FirstCousin),
    (&[R::Parent, R::NieceNephew], L::FirstCousin),
    (&[R::Cousin, R::Child], L::FirstCousinOnceRemoved),
    (&[R::Parent, R::Cousin], L::FirstCousinOnceRemoved),
    (&[R::AuntUncle, R::Spouse], L::AuntUncleSpouse),
    (&[R::Spouse, R::Parent], L::ParentInLaw),
    (&[R::Child, R::Spouse], L::ChildInLaw),
    (&[R::Sibling, R::Spouse], L::SiblingInLaw),
    (&[R::Spouse, R::Sibling], L::SiblingInLaw),
    (&[R::Parent, R::Spouse], L::StepParent),
    (&[R::Spouse, R::Child], L::StepChild),
    // Three hops
    (&[R::Parent, R::Parent, R::Parent], L::GreatGrandparent),
    (&[R::Child, R::Child, R::Child], L::GreatGrandchild),
    (&[R::Parent, R::Sibling, R::Child], L::FirstCousin),
    (&[R::Parent, R::Parent, R::Child], L::AuntUncle),
    (&[R::Parent, R::Parent, R::Sibling], L::GreatAuntUncle),
    (&[R::Sibling, R::Child, R::Child], L::GrandNieceNephew),
    (&[R::Parent, R::Sibling, R::Spouse], L::AuntUncleSpouse),
    (&[R::Parent, R::AuntUncle, R::Child], L::FirstCousinOnceRemoved),
    // Four hops
    (&[R::Parent, R::Parent, R::Child, R::Child], L::FirstCousin),
    (&[R::Parent, R::Sibling, R::Child, R::Child], L::FirstCousinOnceRemoved),
    (&[R::Parent, R::Parent, R::Sibling, R::Child], L::FirstCousinOnceRemoved),
];

/// Look a chain up in the pattern table
///
/// Unmatched chains become `ExtendedFamily(n)` with `n` the hop count.
pub fn chain_label(relations: &[RelationshipType]) -> RelationshipLabel {
    if relations.is_empty() {
        return L::SelfPerson;
    }

    CHAIN_LABELS
        .iter()
        .find(|(chain, _)| *chain == relations)
        .map(|(_, label)| *label)
        .unwrap_or(L::ExtendedFamily(relations.len()))
}

/// Whether a paternal uncle was born before or after the father
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BirthOrder {
    /// Born before the father
    Elder,
    /// Born after the father
    Younger,
    /// A date is missing or unparseable, or both are the same day
    Unknown,
}

impl BirthOrder {
    /// Compare a relative's birth date against the reference parent's
    pub fn compare(relative: Option<NaiveDate>, parent: Option<NaiveDate>) -> Self {
        match (relative, parent) {
            (Some(relative), Some(parent)) => match relative.cmp(&parent) {
                Ordering::Less => BirthOrder::Elder,
                Ordering::Greater => BirthOrder::Younger,
                Ordering::Equal => BirthOrder::Unknown,
            },
            _ => BirthOrder::Unknown,
        }
    }
}

/// Label plus the birth-order detail behind it, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedLabel {
    /// The final, gendered label
    pub label: RelationshipLabel,

    /// Set only for paternal uncles
    pub birth_order: Option<BirthOrder>,
}

/// Labels paths using the people along them for disambiguation
pub struct Labeler<'a> {
    people: HashMap<&'a PersonId, &'a Person>,
    graph: Option<&'a FamilyGraph>,
}

impl<'a> Labeler<'a> {
    /// Create a labeler that can look at the given people
    ///
    /// The first record for an id wins; later duplicates are ignored.
    pub fn new(people: &'a [Person]) -> Self {
        let mut by_id = HashMap::with_capacity(people.len());
        for person in people {
            by_id.entry(&person.id).or_insert(person);
        }
        Self {
            people: by_id,
            graph: None,
        }
    }

    /// Create a labeler with nobody to look at (no side/gender resolution)
    pub fn without_people() -> Self {
        Self {
            people: HashMap::new(),
            graph: None,
        }
    }

    /// Let the labeler find parents that are not on the path itself
    ///
    /// Needed for declared shortcuts such as a one-hop `PaternalUncle` edge
    /// or a `Grandparent` edge, where the parent linking the two sides is
    /// off the path.
    pub fn with_graph(mut self, graph: &'a FamilyGraph) -> Self {
        self.graph = Some(graph);
        self
    }

    /// Label a path
    ///
    /// `target_gender` wins over the target's own record when both exist.
    pub fn label(&self, path: &KinPath, target_gender: Option<Gender>) -> ResolvedLabel {
        if path.is_empty() {
            return ResolvedLabel {
                label: L::SelfPerson,
                birth_order: None,
            };
        }

        let base = chain_label(&path.relations);
        let sided = self.resolve_side(base, path);
        let gender = target_gender.or_else(|| path.ids.last().and_then(|id| self.gender_of(id)));
        let label = sided.gendered(gender);

        if label != L::PaternalUncle {
            return ResolvedLabel { label, birth_order: None };
        }

        let order = self.paternal_uncle_order(path);
        let label = match order {
            BirthOrder::Elder => L::PaternalUncleElder,
            BirthOrder::Younger => L::PaternalUncleYounger,
            BirthOrder::Unknown => L::PaternalUncle,
        };
        ResolvedLabel {
            label,
            birth_order: Some(order),
        }
    }

    /// Maternal/paternal resolution for the chains where the side is knowable
    fn resolve_side(&self, base: RelationshipLabel, path: &KinPath) -> RelationshipLabel {
        match path.relations.as_slice() {
            [R::Parent, R::Parent] => match self.gender_of(&path.ids[1]) {
                Some(Gender::Female) => L::MaternalGrandparent,
                Some(Gender::Male) => L::PaternalGrandparent,
                None => base,
            },
            [R::Parent, R::Sibling | R::HalfSibling] | [R::Parent, R::Parent, R::Child] => {
                self.side_through(&path.ids[1], base)
            }
            [R::Grandparent, R::Child] => match self.parent_below(&path.ids[0], &path.ids[1]) {
                Some(parent) => self.side_through(parent, base),
                None => base,
            },
            [R::Parent, R::Sibling, R::Spouse] => {
                match (self.gender_of(&path.ids[1]), self.gender_of(&path.ids[2])) {
                    (Some(Gender::Female), Some(Gender::Female)) => L::MaternalAuntSpouse,
                    (Some(Gender::Female), Some(Gender::Male)) => L::MaternalUncleSpouse,
                    (Some(Gender::Male), Some(Gender::Female)) => L::PaternalAuntSpouse,
                    (Some(Gender::Male), Some(Gender::Male)) => L::PaternalUncleSpouse,
                    _ => base,
                }
            }
            _ => base,
        }
    }

    /// Aunt/uncle side from the gender of the parent the line runs through
    fn side_through(&self, parent: &PersonId, base: RelationshipLabel) -> RelationshipLabel {
        match self.gender_of(parent) {
            Some(Gender::Female) => L::MaternalAuntUncle,
            Some(Gender::Male) => L::PaternalAuntUncle,
            None => base,
        }
    }

    /// Compare the uncle against the father, on the path or looked up
    fn paternal_uncle_order(&self, path: &KinPath) -> BirthOrder {
        let father = match (path.relations.as_slice(), path.ids.as_slice()) {
            ([R::Parent, R::Sibling | R::HalfSibling], [_, father, _]) => Some(father),
            ([R::Parent, R::Parent, R::Child], [_, father, _, _]) => Some(father),
            ([R::PaternalUncle], [source, _]) => self.father_of(source),
            ([R::Grandparent, R::Child], [source, grandparent, _]) => self.parent_below(source, grandparent),
            _ => None,
        };

        match (father, path.ids.last()) {
            (Some(father), Some(uncle)) => {
                BirthOrder::compare(self.birth_date_of(uncle), self.birth_date_of(father))
            }
            _ => BirthOrder::Unknown,
        }
    }

    /// The person's first recorded male parent
    fn father_of(&self, person: &PersonId) -> Option<&'a PersonId> {
        let graph = self.graph?;
        graph
            .links(person)
            .iter()
            .filter(|link| link.relation == R::Parent)
            .map(|link| &link.to)
            .find(|parent| self.gender_of(parent) == Some(Gender::Male))
    }

    /// The person's parent who is a child of `grandparent`
    fn parent_below(&self, person: &PersonId, grandparent: &PersonId) -> Option<&'a PersonId> {
        let graph = self.graph?;
        graph
            .links(person)
            .iter()
            .filter(|link| link.relation == R::Parent)
            .map(|link| &link.to)
            .find(|parent| {
                graph
                    .links(parent)
                    .iter()
                    .any(|link| link.relation == R::Parent && &link.to == grandparent)
            })
    }

    fn gender_of(&self, id: &PersonId) -> Option<Gender> {
        self.people.get(id).and_then(|p| p.gender)
    }

    fn birth_date_of(&self, id: &PersonId) -> Option<NaiveDate> {
        self.people.get(id).and_then(|p| p.parsed_birth_date())
    }
}
