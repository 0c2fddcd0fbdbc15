//! Snapshot of one family, as handed over by the persistence layer

use crate::{ConditionId, FamilySource, Person, PersonId, RelationshipEdge};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// People, edges and condition carriers of one family
///
/// The engine reads a snapshot per call and keeps nothing afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FamilySnapshot {
    /// Family members
    #[serde(default)]
    pub people: Vec<Person>,

    /// Declared relationship edges
    #[serde(default)]
    pub relationships: Vec<RelationshipEdge>,

    /// Conditions carried, keyed by person
    #[serde(default)]
    pub conditions: BTreeMap<PersonId, Vec<ConditionId>>,
}

impl FamilySnapshot {
    /// Create a snapshot from people and edges
    pub fn new(people: Vec<Person>, relationships: Vec<RelationshipEdge>) -> Self {
        Self {
            people,
            relationships,
            conditions: BTreeMap::new(),
        }
    }

    /// Record that a person carries a condition (ignored if already recorded)
    pub fn with_condition(mut self, person: impl Into<PersonId>, condition: impl Into<ConditionId>) -> Self {
        let carried = self.conditions.entry(person.into()).or_default();
        let condition = condition.into();
        if !carried.contains(&condition) {
            carried.push(condition);
        }
        self
    }
}

impl FamilySource for FamilySnapshot {
    fn people(&self) -> &[Person] {
        &self.people
    }

    fn edges(&self) -> &[RelationshipEdge] {
        &self.relationships
    }

    fn conditions_of(&self, id: &PersonId) -> &[ConditionId] {
        self.conditions.get(id).map(Vec::as_slice).unwrap_or(&[])
    }
}
