//! Trait definitions for external interactions
//!
//! The engine never reaches for global state: whoever owns the family data
//! implements these traits and passes the snapshot in explicitly.

use crate::{ConditionId, Person, PersonId, RelationshipEdge};

/// Read-only access to one family's people, edges and condition carriers
///
/// Implemented by persistence collaborators (and by [`crate::FamilySnapshot`]).
pub trait FamilySource {
    /// Everyone in the family
    fn people(&self) -> &[Person];

    /// Every declared relationship edge
    fn edges(&self) -> &[RelationshipEdge];

    /// Conditions carried by a person (empty when none are recorded)
    fn conditions_of(&self, id: &PersonId) -> &[ConditionId];

    /// Look a person up by id
    fn person(&self, id: &PersonId) -> Option<&Person> {
        self.people().iter().find(|p| &p.id == id)
    }

    /// Ids of everyone in the family, in input order
    fn person_ids(&self) -> Vec<PersonId> {
        self.people().iter().map(|p| p.id.clone()).collect()
    }
}
