//! Kindred Domain Layer
//!
//! This crate contains the value types shared by every Kindred layer. It holds
//! no graph algorithms: the engine crate reads these types from an immutable
//! snapshot and never mutates them.
//!
//! ## Key Concepts
//!
//! - **Person**: A family member with optional gender and birth date
//! - **RelationshipEdge**: A directed, typed edge ("source is *type* of target")
//! - **RelationshipType**: The closed set of edge types, each with a fixed
//!   coefficient of relationship and a total inverse
//! - **Condition**: A hereditary condition carried by some members
//! - **FamilySnapshot**: The people/edges/carriers bundle handed to the engine
//!
//! ## Architecture
//!
//! - Pure data, no I/O
//! - Dependencies limited to primitives (`uuid`, `chrono`, `serde`)
//! - Trait definitions for the collaborators that supply snapshots

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod condition;
pub mod person;
pub mod relationship;
pub mod snapshot;
pub mod traits;

// Re-exports for convenience
pub use condition::ConditionId;
pub use person::{Gender, Person, PersonId};
pub use relationship::{RelationshipEdge, RelationshipType};
pub use snapshot::FamilySnapshot;
pub use traits::FamilySource;
