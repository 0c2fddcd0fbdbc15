//! Kindred Engine
//!
//! Family relationship graph engine: genetic matching, kinship labels and
//! pedigree chart layout over a read-only family snapshot.
//!
//! # Overview
//!
//! The engine is responsible for:
//! - **Genetic match**: shortest chain of relationships between two people,
//!   its coefficient of relationship and a localized, gendered label
//! - **Blood relatives**: everyone sharing a nonzero coefficient with a person
//! - **Shared conditions**: blood relatives who carry the same condition,
//!   closest first
//! - **Tree layout**: generation rows, centered coordinates, connections and
//!   sibships for a pedigree chart
//! - **Generation analytics**: member counts and oldest/youngest per row
//!
//! Every call is synchronous and pure. The engine owns no state beyond its
//! configuration and never mutates its inputs.
//!
//! ## Coefficients
//!
//! | Relationship | Coefficient |
//! |--------------|-------------|
//! | Parent, child, sibling | 0.5 |
//! | Half-sibling, grandparent, grandchild, aunt/uncle, niece/nephew | 0.25 |
//! | Cousin | 0.125 |
//! | Spouse | 0 |
//!
//! A chain's coefficient is the product along the chain, so any chain that
//! crosses a marriage is 0: in-laws are never blood relatives.
//!
//! # Usage
//!
//! ```
//! use kindred_domain::{Gender, Person, PersonId, RelationshipEdge, RelationshipType};
//! use kindred_engine::{genetic_match, MatchContext};
//!
//! let people = vec![
//!     Person::new("gran", "Edith", "Park").with_gender(Gender::Female),
//!     Person::new("mum", "Mary", "Lee").with_gender(Gender::Female),
//!     Person::new("ego", "Sam", "Lee"),
//! ];
//! let edges = vec![
//!     RelationshipEdge::new("e1", "gran", "mum", RelationshipType::Parent),
//!     RelationshipEdge::new("e2", "mum", "ego", RelationshipType::Parent),
//! ];
//!
//! let result = genetic_match(
//!     &PersonId::from("ego"),
//!     &PersonId::from("gran"),
//!     &edges,
//!     &MatchContext::with_people(&people),
//! );
//! assert_eq!(result.percentage, 25.0);
//! assert_eq!(result.label, "Maternal Grandmother");
//! ```
//!
//! ## Layout
//!
//! ```
//! use kindred_domain::{Person, PersonId, RelationshipEdge, RelationshipType};
//! use kindred_engine::{layout, generation_analytics, LayoutConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let people = vec![Person::new("mum", "Mary", "Lee"), Person::new("ego", "Sam", "Lee")];
//! let edges = vec![RelationshipEdge::new("e1", "mum", "ego", RelationshipType::Parent)];
//!
//! let config = LayoutConfig::default();
//! let chart = layout(&people, &edges, &PersonId::from("ego"), &config)?;
//! assert_eq!(chart.row_count(), 2);
//! assert!(chart.sibship_connectors(&config).iter().all(|s| s.is_axis_aligned()));
//!
//! let analytics = generation_analytics(&chart);
//! assert_eq!(analytics.total_members(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! ```toml
//! default_locale = "en"
//!
//! [layout]
//! node_width = 160
//! node_height = 80
//! horizontal_gap = 48
//! compact_gap = 16
//! compact_threshold = 4
//! row_gap = 180
//! margin = 40
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod analytics;
mod config;
mod connector;
mod engine;
mod error;
pub mod graph;
mod label;
pub mod labeler;
mod layout;
mod locale;
mod matcher;
pub mod path;
mod relatives;

pub use analytics::{generation_analytics, GenerationAnalytics, GenerationSummary};
pub use config::{EngineConfig, LayoutConfig};
pub use connector::Segment;
pub use engine::KinshipEngine;
pub use error::EngineError;
pub use label::RelationshipLabel;
pub use labeler::BirthOrder;
pub use layout::{layout, Connection, ConnectionKind, Sibship, TreeLayout, TreeLayoutNode};
pub use locale::Locale;
pub use matcher::{genetic_match, GeneticMatchResult, MatchContext};
pub use relatives::{blood_relatives, shared_condition_relatives};
