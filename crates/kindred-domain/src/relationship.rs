//! Relationship module - typed, directed edges between people

use super::PersonId;
use serde::{Deserialize, Serialize};

/// Type of relationship an edge declares
///
/// Read an edge as "source is *type* of target": an edge
/// `(grandma, mum, Parent)` says grandma is mum's parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipType {
    /// Biological parent
    Parent,

    /// Biological child
    Child,

    /// Full sibling
    Sibling,

    /// Sibling sharing one parent
    HalfSibling,

    /// Married or partnered; never shares blood
    Spouse,

    /// Grandparent
    Grandparent,

    /// Grandchild
    Grandchild,

    /// Aunt or uncle, side unknown
    AuntUncle,

    /// Mother's sister
    MaternalAunt,

    /// Mother's brother
    MaternalUncle,

    /// Father's sister
    PaternalAunt,

    /// Father's brother
    PaternalUncle,

    /// Niece or nephew
    NieceNephew,

    /// First cousin
    Cousin,
}

impl RelationshipType {
    /// Every variant, in declaration order
    pub const ALL: [RelationshipType; 14] = [
        RelationshipType::Parent,
        RelationshipType::Child,
        RelationshipType::Sibling,
        RelationshipType::HalfSibling,
        RelationshipType::Spouse,
        RelationshipType::Grandparent,
        RelationshipType::Grandchild,
        RelationshipType::AuntUncle,
        RelationshipType::MaternalAunt,
        RelationshipType::MaternalUncle,
        RelationshipType::PaternalAunt,
        RelationshipType::PaternalUncle,
        RelationshipType::NieceNephew,
        RelationshipType::Cousin,
    ];

    /// Coefficient of relationship carried by one hop of this type
    ///
    /// Spouse is exactly zero, which is what keeps in-laws out of every
    /// blood-relative result.
    pub fn coefficient(&self) -> f64 {
        match self {
            RelationshipType::Parent | RelationshipType::Child => 0.5,
            RelationshipType::Sibling => 0.5,
            RelationshipType::HalfSibling => 0.25,
            RelationshipType::Spouse => 0.0,
            RelationshipType::Grandparent | RelationshipType::Grandchild => 0.25,
            RelationshipType::AuntUncle
            | RelationshipType::MaternalAunt
            | RelationshipType::MaternalUncle
            | RelationshipType::PaternalAunt
            | RelationshipType::PaternalUncle
            | RelationshipType::NieceNephew => 0.25,
            RelationshipType::Cousin => 0.125,
        }
    }

    /// The type seen from the other end of the edge
    ///
    /// Specialized aunt/uncle types invert to `NieceNephew`, whose inverse is
    /// the generic `AuntUncle`.
    pub fn inverse(&self) -> Self {
        match self {
            RelationshipType::Parent => RelationshipType::Child,
            RelationshipType::Child => RelationshipType::Parent,
            RelationshipType::Grandparent => RelationshipType::Grandchild,
            RelationshipType::Grandchild => RelationshipType::Grandparent,
            RelationshipType::AuntUncle
            | RelationshipType::MaternalAunt
            | RelationshipType::MaternalUncle
            | RelationshipType::PaternalAunt
            | RelationshipType::PaternalUncle => RelationshipType::NieceNephew,
            RelationshipType::NieceNephew => RelationshipType::AuntUncle,
            RelationshipType::Sibling
            | RelationshipType::HalfSibling
            | RelationshipType::Spouse
            | RelationshipType::Cousin => *self,
        }
    }

    /// Drop any maternal/paternal or aunt/uncle specialization
    pub fn generic(&self) -> Self {
        match self {
            RelationshipType::MaternalAunt
            | RelationshipType::MaternalUncle
            | RelationshipType::PaternalAunt
            | RelationshipType::PaternalUncle => RelationshipType::AuntUncle,
            other => *other,
        }
    }

    /// Check the coefficient and inverse tables against each other
    ///
    /// Holds when every coefficient lies in `[0, 1]`, spouse is zero, a type
    /// and its inverse carry the same coefficient, and inverting twice lands
    /// on the generic form.
    pub fn tables_consistent() -> bool {
        Self::ALL.iter().all(|kind| {
            let coefficient = kind.coefficient();
            (0.0..=1.0).contains(&coefficient)
                && coefficient == kind.inverse().coefficient()
                && kind.inverse().inverse() == kind.generic()
        }) && RelationshipType::Spouse.coefficient() == 0.0
    }

    /// Get the type name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipType::Parent => "parent",
            RelationshipType::Child => "child",
            RelationshipType::Sibling => "sibling",
            RelationshipType::HalfSibling => "half_sibling",
            RelationshipType::Spouse => "spouse",
            RelationshipType::Grandparent => "grandparent",
            RelationshipType::Grandchild => "grandchild",
            RelationshipType::AuntUncle => "aunt_uncle",
            RelationshipType::MaternalAunt => "maternal_aunt",
            RelationshipType::MaternalUncle => "maternal_uncle",
            RelationshipType::PaternalAunt => "paternal_aunt",
            RelationshipType::PaternalUncle => "paternal_uncle",
            RelationshipType::NieceNephew => "niece_nephew",
            RelationshipType::Cousin => "cousin",
        }
    }
}

impl std::str::FromStr for RelationshipType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .iter()
            .find(|kind| kind.as_str() == normalized)
            .copied()
            .ok_or_else(|| format!("Invalid relationship type: {}", s))
    }
}

/// A directed, typed edge between two people
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipEdge {
    /// Edge identifier assigned by the persistence collaborator
    pub id: String,

    /// Person the relationship is stated about
    pub source: PersonId,

    /// Person the source is related to
    pub target: PersonId,

    /// What the source is to the target
    #[serde(rename = "type")]
    pub kind: RelationshipType,
}

impl RelationshipEdge {
    /// Create a new edge
    pub fn new(
        id: impl Into<String>,
        source: impl Into<PersonId>,
        target: impl Into<PersonId>,
        kind: RelationshipType,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            kind,
        }
    }

    /// True when the edge points back at its own source
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_consistent() {
        assert!(RelationshipType::tables_consistent());
    }

    #[test]
    fn test_spouse_breaks_blood() {
        assert_eq!(RelationshipType::Spouse.coefficient(), 0.0);
    }

    #[test]
    fn test_inverse_pairs() {
        assert_eq!(RelationshipType::Parent.inverse(), RelationshipType::Child);
        assert_eq!(RelationshipType::Grandchild.inverse(), RelationshipType::Grandparent);
        assert_eq!(RelationshipType::PaternalUncle.inverse(), RelationshipType::NieceNephew);
        assert_eq!(RelationshipType::NieceNephew.inverse(), RelationshipType::AuntUncle);
        assert_eq!(RelationshipType::Cousin.inverse(), RelationshipType::Cousin);
    }

    #[test]
    fn test_all_is_complete() {
        // Every variant appears exactly once
        let mut seen = std::collections::HashSet::new();
        for kind in RelationshipType::ALL {
            assert!(seen.insert(kind), "{:?} listed twice", kind);
        }
        assert_eq!(seen.len(), RelationshipType::ALL.len());
    }

    #[test]
    fn test_parse_roundtrip_names() {
        for kind in RelationshipType::ALL {
            assert_eq!(kind.as_str().parse::<RelationshipType>(), Ok(kind));
        }
        assert_eq!("Half-Sibling".parse(), Ok(RelationshipType::HalfSibling));
        assert!("godparent".parse::<RelationshipType>().is_err());
    }

    #[test]
    fn test_edge_serde_uses_type_key() {
        let edge = RelationshipEdge::new("e1", "mum", "ego", RelationshipType::Parent);
        let json = serde_json::to_string(&edge).unwrap();
        assert!(json.contains(r#""type":"parent""#));

        let parsed: RelationshipEdge = serde_json::from_str(
            r#"{"id":"e2","source":"a","target":"b","type":"paternal_uncle"}"#,
        )
        .unwrap();
        assert_eq!(parsed.kind, RelationshipType::PaternalUncle);
    }

    #[test]
    fn test_self_loop_detection() {
        assert!(RelationshipEdge::new("e1", "a", "a", RelationshipType::Sibling).is_self_loop());
        assert!(!RelationshipEdge::new("e2", "a", "b", RelationshipType::Sibling).is_self_loop());
    }
}
