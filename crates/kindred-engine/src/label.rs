//! Relationship labels
//!
//! Every label the engine can produce is a variant of [`RelationshipLabel`].
//! Locale tables and the gendering table are keyed by the enum, never by
//! English strings.

use kindred_domain::Gender;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A human relationship label, in "what the target is to the source" form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum RelationshipLabel {
    /// Source and target are the same person
    SelfPerson,
    /// No chain of edges connects the two people
    NotRelated,
    /// A chain with no entry in the pattern table; carries the hop count
    ExtendedFamily(usize),

    Parent,
    Mother,
    Father,
    Child,
    Daughter,
    Son,
    Sibling,
    Sister,
    Brother,
    HalfSibling,
    HalfSister,
    HalfBrother,
    Spouse,
    Wife,
    Husband,

    Grandparent,
    Grandmother,
    Grandfather,
    MaternalGrandparent,
    MaternalGrandmother,
    MaternalGrandfather,
    PaternalGrandparent,
    PaternalGrandmother,
    PaternalGrandfather,
    Grandchild,
    Granddaughter,
    Grandson,
    GreatGrandparent,
    GreatGrandmother,
    GreatGrandfather,
    GreatGrandchild,
    GreatGranddaughter,
    GreatGrandson,

    AuntUncle,
    Aunt,
    Uncle,
    MaternalAuntUncle,
    MaternalAunt,
    MaternalUncle,
    PaternalAuntUncle,
    PaternalAunt,
    PaternalUncle,
    /// Father's brother born before the father
    PaternalUncleElder,
    /// Father's brother born after the father
    PaternalUncleYounger,
    NieceNephew,
    Niece,
    Nephew,
    GreatAuntUncle,
    GreatAunt,
    GreatUncle,
    GrandNieceNephew,
    GrandNiece,
    GrandNephew,
    FirstCousin,
    FirstCousinOnceRemoved,

    AuntUncleSpouse,
    MaternalAuntSpouse,
    MaternalUncleSpouse,
    PaternalAuntSpouse,
    PaternalUncleSpouse,
    ParentInLaw,
    MotherInLaw,
    FatherInLaw,
    ChildInLaw,
    DaughterInLaw,
    SonInLaw,
    SiblingInLaw,
    SisterInLaw,
    BrotherInLaw,
    StepParent,
    Stepmother,
    Stepfather,
    StepChild,
    Stepdaughter,
    Stepson,
}

impl RelationshipLabel {
    /// The (female, male) forms of a gender-neutral label
    ///
    /// `None` for labels that are already gendered or have no gendered form.
    pub fn gender_forms(&self) -> Option<(Self, Self)> {
        use RelationshipLabel as L;

        let forms = match self {
            L::Parent => (L::Mother, L::Father),
            L::Child => (L::Daughter, L::Son),
            L::Sibling => (L::Sister, L::Brother),
            L::HalfSibling => (L::HalfSister, L::HalfBrother),
            L::Spouse => (L::Wife, L::Husband),
            L::Grandparent => (L::Grandmother, L::Grandfather),
            L::MaternalGrandparent => (L::MaternalGrandmother, L::MaternalGrandfather),
            L::PaternalGrandparent => (L::PaternalGrandmother, L::PaternalGrandfather),
            L::Grandchild => (L::Granddaughter, L::Grandson),
            L::GreatGrandparent => (L::GreatGrandmother, L::GreatGrandfather),
            L::GreatGrandchild => (L::GreatGranddaughter, L::GreatGrandson),
            L::AuntUncle => (L::Aunt, L::Uncle),
            L::MaternalAuntUncle => (L::MaternalAunt, L::MaternalUncle),
            L::PaternalAuntUncle => (L::PaternalAunt, L::PaternalUncle),
            L::NieceNephew => (L::Niece, L::Nephew),
            L::GreatAuntUncle => (L::GreatAunt, L::GreatUncle),
            L::GrandNieceNephew => (L::GrandNiece, L::GrandNephew),
            L::ParentInLaw => (L::MotherInLaw, L::FatherInLaw),
            L::ChildInLaw => (L::DaughterInLaw, L::SonInLaw),
            L::SiblingInLaw => (L::SisterInLaw, L::BrotherInLaw),
            L::StepParent => (L::Stepmother, L::Stepfather),
            L::StepChild => (L::Stepdaughter, L::Stepson),
            _ => return None,
        };
        Some(forms)
    }

    /// Apply the target's gender, leaving labels without gendered forms as-is
    pub fn gendered(self, gender: Option<Gender>) -> Self {
        match (self.gender_forms(), gender) {
            (Some((female, _)), Some(Gender::Female)) => female,
            (Some((_, male)), Some(Gender::Male)) => male,
            _ => self,
        }
    }

    /// English text of the label
    pub fn english(&self) -> String {
        use RelationshipLabel as L;

        let text = match self {
            L::ExtendedFamily(hops) => return format!("Extended Family ({}°)", hops),
            L::SelfPerson => "Self",
            L::NotRelated => "Not Related",
            L::Parent => "Parent",
            L::Mother => "Mother",
            L::Father => "Father",
            L::Child => "Child",
            L::Daughter => "Daughter",
            L::Son => "Son",
            L::Sibling => "Sibling",
            L::Sister => "Sister",
            L::Brother => "Brother",
            L::HalfSibling => "Half-Sibling",
            L::HalfSister => "Half-Sister",
            L::HalfBrother => "Half-Brother",
            L::Spouse => "Spouse",
            L::Wife => "Wife",
            L::Husband => "Husband",
            L::Grandparent => "Grandparent",
            L::Grandmother => "Grandmother",
            L::Grandfather => "Grandfather",
            L::MaternalGrandparent => "Maternal Grandparent",
            L::MaternalGrandmother => "Maternal Grandmother",
            L::MaternalGrandfather => "Maternal Grandfather",
            L::PaternalGrandparent => "Paternal Grandparent",
            L::PaternalGrandmother => "Paternal Grandmother",
            L::PaternalGrandfather => "Paternal Grandfather",
            L::Grandchild => "Grandchild",
            L::Granddaughter => "Granddaughter",
            L::Grandson => "Grandson",
            L::GreatGrandparent => "Great-Grandparent",
            L::GreatGrandmother => "Great-Grandmother",
            L::GreatGrandfather => "Great-Grandfather",
            L::GreatGrandchild => "Great-Grandchild",
            L::GreatGranddaughter => "Great-Granddaughter",
            L::GreatGrandson => "Great-Grandson",
            L::AuntUncle => "Aunt/Uncle",
            L::Aunt => "Aunt",
            L::Uncle => "Uncle",
            L::MaternalAuntUncle => "Maternal Aunt/Uncle",
            L::MaternalAunt => "Maternal Aunt",
            L::MaternalUncle => "Maternal Uncle",
            L::PaternalAuntUncle => "Paternal Aunt/Uncle",
            L::PaternalAunt => "Paternal Aunt",
            L::PaternalUncle => "Paternal Uncle",
            L::PaternalUncleElder => "Paternal Uncle (Elder)",
            L::PaternalUncleYounger => "Paternal Uncle (Younger)",
            L::NieceNephew => "Niece/Nephew",
            L::Niece => "Niece",
            L::Nephew => "Nephew",
            L::GreatAuntUncle => "Great-Aunt/Uncle",
            L::GreatAunt => "Great-Aunt",
            L::GreatUncle => "Great-Uncle",
            L::GrandNieceNephew => "Grandniece/Grandnephew",
            L::GrandNiece => "Grandniece",
            L::GrandNephew => "Grandnephew",
            L::FirstCousin => "First Cousin",
            L::FirstCousinOnceRemoved => "First Cousin Once Removed",
            L::AuntUncleSpouse => "Aunt/Uncle's Spouse",
            L::MaternalAuntSpouse => "Maternal Aunt's Spouse",
            L::MaternalUncleSpouse => "Maternal Uncle's Spouse",
            L::PaternalAuntSpouse => "Paternal Aunt's Spouse",
            L::PaternalUncleSpouse => "Paternal Uncle's Spouse",
            L::ParentInLaw => "Parent-in-Law",
            L::MotherInLaw => "Mother-in-Law",
            L::FatherInLaw => "Father-in-Law",
            L::ChildInLaw => "Child-in-Law",
            L::DaughterInLaw => "Daughter-in-Law",
            L::SonInLaw => "Son-in-Law",
            L::SiblingInLaw => "Sibling-in-Law",
            L::SisterInLaw => "Sister-in-Law",
            L::BrotherInLaw => "Brother-in-Law",
            L::StepParent => "Step-Parent",
            L::Stepmother => "Stepmother",
            L::Stepfather => "Stepfather",
            L::StepChild => "Stepchild",
            L::Stepdaughter => "Stepdaughter",
            L::Stepson => "Stepson",
        };
        text.to_string()
    }
}

impl fmt::Display for RelationshipLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.english())
    }
}
