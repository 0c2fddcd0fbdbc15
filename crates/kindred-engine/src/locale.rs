//! Locale tables for relationship labels
//!
//! Each locale maps [`RelationshipLabel`] variants to a term. A missing entry
//! means the locale needs information the engine does not have (usually the
//! gender) to pick a term, and the English label is used unchanged.

use crate::{EngineError, RelationshipLabel};
use serde::{Deserialize, Serialize};

/// Supported display locales
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English
    #[default]
    En,
    /// Spanish
    Es,
    /// Chinese (Simplified)
    Zh,
}

impl Locale {
    /// Get the locale tag as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
            Locale::Zh => "zh",
        }
    }

    /// Render a label in this locale, falling back to English
    pub fn render(&self, label: RelationshipLabel) -> String {
        if let RelationshipLabel::ExtendedFamily(hops) = label {
            return match self {
                Locale::En => label.english(),
                Locale::Es => format!("Familia extendida ({}°)", hops),
                Locale::Zh => format!("远亲 ({}°)", hops),
            };
        }

        let term = match self {
            Locale::En => None,
            Locale::Es => spanish(label),
            Locale::Zh => chinese(label),
        };
        term.map(str::to_string).unwrap_or_else(|| label.english())
    }
}

impl std::str::FromStr for Locale {
    type Err = EngineError;

    /// Accepts bare tags and region-qualified ones (`zh-CN`, `es_MX`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let language = s
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_lowercase();
        match language.as_str() {
            "en" => Ok(Locale::En),
            "es" => Ok(Locale::Es),
            "zh" => Ok(Locale::Zh),
            _ => Err(EngineError::InvalidLocale(s.to_string())),
        }
    }
}

fn spanish(label: RelationshipLabel) -> Option<&'static str> {
    use RelationshipLabel as L;

    let term = match label {
        L::SelfPerson => "Yo",
        L::NotRelated => "Sin parentesco",
        L::Parent => "Progenitor",
        L::Mother => "Madre",
        L::Father => "Padre",
        L::Daughter => "Hija",
        L::Son => "Hijo",
        L::Sister => "Hermana",
        L::Brother => "Hermano",
        L::HalfSister => "Media hermana",
        L::HalfBrother => "Medio hermano",
        L::Spouse => "Cónyuge",
        L::Wife => "Esposa",
        L::Husband => "Esposo",
        L::Grandmother => "Abuela",
        L::Grandfather => "Abuelo",
        L::MaternalGrandmother => "Abuela materna",
        L::MaternalGrandfather => "Abuelo materno",
        L::PaternalGrandmother => "Abuela paterna",
        L::PaternalGrandfather => "Abuelo paterno",
        L::Granddaughter => "Nieta",
        L::Grandson => "Nieto",
        L::GreatGrandmother => "Bisabuela",
        L::GreatGrandfather => "Bisabuelo",
        L::GreatGranddaughter => "Bisnieta",
        L::GreatGrandson => "Bisnieto",
        L::Aunt => "Tía",
        L::Uncle => "Tío",
        L::MaternalAunt => "Tía materna",
        L::MaternalUncle => "Tío materno",
        L::PaternalAunt => "Tía paterna",
        L::PaternalUncle => "Tío paterno",
        L::PaternalUncleElder => "Tío paterno (mayor)",
        L::PaternalUncleYounger => "Tío paterno (menor)",
        L::Niece => "Sobrina",
        L::Nephew => "Sobrino",
        L::GreatAunt => "Tía abuela",
        L::GreatUncle => "Tío abuelo",
        L::GrandNiece => "Sobrina nieta",
        L::GrandNephew => "Sobrino nieto",
        L::MaternalAuntSpouse => "Cónyuge de la tía materna",
        L::MaternalUncleSpouse => "Cónyuge del tío materno",
        L::PaternalAuntSpouse => "Cónyuge de la tía paterna",
        L::PaternalUncleSpouse => "Cónyuge del tío paterno",
        L::MotherInLaw => "Suegra",
        L::FatherInLaw => "Suegro",
        L::DaughterInLaw => "Nuera",
        L::SonInLaw => "Yerno",
        L::SisterInLaw => "Cuñada",
        L::BrotherInLaw => "Cuñado",
        L::Stepmother => "Madrastra",
        L::Stepfather => "Padrastro",
        L::Stepdaughter => "Hijastra",
        L::Stepson => "Hijastro",
        _ => return None,
    };
    Some(term)
}

/// Chinese kin terms also encode the line (paternal or maternal, through a
/// son or a daughter) and often the speaker's own gender. Labels that do not
/// carry that information have no entry here.
fn chinese(label: RelationshipLabel) -> Option<&'static str> {
    use RelationshipLabel as L;

    let term = match label {
        L::SelfPerson => "自己",
        L::NotRelated => "无亲属关系",
        L::Mother => "母亲",
        L::Father => "父亲",
        L::Child => "子女",
        L::Daughter => "女儿",
        L::Son => "儿子",
        L::Sibling => "兄弟姐妹",
        L::Sister => "姐妹",
        L::Brother => "兄弟",
        L::HalfSister => "同父异母或同母异父姐妹",
        L::HalfBrother => "同父异母或同母异父兄弟",
        L::Spouse => "配偶",
        L::Wife => "妻子",
        L::Husband => "丈夫",
        L::MaternalGrandmother => "外婆",
        L::MaternalGrandfather => "外公",
        L::PaternalGrandmother => "奶奶",
        L::PaternalGrandfather => "爷爷",
        L::MaternalAunt => "姨妈",
        L::MaternalUncle => "舅舅",
        L::PaternalAunt => "姑姑",
        L::PaternalUncle => "叔伯",
        L::PaternalUncleElder => "伯父",
        L::PaternalUncleYounger => "叔叔",
        L::FirstCousin => "堂表亲",
        L::DaughterInLaw => "儿媳",
        L::SonInLaw => "女婿",
        L::Stepmother => "继母",
        L::Stepfather => "继父",
        L::Stepdaughter => "继女",
        L::Stepson => "继子",
        _ => return None,
    };
    Some(term)
}
