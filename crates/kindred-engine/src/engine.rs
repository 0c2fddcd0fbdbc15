//! Engine facade over a family data source

use crate::analytics::{generation_analytics, GenerationAnalytics};
use crate::connector::Segment;
use crate::layout::{layout, TreeLayout};
use crate::matcher::{genetic_match, GeneticMatchResult, MatchContext};
use crate::relatives::{blood_relatives, shared_condition_relatives};
use crate::{EngineConfig, EngineError, Locale};
use kindred_domain::{ConditionId, FamilySource, Gender, PersonId, RelationshipType};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Kinship queries over any [`FamilySource`]
///
/// Holds configuration only. Every call reads the family it is given and
/// keeps nothing afterwards, so one engine can serve many families.
///
/// # Examples
///
/// ```
/// use kindred_domain::{FamilySnapshot, Person, PersonId, RelationshipEdge, RelationshipType};
/// use kindred_engine::KinshipEngine;
///
/// let family = FamilySnapshot::new(
///     vec![Person::new("mum", "Mary", "Lee"), Person::new("ego", "Sam", "Lee")],
///     vec![RelationshipEdge::new("e1", "mum", "ego", RelationshipType::Parent)],
/// );
///
/// let engine = KinshipEngine::default_config();
/// let result = engine.genetic_match(&family, &PersonId::from("ego"), &PersonId::from("mum"), None, None);
/// assert_eq!(result.percentage, 50.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct KinshipEngine {
    config: EngineConfig,
}

impl KinshipEngine {
    /// Create an engine with the given configuration
    pub fn new(config: EngineConfig) -> Self {
        debug_assert!(
            RelationshipType::tables_consistent(),
            "relationship coefficient/inverse tables out of sync"
        );
        Self { config }
    }

    /// Create an engine with default configuration
    pub fn default_config() -> Self {
        Self::new(EngineConfig::default())
    }

    /// The configuration in use
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn locale_or_default(&self, locale: Option<Locale>) -> Locale {
        locale.unwrap_or(self.config.default_locale)
    }

    /// What `target` is to `source`, and how much blood they share
    ///
    /// Unknown ids are not an error; they simply come back "Not Related".
    pub fn genetic_match<F: FamilySource>(
        &self,
        family: &F,
        source: &PersonId,
        target: &PersonId,
        target_gender: Option<Gender>,
        locale: Option<Locale>,
    ) -> GeneticMatchResult {
        let context = MatchContext {
            target_gender,
            locale: self.locale_or_default(locale),
            people: Some(family.people()),
        };
        genetic_match(source, target, family.edges(), &context)
    }

    /// Everyone sharing blood with `person`, including `person`
    pub fn blood_relatives<F: FamilySource>(&self, family: &F, person: &PersonId) -> BTreeSet<PersonId> {
        blood_relatives(person, &family.person_ids(), family.edges())
    }

    /// Blood relatives of `person` who also carry `condition`
    pub fn shared_condition_relatives<F: FamilySource>(
        &self,
        family: &F,
        person: &PersonId,
        condition: &ConditionId,
        locale: Option<Locale>,
    ) -> Vec<(PersonId, GeneticMatchResult)> {
        let carriers: BTreeMap<PersonId, Vec<ConditionId>> = family
            .people()
            .iter()
            .filter_map(|member| {
                let conditions = family.conditions_of(&member.id);
                (!conditions.is_empty()).then(|| (member.id.clone(), conditions.to_vec()))
            })
            .collect();
        debug!(%person, %condition, carriers = carriers.len(), "Searching condition carriers");

        let context = MatchContext::with_people(family.people()).locale(self.locale_or_default(locale));
        shared_condition_relatives(person, condition, family.edges(), &carriers, &context)
    }

    /// Pedigree chart rooted at `root`
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownPerson`] when `root` is not in the family.
    pub fn layout<F: FamilySource>(&self, family: &F, root: &PersonId) -> Result<TreeLayout, EngineError> {
        layout(family.people(), family.edges(), root, &self.config.layout)
    }

    /// Connector segments for a layout produced by this engine
    pub fn connectors(&self, layout: &TreeLayout) -> Vec<Segment> {
        layout.sibship_connectors(&self.config.layout)
    }

    /// Per-generation statistics for the chart rooted at `root`
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownPerson`] when `root` is not in the family.
    pub fn generation_analytics<F: FamilySource>(
        &self,
        family: &F,
        root: &PersonId,
    ) -> Result<GenerationAnalytics, EngineError> {
        let chart = self.layout(family, root)?;
        Ok(generation_analytics(&chart))
    }
}
