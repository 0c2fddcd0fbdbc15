//! Command implementations.

pub mod analytics;
pub mod layout;
pub mod match_cmd;
pub mod relatives;
pub mod shared;

pub use self::analytics::execute_analytics;
pub use self::layout::execute_layout;
pub use self::match_cmd::execute_match;
pub use self::relatives::execute_relatives;
pub use self::shared::execute_shared;

use crate::error::{CliError, Result};
use kindred_domain::{FamilySnapshot, FamilySource, PersonId};
use kindred_engine::{KinshipEngine, Locale};

/// Everything a command needs: the loaded family, the engine and the
/// resolved label locale.
pub struct Session {
    /// Family the commands run against
    pub family: FamilySnapshot,
    /// Configured engine
    pub engine: KinshipEngine,
    /// Locale for labels
    pub locale: Locale,
}

impl Session {
    /// Create a new session.
    pub fn new(family: FamilySnapshot, engine: KinshipEngine, locale: Locale) -> Self {
        Self { family, engine, locale }
    }

    /// Resolve a person argument, rejecting ids the snapshot does not know.
    pub fn person(&self, raw: &str) -> Result<PersonId> {
        let id = PersonId::from(raw.trim());
        if self.family.person(&id).is_none() {
            return Err(CliError::InvalidInput(format!("Unknown person '{}'", raw)));
        }
        Ok(id)
    }
}
