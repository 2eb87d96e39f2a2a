use std::{collections::HashSet, fmt};

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use crate::Locale;

/// Stable identifier of a worker, independent of display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct WorkerId(&'static str);

impl WorkerId {
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for WorkerId {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A display name in every supported locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedName {
    pub english: &'static str,
    pub kannada: &'static str,
}

impl LocalizedName {
    pub fn get(
        &self,
        locale: Locale,
    ) -> &'static str {
        match locale {
            Locale::English => self.english,
            Locale::Kannada => self.kannada,
        }
    }
}

/// A worker on the roster with a fixed daily wage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Worker {
    pub id: WorkerId,
    pub name: LocalizedName,
    /// Daily wage in whole rupees. The same in every locale.
    pub daily_rate: u32,
}

impl Worker {
    pub const fn new(
        id: &'static str,
        english: &'static str,
        kannada: &'static str,
        daily_rate: u32,
    ) -> Self {
        Self {
            id: WorkerId::new(id),
            name: LocalizedName { english, kannada },
            daily_rate,
        }
    }

    pub fn display_name(
        &self,
        locale: Locale,
    ) -> &'static str {
        self.name.get(locale)
    }

    pub fn rate(&self) -> Decimal {
        Decimal::from(self.daily_rate)
    }
}

const DEFAULT_WORKERS: [Worker; 4] = [
    Worker::new("chandra-writer", "Chandra Writer", "ಚಂದ್ರ ರೈಟರ್", 500),
    Worker::new("mohan", "Mohan", "ಮೋಹನ್", 500),
    Worker::new("mani", "Mani", "ಮಣಿ", 400),
    Worker::new("anni", "Anni", "ಅನ್ನಿ", 400),
];

/// Errors raised when a roster breaks its uniqueness rules.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("worker id '{0}' appears more than once")]
    DuplicateId(WorkerId),

    #[error("display name '{name}' is used by more than one worker in {locale}")]
    DuplicateName { name: String, locale: Locale },

    #[error("worker '{0}' has a daily rate of zero")]
    ZeroRate(WorkerId),

    #[error("display name '{name}' contains a comma, quote or line break")]
    UnsafeName { name: String },
}

/// Characters a display name may not contain, since names are written to the
/// report unquoted.
const RESERVED_NAME_CHARS: [char; 4] = [',', '"', '\r', '\n'];

/// The fixed set of workers the tracker can record days for.
///
/// Ids are unique and, within each locale, display names are unique and free
/// of CSV delimiters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    workers: Vec<Worker>,
}

impl Roster {
    pub fn new(workers: Vec<Worker>) -> Result<Self, RosterError> {
        let mut ids = HashSet::new();
        for worker in &workers {
            if !ids.insert(worker.id) {
                return Err(RosterError::DuplicateId(worker.id));
            }
            if worker.daily_rate == 0 {
                return Err(RosterError::ZeroRate(worker.id));
            }
        }

        for locale in Locale::ALL {
            let mut names = HashSet::new();
            for worker in &workers {
                let name = worker.display_name(locale);
                if name.contains(RESERVED_NAME_CHARS) {
                    return Err(RosterError::UnsafeName {
                        name: name.to_string(),
                    });
                }
                if !names.insert(name) {
                    return Err(RosterError::DuplicateName {
                        name: name.to_string(),
                        locale,
                    });
                }
            }
        }

        Ok(Self { workers })
    }

    /// The built-in roster, validated.
    pub fn standard() -> Result<Self, RosterError> {
        Self::new(DEFAULT_WORKERS.to_vec())
    }

    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    pub fn find(
        &self,
        id: WorkerId,
    ) -> Option<&Worker> {
        self.workers.iter().find(|worker| worker.id == id)
    }

    pub fn len(&self) -> usize {
        self.workers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn standard_roster_passes_validation() {
        assert_eq!(Roster::standard(), Ok(Roster::default()));
    }

    #[test]
    fn rates_are_shared_across_locales() {
        let roster = Roster::default();
        let mani = roster.find(WorkerId::new("mani")).unwrap();

        assert_eq!(mani.display_name(Locale::English), "Mani");
        assert_eq!(mani.display_name(Locale::Kannada), "ಮಣಿ");
        assert_eq!(mani.rate(), dec!(400));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = Roster::new(vec![
            Worker::new("mani", "Mani", "ಮಣಿ", 400),
            Worker::new("mani", "Mani Two", "ಮಣಿ ೨", 400),
        ]);

        assert_eq!(result, Err(RosterError::DuplicateId(WorkerId::new("mani"))));
    }

    #[test]
    fn rejects_duplicate_names_within_a_locale() {
        let result = Roster::new(vec![
            Worker::new("mani", "Mani", "ಮಣಿ", 400),
            Worker::new("mani-2", "Mani B", "ಮಣಿ", 400),
        ]);

        assert_eq!(
            result,
            Err(RosterError::DuplicateName {
                name: "ಮಣಿ".to_string(),
                locale: Locale::Kannada,
            })
        );
    }

    #[test]
    fn rejects_names_that_would_break_a_report_row() {
        let result = Roster::new(vec![Worker::new("rao", "Rao, K.", "ರಾವ್", 450)]);

        assert_eq!(
            result,
            Err(RosterError::UnsafeName {
                name: "Rao, K.".to_string(),
            })
        );
    }

    #[test]
    fn rejects_zero_rates() {
        let result = Roster::new(vec![Worker::new("idle", "Idle", "ಐಡಲ್", 0)]);

        assert_eq!(result, Err(RosterError::ZeroRate(WorkerId::new("idle"))));
    }
}
