use serde::{Deserialize, Serialize};

use crate::Locale;

/// A day of the working week, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Every weekday in display order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Slot of this day in a [`WeekdayFlags`] array.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(
        self,
        locale: Locale,
    ) -> &'static str {
        match locale {
            Locale::English => match self {
                Self::Monday => "Monday",
                Self::Tuesday => "Tuesday",
                Self::Wednesday => "Wednesday",
                Self::Thursday => "Thursday",
                Self::Friday => "Friday",
                Self::Saturday => "Saturday",
                Self::Sunday => "Sunday",
            },
            Locale::Kannada => match self {
                Self::Monday => "ಸೋಮವಾರ",
                Self::Tuesday => "ಮಂಗಳವಾರ",
                Self::Wednesday => "ಬುಧವಾರ",
                Self::Thursday => "ಗುರುವಾರ",
                Self::Friday => "ಶುಕ್ರವಾರ",
                Self::Saturday => "ಶನಿವಾರ",
                Self::Sunday => "ಭಾನುವಾರ",
            },
        }
    }
}

/// Which days of the week were worked, one slot per [`Weekday`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeekdayFlags([bool; 7]);

impl WeekdayFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_set(
        &self,
        day: Weekday,
    ) -> bool {
        self.0[day.index()]
    }

    pub fn set(
        &mut self,
        day: Weekday,
        worked: bool,
    ) {
        self.0[day.index()] = worked;
    }

    /// Flips a single day and returns its new value.
    pub fn toggle(
        &mut self,
        day: Weekday,
    ) -> bool {
        let slot = &mut self.0[day.index()];
        *slot = !*slot;
        *slot
    }

    /// Number of flagged days, 0 to 7.
    pub fn count(&self) -> u8 {
        self.0.iter().filter(|worked| **worked).count() as u8
    }

    pub fn any(&self) -> bool {
        self.0.iter().any(|worked| *worked)
    }

    /// Flagged days in Monday to Sunday order.
    pub fn worked_days(&self) -> impl Iterator<Item = Weekday> + '_ {
        Weekday::ALL.into_iter().filter(|day| self.is_set(*day))
    }

    pub fn clear(&mut self) {
        self.0 = [false; 7];
    }
}

impl FromIterator<Weekday> for WeekdayFlags {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut flags = Self::new();
        for day in iter {
            flags.set(day, true);
        }
        flags
    }
}
