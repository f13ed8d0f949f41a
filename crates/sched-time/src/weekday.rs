//! `Weekday`: day-of-week enum.

use sched_core::errors::Error;

/// Day of the week.
///
/// Variants are numbered 1–7 (Monday = 1, Sunday = 7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Weekday {
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
    /// Sunday (7).
    Sunday = 7,
}

impl Weekday {
    /// All weekdays, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Construct from the ordinal (1 = Monday … 7 = Sunday).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_ordinal(n: u8) -> Option<Self> {
        Self::ALL.get(usize::from(n).checked_sub(1)?).copied()
    }

    /// Return the ordinal (1 = Monday … 7 = Sunday).
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Return `true` if this is Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }

    /// Number of days (0–6) to move forward from `self` to reach `target`.
    pub fn days_until(&self, target: Weekday) -> u8 {
        (i32::from(target.ordinal()) - i32::from(self.ordinal())).rem_euclid(7) as u8
    }

    /// Three-letter upper-case abbreviation (`MON` … `SUN`).
    pub fn short_name(&self) -> &'static str {
        match self {
            Weekday::Monday => "MON",
            Weekday::Tuesday => "TUE",
            Weekday::Wednesday => "WED",
            Weekday::Thursday => "THU",
            Weekday::Friday => "FRI",
            Weekday::Saturday => "SAT",
            Weekday::Sunday => "SUN",
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        };
        write!(f, "{name}")
    }
}

impl std::str::FromStr for Weekday {
    type Err = Error;

    /// Accepts full names and three-letter abbreviations, any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|w| w.short_name() == wanted || w.to_string().to_ascii_uppercase() == wanted)
            .ok_or_else(|| Error::parse(s, "weekday"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinal_bounds() {
        assert_eq!(Weekday::from_ordinal(1), Some(Weekday::Monday));
        assert_eq!(Weekday::from_ordinal(7), Some(Weekday::Sunday));
        assert_eq!(Weekday::from_ordinal(0), None);
        assert_eq!(Weekday::from_ordinal(8), None);
    }

    #[test]
    fn days_until_wraps() {
        assert_eq!(Weekday::Wednesday.days_until(Weekday::Wednesday), 0);
        assert_eq!(Weekday::Wednesday.days_until(Weekday::Friday), 2);
        assert_eq!(Weekday::Friday.days_until(Weekday::Wednesday), 5);
    }

    #[test]
    fn parse_names() {
        assert_eq!("wed".parse::<Weekday>().unwrap(), Weekday::Wednesday);
        assert_eq!("Friday".parse::<Weekday>().unwrap(), Weekday::Friday);
        assert!("Fri-day".parse::<Weekday>().is_err());
    }
}
