//! Business-day conventions.

use sched_core::errors::Error;

/// How to adjust a date that falls on a non-business day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BusinessDayConvention {
    /// Choose the first business day after the given holiday.
    Following,
    /// Choose the first business day after the given holiday unless it belongs
    /// to a different month; in that case choose the first business day before
    /// the holiday.
    ModifiedFollowing,
    /// Choose the first business day before the given holiday.
    Preceding,
    /// Choose the first business day before the given holiday unless it belongs
    /// to a different month; in that case choose the first business day after
    /// the holiday.
    ModifiedPreceding,
    /// Choose the nearest business day.  In case of a tie, use the following
    /// convention.
    Nearest,
    /// Do not adjust (keep the original date).
    Unadjusted,
}

impl BusinessDayConvention {
    /// Market abbreviation (`F`, `MF`, `P`, `MP`, `NEAREST`, `NONE`).
    pub fn code(&self) -> &'static str {
        match self {
            BusinessDayConvention::Following => "F",
            BusinessDayConvention::ModifiedFollowing => "MF",
            BusinessDayConvention::Preceding => "P",
            BusinessDayConvention::ModifiedPreceding => "MP",
            BusinessDayConvention::Nearest => "NEAREST",
            BusinessDayConvention::Unadjusted => "NONE",
        }
    }
}

impl std::fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BusinessDayConvention::Following => "Following",
            BusinessDayConvention::ModifiedFollowing => "Modified Following",
            BusinessDayConvention::Preceding => "Preceding",
            BusinessDayConvention::ModifiedPreceding => "Modified Preceding",
            BusinessDayConvention::Nearest => "Nearest",
            BusinessDayConvention::Unadjusted => "Unadjusted",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for BusinessDayConvention {
    type Err = Error;

    /// Accepts the display name or the abbreviation; case, spaces, `-` and
    /// `_` are ignored (`"modified-following"`, `"MF"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_uppercase();
        match key.as_str() {
            "F" | "FOLLOWING" => Ok(BusinessDayConvention::Following),
            "MF" | "MODFOLLOWING" | "MODIFIEDFOLLOWING" => {
                Ok(BusinessDayConvention::ModifiedFollowing)
            }
            "P" | "PRECEDING" => Ok(BusinessDayConvention::Preceding),
            "MP" | "MODPRECEDING" | "MODIFIEDPRECEDING" => {
                Ok(BusinessDayConvention::ModifiedPreceding)
            }
            "NEAREST" => Ok(BusinessDayConvention::Nearest),
            "NONE" | "UNADJUSTED" | "NOADJUST" => Ok(BusinessDayConvention::Unadjusted),
            _ => Err(Error::parse(s, "business day convention")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_aliases() {
        for (text, expected) in [
            ("MF", BusinessDayConvention::ModifiedFollowing),
            ("Modified Following", BusinessDayConvention::ModifiedFollowing),
            ("modified-preceding", BusinessDayConvention::ModifiedPreceding),
            ("f", BusinessDayConvention::Following),
            ("NONE", BusinessDayConvention::Unadjusted),
        ] {
            assert_eq!(text.parse::<BusinessDayConvention>().unwrap(), expected, "{text}");
        }
        assert!("sideways".parse::<BusinessDayConvention>().is_err());
    }
}
