//! String parsing helpers for dates and tenors.
//!
//! These only split text into numeric components; range validation is left
//! to the types that own the invariants (`Date`, `Tenor`).

/// Split a tenor string like `"3M"`, `"1Y"`, `"30D"`, `"2W"` into its length
/// and upper-cased unit letter.
///
/// An optional ISO-8601 style `P` prefix is accepted, so `"P3M"` parses the
/// same as `"3M"`.
pub fn parse_tenor_string(s: &str) -> Option<(i32, char)> {
    let s = s.trim();
    let s = s
        .strip_prefix('P')
        .or_else(|| s.strip_prefix('p'))
        .unwrap_or(s);
    let unit = s.chars().last()?.to_ascii_uppercase();
    if !matches!(unit, 'D' | 'W' | 'M' | 'Y') {
        return None;
    }
    let digits = &s[..s.len() - 1];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let length: i32 = digits.parse().ok()?;
    Some((length, unit))
}

/// Split an ISO-8601 date (`YYYY-MM-DD`) into `(year, month, day)`.
pub fn parse_iso_date(s: &str) -> Option<(u16, u8, u8)> {
    let mut parts = s.trim().splitn(3, '-');
    let year = parts.next().filter(|p| p.len() == 4)?.parse().ok()?;
    let month = parts.next().filter(|p| p.len() == 2)?.parse().ok()?;
    let day = parts.next().filter(|p| p.len() == 2)?.parse().ok()?;
    Some((year, month, day))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tenor_strings() {
        assert_eq!(parse_tenor_string("3M"), Some((3, 'M')));
        assert_eq!(parse_tenor_string("1y"), Some((1, 'Y')));
        assert_eq!(parse_tenor_string(" 30D "), Some((30, 'D')));
        assert_eq!(parse_tenor_string("P2W"), Some((2, 'W')));
        assert_eq!(parse_tenor_string("M"), None);
        assert_eq!(parse_tenor_string("-1M"), None);
        assert_eq!(parse_tenor_string("3Q"), None);
        assert_eq!(parse_tenor_string(""), None);
    }

    #[test]
    fn iso_dates() {
        assert_eq!(parse_iso_date("2014-06-04"), Some((2014, 6, 4)));
        assert_eq!(parse_iso_date("2014-6-4"), None);
        assert_eq!(parse_iso_date("04/06/2014"), None);
        assert_eq!(parse_iso_date("2014-06"), None);
    }
}
