use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FilterParseError;

/// Meteorological season of an observation.
///
/// The declaration order is the canonical display order used by the band
/// scale and by every per-season summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl Season {
    /// All seasons in canonical order.
    pub const ALL: [Season; 4] = [Season::Winter, Season::Spring, Season::Summer, Season::Fall];

    /// Season for a calendar month (1-12).
    ///
    /// Dec-Feb is Winter, Mar-May Spring, Jun-Aug Summer, Sep-Nov Fall.
    pub fn from_month(month: u32) -> Season {
        match month {
            12 | 1 | 2 => Season::Winter,
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            _ => Season::Fall,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Winter => "Winter",
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
        }
    }

    /// Position in canonical order.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Season {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Season::ALL
            .into_iter()
            .find(|season| season.as_str() == s)
            .ok_or_else(|| FilterParseError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_month_maps_to_its_season() {
        let expected = [
            (1, Season::Winter),
            (2, Season::Winter),
            (3, Season::Spring),
            (4, Season::Spring),
            (5, Season::Spring),
            (6, Season::Summer),
            (7, Season::Summer),
            (8, Season::Summer),
            (9, Season::Fall),
            (10, Season::Fall),
            (11, Season::Fall),
            (12, Season::Winter),
        ];
        for (month, season) in expected {
            assert_eq!(Season::from_month(month), season, "month {}", month);
        }
    }

    #[test]
    fn test_canonical_order() {
        let indices: Vec<usize> = Season::ALL.iter().map(Season::index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
        assert!(Season::Winter < Season::Fall);
    }

    #[test]
    fn test_parse_and_display() {
        for season in Season::ALL {
            assert_eq!(season.to_string().parse::<Season>().unwrap(), season);
        }
        assert!("winter".parse::<Season>().is_err());
    }
}
