//! Season filter selected from the chart dropdown.

use std::fmt;
use std::str::FromStr;

use crate::error::FilterParseError;
use crate::record::WeatherRecord;
use crate::season::Season;

/// Dropdown value meaning "every season".
pub const ALL_VALUE: &str = "all";

/// Either every season or a single one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SeasonFilter {
    #[default]
    All,
    Only(Season),
}

impl SeasonFilter {
    /// Every option offered by the selector, in display order.
    pub fn options() -> Vec<SeasonFilter> {
        std::iter::once(SeasonFilter::All)
            .chain(Season::ALL.into_iter().map(SeasonFilter::Only))
            .collect()
    }

    pub fn matches(&self, record: &WeatherRecord) -> bool {
        match self {
            SeasonFilter::All => true,
            SeasonFilter::Only(season) => record.season == *season,
        }
    }

    /// Label shown in the dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            SeasonFilter::All => "All Seasons",
            SeasonFilter::Only(season) => season.as_str(),
        }
    }
}

impl fmt::Display for SeasonFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeasonFilter::All => f.write_str(ALL_VALUE),
            SeasonFilter::Only(season) => f.write_str(season.as_str()),
        }
    }
}

impl FromStr for SeasonFilter {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_VALUE {
            return Ok(SeasonFilter::All);
        }
        s.parse::<Season>().map(SeasonFilter::Only)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dropdown_values_parse() {
        assert_eq!("all".parse::<SeasonFilter>().unwrap(), SeasonFilter::All);
        assert_eq!(
            "Summer".parse::<SeasonFilter>().unwrap(),
            SeasonFilter::Only(Season::Summer)
        );
        assert!("Autumn".parse::<SeasonFilter>().is_err());
    }

    #[test]
    fn test_options_cover_all_and_each_season() {
        let values: Vec<String> = SeasonFilter::options().iter().map(|f| f.to_string()).collect();
        assert_eq!(values, vec!["all", "Winter", "Spring", "Summer", "Fall"]);
    }
}
