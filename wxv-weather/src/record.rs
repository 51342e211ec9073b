use chrono::NaiveDate;
use serde::Serialize;

use crate::season::Season;

/// A single day of weather observations.
///
/// The season is derived from the date's month when the record is built,
/// and records are never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherRecord {
    pub date: NaiveDate,
    /// Daily maximum temperature (°F)
    pub tmax: f64,
    /// Daily minimum temperature (°F)
    pub tmin: f64,
    pub season: Season,
}

impl WeatherRecord {
    pub fn new(date: NaiveDate, tmax: f64, tmin: f64) -> Self {
        let season = Season::from_month(wxv_utils::dates::month_of(&date));
        Self {
            date,
            tmax,
            tmin,
            season,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_derives_season() {
        let date = NaiveDate::from_ymd_opt(2023, 7, 16).unwrap();
        let record = WeatherRecord::new(date, 95.0, 70.0);
        assert_eq!(record.season, Season::Summer);

        let date = NaiveDate::from_ymd_opt(2022, 12, 31).unwrap();
        assert_eq!(WeatherRecord::new(date, 30.0, 10.0).season, Season::Winter);
    }
}
