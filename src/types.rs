use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tabled::Tabled;

/// The years covered by the dataset. Fixed and identical across all rows;
/// every loaded record carries a share for each of these.
pub const YEARS: [u16; 5] = [2017, 2018, 2019, 2020, 2021];

/// Header of the country-name column in the source CSV.
pub const NAME_HEADER: &str = "국가명";

/// One raw CSV row exactly as it appears in the source file. Every cell
/// arrives as a string; the year columns hold values like `"12.5%"`.
#[derive(Debug, Deserialize)]
pub struct RawRow {
    #[serde(rename = "국가명")]
    pub name: String,
    #[serde(rename = "2017")]
    pub y2017: String,
    #[serde(rename = "2018")]
    pub y2018: String,
    #[serde(rename = "2019")]
    pub y2019: String,
    #[serde(rename = "2020")]
    pub y2020: String,
    #[serde(rename = "2021")]
    pub y2021: String,
}

impl RawRow {
    /// The raw cell for a given year, `None` for a year outside [`YEARS`].
    pub fn year_cell(&self, year: u16) -> Option<&str> {
        match year {
            2017 => Some(&self.y2017),
            2018 => Some(&self.y2018),
            2019 => Some(&self.y2019),
            2020 => Some(&self.y2020),
            2021 => Some(&self.y2021),
            _ => None,
        }
    }
}

/// One country after normalization and region annotation. Immutable for the
/// rest of the run; all derived views borrow from the loaded slice.
///
/// `shares` maps year to the fractional payment share (0.125 for "12.5%").
/// Values above 1.0 are legal and left as-is. `region` is always set: either
/// a mapped region name or the default sentinel.
#[derive(Debug, Clone)]
pub struct CountryRecord {
    pub name: String,
    pub region: String,
    pub shares: BTreeMap<u16, f64>,
}

impl CountryRecord {
    /// Share for a year, 0.0 for a year the record does not carry.
    pub fn share(&self, year: u16) -> f64 {
        self.shares.get(&year).copied().unwrap_or(0.0)
    }
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct RankingRow {
    #[serde(rename = "Rank")]
    #[tabled(rename = "Rank")]
    pub rank: usize,
    #[serde(rename = "Country")]
    #[tabled(rename = "Country")]
    pub country: String,
    #[serde(rename = "Region")]
    #[tabled(rename = "Region")]
    pub region: String,
    #[serde(rename = "Share")]
    #[tabled(rename = "Share")]
    pub share: String,
    #[serde(rename = "ChangeSince2017")]
    #[tabled(rename = "ChangeSince2017")]
    pub change_since_2017: String,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct TrendRow {
    #[serde(rename = "Country")]
    #[tabled(rename = "Country")]
    pub country: String,
    #[serde(rename = "Year")]
    #[tabled(rename = "Year")]
    pub year: u16,
    #[serde(rename = "Share")]
    #[tabled(rename = "Share")]
    pub share: String,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct RegionAverageRow {
    #[serde(rename = "Region")]
    #[tabled(rename = "Region")]
    pub region: String,
    #[serde(rename = "Year")]
    #[tabled(rename = "Year")]
    pub year: u16,
    #[serde(rename = "AvgShare")]
    #[tabled(rename = "AvgShare")]
    pub avg_share: String,
}

/// Headline metrics for the JSON summary. All of these are computed from the
/// loaded data, never hardcoded labels.
#[derive(Debug, Serialize)]
pub struct SummaryStats {
    pub total_countries: usize,
    pub total_regions: usize,
    pub top_country_2021: String,
    pub top_region_2021: String,
    pub avg_share_2021: f64,
}
