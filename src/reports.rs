// Turns the derived views into flat, render-ready rows for the table
// previews and the CSV exports. Nothing here recomputes aggregates; all
// numbers come from the `views` functions.
use crate::types::{CountryRecord, RankingRow, RegionAverageRow, TrendRow};
use crate::util::format_share;
use crate::views;

/// Countries the trend report focuses on by default.
pub const TREND_COUNTRIES: [&str; 4] = ["터키", "인도네시아", "중국", "베트남"];

/// Ranking rows for the top `n` countries by `year` share, with the change
/// in share since 2017 alongside.
pub fn ranking_rows(
    records: &[CountryRecord],
    year: u16,
    n: usize,
    region_filter: Option<&[&str]>,
) -> Vec<RankingRow> {
    views::top_n(records, year, n, region_filter)
        .into_iter()
        .enumerate()
        .map(|(idx, r)| RankingRow {
            rank: idx + 1,
            country: r.name.clone(),
            region: r.region.clone(),
            share: format_share(r.share(year)),
            change_since_2017: format!("{:+.2}pp", (r.share(year) - r.share(2017)) * 100.0),
        })
        .collect()
}

/// Long-form trend rows: one row per (country, year), countries in the
/// view's key order.
pub fn trend_rows(records: &[CountryRecord], names: &[&str], years: &[u16]) -> Vec<TrendRow> {
    let mut rows = Vec::new();
    for (country, series) in views::trend(records, names, years) {
        for (year, share) in series {
            rows.push(TrendRow {
                country: country.clone(),
                year,
                share: format_share(share),
            });
        }
    }
    rows
}

/// Long-form regional-average rows: one row per (region, year).
pub fn region_average_rows(records: &[CountryRecord], years: &[u16]) -> Vec<RegionAverageRow> {
    let mut rows = Vec::new();
    for (region, series) in views::regional_average(records, years) {
        for (year, mean) in series {
            rows.push(RegionAverageRow {
                region: region.clone(),
                year,
                avg_share: format_share(mean),
            });
        }
    }
    rows
}
