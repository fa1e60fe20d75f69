// The three derived views over the loaded record set. All pure functions:
// they borrow the records, allocate their own output, and hold no state.
use crate::types::{CountryRecord, SummaryStats};
use crate::util::average;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Top `n` records by share for `year`, descending. When `region_filter` is
/// given, only records in one of those regions are considered. The sort is
/// stable, so ties keep the original row order.
pub fn top_n<'a>(
    records: &'a [CountryRecord],
    year: u16,
    n: usize,
    region_filter: Option<&[&str]>,
) -> Vec<&'a CountryRecord> {
    let mut out: Vec<&CountryRecord> = records
        .iter()
        .filter(|r| region_filter.map_or(true, |f| f.contains(&r.region.as_str())))
        .collect();
    out.sort_by(|a, b| {
        b.share(year)
            .partial_cmp(&a.share(year))
            .unwrap_or(Ordering::Equal)
    });
    out.truncate(n);
    out
}

/// Year-by-year series for the named countries, keyed by country name.
/// Names not present in `records` are simply absent from the result.
pub fn trend(
    records: &[CountryRecord],
    names: &[&str],
    years: &[u16],
) -> BTreeMap<String, Vec<(u16, f64)>> {
    records
        .iter()
        .filter(|r| names.contains(&r.name.as_str()))
        .map(|r| {
            let series = years.iter().map(|&y| (y, r.share(y))).collect();
            (r.name.clone(), series)
        })
        .collect()
}

/// Unweighted mean share per region per year, keyed by region. A region key
/// exists only when at least one record belongs to it.
pub fn regional_average(
    records: &[CountryRecord],
    years: &[u16],
) -> BTreeMap<String, Vec<(u16, f64)>> {
    let mut groups: BTreeMap<&str, Vec<&CountryRecord>> = BTreeMap::new();
    for r in records {
        groups.entry(r.region.as_str()).or_default().push(r);
    }
    groups
        .into_iter()
        .map(|(region, members)| {
            let series = years
                .iter()
                .map(|&y| {
                    let shares: Vec<f64> = members.iter().map(|m| m.share(y)).collect();
                    (y, average(&shares))
                })
                .collect();
            (region.to_string(), series)
        })
        .collect()
}

/// Headline metrics, all derived from the data: the top country is the
/// 2021 ranking winner and the top region has the highest 2021 mean share.
pub fn summary(records: &[CountryRecord]) -> SummaryStats {
    let top_country_2021 = top_n(records, 2021, 1, None)
        .first()
        .map(|r| r.name.clone())
        .unwrap_or_default();

    let top_region_2021 = regional_average(records, &[2021])
        .into_iter()
        .filter_map(|(region, series)| series.first().map(|&(_, mean)| (region, mean)))
        .fold(None::<(String, f64)>, |best, (region, mean)| match best {
            Some((_, best_mean)) if best_mean >= mean => best,
            _ => Some((region, mean)),
        })
        .map(|(region, _)| region)
        .unwrap_or_default();

    let regions: std::collections::HashSet<&str> =
        records.iter().map(|r| r.region.as_str()).collect();
    let shares_2021: Vec<f64> = records.iter().map(|r| r.share(2021)).collect();

    SummaryStats {
        total_countries: records.len(),
        total_regions: regions.len(),
        top_country_2021,
        top_region_2021,
        avg_share_2021: average(&shares_2021),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap as Map;

    fn rec(name: &str, region: &str, shares: &[(u16, f64)]) -> CountryRecord {
        CountryRecord {
            name: name.to_string(),
            region: region.to_string(),
            shares: shares.iter().copied().collect::<Map<u16, f64>>(),
        }
    }

    fn sample() -> Vec<CountryRecord> {
        vec![
            rec("터키", "중동/유럽", &[(2017, 0.40), (2021, 0.42)]),
            rec("중국", "아시아", &[(2017, 0.12), (2021, 0.10)]),
            rec("베트남", "아시아", &[(2017, 0.20), (2021, 0.30)]),
            rec("독일", "유럽", &[(2017, 0.05), (2021, 0.08)]),
        ]
    }

    #[test]
    fn top_n_sorts_descending_and_truncates() {
        let data = sample();
        let top = top_n(&data, 2021, 2, None);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].name, "터키");
        assert_eq!(top[1].name, "베트남");
    }

    #[test]
    fn top_n_single_winner_scenario() {
        let data = vec![
            rec("터키", "중동/유럽", &[(2021, 0.42)]),
            rec("중국", "아시아", &[(2021, 0.10)]),
        ];
        let top = top_n(&data, 2021, 1, None);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].name, "터키");
    }

    #[test]
    fn top_n_honors_region_filter() {
        let data = sample();
        let top = top_n(&data, 2021, 10, Some(&["아시아"]));
        let names: Vec<&str> = top.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["베트남", "중국"]);
    }

    #[test]
    fn top_n_breaks_ties_by_row_order() {
        let data = vec![
            rec("a", "유럽", &[(2021, 0.10)]),
            rec("b", "유럽", &[(2021, 0.10)]),
            rec("c", "유럽", &[(2021, 0.10)]),
        ];
        let names: Vec<&str> = top_n(&data, 2021, 3, None)
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn top_n_is_idempotent() {
        let data = sample();
        let a: Vec<&str> = top_n(&data, 2021, 3, None)
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        let b: Vec<&str> = top_n(&data, 2021, 3, None)
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(a, b);
    }

    #[test]
    fn trend_selects_named_countries_in_year_order() {
        let data = sample();
        let t = trend(&data, &["터키", "중국"], &[2017, 2021]);
        assert_eq!(t.len(), 2);
        assert_eq!(t["터키"], vec![(2017, 0.40), (2021, 0.42)]);
        assert_eq!(t["중국"], vec![(2017, 0.12), (2021, 0.10)]);
    }

    #[test]
    fn trend_with_no_names_is_empty() {
        let data = sample();
        assert!(trend(&data, &[], &[2017, 2021]).is_empty());
    }

    #[test]
    fn trend_ignores_unknown_names() {
        let data = sample();
        let t = trend(&data, &["터키", "스리랑카"], &[2021]);
        assert_eq!(t.len(), 1);
        assert!(!t.contains_key("스리랑카"));
    }

    #[test]
    fn regional_average_single_member_equals_own_series() {
        let data = sample();
        let avg = regional_average(&data, &[2017, 2021]);
        assert_eq!(avg["중동/유럽"], vec![(2017, 0.40), (2021, 0.42)]);
    }

    #[test]
    fn regional_average_is_unweighted_mean() {
        let data = sample();
        let avg = regional_average(&data, &[2021]);
        let (_, asia_2021) = avg["아시아"][0];
        assert!((asia_2021 - 0.20).abs() < 1e-12);
        // No region key without members.
        assert!(!avg.contains_key("기타"));
    }

    #[test]
    fn summary_derives_headline_metrics() {
        let data = sample();
        let s = summary(&data);
        assert_eq!(s.total_countries, 4);
        assert_eq!(s.total_regions, 3);
        assert_eq!(s.top_country_2021, "터키");
        assert_eq!(s.top_region_2021, "중동/유럽");
        assert!((s.avg_share_2021 - 0.225).abs() < 1e-12);
    }

    #[test]
    fn summary_of_empty_dataset_is_empty() {
        let s = summary(&[]);
        assert_eq!(s.total_countries, 0);
        assert_eq!(s.top_country_2021, "");
        assert_eq!(s.top_region_2021, "");
    }
}
