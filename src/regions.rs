// The static country-to-region table shared by every report.
//
// The mapping is defined once here so the three report surfaces cannot
// drift apart. Lookup is an exact string match against the CSV's country
// names; no fuzzy matching and no case folding.
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Region assigned to any country name absent from [`REGION_TABLE`].
pub const DEFAULT_REGION: &str = "기타";

pub static REGION_TABLE: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("중국", "아시아"),
        ("인도네시아", "아시아"),
        ("대만", "아시아"),
        ("일본", "아시아"),
        ("베트남", "아시아"),
        ("인도", "아시아"),
        ("싱가포르", "아시아"),
        ("말레이시아", "아시아"),
        ("필리핀", "아시아"),
        ("태국", "아시아"),
        ("미국", "미주"),
        ("캐나다", "미주"),
        ("브라질", "미주"),
        ("멕시코", "미주"),
        ("아르헨티나", "미주"),
        ("칠레", "미주"),
        ("독일", "유럽"),
        ("프랑스", "유럽"),
        ("영국", "유럽"),
        ("이탈리아", "유럽"),
        ("폴란드", "유럽"),
        ("러시아", "유럽"),
        ("터키", "중동/유럽"),
        ("아랍에미리트 연합", "중동"),
        ("사우디아라비아", "중동"),
        ("쿠웨이트", "중동"),
        ("나이지리아", "아프리카"),
        ("남아프리카공화국", "아프리카"),
        ("이집트", "아프리카"),
    ])
});

/// Region for a country name, falling back to [`DEFAULT_REGION`].
pub fn region_for(name: &str) -> &'static str {
    REGION_TABLE.get(name).copied().unwrap_or(DEFAULT_REGION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapped_names_get_table_region() {
        assert_eq!(region_for("중국"), "아시아");
        assert_eq!(region_for("터키"), "중동/유럽");
        assert_eq!(region_for("이집트"), "아프리카");
    }

    #[test]
    fn unmapped_names_get_default() {
        assert_eq!(region_for("스리랑카"), DEFAULT_REGION);
        assert_eq!(region_for(""), DEFAULT_REGION);
    }

    #[test]
    fn lookup_is_exact_match_only() {
        // Whitespace or case differences must not match.
        assert_eq!(region_for(" 중국"), DEFAULT_REGION);
        assert_eq!(region_for("중국 "), DEFAULT_REGION);
    }
}
