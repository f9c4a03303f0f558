//! Chinese numerals, ordinal day names and month names.

const DIGITS: [&str; 10] = ["", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// The 30 ordinal day names, 初一 through 三十.
pub const DAY_NAMES: [&str; 30] = [
    "初一", "初二", "初三", "初四", "初五", "初六", "初七", "初八", "初九", "初十", "十一", "十二",
    "十三", "十四", "十五", "十六", "十七", "十八", "十九", "二十", "廿一", "廿二", "廿三", "廿四",
    "廿五", "廿六", "廿七", "廿八", "廿九", "三十",
];

fn cn_digit(c: char) -> Option<u32> {
    match c {
        '一' => Some(1),
        '二' => Some(2),
        '三' => Some(3),
        '四' => Some(4),
        '五' => Some(5),
        '六' => Some(6),
        '七' => Some(7),
        '八' => Some(8),
        '九' => Some(9),
        _ => None,
    }
}

/// Parse a Chinese cardinal number (元/一–九十九).
///
/// Handles: 元, 一–九, 十, 十一–十九, 二十–九十, 二十一–九十九, and the
/// contracted 廿/卅 forms.
pub fn parse_cn_number(s: &str) -> Option<u32> {
    if s == "元" {
        return Some(1);
    }
    let chars: Vec<char> = s.chars().collect();
    match chars.as_slice() {
        ['十'] => Some(10),
        ['廿'] => Some(20),
        ['卅'] => Some(30),
        // 十D (11–19)
        ['十', d] => Some(10 + cn_digit(*d)?),
        ['廿', d] => Some(20 + cn_digit(*d)?),
        ['卅', d] => Some(30 + cn_digit(*d)?),
        [c] => cn_digit(*c),
        // D十 (20, 30 … 90)
        [d, '十'] => Some(cn_digit(*d)? * 10),
        // D十D (21–99)
        [d1, '十', d2] => Some(cn_digit(*d1)? * 10 + cn_digit(*d2)?),
        _ => None,
    }
}

/// Write `n` (1..=99) in the D十D form. Zero and larger values are empty.
pub fn format_cn_number(n: u32) -> String {
    match n {
        1..=9 => DIGITS[n as usize].to_string(),
        10 => "十".to_string(),
        11..=19 => format!("十{}", DIGITS[(n % 10) as usize]),
        20..=99 => format!("{}十{}", DIGITS[(n / 10) as usize], DIGITS[(n % 10) as usize]),
        _ => String::new(),
    }
}

/// Era year numeral as written in running text: the first year is 元.
pub fn format_era_year(n: u32) -> String {
    if n == 1 {
        "元".to_string()
    } else {
        format_cn_number(n)
    }
}

/// Ordinal day name for a 1-based day of month.
pub fn day_name(day: u32) -> Option<&'static str> {
    DAY_NAMES.get((day as usize).checked_sub(1)?).copied()
}

/// 0-based position of an ordinal day name.
pub fn day_index(name: &str) -> Option<usize> {
    DAY_NAMES.iter().position(|d| *d == name)
}

// ── Month names ──────────────────────────────────────────────────────

const JIAN: [char; 12] = [
    '子', '丑', '寅', '卯', '辰', '巳', '午', '未', '申', '酉', '戌', '亥',
];

/// Canonical form of a month token such as `正月`, `閏八月`, `後九月`,
/// `建子月` or `臘月`: 正 becomes 一 and 臘 becomes 十二. Returns `None` if the
/// text is not a month name. 閏 and 後 never combine.
pub fn canonical_month(s: &str) -> Option<String> {
    let body = s.strip_suffix('月')?;
    let (prefix, body) = if let Some(rest) = body.strip_prefix('閏') {
        ("閏", rest)
    } else if let Some(rest) = body.strip_prefix('後') {
        ("後", rest)
    } else {
        ("", body)
    };
    let number = match body {
        "正" => "一".to_string(),
        "臘" => "十二".to_string(),
        _ => {
            let chars: Vec<char> = body.chars().collect();
            if let ['建', b] = chars.as_slice() {
                if JIAN.contains(b) {
                    return Some(format!("{prefix}{body}月"));
                }
                return None;
            }
            match parse_cn_number(body) {
                Some(n @ 1..=12) if !body.starts_with(['廿', '卅', '元']) => format_cn_number(n),
                _ => return None,
            }
        }
    };
    Some(format!("{prefix}{number}月"))
}

/// Month name as written in output: 一月 is rendered 正月.
pub fn display_month(canonical: &str) -> String {
    let (prefix, body) = match canonical.strip_prefix('閏') {
        Some(rest) => ("閏", rest),
        None => ("", canonical),
    };
    if body == "一月" {
        format!("{prefix}正月")
    } else {
        canonical.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cn_number() {
        assert_eq!(parse_cn_number("元"), Some(1));
        assert_eq!(parse_cn_number("六"), Some(6));
        assert_eq!(parse_cn_number("十"), Some(10));
        assert_eq!(parse_cn_number("十五"), Some(15));
        assert_eq!(parse_cn_number("二十"), Some(20));
        assert_eq!(parse_cn_number("二十五"), Some(25));
        assert_eq!(parse_cn_number("廿五"), Some(25));
        assert_eq!(parse_cn_number("朔六"), None);
        assert_eq!(parse_cn_number("十十"), None);
        assert_eq!(parse_cn_number(""), None);
    }

    #[test]
    fn test_format_cn_number() {
        for n in 1..=99 {
            assert_eq!(parse_cn_number(&format_cn_number(n)), Some(n));
        }
        assert_eq!(format_cn_number(0), "");
        assert_eq!(format_era_year(1), "元");
        assert_eq!(format_era_year(15), "十五");
    }

    #[test]
    fn test_day_names() {
        assert_eq!(day_name(1), Some("初一"));
        assert_eq!(day_name(20), Some("二十"));
        assert_eq!(day_name(21), Some("廿一"));
        assert_eq!(day_name(30), Some("三十"));
        assert_eq!(day_name(0), None);
        assert_eq!(day_name(31), None);
        assert_eq!(day_index("初十"), Some(9));
        assert_eq!(day_index("廿"), None);
    }

    #[test]
    fn test_canonical_month() {
        assert_eq!(canonical_month("正月").as_deref(), Some("一月"));
        assert_eq!(canonical_month("閏正月").as_deref(), Some("閏一月"));
        assert_eq!(canonical_month("後九月").as_deref(), Some("後九月"));
        assert_eq!(canonical_month("臘月").as_deref(), Some("十二月"));
        assert_eq!(canonical_month("建子月").as_deref(), Some("建子月"));
        assert_eq!(canonical_month("十二月").as_deref(), Some("十二月"));
        assert_eq!(canonical_month("十三月"), None);
        assert_eq!(canonical_month("閏後九月"), None);
        assert_eq!(canonical_month("元月"), None);
        assert_eq!(canonical_month("建甲月"), None);
        assert_eq!(canonical_month("九"), None);
    }

    #[test]
    fn test_display_month() {
        assert_eq!(display_month("一月"), "正月");
        assert_eq!(display_month("閏一月"), "閏正月");
        assert_eq!(display_month("十一月"), "十一月");
        assert_eq!(display_month("建子月"), "建子月");
    }
}
