//! 국가 이름 → 국기 이모지 변환
//!
//! 국가 이름을 alpha-2 코드로 조회한 뒤, 각 글자를 Regional Indicator Symbol로 바꿔 이어붙입니다.
//! 조회에 실패하면 빈 문자열을 반환합니다 (국기는 장식이라 에러로 취급하지 않음).

use std::collections::HashMap;

use super::countries::{COUNTRIES, OLYMPIC_ALIASES};

/// 'A'에 해당하는 Regional Indicator Symbol (U+1F1E6)
const REGIONAL_INDICATOR_A: u32 = 0x1F1E6;

lazy_static::lazy_static! {
    /// 소문자 이름/코드 → alpha-2 코드 (프로세스 시작 후 한 번만 생성)
    static ref LOOKUP: HashMap<String, &'static str> = {
        let mut m = HashMap::new();

        // 먼저 등록된 키가 우선: alpha-2, alpha-3, numeric, name, official name, common name 순
        for c in COUNTRIES {
            m.entry(normalize(c.alpha_2)).or_insert(c.alpha_2);
        }
        for c in COUNTRIES {
            m.entry(normalize(c.alpha_3)).or_insert(c.alpha_2);
        }
        for c in COUNTRIES {
            m.entry(c.numeric.to_string()).or_insert(c.alpha_2);
        }
        for c in COUNTRIES {
            m.entry(normalize(c.name)).or_insert(c.alpha_2);
        }
        for c in COUNTRIES {
            if let Some(official) = c.official_name {
                m.entry(normalize(official)).or_insert(c.alpha_2);
            }
        }
        for c in COUNTRIES {
            if let Some(common) = c.common_name {
                m.entry(normalize(common)).or_insert(c.alpha_2);
            }
        }
        for (alias, code) in OLYMPIC_ALIASES.iter() {
            m.entry(normalize(alias)).or_insert(*code);
        }

        m
    };
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// 국가 이름(또는 alpha-2/alpha-3/숫자 코드)으로 alpha-2 코드 조회
pub fn region_code(country_name: &str) -> Option<&'static str> {
    LOOKUP.get(&normalize(country_name)).copied()
}

/// alpha-2 코드를 국기 이모지로 변환
///
/// 영문자 두 글자가 아니면 `None`
pub fn glyph(region_code: &str) -> Option<String> {
    let code = region_code.to_ascii_uppercase();
    if code.len() != 2 || !code.bytes().all(|b| b.is_ascii_uppercase()) {
        return None;
    }

    code.bytes()
        .map(|b| char::from_u32(REGIONAL_INDICATOR_A + (b - b'A') as u32))
        .collect()
}

/// 국가 이름 → 국기 이모지. 찾지 못하면 빈 문자열
pub fn encode(country_name: &str) -> String {
    match region_code(country_name).and_then(glyph) {
        Some(flag) => flag,
        None => {
            tracing::debug!("no flag for country {:?}", country_name);
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_uses_regional_indicators() {
        assert_eq!(glyph("FR").as_deref(), Some("\u{1F1EB}\u{1F1F7}"));
        assert_eq!(glyph("us").as_deref(), Some("\u{1F1FA}\u{1F1F8}"));
        assert_eq!(glyph("F"), None);
        assert_eq!(glyph("F1"), None);
        assert_eq!(glyph("FRA"), None);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(region_code("france"), Some("FR"));
        assert_eq!(region_code("  FRANCE "), Some("FR"));
        assert_eq!(region_code("fra"), Some("FR"));
        assert_eq!(region_code("250"), Some("FR"));
        assert_eq!(region_code(" 004 "), Some("AF"));
        assert_eq!(region_code("4"), None);
    }
}
