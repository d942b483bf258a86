//! 메달 순위표 변환
//!
//! `props.pageProps.initialMedals.medalStandings.medalsTable` 배열을 국가별 레코드로 바꿉니다.
//! 경로는 올림픽 사이트 내부 상태 구조에 의존하므로, 어느 세그먼트가 빠졌는지 에러에 남깁니다.

use serde::Deserialize;

use super::flag;
use crate::error::SchemaError;

/// 메달 순위표까지의 경로
pub const MEDALS_TABLE_PATH: &[&str] = &[
    "props",
    "pageProps",
    "initialMedals",
    "medalStandings",
    "medalsTable",
];

/// 합계 메달 항목의 `type` 값 (대소문자 구분)
const TOTAL_TYPE: &str = "Total";

/// 국가별 메달 집계
///
/// `total`은 원본 값을 그대로 씁니다. 금/은/동 합과 같다고 가정하지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryMedals {
    pub country_name: String,
    /// 국기 이모지 (찾지 못하면 빈 문자열)
    pub flag_glyph: String,
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
    pub total: u32,
}

impl CountryMedals {
    /// 화면 표시용 이름: 국기가 있으면 "🇫🇷 France", 없으면 이름만
    pub fn display_name(&self) -> String {
        if self.flag_glyph.is_empty() {
            self.country_name.clone()
        } else {
            format!("{} {}", self.flag_glyph, self.country_name)
        }
    }
}

/// `medalsTable`의 한 행
///
/// `medalsNumber` 항목은 `Total`을 고른 뒤에만 디코딩합니다 (성별 항목은 형식이 달라도 무시).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MedalRow {
    description: String,
    medals_number: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct MedalCount {
    gold: u32,
    silver: u32,
    bronze: u32,
    total: u32,
}

/// JSON 트리에서 메달 순위표를 찾아 레코드 목록으로 변환
///
/// 원본 순서를 유지합니다. 정렬은 화면 쪽 책임입니다.
/// 어떤 행이라도 `Total` 항목이 없으면 전체가 실패합니다.
pub fn build(page: &serde_json::Value) -> Result<Vec<CountryMedals>, SchemaError> {
    let rows = medals_table(page)?;

    rows.iter()
        .enumerate()
        .map(|(index, value)| build_row(index, value))
        .collect()
}

fn medals_table(page: &serde_json::Value) -> Result<&Vec<serde_json::Value>, SchemaError> {
    let mut node = page;
    for (depth, segment) in MEDALS_TABLE_PATH.iter().enumerate() {
        node = node.get(segment).ok_or_else(|| SchemaError::MissingPath {
            path: MEDALS_TABLE_PATH[..=depth].join("."),
        })?;
    }

    node.as_array().ok_or_else(|| SchemaError::NotAnArray {
        path: MEDALS_TABLE_PATH.join("."),
    })
}

fn build_row(index: usize, value: &serde_json::Value) -> Result<CountryMedals, SchemaError> {
    let row = MedalRow::deserialize(value)
        .map_err(|source| SchemaError::MalformedRow { index, source })?;

    let entry = row
        .medals_number
        .iter()
        .find(|m| m.get("type").and_then(|t| t.as_str()) == Some(TOTAL_TYPE))
        .ok_or_else(|| SchemaError::MissingTotal {
            index,
            country: row.description.clone(),
        })?;
    let medals = MedalCount::deserialize(entry)
        .map_err(|source| SchemaError::MalformedRow { index, source })?;

    Ok(CountryMedals {
        flag_glyph: flag::encode(&row.description),
        gold: medals.gold,
        silver: medals.silver,
        bronze: medals.bronze,
        total: medals.total,
        country_name: row.description,
    })
}
