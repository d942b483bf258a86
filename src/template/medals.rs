use askama::Template;
use chrono::Utc;
use chrono_humanize::HumanTime;

use crate::medals::Standings;
use crate::ranking::{self, RankedCountry, SortKey};

#[derive(Debug, Template)]
#[template(path = "medals.html")]
pub struct MedalsTemplate {
    pub sort: SortKey,
    pub options: Vec<SortOption>,
    pub rows: Vec<RankedCountry>,
    pub bars: Vec<ChartBar>,
    /// "2 minutes ago" 형식
    pub updated: String,
}

/// 순위 기준 선택 옵션
#[derive(Debug)]
pub struct SortOption {
    pub value: &'static str,
    pub selected: bool,
}

/// 막대 차트 한 줄 (국가 vs 선택한 기준 값)
#[derive(Debug)]
pub struct ChartBar {
    pub label: String,
    pub value: u32,
    /// 최댓값 대비 너비 (0-100)
    pub width: u32,
}

impl MedalsTemplate {
    pub fn new(standings: &Standings, sort: SortKey) -> Self {
        let rows = ranking::rank(&standings.countries, sort);
        let max = rows
            .iter()
            .map(|row| sort.value(&row.medals))
            .max()
            .unwrap_or(0);

        let bars = rows
            .iter()
            .map(|row| {
                let value = sort.value(&row.medals);
                ChartBar {
                    label: row.medals.country_name.clone(),
                    value,
                    width: bar_width(value, max),
                }
            })
            .collect();

        let options = SortKey::ALL
            .into_iter()
            .map(|key| SortOption {
                value: key.as_str(),
                selected: key == sort,
            })
            .collect();

        Self {
            sort,
            options,
            rows,
            bars,
            updated: HumanTime::from(standings.fetched_at - Utc::now()).to_string(),
        }
    }
}

fn bar_width(value: u32, max: u32) -> u32 {
    if max == 0 {
        0
    } else {
        ((value as u64 * 100) / max as u64) as u32
    }
}

#[derive(Debug, Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub status: u16,
    pub kind: &'static str,
    pub message: String,
}
