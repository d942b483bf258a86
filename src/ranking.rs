use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::medals::CountryMedals;

/// 순위 기준
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Total,
    Gold,
    Silver,
    Bronze,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [SortKey::Total, SortKey::Gold, SortKey::Silver, SortKey::Bronze];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Total => "Total",
            SortKey::Gold => "Gold",
            SortKey::Silver => "Silver",
            SortKey::Bronze => "Bronze",
        }
    }

    pub fn value(self, country: &CountryMedals) -> u32 {
        match self {
            SortKey::Total => country.total,
            SortKey::Gold => country.gold,
            SortKey::Silver => country.silver,
            SortKey::Bronze => country.bronze,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSortKey(pub String);

impl fmt::Display for UnknownSortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown ranking criterion {:?} (expected Total, Gold, Silver or Bronze)",
            self.0
        )
    }
}

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownSortKey(s.to_string()))
    }
}

impl Serialize for SortKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// 순위가 매겨진 국가
#[derive(Debug, Clone)]
pub struct RankedCountry {
    /// 1부터 시작
    pub rank: usize,
    pub medals: CountryMedals,
}

/// 기준 값 내림차순으로 정렬하고 1..N 순위 부여
///
/// 안정 정렬이라 동점이면 원본 순서를 유지합니다.
pub fn rank(countries: &[CountryMedals], key: SortKey) -> Vec<RankedCountry> {
    let mut sorted: Vec<&CountryMedals> = countries.iter().collect();
    sorted.sort_by(|a, b| key.value(b).cmp(&key.value(a)));

    sorted
        .into_iter()
        .enumerate()
        .map(|(i, medals)| RankedCountry {
            rank: i + 1,
            medals: medals.clone(),
        })
        .collect()
}
