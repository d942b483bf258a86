//! 올림픽 메달 순위 스크랩
//!
//! - `client`: 메달 페이지 요청
//! - `extract`: HTML에서 `__NEXT_DATA__` JSON 추출
//! - `table`: JSON → 국가별 메달 레코드
//! - `flag`, `countries`: 국가 이름 → 국기 이모지
//! - `cache`: 순위표 캐시

pub mod cache;
pub mod client;
pub mod countries;
pub mod extract;
pub mod flag;
pub mod table;

use std::sync::Arc;
use std::time::Instant;

pub use cache::{MedalCache, Standings};
pub use client::MedalFetcher;
pub use table::CountryMedals;

use crate::config::Config;
use crate::error::MedalError;

/// 스크랩 파이프라인 + 캐시
///
/// 요청 → 추출 → 변환을 순서대로 한 번씩 실행합니다.
pub struct MedalBoard {
    fetcher: MedalFetcher,
    cache: MedalCache,
}

impl MedalBoard {
    pub fn new(config: &Config) -> reqwest::Result<Self> {
        Ok(Self {
            fetcher: MedalFetcher::new(&config.source)?,
            cache: MedalCache::new(config.cache.ttl()),
        })
    }

    /// 현재 메달 순위 (캐시가 유효하면 캐시 사용)
    pub async fn standings(&self) -> Result<Arc<Standings>, MedalError> {
        self.cache.get_or_refresh(move || self.scrape()).await
    }

    /// 캐시를 거치지 않고 메달 페이지를 새로 스크랩
    pub async fn scrape(&self) -> Result<Vec<CountryMedals>, MedalError> {
        let started = Instant::now();

        let page = self.fetcher.fetch().await?;
        let data = extract::extract(&page)?;
        let countries = table::build(&data)?;

        tracing::info!(
            "scraped {} countries from {} ({} bytes) in {:?}",
            countries.len(),
            self.fetcher.url(),
            page.len(),
            started.elapsed()
        );

        Ok(countries)
    }
}
