//! 메달 순위 캐시
//!
//! 마지막으로 가져온 순위표 1개만 보관합니다.
//! TTL 안에서는 올림픽 사이트에 다시 요청하지 않고, 실패한 결과는 저장하지 않습니다.

use chrono::{DateTime, Utc};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

use super::table::CountryMedals;

/// 한 번의 스크랩 결과
#[derive(Debug, Clone)]
pub struct Standings {
    /// 조회 시각 (화면 표시용)
    pub fetched_at: DateTime<Utc>,
    /// 만료 판정용. 시스템 시계가 바뀌어도 영향을 받지 않음
    pub loaded_at: Instant,
    /// 원본 순서 그대로의 국가별 집계
    pub countries: Vec<CountryMedals>,
}

pub struct MedalCache {
    ttl: Duration,
    current: RwLock<Option<Arc<Standings>>>,
}

/// 스냅샷이 만료되었는지 확인
pub fn is_expired(standings: &Standings, ttl: Duration, now: Instant) -> bool {
    now.saturating_duration_since(standings.loaded_at) >= ttl
}

impl MedalCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            current: RwLock::new(None),
        }
    }

    /// 유효한 캐시가 있으면 반환, 없으면 `load`로 새로 가져와 저장
    ///
    /// 갱신 중에는 write lock을 잡고 있으므로 동시에 들어온 요청은 같은 결과를 공유합니다.
    pub async fn get_or_refresh<F, Fut, E>(&self, load: F) -> Result<Arc<Standings>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<CountryMedals>, E>>,
    {
        {
            let guard = self.current.read().await;
            if let Some(standings) = self.fresh(&guard) {
                tracing::debug!("medal cache hit (fetched at {})", standings.fetched_at);
                return Ok(standings);
            }
        }

        let mut guard = self.current.write().await;
        // 락을 기다리는 동안 다른 요청이 갱신했을 수 있음
        if let Some(standings) = self.fresh(&guard) {
            return Ok(standings);
        }

        let countries = load().await?;
        let standings = Arc::new(Standings {
            fetched_at: Utc::now(),
            loaded_at: Instant::now(),
            countries,
        });
        *guard = Some(Arc::clone(&standings));

        Ok(standings)
    }

    fn fresh(&self, current: &Option<Arc<Standings>>) -> Option<Arc<Standings>> {
        current
            .as_ref()
            .filter(|standings| !is_expired(standings, self.ttl, Instant::now()))
            .map(Arc::clone)
    }
}
