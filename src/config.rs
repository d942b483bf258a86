use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_SOURCE_URL: &str = "https://olympics.com/en/paris-2024/medals";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub web: Web,
    #[serde(default)]
    pub source: Source,
    #[serde(default)]
    pub cache: Cache,
}

#[derive(Debug, Deserialize)]
pub struct Web {
    pub host: SocketAddr,
}

impl Default for Web {
    fn default() -> Self {
        Self {
            host: SocketAddr::from(([127, 0, 0, 1], 8000)),
        }
    }
}

/// 메달 페이지 요청 설정
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Source {
    pub url: String,
    pub user_agent: String,
    /// 요청 타임아웃 (초). 0이면 제한 없음
    pub timeout_secs: u64,
}

impl Default for Source {
    fn default() -> Self {
        Self {
            url: DEFAULT_SOURCE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 30,
        }
    }
}

impl Source {
    pub fn timeout(&self) -> Option<Duration> {
        match self.timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

/// 메달 순위 캐시 설정
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Cache {
    /// 캐시 유지 시간 (초). 0이면 매 요청마다 새로 가져옴
    pub ttl_secs: u64,
}

impl Default for Cache {
    fn default() -> Self {
        Self { ttl_secs: 60 }
    }
}

impl Cache {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}
