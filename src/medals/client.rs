//! 올림픽 메달 페이지 HTTP 클라이언트
//!
//! 올림픽 사이트는 브라우저 User-Agent가 없는 요청을 차단하므로 항상 헤더를 붙입니다.
//! 재시도는 하지 않습니다. 실패는 그대로 호출자에게 전달됩니다.

use std::time::Instant;

use reqwest::header::USER_AGENT;

use crate::config::Source as SourceConfig;
use crate::error::NetworkError;

/// 메달 페이지 클라이언트
pub struct MedalFetcher {
    url: String,
    user_agent: String,
    http: reqwest::Client,
}

impl MedalFetcher {
    pub fn new(config: &SourceConfig) -> reqwest::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            url: config.url.clone(),
            user_agent: config.user_agent.clone(),
            http: builder.build()?,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// 메달 페이지 원문 가져오기
    pub async fn fetch(&self) -> Result<Vec<u8>, NetworkError> {
        let started = Instant::now();

        let response = self
            .http
            .get(&self.url)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(NetworkError::Status {
                status: response.status(),
                url: self.url.clone(),
            });
        }

        let body = response.bytes().await?;
        tracing::debug!(
            "fetched {} ({} bytes) in {:?}",
            self.url,
            body.len(),
            started.elapsed()
        );

        Ok(body.to_vec())
    }
}
