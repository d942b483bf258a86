//! 파이프라인 에러 타입
//!
//! 단계별로 실패 종류를 구분합니다.
//! - `NetworkError`: 페이지 요청 실패 (연결, 타임아웃, non-2xx)
//! - `ParseError`: HTML에서 임베디드 JSON을 찾지 못했거나 JSON이 깨진 경우
//! - `SchemaError`: JSON 구조가 기대한 형태와 다른 경우

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("upstream returned {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("element with id `{id}` not found in page")]
    MissingElement { id: &'static str },
    #[error("element with id `{id}` does not contain valid JSON: {source}")]
    InvalidJson {
        id: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum SchemaError {
    /// `path`는 처음으로 빠진 세그먼트까지 포함한 경로
    #[error("missing `{path}` in page data")]
    MissingPath { path: String },
    #[error("`{path}` is not an array")]
    NotAnArray { path: String },
    #[error("medal row {index} is malformed: {source}")]
    MalformedRow {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("medal row {index} ({country}) has no `Total` medal entry")]
    MissingTotal { index: usize, country: String },
}

#[derive(Debug, Error)]
pub enum MedalError {
    #[error("network error: {0}")]
    Network(#[from] NetworkError),
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),
}

impl MedalError {
    /// 로그와 API 응답에 쓰는 실패 종류 이름
    pub fn kind(&self) -> &'static str {
        match self {
            MedalError::Network(_) => "network",
            MedalError::Parse(_) => "parse",
            MedalError::Schema(_) => "schema",
        }
    }
}
