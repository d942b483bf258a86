//! 페이지 HTML에서 임베디드 JSON 추출
//!
//! Next.js 페이지는 서버 렌더링 상태를 `<script id="__NEXT_DATA__">`에 JSON으로 넣어둡니다.
//! 주변 마크업은 언제든 바뀔 수 있으므로 위치가 아닌 id로 찾습니다.

use scraper::{Html, Selector};

use crate::error::ParseError;

/// 임베디드 페이지 상태가 들어있는 element id
pub const NEXT_DATA_ID: &str = "__NEXT_DATA__";

lazy_static::lazy_static! {
    static ref NEXT_DATA_SELECTOR: Selector =
        Selector::parse("script#__NEXT_DATA__").expect("static selector is valid");
}

/// HTML을 파싱해 `__NEXT_DATA__` 내용을 JSON 트리로 디코딩
pub fn extract(page: &[u8]) -> Result<serde_json::Value, ParseError> {
    let html = String::from_utf8_lossy(page);
    let document = Html::parse_document(&html);

    let element = document
        .select(&NEXT_DATA_SELECTOR)
        .next()
        .ok_or(ParseError::MissingElement { id: NEXT_DATA_ID })?;

    let text: String = element.text().collect();
    serde_json::from_str(&text).map_err(|source| ParseError::InvalidJson {
        id: NEXT_DATA_ID,
        source,
    })
}
