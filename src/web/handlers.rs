use std::{convert::Infallible, sync::Arc};
use serde::Deserialize;
use warp::http::StatusCode;
use warp::Reply;

use crate::ranking::{SortKey, UnknownSortKey};
use crate::template::medals::{ErrorTemplate, MedalsTemplate};
use super::State;

/// `?sort=gold` 형식의 순위 기준 (없으면 Total)
#[derive(Debug, Default, Deserialize)]
pub struct MedalsQuery {
    pub sort: Option<String>,
}

impl MedalsQuery {
    pub fn sort_key(&self) -> Result<SortKey, UnknownSortKey> {
        match self.sort.as_deref() {
            None | Some("") => Ok(SortKey::default()),
            Some(raw) => raw.parse(),
        }
    }
}

pub async fn medals_handler(
    state: Arc<State>,
    query: MedalsQuery,
) -> std::result::Result<warp::reply::Response, Infallible> {
    let sort = match query.sort_key() {
        Ok(sort) => sort,
        Err(e) => {
            return Ok(warp::reply::with_status(e.to_string(), StatusCode::BAD_REQUEST).into_response());
        }
    };

    Ok(match state.board.standings().await {
        Ok(standings) => MedalsTemplate::new(&standings, sort).into_response(),
        Err(e) => {
            tracing::error!("Failed to load medal standings ({}): {}", e.kind(), e);
            warp::reply::with_status(
                ErrorTemplate {
                    status: StatusCode::BAD_GATEWAY.as_u16(),
                    kind: e.kind(),
                    message: e.to_string(),
                },
                StatusCode::BAD_GATEWAY,
            )
            .into_response()
        }
    })
}
