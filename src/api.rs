use crate::medals::Standings;
use crate::ranking::{self, RankedCountry, SortKey};
use crate::web::handlers::MedalsQuery;
use crate::web::State;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::convert::Infallible;
use std::sync::Arc;
use warp::filters::BoxedFilter;
use warp::http::StatusCode;
use warp::{Filter, Reply};

pub fn api(state: Arc<State>) -> BoxedFilter<(impl Reply,)> {
    warp::path("api").and(medals(state)).boxed()
}

fn medals(state: Arc<State>) -> BoxedFilter<(impl Reply,)> {
    async fn logic(state: Arc<State>, query: MedalsQuery) -> Result<warp::reply::Response, Infallible> {
        let sort = match query.sort_key() {
            Ok(sort) => sort,
            Err(e) => {
                return Ok(error_reply(StatusCode::BAD_REQUEST, "request", e.to_string()));
            }
        };

        match state.board.standings().await {
            Ok(standings) => Ok(warp::reply::json(&ApiReadableMedals::new(&standings, sort)).into_response()),
            Err(e) => {
                tracing::error!("Failed to load medal standings ({}): {}", e.kind(), e);
                Ok(error_reply(StatusCode::BAD_GATEWAY, e.kind(), e.to_string()))
            }
        }
    }

    warp::get()
        .and(warp::path("medals"))
        .and(warp::path::end())
        .and(warp::query::<MedalsQuery>())
        .and_then(move |query: MedalsQuery| logic(state.clone(), query))
        .boxed()
}

fn error_reply(status: StatusCode, kind: &str, message: String) -> warp::reply::Response {
    warp::reply::with_status(
        warp::reply::json(&ApiError { error: kind, message }),
        status,
    )
    .into_response()
}

#[derive(Debug, Serialize)]
struct ApiError<'a> {
    error: &'a str,
    message: String,
}

#[derive(Debug, Serialize)]
pub struct ApiReadableMedals {
    pub fetched_at: DateTime<Utc>,
    pub sort: SortKey,
    pub countries: Vec<ApiReadableCountry>,
}

impl ApiReadableMedals {
    pub fn new(standings: &Standings, sort: SortKey) -> Self {
        Self {
            fetched_at: standings.fetched_at,
            sort,
            countries: ranking::rank(&standings.countries, sort)
                .into_iter()
                .map(ApiReadableCountry::from)
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiReadableCountry {
    pub rank: usize,
    pub country: String,
    pub flag: String,
    pub display_name: String,
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
    pub total: u32,
}

impl From<RankedCountry> for ApiReadableCountry {
    fn from(ranked: RankedCountry) -> Self {
        let display_name = ranked.medals.display_name();
        let medals = ranked.medals;

        Self {
            rank: ranked.rank,
            country: medals.country_name,
            flag: medals.flag_glyph,
            display_name,
            gold: medals.gold,
            silver: medals.silver,
            bronze: medals.bronze,
            total: medals.total,
        }
    }
}
