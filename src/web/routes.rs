use std::sync::Arc;
use warp::{filters::BoxedFilter, http::Uri, Filter, Reply};

use super::handlers::{self, MedalsQuery};
use super::State;

pub fn router(state: Arc<State>) -> BoxedFilter<(impl Reply,)> {
    index()
        .or(medals(Arc::clone(&state)))
        .or(assets())
        .or(crate::api::api(Arc::clone(&state)))
        .boxed()
}

fn index() -> BoxedFilter<(impl Reply,)> {
    let route = warp::path::end().map(|| warp::redirect(Uri::from_static("/medals")));
    warp::get().and(route).boxed()
}

fn medals(state: Arc<State>) -> BoxedFilter<(impl Reply,)> {
    let route = warp::path("medals")
        .and(warp::path::end())
        .and(warp::query::<MedalsQuery>())
        .and_then(move |query: MedalsQuery| handlers::medals_handler(Arc::clone(&state), query));

    warp::get().and(route).boxed()
}

fn assets() -> BoxedFilter<(impl Reply,)> {
    warp::get()
        .and(warp::path("assets"))
        .and(medals_css())
        .boxed()
}

fn medals_css() -> BoxedFilter<(impl Reply,)> {
    warp::path("medals.css")
        .and(warp::path::end())
        .and(warp::fs::file("./assets/medals.css"))
        .boxed()
}
