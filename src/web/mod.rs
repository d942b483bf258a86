use std::sync::Arc;
use anyhow::{Context, Result};

use crate::config::Config;
use crate::medals::MedalBoard;

pub mod routes;
pub mod handlers;

pub async fn start(config: Arc<Config>) -> Result<()> {
    let state = State::new(&config)?;

    tracing::info!(
        "listening at {} (source: {}, cache ttl: {}s)",
        config.web.host,
        config.source.url,
        config.cache.ttl_secs
    );
    warp::serve(routes::router(state)).run(config.web.host).await;
    Ok(())
}

pub struct State {
    pub board: MedalBoard,
}

impl State {
    pub fn new(config: &Config) -> Result<Arc<Self>> {
        let board = MedalBoard::new(config).context("could not create http client")?;

        Ok(Arc::new(Self { board }))
    }
}
