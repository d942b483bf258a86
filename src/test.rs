use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::{TimeDelta, Utc};
use tokio::time::Instant;
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::config::{Cache, Config, Source, Web};
use crate::error::{MedalError, NetworkError, ParseError, SchemaError};
use crate::medals::cache::{is_expired, MedalCache, Standings};
use crate::medals::countries::COUNTRIES;
use crate::medals::{extract, flag, table, CountryMedals, MedalBoard, MedalFetcher};
use crate::ranking::{rank, SortKey};
use crate::web::{routes, State};

const MEDALS_PATH: &str = "/en/paris-2024/medals";

fn france_fragment() -> Value {
    json!({"props":{"pageProps":{"initialMedals":{"medalStandings":{"medalsTable":[
        {"description":"France","medalsNumber":[
            {"type":"Total","gold":16,"silver":26,"bronze":22,"total":64}
        ]}
    ]}}}}})
}

fn with_table(rows: Value) -> Value {
    json!({"props":{"pageProps":{"initialMedals":{"medalStandings":{"medalsTable": rows}}}}})
}

fn row(name: &str, gold: u32, silver: u32, bronze: u32, total: u32) -> Value {
    json!({
        "description": name,
        "medalsNumber": [
            {"type": "Men", "gold": 0, "silver": 0, "bronze": 0, "total": 0},
            {"type": "Total", "gold": gold, "silver": silver, "bronze": bronze, "total": total},
        ],
    })
}

fn page_html(data: &Value) -> String {
    format!(
        r#"<!DOCTYPE html><html><head><title>Medals</title>
<script id="gtm">window.dataLayer = [];</script>
</head><body><div id="__next"></div>
<script id="__NEXT_DATA__" type="application/json">{}</script>
</body></html>"#,
        data
    )
}

fn medals(name: &str, gold: u32, silver: u32, bronze: u32, total: u32) -> CountryMedals {
    CountryMedals {
        country_name: name.to_string(),
        flag_glyph: flag::encode(name),
        gold,
        silver,
        bronze,
        total,
    }
}

fn test_config(server: &MockServer, ttl_secs: u64) -> Config {
    Config {
        web: Web::default(),
        source: Source {
            url: format!("{}{}", server.uri(), MEDALS_PATH),
            ..Source::default()
        },
        cache: Cache { ttl_secs },
    }
}

// ---------------------------------------------------------------------------
// flag

#[test]
fn flag_for_every_region_code_is_two_regional_indicators() {
    for country in COUNTRIES {
        let flag = flag::encode(country.name);
        let expected: Vec<u32> = country
            .alpha_2
            .bytes()
            .map(|b| 0x1F1E6 + (b - b'A') as u32)
            .collect();
        let actual: Vec<u32> = flag.chars().map(|c| c as u32).collect();

        assert_eq!(actual, expected, "flag for {}", country.name);
        assert_eq!(flag.len(), 8, "two 4-byte code points for {}", country.name);
        assert_eq!(
            flag::region_code(country.numeric),
            Some(country.alpha_2),
            "numeric code {} for {}",
            country.numeric,
            country.name
        );
    }
}

#[test]
fn flag_lookup_accepts_codes_and_alternative_names() {
    assert_eq!(flag::encode("France"), "🇫🇷");
    assert_eq!(flag::encode("FR"), "🇫🇷");
    assert_eq!(flag::encode("FRA"), "🇫🇷");
    assert_eq!(flag::encode("250"), "🇫🇷");
    assert_eq!(flag::encode("840"), "🇺🇸");
    assert_eq!(flag::encode("French Republic"), "🇫🇷");
    assert_eq!(flag::encode("United States of America"), "🇺🇸");
    assert_eq!(flag::encode("South Korea"), "🇰🇷");
}

#[test]
fn flag_lookup_knows_olympic_designations() {
    assert_eq!(flag::encode("Great Britain"), "🇬🇧");
    assert_eq!(flag::encode("People's Republic of China"), "🇨🇳");
    assert_eq!(flag::encode("Republic of Korea"), "🇰🇷");
    assert_eq!(flag::encode("Chinese Taipei"), "🇹🇼");
    assert_eq!(flag::encode("Hong Kong, China"), "🇭🇰");
    assert_eq!(flag::encode("Islamic Republic of Iran"), "🇮🇷");
}

#[test]
fn unresolvable_country_has_no_flag() {
    for name in ["Refugee Olympic Team", "Individual Neutral Athletes", "Atlantis", "", "   "] {
        assert_eq!(flag::encode(name), "", "{:?}", name);
    }
}

// ---------------------------------------------------------------------------
// extract

#[test]
fn extract_finds_next_data_by_id() {
    let html = page_html(&france_fragment());
    let data = extract::extract(html.as_bytes()).unwrap();
    assert_eq!(data, france_fragment());
}

#[test]
fn extract_fails_without_next_data() {
    let html = r#"<html><body><script id="other">{"a": 1}</script></body></html>"#;
    let err = extract::extract(html.as_bytes()).unwrap_err();
    assert!(matches!(err, ParseError::MissingElement { id: "__NEXT_DATA__" }));
    assert!(err.to_string().contains("__NEXT_DATA__"));
}

#[test]
fn extract_fails_on_invalid_json() {
    let html = r#"<html><body><script id="__NEXT_DATA__">{"props": </script></body></html>"#;
    let err = extract::extract(html.as_bytes()).unwrap_err();
    assert!(matches!(err, ParseError::InvalidJson { id: "__NEXT_DATA__", .. }));
}

// ---------------------------------------------------------------------------
// table

#[test]
fn build_france_fragment() {
    let countries = table::build(&france_fragment()).unwrap();
    assert_eq!(
        countries,
        vec![CountryMedals {
            country_name: "France".to_string(),
            flag_glyph: "🇫🇷".to_string(),
            gold: 16,
            silver: 26,
            bronze: 22,
            total: 64,
        }]
    );
    assert_eq!(countries[0].display_name(), "🇫🇷 France");
}

#[test]
fn build_keeps_upstream_order_and_total_entry() {
    let data = with_table(json!([
        row("Japan", 20, 12, 13, 45),
        row("United States of America", 40, 44, 42, 126),
        row("Refugee Olympic Team", 0, 0, 1, 1),
    ]));

    let countries = table::build(&data).unwrap();
    let names: Vec<&str> = countries.iter().map(|c| c.country_name.as_str()).collect();
    assert_eq!(names, ["Japan", "United States of America", "Refugee Olympic Team"]);

    assert_eq!(countries[1].gold, 40);
    assert_eq!(countries[1].total, 126);
    assert_eq!(countries[2].flag_glyph, "");
    assert_eq!(countries[2].display_name(), "Refugee Olympic Team");
}

#[test]
fn build_does_not_recompute_total() {
    let data = with_table(json!([row("Kenya", 4, 2, 5, 99)]));
    let countries = table::build(&data).unwrap();
    assert_eq!(countries[0].total, 99);
}

#[test]
fn build_empty_table() {
    let countries = table::build(&with_table(json!([]))).unwrap();
    assert!(countries.is_empty());
}

#[test]
fn build_fails_when_any_row_has_no_total() {
    let data = with_table(json!([
        row("Japan", 20, 12, 13, 45),
        {
            "description": "Italy",
            "medalsNumber": [
                {"type": "total", "gold": 12, "silver": 13, "bronze": 15, "total": 40}
            ]
        },
    ]));

    let err = table::build(&data).unwrap_err();
    match err {
        SchemaError::MissingTotal { index, country } => {
            assert_eq!(index, 1);
            assert_eq!(country, "Italy");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn build_names_missing_path_segment() {
    let cases = [
        (json!({}), "props"),
        (json!({"props": {}}), "props.pageProps"),
        (json!({"props": {"pageProps": {}}}), "props.pageProps.initialMedals"),
        (
            json!({"props": {"pageProps": {"initialMedals": {}}}}),
            "props.pageProps.initialMedals.medalStandings",
        ),
        (
            json!({"props": {"pageProps": {"initialMedals": {"medalStandings": {}}}}}),
            "props.pageProps.initialMedals.medalStandings.medalsTable",
        ),
    ];

    for (data, expected) in cases {
        match table::build(&data) {
            Err(SchemaError::MissingPath { path }) => assert_eq!(path, expected),
            other => panic!("expected missing {expected}, got {other:?}"),
        }
    }
}

#[test]
fn build_ignores_malformed_entries_other_than_total() {
    let data = with_table(json!([
        {"description": "France", "medalsNumber": [
            {"type": "Men", "gold": 3, "silver": null, "bronze": 1},
            {"type": "Women", "gold": "n/a"},
            {"type": "Total", "gold": 16, "silver": 26, "bronze": 22, "total": 64},
            {"type": "Mixed"},
        ]},
    ]));

    let countries = table::build(&data).unwrap();
    assert_eq!(countries, vec![medals("France", 16, 26, 22, 64)]);
}

#[test]
fn build_rejects_malformed_total_entry() {
    let data = with_table(json!([
        {"description": "Spain", "medalsNumber": [
            {"type": "Men", "gold": 1, "silver": 0, "bronze": 0, "total": 1},
            {"type": "Total", "gold": 5, "silver": null, "bronze": 9, "total": 18},
        ]},
    ]));

    let err = table::build(&data).unwrap_err();
    assert!(matches!(err, SchemaError::MalformedRow { index: 0, .. }));
}

#[test]
fn build_rejects_non_array_table() {
    let err = table::build(&with_table(json!({"France": 64}))).unwrap_err();
    assert!(matches!(err, SchemaError::NotAnArray { .. }));
}

#[test]
fn build_rejects_malformed_row() {
    let data = with_table(json!([
        row("Japan", 20, 12, 13, 45),
        {"description": "Spain", "medalsNumber": [{"type": "Total", "gold": "five"}]},
    ]));

    let err = table::build(&data).unwrap_err();
    assert!(matches!(err, SchemaError::MalformedRow { index: 1, .. }));
}

// ---------------------------------------------------------------------------
// ranking

#[test]
fn rank_sorts_descending_with_contiguous_ranks() {
    let countries = vec![
        medals("Japan", 20, 12, 13, 45),
        medals("United States of America", 40, 44, 42, 126),
        medals("France", 16, 26, 22, 64),
        medals("Australia", 18, 19, 16, 53),
    ];

    for key in SortKey::ALL {
        let ranked = rank(&countries, key);
        assert_eq!(ranked.len(), countries.len());

        let ranks: Vec<usize> = ranked.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, [1, 2, 3, 4]);

        let first = key.value(&ranked[0].medals);
        assert!(ranked.iter().all(|r| key.value(&r.medals) <= first));
        assert!(ranked
            .windows(2)
            .all(|w| key.value(&w[0].medals) >= key.value(&w[1].medals)));
    }

    let by_gold = rank(&countries, SortKey::Gold);
    assert_eq!(by_gold[0].medals.country_name, "United States of America");
    assert_eq!(by_gold[1].medals.country_name, "Japan");
}

#[test]
fn rank_keeps_upstream_order_on_ties() {
    let countries = vec![
        medals("Dominica", 1, 0, 0, 1),
        medals("Saint Lucia", 1, 1, 0, 2),
        medals("Botswana", 1, 1, 0, 2),
    ];

    let ranked = rank(&countries, SortKey::Gold);
    let names: Vec<&str> = ranked.iter().map(|r| r.medals.country_name.as_str()).collect();
    assert_eq!(names, ["Dominica", "Saint Lucia", "Botswana"]);
}

#[test]
fn sort_key_parsing() {
    assert_eq!("gold".parse::<SortKey>(), Ok(SortKey::Gold));
    assert_eq!("Silver".parse::<SortKey>(), Ok(SortKey::Silver));
    assert_eq!(" BRONZE ".parse::<SortKey>(), Ok(SortKey::Bronze));
    assert_eq!("total".parse::<SortKey>(), Ok(SortKey::Total));
    assert!("platinum".parse::<SortKey>().is_err());
    assert_eq!(SortKey::default(), SortKey::Total);
}

// ---------------------------------------------------------------------------
// cache

#[test]
fn snapshot_expiry() {
    let loaded = Instant::now();
    let standings = Standings {
        fetched_at: Utc::now(),
        loaded_at: loaded,
        countries: Vec::new(),
    };
    let now = loaded + Duration::from_secs(30);

    assert!(!is_expired(&standings, Duration::from_secs(60), now));
    assert!(is_expired(&standings, Duration::from_secs(30), now));
    assert!(is_expired(&standings, Duration::ZERO, now));
}

#[test]
fn snapshot_expiry_ignores_wall_clock() {
    let loaded = Instant::now();
    // 시스템 시계가 되돌아가 조회 시각이 미래로 보이는 경우
    let standings = Standings {
        fetched_at: Utc::now() + TimeDelta::try_hours(2).unwrap(),
        loaded_at: loaded,
        countries: Vec::new(),
    };

    assert!(is_expired(&standings, Duration::from_secs(60), loaded + Duration::from_secs(90)));
    assert!(!is_expired(&standings, Duration::from_secs(60), loaded));
}

#[tokio::test]
async fn cache_reuses_fresh_snapshot() {
    let cache = MedalCache::new(Duration::from_secs(60));
    let counter = AtomicUsize::new(0);
    let calls = &counter;

    for _ in 0..3 {
        let standings = cache
            .get_or_refresh(move || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok::<_, MedalError>(vec![medals("France", 16, 26, 22, 64)])
            })
            .await
            .unwrap();
        assert_eq!(standings.countries.len(), 1);
    }

    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn cache_with_zero_ttl_always_reloads() {
    let cache = MedalCache::new(Duration::ZERO);
    let counter = AtomicUsize::new(0);
    let calls = &counter;

    for _ in 0..3 {
        cache
            .get_or_refresh(move || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok::<_, MedalError>(Vec::new())
            })
            .await
            .unwrap();
    }

    assert_eq!(counter.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn cache_does_not_store_failures() {
    let cache = MedalCache::new(Duration::from_secs(60));

    let err = cache
        .get_or_refresh(|| async {
            Err::<Vec<CountryMedals>, _>(SchemaError::MissingPath {
                path: "props".to_string(),
            })
        })
        .await
        .unwrap_err();
    assert!(matches!(err, SchemaError::MissingPath { .. }));

    let standings = cache
        .get_or_refresh(|| async { Ok::<_, SchemaError>(vec![medals("Kenya", 4, 2, 5, 11)]) })
        .await
        .unwrap();
    assert_eq!(standings.countries[0].country_name, "Kenya");
}

// ---------------------------------------------------------------------------
// fetch + pipeline

#[tokio::test]
async fn fetcher_sends_browser_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(MEDALS_PATH))
        .and(header("user-agent", "Mozilla/5.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = MedalFetcher::new(&test_config(&server, 0).source).unwrap();
    let body = fetcher.fetch().await.unwrap();
    assert_eq!(body, b"<html></html>");
}

#[tokio::test]
async fn fetcher_rejects_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(MEDALS_PATH))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let fetcher = MedalFetcher::new(&test_config(&server, 0).source).unwrap();
    let err = fetcher.fetch().await.unwrap_err();
    match err {
        NetworkError::Status { status, .. } => assert_eq!(status.as_u16(), 403),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn fetcher_reports_connection_failure() {
    let config = Source {
        url: "http://127.0.0.1:1/en/paris-2024/medals".to_string(),
        timeout_secs: 5,
        ..Source::default()
    };

    let fetcher = MedalFetcher::new(&config).unwrap();
    let err = fetcher.fetch().await.unwrap_err();
    assert!(matches!(err, NetworkError::Request(_)));
}

#[tokio::test]
async fn fetcher_reports_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(MEDALS_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html></html>")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = Source {
        timeout_secs: 1,
        ..test_config(&server, 0).source
    };
    let fetcher = MedalFetcher::new(&config).unwrap();
    match fetcher.fetch().await.unwrap_err() {
        NetworkError::Request(e) => assert!(e.is_timeout()),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn pipeline_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(MEDALS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(page_html(&france_fragment())))
        .expect(1)
        .mount(&server)
        .await;

    let board = MedalBoard::new(&test_config(&server, 60)).unwrap();
    let first = board.standings().await.unwrap();
    let second = board.standings().await.unwrap();

    assert_eq!(first.countries, second.countries);
    assert_eq!(first.countries.len(), 1);
    let france = &first.countries[0];
    assert_eq!(france.country_name, "France");
    assert_eq!(france.flag_glyph, "🇫🇷");
    assert_eq!((france.gold, france.silver, france.bronze, france.total), (16, 26, 22, 64));
}

#[tokio::test]
async fn pipeline_reports_failure_kind() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(MEDALS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body>maintenance</body></html>"))
        .mount(&server)
        .await;

    let board = MedalBoard::new(&test_config(&server, 60)).unwrap();
    let err = board.standings().await.unwrap_err();
    assert_eq!(err.kind(), "parse");
}

// ---------------------------------------------------------------------------
// web

async fn mounted_state(status: u16, data: &Value) -> (MockServer, Arc<State>) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(MEDALS_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_string(page_html(data)))
        .mount(&server)
        .await;

    let state = State::new(&test_config(&server, 60)).unwrap();
    (server, state)
}

#[tokio::test]
async fn medals_page_renders_ranked_table() {
    let data = with_table(json!([
        row("Japan", 20, 12, 13, 45),
        row("France", 16, 26, 22, 64),
    ]));
    let (_server, state) = mounted_state(200, &data).await;

    let res = warp::test::request()
        .method("GET")
        .path("/medals?sort=silver")
        .reply(&routes::router(state))
        .await;

    assert_eq!(res.status(), 200);
    let body = String::from_utf8_lossy(res.body());
    assert!(body.contains("🇫🇷 France"));
    assert!(body.contains("Ranked by Silver"));
    let france = body.find("🇫🇷 France").unwrap();
    let japan = body.find("🇯🇵 Japan").unwrap();
    assert!(france < japan);
}

#[tokio::test]
async fn api_returns_ranked_json() {
    let data = with_table(json!([
        row("Japan", 20, 12, 13, 45),
        row("France", 16, 26, 22, 64),
    ]));
    let (_server, state) = mounted_state(200, &data).await;

    let res = warp::test::request()
        .method("GET")
        .path("/api/medals?sort=gold")
        .reply(&routes::router(state))
        .await;

    assert_eq!(res.status(), 200);
    let body: Value = serde_json::from_slice(res.body()).unwrap();
    assert_eq!(body["sort"], "Gold");
    assert_eq!(body["countries"][0]["rank"], 1);
    assert_eq!(body["countries"][0]["country"], "Japan");
    assert_eq!(body["countries"][0]["flag"], "🇯🇵");
    assert_eq!(body["countries"][1]["display_name"], "🇫🇷 France");
    assert_eq!(body["countries"][1]["total"], 64);
}

#[tokio::test]
async fn unknown_sort_key_is_bad_request() {
    let (_server, state) = mounted_state(200, &france_fragment()).await;
    let router = routes::router(state);

    let page = warp::test::request().path("/medals?sort=platinum").reply(&router).await;
    assert_eq!(page.status(), 400);

    let api = warp::test::request().path("/api/medals?sort=platinum").reply(&router).await;
    assert_eq!(api.status(), 400);
}

#[tokio::test]
async fn upstream_failure_is_visible() {
    let (_server, state) = mounted_state(503, &france_fragment()).await;
    let router = routes::router(state);

    let page = warp::test::request().path("/medals").reply(&router).await;
    assert_eq!(page.status(), 502);
    assert!(String::from_utf8_lossy(page.body()).contains("network"));

    let api = warp::test::request().path("/api/medals").reply(&router).await;
    assert_eq!(api.status(), 502);
    let body: Value = serde_json::from_slice(api.body()).unwrap();
    assert_eq!(body["error"], "network");
}

#[tokio::test]
async fn index_redirects_to_medals() {
    let (_server, state) = mounted_state(200, &france_fragment()).await;

    let res = warp::test::request().path("/").reply(&routes::router(state)).await;
    assert!(res.status().is_redirection());
    assert_eq!(res.headers()["location"], "/medals");
}
