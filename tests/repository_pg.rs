//! Contract tests for the PostgreSQL repository.
//!
//! These run against a live database (`DATABASE_URL`) and are ignored by
//! default; run them with `cargo test -- --ignored` once PostgreSQL is up.
//! `#[sqlx::test]` provisions an isolated database per test and applies
//! `migrations/`.

use std::sync::Arc;

use chrono::{Duration, Utc};
use shortlink::prelude::*;
use sqlx::PgPool;

fn link(id: &str, url: &str) -> ShortLink {
    ShortLink::new(id.to_string(), url.to_string(), None)
}

#[sqlx::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_create_then_find_by_id(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    repo.create(&link("abc123", "https://example.com"))
        .await
        .unwrap();

    let found = repo.find_by_id("abc123").await.unwrap().unwrap();
    assert_eq!(found.id, "abc123");
    assert_eq!(found.link_url, "https://example.com");
    assert!(found.expires_at.is_none());
}

#[sqlx::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_find_by_id_not_found(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));
    assert!(repo.find_by_id("missing").await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_expiry_roundtrip(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let expires = Utc::now() + Duration::days(7);
    let mut stored = link("abc123", "https://example.com");
    stored.expires_at = Some(expires);

    repo.create(&stored).await.unwrap();

    let found = repo.find_by_id("abc123").await.unwrap().unwrap();
    assert_eq!(found.expires_at, Some(expires));
}

#[sqlx::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_create_conflict_is_reported_and_never_overwrites(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    repo.create(&link("abc123", "https://example.com"))
        .await
        .unwrap();

    let result = repo.create(&link("abc123", "https://attacker.test")).await;
    assert!(matches!(
        result,
        Err(StorageError::AlreadyExists { id }) if id == "abc123"
    ));

    let found = repo.find_by_id("abc123").await.unwrap().unwrap();
    assert_eq!(found.link_url, "https://example.com");
}

#[sqlx::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_find_by_url_is_exact_match_only(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    repo.create(&link("aaa", "https://example.com?a=1&b=2"))
        .await
        .unwrap();

    let same = repo.find_by_url("https://example.com?a=1&b=2").await.unwrap();
    assert_eq!(same.len(), 1);

    let reordered = repo.find_by_url("https://example.com?b=2&a=1").await.unwrap();
    assert!(reordered.is_empty());
}

#[sqlx::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_find_by_url_orders_newest_first_with_id_tiebreak(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));
    let base = Utc::now();

    let old = ShortLink {
        id: "old".to_string(),
        link_url: "https://example.com".to_string(),
        created_at: base - Duration::hours(2),
        expires_at: None,
    };
    let new_b = ShortLink {
        id: "b-new".to_string(),
        link_url: "https://example.com".to_string(),
        created_at: base,
        expires_at: None,
    };
    let new_a = ShortLink {
        id: "a-new".to_string(),
        link_url: "https://example.com".to_string(),
        created_at: base,
        expires_at: None,
    };

    repo.create(&old).await.unwrap();
    repo.create(&new_b).await.unwrap();
    repo.create(&new_a).await.unwrap();

    let links = repo.find_by_url("https://example.com").await.unwrap();
    let ids: Vec<&str> = links.iter().map(|l| l.id.as_str()).collect();

    assert_eq!(ids, vec!["a-new", "b-new", "old"]);
}
