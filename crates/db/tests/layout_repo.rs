//! Integration tests for the PostgreSQL repositories and `PgLayoutStore`.
//!
//! These need a live PostgreSQL reachable through `DATABASE_URL`; run them
//! with `cargo test -p layoutsmith-db -- --ignored`.

use layoutsmith_core::theme::{PrimaryColor, Spacing, Theme, ThemeMode};
use layoutsmith_core::versioning::{MAX_RETAINED_VERSIONS, REASON_INITIAL_CREATE};
use layoutsmith_db::history;
use layoutsmith_db::models::layout::{CreateLayout, UpdateLayout};
use layoutsmith_db::models::layout_version::CreateLayoutVersion;
use layoutsmith_db::repositories::{LayoutRepo, LayoutVersionRepo};
use layoutsmith_db::store::PgLayoutStore;
use sqlx::PgPool;

fn new_layout(content: &str) -> CreateLayout {
    CreateLayout {
        content: content.to_string(),
        theme: Some(Theme {
            primary_color: PrimaryColor::Indigo,
            spacing: Spacing::Comfortable,
            mode: ThemeMode::Light,
        }),
    }
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn create_and_find_layout(pool: PgPool) {
    let created = LayoutRepo::create(&pool, &new_layout("<main/>")).await.unwrap();
    let found = LayoutRepo::find_by_id(&pool, created.id).await.unwrap().unwrap();

    assert_eq!(found.content, "<main/>");
    assert_eq!(found.theme.map(|t| t.0.mode), Some(ThemeMode::Light));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn update_without_theme_keeps_stored_theme(pool: PgPool) {
    let created = LayoutRepo::create(&pool, &new_layout("a")).await.unwrap();
    let updated = LayoutRepo::update(
        &pool,
        created.id,
        &UpdateLayout {
            content: "b".to_string(),
            theme: None,
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.content, "b");
    assert!(updated.theme.is_some());
    assert!(updated.updated_at >= created.updated_at);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn update_missing_layout_returns_none(pool: PgPool) {
    let result = LayoutRepo::update(
        &pool,
        424242,
        &UpdateLayout {
            content: "b".to_string(),
            theme: None,
        },
    )
    .await
    .unwrap();
    assert!(result.is_none());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn versions_are_scoped_and_deletable(pool: PgPool) {
    let a = LayoutRepo::create(&pool, &new_layout("a")).await.unwrap();
    let b = LayoutRepo::create(&pool, &new_layout("b")).await.unwrap();
    let version = LayoutVersionRepo::create(
        &pool,
        &CreateLayoutVersion {
            layout_id: a.id,
            content: "a".to_string(),
            reason: "manual_update".to_string(),
        },
    )
    .await
    .unwrap();

    assert!(LayoutVersionRepo::find_for_layout(&pool, a.id, version.id)
        .await
        .unwrap()
        .is_some());
    assert!(LayoutVersionRepo::find_for_layout(&pool, b.id, version.id)
        .await
        .unwrap()
        .is_none());

    let removed = LayoutVersionRepo::delete_by_ids(&pool, &[version.id]).await.unwrap();
    assert_eq!(removed, 1);
    assert_eq!(LayoutVersionRepo::count_for_layout(&pool, a.id).await.unwrap(), 0);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn history_prunes_to_retention_bound(pool: PgPool) {
    let store = PgLayoutStore::new(pool.clone());
    let layout = history::create_layout(&store, &new_layout("v0")).await.unwrap();
    for i in 1..=6 {
        history::update_layout(
            &store,
            layout.id,
            &UpdateLayout {
                content: format!("v{i}"),
                theme: None,
            },
            "manual_update",
        )
        .await
        .unwrap()
        .unwrap();
    }

    let count = LayoutVersionRepo::count_for_layout(&pool, layout.id).await.unwrap();
    assert_eq!(count, MAX_RETAINED_VERSIONS as i64);

    let newest_first = LayoutVersionRepo::list_for_layout(&pool, layout.id, None, 0)
        .await
        .unwrap();
    assert!(newest_first
        .windows(2)
        .all(|w| (w[0].created_at, w[0].id) > (w[1].created_at, w[1].id)));
    assert!(newest_first.iter().all(|v| v.reason != REASON_INITIAL_CREATE));
}
