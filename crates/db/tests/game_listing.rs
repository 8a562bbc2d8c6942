//! Integration tests for paginated game-catalog listings.
//!
//! Covers page clamping, remainder pages, case-insensitive title search and
//! the natural ordering of search results.

use mediashelf_core::pagination::Page;
use mediashelf_core::search::SearchTerm;
use mediashelf_db::models::game::{CreateGame, CreateGameSystem, GameSummary};
use mediashelf_db::repositories::{
    DeveloperRepo, GameGenreRepo, GameRepo, GameSeriesRepo, GameSystemRepo,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Create one genre and one system, returning their ids.
async fn seed_categories(pool: &PgPool) -> (i64, i64) {
    let genre = GameGenreRepo::create(pool, "Platformer").await.unwrap();
    let system = GameSystemRepo::create(
        pool,
        &CreateGameSystem {
            name: "NES".to_string(),
            manufacturer: Some("Nintendo".to_string()),
        },
    )
    .await
    .unwrap();
    (genre.id, system.id)
}

fn new_game(title: &str, genre_id: i64, system_id: i64) -> CreateGame {
    CreateGame {
        title: title.to_string(),
        genre_id,
        system_id,
        developer_id: None,
        series_id: None,
        copies: 1,
        release_year: None,
    }
}

/// Insert games titled "A" through "Z" in reverse order so that title order
/// and id order differ.
async fn seed_alphabet(pool: &PgPool) {
    let (genre_id, system_id) = seed_categories(pool).await;
    for letter in ('A'..='Z').rev() {
        GameRepo::create(pool, &new_game(&letter.to_string(), genre_id, system_id))
            .await
            .unwrap();
    }
}

fn titles(page: &Page<GameSummary>) -> Vec<String> {
    page.items.iter().map(|g| g.title.clone()).collect()
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn first_page_holds_a_through_y(pool: PgPool) {
    seed_alphabet(&pool).await;

    let page = GameRepo::list_page(&pool, None, Some("1")).await.unwrap();

    let expected: Vec<String> = ('A'..='Y').map(|c| c.to_string()).collect();
    assert_eq!(titles(&page), expected);
    assert_eq!(page.count, 26);
    assert_eq!(page.num_pages, 2);
    assert!(page.has_next);
    assert!(!page.has_previous);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn second_page_holds_the_remainder(pool: PgPool) {
    seed_alphabet(&pool).await;

    let page = GameRepo::list_page(&pool, None, Some("2")).await.unwrap();

    assert_eq!(titles(&page), vec!["Z".to_string()]);
    assert_eq!(page.number, 2);
    assert!(!page.has_next);
    assert!(page.has_previous);
    assert_eq!(page.start_index, 26);
    assert_eq!(page.end_index, 26);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn bad_page_numbers_are_clamped(pool: PgPool) {
    seed_alphabet(&pool).await;

    for raw in [None, Some("0"), Some("-3"), Some("abc"), Some("")] {
        let page = GameRepo::list_page(&pool, None, raw).await.unwrap();
        assert_eq!(page.number, 1, "raw page {raw:?} should resolve to 1");
        assert_eq!(page.items.len(), 25);
    }

    let page = GameRepo::list_page(&pool, None, Some("99")).await.unwrap();
    assert_eq!(page.number, 2);
    assert_eq!(titles(&page), vec!["Z".to_string()]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_catalog_has_one_empty_page(pool: PgPool) {
    let page = GameRepo::list_page(&pool, None, Some("5")).await.unwrap();

    assert!(page.items.is_empty());
    assert_eq!(page.number, 1);
    assert_eq!(page.num_pages, 1);
    assert_eq!(page.count, 0);
    assert!(!page.has_next);
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_is_case_insensitive_substring(pool: PgPool) {
    let (genre_id, system_id) = seed_categories(&pool).await;
    for title in ["Super Mario Bros.", "Zelda", "Dr. MARIO"] {
        GameRepo::create(&pool, &new_game(title, genre_id, system_id))
            .await
            .unwrap();
    }

    let term = SearchTerm::parse(Some("mario")).unwrap();
    let page = GameRepo::list_page(&pool, Some(&term), None).await.unwrap();

    // Natural (insertion) order, not title order.
    assert_eq!(
        titles(&page),
        vec!["Super Mario Bros.".to_string(), "Dr. MARIO".to_string()]
    );
    assert_eq!(page.count, 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_wildcards_are_literal(pool: PgPool) {
    let (genre_id, system_id) = seed_categories(&pool).await;
    for title in ["100% Orange Juice", "1000 Islands"] {
        GameRepo::create(&pool, &new_game(title, genre_id, system_id))
            .await
            .unwrap();
    }

    let term = SearchTerm::parse(Some("100%")).unwrap();
    let page = GameRepo::list_page(&pool, Some(&term), None).await.unwrap();

    assert_eq!(titles(&page), vec!["100% Orange Juice".to_string()]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn name_listings_search_and_order(pool: PgPool) {
    for name in ["Konami", "Capcom", "Nintendo EAD", "Nintendo R&D1"] {
        DeveloperRepo::create(&pool, name).await.unwrap();
    }

    let all = DeveloperRepo::list_page(&pool, None, None).await.unwrap();
    let names: Vec<&str> = all.items.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Capcom", "Konami", "Nintendo EAD", "Nintendo R&D1"]);

    let term = SearchTerm::parse(Some("  nintendo ")).unwrap();
    let found = DeveloperRepo::list_page(&pool, Some(&term), None).await.unwrap();
    assert_eq!(found.count, 2);
}

// ---------------------------------------------------------------------------
// Lookups and totals
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn summary_resolves_related_names(pool: PgPool) {
    let (genre_id, system_id) = seed_categories(&pool).await;
    let developer = DeveloperRepo::create(&pool, "Nintendo EAD").await.unwrap();
    let series = GameSeriesRepo::create(&pool, "Super Mario").await.unwrap();

    let game = GameRepo::create(
        &pool,
        &CreateGame {
            developer_id: Some(developer.id),
            series_id: Some(series.id),
            copies: 2,
            release_year: Some(1985),
            ..new_game("Super Mario Bros.", genre_id, system_id)
        },
    )
    .await
    .unwrap();

    let summary = GameRepo::find_summary(&pool, game.id).await.unwrap().unwrap();
    assert_eq!(summary.genre_name, "Platformer");
    assert_eq!(summary.system_name, "NES");
    assert_eq!(summary.developer_name.as_deref(), Some("Nintendo EAD"));
    assert_eq!(summary.series_name.as_deref(), Some("Super Mario"));
    assert_eq!(summary.copies, 2);

    assert!(GameRepo::find_summary(&pool, game.id + 1000).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn total_copies_sums_or_zero(pool: PgPool) {
    assert_eq!(GameRepo::total_copies(&pool).await.unwrap(), 0);

    let (genre_id, system_id) = seed_categories(&pool).await;
    for copies in [1, 3, 2] {
        GameRepo::create(
            &pool,
            &CreateGame {
                copies,
                ..new_game("Tetris", genre_id, system_id)
            },
        )
        .await
        .unwrap();
    }

    assert_eq!(GameRepo::total_copies(&pool).await.unwrap(), 6);
    assert_eq!(GameRepo::count(&pool).await.unwrap(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn copies_below_one_violate_check(pool: PgPool) {
    let (genre_id, system_id) = seed_categories(&pool).await;
    let result = GameRepo::create(
        &pool,
        &CreateGame {
            copies: 0,
            ..new_game("Tetris", genre_id, system_id)
        },
    )
    .await;

    assert!(result.is_err());
    assert_eq!(GameRepo::count(&pool).await.unwrap(), 0);
}
