#[allow(dead_code)]
mod common;

use common::TestServer;

#[tokio::test]
async fn home_lists_featured_games() {
    let server = TestServer::new().await;
    let (status, body) = server.get_text("/").await;
    assert_eq!(status, 200);
    assert!(body.contains("Featured Games"));
    assert_eq!(body.matches("class=\"game-card\"").count(), 3);
    assert!(body.contains("href=\"/games?category=puzzle\""));
}

#[tokio::test]
async fn listing_shows_first_page_of_twelve() {
    let server = TestServer::with_games(14).await;
    let (status, body) = server.get_text("/games").await;
    assert_eq!(status, 200);
    assert!(body.contains("14 games found"));
    assert_eq!(body.matches("class=\"game-card\"").count(), 12);
    assert!(body.contains(r#"<span class="page-prev disabled">Prev</span>"#));
    assert!(body.contains(r#"<a class="page-next" href="/games?page=2">Next</a>"#));
}

#[tokio::test]
async fn listing_second_page_has_remainder() {
    let server = TestServer::with_games(14).await;
    let (status, body) = server.get_text("/games?page=2").await;
    assert_eq!(status, 200);
    assert_eq!(body.matches("class=\"game-card\"").count(), 2);
    assert!(body.contains("Game 13"));
    assert!(body.contains("Game 14"));
    assert!(body.contains(r#"<span class="page-next disabled">Next</span>"#));
    assert!(body.contains(r#"<span class="page-link current">2</span>"#));
}

#[tokio::test]
async fn out_of_range_page_is_ignored() {
    let server = TestServer::with_games(14).await;
    let (_, body) = server.get_text("/games?page=9").await;
    assert!(body.contains(r#"<span class="page-link current">1</span>"#));
    let (_, body) = server.get_text("/games?page=abc").await;
    assert_eq!(body.matches("class=\"game-card\"").count(), 12);
}

#[tokio::test]
async fn single_page_catalog() {
    let server = TestServer::with_games(8).await;
    let (_, body) = server.get_text("/games").await;
    assert_eq!(body.matches("class=\"game-card\"").count(), 8);
    assert!(body.contains(r#"<span class="page-prev disabled">Prev</span>"#));
    assert!(body.contains(r#"<span class="page-next disabled">Next</span>"#));
}

#[tokio::test]
async fn category_filter_marks_active_button() {
    let server = TestServer::new().await;
    let (status, body) = server.get_text("/games?category=action").await;
    assert_eq!(status, 200);
    assert!(body.contains("Find the Vampire"));
    assert!(body.contains("Apple Shooter"));
    assert!(!body.contains("Bloxd.io"));
    assert!(body.contains(r#"class="filter-btn active" data-category="action""#));
}

#[tokio::test]
async fn search_is_case_insensitive() {
    let server = TestServer::new().await;
    let (_, body) = server.get_text("/games?q=VAMPIRE").await;
    assert!(body.contains("1 game found"));
    assert!(body.contains("Find the Vampire"));
}

#[tokio::test]
async fn search_without_matches_shows_empty_state() {
    let server = TestServer::new().await;
    let (status, body) = server.get_text("/games?q=zzzz").await;
    assert_eq!(status, 200);
    assert!(body.contains("No games found. Try a different search or category."));
    assert!(!body.contains("class=\"pagination\""));
}

#[tokio::test]
async fn play_page_embeds_game() {
    let server = TestServer::new().await;
    let (status, body) = server.get_text("/play?id=2").await;
    assert_eq!(status, 200);
    assert!(body.contains("id=\"game-iframe\""));
    assert!(body.contains("https://games.crazygames.com/en_US/find-the-vampire/index.html"));
    assert!(body.contains("Category: Action Games"));
}

#[tokio::test]
async fn play_unknown_id_is_not_found() {
    let server = TestServer::new().await;
    let (status, body) = server.get_text("/play?id=999").await;
    assert_eq!(status, 404);
    assert!(body.contains("Game not found."));
}

#[tokio::test]
async fn play_without_id_is_bad_request() {
    let server = TestServer::new().await;
    let (status, body) = server.get_text("/play").await;
    assert_eq!(status, 400);
    assert!(body.contains("No game ID specified."));
}

#[tokio::test]
async fn detail_page_shows_record() {
    let server = TestServer::new().await;
    let (status, body) = server.get_text("/detail?id=5").await;
    assert_eq!(status, 200);
    assert!(body.contains("id=\"game-detail\""));
    assert!(body.contains("Apple Shooter"));
    assert!(body.contains("href=\"/play?id=5\""));
}

#[tokio::test]
async fn failed_catalog_load_shows_error() {
    let server = TestServer::with_source("/does/not/exist/games.json").await;
    let (status, body) = server.get_text("/games").await;
    assert_eq!(status, 503);
    assert!(body.contains("Failed to load games. Please reload the page."));

    let (status, body) = server.get_text("/detail?id=2").await;
    assert_eq!(status, 503);
    assert!(body.contains("Failed to load game information."));
}

#[tokio::test]
async fn stylesheet_is_served() {
    let server = TestServer::new().await;
    let resp = reqwest::get(server.url("/assets/site.css")).await.unwrap();
    assert_eq!(resp.status(), 200);
    let content_type = resp.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/css"));
    assert_eq!(resp.headers()["x-content-type-options"], "nosniff");
}

#[tokio::test]
async fn unknown_static_path_is_404() {
    let server = TestServer::new().await;
    let (status, _) = server.get_text("/no-such-file.png").await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn repeated_parameter_renders_error_page() {
    let server = TestServer::new().await;
    let (status, body) = server.get_text("/games?page=1&page=2").await;
    assert_eq!(status, 400);
    assert!(body.contains("Invalid request parameters."));
    assert!(body.contains("<title>Error - Game Hub</title>"));

    let (status, body) = server.get_text("/play?id=1&id=2").await;
    assert_eq!(status, 400);
    assert!(body.contains("Back to Games"));
}
