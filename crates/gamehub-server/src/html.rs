//! HTML rendering for the site pages.
//!
//! Every value that reaches the markup goes through [`escape`]; link targets
//! are already percent-encoded by `gamehub_core::card`.

use gamehub_core::card::{CardView, PLACEHOLDER_IMAGE, category_label, detail_href, play_href};
use gamehub_core::controller::{ListingBody, ListingView, ViewState};
use gamehub_core::paginate::PageControls;
use gamehub_core::{CategorySet, GameRecord};

/// Escape text for use in element content and double- or single-quoted
/// attributes.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap page content in the shared layout.
pub fn layout(site_name: &str, title: &str, body: &str) -> String {
    let site = escape(site_name);
    let page_title = if title.is_empty() {
        site.clone()
    } else {
        format!("{} - {site}", escape(title))
    };
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{page_title}</title>
<link rel="stylesheet" href="/assets/site.css">
</head>
<body>
<header class="site-header">
<a class="logo" href="/">{site}</a>
<nav><a href="/">Home</a> <a href="/games">Games</a></nav>
</header>
<main>
{body}
</main>
<footer class="site-footer">&copy; {site}</footer>
</body>
</html>
"#
    )
}

/// Thumbnail that swaps itself for the placeholder if it fails to load.
fn image_tag(src: &str, alt: &str, class: &str) -> String {
    format!(
        r#"<img src="{}" alt="{}" class="{class}" loading="lazy" onerror="this.onerror=null;this.src='{}'">"#,
        escape(src),
        escape(alt),
        escape(PLACEHOLDER_IMAGE),
    )
}

pub fn card(card: &CardView) -> String {
    format!(
        r#"<div class="game-card">
{}
<div class="game-card-content">
<h3>{}</h3>
<span class="category-tag">{}</span>
<p>{}</p>
<a href="{}" class="btn">Play Now</a>
<a href="{}" class="btn btn-secondary">Details</a>
</div>
</div>
"#,
        image_tag(&card.image, &card.title, "game-card-image"),
        escape(&card.title),
        escape(&card.category_label),
        escape(&card.description),
        escape(&card.play_href),
        escape(&card.detail_href),
    )
}

fn search_form(state: &ViewState) -> String {
    let category = if state.category.is_all() {
        String::new()
    } else {
        format!(
            r#"<input type="hidden" name="category" value="{}">"#,
            escape(state.category.as_str())
        )
    };
    format!(
        r#"<form class="search" method="get" action="/games">
{category}<input id="search-input" type="search" name="q" value="{}" placeholder="Search games...">
<button type="submit" class="btn">Search</button>
</form>
"#,
        escape(&state.search_term)
    )
}

fn pagination(state: &ViewState, controls: &PageControls) -> String {
    let mut out = String::from("<nav class=\"pagination\">\n");
    match controls.prev {
        Some(p) => {
            out.push_str(&format!(
                "<a class=\"page-prev\" href=\"{}\">Prev</a>\n",
                escape(&state.href_for_page(p))
            ));
        },
        None => out.push_str("<span class=\"page-prev disabled\">Prev</span>\n"),
    }
    for &p in &controls.pages {
        if p == controls.current {
            out.push_str(&format!("<span class=\"page-link current\">{p}</span>\n"));
        } else {
            out.push_str(&format!(
                "<a class=\"page-link\" href=\"{}\">{p}</a>\n",
                escape(&state.href_for_page(p))
            ));
        }
    }
    match controls.next {
        Some(p) => {
            out.push_str(&format!(
                "<a class=\"page-next\" href=\"{}\">Next</a>\n",
                escape(&state.href_for_page(p))
            ));
        },
        None => out.push_str("<span class=\"page-next disabled\">Next</span>\n"),
    }
    out.push_str("</nav>\n");
    out
}

/// The browsing page body.
pub fn listing(view: &ListingView) -> String {
    let mut out = String::from("<h1>All Games</h1>\n");
    out.push_str(&search_form(&view.state));

    out.push_str("<div class=\"filters\">\n");
    for button in &view.categories {
        let class = if button.active {
            "filter-btn active"
        } else {
            "filter-btn"
        };
        out.push_str(&format!(
            "<a class=\"{class}\" data-category=\"{}\" href=\"{}\">{}</a>\n",
            escape(&button.id),
            escape(&button.href),
            escape(&button.name)
        ));
    }
    out.push_str("</div>\n");

    match &view.body {
        ListingBody::Results { cards, pagination: controls } => {
            out.push_str(&format!(
                "<p class=\"result-count\">{} game{} found</p>\n",
                view.total_matches,
                if view.total_matches == 1 { "" } else { "s" }
            ));
            out.push_str("<div id=\"games-container\" class=\"games-grid\">\n");
            for c in cards {
                out.push_str(&card(c));
            }
            out.push_str("</div>\n");
            out.push_str(&pagination(&view.state, controls));
        },
        ListingBody::NoResults => {
            out.push_str(
                "<div id=\"no-results\" class=\"no-results\">No games found. Try a different search or category.</div>\n",
            );
        },
    }
    out
}

/// Home page body with the featured games.
pub fn home(featured: &[CardView], categories: &CategorySet) -> String {
    let mut out = String::from(
        "<section class=\"hero\">\n<h1>Play free games in your browser</h1>\n<a href=\"/games\" class=\"btn\">Browse all games</a>\n</section>\n",
    );
    out.push_str("<h2>Featured Games</h2>\n<div id=\"featured-games-container\" class=\"games-grid\">\n");
    for c in featured {
        out.push_str(&card(c));
    }
    out.push_str("</div>\n");

    if !categories.is_empty() {
        out.push_str("<h2>Categories</h2>\n<div class=\"category-links\">\n");
        for tag in categories.iter() {
            let state = ViewState {
                category: gamehub_core::CategoryFilter::Tag(tag.id.clone()),
                ..ViewState::default()
            };
            out.push_str(&format!(
                "<a class=\"filter-btn\" href=\"{}\">{}</a>\n",
                escape(&state.href()),
                escape(&tag.name)
            ));
        }
        out.push_str("</div>\n");
    }
    out
}

/// Play page body: game info plus the sandboxed frame.
pub fn play(game: &GameRecord, categories: &CategorySet) -> String {
    let width = game.width.unwrap_or(960);
    let height = game.height.unwrap_or(600);
    format!(
        r#"<section class="play">
<h1 id="game-title">{}</h1>
<div class="game-frame">
<iframe id="game-iframe" src="{}" width="{width}" height="{height}" sandbox="allow-scripts allow-same-origin allow-pointer-lock" allow="fullscreen; autoplay" referrerpolicy="no-referrer" title="{}"></iframe>
</div>
<p id="game-category">Category: {}</p>
<p id="game-description">{}</p>
<a href="{}" class="btn btn-secondary">Details</a>
<a href="/games" class="btn btn-secondary">Back to Games</a>
</section>
"#,
        escape(&game.title),
        escape(&game.url),
        escape(&game.title),
        escape(category_label(game, categories)),
        escape(&game.description),
        escape(&detail_href(game.id.as_str())),
    )
}

/// Detail page body.
pub fn detail(game: &GameRecord, categories: &CategorySet) -> String {
    let image = game.image.as_deref().unwrap_or(PLACEHOLDER_IMAGE);
    let category_names: Vec<String> = game
        .categories
        .iter()
        .map(|c| escape(categories.display_name(c)))
        .collect();
    let category_line = if category_names.is_empty() {
        escape(gamehub_core::card::DEFAULT_CATEGORY_LABEL)
    } else {
        category_names.join(", ")
    };

    let mut out = format!(
        r#"<section id="game-detail" class="game-detail">
<h1>{}</h1>
{}
<p>{}</p>
<p><strong>Categories:</strong> {category_line}</p>
"#,
        escape(&game.title),
        image_tag(image, &game.title, "game-detail__image"),
        escape(&game.description),
    );
    if !game.tags.is_empty() {
        let tags: Vec<String> = game.tags.iter().map(|t| escape(t)).collect();
        out.push_str(&format!("<p><strong>Tags:</strong> {}</p>\n", tags.join(", ")));
    }
    out.push_str(&format!(
        "<a href=\"{}\" class=\"btn\">Play Now</a>\n<a href=\"/\" class=\"btn btn-secondary\">Back to Home</a>\n</section>\n",
        escape(&play_href(game.id.as_str()))
    ));
    out
}

/// Error or status message with a link back to the listing.
pub fn message(heading: &str, text: &str, back_href: &str, back_label: &str) -> String {
    format!(
        r#"<section class="message">
<h1>{}</h1>
<p>{}</p>
<a href="{}" class="btn">{}</a>
</section>
"#,
        escape(heading),
        escape(text),
        escape(back_href),
        escape(back_label),
    )
}

/// Shown while the catalog is still loading; the page refreshes itself.
pub fn loading() -> String {
    String::from(
        "<meta http-equiv=\"refresh\" content=\"2\">\n<div class=\"loading\">Loading games...</div>\n",
    )
}
