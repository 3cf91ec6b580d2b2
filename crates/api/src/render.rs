//! Server-rendered HTML (and the XML sitemap) built with maud.
//!
//! All dynamic content is escaped by maud; only the XML prolog is emitted
//! pre-escaped.

use axum::http::StatusCode;
use axum::response::Html;
use lumen_core::creations::Creations;
use lumen_core::types::DbId;
use lumen_db::models::photo::{PhotoDetail, PhotoIndexEntry, PhotoSummary};
use maud::{html, Markup, PreEscaped, DOCTYPE};

/// Rendered width and height of each curated creation tile.
const CREATION_TILE_PX: u32 = 370;

pub fn into_html(markup: Markup) -> Html<String> {
    Html(markup.into_string())
}

// ---------------------------------------------------------------------------
// Shared pieces
// ---------------------------------------------------------------------------

fn layout(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " | Lumen" }
                link rel="stylesheet" href="/styles.css";
            }
            body {
                header.site-header {
                    a.brand href="/" { "Lumen" }
                    (search_form(None, false))
                }
                main { (body) }
            }
        }
    }
}

/// Search control; the hero variant is the large one on the landing page.
fn search_form(current: Option<&str>, hero: bool) -> Markup {
    html! {
        form.search.hero[hero] action="/search" method="get" role="search" {
            input type="search" name="q" value=[current]
                placeholder="Search AI generated photos" aria-label="Search";
            button type="submit" { "Search" }
        }
    }
}

fn photo_href(id: DbId) -> String {
    format!("/photo/{id}")
}

fn search_href(query: Option<&str>, page: i64) -> String {
    match query {
        Some(q) => format!("/search?q={}&page={page}", urlencoding::encode(q)),
        None => format!("/search?page={page}"),
    }
}

/// Human-readable byte size (`1.5 MB`).
pub fn format_bytes(size: i64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

    let mut value = size.max(0) as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{size} B")
    } else {
        format!("{value:.1} {}", UNITS[unit])
    }
}

// ---------------------------------------------------------------------------
// Landing page
// ---------------------------------------------------------------------------

/// Hero search section followed by the curated creations grid.
pub fn landing(creations: &Creations) -> Markup {
    let body = html! {
        section.hero {
            h1 {
                "Search Through " span.accent { "20M+" }
                br;
                "AI Generated Photos"
            }
            (search_form(None, true))
            img.hero-background src="/hero.jpg" alt="hero image";
        }
        section.creations {
            h1 { "The Beauty of AI-Generated Images" }
            p { "Here are Some Stunning AI Creations" }
            div.creation-grid {
                @for column in creations.columns() {
                    div.creation-column {
                        @for creation in column {
                            img.rounded src=(creation.src()) alt=(creation.alt)
                                width=(CREATION_TILE_PX) height=(CREATION_TILE_PX)
                                loading="lazy";
                        }
                    }
                }
            }
        }
    };

    layout("AI Generated Photos", body)
}

// ---------------------------------------------------------------------------
// Search results
// ---------------------------------------------------------------------------

/// Everything the results page needs.
#[derive(Debug)]
pub struct SearchResults<'a> {
    pub query: Option<&'a str>,
    pub photos: &'a [PhotoSummary],
    pub total: i64,
    /// 1-based page number.
    pub page: i64,
    pub page_size: i64,
}

impl SearchResults<'_> {
    pub fn total_pages(&self) -> i64 {
        if self.page_size <= 0 {
            return 0;
        }
        (self.total + self.page_size - 1) / self.page_size
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }
}

pub fn search_results(results: &SearchResults<'_>) -> Markup {
    let heading = match results.query {
        Some(q) => format!("{} results for \"{q}\"", results.total),
        None => "Popular AI generated photos".to_string(),
    };

    let body = html! {
        section.results {
            (search_form(results.query, false))
            h1 { (heading) }
            @if results.photos.is_empty() {
                p.empty { "No photos found. Try a different search." }
            } @else {
                div.photo-grid {
                    @for photo in results.photos {
                        a.photo-tile href=(photo_href(photo.id)) {
                            img src=(photo.thumbnail_image) alt=(photo.prompt)
                                width=(photo.width) height=(photo.height) loading="lazy";
                        }
                    }
                }
            }
            nav.pagination {
                @if results.has_previous() {
                    a rel="prev" href=(search_href(results.query, results.page - 1)) { "Previous" }
                }
                @if results.total_pages() > 0 {
                    span.page-status { "Page " (results.page) " of " (results.total_pages()) }
                }
                @if results.has_next() {
                    a rel="next" href=(search_href(results.query, results.page + 1)) { "Next" }
                }
            }
        }
    };

    let title = results.query.unwrap_or("Popular photos");
    layout(title, body)
}

// ---------------------------------------------------------------------------
// Photo detail
// ---------------------------------------------------------------------------

pub fn photo_detail(id: DbId, photo: &PhotoDetail) -> Markup {
    let body = html! {
        article.photo-detail {
            img src=(photo.display_image) alt=(photo.prompt)
                width=(photo.width) height=(photo.height);
            div.photo-meta {
                p.prompt { (photo.prompt) }
                dl {
                    dt { "Dimensions" }
                    dd { (photo.width) " × " (photo.height) }
                    dt { "Size" }
                    dd { (format_bytes(photo.size)) }
                    dt { "Downloads" }
                    dd.downloads { (photo.download) }
                }
                a.download href=(format!("{}/download", photo_href(id))) { "Download" }
            }
        }
    };

    layout(&photo.prompt, body)
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

pub fn error_page(status: StatusCode, message: &str) -> Html<String> {
    let heading = status.canonical_reason().unwrap_or("Error");
    let body = html! {
        section.error {
            h1 { (status.as_u16()) " " (heading) }
            p { (message) }
            a href="/" { "Back to the gallery" }
        }
    };

    into_html(layout(heading, body))
}

// ---------------------------------------------------------------------------
// Sitemap
// ---------------------------------------------------------------------------

/// Sitemap with the landing page followed by one entry per photo.
pub fn sitemap(base_url: &str, entries: &[PhotoIndexEntry]) -> String {
    let markup = html! {
        (PreEscaped(r#"<?xml version="1.0" encoding="UTF-8"?>"#))
        urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9" {
            url { loc { (base_url) "/" } }
            @for entry in entries {
                url { loc { (base_url) (photo_href(entry.id)) } }
            }
        }
    };
    markup.into_string()
}
