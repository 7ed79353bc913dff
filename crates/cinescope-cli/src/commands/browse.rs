use color_eyre::eyre::eyre;
use color_eyre::Result;
use movie_browse_catalog::{BrowseQuery, Catalog};
use movie_browse_core::{clamp_page, floor_page, QueryGuard};
use movie_browse_models::{Genre, MovieSummary, Page};
use std::io::IsTerminal;

use crate::commands::{prompts, render};
use crate::output::Output;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PageAction {
    Next,
    Prev,
    Goto(u32),
    Quit,
}

pub async fn run_browse(
    genre: Option<String>,
    query: Option<String>,
    page: Option<u32>,
    output: &Output,
) -> Result<()> {
    let client = render::catalog_client()?;

    let sp = render::spinner("Loading genres...");
    let genres = client.genres().await;
    sp.finish_and_clear();
    let genres = genres.map_err(render::catalog_failure)?;

    let genre_filter = match &genre {
        Some(raw) => Some(resolve_genre(raw, &genres).ok_or_else(|| {
            eyre!(
                "Unknown genre {:?}. Run `cinescope genres` to list the available genres.",
                raw
            )
        })?),
        None => None,
    };

    let base_query = BrowseQuery::new(1)
        .with_genre(genre_filter.map(|g| g.id))
        .with_text(query);

    // With an explicit --page (or non-terminal output) the view is one-shot;
    // otherwise keep paging until the user quits.
    let interactive = page.is_none()
        && output.is_human()
        && !output.is_quiet()
        && std::io::stdin().is_terminal()
        && std::io::stdout().is_terminal();

    let guard = QueryGuard::new();
    let mut current_page = floor_page(page.unwrap_or(1));

    loop {
        let generation = guard.issue();
        let sp = render::spinner("Loading movies...");
        let result = client.browse(&base_query.clone().with_page(current_page)).await;
        sp.finish_and_clear();
        let listing = result.map_err(render::catalog_failure)?;

        if !guard.is_current(generation) {
            // A newer request for this query was issued while this response
            // was in flight; discard it and fetch again.
            continue;
        }

        let clamped = clamp_page(current_page, listing.total_pages);
        if clamped != current_page {
            tracing::debug!("Requested page {} out of range, clamped to {}", current_page, clamped);
            current_page = clamped;
            continue;
        }

        render_listing(output, genre_filter, &base_query, &listing);

        if !interactive {
            break;
        }

        match prompt_page_action(current_page, listing.total_pages)? {
            PageAction::Next => current_page = clamp_page(current_page + 1, listing.total_pages),
            PageAction::Prev => {
                current_page = clamp_page(current_page.saturating_sub(1), listing.total_pages)
            }
            PageAction::Goto(n) => current_page = clamp_page(n, listing.total_pages),
            PageAction::Quit => break,
        }
    }

    Ok(())
}

fn resolve_genre<'a>(raw: &str, genres: &'a [Genre]) -> Option<&'a Genre> {
    if let Ok(id) = raw.parse::<u64>() {
        return genres.iter().find(|g| g.id == id);
    }
    genres.iter().find(|g| g.name.eq_ignore_ascii_case(raw))
}

fn render_listing(
    output: &Output,
    genre_filter: Option<&Genre>,
    query: &BrowseQuery,
    listing: &Page<MovieSummary>,
) {
    if !output.is_human() {
        output.json(&serde_json::json!({
            "page": listing.page,
            "total_pages": listing.total_pages,
            "results": listing.results,
        }));
        return;
    }

    let theme = output.theme();

    let mut title = String::from("Explore Movies");
    if let Some(text) = &query.text {
        title.push_str(&format!(" - search {:?}", text));
    } else if let Some(genre) = genre_filter {
        title.push_str(&format!(" - {}", genre.name));
    }
    output.heading(&title);

    if listing.results.is_empty() {
        output.info("No movies matched.");
    } else {
        output.println(render::movie_table(&listing.results).to_string());
    }
    output.println(theme.accent(&format!("Page {} / {}", listing.page, listing.total_pages.max(1))));
}

fn prompt_page_action(current_page: u32, total_pages: u32) -> Result<PageAction> {
    let answer = prompts::prompt_string(
        &format!("Page {}/{} - [n]ext, [p]rev, page number, [q]uit", current_page, total_pages),
        Some("n"),
    )?;

    Ok(parse_page_action(&answer).unwrap_or(PageAction::Quit))
}

fn parse_page_action(input: &str) -> Option<PageAction> {
    let input = input.trim();
    match input {
        "" | "n" | "next" => Some(PageAction::Next),
        "p" | "prev" => Some(PageAction::Prev),
        "q" | "quit" => Some(PageAction::Quit),
        other => other.parse::<u32>().ok().map(PageAction::Goto),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genres() -> Vec<Genre> {
        vec![
            Genre { id: 28, name: "Action".to_string() },
            Genre { id: 35, name: "Comedy".to_string() },
        ]
    }

    #[test]
    fn test_resolve_genre_by_id_and_name() {
        let genres = genres();
        assert_eq!(resolve_genre("28", &genres).unwrap().name, "Action");
        assert_eq!(resolve_genre("comedy", &genres).unwrap().id, 35);
        assert!(resolve_genre("Horror", &genres).is_none());
        assert!(resolve_genre("999", &genres).is_none());
    }

    #[test]
    fn test_parse_page_action() {
        assert_eq!(parse_page_action(""), Some(PageAction::Next));
        assert_eq!(parse_page_action("n"), Some(PageAction::Next));
        assert_eq!(parse_page_action("prev"), Some(PageAction::Prev));
        assert_eq!(parse_page_action("7"), Some(PageAction::Goto(7)));
        assert_eq!(parse_page_action(" q "), Some(PageAction::Quit));
        assert_eq!(parse_page_action("nope"), None);
    }
}
