use color_eyre::eyre::eyre;
use color_eyre::Result;
use movie_browse_catalog::{Catalog, TrendingWindow};

use crate::commands::render;
use crate::output::Output;

const NOW_PLAYING_COUNT: usize = 8;

/// The home view renders its sections independently: a failed section shows
/// the generic failure message while the rest still render. Only a view
/// with nothing left to show fails the command.
pub async fn run_home(output: &Output) -> Result<()> {
    let client = render::catalog_client()?;
    let theme = output.theme();

    let sp = render::spinner("Loading home view...");
    let (featured, now_playing, trending_week) = tokio::join!(
        client.trending(TrendingWindow::Day),
        client.now_playing(),
        client.trending(TrendingWindow::Week),
    );
    sp.finish_and_clear();

    if featured.is_err() && now_playing.is_err() && trending_week.is_err() {
        if let Err(e) = featured {
            tracing::error!("Catalog request failed: {}", e);
        }
        return Err(eyre!("{}", render::FAILED_TO_LOAD));
    }

    if !output.is_human() {
        let featured = featured.ok();
        let now_playing = now_playing.ok();
        let trending_week = trending_week.ok();
        output.json(&serde_json::json!({
            "featured": featured.as_ref().and_then(|page| page.results.first()),
            "now_playing": now_playing.as_ref().map(|page| {
                &page.results[..page.results.len().min(NOW_PLAYING_COUNT)]
            }),
            "trending_week": trending_week.as_ref().map(|page| &page.results),
        }));
        return Ok(());
    }

    match featured {
        Ok(page) => {
            if let Some(movie) = page.results.first() {
                output.heading(&format!("Featured Today: {}", movie.title));
                output.println(render::truncate_overview(&movie.overview, 150));
                output.println(theme.accent(&format!("Rating: {:.1}", movie.vote_average)));
                if let Some(backdrop) = &movie.backdrop_path {
                    output.println(theme.dim(&client.backdrop_url(backdrop)));
                }
                output.println(theme.dim(&format!(
                    "See `cinescope details {}` for the full record",
                    movie.id
                )));
            }
        }
        Err(e) => {
            tracing::error!("Featured movie request failed: {}", e);
            output.error(render::FAILED_TO_LOAD);
        }
    }

    output.heading("Now Playing");
    match now_playing {
        Ok(page) => {
            let playing: Vec<_> = page.results.into_iter().take(NOW_PLAYING_COUNT).collect();
            output.println(render::movie_table(&playing).to_string());
        }
        Err(e) => {
            tracing::error!("Now-playing request failed: {}", e);
            output.error(render::FAILED_TO_LOAD);
        }
    }

    output.heading("Trending This Week");
    match trending_week {
        Ok(page) => {
            output.println(render::movie_table(&page.results).to_string());
        }
        Err(e) => {
            tracing::error!("Trending request failed: {}", e);
            output.error(render::FAILED_TO_LOAD);
        }
    }

    Ok(())
}
