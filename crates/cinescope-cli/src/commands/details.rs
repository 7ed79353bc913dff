use color_eyre::Result;
use movie_browse_catalog::Catalog;
use movie_browse_models::select_trailer;

use crate::commands::render;
use crate::output::Output;

const SIMILAR_COUNT: usize = 8;

pub async fn run_details(id: u64, output: &Output) -> Result<()> {
    let client = render::catalog_client()?;
    let theme = output.theme();

    let sp = render::spinner("Loading movie details...");
    let (movie, videos, similar) = tokio::join!(
        client.movie_details(id),
        client.movie_videos(id),
        client.similar(id),
    );
    sp.finish_and_clear();

    // The detail record is the view; trailer and similar listings degrade to
    // absence when their requests fail.
    let movie = movie.map_err(render::catalog_failure)?;
    let videos = videos.unwrap_or_else(|e| {
        tracing::warn!("Failed to fetch videos for movie {}: {}", id, e);
        Vec::new()
    });
    let similar = similar
        .map(|page| page.results)
        .unwrap_or_else(|e| {
            tracing::warn!("Failed to fetch similar movies for {}: {}", id, e);
            Vec::new()
        });

    let trailer = select_trailer(&videos);

    if !output.is_human() {
        output.json(&serde_json::json!({
            "movie": movie,
            "trailer": trailer.map(|t| t.youtube_url()),
            "similar": similar,
        }));
        return Ok(());
    }

    let title = match movie.release_year() {
        Some(year) => format!("{} ({})", movie.title, year),
        None => movie.title.clone(),
    };
    output.heading(&title);

    if !movie.overview.is_empty() {
        output.println(&movie.overview);
    }
    output.println(theme.accent(&format!("Rating: {:.1}", movie.vote_average)));
    if let Some(date) = &movie.release_date {
        output.println(format!("Release: {}", date));
    }
    if !movie.genres.is_empty() {
        output.println(format!("Genres: {}", movie.genre_names()));
    }
    if let Some(poster) = &movie.poster_path {
        output.println(theme.dim(&client.poster_url(poster)));
    }

    match trailer {
        Some(trailer) => {
            output.heading("Trailer");
            output.println(theme.accent(&trailer.youtube_url()));
        }
        None => output.println(theme.dim("No trailer available.")),
    }

    if !similar.is_empty() {
        output.heading("Similar Movies");
        let top: Vec<_> = similar.iter().take(SIMILAR_COUNT).cloned().collect();
        output.println(render::movie_table(&top).to_string());
    }

    Ok(())
}
