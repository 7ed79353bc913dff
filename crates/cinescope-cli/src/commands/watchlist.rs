use color_eyre::Result;
use comfy_table::{Cell, Table};
use movie_browse_catalog::Catalog;
use movie_browse_config::PathManager;
use movie_browse_core::{AddOutcome, RemoveOutcome, WatchlistStore};
use movie_browse_models::WatchlistEntry;

use crate::commands::render;
use crate::output::Output;
use crate::WatchlistCommands;

pub async fn run_watchlist(cmd: WatchlistCommands, output: &Output) -> Result<()> {
    let paths = PathManager::default();
    let mut store = WatchlistStore::load(paths.watchlist_file());

    match cmd {
        WatchlistCommands::List => run_list(&store, output),
        WatchlistCommands::Add { id } => run_add(id, &mut store, output).await,
        WatchlistCommands::Remove { id } => run_remove(id, &mut store, output),
    }
}

fn run_list(store: &WatchlistStore, output: &Output) -> Result<()> {
    if !output.is_human() {
        output.json(&serde_json::json!({
            "count": store.len(),
            "entries": store.entries(),
        }));
        return Ok(());
    }

    output.heading(&format!("Watchlist ({})", store.len()));

    if store.is_empty() {
        output.info("Your watchlist is empty. Add movies with `cinescope watchlist add <id>`.");
        return Ok(());
    }

    output.println(entry_table(store.entries()).to_string());
    Ok(())
}

async fn run_add(id: u64, store: &mut WatchlistStore, output: &Output) -> Result<()> {
    // Title and poster are copied from the catalog at insertion time
    let client = render::catalog_client()?;
    let sp = render::spinner("Loading movie details...");
    let movie = client.movie_details(id).await;
    sp.finish_and_clear();
    let movie = movie.map_err(render::catalog_failure)?;

    // A confirmation fires for both outcomes; only an actual insertion
    // touches the persisted state.
    match store.add(WatchlistEntry::from(&movie)) {
        AddOutcome::Added => {
            output.success(format!("{} added to your watchlist", movie.title));
        }
        AddOutcome::AlreadyPresent => {
            output.success(format!("{} is already on your watchlist", movie.title));
        }
    }

    Ok(())
}

fn run_remove(id: u64, store: &mut WatchlistStore, output: &Output) -> Result<()> {
    let title = store
        .entries()
        .iter()
        .find(|e| e.id == id)
        .map(|e| e.title.clone());

    match store.remove(id) {
        RemoveOutcome::Removed => {
            let title = title.unwrap_or_else(|| format!("Movie {}", id));
            output.success(format!("{} removed from your watchlist", title));
        }
        RemoveOutcome::NotFound => {
            output.success(format!("Movie {} was not on your watchlist", id));
        }
    }

    Ok(())
}

fn entry_table(entries: &[WatchlistEntry]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("#").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("ID").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Title").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Poster").add_attribute(comfy_table::Attribute::Bold),
    ]);

    for (position, entry) in entries.iter().enumerate() {
        table.add_row(vec![
            Cell::new(position + 1),
            Cell::new(entry.id),
            Cell::new(&entry.title),
            Cell::new(entry.poster_path.as_deref().unwrap_or("-")),
        ]);
    }

    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table
}
