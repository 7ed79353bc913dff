use color_eyre::Result;
use comfy_table::{Cell, Table};
use movie_browse_catalog::Catalog;

use crate::commands::render;
use crate::output::Output;

pub async fn run_genres(output: &Output) -> Result<()> {
    let client = render::catalog_client()?;

    let sp = render::spinner("Loading genres...");
    let genres = client.genres().await;
    sp.finish_and_clear();
    let genres = genres.map_err(render::catalog_failure)?;

    if !output.is_human() {
        output.json(&serde_json::json!({ "genres": genres }));
        return Ok(());
    }

    output.heading("Genres");

    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("ID").add_attribute(comfy_table::Attribute::Bold),
        Cell::new("Name").add_attribute(comfy_table::Attribute::Bold),
    ]);
    for genre in &genres {
        table.add_row(vec![Cell::new(genre.id), Cell::new(&genre.name)]);
    }
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);

    output.println(table.to_string());
    Ok(())
}
