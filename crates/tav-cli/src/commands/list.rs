use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(store: Option<&Path>) -> Result<(), String> {
    let store = super::open_store(store)?;
    let characters = store.list().map_err(|e| e.to_string())?;

    if characters.is_empty() {
        println!("  No characters saved yet.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["ID", "Name", "Race", "Class", "Created"]);

    for c in &characters {
        table.add_row(vec![
            c.id.to_string(),
            c.name.clone(),
            c.race.clone(),
            format!("{} ({})", c.character_class, c.subclass),
            c.created_at.format("%Y-%m-%d %H:%M").to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} character{}",
        characters.len(),
        if characters.len() == 1 { "" } else { "s" }
    );

    Ok(())
}
