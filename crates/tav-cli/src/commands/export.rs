use std::path::{Path, PathBuf};

use tav_core::ExportFormat;
use tav_core::export::default_export_filename;

pub fn run(
    store: Option<&Path>,
    id: &str,
    format: ExportFormat,
    output: Option<&Path>,
) -> Result<(), String> {
    let store = super::open_store(store)?;
    let character = store.find(id).map_err(|e| e.to_string())?;
    let content = format.render(&character).map_err(|e| e.to_string())?;

    if output.is_some_and(|p| p.as_os_str() == "-") {
        print!("{content}");
        return Ok(());
    }

    let path = output.map_or_else(
        || PathBuf::from(default_export_filename(&character.name, format)),
        Path::to_path_buf,
    );
    std::fs::write(&path, &content)
        .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
    println!("  Exported to {}", path.display());

    Ok(())
}
