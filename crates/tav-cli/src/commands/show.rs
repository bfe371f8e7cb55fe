use std::path::Path;

pub fn run(store: Option<&Path>, id: &str) -> Result<(), String> {
    let store = super::open_store(store)?;
    let character = store.find(id).map_err(|e| e.to_string())?;
    super::print_sheet(&character);
    Ok(())
}
