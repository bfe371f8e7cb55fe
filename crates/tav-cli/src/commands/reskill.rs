use std::path::Path;

use tav_mechanics::GenerationConfig;

pub fn run(store: Option<&Path>, id: &str, skills: &[String]) -> Result<(), String> {
    let store = super::open_store(store)?;
    let character = store.find(id).map_err(|e| e.to_string())?;

    let updated = tav_mechanics::with_new_skills(&character, skills, &GenerationConfig::default())
        .map_err(|e| e.to_string())?;

    super::print_sheet(&updated);
    super::save(&store, &updated)
}
