use std::path::Path;

use tav_mechanics::GenerationConfig;

pub fn run(
    store: Option<&Path>,
    name: &str,
    seed: Option<u64>,
    budget: i64,
    save: bool,
) -> Result<(), String> {
    let config = GenerationConfig::default().with_budget(budget);
    let mut rng = super::make_rng(seed);

    let character =
        tav_mechanics::random_character(name, &config, &mut rng).map_err(|e| e.to_string())?;

    super::print_sheet(&character);

    if save {
        let store = super::open_store(store)?;
        super::save(&store, &character)?;
    }

    Ok(())
}
