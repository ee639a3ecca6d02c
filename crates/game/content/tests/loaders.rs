use std::fs;

use compendium_content::{ContentFactory, SpeciesLoader, TablesLoader};
use compendium_core::{
    CatchAttempt, CatchTables, EncounterContext, TablesOracle, compute_catch_probability,
};

#[test]
fn bundled_content_loads_and_matches_standard_tables() {
    let factory = ContentFactory::new(ContentFactory::bundled_data_dir());
    let compendium = factory.load_all().unwrap();

    assert_eq!(compendium.tables, CatchTables::standard());
    assert!(compendium.species.find("Mewtwo").is_some());
}

#[test]
fn loaded_species_feeds_the_calculator() {
    let compendium = ContentFactory::new(ContentFactory::bundled_data_dir())
        .load_all()
        .unwrap();
    let rattata = compendium.species.find("rattata").unwrap();

    let encounter = EncounterContext::new().with_ball("Quick Ball");
    let attempt = CatchAttempt::new(rattata.target(), encounter);

    assert_eq!(compute_catch_probability(&attempt, &compendium.tables), 100.0);
}

#[test]
fn custom_data_dir_is_read() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(ContentFactory::TABLES_FILE),
        "[[balls]]\nname = \"Safari Ball\"\nmultiplier = 1.5\n\n[[statuses]]\nname = \"None\"\nmultiplier = 1.0\n",
    )
    .unwrap();
    fs::write(
        dir.path().join(ContentFactory::SPECIES_FILE),
        "(species: [(128, \"Tauros\", 45)])",
    )
    .unwrap();

    let compendium = ContentFactory::new(dir.path()).load_all().unwrap();

    assert_eq!(compendium.tables.ball_multiplier("Safari Ball"), Some(1.5));
    assert_eq!(compendium.tables.ball_multiplier("Poke Ball"), None);
    assert_eq!(compendium.species.by_number(128).unwrap().name, "Tauros");
}

#[test]
fn missing_file_error_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tables.toml");

    let err = TablesLoader::load(&path).unwrap_err();

    assert!(err.to_string().contains("tables.toml"));
}

#[test]
fn malformed_species_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("species.ron");
    fs::write(&path, "(species: [(1, \"Bulbasaur\")])").unwrap();

    let err = SpeciesLoader::load(&path).unwrap_err();

    assert!(err.to_string().contains("species.ron"));
}
