use super::*;

#[test]
fn empty_file_gives_defaults() {
    assert_eq!(ArenaConfig::from_toml_str("").unwrap(), ArenaConfig::default());
}

#[test]
fn partial_sections_keep_other_defaults() {
    let config = ArenaConfig::from_toml_str(
        r#"
        [rules]
        win_threshold = 6

        [search]
        beam_width = 4

        [search.weights]
        mobility = 5

        [matches]
        num_games = 4
        "#,
    )
    .unwrap();

    assert_eq!(config.rules.win_threshold, 6);
    assert_eq!(config.search.beam_width, 4);
    assert_eq!(config.search.max_depth, SearchConfig::default().max_depth);
    assert_eq!(config.search.weights.mobility, 5);
    assert_eq!(config.matches.num_games, 4);
    assert_eq!(config.matches.max_plies, MatchConfig::default().max_plies);
}

#[test]
fn bad_values_are_reported() {
    let err = ArenaConfig::from_toml_str("[rules]\nwin_threshold = \"five\"").unwrap_err();
    assert!(matches!(err, ArenaError::Config(_)));
}

#[test]
fn missing_file_names_the_path() {
    let err = ArenaConfig::load(Path::new("/nonexistent/arena.toml")).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/arena.toml"));
}

#[test]
fn sample_config_parses() {
    let sample = include_str!("../../../config/arena.toml");
    let config = ArenaConfig::from_toml_str(sample).unwrap();
    assert_eq!(config.rules.win_threshold, 5);
}
