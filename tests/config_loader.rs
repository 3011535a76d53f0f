mod common;

use claritynews::config::{Config, ConfigError};
use claritynews::edition::FontSize;
use claritynews::store::EditionStore;

use common::temp_file;

const SEED_JSON: &str = r#"[
    {
        "id": "a",
        "headline": "Bridge reopens",
        "summary": "Repairs finished early.",
        "whyMatters": "Shorter commutes.",
        "whatsNew": "Opened a week ahead of schedule.",
        "source": "Local Desk",
        "timestamp": "1h ago",
        "readTime": "30s"
    },
    {
        "id": "b",
        "headline": "Library extends hours",
        "summary": "Weekend opening added.",
        "whyMatters": "More study space.",
        "whatsNew": "Sunday hours start next month.",
        "source": "City Hall",
        "timestamp": "2h ago",
        "readTime": "45s"
    }
]"#;

#[test]
fn default_values() {
    let config = Config::default();
    assert_eq!(config.clarity.font_size, FontSize::Medium);
    assert!(!config.clarity.high_contrast);
    assert!(config.schedule.morning_edition);
    assert!(config.schedule.critical_updates);
    assert!(config.seed.path.is_none());
    assert_eq!(config.logging.level, "info");
}

#[test]
fn config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("claritynews/config.toml"));
}

#[test]
fn missing_file_yields_defaults() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn empty_file_yields_defaults() {
    let (_dir, path) = temp_file("config.toml", "");
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn partial_sections_merge_with_defaults() {
    let (_dir, path) = temp_file(
        "config.toml",
        r#"[clarity]
font_size = "large"
reducedMotion = true

[schedule]
midday_edition = false

[logging]
level = "debug"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.clarity.font_size, FontSize::Large);
    assert!(config.clarity.reduced_motion);
    assert!(!config.clarity.calm_mode);
    assert!(!config.schedule.midday_edition);
    assert!(config.schedule.evening_edition);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn invalid_toml_is_parse_error() {
    let (_dir, path) = temp_file("config.toml", "[clarity\nfont_size = ");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn unknown_font_size_is_parse_error() {
    let (_dir, path) = temp_file("config.toml", "[clarity]\nfont_size = \"huge\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn bad_log_level_fails_validation() {
    let (_dir, path) = temp_file("config.toml", "[logging]\nlevel = \"loud\"\n");
    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("loud"));
        }
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

#[test]
fn builtin_seed_without_seed_path() {
    let stories = Config::default().load_stories().unwrap();
    assert_eq!(stories.len(), 6);
}

#[test]
fn relative_seed_path_resolves_next_to_config() {
    let (dir, path) = temp_file("config.toml", "[seed]\npath = \"edition.json\"\n");
    std::fs::write(dir.path().join("edition.json"), SEED_JSON).unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.seed.path.as_deref(), Some(dir.path().join("edition.json").as_path()));

    let stories = config.load_stories().unwrap();
    assert_eq!(stories.len(), 2);
    assert_eq!(stories[0].headline, "Bridge reopens");
    assert!(stories.iter().all(|s| !s.is_read && !s.is_saved));

    let store = EditionStore::from_config(&config, stories);
    assert_eq!(store.snapshot().stories.len(), 2);
}

#[test]
fn missing_seed_file_is_read_error() {
    let (_dir, path) = temp_file("config.toml", "[seed]\npath = \"nowhere.json\"\n");
    let config = Config::load_from(&path).unwrap();
    assert!(matches!(
        config.load_stories(),
        Err(ConfigError::SeedReadError { .. })
    ));
}

#[test]
fn malformed_seed_is_parse_error() {
    let (dir, path) = temp_file("config.toml", "[seed]\npath = \"edition.json\"\n");
    std::fs::write(dir.path().join("edition.json"), "[{\"id\": 1}]").unwrap();
    let config = Config::load_from(&path).unwrap();
    assert!(matches!(
        config.load_stories(),
        Err(ConfigError::SeedParseError { .. })
    ));
}

#[test]
fn empty_or_duplicate_seed_fails_validation() {
    let (dir, path) = temp_file("config.toml", "[seed]\npath = \"edition.json\"\n");
    let config = Config::load_from(&path).unwrap();

    std::fs::write(dir.path().join("edition.json"), "[]").unwrap();
    assert!(matches!(
        config.load_stories(),
        Err(ConfigError::ValidationError { .. })
    ));

    let duplicated = SEED_JSON.replace("\"id\": \"b\"", "\"id\": \"a\"");
    std::fs::write(dir.path().join("edition.json"), duplicated).unwrap();
    match config.load_stories() {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("Duplicate story id 'a'"));
        }
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}
