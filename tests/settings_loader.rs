//! Integration tests for the settings loader, driven through the
//! public library API with tempfile-backed project directories.

use pretty_assertions::assert_eq;
use std::path::Path;

use docconf::config::{ConfigError, GlobalDefaults, ProjectSettings};
use docconf::env::Env;
use docconf::output::{SettingsRenderer, json::JsonRenderer};

fn project_dir(declaration: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("docconf.toml"), declaration).unwrap();
    dir
}

fn no_env() -> Env {
    Env::mock(Vec::<(&str, &str)>::new())
}

// ---------------------------------------------------------------------------
// loading
// ---------------------------------------------------------------------------

#[test]
fn full_declaration_loads_verbatim() {
    let dir = project_dir(
        r#"
project = "Python 研修"
author = "s.suzuka"
show_copyright = false
language = "ja"
exclude_patterns = ["_build"]
theme = "alabaster"
extensions = ["trimblank"]

[extension_options.trimblank]
keep_alnum_blank = ["html", "singlehtml"]
"#,
    );

    let settings =
        ProjectSettings::load_with_globals(dir.path(), &GlobalDefaults::default(), &no_env())
            .unwrap();

    assert_eq!(settings.project, "Python 研修");
    assert_eq!(settings.author, "s.suzuka");
    assert!(!settings.show_copyright);
    assert_eq!(settings.language, "ja");
    assert_eq!(settings.exclude_patterns, vec!["_build"]);
    assert_eq!(settings.theme, "alabaster");
    assert_eq!(settings.extensions, vec!["trimblank"]);
    assert!(settings.options_for("trimblank").is_some());
    assert!(settings.options_for("unknown").is_none());
}

#[test]
fn omitted_optionals_get_documented_defaults() {
    let dir = project_dir("project = \"Handbook\"\nauthor = \"Docs Team\"\n");

    let settings =
        ProjectSettings::load_with_globals(dir.path(), &GlobalDefaults::default(), &no_env())
            .unwrap();

    assert!(settings.show_copyright);
    assert_eq!(settings.language, "en");
    assert_eq!(settings.theme, "default");
    assert!(settings.exclude_patterns.is_empty());
    assert!(settings.extensions.is_empty());
    assert!(settings.extension_options.is_empty());
}

#[test]
fn reloading_is_idempotent() {
    let dir = project_dir("project = \"Handbook\"\nauthor = \"Docs Team\"\n");

    let first =
        ProjectSettings::load_with_globals(dir.path(), &GlobalDefaults::default(), &no_env())
            .unwrap();
    let second =
        ProjectSettings::load_with_globals(dir.path(), &GlobalDefaults::default(), &no_env())
            .unwrap();

    assert_eq!(first, second);
}

#[test]
fn missing_declaration_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ProjectSettings::load_with_globals(
        dir.path(),
        &GlobalDefaults::default(),
        &no_env(),
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::ReadFile { .. }));
    assert!(err.to_string().contains("docconf.toml"));
}

#[test]
fn missing_project_field_references_it_by_name() {
    let dir = project_dir("author = \"Docs Team\"\n");
    let err = ProjectSettings::load_with_globals(
        dir.path(),
        &GlobalDefaults::default(),
        &no_env(),
    )
    .unwrap_err();
    assert!(err.to_string().contains("`project`"), "got: {err}");
}

#[test]
fn wrong_field_shape_points_at_the_file() {
    let dir = project_dir("project = \"x\"\nauthor = \"y\"\nextensions = 42\n");
    let err = ProjectSettings::load_with_globals(
        dir.path(),
        &GlobalDefaults::default(),
        &no_env(),
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::ParseFile { .. }));
    assert!(err.to_string().contains("docconf.toml"));
}

// ---------------------------------------------------------------------------
// layering
// ---------------------------------------------------------------------------

#[test]
fn globals_fill_gaps_but_never_win() {
    let dir = project_dir(
        "project = \"Handbook\"\nauthor = \"Docs Team\"\nlanguage = \"ja\"\n",
    );
    let globals = GlobalDefaults {
        show_copyright: Some(false),
        language: Some("sv".to_string()),
        theme: Some("slate".to_string()),
    };

    let settings =
        ProjectSettings::load_with_globals(dir.path(), &globals, &no_env()).unwrap();

    assert_eq!(settings.language, "ja"); // project file wins
    assert_eq!(settings.theme, "slate"); // global fills the gap
    assert!(!settings.show_copyright);
}

#[test]
fn env_overrides_beat_everything() {
    let dir = project_dir(
        "project = \"Handbook\"\nauthor = \"Docs Team\"\ntheme = \"alabaster\"\n",
    );
    let globals = GlobalDefaults {
        show_copyright: None,
        language: None,
        theme: Some("slate".to_string()),
    };
    let env = Env::mock([
        ("DOCCONF_THEME", "plain"),
        ("DOCCONF_SHOW_COPYRIGHT", "off"),
    ]);

    let settings = ProjectSettings::load_with_globals(dir.path(), &globals, &env).unwrap();

    assert_eq!(settings.theme, "plain");
    assert!(!settings.show_copyright);
}

// ---------------------------------------------------------------------------
// renderer handoff
// ---------------------------------------------------------------------------

#[test]
fn json_output_matches_loaded_settings() {
    let dir = project_dir(
        r#"
project = "Handbook"
author = "Docs Team"
extensions = ["a", "b", "c"]
"#,
    );
    let settings =
        ProjectSettings::load_with_globals(dir.path(), &GlobalDefaults::default(), &no_env())
            .unwrap();

    let parsed: serde_json::Value =
        serde_json::from_str(&JsonRenderer.render(&settings)).unwrap();
    let extensions: Vec<&str> = parsed["extensions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(extensions, vec!["a", "b", "c"]); // activation order preserved
}

#[test]
fn load_file_works_outside_a_project_root() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("elsewhere.toml");
    std::fs::write(&path, "project = \"Handbook\"\nauthor = \"Docs Team\"\n").unwrap();

    let settings = ProjectSettings::load_file(Path::new(&path)).unwrap();
    assert_eq!(settings.project, "Handbook");
}
