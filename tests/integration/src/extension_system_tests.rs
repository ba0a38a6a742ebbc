//! End-to-end extension system tests over a real on-disk project.
//!
//! Each test builds a throwaway prototype kit project with
//! [`TestProject`], installs extension packages the way npm would lay them
//! out, and drives the system through `OsStorage`.

use std::path::PathBuf;

use kit_extensions::{AppConfig, Error, Extensions, NoPreference};
use kit_fs::OsStorage;
use kit_test_utils::TestProject;
use pretty_assertions::assert_eq;

const GOVUK_MANIFEST: &str = r#"{
    "nunjucksPaths": ["/", "/components"],
    "scripts": ["/all.js"],
    "assets": ["/assets"],
    "sass": ["/all.scss"]
}"#;

fn kit(project: &TestProject) -> Extensions<OsStorage, NoPreference> {
    let mut extensions = Extensions::new(project.root(), OsStorage::new(), NoPreference);
    extensions.refresh().unwrap();
    extensions
}

#[test]
fn test_fresh_project_with_the_bundled_frontend() {
    let project = TestProject::new();
    project.install_extension("govuk-frontend", GOVUK_MANIFEST);
    let extensions = kit(&project);

    assert_eq!(extensions.resolution_order(), ["govuk-frontend"]);
    assert_eq!(
        extensions.file_system_paths("assets").unwrap(),
        [project.package_dir("govuk-frontend").join("assets")]
    );
    assert_eq!(extensions.public_urls("assets").unwrap(), ["/assets"]);
    assert_eq!(
        extensions.public_urls("sass").unwrap(),
        ["/extension-assets/govuk-frontend/all.scss"]
    );
    assert_eq!(
        extensions.app_config().unwrap(),
        AppConfig {
            scripts: vec!["/extension-assets/govuk-frontend/all.js".to_string()],
            stylesheets: vec![],
        }
    );
}

#[test]
fn test_installing_a_second_extension_changes_aggregates_after_refresh() {
    let project = TestProject::new();
    project.install_extension("govuk-frontend", GOVUK_MANIFEST);
    let mut extensions = kit(&project);

    project.install_extension(
        "hmcts-frontend",
        r#"{"nunjucksPaths": ["/my-components", "/my-layouts"], "scripts": ["/hmcts.js"]}"#,
    );

    // Not visible until the next refresh.
    assert_eq!(extensions.resolution_order(), ["govuk-frontend"]);

    extensions.refresh().unwrap();
    assert_eq!(
        extensions.resolution_order(),
        ["govuk-frontend", "hmcts-frontend"]
    );
    assert_eq!(
        extensions.public_urls("scripts").unwrap(),
        [
            "/extension-assets/govuk-frontend/all.js",
            "/extension-assets/hmcts-frontend/hmcts.js",
        ]
    );
    assert_eq!(
        extensions.app_views(&[]).unwrap(),
        [
            project.package_dir("hmcts-frontend").join("my-layouts"),
            project.package_dir("hmcts-frontend").join("my-components"),
            project.package_dir("govuk-frontend").join("components"),
            project.package_dir("govuk-frontend"),
        ]
    );
}

#[test]
fn test_uninstalling_everything_empties_the_aggregates() {
    let project = TestProject::new();
    project.install_extension("govuk-frontend", GOVUK_MANIFEST);
    let mut extensions = kit(&project);

    project.uninstall("govuk-frontend");
    extensions.refresh().unwrap();

    assert!(extensions.registry().is_empty());
    assert_eq!(extensions.public_urls("assets").unwrap(), Vec::<String>::new());
    assert_eq!(
        extensions.app_views(&[PathBuf::from("/app/views")]).unwrap(),
        [PathBuf::from("/app/views")]
    );
}

#[test]
fn test_plain_packages_are_not_extensions() {
    let project = TestProject::new();
    project.install_extension("govuk-frontend", GOVUK_MANIFEST);
    project.install_package("express");
    let extensions = kit(&project);

    assert_eq!(extensions.registry().names(), ["govuk-frontend"]);
    assert_eq!(extensions.registry().non_extensions(), ["express"]);
}

#[test]
fn test_base_preference_reorders_without_reinstalling() {
    let project = TestProject::new();
    project.install_extension("govuk-frontend", GOVUK_MANIFEST);
    project.install_extension("alpha-theme", r#"{"stylesheets": ["/theme.css"]}"#);

    let mut extensions = Extensions::new(
        project.root(),
        OsStorage::new(),
        Some(vec!["alpha-theme".to_string(), "govuk-frontend".to_string()]),
    );
    extensions.refresh().unwrap();

    assert_eq!(
        extensions.resolution_order(),
        ["alpha-theme", "govuk-frontend"]
    );
}

#[test]
fn test_corrupt_manifest_fails_refresh_and_keeps_the_old_snapshot() {
    let project = TestProject::new();
    project.install_extension("govuk-frontend", GOVUK_MANIFEST);
    let mut extensions = kit(&project);

    project.write_raw_manifest("govuk-frontend", "{ definitely not json");
    let error = extensions.refresh().unwrap_err();
    assert!(matches!(error, Error::ManifestParse { .. }));

    // Queries still answer from the last good snapshot.
    assert_eq!(extensions.public_urls("assets").unwrap(), ["/assets"]);

    project.write_raw_manifest("govuk-frontend", GOVUK_MANIFEST);
    extensions.refresh().unwrap();
    assert_eq!(extensions.public_urls("assets").unwrap(), ["/assets"]);
}

#[test]
fn test_invalid_declared_path_surfaces_at_query_time_with_the_kit_message() {
    let project = TestProject::new();
    project.install_extension("offender", r#"{"assets": ["\\abc"]}"#);
    let extensions = kit(&project);

    let error = extensions.public_urls("assets").unwrap_err();
    assert_eq!(
        error.to_string(),
        "Can't use backslashes in extension paths - \"offender\" used \"\\abc\"."
    );
}

#[test]
fn test_file_system_paths_point_at_real_directories() {
    let project = TestProject::new();
    project.install_extension("govuk-frontend", GOVUK_MANIFEST);
    std::fs::create_dir_all(project.package_dir("govuk-frontend").join("assets")).unwrap();

    let extensions = kit(&project);
    let paths = extensions.file_system_paths("assets").unwrap();
    assert!(paths[0].is_dir());
}
