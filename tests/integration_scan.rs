// tests/integration_scan.rs
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use testid_guard_core::{Engine, GuardError, GuardExit, ScanConfig};

fn app() -> TempDir {
    tempfile::tempdir().unwrap()
}

fn write(root: &Path, rel: &str, body: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, body).unwrap();
}

fn scan(root: &Path) -> testid_guard_core::ScanReport {
    Engine::new(ScanConfig::new(root)).run().unwrap()
}

#[test]
fn touchable_without_id_is_one_violation() {
    let d = app();
    write(
        d.path(),
        "screens/Home.tsx",
        "export function Home() {\n  return (\n    <TouchableOpacity onPress={fn}>\n      <Text>Go</Text>\n",
    );
    let report = scan(d.path());
    assert_eq!(report.violation_count(), 1);
    assert_eq!(report.violations[0].line, 3);
    assert_eq!(report.violations[0].content, "<TouchableOpacity onPress={fn}>");
    assert_eq!(GuardExit::from(&report), GuardExit::ViolationsFound);
}

#[test]
fn touchable_with_id_is_clean() {
    let d = app();
    write(
        d.path(),
        "Home.tsx",
        "<TouchableOpacity testID=\"home.button\" onPress={fn}>\n",
    );
    let report = scan(d.path());
    assert!(report.is_clean());
    assert_eq!(report.files_scanned, 1);
    assert_eq!(GuardExit::from(&report).code(), 0);
}

#[test]
fn prop_spread_is_clean() {
    let d = app();
    write(d.path(), "Field.tsx", "<TextInput {...props} />\n");
    assert!(scan(d.path()).is_clean());
}

#[test]
fn missing_root_fails_without_scanning() {
    let d = app();
    let err = Engine::new(ScanConfig::new(d.path().join("app")))
        .run()
        .unwrap_err();
    assert!(matches!(err, GuardError::AppDirNotFound { .. }));
}

#[test]
fn node_modules_is_not_scanned_or_counted() {
    let d = app();
    write(d.path(), "node_modules/lib/Button.tsx", "<Button title=\"x\" />\n");
    write(d.path(), "Screen.tsx", "<View />\n");
    let report = scan(d.path());
    assert!(report.is_clean());
    assert_eq!(report.files_scanned, 1);
}

#[test]
fn identifier_split_across_lines_is_clean() {
    let d = app();
    write(
        d.path(),
        "Login.tsx",
        "<Pressable\n  onPress={submit}\n  style={styles.cta}\n  testID=\"login.submit-button\"\n>\n",
    );
    assert!(scan(d.path()).is_clean());
}

#[test]
fn non_ui_files_are_ignored() {
    let d = app();
    write(d.path(), "helpers.ts", "const b = '<Button />';\n");
    write(d.path(), "notes.md", "<Switch />\n");
    let report = scan(d.path());
    assert!(report.is_clean());
    assert_eq!(report.files_scanned, 0);
}

#[test]
fn repeated_scans_are_identical() {
    let d = app();
    write(d.path(), "a/One.tsx", "<Button />\n<Switch />\n");
    write(d.path(), "b/Two.jsx", "<TextInput\n/>\n");
    write(d.path(), "Three.tsx", "<CheckBox testID=\"x.y-checkbox\" />\n");

    let first = scan(d.path());
    let second = scan(d.path());
    assert_eq!(first, second);
    assert_eq!(first.violation_count(), 3);
    assert_eq!(first.files_scanned, 3);
}

#[test]
fn exit_code_tracks_violation_count() {
    let d = app();
    write(d.path(), "Ok.tsx", "<Switch testID=\"s.t-switch\" />\n");
    let clean = scan(d.path());
    assert_eq!(GuardExit::from(&clean).code() == 0, clean.violation_count() == 0);

    write(d.path(), "Bad.tsx", "<Switch value={on} />\n");
    let dirty = scan(d.path());
    assert_eq!(GuardExit::from(&dirty).code() == 0, dirty.violation_count() == 0);
    assert_eq!(dirty.violation_count(), 1);
}

#[cfg(unix)]
#[test]
fn symlinked_source_is_scanned_and_counted() {
    let d = app();
    let shared = tempfile::tempdir().unwrap();
    let target = shared.path().join("Real.tsx");
    fs::write(&target, "<Button title=\"x\" />\n").unwrap();
    std::os::unix::fs::symlink(&target, d.path().join("Linked.tsx")).unwrap();

    let report = scan(d.path());
    assert_eq!(report.files_scanned, 1);
    assert_eq!(report.violation_count(), 1);
}

#[test]
fn latin1_bytes_do_not_abort_the_run() {
    let d = app();
    fs::write(
        d.path().join("Menu.tsx"),
        b"<Text>caf\xe9</Text>\n<Button title=\"x\" />\n",
    )
    .unwrap();

    let report = scan(d.path());
    assert_eq!(report.violation_count(), 1);
    assert_eq!(report.violations[0].line, 2);
}
