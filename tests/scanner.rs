use jdepgraph::core::{AnalyzerError, JavaFileScanner};
use std::fs;
use std::path::Path;

fn touch<P: AsRef<Path>>(p: P) {
    fs::write(p, "// test").unwrap();
}

#[test]
fn scanner_selects_only_java_files() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("src/main")).unwrap();

    touch(root.join("src/main/App.java"));
    touch(root.join("src/main/Helper.java"));
    touch(root.join("src/main/notes.txt"));
    touch(root.join("pom.xml"));

    let files = JavaFileScanner::new().scan(root).unwrap();

    assert_eq!(files.len(), 2);
    assert!(files
        .iter()
        .all(|f| f.extension().unwrap().to_str() == Some("java")));
}

#[test]
fn stable_order_sorts_paths() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("b")).unwrap();
    fs::create_dir_all(root.join("a")).unwrap();

    touch(root.join("b/Beta.java"));
    touch(root.join("a/Alpha.java"));

    let files = JavaFileScanner::new()
        .with_stable_order(true)
        .scan(root)
        .unwrap();

    let mut sorted = files.clone();
    sorted.sort();
    assert_eq!(files, sorted);
}

#[test]
fn unreadable_root_surfaces_as_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let missing = dir.path().join("nope");

    let err = JavaFileScanner::new().scan(&missing).unwrap_err();
    assert!(matches!(err, AnalyzerError::RootUnreadable { .. }));
}

#[test]
fn root_that_is_a_file_surfaces_as_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let file = dir.path().join("App.java");
    touch(&file);

    let err = JavaFileScanner::new().scan(&file).unwrap_err();
    assert!(matches!(err, AnalyzerError::RootUnreadable { .. }));
}
