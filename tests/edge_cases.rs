//! Edge case and error handling tests for smarttree


use harness::{TestTree, run_smarttree, smarttree};
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::{PermissionsExt, symlink};

// ============================================================================
// Symlink Edge Cases
// ============================================================================

#[test]
fn test_symlink_to_directory_is_followed() {
    let tree = TestTree::new();
    tree.add_file("realdir/file.rs", "");
    symlink(tree.path().join("realdir"), tree.path().join("linkdir"))
        .expect("Failed to create dir symlink");

    let (stdout, _stderr, success) = run_smarttree(tree.path(), &[]);
    assert!(success);
    assert_eq!(
        stdout,
        ".\n    ├── linkdir # files: 1 rs\n    └── realdir # files: 1 rs\n"
    );
}

#[test]
fn test_symlink_to_parent_is_bounded_by_depth() {
    let tree = TestTree::new();
    tree.add_file("subdir/file.rs", "");
    symlink("..", tree.path().join("subdir").join("parent"))
        .expect("Failed to create parent symlink");

    let (stdout, _stderr, success) = run_smarttree(tree.path(), &["-d", "4"]);
    assert!(success, "smarttree should not hang on parent symlink");
    assert!(stdout.contains("subdir # files: 1 rs"));
    assert!(stdout.contains("parent"));
    // one line per level: subdir, parent, subdir, parent
    assert_eq!(stdout.lines().count(), 5, "{}", stdout);
}

#[test]
fn test_self_referential_symlink_is_ignored() {
    let tree = TestTree::new();
    tree.add_file("real.rs", "");
    symlink("loop", tree.path().join("loop")).expect("Failed to create symlink");

    let (stdout, _stderr, success) = run_smarttree(tree.path(), &[]);
    assert!(success);
    assert_eq!(stdout, ". # files: 1 rs\n");
}

#[test]
fn test_broken_symlink_is_ignored() {
    let tree = TestTree::new();
    tree.add_file("real.rs", "");
    symlink("nonexistent.rs", tree.path().join("broken_link.rs"))
        .expect("Failed to create broken symlink");

    let (stdout, _stderr, success) = run_smarttree(tree.path(), &[]);
    assert!(success);
    assert_eq!(stdout, ". # files: 1 rs\n");
}

// ============================================================================
// Permission Error Handling
// ============================================================================

#[test]
fn test_unreadable_directory() {
    let tree = TestTree::new();
    tree.add_file("readable/file.rs", "");
    tree.add_file("unreadable/hidden.rs", "");

    let unreadable = tree.path().join("unreadable");
    fs::set_permissions(&unreadable, fs::Permissions::from_mode(0o000))
        .expect("Failed to set permissions");
    let privileged = fs::read_dir(&unreadable).is_ok();

    let (stdout, _stderr, success) = run_smarttree(tree.path(), &[]);

    // Restore permissions for cleanup
    fs::set_permissions(&unreadable, fs::Permissions::from_mode(0o755))
        .expect("Failed to restore permissions");

    assert!(success, "an unreadable directory must not abort the walk");
    assert!(stdout.contains("readable # files: 1 rs"));
    if !privileged {
        assert!(
            stdout.contains("unreadable  [Permission Denied]"),
            "{}",
            stdout
        );
        assert!(!stdout.contains("hidden.rs"));
    }
}

// ============================================================================
// Root Path Handling
// ============================================================================

#[test]
fn test_file_as_root() {
    let tree = TestTree::new();
    tree.add_file("main.rs", "");

    smarttree()
        .arg("main.rs")
        .current_dir(tree.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("is not a directory"));
}

#[test]
fn test_stop_directory_as_root() {
    let tree = TestTree::new();
    tree.add_file("node_modules/pkg/index.js", "");

    smarttree()
        .arg("node_modules")
        .current_dir(tree.path())
        .assert()
        .success()
        .stdout("node_modules  [📦 Node.js Modules]\n");
}

#[test]
fn test_stop_directory_as_root_with_all() {
    let tree = TestTree::new();
    tree.add_file("node_modules/pkg/index.js", "");

    smarttree()
        .args(["node_modules", "-a"])
        .current_dir(tree.path())
        .assert()
        .success()
        .stdout("node_modules\n    └── pkg # files: 1 js\n");
}

// ============================================================================
// Naming Edge Cases
// ============================================================================

#[test]
fn test_names_with_spaces_and_unicode() {
    let tree = TestTree::new();
    tree.add_file("my docs/notes.txt", "");
    tree.add_file("données/résumé.PDF", "");

    let (stdout, _stderr, success) = run_smarttree(tree.path(), &[]);
    assert!(success);
    assert!(stdout.contains("├── données # files: 1 pdf"), "{}", stdout);
    assert!(stdout.contains("└── my docs # files: 1 txt"), "{}", stdout);
}

#[test]
fn test_case_insensitive_sibling_order() {
    let tree = TestTree::new();
    for name in ["beta", "Alpha", "gamma", "Delta"] {
        tree.add_dir(name);
    }

    let (stdout, _stderr, _) = run_smarttree(tree.path(), &[]);
    let names: Vec<&str> = stdout
        .lines()
        .skip(1)
        .map(|l| l.trim_start_matches(|c: char| !c.is_alphabetic()))
        .map(|l| l.split(' ').next().unwrap())
        .collect();
    assert_eq!(names, vec!["Alpha", "beta", "Delta", "gamma"]);
}

#[test]
fn test_many_extensions_truncated() {
    let tree = TestTree::new();
    for name in ["a.rs", "b.rs", "c.rs", "d.py", "e.py", "f.md", "g.toml", "h.json", "i.yaml"] {
        tree.add_file(name, "");
    }

    let (stdout, _stderr, _) = run_smarttree(tree.path(), &[]);
    assert_eq!(stdout, ". # files: 3 rs, 2 py, 1 md, 1 toml, ...\n");
}

#[test]
fn test_extensionless_files() {
    let tree = TestTree::new();
    for name in ["LICENSE", "CHANGELOG", "Jenkinsfile", "run."] {
        tree.add_file(name, "");
    }

    let (stdout, _stderr, _) = run_smarttree(tree.path(), &[]);
    assert_eq!(stdout, ". # files: 3 no-ext, 1 Jenkinsfile\n");
}

// ============================================================================
// Argument Validation
// ============================================================================

#[test]
fn test_negative_depth_rejected() {
    let tree = TestTree::new();

    smarttree()
        .args(["--depth", "-1"])
        .current_dir(tree.path())
        .assert()
        .failure();
}

#[test]
fn test_invalid_color_rejected() {
    let tree = TestTree::new();

    smarttree()
        .args(["--color", "sometimes"])
        .current_dir(tree.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("sometimes"));
}
