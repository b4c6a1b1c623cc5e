use indent_types::core::scanner::FileScanner;
use std::fs;
use std::path::{Path, PathBuf};

fn touch<P: AsRef<Path>>(p: P) {
    fs::write(p, "/* test */").unwrap();
}

fn names(files: &[indent_types::core::SourceFile], root: &Path) -> Vec<String> {
    files
        .iter()
        .map(|f| {
            f.path
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

#[test]
fn scanner_walks_directories_in_name_order() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("b")).unwrap();
    fs::create_dir_all(root.join("a")).unwrap();

    touch(root.join("b/util.c"));
    touch(root.join("a/cpu.h"));
    touch(root.join("a/cpu.c"));
    touch(root.join("a/notes.txt")); // ignored
    touch(root.join("main.py")); // ignored

    let files = FileScanner::new().collect(&[root.to_path_buf()]).unwrap();

    assert_eq!(names(&files, root), vec!["a/cpu.c", "a/cpu.h", "b/util.c"]);
}

#[test]
fn explicit_files_keep_argument_order_and_ignore_extension() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path();
    touch(root.join("z.h"));
    touch(root.join("a.inc"));

    let files = FileScanner::new()
        .collect(&[root.join("z.h"), root.join("a.inc")])
        .unwrap();

    assert_eq!(names(&files, root), vec!["z.h", "a.inc"]);
}

#[test]
fn custom_extensions_replace_defaults() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path();
    touch(root.join("a.c"));
    touch(root.join("b.hpp"));

    let files = FileScanner::with_extensions(&[".hpp"])
        .collect(&[root.to_path_buf()])
        .unwrap();

    assert_eq!(names(&files, root), vec!["b.hpp"]);
}

#[test]
fn missing_path_is_an_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let missing: PathBuf = dir.path().join("nope.h");

    let err = FileScanner::new().collect(&[missing]).unwrap_err();
    assert!(err.to_string().contains("nope.h"));
}

#[test]
fn no_paths_means_no_files() {
    assert!(FileScanner::new().collect(&[]).unwrap().is_empty());
}

#[cfg(unix)]
#[test]
fn existing_non_regular_files_are_accepted() {
    let dev_null = PathBuf::from("/dev/null");

    let files = FileScanner::new().collect(&[dev_null.clone()]).unwrap();

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].path, dev_null);
}

#[cfg(unix)]
#[test]
fn symlinked_headers_inside_a_tree_are_scanned() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("real")).unwrap();
    fs::create_dir_all(root.join("tree")).unwrap();
    fs::write(root.join("real/a.h"), "typedef int A;").unwrap();
    std::os::unix::fs::symlink(root.join("real/a.h"), root.join("tree/link.h")).unwrap();

    let tree = root.join("tree");
    let files = FileScanner::new().collect(&[tree.clone()]).unwrap();

    assert_eq!(names(&files, &tree), vec!["link.h"]);
}

#[test]
fn walk_errors_are_skipped_not_fatal() {
    let dir = tempfile::TempDir::new().unwrap();
    let missing = dir.path().join("gone");

    let files = FileScanner::new()
        .with_verbose(true)
        .scan_directory(&missing)
        .unwrap();

    assert!(files.is_empty());
}
