//! Edge-case tests exercising the library surface directly


use std::collections::BTreeSet;
use std::path::PathBuf;

use harness::TestTree;
use pantry::{
    checksum, checksum_of_file, dir_size, dir_size_parallel, file_size, list_all_files, walk_tree,
};

#[test]
fn test_size_invariant_over_generated_tree() {
    // totalSize(root) == sum(size(f) for f in listAllFiles(root))
    let tree = TestTree::new();
    let mut expected = 0u64;
    for depth in 0..4 {
        for i in 0..5 {
            let size = depth * 1000 + i * 37;
            let rel: String = (0..depth)
                .map(|d| format!("level{}/", d))
                .collect::<String>()
                + &format!("file{}.bin", i);
            tree.add_file_of_size(&rel, size);
            expected += size as u64;
        }
    }

    let listed: u64 = list_all_files(tree.path(), None)
        .unwrap()
        .iter()
        .map(|f| file_size(f).unwrap())
        .sum();

    assert_eq!(dir_size(tree.path()).unwrap(), expected);
    assert_eq!(dir_size(tree.path()).unwrap(), listed);
    assert_eq!(dir_size_parallel(tree.path()).unwrap(), expected);
}

#[test]
fn test_deeply_nested_single_file() {
    let tree = TestTree::new();
    let rel = "a/".repeat(50) + "leaf.txt";
    tree.add_file(&rel, "deep");

    let files = list_all_files(tree.path(), None).unwrap();
    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("leaf.txt"));
    assert_eq!(dir_size(tree.path()).unwrap(), 4);
}

#[test]
fn test_many_siblings() {
    let tree = TestTree::new();
    for i in 0..200 {
        tree.add_file(&format!("f{:03}.txt", i), "x");
    }

    let files = list_all_files(tree.path(), None).unwrap();
    assert_eq!(files.len(), 200);
    assert_eq!(dir_size(tree.path()).unwrap(), 200);
}

#[test]
fn test_unicode_file_names() {
    let tree = TestTree::new();
    tree.add_file("übung/日本語.txt", "こんにちは");
    tree.add_file("émoji 🦀.rs", "crab");

    let files = list_all_files(tree.path(), None).unwrap();
    assert_eq!(files.len(), 2);
}

#[test]
fn test_walk_yields_files_before_failure_point() {
    // Files yielded before an error remain valid; the error itself arrives
    // in sequence, not as a panic
    let tree = TestTree::new();
    tree.add_file("ok.txt", "fine");

    let results: Vec<_> = walk_tree(tree.path()).collect();
    assert!(results.iter().all(|r| r.is_ok()));
}

#[test]
fn test_walk_can_be_abandoned_early() {
    let tree = TestTree::new();
    for i in 0..20 {
        tree.add_file(&format!("sub/f{}.txt", i), "x");
    }

    let mut walk = walk_tree(tree.path());
    let first = walk.next();
    assert!(first.is_some());
    drop(walk); // open directory handles released here

    // The tree is still fully readable afterwards
    assert_eq!(list_all_files(tree.path(), None).unwrap().len(), 20);
}

#[cfg(unix)]
#[test]
fn test_non_regular_entries_excluded_everywhere() {
    let tree = TestTree::new();
    let target = tree.add_file("real.txt", "content");
    tree.add_symlink("file-link.txt", &target);
    let subdir = tree.add_dir("realdir");
    tree.add_file("realdir/inner.txt", "inner");
    tree.add_symlink("dir-link", &subdir);
    tree.add_symlink("broken-link", &tree.path().join("nope"));

    let files = list_all_files(tree.path(), None).unwrap();
    let names: BTreeSet<_> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(
        names,
        ["real.txt", "inner.txt"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        "symlinks excluded without error"
    );

    // Size must agree: the linked content is counted once, via the real path
    assert_eq!(dir_size(tree.path()).unwrap(), 12);
}

#[test]
fn test_rerun_set_equality_on_unchanged_tree() {
    let tree = TestTree::new();
    tree.add_file("a/1.txt", "1");
    tree.add_file("a/b/2.txt", "2");
    tree.add_file("3.txt", "3");

    let runs: Vec<BTreeSet<PathBuf>> = (0..3)
        .map(|_| list_all_files(tree.path(), None).unwrap().into_iter().collect())
        .collect();
    assert_eq!(runs[0], runs[1]);
    assert_eq!(runs[1], runs[2]);
}

#[test]
fn test_checksum_of_file_agrees_with_in_memory_for_large_input() {
    let tree = TestTree::new();
    let content = "0123456789".repeat(10_000); // crosses many read chunks
    let path = tree.add_file("large.txt", &content);

    assert_eq!(checksum_of_file(&path).unwrap(), checksum(&content));
}

#[test]
fn test_strip_prefix_applies_to_each_listed_path() {
    let tree = TestTree::new();
    tree.add_file("pkg/src/a.txt", "a");
    tree.add_file("pkg/src/sub/b.txt", "b");

    let root = tree.path().join("pkg");
    let prefix = root.to_string_lossy().to_string();
    let files: BTreeSet<_> = list_all_files(&root, Some(&prefix))
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(
        files,
        [PathBuf::from("src/a.txt"), PathBuf::from("src/sub/b.txt")]
            .into_iter()
            .collect()
    );
}
