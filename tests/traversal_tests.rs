//! Traversal and extraction properties over real temp directories.

use repo_dump::analyze::analyze_repo;
use repo_dump::domain::{Config, LogConfig, LogLevel, README_NOT_FOUND};
use repo_dump::render::render_document;
use repo_dump::scan::{extract_contents, walk, ContentExtractor, IgnoreList, TreeWalker};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct TestRepo {
    temp: TempDir,
}

impl TestRepo {
    /// `a.txt`, `b.png`, `sub/c.txt`, plus an ignore file next to the repo.
    fn new(ignore: &str) -> Self {
        let temp = TempDir::new().expect("temp dir");
        let root = temp.path().join("repo");
        fs::create_dir_all(root.join("sub")).expect("mkdir sub");
        fs::write(root.join("a.txt"), "hi").expect("write a");
        fs::write(root.join("b.png"), [0x89, 0x50, 0x4E, 0x47, 0x0D]).expect("write b");
        fs::write(root.join("sub/c.txt"), "yo").expect("write c");
        fs::write(temp.path().join("ignore.txt"), ignore).expect("write ignore");
        Self { temp }
    }

    fn root(&self) -> PathBuf {
        self.temp.path().join("repo")
    }

    fn ignore_file(&self) -> PathBuf {
        self.temp.path().join("ignore.txt")
    }
}

fn rel(parts: &[&str]) -> String {
    parts.iter().collect::<PathBuf>().to_string_lossy().into_owned()
}

fn quiet_config(ignore_file: &Path) -> Config {
    Config {
        ignore_file: ignore_file.to_path_buf(),
        show_progress: false,
        log: LogConfig { level: LogLevel::Error, color: false },
        ..Config::default()
    }
}

#[test]
fn ignored_subtree_and_binary_file_example() {
    let repo = TestRepo::new("sub\n");

    let walked: BTreeSet<String> = walk(repo.root(), &repo.ignore_file()).expect("walk").collect();
    assert_eq!(walked, BTreeSet::from(["a.txt".to_string(), "b.png".to_string()]));

    let extracted: BTreeMap<String, String> = extract_contents(repo.root(), &repo.ignore_file())
        .expect("extract")
        .map(|file| (file.relative_path, file.content))
        .collect();
    assert_eq!(extracted, BTreeMap::from([("a.txt".to_string(), "hi".to_string())]));
}

#[test]
fn walks_are_idempotent_and_restartable() {
    let repo = TestRepo::new("");
    let first: BTreeSet<String> = walk(repo.root(), &repo.ignore_file()).expect("walk").collect();
    let second: BTreeSet<String> = walk(repo.root(), &repo.ignore_file()).expect("walk").collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 4);
}

#[test]
fn ignore_file_is_reread_on_each_walk() {
    let repo = TestRepo::new("");
    let before: BTreeSet<String> = walk(repo.root(), &repo.ignore_file()).expect("walk").collect();
    assert!(before.contains("a.txt"));

    fs::write(repo.ignore_file(), "a.txt\n").expect("rewrite ignore");
    let after: BTreeSet<String> = walk(repo.root(), &repo.ignore_file()).expect("walk").collect();
    assert!(!after.contains("a.txt"));
}

#[test]
fn extracted_paths_were_walked_and_binaries_only_listed() {
    let repo = TestRepo::new("");
    let walked: BTreeSet<String> = walk(repo.root(), &repo.ignore_file()).expect("walk").collect();
    let extracted: Vec<String> = extract_contents(repo.root(), &repo.ignore_file())
        .expect("extract")
        .map(|file| file.relative_path)
        .collect();

    assert!(extracted.iter().all(|path| walked.contains(path)));
    assert!(walked.contains("b.png"));
    assert!(!extracted.iter().any(|path| path == "b.png"));
    assert!(extracted.contains(&rel(&["sub", "c.txt"])));
}

#[test]
fn no_emitted_path_equals_or_descends_from_an_ignore_entry() {
    let temp = TempDir::new().expect("temp dir");
    let root = temp.path();
    fs::create_dir_all(root.join("keep/drop/deep")).expect("mkdir");
    fs::create_dir_all(root.join("drop")).expect("mkdir");
    fs::write(root.join("keep/drop/deep/x.rs"), "x").expect("write");
    fs::write(root.join("keep/y.rs"), "y").expect("write");
    fs::write(root.join("drop/z.rs"), "z").expect("write");

    let ignored = rel(&["keep", "drop"]);
    let list = IgnoreList::from_entries([ignored.as_str(), "drop"]);
    let walked: BTreeSet<String> = TreeWalker::with_ignore_list(root, list.clone()).collect();

    for entry in [ignored.as_str(), "drop"] {
        assert!(!walked.contains(entry));
        let prefix = format!("{entry}{}", std::path::MAIN_SEPARATOR);
        assert!(walked.iter().all(|path| !path.starts_with(&prefix)));
    }
    assert!(walked.contains(&rel(&["keep", "y.rs"])));

    let extracted = ContentExtractor::with_ignore_list(root, list).count();
    assert_eq!(extracted, 1);
}

#[test]
fn directory_removed_before_expansion_is_skipped_and_siblings_continue() {
    let temp = TempDir::new().expect("temp dir");
    let root = temp.path();
    fs::create_dir_all(root.join("gone")).expect("mkdir gone");
    fs::create_dir_all(root.join("kept")).expect("mkdir kept");
    fs::write(root.join("gone/x.txt"), "x").expect("write x");
    fs::write(root.join("kept/k.txt"), "k").expect("write k");
    fs::write(root.join("a.txt"), "a").expect("write a");

    // A directory is queued when its parent lists it and expanded only after
    // that listing is exhausted, so deleting it on emission makes it unlistable.
    let mut walker = TreeWalker::with_ignore_list(root, IgnoreList::default());
    let mut walked = BTreeSet::new();
    for path in walker.by_ref() {
        if path == "gone" {
            fs::remove_dir_all(root.join("gone")).expect("remove gone");
        }
        walked.insert(path);
    }

    assert_eq!(walker.unreadable_dirs(), 1);
    assert!(walked.contains("gone"));
    assert!(!walked.contains(&rel(&["gone", "x.txt"])));
    assert!(walked.contains("a.txt"));
    assert!(walked.contains(&rel(&["kept", "k.txt"])));
}

#[cfg(unix)]
#[test]
fn unreadable_directory_is_skipped_and_siblings_continue() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().expect("temp dir");
    let root = temp.path();
    fs::create_dir_all(root.join("locked")).expect("mkdir locked");
    fs::create_dir_all(root.join("open")).expect("mkdir open");
    fs::write(root.join("locked/secret.txt"), "s").expect("write secret");
    fs::write(root.join("open/f.txt"), "f").expect("write f");

    let locked = root.join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).expect("chmod");
    if fs::read_dir(&locked).is_ok() {
        // Running with privileges that bypass permission bits.
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).expect("restore");
        return;
    }

    let mut walker = TreeWalker::with_ignore_list(root, IgnoreList::default());
    let walked: BTreeSet<String> = walker.by_ref().collect();
    let unreadable = walker.unreadable_dirs();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).expect("restore");

    assert_eq!(unreadable, 1);
    assert!(walked.contains("locked"));
    assert!(!walked.contains(&rel(&["locked", "secret.txt"])));
    assert!(walked.contains(&rel(&["open", "f.txt"])));
}

#[test]
fn artifact_uses_readme_sentinel_when_missing() {
    let repo = TestRepo::new("sub\n");
    let analysis = analyze_repo(&repo.root(), &quiet_config(&repo.ignore_file())).expect("analyze");

    assert_eq!(analysis.repo_name, "repo");
    assert_eq!(analysis.readme, README_NOT_FOUND);
    let document = render_document(&analysis);
    assert!(document.contains("README:\nREADME.md not found.\n\n"));
    assert!(document.contains("File: a.txt\nContent:\nhi\n\n"));
    assert!(!document.contains("File: b.png"));
    assert!(!document.contains("c.txt"));
    assert_eq!(analysis.stats.files_skipped_binary, 1);
}

#[test]
fn independent_analyses_use_their_own_log_settings() {
    let repo = TestRepo::new("");
    let verbose = Config {
        log: LogConfig { level: LogLevel::Debug, color: true },
        ..quiet_config(&repo.ignore_file())
    };
    let quiet = quiet_config(&repo.ignore_file());

    let first = analyze_repo(&repo.root(), &verbose).expect("verbose analyze");
    let second = analyze_repo(&repo.root(), &quiet).expect("quiet analyze");
    assert_eq!(first.stats, second.stats);
    assert_eq!(first.readme, second.readme);
}
