//! End-to-end scaffold pipeline tests over the in-memory filesystem and a
//! scripted puzzle client, with the real description converter.

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use advent_adapters::{DayDescConverter, MemoryFilesystem};
use advent_core::{
    application::{
        ApplicationError, Layout, ScaffoldService, TokenRewriter,
        ports::{Filesystem, PuzzleClient},
    },
    domain::Day,
    error::{AdventError, AdventResult},
};

/// Scripted remote service: canned responses plus call counters.
///
/// The counters are shared so a test can keep reading them after the
/// service takes ownership of the client.
struct ScriptedClient {
    input: AdventResult<Vec<u8>>,
    page: AdventResult<String>,
    input_calls: Arc<AtomicUsize>,
    page_calls: Arc<AtomicUsize>,
}

impl ScriptedClient {
    fn new(input: AdventResult<Vec<u8>>, page: AdventResult<String>) -> Self {
        Self {
            input,
            page,
            input_calls: Arc::new(AtomicUsize::new(0)),
            page_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn ok(input: &[u8], page: &str) -> Self {
        Self::new(Ok(input.to_vec()), Ok(page.to_string()))
    }
}

impl PuzzleClient for ScriptedClient {
    fn fetch_input(&self, _day: Day) -> AdventResult<Vec<u8>> {
        self.input_calls.fetch_add(1, Ordering::SeqCst);
        self.input.clone()
    }

    fn fetch_page(&self, _day: Day) -> AdventResult<String> {
        self.page_calls.fetch_add(1, Ordering::SeqCst);
        self.page.clone()
    }
}

fn seeded_fs() -> MemoryFilesystem {
    let fs = MemoryFilesystem::new();
    fs.seed_file(
        "challenges/day00/Cargo.toml",
        "[package]\nname = \"day00\"\n",
    );
    fs.seed_file(
        "challenges/day00/src/main.rs",
        "fn main() { day00::run() }\n",
    );
    fs.seed_file("challenges/day00/benches/day00.rs", "// bench day00\n");
    fs
}

fn service(fs: &MemoryFilesystem, client: ScriptedClient) -> ScaffoldService {
    ScaffoldService::new(
        Box::new(fs.clone()),
        Box::new(client),
        Box::new(DayDescConverter::new()),
        Layout::default(),
    )
}

#[test]
fn scaffold_copies_rewrites_and_persists() {
    let fs = seeded_fs();
    let page = r#"<article class="day-desc"><p>Hello</p></article>"#;
    let service = service(&fs, ScriptedClient::ok(b"1,2,3", page));

    service.scaffold(Day::new(5).unwrap(), false).unwrap();

    // Template copied with the token rewritten in contents...
    assert_eq!(
        fs.read_string(Path::new("challenges/day05/Cargo.toml"))
            .unwrap(),
        "[package]\nname = \"day05\"\n"
    );
    assert_eq!(
        fs.read_string(Path::new("challenges/day05/src/main.rs"))
            .unwrap(),
        "fn main() { day05::run() }\n"
    );
    // ...and in file names.
    assert_eq!(
        fs.read_string(Path::new("challenges/day05/benches/day05.rs"))
            .unwrap(),
        "// bench day05\n"
    );

    // Input persisted verbatim.
    assert_eq!(
        fs.read(Path::new("challenges/day05/input.txt")).unwrap(),
        b"1,2,3"
    );

    // Description converted and persisted.
    assert_eq!(
        fs.read_string(Path::new("challenges/day05/README.md"))
            .unwrap(),
        "Hello\n"
    );

    // Template untouched.
    assert_eq!(
        fs.read_string(Path::new("challenges/day00/Cargo.toml"))
            .unwrap(),
        "[package]\nname = \"day00\"\n"
    );
}

#[test]
fn scaffold_refuses_existing_day_directory() {
    let fs = seeded_fs();
    fs.seed_file("challenges/day05/input.txt", "old");
    let service = service(&fs, ScriptedClient::ok(b"", ""));

    let err = service.scaffold(Day::new(5).unwrap(), false).unwrap_err();
    assert!(matches!(
        err,
        AdventError::Application(ApplicationError::TargetExists { .. })
    ));
    // Nothing was overwritten.
    assert_eq!(
        fs.read_string(Path::new("challenges/day05/input.txt"))
            .unwrap(),
        "old"
    );
}

#[test]
fn scaffold_force_recreates_the_directory() {
    let fs = seeded_fs();
    fs.seed_file("challenges/day05/stale.txt", "stale");
    let page = r#"<article class="day-desc"><p>Hi</p></article>"#;
    let service = service(&fs, ScriptedClient::ok(b"in", page));

    service.scaffold(Day::new(5).unwrap(), true).unwrap();

    assert!(!fs.exists(Path::new("challenges/day05/stale.txt")));
    assert!(fs.exists(Path::new("challenges/day05/input.txt")));
}

#[test]
fn failed_input_fetch_aborts_before_description() {
    let fs = seeded_fs();
    let client = ScriptedClient::new(
        Err(ApplicationError::Http {
            status: 404,
            url: "https://adventofcode.com/2021/day/5/input".into(),
        }
        .into()),
        Ok(String::new()),
    );
    let service = ScaffoldService::new(
        Box::new(fs.clone()),
        Box::new(client),
        Box::new(DayDescConverter::new()),
        Layout::default(),
    );

    let err = service.scaffold(Day::new(5).unwrap(), false).unwrap_err();
    assert!(matches!(
        err,
        AdventError::Application(ApplicationError::Http { status: 404, .. })
    ));

    // No input file, no README...
    assert!(!fs.exists(Path::new("challenges/day05/input.txt")));
    assert!(!fs.exists(Path::new("challenges/day05/README.md")));
    // ...but the copied, rewritten tree remains on disk (no rollback).
    assert!(fs.exists(Path::new("challenges/day05/Cargo.toml")));
}

#[test]
fn failed_input_fetch_never_requests_the_page() {
    let fs = seeded_fs();
    let client = ScriptedClient::new(
        Err(ApplicationError::Http {
            status: 404,
            url: "input".into(),
        }
        .into()),
        Ok(String::new()),
    );
    let input_calls = Arc::clone(&client.input_calls);
    let page_calls = Arc::clone(&client.page_calls);
    let service = ScaffoldService::new(
        Box::new(fs.clone()),
        Box::new(client),
        Box::new(DayDescConverter::new()),
        Layout::default(),
    );

    let _ = service.scaffold(Day::new(5).unwrap(), false);
    assert_eq!(input_calls.load(Ordering::SeqCst), 1);
    assert_eq!(page_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn refresh_joins_two_parts_with_a_blank_line() {
    let fs = seeded_fs();
    fs.seed_dir("challenges/day05");
    let page = concat!(
        r#"<article class="day-desc"><p>Part1</p></article>"#,
        r#"<article class="day-desc"><p>Part2</p></article>"#,
    );
    let service = service(&fs, ScriptedClient::ok(b"", page));

    service.refresh_description(Day::new(5).unwrap()).unwrap();

    assert_eq!(
        fs.read_string(Path::new("challenges/day05/README.md"))
            .unwrap(),
        "Part1\n\nPart2\n"
    );
}

#[test]
fn refresh_is_idempotent_for_identical_content() {
    let fs = seeded_fs();
    fs.seed_dir("challenges/day07");
    let page = r#"<article class="day-desc"><h2>T</h2><p>Find <em>two</em> entries.</p></article>"#;

    let day = Day::new(7).unwrap();
    service(&fs, ScriptedClient::ok(b"", page))
        .refresh_description(day)
        .unwrap();
    let first = fs.read(Path::new("challenges/day07/README.md")).unwrap();

    service(&fs, ScriptedClient::ok(b"", page))
        .refresh_description(day)
        .unwrap();
    let second = fs.read(Path::new("challenges/day07/README.md")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn refresh_with_no_blocks_writes_an_empty_document() {
    let fs = seeded_fs();
    fs.seed_dir("challenges/day03");
    let service = service(&fs, ScriptedClient::ok(b"", "<html><body></body></html>"));

    service.refresh_description(Day::new(3).unwrap()).unwrap();

    assert_eq!(
        fs.read(Path::new("challenges/day03/README.md")).unwrap(),
        b""
    );
}

#[test]
fn refresh_replaces_prior_readme_content() {
    let fs = seeded_fs();
    fs.seed_file("challenges/day09/README.md", "outdated part one only");
    let page = r#"<article class="day-desc"><p>Fresh</p></article>"#;
    let service = service(&fs, ScriptedClient::ok(b"", page));

    service.refresh_description(Day::new(9).unwrap()).unwrap();

    assert_eq!(
        fs.read_string(Path::new("challenges/day09/README.md"))
            .unwrap(),
        "Fresh\n"
    );
}

#[test]
fn rewrite_tree_never_touches_files_outside_the_root() {
    let fs = MemoryFilesystem::new();
    fs.seed_file("challenges/day00/note.txt", "template day00");
    fs.seed_file("challenges/day04/note.txt", "copied day00");
    fs.seed_file("unrelated/day00.txt", "day00 elsewhere");

    TokenRewriter::default()
        .rewrite_tree(&fs, Path::new("challenges/day04"), "04")
        .unwrap();

    assert_eq!(
        fs.read_string(Path::new("challenges/day04/note.txt"))
            .unwrap(),
        "copied day04"
    );
    // Outside the target tree: bytes and names unchanged.
    assert_eq!(
        fs.read_string(Path::new("challenges/day00/note.txt"))
            .unwrap(),
        "template day00"
    );
    assert_eq!(
        fs.read_string(Path::new("unrelated/day00.txt")).unwrap(),
        "day00 elsewhere"
    );
}

#[test]
fn rewrite_tree_is_idempotent() {
    let fs = MemoryFilesystem::new();
    fs.seed_file("tree/day00/src/lib.rs", "pub use day00::*;");

    let rewriter = TokenRewriter::default();
    rewriter
        .rewrite_tree(&fs, Path::new("tree"), "11")
        .unwrap();
    let once = fs.file_paths();
    let content_once = fs.read_string(Path::new("tree/day00/src/lib.rs"));

    rewriter
        .rewrite_tree(&fs, Path::new("tree"), "11")
        .unwrap();
    assert_eq!(fs.file_paths(), once);
    assert_eq!(fs.read_string(Path::new("tree/day00/src/lib.rs")), content_once);
}

#[test]
fn rewrite_tree_skips_binary_files() {
    let fs = MemoryFilesystem::new();
    let binary = [0x64u8, 0x61, 0x79, 0x30, 0x30, 0xFF, 0xFE]; // "day00" + invalid utf-8
    fs.seed_file("tree/blob.bin", binary);

    TokenRewriter::default()
        .rewrite_tree(&fs, Path::new("tree"), "08")
        .unwrap();

    assert_eq!(fs.read(Path::new("tree/blob.bin")).unwrap(), binary);
}

#[test]
fn custom_layout_controls_the_payload_filename() {
    // Earlier seasons named the payload `index.txt`; the layout keeps that
    // reachable through configuration.
    let fs = seeded_fs();
    let page = r#"<article class="day-desc"><p>Hi</p></article>"#;
    let layout = Layout {
        input_filename: "index.txt".into(),
        ..Layout::default()
    };
    let service = ScaffoldService::new(
        Box::new(fs.clone()),
        Box::new(ScriptedClient::ok(b"payload", page)),
        Box::new(DayDescConverter::new()),
        layout,
    );

    service.scaffold(Day::new(2).unwrap(), false).unwrap();

    assert_eq!(
        fs.read(Path::new("challenges/day02/index.txt")).unwrap(),
        b"payload"
    );
    assert!(!fs.exists(Path::new("challenges/day02/input.txt")));
}
