//! Integration tests for the scanning contract

use linesift_api::{scan, scan_file, scan_text, Pattern, Source, Substring};
use std::fs;
use std::io::{self, Read};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

/// Reader that yields its data, then fails every subsequent read
struct FailAfter {
    data: io::Cursor<Vec<u8>>,
}

impl Read for FailAfter {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.data.read(buf)? {
            0 => Err(io::Error::new(io::ErrorKind::Other, "injected failure")),
            n => Ok(n),
        }
    }
}

/// Reader wrapper that counts how many times it is dropped
struct DropTracker<R> {
    inner: R,
    drops: Arc<AtomicUsize>,
}

impl<R: Read> Read for DropTracker<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl<R> Drop for DropTracker<R> {
    fn drop(&mut self) {
        self.drops.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn matches_lines_containing_substring() {
    let matched: Vec<String> = scan_text("apple\nbanana\ncherry", Substring::new("an"))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(matched, vec!["banana"]);
}

#[test]
fn empty_source_yields_empty_output_without_error() {
    let matched: Vec<String> = scan_text("", Substring::new("an"))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert!(matched.is_empty());
}

#[test]
fn preserves_original_order() {
    let matched: Vec<String> = scan_text("b1\nx\nb2\ny\nb3", Substring::new("b"))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(matched, vec!["b1", "b2", "b3"]);
}

#[test]
fn closure_predicates_work() {
    let matched: Vec<String> = scan_text("short\na rather long line\nok", |l: &str| l.len() > 5)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(matched, vec!["a rather long line"]);
}

#[test]
fn regex_predicates_work() {
    let matched: Vec<String> = scan_text(
        "error: disk full\nwarning: low\nerror: no space",
        Pattern::new(r"^error:").unwrap(),
    )
    .unwrap()
    .collect::<Result<_, _>>()
    .unwrap();
    assert_eq!(matched, vec!["error: disk full", "error: no space"]);
}

#[test]
fn scans_a_real_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("fruit.txt");
    fs::write(&path, "apple\nbanana\ncherry\n").unwrap();

    let matched: Vec<String> = scan_file(&path, Substring::new("an"))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(matched, vec!["banana"]);
}

#[test]
fn missing_file_fails_before_any_read() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("does_not_exist.txt");

    let error = scan_file(&path, Substring::new("an"))
        .err()
        .expect("scan should fail to open");
    assert!(error.is_resource_unavailable());
}

#[test]
fn read_failure_after_good_lines_yields_their_matches_then_fails() {
    let reader = FailAfter {
        data: io::Cursor::new(b"banana\napple\nanother\n".to_vec()),
    };
    let mut matched = scan(Source::from_reader(reader), Substring::new("an")).unwrap();

    assert_eq!(matched.next().unwrap().unwrap(), "banana");
    assert_eq!(matched.next().unwrap().unwrap(), "another");

    let error = matched.next().unwrap().err().expect("scan should fail");
    assert!(error.is_read_failure());

    // Fused after the failure.
    assert!(matched.next().is_none());
    assert_eq!(matched.lines_read(), 3);
}

#[test]
fn handle_released_when_consumer_stops_at_first_match() {
    let drops = Arc::new(AtomicUsize::new(0));
    let reader = DropTracker {
        inner: io::Cursor::new(b"banana\napple\nanother\n".to_vec()),
        drops: drops.clone(),
    };
    let mut matched = scan(Source::from_reader(reader), Substring::new("an")).unwrap();

    assert_eq!(matched.next().unwrap().unwrap(), "banana");
    assert_eq!(drops.load(Ordering::SeqCst), 0);

    drop(matched);
    assert_eq!(drops.load(Ordering::SeqCst), 1);
}

#[test]
fn handle_released_exactly_once_on_exhaustion() {
    let drops = Arc::new(AtomicUsize::new(0));
    let reader = DropTracker {
        inner: io::Cursor::new(b"a\nb\n".to_vec()),
        drops: drops.clone(),
    };
    let mut matched = scan(Source::from_reader(reader), Substring::new("a")).unwrap();

    while matched.next().is_some() {}
    assert_eq!(drops.load(Ordering::SeqCst), 1);

    drop(matched);
    assert_eq!(drops.load(Ordering::SeqCst), 1);
}

#[test]
fn handle_released_on_read_failure() {
    let drops = Arc::new(AtomicUsize::new(0));
    let reader = DropTracker {
        inner: FailAfter {
            data: io::Cursor::new(b"banana\n".to_vec()),
        },
        drops: drops.clone(),
    };
    let mut matched = scan(Source::from_reader(reader), Substring::new("an")).unwrap();

    assert_eq!(matched.next().unwrap().unwrap(), "banana");
    assert!(matched.next().unwrap().is_err());
    assert_eq!(drops.load(Ordering::SeqCst), 1);
}

#[test]
fn predicate_matching_nothing_still_drains_and_releases() {
    let drops = Arc::new(AtomicUsize::new(0));
    let reader = DropTracker {
        inner: io::Cursor::new(b"a\nb\nc\n".to_vec()),
        drops: drops.clone(),
    };
    let mut matched = scan(Source::from_reader(reader), |_: &str| false).unwrap();

    assert!(matched.next().is_none());
    assert_eq!(matched.lines_read(), 3);
    assert_eq!(drops.load(Ordering::SeqCst), 1);
}
