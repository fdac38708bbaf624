// Marker comment scanner: walks a directory tree and lifts //todo / //fixme lines

use crate::models::ExtractedTask;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Marker substrings recognized by default. Matching is case-sensitive and
/// positional-agnostic: a marker inside a word or a string literal still counts.
pub const DEFAULT_MARKERS: &[&str] = &["//todo", "//fixme"];

/// A path that could not be walked or read during a scan
#[derive(Debug)]
pub struct ScanError {
    pub path: Option<PathBuf>,
    pub message: String,
}

impl std::fmt::Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{}: {}", path.display(), self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Everything one scan produced. Errors are collected per file so a single
/// unreadable entry never aborts the rest of the walk.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub tasks: Vec<ExtractedTask>,
    pub errors: Vec<ScanError>,
}

/// Walk every regular file under `root` and extract marker-tagged lines.
///
/// Symlinks are followed; walkdir's ancestor check keeps a symlink cycle from
/// looping forever and reports it as an ordinary walk error instead.
pub fn scan_tree<S: AsRef<str>>(root: &Path, markers: &[S]) -> ScanOutcome {
    let mut outcome = ScanOutcome::default();

    for entry in WalkDir::new(root).follow_links(true) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!(error = %e, "Skipping unwalkable entry");
                outcome.errors.push(ScanError {
                    path: e.path().map(Path::to_path_buf),
                    message: e.to_string(),
                });
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        match fs::read_to_string(entry.path()) {
            Ok(text) => {
                outcome.tasks.extend(extract_from_text(entry.path(), &text, markers));
            }
            Err(e) => {
                warn!(path = ?entry.path(), error = ?e, "Skipping unreadable file");
                outcome.errors.push(ScanError {
                    path: Some(entry.path().to_path_buf()),
                    message: e.to_string(),
                });
            }
        }
    }

    debug!(
        root = ?root,
        tasks = outcome.tasks.len(),
        errors = outcome.errors.len(),
        "Scan finished"
    );

    outcome
}

/// Extract one task per line containing any marker substring.
///
/// Line numbers are 0-based. The extracted text is the line with every marker
/// occurrence removed and leading/trailing whitespace stripped.
pub fn extract_from_text<S: AsRef<str>>(path: &Path, text: &str, markers: &[S]) -> Vec<ExtractedTask> {
    let mut tasks = Vec::new();

    for (line_number, line) in text.lines().enumerate() {
        if !markers.iter().any(|m| line.contains(m.as_ref())) {
            continue;
        }

        let mut cleaned = line.to_string();
        for marker in markers {
            cleaned = cleaned.replace(marker.as_ref(), "");
        }

        tasks.push(ExtractedTask {
            source_path: path.to_path_buf(),
            line_number,
            text: cleaned.trim().to_string(),
        });
    }

    tasks
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_extract_basic_line() {
        let tasks = extract_from_text(Path::new("a.rs"), "a\n//todo buy milk\nb\n", DEFAULT_MARKERS);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].line_number, 1);
        assert_eq!(tasks[0].text, "buy milk");
        assert_eq!(tasks[0].source_path, Path::new("a.rs"));
    }

    #[test]
    fn test_extract_strips_every_marker_occurrence() {
        let tasks = extract_from_text(Path::new("a.rs"), "  //todo //fixme fix bug  \n", DEFAULT_MARKERS);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].text, "fix bug");
    }

    #[test]
    fn test_extract_skips_lines_without_marker() {
        let text = "fn main() {}\n// plain comment\nlet todo = 1;\n";
        let tasks = extract_from_text(Path::new("a.rs"), text, DEFAULT_MARKERS);
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_extract_is_case_sensitive() {
        let tasks = extract_from_text(Path::new("a.rs"), "//TODO shout\n//todo whisper\n", DEFAULT_MARKERS);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].text, "whisper");
    }

    #[test]
    fn test_extract_matches_marker_inside_string_literal() {
        // Substring matching has no notion of syntax; a marker embedded in a
        // string literal is still picked up.
        let tasks = extract_from_text(
            Path::new("a.rs"),
            "let s = \"contains //fixme inside\";\n",
            DEFAULT_MARKERS,
        );
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].text, "let s = \"contains  inside\";");
    }

    #[test]
    fn test_extract_counts_every_marker_line() {
        let text = "//todo one\nplain\n//fixme two\n//todo three\n";
        let tasks = extract_from_text(Path::new("a.rs"), text, DEFAULT_MARKERS);
        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[0].line_number, 0);
        assert_eq!(tasks[1].line_number, 2);
        assert_eq!(tasks[2].line_number, 3);
    }

    #[test]
    fn test_extract_custom_markers() {
        let markers = vec!["#hack".to_string()];
        let tasks = extract_from_text(Path::new("a.py"), "#hack rewrite this\n//todo ignored\n", &markers);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].text, "rewrite this");
    }

    #[test]
    fn test_scan_tree_collects_across_subdirectories() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("top.rs"), "//todo at top\n").unwrap();

        let nested = temp.path().join("deep/nested");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("inner.rs"), "code\n//fixme deep down\n").unwrap();
        fs::write(nested.join("clean.rs"), "nothing here\n").unwrap();

        let outcome = scan_tree(temp.path(), DEFAULT_MARKERS);
        assert!(outcome.errors.is_empty());
        assert_eq!(outcome.tasks.len(), 2);

        let mut texts: Vec<&str> = outcome.tasks.iter().map(|t| t.text.as_str()).collect();
        texts.sort();
        assert_eq!(texts, vec!["at top", "deep down"]);
    }

    #[test]
    fn test_scan_tree_empty_directory() {
        let temp = TempDir::new().unwrap();
        let outcome = scan_tree(temp.path(), DEFAULT_MARKERS);
        assert!(outcome.tasks.is_empty());
        assert!(outcome.errors.is_empty());
    }

    #[test]
    fn test_scan_tree_isolates_non_utf8_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("binary.bin"), [0xff, 0xfe, 0x00, 0x9f]).unwrap();
        fs::write(temp.path().join("good.rs"), "//todo still found\n").unwrap();

        let outcome = scan_tree(temp.path(), DEFAULT_MARKERS);
        assert_eq!(outcome.tasks.len(), 1);
        assert_eq!(outcome.tasks[0].text, "still found");
        assert_eq!(outcome.errors.len(), 1);
        assert!(outcome.errors[0].path.as_deref().unwrap().ends_with("binary.bin"));
    }

    #[test]
    #[cfg(unix)]
    fn test_scan_tree_isolates_unreadable_file() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let locked = temp.path().join("locked.rs");
        fs::write(&locked, "//todo unreachable\n").unwrap();
        let mut perms = fs::metadata(&locked).unwrap().permissions();
        perms.set_mode(0o000);
        fs::set_permissions(&locked, perms).unwrap();

        fs::write(temp.path().join("open.rs"), "//todo reachable\n").unwrap();

        let outcome = scan_tree(temp.path(), DEFAULT_MARKERS);
        assert_eq!(outcome.tasks.len(), 1);
        assert_eq!(outcome.tasks[0].text, "reachable");
        assert_eq!(outcome.errors.len(), 1);

        // Restore permissions so the tempdir can be cleaned up
        let mut perms = fs::metadata(&locked).unwrap().permissions();
        perms.set_mode(0o644);
        fs::set_permissions(&locked, perms).unwrap();
    }

    #[test]
    fn test_scan_error_display() {
        let err = ScanError {
            path: Some(PathBuf::from("bad.rs")),
            message: "permission denied".to_string(),
        };
        assert_eq!(err.to_string(), "bad.rs: permission denied");
    }
}
