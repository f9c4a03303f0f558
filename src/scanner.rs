use std::path::{Path, PathBuf};

use era_types::{MentionRecord, ScanOutput};
use log::{debug, warn};
use walkdir::WalkDir;

use crate::civil::CivilCalendar;
use crate::mention::MentionFinder;

/// Discover all `.txt` files under `root`, in path order.
///
/// Hidden directories (`.git` and the like) are not entered.
pub fn scan_corpus(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e.file_name().to_str().unwrap_or("")))
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("txt"))
        .collect();
    files.sort();
    files
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Find and convert era dates in every text file under `root`.
/// Unreadable files are skipped with a warning.
pub fn scan_mentions<C: CivilCalendar>(finder: &MentionFinder<'_, C>, root: &Path) -> ScanOutput {
    let mut out = ScanOutput::default();
    for path in scan_corpus(root) {
        let text = match std::fs::read_to_string(&path) {
            Ok(t) => t,
            Err(e) => {
                warn!("cannot read {}: {e}", path.display());
                continue;
            }
        };
        out.files += 1;
        let file = path
            .strip_prefix(root)
            .unwrap_or(&path)
            .display()
            .to_string();
        let found = finder.find(&text);
        debug!("{file}: {} mentions", found.len());
        out.mentions.extend(found.into_iter().map(|m| {
            let (civil, error) = match m.date {
                Ok(d) => (Some(d.to_string()), None),
                Err(e) => (None, Some(e.to_string())),
            };
            MentionRecord {
                file: file.clone(),
                byte_offset: m.byte_offset,
                text: m.text,
                civil,
                error,
            }
        }));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;

    fn corpus(name: &str) -> PathBuf {
        let root = std::env::temp_dir().join(format!("era_convert_{name}_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&root);
        std::fs::create_dir_all(root.join("01_漢書/02_紀")).unwrap();
        std::fs::create_dir_all(root.join(".hidden")).unwrap();
        std::fs::write(
            root.join("01_漢書/02_紀/01_平帝紀.txt"),
            "漢平帝元始元年正月朔，日有食之。",
        )
        .unwrap();
        std::fs::write(root.join("01_漢書/目录.txt"), "無紀年。").unwrap();
        std::fs::write(root.join("01_漢書/notes.md"), "漢平帝元始二年").unwrap();
        std::fs::write(root.join(".hidden/x.txt"), "漢平帝元始二年").unwrap();
        root
    }

    #[test]
    fn test_scan_corpus_finds_txt_only() {
        let root = corpus("files");
        let files = scan_corpus(&root);
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|p| p.extension().unwrap() == "txt"));
        std::fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_scan_mentions() {
        let root = corpus("mentions");
        let r = Registry::new().unwrap();
        let finder = MentionFinder::new(&r).unwrap();
        let out = scan_mentions(&finder, &root);
        assert_eq!(out.files, 2);
        assert_eq!(out.mentions.len(), 1);
        assert_eq!(out.converted(), 1);
        let m = &out.mentions[0];
        assert!(m.file.ends_with("01_平帝紀.txt"));
        assert_eq!(m.byte_offset, 0);
        assert_eq!(m.text, "漢平帝元始元年正月朔");
        assert_eq!(m.civil.as_deref(), Some("1年2月12日"));
        std::fs::remove_dir_all(&root).unwrap();
    }
}
