//! Builds a corpus from a directory of HTML pages.

use crate::{Corpus, Error, Result};
use regex::Regex;
use std::{collections::BTreeSet, path::Path, sync::OnceLock};
use walkdir::WalkDir;

fn href() -> &'static Regex {
    static HREF: OnceLock<Regex> = OnceLock::new();
    HREF.get_or_init(|| {
        Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).expect("href pattern is valid")
    })
}

/// Every `.html` file directly inside `dir` becomes a page named after its file
/// name. Its links are the `href` targets of its `<a>` tags, minus itself and
/// anything that is not a page of the corpus.
pub fn crawl<D: AsRef<Path>>(dir: D) -> Result<Corpus<String>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(Error::Io {
            path: dir.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not a directory"),
        });
    }
    let mut pages = vec![];
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            let source = e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("directory walk failed"));
            Error::Io { path, source }
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            tracing::warn!(path = %entry.path().display(), "skipping non UTF-8 file name");
            continue;
        };
        if !name.ends_with(".html") {
            continue;
        }
        let contents = std::fs::read_to_string(entry.path()).map_err(|source| Error::Io {
            path: entry.path().to_path_buf(),
            source,
        })?;
        let links = extract_links(&contents, name);
        tracing::debug!(page = name, links = links.len(), "crawled");
        pages.push((name.to_string(), links));
    }
    Ok(Corpus::new(pages))
}

fn extract_links(contents: &str, page: &str) -> BTreeSet<String> {
    href()
        .captures_iter(contents)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
        .filter(|link| *link != page)
        .map(str::to_string)
        .collect()
}
