//! Video discovery and case alignment
//!
//! Discovery lists the video files directly inside one folder. Alignment
//! runs discovery for every method of a comparison section and unions the
//! file stems into the section's case list.
//!
//! Both are total: a folder that does not exist simply has no videos.

use crate::config::MethodConfig;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recognized video extensions, matched case-insensitively
pub const VIDEO_EXTENSIONS: [&str; 4] = ["mp4", "webm", "mov", "ogg"];

pub fn is_video_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| VIDEO_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// File names of the videos directly inside `dir`, sorted
///
/// Returns an empty list when `dir` is missing or unreadable. Names that are
/// not valid UTF-8 are skipped since they cannot be written into the page.
pub fn video_files<P: AsRef<Path>>(dir: P) -> Vec<String> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Vec::new();
    }

    let mut files: Vec<String> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && is_video_file(e.path()))
        .filter_map(|e| e.file_name().to_str().map(str::to_owned))
        .collect();

    files.sort();
    files
}

/// File name without its final extension
pub fn file_stem(file_name: &str) -> &str {
    Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name)
}

/// MIME type for the `<source>` element of a video file
pub fn mime_type(file_name: &str) -> &'static str {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "webm" => "video/webm",
        "mov" => "video/quicktime",
        "ogg" => "video/ogg",
        _ => "video/mp4",
    }
}

/// Sorted union of the stems of every listed file
pub fn union_cases<S: AsRef<str>>(listings: &[Vec<S>]) -> Vec<String> {
    listings
        .iter()
        .flatten()
        .map(|name| file_stem(name.as_ref()).to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Method folders of a comparison section, their listings, and the cases
/// they cover
///
/// `method_dirs` and `listings` follow method declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    pub method_dirs: Vec<PathBuf>,
    pub listings: Vec<Vec<String>>,
    /// Every stem that at least one method has a video for, sorted
    pub cases: Vec<String>,
}

pub fn align_cases(section_dir: &Path, methods: &[MethodConfig]) -> Alignment {
    let method_dirs: Vec<PathBuf> = methods.iter().map(|m| section_dir.join(&m.folder)).collect();
    let listings: Vec<Vec<String>> = method_dirs.iter().map(video_files).collect();
    let cases = union_cases(&listings);
    Alignment {
        method_dirs,
        listings,
        cases,
    }
}

/// Pick the file for `case` out of a method's listing
///
/// `preferred_ext` wins when several files share the stem; otherwise the
/// order of [`VIDEO_EXTENSIONS`] decides.
pub fn find_case_file<'a>(files: &'a [String], case: &str, preferred_ext: &str) -> Option<&'a str> {
    let ext_rank = |name: &str| -> usize {
        let ext = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();
        if ext.eq_ignore_ascii_case(preferred_ext) {
            0
        } else {
            1 + VIDEO_EXTENSIONS
                .iter()
                .position(|known| *known == ext)
                .unwrap_or(VIDEO_EXTENSIONS.len())
        }
    };

    files
        .iter()
        .filter(|name| file_stem(name) == case)
        .min_by_key(|name| ext_rank(name))
        .map(String::as_str)
}
