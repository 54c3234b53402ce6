//! Page layout
//!
//! Turns a [`PageConfig`] plus the state of the videos root into a
//! [`Gallery`]: the ordered sections, their row groups, and the cells in each
//! row, with every cell already resolved against disk. Rendering the gallery
//! to HTML lives in [`html`].
//!
//! # Usage
//!
//! ```ignore
//! use vidgallery::{gallery, Annotations, PageConfig};
//!
//! let page = PageConfig::default();
//! let annotations = Annotations::default();
//! let built = gallery::generate("poseanything.html", &page, "pose", &annotations)?;
//! println!("{} videos", built.video_count());
//! ```

pub mod html;

use crate::annotations::Annotations;
use crate::config::{Layout, MethodConfig, PageConfig, SectionConfig, SplitRows, VideoRatio};
use crate::discover;
use std::fmt;
use std::io;
use std::path::{Component, Path, PathBuf};

/// One video slot in a row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Video {
        /// Relative path written into the page, `/`-separated
        src: String,
        mime: &'static str,
        caption: String,
    },
    /// The method has no output for this case
    Placeholder { label: String },
}

impl Cell {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Cell::Placeholder { .. })
    }

    /// Text shown under the cell
    pub fn label(&self) -> &str {
        match self {
            Cell::Video { caption, .. } => caption,
            Cell::Placeholder { label } => label,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// The only row of its group
    Full,
    /// First sub-row of a split comparison row
    Leading,
    /// Second sub-row of a split comparison row
    Trailing,
}

impl RowKind {
    pub fn css_class(self) -> &'static str {
        match self {
            RowKind::Full => "video-row",
            RowKind::Leading => "video-row-leading",
            RowKind::Trailing => "video-row-trailing",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Unique within the page; scopes the play-all action
    pub id: String,
    pub kind: RowKind,
    pub ratio: VideoRatio,
    pub cells: Vec<Cell>,
}

/// Rows sharing one play-all button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowGroup {
    /// Comparison prompt line shown above the rows
    pub prompt: Option<String>,
    pub play_button: bool,
    pub rows: Vec<Row>,
}

impl RowGroup {
    pub fn row_ids(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.id.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView {
    pub title: String,
    pub description: String,
    pub class: Option<String>,
    pub groups: Vec<RowGroup>,
}

impl SectionView {
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.groups.iter().flat_map(|g| g.rows.iter())
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.rows().flat_map(|r| r.cells.iter())
    }
}

/// Why a configured section produced no markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    MissingDirectory(PathBuf),
    NoVideos,
    NoMethods,
    NoCases,
}

impl SkipReason {
    /// True for configuration mistakes, as opposed to content that is simply
    /// not there yet
    pub fn is_author_error(&self) -> bool {
        matches!(self, SkipReason::NoMethods)
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingDirectory(dir) => write!(f, "directory {} not found", dir.display()),
            SkipReason::NoVideos => write!(f, "no videos found"),
            SkipReason::NoMethods => write!(f, "comparison section has no methods configured"),
            SkipReason::NoCases => write!(f, "no method folder contains videos"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    pub title: String,
    pub reason: SkipReason,
}

/// A fully laid out page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    pub document_title: String,
    pub title: String,
    pub introduction: String,
    pub sections: Vec<SectionView>,
    pub skipped: Vec<Skipped>,
}

impl Gallery {
    pub fn row_count(&self) -> usize {
        self.sections.iter().map(|s| s.rows().count()).sum()
    }

    pub fn video_count(&self) -> usize {
        self.cells().filter(|c| !c.is_placeholder()).count()
    }

    pub fn placeholder_count(&self) -> usize {
        self.cells().filter(|c| c.is_placeholder()).count()
    }

    fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.sections.iter().flat_map(|s| s.cells())
    }
}

/// Hands out page-unique row identifiers
#[derive(Debug, Default)]
struct RowIds {
    issued: usize,
}

impl RowIds {
    fn next(&mut self, slug: &str) -> String {
        self.issued += 1;
        format!("row-{}-{}", slug, self.issued)
    }
}

/// Folder name reduced to `[a-z0-9-]` for use in element ids
pub fn slug(folder: &str) -> String {
    let mut out = String::with_capacity(folder.len());
    for c in folder.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.ends_with('-') {
            out.push('-');
        }
    }
    let trimmed = out.trim_matches('-');
    if trimmed.is_empty() {
        "section".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Partition `items` into consecutive rows of `per_row`; the last row may be
/// shorter. A width of 0 is treated as 1.
pub fn chunk_rows<T>(items: &[T], per_row: usize) -> Vec<&[T]> {
    items.chunks(per_row.max(1)).collect()
}

fn url_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Path from `base` to `target`, both absolute, without touching the disk
///
/// Returns an empty path when they are the same directory, and `target`
/// itself when the two share no root (different drives).
pub fn relative_path(target: &Path, base: &Path) -> PathBuf {
    let target: Vec<Component> = target.components().collect();
    let base: Vec<Component> = base.components().collect();
    let common = target.iter().zip(&base).take_while(|(t, b)| t == b).count();
    if common == 0 {
        return target.iter().collect();
    }

    let mut out = PathBuf::new();
    for _ in common..base.len() {
        out.push("..");
    }
    for component in &target[common..] {
        out.push(component);
    }
    out
}

/// Prefix that makes video paths under `root` resolve from the page at
/// `page_path`
///
/// Falls back to `root` as given when either location cannot be resolved.
pub fn link_root(page_path: &Path, root: &Path) -> PathBuf {
    let page_dir = match page_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    match (root.canonicalize(), page_dir.canonicalize()) {
        (Ok(root_abs), Ok(page_abs)) => relative_path(&root_abs, &page_abs),
        _ => root.to_path_buf(),
    }
}

/// Resolve one (case, method) cell against a method's file listing
///
/// `link_dir` is the method folder as the page should reference it.
pub fn resolve_cell(
    link_dir: &Path,
    files: &[String],
    case: &str,
    method: &MethodConfig,
    preferred_ext: &str,
) -> Cell {
    match discover::find_case_file(files, case, preferred_ext) {
        Some(name) => Cell::Video {
            src: url_path(&link_dir.join(name)),
            mime: discover::mime_type(name),
            caption: method.name.clone(),
        },
        None => Cell::Placeholder {
            label: method.name.clone(),
        },
    }
}

/// Lay out the whole page
///
/// Sections keep their declaration order. Sections that would render empty
/// are left out and listed in [`Gallery::skipped`]. Video paths are written
/// as `root` joined with the file's location under it; [`generate`] instead
/// makes them relative to the written page.
pub fn build<P: AsRef<Path>>(page: &PageConfig, root: P, annotations: &Annotations) -> Gallery {
    let root = root.as_ref();
    layout(page, root, root, annotations)
}

fn layout(page: &PageConfig, root: &Path, link_root: &Path, annotations: &Annotations) -> Gallery {
    let mut ids = RowIds::default();
    let mut sections = Vec::new();
    let mut skipped = Vec::new();

    for section in &page.sections {
        let dirs = SectionDirs {
            disk: root.join(&section.folder),
            link: link_root.join(&section.folder),
        };
        match plan_section(section, &dirs, &page.video_extension, annotations, &mut ids) {
            Ok(view) => sections.push(view),
            Err(reason) => skipped.push(Skipped {
                title: section.title.clone(),
                reason,
            }),
        }
    }

    Gallery {
        document_title: page.document_title.clone(),
        title: page.title.clone(),
        introduction: page.introduction.clone(),
        sections,
        skipped,
    }
}

/// Where a section's videos live, and how the page refers to that folder
struct SectionDirs {
    disk: PathBuf,
    link: PathBuf,
}

fn plan_section(
    section: &SectionConfig,
    dirs: &SectionDirs,
    preferred_ext: &str,
    annotations: &Annotations,
    ids: &mut RowIds,
) -> Result<SectionView, SkipReason> {
    // Checked before the directory so an author mistake is reported even
    // when the folder is also missing
    if let Layout::Comparison { methods, .. } = &section.layout {
        if methods.is_empty() {
            return Err(SkipReason::NoMethods);
        }
    }
    if !dirs.disk.is_dir() {
        return Err(SkipReason::MissingDirectory(dirs.disk.clone()));
    }

    let groups = match &section.layout {
        Layout::Grid { videos_per_row } => {
            plan_grid(section, dirs, *videos_per_row, annotations, ids)?
        }
        Layout::Comparison { methods, split } => plan_comparison(
            section,
            dirs,
            methods,
            split.as_ref(),
            preferred_ext,
            annotations,
            ids,
        )?,
    };

    Ok(SectionView {
        title: section.title.clone(),
        description: section.description.clone(),
        class: section.class.clone(),
        groups,
    })
}

fn plan_grid(
    section: &SectionConfig,
    dirs: &SectionDirs,
    videos_per_row: usize,
    annotations: &Annotations,
    ids: &mut RowIds,
) -> Result<Vec<RowGroup>, SkipReason> {
    let files = discover::video_files(&dirs.disk);
    if files.is_empty() {
        return Err(SkipReason::NoVideos);
    }

    let slug = slug(&section.folder);
    let groups = chunk_rows(&files, videos_per_row)
        .into_iter()
        .map(|chunk| {
            let cells = chunk
                .iter()
                .map(|name| Cell::Video {
                    src: url_path(&dirs.link.join(name)),
                    mime: discover::mime_type(name),
                    caption: annotations.caption(discover::file_stem(name)).to_string(),
                })
                .collect();

            RowGroup {
                prompt: None,
                play_button: section.play_button,
                rows: vec![Row {
                    id: ids.next(&slug),
                    kind: RowKind::Full,
                    ratio: section.ratio,
                    cells,
                }],
            }
        })
        .collect();

    Ok(groups)
}

fn plan_comparison(
    section: &SectionConfig,
    dirs: &SectionDirs,
    methods: &[MethodConfig],
    split: Option<&SplitRows>,
    preferred_ext: &str,
    annotations: &Annotations,
    ids: &mut RowIds,
) -> Result<Vec<RowGroup>, SkipReason> {
    let alignment = discover::align_cases(&dirs.disk, methods);
    if alignment.cases.is_empty() {
        return Err(SkipReason::NoCases);
    }

    let link_dirs: Vec<PathBuf> = methods.iter().map(|m| dirs.link.join(&m.folder)).collect();
    let slug = slug(&section.folder);
    let row_cells = |case: &str, range: std::ops::Range<usize>| -> Vec<Cell> {
        range
            .map(|i| resolve_cell(&link_dirs[i], &alignment.listings[i], case, &methods[i], preferred_ext))
            .collect()
    };

    let mut groups = Vec::with_capacity(alignment.cases.len());
    for (i, case) in alignment.cases.iter().enumerate() {
        let case = case.as_str();
        let mut rows = Vec::new();
        match split {
            Some(split) => {
                let leading = split.leading.min(methods.len());
                // An empty sub-row gets no element and no id
                if leading > 0 {
                    rows.push(Row {
                        id: ids.next(&slug),
                        kind: RowKind::Leading,
                        ratio: split.leading_ratio,
                        cells: row_cells(case, 0..leading),
                    });
                }
                if leading < methods.len() {
                    rows.push(Row {
                        id: ids.next(&slug),
                        kind: RowKind::Trailing,
                        ratio: split.trailing_ratio,
                        cells: row_cells(case, leading..methods.len()),
                    });
                }
            }
            None => rows.push(Row {
                id: ids.next(&slug),
                kind: RowKind::Full,
                ratio: section.ratio,
                cells: row_cells(case, 0..methods.len()),
            }),
        }

        groups.push(RowGroup {
            prompt: Some(annotations.prompt(case, i + 1)),
            play_button: section.play_button,
            rows,
        });
    }

    Ok(groups)
}

/// Lay out the page, render it, and write it to `path` in one go
///
/// The file is overwritten. Video paths are relative to the folder holding
/// the page. Returns the gallery so callers can report on it.
pub fn generate<P: AsRef<Path>, R: AsRef<Path>>(
    path: P,
    page: &PageConfig,
    root: R,
    annotations: &Annotations,
) -> io::Result<Gallery> {
    let path = path.as_ref();
    let root = root.as_ref();
    let mut file = std::fs::File::create(path)?;
    let gallery = layout(page, root, &link_root(path, root), annotations);
    html::write(&mut file, &gallery)?;
    Ok(gallery)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(dir: &Path, names: &[&str]) {
        fs::create_dir_all(dir).unwrap();
        for name in names {
            fs::write(dir.join(name), b"").unwrap();
        }
    }

    fn grid_section(folder: &str, per_row: usize) -> SectionConfig {
        SectionConfig {
            title: format!("{} videos", folder),
            description: String::new(),
            folder: folder.to_string(),
            class: None,
            ratio: VideoRatio::Fixed,
            play_button: true,
            layout: Layout::Grid { videos_per_row: per_row },
        }
    }

    fn comparison_section(folder: &str, methods: &[(&str, &str)], split: Option<SplitRows>) -> SectionConfig {
        SectionConfig {
            title: format!("{} comparison", folder),
            description: String::new(),
            folder: folder.to_string(),
            class: None,
            ratio: VideoRatio::Square,
            play_button: true,
            layout: Layout::Comparison {
                methods: methods.iter().map(|(f, n)| MethodConfig::new(f, n)).collect(),
                split,
            },
        }
    }

    fn page(sections: Vec<SectionConfig>) -> PageConfig {
        PageConfig {
            document_title: "Doc".to_string(),
            title: "Title".to_string(),
            introduction: String::new(),
            video_extension: "mp4".to_string(),
            sections,
        }
    }

    // ==========================================================================
    // CHUNKING
    // ==========================================================================

    #[test]
    fn test_chunk_thirteen_by_six() {
        let items: Vec<u32> = (0..13).collect();
        let sizes: Vec<usize> = chunk_rows(&items, 6).iter().map(|r| r.len()).collect();
        assert_eq!(sizes, vec![6, 6, 1]);
    }

    #[test]
    fn test_chunk_exact_multiple() {
        let items = [1, 2, 3, 4];
        let sizes: Vec<usize> = chunk_rows(&items, 2).iter().map(|r| r.len()).collect();
        assert_eq!(sizes, vec![2, 2]);
    }

    #[test]
    fn test_chunk_zero_width_is_one() {
        let items = ["a", "b"];
        assert_eq!(chunk_rows(&items, 0).len(), 2);
    }

    #[test]
    fn test_grid_section_rows_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let names: Vec<String> = (0..13).map(|i| format!("clip{:02}.mp4", i)).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        touch(&dir.path().join("results"), &refs);

        let g = build(&page(vec![grid_section("results", 6)]), dir.path(), &Annotations::new());
        let sizes: Vec<usize> = g.sections[0].rows().map(|r| r.cells.len()).collect();
        assert_eq!(sizes, vec![6, 6, 1]);
        assert_eq!(g.video_count(), 13);
    }

    // ==========================================================================
    // ROW IDENTIFIERS
    // ==========================================================================

    #[test]
    fn test_slug() {
        assert_eq!(slug("non-human"), "non-human");
        assert_eq!(slug("Demo Videos"), "demo-videos");
        assert_eq!(slug("SG_I2V..v2"), "sg-i2v-v2");
        assert_eq!(slug("***"), "section");
    }

    #[test]
    fn test_row_ids_unique_across_sections() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("a"), &["1.mp4", "2.mp4", "3.mp4"]);
        touch(&dir.path().join("b").join("m1"), &["x.mp4", "y.mp4"]);
        touch(&dir.path().join("b").join("m2"), &["y.mp4"]);

        let cfg = page(vec![
            grid_section("a", 1),
            comparison_section(
                "b",
                &[("m1", "M1"), ("m2", "M2")],
                Some(SplitRows { leading: 1, leading_ratio: VideoRatio::Square, trailing_ratio: VideoRatio::Portrait }),
            ),
        ]);
        let g = build(&cfg, dir.path(), &Annotations::new());

        let ids: Vec<&str> = g.sections.iter().flat_map(|s| s.rows()).map(|r| r.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["row-a-1", "row-a-2", "row-a-3", "row-b-4", "row-b-5", "row-b-6", "row-b-7"]
        );
    }

    // ==========================================================================
    // COMPARISON LAYOUT
    // ==========================================================================
    //
    // Every case any method produced gets a row. Cells follow method order,
    // and a method without output for the case gets a labelled placeholder.
    // ==========================================================================

    #[test]
    fn test_comparison_union_and_placeholders() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("cmp").join("A"), &["x.mp4", "y.mp4"]);
        touch(&dir.path().join("cmp").join("B"), &["y.mp4", "z.mp4"]);

        let cfg = page(vec![comparison_section("cmp", &[("A", "Alpha"), ("B", "Beta")], None)]);
        let g = build(&cfg, dir.path(), &Annotations::new());
        let section = &g.sections[0];

        let prompts: Vec<_> = section.groups.iter().map(|grp| grp.prompt.clone().unwrap()).collect();
        assert_eq!(prompts, vec!["Case 1", "Case 2", "Case 3"]);

        let x = &section.groups[0].rows[0].cells;
        assert!(!x[0].is_placeholder());
        assert_eq!(x[1], Cell::Placeholder { label: "Beta".to_string() });

        let y = &section.groups[1].rows[0].cells;
        assert!(y.iter().all(|c| !c.is_placeholder()));

        let z = &section.groups[2].rows[0].cells;
        assert_eq!(z[0], Cell::Placeholder { label: "Alpha".to_string() });
        assert_eq!(g.placeholder_count(), 2);
    }

    #[test]
    fn test_comparison_cells_carry_method_labels_and_paths() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("cmp").join("gt"), &["caseA.mp4"]);

        let cfg = page(vec![comparison_section("cmp", &[("gt", "GT")], None)]);
        let g = build(&cfg, dir.path(), &Annotations::new());

        match &g.sections[0].groups[0].rows[0].cells[0] {
            Cell::Video { src, mime, caption } => {
                assert!(src.ends_with("cmp/gt/caseA.mp4"), "unexpected src {}", src);
                assert_eq!(*mime, "video/mp4");
                assert_eq!(caption, "GT");
            }
            other => panic!("expected a video cell, got {:?}", other),
        }
    }

    #[test]
    fn test_comparison_prompt_uses_annotation() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("cmp").join("A"), &["a.mp4", "b.mp4"]);

        let mut annotations = Annotations::new();
        annotations.insert("b", "Second clip");
        let cfg = page(vec![comparison_section("cmp", &[("A", "A")], None)]);
        let g = build(&cfg, dir.path(), &annotations);

        let prompts: Vec<_> = g.sections[0].groups.iter().map(|grp| grp.prompt.clone().unwrap()).collect();
        assert_eq!(prompts, vec!["Case 1", "Second clip"]);
    }

    #[test]
    fn test_split_rows_share_one_group() {
        let dir = tempfile::tempdir().unwrap();
        for m in ["gt", "pose", "ours", "b1", "b2", "b3"] {
            touch(&dir.path().join("nh").join(m), &["cat.mp4"]);
        }

        let cfg = page(vec![comparison_section(
            "nh",
            &[("gt", "GT"), ("pose", "Pose"), ("ours", "Ours"), ("b1", "B1"), ("b2", "B2"), ("b3", "B3")],
            Some(SplitRows { leading: 2, leading_ratio: VideoRatio::Portrait, trailing_ratio: VideoRatio::Square }),
        )]);
        let g = build(&cfg, dir.path(), &Annotations::new());
        let group = &g.sections[0].groups[0];

        assert_eq!(group.rows.len(), 2);
        assert_eq!(group.rows[0].kind, RowKind::Leading);
        assert_eq!(group.rows[0].ratio, VideoRatio::Portrait);
        let leading: Vec<&str> = group.rows[0].cells.iter().map(Cell::label).collect();
        assert_eq!(leading, vec!["GT", "Pose"]);

        assert_eq!(group.rows[1].kind, RowKind::Trailing);
        assert_eq!(group.rows[1].ratio, VideoRatio::Square);
        let trailing: Vec<&str> = group.rows[1].cells.iter().map(Cell::label).collect();
        assert_eq!(trailing, vec!["Ours", "B1", "B2", "B3"]);
    }

    #[test]
    fn test_split_wider_than_methods_has_no_trailing_row() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("s").join("a"), &["c.mp4"]);

        let cfg = page(vec![comparison_section(
            "s",
            &[("a", "A")],
            Some(SplitRows { leading: 2, leading_ratio: VideoRatio::Fixed, trailing_ratio: VideoRatio::Fixed }),
        )]);
        let g = build(&cfg, dir.path(), &Annotations::new());
        assert_eq!(g.sections[0].groups[0].rows.len(), 1);
    }

    #[test]
    fn test_split_with_no_leading_methods_has_no_leading_row() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("s").join("a"), &["c.mp4"]);
        touch(&dir.path().join("s").join("b"), &["c.mp4"]);

        let cfg = page(vec![comparison_section(
            "s",
            &[("a", "A"), ("b", "B")],
            Some(SplitRows { leading: 0, leading_ratio: VideoRatio::Fixed, trailing_ratio: VideoRatio::Square }),
        )]);
        let g = build(&cfg, dir.path(), &Annotations::new());
        let group = &g.sections[0].groups[0];

        assert_eq!(group.rows.len(), 1);
        assert_eq!(group.rows[0].kind, RowKind::Trailing);
        assert_eq!(group.rows[0].cells.len(), 2);
        assert_eq!(group.row_ids(), vec!["row-s-1"]);
    }

    #[test]
    fn test_resolve_cell_falls_back_to_other_extension() {
        let dir = tempfile::tempdir().unwrap();
        let method_dir = dir.path().join("m");
        touch(&method_dir, &["clip.webm"]);
        let files = discover::video_files(&method_dir);

        let cell = resolve_cell(&method_dir, &files, "clip", &MethodConfig::new("m", "M"), "mp4");
        match cell {
            Cell::Video { src, mime, .. } => {
                assert!(src.ends_with("m/clip.webm"));
                assert_eq!(mime, "video/webm");
            }
            other => panic!("expected a video cell, got {:?}", other),
        }
    }

    // ==========================================================================
    // SECTION SKIPPING
    // ==========================================================================

    #[test]
    fn test_skip_reasons() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("empty")).unwrap();
        fs::create_dir_all(dir.path().join("cmp").join("A")).unwrap();

        let cfg = page(vec![
            grid_section("absent", 4),
            grid_section("empty", 4),
            comparison_section("cmp", &[], None),
            comparison_section("cmp", &[("A", "A")], None),
        ]);
        let g = build(&cfg, dir.path(), &Annotations::new());

        assert!(g.sections.is_empty());
        let reasons: Vec<&SkipReason> = g.skipped.iter().map(|s| &s.reason).collect();
        assert_eq!(
            reasons,
            vec![
                &SkipReason::MissingDirectory(dir.path().join("absent")),
                &SkipReason::NoVideos,
                &SkipReason::NoMethods,
                &SkipReason::NoCases,
            ]
        );
        assert!(g.skipped[2].reason.is_author_error());
        assert!(!g.skipped[0].reason.is_author_error());
    }

    #[test]
    fn test_grid_captions_follow_annotations() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("demo"), &["intro.mp4", "outro.mp4"]);

        let mut annotations = Annotations::new();
        annotations.insert("outro", "Closing remarks");
        let g = build(&page(vec![grid_section("demo", 6)]), dir.path(), &annotations);

        let captions: Vec<&str> = g.sections[0].cells().map(Cell::label).collect();
        assert_eq!(captions, vec!["intro", "Closing remarks"]);
    }

    // ==========================================================================
    // VIDEO LINKS
    // ==========================================================================
    //
    // The page is opened from wherever it was written, so every src must
    // resolve from the page's own folder, not from the working directory.
    // ==========================================================================

    #[test]
    fn test_relative_path() {
        assert_eq!(relative_path(Path::new("/a/b/c"), Path::new("/a/d")), PathBuf::from("../b/c"));
        assert_eq!(relative_path(Path::new("/a/b"), Path::new("/a/b")), PathBuf::new());
        assert_eq!(relative_path(Path::new("/a/b/c"), Path::new("/a")), PathBuf::from("b/c"));
        assert_eq!(relative_path(Path::new("/a"), Path::new("/a/x/y")), PathBuf::from("../.."));
    }

    #[test]
    fn test_generate_links_resolve_from_page_folder() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("pose");
        touch(&root.join("demo"), &["intro.mp4"]);
        touch(&root.join("cmp").join("gt"), &["caseA.mp4"]);
        let site = dir.path().join("site");
        fs::create_dir_all(&site).unwrap();
        let out = site.join("page.html");

        let cfg = page(vec![grid_section("demo", 1), comparison_section("cmp", &[("gt", "GT")], None)]);
        let g = generate(&out, &cfg, &root, &Annotations::new()).unwrap();

        let srcs: Vec<&str> = g
            .sections
            .iter()
            .flat_map(|s| s.cells())
            .filter_map(|c| match c {
                Cell::Video { src, .. } => Some(src.as_str()),
                Cell::Placeholder { .. } => None,
            })
            .collect();
        assert_eq!(srcs, vec!["../pose/demo/intro.mp4", "../pose/cmp/gt/caseA.mp4"]);
        for src in &srcs {
            assert!(site.join(src).exists(), "{} does not resolve from the page", src);
        }

        let written = fs::read_to_string(&out).unwrap();
        assert!(written.contains("src=\"../pose/demo/intro.mp4\""));
    }

    #[test]
    fn test_generate_page_inside_root() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("demo"), &["intro.mp4"]);
        let out = dir.path().join("index.html");

        let g = generate(&out, &page(vec![grid_section("demo", 1)]), dir.path(), &Annotations::new()).unwrap();
        let cells: Vec<&Cell> = g.sections[0].cells().collect();
        match cells[0] {
            Cell::Video { src, .. } => assert_eq!(src, "demo/intro.mp4"),
            other => panic!("expected a video cell, got {:?}", other),
        }
    }

    #[test]
    fn test_generate_overwrites_output() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("videos").join("demo"), &["intro.mp4"]);
        let out = dir.path().join("page.html");
        fs::write(&out, "stale content that is much longer than nothing at all ".repeat(500)).unwrap();

        let cfg = page(vec![grid_section("demo", 1)]);
        let g = generate(&out, &cfg, dir.path().join("videos"), &Annotations::new()).unwrap();

        let written = fs::read_to_string(&out).unwrap();
        assert!(!written.contains("stale content"));
        assert!(written.starts_with("<!DOCTYPE html>"));
        assert_eq!(g.video_count(), 1);
    }
}
