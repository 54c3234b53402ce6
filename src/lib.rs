//! vidgallery - side-by-side comparison pages for demo videos
//!
//! vidgallery builds one static HTML page of supplementary videos for a
//! paper. It scans a videos root laid out as one folder per section, lines
//! up the outputs of competing methods by file name, and writes a gallery
//! where every row has a "play all" button.
//!
//! # Layout on disk
//!
//! ```text
//! pose/
//! ├── demo/                 grid section
//! │   └── intro.mp4
//! └── tiktok/               comparison section
//!     ├── gt/caseA.mp4
//!     ├── skeleton/caseA.mp4
//!     ├── Ours/             (no output yet: placeholder cell)
//!     └── Unianimate/caseA.mp4
//! ```
//!
//! # Quick Start
//!
//! ```no_run
//! use vidgallery::{gallery, Annotations, PageConfig};
//!
//! let page = PageConfig::default();
//! let (annotations, _warning) = Annotations::load_or_default("anno.json");
//! let built = gallery::generate("poseanything.html", &page, "pose", &annotations)?;
//!
//! println!("{} rows, {} videos, {} placeholders",
//!     built.row_count(), built.video_count(), built.placeholder_count());
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! # Modules
//!
//! - [`config`]: Page and section descriptors, JSON config files
//! - [`annotations`]: Case captions and their fallbacks
//! - [`discover`]: Video discovery and case alignment
//! - [`gallery`]: Row layout, cell resolution, and HTML output

pub mod annotations;
pub mod config;
pub mod discover;
pub mod gallery;

pub use annotations::Annotations;
pub use config::{Layout, MethodConfig, PageConfig, SectionConfig, SplitRows, VideoRatio};
pub use gallery::{Cell, Gallery, Skipped, SkipReason};
