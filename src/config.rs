//! Page and section descriptors
//!
//! A page is an ordered list of sections. Each section points at one folder
//! under the videos root and picks a layout:
//!
//! - **Grid**: the folder's videos chunked into rows of a fixed width
//! - **Comparison**: one row per case, one cell per method subfolder
//!
//! The built-in [`PageConfig::default`] is the PoseAnything supplementary
//! page. Any other page can be described in JSON and loaded with [`load`].

use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;

/// Extension used when rebuilding a case's expected file name
pub const DEFAULT_VIDEO_EXTENSION: &str = "mp4";

/// Visual aspect treatment of a video element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VideoRatio {
    /// 2:3 box, letterboxed
    #[default]
    Fixed,
    /// Full width, natural height
    Auto,
    /// 1:1 box
    Square,
    /// 16:9 box
    Portrait,
    /// Natural size, capped at the container width
    Original,
}

impl VideoRatio {
    pub fn css_class(self) -> &'static str {
        match self {
            VideoRatio::Fixed => "video-fixed-ratio",
            VideoRatio::Auto => "video-auto-ratio",
            VideoRatio::Square => "video-square-ratio",
            VideoRatio::Portrait => "video-portrait-ratio",
            VideoRatio::Original => "video-original-size",
        }
    }
}

/// One competing method in a comparison section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodConfig {
    /// Subfolder under the section folder
    pub folder: String,
    /// Label shown under each of this method's cells
    pub name: String,
}

impl MethodConfig {
    pub fn new(folder: &str, name: &str) -> Self {
        Self {
            folder: folder.to_string(),
            name: name.to_string(),
        }
    }
}

/// Splits a comparison row into a leading and a trailing sub-row that share
/// one play button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitRows {
    /// Number of methods in the leading sub-row
    pub leading: usize,
    #[serde(default)]
    pub leading_ratio: VideoRatio,
    #[serde(default)]
    pub trailing_ratio: VideoRatio,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Layout {
    Grid {
        #[serde(default = "default_videos_per_row")]
        videos_per_row: usize,
    },
    Comparison {
        #[serde(default)]
        methods: Vec<MethodConfig>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        split: Option<SplitRows>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionConfig {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Folder under the videos root
    pub folder: String,
    /// Extra CSS class on the section container
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(default)]
    pub ratio: VideoRatio,
    #[serde(default = "default_true")]
    pub play_button: bool,
    pub layout: Layout,
}

impl SectionConfig {
    pub fn is_comparison(&self) -> bool {
        matches!(self.layout, Layout::Comparison { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Contents of the `<title>` element
    #[serde(default = "default_document_title")]
    pub document_title: String,
    /// Page heading
    pub title: String,
    #[serde(default)]
    pub introduction: String,
    /// Extension tried first when resolving a case's file for a method
    #[serde(default = "default_video_extension")]
    pub video_extension: String,
    pub sections: Vec<SectionConfig>,
}

fn default_videos_per_row() -> usize { 6 }
fn default_true() -> bool { true }
fn default_document_title() -> String { "Supplementary Materials".to_string() }
fn default_video_extension() -> String { DEFAULT_VIDEO_EXTENSION.to_string() }

const POSE_ANYTHING_TITLE: &str =
    "PoseAnything: Universal Pose-guided Video Generation with Part-aware Temporal Coherence";

const POSE_ANYTHING_INTRO: &str = "On this page, we present a demo video and detailed comparative results showcasing the performance of our method against state-of-the-art controllable video generation approaches. We conduct the comparative experiments on data from two distinct domains: human and non-human, highlighting our model's generalization across diverse subject categories.";

const HUMAN_DESCRIPTION: &str = "This section provides comparison with state-of-the-art methods on human data. Each row corresponds to a single test case with same input. Our model achieves excellent continuity in motion, consistent appearance, and stable background, while current SOTA methods show distortion in key areas like the hands and face.";

const NON_HUMAN_DESCRIPTION: &str = "This section provides comparison with state-of-the-art methods on non-human data. Each row corresponds to a single test case. Since ATI, SG-I2V, and Tora are trajectory-guided video generation methods, we manually constructed the input control information for Tora and SG-I2V, and utilized ATI's self-proposed control information extraction mechanism for its input. Furthermore, given that the default generation frame count of SG-I2V and Tora are less than the default 81, used by our PoseAnything and ATI methods, we align the frame count of all videos to 81 frames by duplicating the last frame to ensure a intuitive comparison. The results indicate that our PoseAnything model demonstrates a significant advantage in precise pose control, whereas competing methods struggle to achieve frame-level pose alignment and tend to generate hallucinations during large-range motion synthesis.";

impl Default for PageConfig {
    /// The PoseAnything supplementary page
    fn default() -> Self {
        Self {
            document_title: default_document_title(),
            title: POSE_ANYTHING_TITLE.to_string(),
            introduction: POSE_ANYTHING_INTRO.to_string(),
            video_extension: default_video_extension(),
            sections: vec![
                SectionConfig {
                    title: "Demo Video".to_string(),
                    description: String::new(),
                    folder: "demo".to_string(),
                    class: Some("demo-section".to_string()),
                    ratio: VideoRatio::Original,
                    play_button: false,
                    layout: Layout::Grid { videos_per_row: 1 },
                },
                SectionConfig {
                    title: "Human Data Comparison".to_string(),
                    description: HUMAN_DESCRIPTION.to_string(),
                    folder: "tiktok".to_string(),
                    class: None,
                    ratio: VideoRatio::Square,
                    play_button: true,
                    layout: Layout::Comparison {
                        methods: vec![
                            MethodConfig::new("gt", "GT"),
                            MethodConfig::new("skeleton", "Pose"),
                            MethodConfig::new("Ours", "Ours"),
                            MethodConfig::new("Unianimate", "UniAnimate"),
                            MethodConfig::new("Animate-X", "Animate-X"),
                            MethodConfig::new("magicpose", "MagicPose"),
                        ],
                        split: None,
                    },
                },
                SectionConfig {
                    title: "Non-Human Data Comparison".to_string(),
                    description: NON_HUMAN_DESCRIPTION.to_string(),
                    folder: "non-human".to_string(),
                    class: Some("non-human-section".to_string()),
                    ratio: VideoRatio::Portrait,
                    play_button: true,
                    layout: Layout::Comparison {
                        methods: vec![
                            MethodConfig::new("gt", "GT"),
                            MethodConfig::new("skeleton", "Pose"),
                            MethodConfig::new("ours", "Ours"),
                            MethodConfig::new("ATI", "ATI"),
                            MethodConfig::new("SG-I2V", "SG-I2V"),
                            MethodConfig::new("tora", "Tora"),
                        ],
                        split: Some(SplitRows {
                            leading: 2,
                            leading_ratio: VideoRatio::Portrait,
                            trailing_ratio: VideoRatio::Portrait,
                        }),
                    },
                },
            ],
        }
    }
}

/// Load a page description from a JSON file
pub fn load<P: AsRef<Path>>(path: P) -> io::Result<PageConfig> {
    let text = std::fs::read_to_string(path)?;
    serde_json::from_str(&text).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
