//! Asset records and the sample library.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Photo extensions the studio accepts.
pub const PHOTO_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];
/// Video extensions the studio accepts.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "avi", "mkv", "webm"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Photo,
    Video,
}

impl AssetKind {
    /// Detect the kind from a filename extension. Unknown extensions are
    /// not assets.
    pub fn from_path(path: &str) -> Option<Self> {
        let ext = Path::new(path).extension()?.to_str()?.to_lowercase();
        if PHOTO_EXTENSIONS.contains(&ext.as_str()) {
            Some(Self::Photo)
        } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            Some(Self::Video)
        } else {
            None
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Photo => write!(f, "photo"),
            Self::Video => write!(f, "video"),
        }
    }
}

/// Processing lifecycle shown in the gallery badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetStatus {
    Pending,
    Processing,
    Done,
    Failed,
}

impl fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Processing => write!(f, "processing"),
            Self::Done => write!(f, "done"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// One library entry: the metadata the inspector edits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub filename: String,
    pub kind: AssetKind,
    pub status: AssetStatus,
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
}

impl Asset {
    pub fn new(id: &str, filename: &str, kind: AssetKind) -> Self {
        Self {
            id: id.to_string(),
            filename: filename.to_string(),
            kind,
            status: AssetStatus::Pending,
            title: String::new(),
            description: String::new(),
            keywords: Vec::new(),
        }
    }
}

/// The demo library the studio opens with.
pub fn sample_library() -> Vec<Asset> {
    vec![
        Asset {
            id: "a-001".to_string(),
            filename: "sunrise_beach.jpg".to_string(),
            kind: AssetKind::Photo,
            status: AssetStatus::Done,
            title: "Golden sunrise over a tropical beach".to_string(),
            description: "Wide shot of waves rolling onto an empty beach at dawn".to_string(),
            keywords: vec![
                "sunrise".to_string(),
                "beach".to_string(),
                "ocean".to_string(),
                "tropical".to_string(),
                "travel".to_string(),
            ],
        },
        Asset {
            id: "a-002".to_string(),
            filename: "city_timelapse.mp4".to_string(),
            kind: AssetKind::Video,
            status: AssetStatus::Done,
            title: "Night city traffic time lapse".to_string(),
            description: "Light trails across a downtown intersection after dark".to_string(),
            keywords: vec![
                "city".to_string(),
                "night".to_string(),
                "traffic".to_string(),
                "time lapse".to_string(),
            ],
        },
        Asset {
            id: "a-003".to_string(),
            filename: "market_vendor.png".to_string(),
            kind: AssetKind::Photo,
            status: AssetStatus::Processing,
            title: String::new(),
            description: String::new(),
            keywords: Vec::new(),
        },
        Asset {
            id: "a-004".to_string(),
            filename: "mountain_drone.mov".to_string(),
            kind: AssetKind::Video,
            status: AssetStatus::Pending,
            title: String::new(),
            description: String::new(),
            keywords: Vec::new(),
        },
        Asset {
            id: "a-005".to_string(),
            filename: "coffee_pour.webp".to_string(),
            kind: AssetKind::Photo,
            status: AssetStatus::Failed,
            title: String::new(),
            description: String::new(),
            keywords: Vec::new(),
        },
    ]
}
