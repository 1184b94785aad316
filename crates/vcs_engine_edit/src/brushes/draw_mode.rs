use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use vcs_engine::EngineError;

use super::rasterizer::{EllipseBrush, LineBrush, RectangleBrush, ScribbleBrush, ShapeRasterizer};

static SCRIBBLE: ScribbleBrush = ScribbleBrush;
static LINE: LineBrush = LineBrush;
static RECT: RectangleBrush = RectangleBrush { filled: false };
static FILLED_RECT: RectangleBrush = RectangleBrush { filled: true };
static ELLIPSE: EllipseBrush = EllipseBrush { filled: false };
static FILLED_ELLIPSE: EllipseBrush = EllipseBrush { filled: true };

/// The active drawing tool
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawMode {
    /// Freehand, every visited cell is written
    #[default]
    Scribble,
    Line,
    Rect,
    FilledRect,
    /// Outline ellipse, the stroke start is the center
    Ellipse,
    FilledEllipse,
}

impl DrawMode {
    pub const ALL: [DrawMode; 6] = [
        DrawMode::Scribble,
        DrawMode::Line,
        DrawMode::Rect,
        DrawMode::FilledRect,
        DrawMode::Ellipse,
        DrawMode::FilledEllipse,
    ];

    /// The stroke strategy for this mode
    pub fn rasterizer(self) -> &'static dyn ShapeRasterizer {
        match self {
            DrawMode::Scribble => &SCRIBBLE,
            DrawMode::Line => &LINE,
            DrawMode::Rect => &RECT,
            DrawMode::FilledRect => &FILLED_RECT,
            DrawMode::Ellipse => &ELLIPSE,
            DrawMode::FilledEllipse => &FILLED_ELLIPSE,
        }
    }

    /// Shape modes redraw from a frozen snapshot on every move
    pub fn needs_snapshot(self) -> bool {
        self != DrawMode::Scribble
    }

    pub fn name(self) -> &'static str {
        match self {
            DrawMode::Scribble => "scribble",
            DrawMode::Line => "line",
            DrawMode::Rect => "rect",
            DrawMode::FilledRect => "filled_rect",
            DrawMode::Ellipse => "ellipse",
            DrawMode::FilledEllipse => "filled_ellipse",
        }
    }
}

impl fmt::Display for DrawMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DrawMode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        DrawMode::ALL
            .into_iter()
            .find(|mode| mode.name() == normalized)
            .ok_or_else(|| EngineError::UnknownDrawMode { value: s.to_string() })
    }
}
