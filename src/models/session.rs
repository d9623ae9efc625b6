//! Output structures of a successful assembly.
//!
//! A [`SessionPlan`] is built once per assembler call and handed to the
//! caller, which persists or discards it. Nothing here is cached or shared
//! between calls.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::drill::{CoachCustomDrill, DrillRecord, DrillType};

/// Axis-aligned rectangle on the rink surface, in percent of the full sheet.
///
/// Valid layouts cover the intended ice configuration with non-overlapping
/// zones; this holds by construction and is not re-checked at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneArea {
    pub x_start: u32,
    pub y_start: u32,
    pub width: u32,
    pub height: u32,
}

impl ZoneArea {
    pub const fn new(x_start: u32, y_start: u32, width: u32, height: u32) -> Self {
        Self {
            x_start,
            y_start,
            width,
            height,
        }
    }
}

/// Camera/view hint derived from a zone's geometry.
///
/// Drives which illustrative rink backdrop the frontend renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RinkView {
    Full,
    ZoneLeft,
    ZoneRight,
    HalfLeft,
    HalfRight,
    Neutral,
}

impl RinkView {
    pub fn as_str(&self) -> &'static str {
        match self {
            RinkView::Full => "full",
            RinkView::ZoneLeft => "zone-left",
            RinkView::ZoneRight => "zone-right",
            RinkView::HalfLeft => "half-left",
            RinkView::HalfRight => "half-right",
            RinkView::Neutral => "neutral",
        }
    }
}

/// Fixed station color palette, cycled by station index.
pub const ZONE_PALETTE: [&str; 5] = ["#e63946", "#457b9d", "#2a9d8f", "#f4a261", "#9b5de5"];

/// A single element of a canned station diagram (cone, arrow, net, ...),
/// positioned in percent of the zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramElement {
    pub shape: String,
    pub x: u32,
    pub y: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl DiagramElement {
    fn new(shape: &str, x: u32, y: u32, label: Option<&str>) -> Self {
        Self {
            shape: shape.to_string(),
            x,
            y,
            label: label.map(str::to_string),
        }
    }
}

/// The four fixed illustrative diagrams, keyed by the resolved activity kind.
/// These are canned templates, not generated per drill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagramTemplate {
    Warmup,
    Drill,
    Game,
    Finish,
}

impl DiagramTemplate {
    pub fn elements(&self) -> Vec<DiagramElement> {
        match self {
            DiagramTemplate::Warmup => vec![
                DiagramElement::new("path", 10, 50, Some("skating line")),
                DiagramElement::new("arrow", 40, 30, None),
                DiagramElement::new("arrow", 60, 70, None),
                DiagramElement::new("circle", 85, 50, Some("coach")),
            ],
            DiagramTemplate::Drill => vec![
                DiagramElement::new("cone", 25, 30, None),
                DiagramElement::new("cone", 50, 50, None),
                DiagramElement::new("cone", 75, 30, None),
                DiagramElement::new("arrow", 40, 60, None),
                DiagramElement::new("net", 90, 50, None),
            ],
            DiagramTemplate::Game => vec![
                DiagramElement::new("net", 10, 50, None),
                DiagramElement::new("net", 90, 50, None),
                DiagramElement::new("circle", 50, 50, Some("face-off")),
            ],
            DiagramTemplate::Finish => vec![
                DiagramElement::new("circle", 50, 50, Some("group")),
                DiagramElement::new("path", 20, 80, Some("cool-down lap")),
            ],
        }
    }
}

/// Reference to the activity filling a slot: a corpus drill or one of the
/// coach's own drills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum SessionActivity {
    Corpus(DrillRecord),
    Custom(CoachCustomDrill),
}

impl SessionActivity {
    pub fn title(&self) -> &str {
        match self {
            SessionActivity::Corpus(drill) => &drill.title,
            SessionActivity::Custom(drill) => &drill.title,
        }
    }

    /// Resolved activity kind. Custom drills carry no type and resolve to
    /// [`DrillType::Drill`].
    pub fn drill_type(&self) -> DrillType {
        match self {
            SessionActivity::Corpus(drill) => drill.drill_type,
            SessionActivity::Custom(_) => DrillType::Drill,
        }
    }
}

/// One filled slot of an assembled session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationSlot {
    /// 0-based index among the main stations. Warm-up and finish slots
    /// carry 0 here; their position in the plan identifies them.
    pub station_index: usize,
    pub duration_minutes: u32,
    pub activity: SessionActivity,
    pub zone: ZoneArea,
    pub zone_color: String,
    pub rink_view: RinkView,
    pub diagram: Vec<DiagramElement>,
}

/// Where an assembled plan came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssemblySource {
    /// Built locally from the embedded corpus and coach drills.
    LocalCorpus,
    /// Produced by the external generation service (set by the caller on
    /// the fallback path, never by this crate).
    AiGenerated,
}

impl AssemblySource {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssemblySource::LocalCorpus => "local-corpus",
            AssemblySource::AiGenerated => "ai-generated",
        }
    }
}

/// Weight of one requested focus area in the assembled session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillWeight {
    pub focus: String,
    /// Equal split of 100 across the focus areas, rounded per entry; the
    /// sum may drift slightly from 100.
    pub weight: u32,
}

/// Summary data attached to an assembled plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionMetadata {
    /// Effective methodology after profile fallback.
    pub methodology: String,
    /// Effective age category after profile fallback; empty when neither
    /// the request nor the profile supplied one.
    pub age_category: String,
    pub total_duration_minutes: u32,
    pub skill_distribution: Vec<SkillWeight>,
    /// Passed through verbatim from the request.
    pub cognitive_load: Option<String>,
    pub source: AssemblySource,
    pub created_at: DateTime<Utc>,
}

/// A complete assembled training session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionPlan {
    pub warmup: StationSlot,
    pub main: Vec<StationSlot>,
    pub finish: StationSlot,
    pub metadata: SessionMetadata,
}

impl SessionPlan {
    /// All slots in session order: warm-up, main stations, finish.
    pub fn slots(&self) -> impl Iterator<Item = &StationSlot> {
        std::iter::once(&self.warmup)
            .chain(self.main.iter())
            .chain(std::iter::once(&self.finish))
    }
}
