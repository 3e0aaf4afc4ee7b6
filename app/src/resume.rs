//! The structured content of the about page.
//!
//! Fields documented as inline HTML are rendered as-is by the layout, the
//! store converts them from inline markdown when it loads a content file.
//! Every other string is rendered as escaped text.

use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct About {
    pub resume: Resume,
    /// Pre-rendered body markup, placed in the layout's body slot.
    pub body_html: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Resume {
    pub author: AuthorProfile,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub activities: Vec<ActivityEntry>,
    #[serde(default)]
    pub education: Vec<EducationRecord>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct AuthorProfile {
    #[serde(default)]
    pub name: String,
    /// No image is rendered when this is `None`.
    pub avatar: Option<String>,
    pub email: String,
    pub linkedin: String,
    pub github: String,
    pub blog: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct ExperienceEntry {
    pub organization: String,
    pub role: String,
    pub period: String,
    /// Inline HTML.
    pub highlight_summary: Option<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub sections: Vec<ExperienceSection>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct ExperienceSection {
    /// Inline HTML.
    pub heading: String,
    #[serde(default)]
    pub bullets: Vec<Bullet>,
}

/// An achievement statement, nested to any depth.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct Bullet {
    /// Inline HTML.
    pub text: String,
    #[serde(default)]
    pub sub_bullets: Vec<Bullet>,
}

impl Bullet {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sub_bullets: vec![],
        }
    }

    pub fn with_sub_bullets(mut self, sub_bullets: Vec<Bullet>) -> Self {
        self.sub_bullets = sub_bullets;
        self
    }
}

/// A flat timeline record, shared by projects and activities.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct TimelineEntry {
    pub title: String,
    pub period: String,
    /// Inline HTML.
    pub summary: Option<String>,
    /// Inline HTML, one item per bullet.
    #[serde(default)]
    pub bullets: Vec<String>,
}

pub type ProjectEntry = TimelineEntry;
pub type ActivityEntry = TimelineEntry;

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct EducationRecord {
    pub institution: String,
    pub period: String,
    pub degree: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    pub density: LayoutDensity,
    pub labels: Labels,
}

/// Presentation presets, they never change which entries are rendered.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LayoutDensity {
    /// Summaries in highlight boxes, tech stacks as tag chips.
    #[default]
    Boxed,
    /// Summaries and tech stacks folded inline.
    Compact,
}

impl LayoutDensity {
    pub fn class(self) -> &'static str {
        match self {
            Self::Boxed => "boxed",
            Self::Compact => "compact",
        }
    }
}

/// Authoring text of the page, opaque to the layout.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Labels {
    pub greeting: Vec<String>,
    pub avatar_alt: String,
    pub blog: String,
    pub experience: String,
    pub projects: String,
    pub activities: String,
    pub education: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            greeting: vec![],
            avatar_alt: String::from("avatar"),
            blog: String::from("Blog"),
            experience: String::from("Work Experience"),
            projects: String::from("Project"),
            activities: String::from("Activity"),
            education: String::from("Education"),
        }
    }
}
