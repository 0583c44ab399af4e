use std::{collections::HashSet, sync::LazyLock, time::Duration};

use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONTENT_FILE: &str = "portfolio.json";

/// Section id of the hero block; always a valid anchor.
pub const ABOUT_ANCHOR: &str = "about";

/// Longest copy feedback window a browser timer can hold (a signed 32-bit ms count).
pub const MAX_FEEDBACK_MS: u64 = i32::MAX as u64;

pub static PORTFOLIO: LazyLock<Result<Portfolio, ContentError>> = LazyLock::new(load);

#[derive(Embed)]
#[folder = "content"]
pub struct ContentAssets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Content file {0} not found")]
    Missing(String),
    #[error("Couldn't parse content: {0}")]
    Parse(String),
    #[error("Contact {label:?} has nothing to copy")]
    EmptyContactValue { label: String },
    #[error("Copy feedback duration must be above zero")]
    ZeroFeedbackDuration,
    #[error("Copy feedback duration of {ms} ms exceeds the {max} ms limit")]
    FeedbackTooLong { ms: u64, max: u64 },
    #[error("Section id {0:?} is used more than once")]
    DuplicateSection(String),
    #[error("Link {label:?} points at unknown section #{target}")]
    DanglingAnchor { label: String, target: String },
}

/// Accent color of a pill, badge or bullet.
///
/// Each variant maps to complete class names so the stylesheet build can find
/// them in source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorTag {
    #[default]
    Blue,
    Emerald,
    Indigo,
    Sky,
    Slate,
    Orange,
    Pink,
}

impl ColorTag {
    /// Soft background with matching foreground, used for icon badges.
    pub fn badge(self) -> &'static str {
        match self {
            Self::Blue => "bg-blue-50 text-blue-600",
            Self::Emerald => "bg-emerald-50 text-emerald-600",
            Self::Indigo => "bg-indigo-50 text-indigo-600",
            Self::Sky => "bg-sky-50 text-sky-600",
            Self::Slate => "bg-slate-50 text-slate-600",
            Self::Orange => "bg-orange-50 text-orange-600",
            Self::Pink => "bg-pink-50 text-pink-600",
        }
    }

    pub fn hover_border(self) -> &'static str {
        match self {
            Self::Blue => "hover:border-blue-300",
            Self::Emerald => "hover:border-emerald-300",
            Self::Indigo => "hover:border-indigo-300",
            Self::Sky => "hover:border-sky-300",
            Self::Slate => "hover:border-slate-300",
            Self::Orange => "hover:border-orange-300",
            Self::Pink => "hover:border-pink-300",
        }
    }

    pub fn highlight_pill(self) -> &'static str {
        match self {
            Self::Blue => "bg-blue-50 border-blue-200 text-blue-700 ring-2 ring-blue-100 ring-offset-1",
            Self::Emerald => {
                "bg-emerald-50 border-emerald-200 text-emerald-700 ring-2 ring-emerald-100 ring-offset-1"
            }
            Self::Indigo => {
                "bg-indigo-50 border-indigo-200 text-indigo-700 ring-2 ring-indigo-100 ring-offset-1"
            }
            Self::Sky => "bg-sky-50 border-sky-200 text-sky-700 ring-2 ring-sky-100 ring-offset-1",
            Self::Slate => {
                "bg-slate-50 border-slate-200 text-slate-700 ring-2 ring-slate-100 ring-offset-1"
            }
            Self::Orange => {
                "bg-orange-50 border-orange-200 text-orange-700 ring-2 ring-orange-100 ring-offset-1"
            }
            Self::Pink => "bg-pink-50 border-pink-200 text-pink-700 ring-2 ring-pink-100 ring-offset-1",
        }
    }

    /// Foreground for a bare icon; highlighted pills use the deeper shade.
    pub fn icon_text(self, highlight: bool) -> &'static str {
        match (self, highlight) {
            (Self::Blue, true) => "text-blue-600",
            (Self::Blue, false) => "text-blue-500",
            (Self::Emerald, true) => "text-emerald-600",
            (Self::Emerald, false) => "text-emerald-500",
            (Self::Indigo, true) => "text-indigo-600",
            (Self::Indigo, false) => "text-indigo-500",
            (Self::Sky, true) => "text-sky-600",
            (Self::Sky, false) => "text-sky-500",
            (Self::Slate, true) => "text-slate-600",
            (Self::Slate, false) => "text-slate-500",
            (Self::Orange, true) => "text-orange-600",
            (Self::Orange, false) => "text-orange-500",
            (Self::Pink, true) => "text-pink-600",
            (Self::Pink, false) => "text-pink-500",
        }
    }

    pub fn dot(self) -> &'static str {
        match self {
            Self::Blue => "bg-blue-500",
            Self::Emerald => "bg-emerald-500",
            Self::Indigo => "bg-indigo-500",
            Self::Sky => "bg-sky-500",
            Self::Slate => "bg-slate-500",
            Self::Orange => "bg-orange-500",
            Self::Pink => "bg-pink-500",
        }
    }
}

/// Glyphs from the lucide icon font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    BookOpen,
    Car,
    Check,
    Code,
    Copy,
    Cpu,
    Layers,
    MessageCircle,
    Rocket,
    Smartphone,
    Target,
    Terminal,
    Trophy,
    Users,
    Zap,
}

impl Icon {
    pub fn class(self) -> &'static str {
        match self {
            Self::BookOpen => "icon-book-open",
            Self::Car => "icon-car",
            Self::Check => "icon-check",
            Self::Code => "icon-code",
            Self::Copy => "icon-copy",
            Self::Cpu => "icon-cpu",
            Self::Layers => "icon-layers",
            Self::MessageCircle => "icon-message-circle",
            Self::Rocket => "icon-rocket",
            Self::Smartphone => "icon-smartphone",
            Self::Target => "icon-target",
            Self::Terminal => "icon-terminal",
            Self::Trophy => "icon-trophy",
            Self::Users => "icon-users",
            Self::Zap => "icon-zap",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Emphasis {
    #[default]
    None,
    Strong,
    Underline,
}

/// A run of text sharing one emphasis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    pub text: String,
    #[serde(default)]
    pub emphasis: Emphasis,
}

/// A labeled value the visitor can copy with one click.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CopyableEntry {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub color: ColorTag,
    pub icon: Icon,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnchorLink {
    pub label: String,
    pub target: String,
    #[serde(default)]
    pub icon: Option<Icon>,
    #[serde(default)]
    pub primary: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub initial: String,
    pub role: String,
    pub badge: String,
    pub headline: String,
    pub headline_accent: String,
    pub intro: Vec<Vec<TextRun>>,
    pub contacts: Vec<CopyableEntry>,
    #[serde(default)]
    pub calls_to_action: Vec<AnchorLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub text: String,
    pub icon: Icon,
    #[serde(default)]
    pub color: ColorTag,
    #[serde(default)]
    pub highlight: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workflow {
    pub title: String,
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub title: String,
    pub value: String,
    #[serde(default)]
    pub subtext: Option<String>,
    pub icon: Icon,
    #[serde(default)]
    pub delay_ms: u32,
    #[serde(default)]
    pub highlight: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section<T> {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub items: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitItem {
    pub icon: Icon,
    pub title: String,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub text: String,
    #[serde(default)]
    pub color: ColorTag,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceItem {
    pub icon: Icon,
    #[serde(default)]
    pub color: ColorTag,
    pub role: String,
    pub organization: String,
    pub period: String,
    pub summary: Vec<TextRun>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Award {
    pub icon: Icon,
    #[serde(default)]
    pub color: ColorTag,
    pub title: String,
    pub caption: String,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub icon: Icon,
    pub tags: Vec<String>,
    #[serde(default)]
    pub highlight: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSection {
    #[serde(flatten)]
    pub section: Section<Project>,
    /// Tags containing any of these are drawn as featured.
    #[serde(default)]
    pub featured_keywords: Vec<String>,
}

impl ProjectSection {
    pub fn is_featured(&self, tag: &str) -> bool {
        self.featured_keywords.iter().any(|k| tag.contains(k.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Footer {
    pub brand_suffix: String,
    pub tagline: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub copy_feedback_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            copy_feedback_ms: crate::copy::DEFAULT_FEEDBACK.as_millis() as u64,
        }
    }
}

impl Settings {
    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    #[serde(default)]
    pub settings: Settings,
    pub profile: Profile,
    pub nav: Vec<AnchorLink>,
    pub workflow: Workflow,
    pub stats: Vec<Stat>,
    pub fit: Section<FitItem>,
    pub experience: Section<ExperienceItem>,
    pub campus: Section<Award>,
    pub projects: ProjectSection,
    pub footer: Footer,
}

impl Portfolio {
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let portfolio: Self =
            serde_json::from_str(raw).map_err(|e| ContentError::Parse(e.to_string()))?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    pub fn section_ids(&self) -> [&str; 4] {
        [
            self.fit.id.as_str(),
            self.experience.id.as_str(),
            self.campus.id.as_str(),
            self.projects.section.id.as_str(),
        ]
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.settings.copy_feedback_ms == 0 {
            return Err(ContentError::ZeroFeedbackDuration);
        }
        if self.settings.copy_feedback_ms > MAX_FEEDBACK_MS {
            return Err(ContentError::FeedbackTooLong {
                ms: self.settings.copy_feedback_ms,
                max: MAX_FEEDBACK_MS,
            });
        }
        if let Some(entry) = self.profile.contacts.iter().find(|c| c.value.is_empty()) {
            return Err(ContentError::EmptyContactValue {
                label: entry.label.clone(),
            });
        }

        let mut ids = HashSet::from([ABOUT_ANCHOR]);
        for id in self.section_ids() {
            if !ids.insert(id) {
                return Err(ContentError::DuplicateSection(id.to_string()));
            }
        }
        let dangling = self
            .nav
            .iter()
            .chain(self.profile.calls_to_action.iter())
            .find(|link| !ids.contains(link.target.as_str()));
        if let Some(link) = dangling {
            return Err(ContentError::DanglingAnchor {
                label: link.label.clone(),
                target: link.target.clone(),
            });
        }
        Ok(())
    }
}

pub fn load() -> Result<Portfolio, ContentError> {
    let file = ContentAssets::get(CONTENT_FILE)
        .ok_or_else(|| ContentError::Missing(CONTENT_FILE.to_string()))?;
    let raw = std::str::from_utf8(&file.data).map_err(|e| ContentError::Parse(e.to_string()))?;
    Portfolio::from_json(raw)
}

/// The embedded portfolio, parsed and validated on first use.
pub fn portfolio() -> Result<&'static Portfolio, &'static ContentError> {
    PORTFOLIO.as_ref()
}
