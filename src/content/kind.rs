//! Content kind discriminator.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of component kinds a blueprint can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentKind {
    /// Lead news story.
    Headline,
    /// Secondary article.
    Secondary,
    /// One-line link to an article.
    QuickLink,
    /// Trending repository card.
    GitRepo,
    /// Stock ticker.
    Stock,
    /// Decorative brand mark, seated on a fixed anchor.
    Branding,
    /// Day-number badge.
    Day,
    /// Single-cell decorative filler.
    Bit,
}

impl ContentKind {
    /// Every kind, in declaration order.
    pub const ALL: [ContentKind; 8] = [
        ContentKind::Headline,
        ContentKind::Secondary,
        ContentKind::QuickLink,
        ContentKind::GitRepo,
        ContentKind::Stock,
        ContentKind::Branding,
        ContentKind::Day,
        ContentKind::Bit,
    ];

    /// Wire name used in blueprints.
    pub fn as_str(self) -> &'static str {
        match self {
            ContentKind::Headline => "headline",
            ContentKind::Secondary => "secondary",
            ContentKind::QuickLink => "quickLink",
            ContentKind::GitRepo => "gitRepo",
            ContentKind::Stock => "stock",
            ContentKind::Branding => "branding",
            ContentKind::Day => "day",
            ContentKind::Bit => "bit",
        }
    }

    /// Whether the renderer should make this component a link.
    pub fn is_clickable(self) -> bool {
        matches!(
            self,
            ContentKind::Headline
                | ContentKind::Secondary
                | ContentKind::QuickLink
                | ContentKind::GitRepo
        )
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = String;

    /// Parses a wire name. Legacy snake_case spellings are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "headline" => Ok(ContentKind::Headline),
            "secondary" => Ok(ContentKind::Secondary),
            "quickLink" | "quick_link" => Ok(ContentKind::QuickLink),
            "gitRepo" | "git_repo" | "github_repo" => Ok(ContentKind::GitRepo),
            "stock" => Ok(ContentKind::Stock),
            "branding" => Ok(ContentKind::Branding),
            "day" | "dayNumber" | "day_number" => Ok(ContentKind::Day),
            "bit" | "filler" => Ok(ContentKind::Bit),
            other => Err(format!("unrecognized content type `{other}`")),
        }
    }
}
