//! Ordered table of filename extraction rules.
//!
//! The order of [`PatternTable::standard`] is significant: the extractor and
//! the normalizer both walk the rules front to back, and earlier rules win.
//! A year-like season has to be seen before the year, the year before the
//! season, and the season before the episode.

use crate::Result;
use regex::{Captures, Regex};
use std::sync::{Arc, LazyLock};

/// Name of an extraction rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// `S2019E05` style seasons. Group 2 is the year-like season.
    YearAsSeason,
    /// Group 2 is the 4-digit year, group 1 includes optional brackets.
    Year,
    /// Group 1 is the optional `S` plus number, group 2 the number.
    Season,
    /// Group 1 is the two-digit episode number.
    Episode,
    /// Absolute episode numbers as used by anime releases. Group 0 is the span.
    EpisodeAnime,
    /// Group 1 is the bracketed group, group 2 the title before ` -`.
    GroupAnime,
    Audio,
    /// Group 2 is the resolution.
    Resolution,
    /// Group 1 is the source quality.
    Quality,
    Codec,
    /// Trailing `-GROUP`. Group 2 is the group name.
    Group,
    Proper,
    Repack,
    Hardcoded,
    Extended,
    Internal,
}

impl RuleKind {
    /// Whether a match of this rule carries no information for a movie and
    /// must therefore not be stripped from a movie title.
    pub fn ignored_for_movies(self) -> bool {
        matches!(
            self,
            RuleKind::YearAsSeason
                | RuleKind::Season
                | RuleKind::Episode
                | RuleKind::EpisodeAnime
                | RuleKind::GroupAnime
        )
    }

    /// Whether this rule contributes to the technical info block.
    pub fn is_technical(self) -> bool {
        matches!(
            self,
            RuleKind::Resolution | RuleKind::Quality | RuleKind::Codec | RuleKind::Audio
        )
    }

    /// Regular expression source for this rule.
    pub fn pattern(self) -> &'static str {
        match self {
            RuleKind::YearAsSeason => r"(?i)(s((?:19|20)[0-9]{2}))e",
            RuleKind::Year => r"([\[\(]?((?:19|20)[0-9]{2})[\]\)]?)",
            RuleKind::Season => r"(?i)(s?([0-9]{1,2}))[EX]",
            RuleKind::Episode => r"(?i)[EX]([0-9]{2})(?:[^0-9]|$)",
            RuleKind::EpisodeAnime => r"[-_ p.](\d{2})[-_ (v\[](\d{2})?",
            RuleKind::GroupAnime => r"^(\[\w*\])\s(.*)\s-",
            RuleKind::Audio => r"MP3|DD5\.?1|Dual[\- ]Audio|LiNE|DTS|AAC(?:\.?2\.0)?|AC3(?:\.5\.1)?",
            RuleKind::Resolution => r"(?i)(([0-9]{3,4}p))",
            RuleKind::Quality => {
                r"((?:PPV\.)?[HP]DTV|(?:HD)?CAM|B[DR]Rip|(?:HD-?)?TS|(?:PPV )?WEB-?DL(?: DVDRip)?|HDRip|DVDRip|DVDRIP|CamRip|W[EB]BRip|BluRay|DvDScr|hdtv|telesync)"
            }
            RuleKind::Codec => r"(?i)xvid|x264|x265|h265|h\.?264|h\.?265",
            RuleKind::Group => r"(- ?([^-]+(?:-=\{[^-]+-?$)?))$",
            RuleKind::Proper => r"PROPER",
            RuleKind::Repack => r"REPACK",
            RuleKind::Hardcoded => r"HC",
            RuleKind::Extended => r"(EXTENDED(:?.CUT)?)",
            RuleKind::Internal => r"(?i)INTERNAL",
        }
    }
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RuleKind::YearAsSeason => "yearAsSeason",
            RuleKind::Year => "year",
            RuleKind::Season => "season",
            RuleKind::Episode => "episode",
            RuleKind::EpisodeAnime => "episodeAnime",
            RuleKind::GroupAnime => "groupAnime",
            RuleKind::Audio => "audio",
            RuleKind::Resolution => "resolution",
            RuleKind::Quality => "quality",
            RuleKind::Codec => "codec",
            RuleKind::Group => "group",
            RuleKind::Proper => "proper",
            RuleKind::Repack => "repack",
            RuleKind::Hardcoded => "hardcoded",
            RuleKind::Extended => "extended",
            RuleKind::Internal => "internal",
        };
        f.write_str(name)
    }
}

/// Priority order used by the standard table.
pub const STANDARD_ORDER: &[RuleKind] = &[
    RuleKind::YearAsSeason,
    RuleKind::Year,
    RuleKind::Season,
    RuleKind::Episode,
    RuleKind::EpisodeAnime,
    RuleKind::GroupAnime,
    RuleKind::Audio,
    RuleKind::Resolution,
    RuleKind::Quality,
    RuleKind::Codec,
    RuleKind::Group,
    RuleKind::Proper,
    RuleKind::Repack,
    RuleKind::Hardcoded,
    RuleKind::Extended,
    RuleKind::Internal,
];

static STANDARD: LazyLock<Arc<PatternTable>> = LazyLock::new(|| {
    Arc::new(PatternTable::with_order(STANDARD_ORDER).expect("built-in filename patterns must compile"))
});

/// A single named rule.
#[derive(Debug, Clone)]
pub struct Rule {
    pub kind: RuleKind,
    regex: Regex,
}

impl Rule {
    /// Compile the rule for `kind`.
    pub fn new(kind: RuleKind) -> Result<Self> {
        Ok(Self {
            kind,
            regex: Regex::new(kind.pattern())?,
        })
    }

    /// First match with its groups.
    pub fn captures<'h>(&self, haystack: &'h str) -> Option<Captures<'h>> {
        self.regex.captures(haystack)
    }

    /// Byte offset where the first match starts.
    pub fn find_start(&self, haystack: &str) -> Option<usize> {
        self.regex.find(haystack).map(|m| m.start())
    }

    /// Replace every match with a single space.
    pub fn replace_all_with_space(&self, haystack: &str) -> String {
        self.regex.replace_all(haystack, " ").into_owned()
    }
}

/// Ordered list of rules.
///
/// Backed by a `Vec` so evaluation order is exactly the construction order.
#[derive(Debug, Clone)]
pub struct PatternTable {
    rules: Vec<Rule>,
}

impl PatternTable {
    /// The shared table in standard priority order.
    pub fn standard() -> &'static PatternTable {
        &STANDARD
    }

    /// Owned handle to the standard table, for holders that may swap it out.
    pub fn shared() -> Arc<PatternTable> {
        Arc::clone(&STANDARD)
    }

    /// Build a table evaluating rules in the given order.
    pub fn with_order(order: &[RuleKind]) -> Result<Self> {
        let rules = order
            .iter()
            .map(|kind| Rule::new(*kind))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Look a rule up by name.
    pub fn get(&self, kind: RuleKind) -> Option<&Rule> {
        self.rules.iter().find(|r| r.kind == kind)
    }

    /// Names in evaluation order.
    pub fn order(&self) -> Vec<RuleKind> {
        self.rules.iter().map(|r| r.kind).collect()
    }
}
