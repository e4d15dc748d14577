use std::collections::BTreeMap;
use std::sync::LazyLock;

use rust_embed::Embed;
use serde::Deserialize;
use thiserror::Error;

use crate::typewriter::{TypewriterConfig, TypewriterError};

const PORTFOLIO_FILE: &str = "portfolio.json";

static PORTFOLIO: LazyLock<Result<Portfolio, ContentError>> = LazyLock::new(|| {
    let portfolio = Portfolio::from_embedded();
    if let Err(e) = &portfolio {
        log::error!("failed to load {PORTFOLIO_FILE}: {e}");
    }
    portfolio
});

#[derive(Embed)]
#[folder = "content"]
pub struct ContentAssets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    NotFound(String),
    #[error("content file is not valid UTF-8")]
    Utf8,
    #[error("couldn't parse content: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Portfolio {
    pub personal: Personal,
    #[serde(default)]
    pub hero: HeroContent,
    pub about: About,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub experience: Vec<Job>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub contact: Contact,
}

impl Portfolio {
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        serde_json::from_str(json).map_err(|e| ContentError::Parse(e.to_string()))
    }

    fn from_embedded() -> Result<Self, ContentError> {
        let file = ContentAssets::get(PORTFOLIO_FILE)
            .ok_or_else(|| ContentError::NotFound(PORTFOLIO_FILE.to_string()))?;
        let json = std::str::from_utf8(&file.data).map_err(|_| ContentError::Utf8)?;
        Self::from_json(json)
    }

    /// The embedded site content, parsed once per process.
    pub fn load() -> Result<&'static Portfolio, ContentError> {
        PORTFOLIO.as_ref().map_err(Clone::clone)
    }

    pub fn featured_projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| p.featured)
    }

    pub fn other_projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| !p.featured)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Personal {
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub social: BTreeMap<String, String>,
    #[serde(default)]
    pub resume_url: Option<String>,
}

impl Personal {
    /// Used for the navbar brand.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("Portfolio")
    }

    /// Social links with a non-empty URL on a platform we have an icon for.
    pub fn social_links(&self) -> Vec<(SocialPlatform, &str)> {
        self.social
            .iter()
            .filter(|(_, url)| !url.trim().is_empty())
            .filter_map(|(platform, url)| {
                SocialPlatform::from_key(platform).map(|p| (p, url.as_str()))
            })
            .collect()
    }

    pub fn mailto(&self) -> Option<String> {
        if self.email.is_empty() {
            None
        } else {
            Some(format!("mailto:{}", self.email))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialPlatform {
    Github,
    Linkedin,
    Instagram,
}

impl SocialPlatform {
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_ascii_lowercase().as_str() {
            "github" => Some(Self::Github),
            "linkedin" => Some(Self::Linkedin),
            "instagram" => Some(Self::Instagram),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Github => "GitHub",
            Self::Linkedin => "LinkedIn",
            Self::Instagram => "Instagram",
        }
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            Self::Github => "devicon-github-plain",
            Self::Linkedin => "devicon-linkedin-plain",
            Self::Instagram => "extra-instagram",
        }
    }
}

fn default_roles() -> Vec<String> {
    [
        "Software Engineer",
        "SaaS Hunter",
        "Automation Specialist",
        "Problem Solver",
        "System Architect",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_stats() -> Vec<Stat> {
    [
        ("5+", "Years Experience"),
        ("50+", "Projects Delivered"),
        ("10M+", "Requests Handled"),
    ]
    .into_iter()
    .map(|(value, label)| Stat {
        value: value.to_string(),
        label: label.to_string(),
    })
    .collect()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HeroContent {
    #[serde(default = "default_roles")]
    pub roles: Vec<String>,
    #[serde(default)]
    pub typing: TypingTimings,
    #[serde(default = "default_stats")]
    pub stats: Vec<Stat>,
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            roles: default_roles(),
            typing: TypingTimings::default(),
            stats: default_stats(),
        }
    }
}

impl HeroContent {
    pub fn typewriter_config(&self) -> Result<TypewriterConfig, TypewriterError> {
        TypewriterConfig::from_millis(
            self.roles.iter().cloned(),
            self.typing.typing_ms,
            self.typing.deleting_ms,
            self.typing.pause_ms,
        )
    }
}

/// Millisecond timings for the hero's rotating role text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TypingTimings {
    pub typing_ms: i64,
    pub deleting_ms: i64,
    pub pause_ms: i64,
}

impl Default for TypingTimings {
    fn default() -> Self {
        Self {
            typing_ms: 80,
            deleting_ms: 40,
            pause_ms: 2000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

fn default_tech() -> Vec<String> {
    [".NET", "Python", "Docker", "PostgreSQL", "Redis", "ELK"]
        .into_iter()
        .map(String::from)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct About {
    pub bio: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default = "default_tech")]
    pub tech: Vec<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub passion: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Job {
    pub role: String,
    pub company: String,
    pub period: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub demo: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub heading: String,
    pub message: String,
}

impl Default for Contact {
    fn default() -> Self {
        Self {
            heading: "Let's Connect".to_string(),
            message: "I'm always open to discussing new projects, creative ideas, or opportunities to be part of your vision.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const MINIMAL: &str = r#"{
        "personal": { "name": "Ada Lovelace" },
        "about": { "bio": "Writes programs for engines." }
    }"#;

    #[test]
    fn test_minimal_content_uses_defaults() {
        let portfolio = Portfolio::from_json(MINIMAL).unwrap();
        assert_eq!(portfolio.personal.first_name(), "Ada");
        assert_eq!(portfolio.hero.roles.len(), 5);
        assert_eq!(portfolio.hero.roles[0], "Software Engineer");
        assert_eq!(portfolio.hero.typing, TypingTimings::default());
        assert_eq!(portfolio.hero.stats.len(), 3);
        assert_eq!(portfolio.about.tech.len(), 6);
        assert_eq!(portfolio.contact.heading, "Let's Connect");
        assert!(portfolio.projects.is_empty());
        assert!(portfolio.personal.mailto().is_none());
    }

    #[test]
    fn test_first_name_fallback() {
        let mut portfolio = Portfolio::from_json(MINIMAL).unwrap();
        portfolio.personal.name = "   ".to_string();
        assert_eq!(portfolio.personal.first_name(), "Portfolio");
    }

    #[test]
    fn test_invalid_json() {
        let err = Portfolio::from_json("{ \"personal\": 3 }").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn test_social_links_skip_empty_and_unknown() {
        let json = r#"{
            "personal": {
                "name": "Ada",
                "social": {
                    "github": "https://github.com/ada",
                    "linkedin": "",
                    "myspace": "https://myspace.com/ada",
                    "Instagram": "https://instagram.com/ada"
                }
            },
            "about": { "bio": "" }
        }"#;
        let portfolio = Portfolio::from_json(json).unwrap();
        let links = portfolio.personal.social_links();
        assert_eq!(
            links,
            vec![
                (SocialPlatform::Instagram, "https://instagram.com/ada"),
                (SocialPlatform::Github, "https://github.com/ada"),
            ]
        );
    }

    #[test]
    fn test_typing_timings_to_config() {
        let json = r#"{
            "personal": { "name": "Ada" },
            "hero": { "roles": ["Engineer", "Solver"], "typing": { "typing_ms": 10, "pause_ms": 100 } },
            "about": { "bio": "" }
        }"#;
        let portfolio = Portfolio::from_json(json).unwrap();
        let config = portfolio.hero.typewriter_config().unwrap();
        assert_eq!(config.phrases, vec!["Engineer", "Solver"]);
        assert_eq!(config.typing_interval, Duration::from_millis(10));
        assert_eq!(config.deleting_interval, Duration::from_millis(40));
        assert_eq!(config.pause_duration, Duration::from_millis(100));
    }

    #[test]
    fn test_bad_typing_timings_rejected() {
        let mut hero = HeroContent::default();
        hero.typing.pause_ms = -5;
        assert!(matches!(
            hero.typewriter_config(),
            Err(TypewriterError::InvalidConfig(_))
        ));
        hero.typing.pause_ms = 5;
        hero.roles.clear();
        assert!(hero.typewriter_config().is_err());
    }

    #[test]
    fn test_embedded_portfolio_loads() {
        let portfolio = Portfolio::load().unwrap();
        assert!(!portfolio.personal.name.is_empty());
        assert!(portfolio.hero.typewriter_config().is_ok());
        assert!(portfolio.featured_projects().count() > 0);
        assert_eq!(
            portfolio.featured_projects().count() + portfolio.other_projects().count(),
            portfolio.projects.len()
        );
    }
}
