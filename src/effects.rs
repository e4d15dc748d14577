//! View-state helpers behind the page's visual effects.
//!
//! These are the pure halves of the loading screen, navbar, cursor, parallax,
//! reveal and particle effects; the components only feed them browser events.

use std::time::Duration;

use chrono::Datelike;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::content::{About, Personal};

pub const LOADING_TICK: Duration = Duration::from_millis(20);
pub const LOADING_FINISH_DELAY: Duration = Duration::from_millis(500);
const LOADING_STEP: u8 = 2;

pub const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;
pub const MOBILE_BREAKPOINT: f64 = 768.0;
const PARALLAX_STRENGTH: f64 = 20.0;
const TILT_DAMPING: f64 = 20.0;
const TILT_SCALE: f64 = 1.02;

pub const PROJECT_GLOW_SIZE: f64 = 160.0;
pub const SKILL_GLOW_SIZE: f64 = 128.0;

pub const TERMINAL_LINE_INTERVAL: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingTick {
    Progress(u8),
    Finished,
}

/// Loading bar percentage, advanced on a fixed interval.
///
/// Reaches 100 after 50 ticks; the tick after that reports `Finished`, at which
/// point the caller clears its interval and hides the screen after
/// [`LOADING_FINISH_DELAY`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadingProgress {
    percent: u8,
}

impl LoadingProgress {
    pub fn percent(&self) -> u8 {
        self.percent
    }

    pub fn tick(&mut self) -> LoadingTick {
        if self.percent >= 100 {
            return LoadingTick::Finished;
        }
        self.percent = (self.percent + LOADING_STEP).min(100);
        LoadingTick::Progress(self.percent)
    }
}

pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLL_THRESHOLD
}

pub fn is_mobile(viewport_width: f64) -> bool {
    viewport_width < MOBILE_BREAKPOINT
}

/// Offset of the hero's background blobs for a pointer at `(x, y)`.
pub fn parallax_offset(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    (
        (x / width - 0.5) * PARALLAX_STRENGTH,
        (y / height - 0.5) * PARALLAX_STRENGTH,
    )
}

/// `(rotate_x, rotate_y)` in degrees for a project card hovered at `(x, y)`
/// relative to its top-left corner.
pub fn card_tilt(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    let rotate_x = (y - height / 2.0) / TILT_DAMPING;
    let rotate_y = (width / 2.0 - x) / TILT_DAMPING;
    (rotate_x, rotate_y)
}

/// CSS transform for a card tilted by [`card_tilt`]. Untilted cards get no
/// transform at all so they settle back to their layout position.
pub fn tilt_transform(rotate_x: f64, rotate_y: f64) -> String {
    if rotate_x == 0.0 && rotate_y == 0.0 {
        return String::new();
    }
    format!(
        "perspective(1000px) rotateX({rotate_x:.2}deg) rotateY({rotate_y:.2}deg) scale3d({TILT_SCALE}, {TILT_SCALE}, {TILT_SCALE})"
    )
}

/// Top-left corner of a `size` wide glow centred on the cursor at `(x, y)`,
/// both relative to the card.
pub fn glow_origin(x: f64, y: f64, size: f64) -> (f64, f64) {
    (x - size / 2.0, y - size / 2.0)
}

/// Tailwind gradient stops used for a skill category's hover border.
pub fn category_gradient(category: &str) -> &'static str {
    match category {
        "Backend Development" => "from-blue-500 to-cyan-500",
        "Distributed Systems" => "from-purple-500 to-pink-500",
        "Automation & DevOps" => "from-orange-500 to-amber-500",
        "Databases" => "from-green-500 to-emerald-500",
        "Cloud & Infrastructure" => "from-indigo-500 to-violet-500",
        "Tools & Practices" => "from-rose-500 to-red-500",
        _ => "from-primary-500 to-purple-500",
    }
}

/// Whether the custom cursor should grow over the hovered element.
pub fn is_clickable(tag_name: &str, inside_link_or_button: bool, cursor_style: &str) -> bool {
    tag_name.eq_ignore_ascii_case("a")
        || tag_name.eq_ignore_ascii_case("button")
        || inside_link_or_button
        || cursor_style == "pointer"
}

/// Splits a project's tech tags into the ones shown and the overflow count.
pub fn visible_tech(tech: &[String], featured: bool) -> (&[String], usize) {
    let limit = if featured { 5 } else { 4 };
    let shown = &tech[..tech.len().min(limit)];
    (shown, tech.len() - shown.len())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalLine {
    Comment(String),
    Declaration(String),
    Property {
        key: String,
        value: String,
        literal: bool,
    },
    Close,
}

fn quoted(s: &str) -> String {
    format!("{s:?}")
}

/// The "about.js" object literal shown next to the bio.
pub fn terminal_lines(personal: &Personal, about: &About) -> Vec<TerminalLine> {
    let skills = about
        .tech
        .iter()
        .take(3)
        .map(|s| quoted(s))
        .collect::<Vec<_>>()
        .join(", ");
    let property = |key: &str, value: String| TerminalLine::Property {
        key: key.to_string(),
        value,
        literal: false,
    };
    let mut lines = vec![
        TerminalLine::Comment("// About me".to_string()),
        TerminalLine::Declaration("developer".to_string()),
        property("name", quoted(&personal.name)),
    ];
    if !personal.title.is_empty() {
        lines.push(property("title", quoted(&personal.title)));
    }
    if let Some(experience) = &about.experience {
        lines.push(property("experience", quoted(experience)));
    }
    lines.push(property("skills", format!("[{skills}]")));
    if let Some(passion) = &about.passion {
        lines.push(property("passion", quoted(passion)));
    }
    lines.push(TerminalLine::Property {
        key: "available".to_string(),
        value: "true".to_string(),
        literal: true,
    });
    lines.push(TerminalLine::Close);
    lines
}

/// Reveals terminal lines one per tick once the terminal scrolls into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalReveal {
    visible: usize,
    total: usize,
}

impl TerminalReveal {
    pub fn new(total: usize) -> Self {
        Self { visible: 0, total }
    }

    pub fn visible(&self) -> usize {
        self.visible
    }

    pub fn is_done(&self) -> bool {
        self.visible >= self.total
    }

    /// Shows one more line. Returns `false` once everything is visible.
    pub fn tick(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        self.visible += 1;
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub left_pct: f64,
    pub top_pct: f64,
    pub size_px: f64,
    pub delay_ms: u32,
    pub duration_ms: u32,
    pub opacity: f64,
}

/// Lays out `count` background particles.
///
/// Seeded so the server render and the hydrated client agree on every position.
pub fn particle_field(count: usize, seed: u64) -> Vec<Particle> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Particle {
            left_pct: rng.random_range(0.0..100.0),
            top_pct: rng.random_range(0.0..100.0),
            size_px: rng.random_range(1.0..3.0),
            delay_ms: rng.random_range(0..5000),
            duration_ms: rng.random_range(6000..14000),
            opacity: rng.random_range(0.2..0.7),
        })
        .collect()
}

/// Year of an RFC 3339 build timestamp, used for the footer copyright so the
/// server and the browser always render the same value.
pub fn build_year(build_time: &str) -> Option<i32> {
    chrono::DateTime::parse_from_rfc3339(build_time)
        .ok()
        .map(|dt| dt.year())
}
