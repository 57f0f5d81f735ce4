use crate::logging::LogLevel;

pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.8;
pub const DEFAULT_COUNTER_DURATION_MS: u32 = 2_000;
pub const DEFAULT_COUNTER_STEPS: u32 = 60;
pub const DEFAULT_NAV_SCROLLED_OFFSET_PX: f64 = 20.0;
pub const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const REVEAL_THRESHOLD_BOUNDS: (f64, f64) = (0.05, 1.0);
const COUNTER_DURATION_MS_BOUNDS: (u32, u32) = (100, 20_000);
const COUNTER_STEPS_BOUNDS: (u32, u32) = (1, 600);
const NAV_SCROLLED_OFFSET_PX_BOUNDS: (f64, f64) = (0.0, 1_000.0);

// About one frame at 60 Hz. Step counts are capped so no step is shorter.
const MIN_COUNTER_INTERVAL_MS: u32 = 16;

/// Tunables for the page behavior, overridable from the page URL's query
/// string.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub reveal_threshold: f64,
    pub counter_duration_ms: u32,
    pub counter_steps: u32,
    pub nav_scrolled_offset_px: f64,
    pub log_level: LogLevel,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            counter_duration_ms: DEFAULT_COUNTER_DURATION_MS,
            counter_steps: DEFAULT_COUNTER_STEPS,
            nav_scrolled_offset_px: DEFAULT_NAV_SCROLLED_OFFSET_PX,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl SiteConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let counter_duration_ms = parse_u32_with_bounds(
            &lookup,
            "counter_duration_ms",
            DEFAULT_COUNTER_DURATION_MS,
            COUNTER_DURATION_MS_BOUNDS,
        );
        let counter_steps = parse_u32_with_bounds(
            &lookup,
            "counter_steps",
            DEFAULT_COUNTER_STEPS,
            COUNTER_STEPS_BOUNDS,
        )
        .min(counter_duration_ms / MIN_COUNTER_INTERVAL_MS)
        .max(1);

        Self {
            reveal_threshold: parse_f64_with_bounds(
                &lookup,
                "reveal_threshold",
                DEFAULT_REVEAL_THRESHOLD,
                REVEAL_THRESHOLD_BOUNDS,
            ),
            counter_duration_ms,
            counter_steps,
            nav_scrolled_offset_px: parse_f64_with_bounds(
                &lookup,
                "nav_scrolled_offset_px",
                DEFAULT_NAV_SCROLLED_OFFSET_PX,
                NAV_SCROLLED_OFFSET_PX_BOUNDS,
            ),
            log_level: parse_log_level(&lookup, "log_level", DEFAULT_LOG_LEVEL),
        }
    }

    /// Reads overrides from the query string of `href`, e.g.
    /// `https://host/?reveal_threshold=0.6&log_level=debug`.
    pub fn from_page_url(href: &str) -> Self {
        let Ok(parsed) = url::Url::parse(href) else {
            return Self::default();
        };
        let pairs: Vec<(String, String)> = parsed.query_pairs().into_owned().collect();

        Self::from_lookup(|name| {
            pairs
                .iter()
                .rev()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.clone())
        })
    }

    pub fn counter_interval_ms(&self) -> u32 {
        (self.counter_duration_ms / self.counter_steps.max(1)).max(1)
    }
}

fn parse_non_empty_string(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_u32_with_bounds(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: u32,
    bounds: (u32, u32),
) -> u32 {
    parse_non_empty_string(lookup, name)
        .and_then(|value| value.parse::<u32>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_f64_with_bounds(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: f64,
    bounds: (f64, f64),
) -> f64 {
    parse_non_empty_string(lookup, name)
        .and_then(|value| value.parse::<f64>().ok())
        .filter(|value| value.is_finite() && (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_log_level(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: LogLevel,
) -> LogLevel {
    parse_non_empty_string(lookup, name)
        .and_then(|value| LogLevel::parse(&value))
        .unwrap_or(default)
}
