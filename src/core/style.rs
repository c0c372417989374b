//! Styling context for severity labels
//!
//! Colorization is a process-scoped toggle rather than a per-logger one:
//! loggers built with defaults share [`Style::global`], so disabling colors
//! there affects every such logger at once. Callers that need isolation
//! (parallel tests, embedded use) inject their own instance through
//! [`LoggerBuilder::style`](super::logger::LoggerBuilder::style).

use super::level::Level;
use colored::Colorize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

pub struct Style {
    colors: AtomicBool,
}

impl Style {
    #[must_use]
    pub fn new(colors: bool) -> Arc<Self> {
        Arc::new(Self {
            colors: AtomicBool::new(colors),
        })
    }

    /// The process-wide styling context used by default-constructed loggers.
    pub fn global() -> Arc<Style> {
        static GLOBAL: OnceLock<Arc<Style>> = OnceLock::new();
        Arc::clone(GLOBAL.get_or_init(|| Style::new(true)))
    }

    pub fn set_colors(&self, enabled: bool) {
        self.colors.store(enabled, Ordering::Relaxed);
    }

    pub fn colors_enabled(&self) -> bool {
        self.colors.load(Ordering::Relaxed)
    }

    /// Render the label for a rank, colored when enabled.
    ///
    /// `Off` has no style entry and renders as its bare label; emission
    /// operations never pass it here.
    pub fn paint(&self, level: Level) -> String {
        let Some(style) = level.style() else {
            return level.as_str().to_string();
        };
        if !self.colors_enabled() {
            return style.label.to_string();
        }
        let painted = if style.background {
            style.label.on_color(style.color)
        } else {
            style.label.color(style.color)
        };
        painted.to_string()
    }
}
