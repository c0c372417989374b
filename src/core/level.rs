//! Severity level definitions

use colored::Color;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[derive(Default)]
pub enum Level {
    Trace = 0,
    #[default]
    Debug = 1,
    Info = 2,
    Notice = 3,
    Warn = 4,
    Error = 5,
    Fatal = 6,
    /// Threshold-only sentinel, numerically above every real rank.
    /// `Logger::set_level(Level::Off)` suppresses all output; no emission
    /// operation exists for it.
    Off = 10,
}

/// Label text and color for one real rank.
pub(crate) struct LevelStyle {
    pub label: &'static str,
    pub color: Color,
    /// Render the color as a background instead of a foreground.
    pub background: bool,
}

/// One entry per real rank, indexed by discriminant in enumeration order.
/// `Off` deliberately has no entry.
pub(crate) const LEVEL_STYLES: [LevelStyle; 7] = [
    LevelStyle { label: "TRACE", color: Color::Cyan, background: false },
    LevelStyle { label: "DEBUG", color: Color::Blue, background: false },
    LevelStyle { label: "INFO", color: Color::Green, background: false },
    LevelStyle { label: "NOTICE", color: Color::Magenta, background: false },
    LevelStyle { label: "WARN", color: Color::Yellow, background: false },
    LevelStyle { label: "ERROR", color: Color::Red, background: false },
    LevelStyle { label: "FATAL", color: Color::Red, background: true },
];

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self.style() {
            Some(style) => style.label,
            None => "OFF",
        }
    }

    pub(crate) fn style(&self) -> Option<&'static LevelStyle> {
        LEVEL_STYLES.get(*self as usize)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "TRACE" => Ok(Level::Trace),
            "DEBUG" => Ok(Level::Debug),
            "INFO" => Ok(Level::Info),
            "NOTICE" => Ok(Level::Notice),
            "WARN" | "WARNING" => Ok(Level::Warn),
            "ERROR" => Ok(Level::Error),
            "FATAL" => Ok(Level::Fatal),
            "OFF" => Ok(Level::Off),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REAL_LEVELS: [Level; 7] = [
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Notice,
        Level::Warn,
        Level::Error,
        Level::Fatal,
    ];

    #[test]
    fn style_table_matches_enum_order() {
        assert_eq!(LEVEL_STYLES.len(), REAL_LEVELS.len());
        for (index, level) in REAL_LEVELS.iter().enumerate() {
            assert_eq!(*level as usize, index);
            assert_eq!(LEVEL_STYLES[index].label, level.as_str());
        }
    }

    #[test]
    fn off_is_above_every_real_rank() {
        for level in REAL_LEVELS {
            assert!(level < Level::Off);
        }
        assert!(Level::Off.style().is_none());
        assert_eq!(Level::Off.as_str(), "OFF");
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("notice".parse::<Level>().unwrap(), Level::Notice);
        assert_eq!("WARNING".parse::<Level>().unwrap(), Level::Warn);
        assert_eq!("off".parse::<Level>().unwrap(), Level::Off);
        assert!("verbose".parse::<Level>().is_err());
    }

    #[test]
    fn display_matches_as_str() {
        for level in REAL_LEVELS {
            assert_eq!(format!("{}", level), level.as_str());
        }
    }
}
