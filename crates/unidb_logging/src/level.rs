use core::fmt;

/// Severity of a message, ordered from most to least severe.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum LogLevel {
    /// The build cannot continue.
    Severe,
    /// A step failed.
    Error,
    /// Input was skipped or a fallback was used.
    Warning,
    Info,
    /// Per-entry details of the source files.
    Verbose,
    Debug,
}

impl LogLevel {
    const NAMES : [&'static str; 6] = ["severe", "error", "warning", "info", "verbose", "debug"];
    const LEVELS : [LogLevel; 6] = [Self::Severe, Self::Error, Self::Warning, Self::Info, Self::Verbose, Self::Debug];

    /// Parse a level from its lowercase name, as used in settings files.
    pub fn from_name(name: &str) -> Option<LogLevel> {
        Self::NAMES.iter().position(|level| *level == name).map(|idx| Self::LEVELS[idx])
    }

    pub fn name(self) -> &'static str {
        Self::NAMES[self as usize]
    }

    fn color(self) -> &'static str {
        match self {
            LogLevel::Severe  => "\x1B[1m\x1B[41m\x1B[30m",
            LogLevel::Error   => "\x1B[91m",
            LogLevel::Warning => "\x1B[93m",
            LogLevel::Info    => "\x1B[37m",
            LogLevel::Verbose => "\x1B[90m",
            LogLevel::Debug   => "\x1B[94m",
        }
    }

    /// Whether messages of this level include the site they were logged from.
    pub(crate) fn shows_site(self) -> bool {
        matches!(self, LogLevel::Severe | LogLevel::Error | LogLevel::Debug)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name().to_ascii_uppercase();
        write!(f, "{}[{name:<7}]\x1B[0m", self.color())
    }
}

/// Category a message belongs to, e.g. `Builder(UCD)`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LogCategory {
    name : &'static str,
    sub  : Option<&'static str>,
}

impl LogCategory {
    pub const fn new(name: &'static str) -> Self {
        Self { name, sub: None }
    }

    pub const fn new_with_sub(name: &'static str, sub: &'static str) -> Self {
        Self { name, sub: Some(sub) }
    }
}

impl fmt::Display for LogCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)?;
        match self.sub {
            Some(sub) => write!(f, "({sub})"),
            None => Ok(()),
        }
    }
}
