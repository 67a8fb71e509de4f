use core::{
    fmt::{self, Arguments, Write as _},
    sync::atomic::{AtomicU8, Ordering},
};
use std::io::{self, Write};

use parking_lot::{Mutex, const_mutex};

use crate::{LogCategory, LogLevel, TimeStamp};

/// Where and when a message was logged.
pub struct LogSite {
    pub file : &'static str,
    pub line : u32,
    /// Empty for levels that don't name a function.
    pub func : &'static str,
    pub time : TimeStamp,
}

impl LogSite {
    pub const fn new(file: &'static str, line: u32, func: &'static str, time: TimeStamp) -> Self {
        Self { file, line, func, time }
    }
}

/// Source location prefix, only written for levels that show it.
struct SitePrefix<'a>(&'a LogSite, LogLevel);

impl fmt::Display for SitePrefix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let SitePrefix(site, level) = self;
        if !level.shows_site() {
            return Ok(());
        }
        write!(f, "({}:{}", site.file, site.line)?;
        if !site.func.is_empty() {
            write!(f, ": {}", site.func)?;
        }
        f.write_str(") ")
    }
}

type Writer = Box<dyn Write + Send>;

/// Pending output and the writers it goes to.
struct Sinks {
    writers:    Vec<Option<Writer>>,
    pending:    String,
    to_console: bool,
}

impl Sinks {
    /// Pending output is written out once it grows past this size.
    const FLUSH_THRESHOLD : usize = 4 * 1024;

    fn push(&mut self, args: Arguments) {
        _ = self.pending.write_fmt(args);
        if self.pending.len() > Self::FLUSH_THRESHOLD {
            self.flush();
        }
    }

    fn flush(&mut self) {
        if self.pending.is_empty() {
            return;
        }

        let bytes = self.pending.as_bytes();
        if self.to_console {
            _ = io::stderr().lock().write_all(bytes);
        }
        for writer in self.writers.iter_mut().flatten() {
            _ = writer.write_all(bytes).and_then(|_| writer.flush());
        }
        self.pending.clear();
    }
}

/// Logger writing to stderr and any number of extra writers, e.g. a log file.
///
/// Output is buffered, so it has to be flushed before the process exits.
pub struct Logger {
    sinks:     Mutex<Sinks>,
    max_level: AtomicU8,
}

impl Logger {
    pub const fn new() -> Self {
        Self {
            sinks: const_mutex(Sinks { writers: Vec::new(), pending: String::new(), to_console: true }),
            max_level: AtomicU8::new(LogLevel::Info as u8),
        }
    }

    /// Set the least severe level that is still written.
    pub fn set_max_level(&self, level: LogLevel) {
        self.max_level.store(level as u8, Ordering::Relaxed)
    }

    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level as u8 <= self.max_level.load(Ordering::Relaxed)
    }

    /// Enable or disable writing to stderr, output logged before the change still follows the old setting.
    pub fn set_log_to_console(&self, to_console: bool) {
        let mut sinks = self.sinks.lock();
        sinks.flush();
        sinks.to_console = to_console;
    }

    /// Add a writer, returning the index to remove it with.
    pub fn add_writer(&self, writer: Writer) -> usize {
        let mut sinks = self.sinks.lock();
        match sinks.writers.iter().position(Option::is_none) {
            Some(idx) => {
                sinks.writers[idx] = Some(writer);
                idx
            },
            None => {
                sinks.writers.push(Some(writer));
                sinks.writers.len() - 1
            },
        }
    }

    /// Remove a writer, pending output is flushed to it first.
    pub fn remove_writer(&self, idx: usize) -> Option<Writer> {
        let mut sinks = self.sinks.lock();
        sinks.flush();
        sinks.writers.get_mut(idx).and_then(Option::take)
    }

    pub fn log_fmt(&self, category: LogCategory, level: LogLevel, site: LogSite, args: Arguments) {
        if !self.is_enabled(level) {
            return;
        }
        let time = site.time;
        let prefix = SitePrefix(&site, level);
        self.sinks.lock().push(format_args!("{time} {level} [{category}] {prefix}{args}\n"));
    }

    pub fn flush(&self) {
        self.sinks.lock().flush()
    }
}
