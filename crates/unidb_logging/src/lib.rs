//! Process-wide logging.
//!
//! A [`Logger`] is installed once with [`set_logger`], after which the `log_*!` macros can be used from any crate.
//! Before a logger is installed, logging is a no-op.
//!
//! Errors and severe errors are expected to name the function they are logged from, so the site of a failed build
//! step ends up in the log:
//! ```ignore
//! log_error!(LOG_CAT, Self::load, "Invalid unicode version '{}'", version);
//! log_info!(LOG_CAT, "Read {} records", count);
//! ```

use parking_lot::{RwLock, const_rwlock};

mod level;
pub use level::*;

mod time;
pub use time::*;

mod logger;
pub use logger::*;

mod macros;

static LOGGER : RwLock<Option<&'static Logger>> = const_rwlock(None);

/// Install the process-wide logger.
pub fn set_logger(logger: &'static Logger) {
    *LOGGER.write() = Some(logger);
}

/// Get the process-wide logger, if one was installed.
pub fn get_logger() -> Option<&'static Logger> {
    *LOGGER.read()
}

/// Name of the function passed to the error macros.
pub fn get_func_name<F>(_: F) -> &'static str {
    core::any::type_name::<F>()
}
