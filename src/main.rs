use std::{fs, process::ExitCode};

use unidb_builder::{BuilderSettings, UnicodeDataBuilder};
use unidb_info::UnicodeDatabase;
use unidb_logging::{log_error, log_info, set_logger, LogCategory, Logger};

pub const LOG_CAT : LogCategory = LogCategory::new("Main");

static LOGGER : Logger = Logger::new();

fn main() -> ExitCode {
    set_logger(&LOGGER);

    let settings_path = std::env::args().nth(1).unwrap_or_else(|| String::from("unidb.toml"));
    let settings = match fs::read_to_string(&settings_path) {
        Ok(toml) => BuilderSettings::load(&toml),
        Err(err) => {
            log_error!(LOG_CAT, main, "Failed to read '{}', err: {}", settings_path, err);
            None
        }
    };
    let Some(settings) = settings else {
        LOGGER.flush();
        return ExitCode::FAILURE;
    };

    LOGGER.set_max_level(settings.log_level);
    if let Some(log_file) = &settings.log_file {
        match fs::File::create(log_file) {
            Ok(file) => {
                LOGGER.add_writer(Box::new(file));
            },
            Err(err) => log_error!(LOG_CAT, main, "Failed to create log file '{}', err: {}", log_file.display(), err),
        }
    }

    let result = run(&settings);
    LOGGER.flush();
    if result { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

fn run(settings: &BuilderSettings) -> bool {
    let builder = match UnicodeDataBuilder::build(&settings.source(), settings.version) {
        Ok(builder) => builder,
        Err(err) => {
            log_error!(LOG_CAT, run, "Failed to build the database: {err}");
            return false;
        }
    };

    let bytes = match builder.to_bytes() {
        Ok(bytes) => bytes,
        Err(err) => {
            log_error!(LOG_CAT, run, "Failed to serialize the database: {err}");
            return false;
        }
    };

    if let Err(err) = fs::write(&settings.output, &bytes) {
        log_error!(LOG_CAT, run, "Failed to write '{}', err: {}", settings.output.display(), err);
        return false;
    }
    log_info!(LOG_CAT, "Wrote {} bytes to '{}'", bytes.len(), settings.output.display());

    !settings.verify || verify(settings, &bytes)
}

/// Reload the written file and check that it serializes back to the same bytes.
fn verify(settings: &BuilderSettings, expected: &[u8]) -> bool {
    let data = match fs::read(&settings.output) {
        Ok(data) => data,
        Err(err) => {
            log_error!(LOG_CAT, verify, "Failed to read back '{}', err: {}", settings.output.display(), err);
            return false;
        }
    };
    let db = match UnicodeDatabase::new(data) {
        Ok(db) => db,
        Err(err) => {
            log_error!(LOG_CAT, verify, "Written database does not load: {err}");
            return false;
        }
    };

    match UnicodeDataBuilder::from_database(&db).to_bytes() {
        Ok(bytes) if bytes == expected => {
            log_info!(LOG_CAT, "Verified '{}'", settings.output.display());
            true
        },
        Ok(_) => {
            log_error!(LOG_CAT, verify, "Re-serialized database differs from '{}'", settings.output.display());
            false
        },
        Err(err) => {
            log_error!(LOG_CAT, verify, "Failed to re-serialize the database: {err}");
            false
        }
    }
}
