use std::path::PathBuf;

use unidb_info::UnicodeVersion;
use unidb_logging::{LogCategory, LogLevel, log_error};

use crate::DirectorySource;

const LOG_CAT : LogCategory = LogCategory::new_with_sub("Builder", "Settings");

/// Builder settings, loaded from `unidb.toml`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct BuilderSettings {
	/// Unicode version written into the header.
	pub version:    UnicodeVersion,
	/// Directory holding the UCD files, `emoji/emoji-data.txt` is looked up relative to it.
	pub ucd_dir:    PathBuf,
	pub unihan_dir: PathBuf,
	pub output:     PathBuf,
	/// Reload the written database and check that it serializes to the same bytes.
	pub verify:     bool,
	pub log_level:  LogLevel,
	/// Additional log file, next to the console output.
	pub log_file:   Option<PathBuf>,
}

impl BuilderSettings {
	pub fn load(toml: &str) -> Option<BuilderSettings> {
		let toml = match toml.parse::<toml::Table>() {
			Ok(toml) => toml,
			Err(err) => {
				log_error!(LOG_CAT, Self::load, "Failed to parse builder settings, err: {err}");
				return None;
			}
		};
		let mut settings = BuilderSettings::default();

		if let Some(toml::Value::Table(unicode)) = toml.get("unicode") {
			if let Some(toml::Value::String(version)) = unicode.get("version") {
				settings.version = match UnicodeVersion::parse(version) {
					Some(version) => version,
					None => {
						log_error!(LOG_CAT, Self::load, "Invalid unicode version '{version}'");
						return None;
					}
				};
			}
		}

		if let Some(toml::Value::Table(source)) = toml.get("source") {
			if let Some(toml::Value::String(dir)) = source.get("ucd") {
				settings.ucd_dir = PathBuf::from(dir);
			}
			if let Some(toml::Value::String(dir)) = source.get("unihan") {
				settings.unihan_dir = PathBuf::from(dir);
			}
		}

		if let Some(toml::Value::Table(output)) = toml.get("output") {
			if let Some(toml::Value::String(path)) = output.get("path") {
				settings.output = PathBuf::from(path);
			}
			if let Some(toml::Value::Boolean(verify)) = output.get("verify") {
				settings.verify = *verify;
			}
		}

		if let Some(toml::Value::Table(log)) = toml.get("log") {
			if let Some(toml::Value::String(level)) = log.get("level") {
				settings.log_level = match LogLevel::from_name(level) {
					Some(level) => level,
					None => {
						log_error!(LOG_CAT, Self::load, "Unknown log level '{level}'");
						return None;
					}
				};
			}
			if let Some(toml::Value::String(file)) = log.get("file") {
				settings.log_file = Some(PathBuf::from(file));
			}
		}

		Some(settings)
	}

	/// Source that looks up files in the UCD directory first and the Unihan directory second.
	pub fn source(&self) -> DirectorySource {
		DirectorySource::new(&self.ucd_dir).with_dir(&self.unihan_dir)
	}
}

impl Default for BuilderSettings {
	fn default() -> Self {
		Self {
			version: UnicodeVersion::new(15, 1, 0),
			ucd_dir: PathBuf::from("data/ucd"),
			unihan_dir: PathBuf::from("data/unihan"),
			output: PathBuf::from("unidb.bin"),
			verify: true,
			log_level: LogLevel::Info,
			log_file: None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	pub fn load_all_keys() {
		let settings = BuilderSettings::load(r#"
			[unicode]
			version = "15.0"

			[source]
			ucd = "ucd"
			unihan = "unihan"

			[output]
			path = "out/unidb.bin"
			verify = false

			[log]
			level = "verbose"
			file = "unidb.log"
		"#).unwrap();

		assert_eq!(settings, BuilderSettings {
			version: UnicodeVersion::new(15, 0, 0),
			ucd_dir: PathBuf::from("ucd"),
			unihan_dir: PathBuf::from("unihan"),
			output: PathBuf::from("out/unidb.bin"),
			verify: false,
			log_level: LogLevel::Verbose,
			log_file: Some(PathBuf::from("unidb.log")),
		});
	}

	#[test]
	pub fn missing_keys_take_defaults() {
		let settings = BuilderSettings::load("[output]\npath = \"ucd.bin\"\n").unwrap();
		assert_eq!(settings, BuilderSettings { output: PathBuf::from("ucd.bin"), ..Default::default() });
		assert_eq!(BuilderSettings::load("").unwrap(), BuilderSettings::default());
	}

	#[test]
	pub fn invalid_settings() {
		assert_eq!(BuilderSettings::load("[unicode\nversion = 15"), None);
		assert_eq!(BuilderSettings::load("[unicode]\nversion = \"fifteen\""), None);
		assert_eq!(BuilderSettings::load("[log]\nlevel = \"loud\""), None);
	}
}
