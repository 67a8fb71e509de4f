use std::{
	collections::HashMap,
	fs::File,
	io::{self, BufRead, BufReader},
	path::{Path, PathBuf},
};

/// Named source files.
///
/// Files are requested by their name in the Unicode distribution, e.g. `UnicodeData.txt` or `emoji/emoji-data.txt`.
pub trait UcdSource {
	fn open(&self, name: &str) -> io::Result<Box<dyn BufRead + '_>>;
}

/// Source files in one or more directories, searched in the order they were added.
#[derive(Clone, Debug, Default)]
pub struct DirectorySource {
	dirs: Vec<PathBuf>,
}

impl DirectorySource {
	pub fn new(dir: impl AsRef<Path>) -> Self {
		Self { dirs: vec![dir.as_ref().to_path_buf()] }
	}

	pub fn with_dir(mut self, dir: impl AsRef<Path>) -> Self {
		self.dirs.push(dir.as_ref().to_path_buf());
		self
	}
}

impl UcdSource for DirectorySource {
	fn open(&self, name: &str) -> io::Result<Box<dyn BufRead + '_>> {
		for dir in &self.dirs {
			let path = dir.join(name);
			if path.is_file() {
				let file = File::open(path)?;
				return Ok(Box::new(BufReader::new(file)));
			}
		}
		Err(io::Error::new(io::ErrorKind::NotFound, format!("'{name}' is not in any source directory")))
	}
}

/// Source files held in memory.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
	files: HashMap<String, Vec<u8>>,
}

impl MemorySource {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, name: impl Into<String>, contents: impl Into<Vec<u8>>) {
		self.files.insert(name.into(), contents.into());
	}

	pub fn with_file(mut self, name: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
		self.insert(name, contents);
		self
	}
}

impl UcdSource for MemorySource {
	fn open(&self, name: &str) -> io::Result<Box<dyn BufRead + '_>> {
		match self.files.get(name) {
			Some(contents) => Ok(Box::new(contents.as_slice())),
			None => Err(io::Error::new(io::ErrorKind::NotFound, format!("'{name}' is not in the source"))),
		}
	}
}
