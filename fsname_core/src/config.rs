use std::fs;
use std::path::Path;

use serde_derive::{Deserialize, Serialize};

use crate::error::FsNameError;
use crate::sanitize::{sanitize_file_name, sanitize_file_name_with_max_length};

#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub sanitize: Sanitize,
}

#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Sanitize {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
}

impl Config {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, FsNameError> {
        let contents = fs::read_to_string(path)?;
        let config = Config::new_from_string(&contents)?;

        match config.sanitize.max_length {
            Some(max_length) => info!("max length: {} bytes", max_length),
            None => info!("max length: unbounded"),
        }

        Ok(config)
    }

    pub fn new_from_string(contents: &str) -> Result<Self, FsNameError> {
        let config: Config = toml::from_str(contents)?;
        Ok(config)
    }

    pub fn sanitize<S: AsRef<[u8]> + ?Sized>(&self, name: &S) -> String {
        match self.sanitize.max_length {
            Some(max_length) => sanitize_file_name_with_max_length(name, max_length),
            None => sanitize_file_name(name),
        }
    }
}

#[test]
fn config_read() {
    let config = Config::new_from_string(
        r#"
[sanitize]
max_length = 32
"#,
    )
    .unwrap();
    assert_eq!(config.sanitize.max_length, Some(32));
}

#[test]
fn config_read_empty() {
    let config = Config::new_from_string("").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.sanitize.max_length, None);
}

#[test]
fn config_read_invalid() {
    let result = Config::new_from_string("[sanitize]\nmax_length = \"long\"\n");
    match result {
        Err(FsNameError::Config(_)) => {}
        other => panic!("expected config error, got {:?}", other),
    }
}

#[test]
fn config_read_file() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[sanitize]").unwrap();
    writeln!(file, "max_length = 9").unwrap();

    let config = Config::new(file.path()).unwrap();
    assert_eq!(config.sanitize.max_length, Some(9));
    assert_eq!(config.sanitize("Very Long Filename"), "very_long");
}

#[test]
fn config_missing_file() {
    match Config::new("/nonexistent/fsname.toml") {
        Err(FsNameError::Io(_)) => {}
        other => panic!("expected io error, got {:?}", other),
    }
}

#[test]
fn config_write() {
    let config = Config {
        sanitize: Sanitize { max_length: Some(64) },
    };

    let toml = toml::to_string(&config).unwrap();
    assert_eq!(Config::new_from_string(&toml).unwrap(), config);
}

#[test]
fn config_sanitize_unbounded() {
    let config = Config::default();
    assert_eq!(config.sanitize("Hello World! 2024.txt"), "hello_world_2024.txt");
}
