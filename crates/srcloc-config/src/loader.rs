use crate::{ConfigError, Result, SourceConfig};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// Extensionless rc file, read as YAML or JSON
const RC_FILE: &str = ".srclocrc";

/// Config file names to search for in each directory, in order of preference
const CONFIG_FILES: &[&str] = &[
    ".srclocrc.yml",
    ".srclocrc.yaml",
    ".srclocrc.json",
    RC_FILE,
    "srcloc.config.yml",
    "srcloc.config.yaml",
    "srcloc.config.json",
];

/// How a config file is parsed, decided by its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Yaml,
    Json,
    /// YAML first, JSON if that fails
    YamlOrJson,
}

impl ConfigFormat {
    fn detect(path: &Path) -> Option<Self> {
        match path.extension().and_then(OsStr::to_str) {
            Some("yml" | "yaml") => Some(Self::Yaml),
            Some("json") => Some(Self::Json),
            None if path.file_name() == Some(OsStr::new(RC_FILE)) => Some(Self::YamlOrJson),
            _ => None,
        }
    }

    fn parse(self, contents: &str, path: &Path) -> Result<SourceConfig> {
        let invalid = |message: String| ConfigError::Invalid {
            path: path.to_path_buf(),
            message,
        };
        let yaml = || -> Result<SourceConfig> {
            // An empty YAML document means "all defaults"
            if contents.trim().is_empty() {
                return Ok(SourceConfig::default());
            }
            serde_yaml::from_str(contents).map_err(|e| invalid(format!("YAML parse error: {e}")))
        };
        let json = || -> Result<SourceConfig> {
            serde_json::from_str(contents).map_err(|e| invalid(format!("JSON parse error: {e}")))
        };

        match self {
            Self::Yaml => yaml(),
            Self::Json => json(),
            Self::YamlOrJson => yaml().or_else(|_| json()),
        }
    }
}

/// Find the nearest config file in `start_dir` or one of its ancestors.
///
/// Within a directory the first existing name in `CONFIG_FILES` wins; a
/// closer directory always beats a farther one.
#[must_use]
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let found = start_dir
        .ancestors()
        .flat_map(|dir| CONFIG_FILES.iter().map(move |name| dir.join(name)))
        .find(|candidate| candidate.is_file());

    match &found {
        Some(path) => tracing::debug!(path = %path.display(), "found config file"),
        None => tracing::debug!(start = %start_dir.display(), "no config file found"),
    }
    found
}

/// Load a config from `path`, picking the format from the file name.
pub fn load_config(path: &Path) -> Result<SourceConfig> {
    let contents = fs::read_to_string(path)?;
    load_config_from_str(&contents, path)
}

/// Load a config from a string. `path` decides the format and appears in
/// error messages.
pub fn load_config_from_str(contents: &str, path: &Path) -> Result<SourceConfig> {
    let format = ConfigFormat::detect(path)
        .ok_or_else(|| ConfigError::UnsupportedFormat(path.to_path_buf()))?;
    let config = format.parse(contents, path)?;
    validate_config(&config, path)?;
    Ok(config)
}

fn validate_config(config: &SourceConfig, path: &Path) -> Result<()> {
    if let Some((field, _)) = config.entries().find(|(_, value)| value.trim().is_empty()) {
        return Err(ConfigError::Invalid {
            path: path.to_path_buf(),
            message: format!("'{field}' contains an empty entry"),
        });
    }

    for pattern in &config.libs {
        glob::Pattern::new(pattern)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_detect_format() {
        assert_eq!(
            ConfigFormat::detect(Path::new("a/.srclocrc.yaml")),
            Some(ConfigFormat::Yaml)
        );
        assert_eq!(
            ConfigFormat::detect(Path::new("srcloc.config.json")),
            Some(ConfigFormat::Json)
        );
        assert_eq!(
            ConfigFormat::detect(Path::new(".srclocrc")),
            Some(ConfigFormat::YamlOrJson)
        );
        assert_eq!(ConfigFormat::detect(Path::new("srclocrc")), None);
        assert_eq!(ConfigFormat::detect(Path::new("srcloc.toml")), None);
    }

    #[test]
    fn test_load_yaml() -> anyhow::Result<()> {
        let yaml = r#"
sourceExtensions: ["js", "ts"]
libs:
  - "decls/**/*.js"
declarationSuffixes: [".flow", ".d.ts"]
"#;

        let mut file = NamedTempFile::with_suffix(".yml")?;
        file.write_all(yaml.as_bytes())?;
        file.flush()?;

        let config = load_config(file.path())?;
        assert_eq!(config.source_extensions, vec!["js", "ts"]);
        assert_eq!(config.libs, vec!["decls/**/*.js"]);
        assert_eq!(config.declaration_suffixes, vec![".flow", ".d.ts"]);
        assert_eq!(config.json_extensions, vec!["json"]);
        Ok(())
    }

    #[test]
    fn test_load_json() -> anyhow::Result<()> {
        let json = r#"
{
  "resourceExtensions": ["woff"],
  "libs": ["flow-typed/**"]
}
"#;

        let mut file = NamedTempFile::with_suffix(".json")?;
        file.write_all(json.as_bytes())?;
        file.flush()?;

        let config = load_config(file.path())?;
        assert_eq!(config.resource_extensions, vec!["woff"]);
        assert_eq!(config.libs, vec!["flow-typed/**"]);
        Ok(())
    }

    #[test]
    fn test_load_empty_yaml_is_default() -> anyhow::Result<()> {
        let config = load_config_from_str("", Path::new("srcloc.config.yml"))?;
        assert_eq!(config, SourceConfig::default());
        Ok(())
    }

    #[test]
    fn test_extensionless_rc_accepts_json() -> anyhow::Result<()> {
        let config =
            load_config_from_str(r#"{"jsonExtensions": ["json5"]}"#, Path::new(".srclocrc"))?;
        assert_eq!(config.json_extensions, vec!["json5"]);
        Ok(())
    }

    #[test]
    fn test_unsupported_format() {
        let result = load_config_from_str("", Path::new("srcloc.toml"));
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_validation_empty_entry() {
        let result = load_config_from_str(
            "jsonExtensions: [\"json\", \"  \"]",
            Path::new(".srclocrc.yml"),
        );
        match result {
            Err(ConfigError::Invalid { message, .. }) => {
                assert!(message.contains("jsonExtensions"), "{message}");
            }
            other => panic!("expected invalid config, got {other:?}"),
        }
    }

    #[test]
    fn test_validation_bad_pattern() {
        let result = load_config_from_str("libs: [\"lib/***\"]", Path::new(".srclocrc.yml"));
        assert!(matches!(result, Err(ConfigError::Pattern(_))));
    }

    #[test]
    fn test_find_config_in_current_dir() -> anyhow::Result<()> {
        let temp_dir = tempfile::tempdir()?;
        let config_path = temp_dir.path().join(".srclocrc.yml");
        fs::write(&config_path, "libs: []")?;

        assert_eq!(find_config(temp_dir.path()), Some(config_path));
        Ok(())
    }

    #[test]
    fn test_find_config_in_parent_dir() -> anyhow::Result<()> {
        let temp_dir = tempfile::tempdir()?;
        let config_path = temp_dir.path().join("srcloc.config.json");
        fs::write(&config_path, "{}")?;

        let sub_dir = temp_dir.path().join("subdir");
        fs::create_dir(&sub_dir)?;

        assert_eq!(find_config(&sub_dir), Some(config_path));
        Ok(())
    }

    #[test]
    fn test_closer_config_wins() -> anyhow::Result<()> {
        let temp_dir = tempfile::tempdir()?;
        fs::write(temp_dir.path().join(".srclocrc.yml"), "libs: []")?;

        let sub_dir = temp_dir.path().join("nested");
        fs::create_dir(&sub_dir)?;
        let nested_config = sub_dir.join("srcloc.config.json");
        fs::write(&nested_config, "{}")?;

        assert_eq!(find_config(&sub_dir), Some(nested_config));
        Ok(())
    }

    #[test]
    fn test_config_file_priority() -> anyhow::Result<()> {
        let temp_dir = tempfile::tempdir()?;
        fs::write(temp_dir.path().join(".srclocrc.yml"), "libs: []")?;
        fs::write(temp_dir.path().join("srcloc.config.json"), "{}")?;

        let found = find_config(temp_dir.path()).expect("config should be found");
        assert_eq!(found.file_name(), Some(OsStr::new(".srclocrc.yml")));
        Ok(())
    }
}
