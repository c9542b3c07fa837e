use crate::OutputFormat;
use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use srcloc::FileKey;
use srcloc_config::Classifier;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Serialize)]
struct ClassifiedFile<'a> {
    path: &'a str,
    kind: &'static str,
    library: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    implementation: Option<String>,
}

pub fn run(config_path: Option<PathBuf>, dir: &Path, format: OutputFormat) -> Result<()> {
    let config = super::resolve_config(config_path, dir)?;
    let classifier = Classifier::new(config).context("Invalid classification config")?;

    let keys = collect(&classifier, dir)?;

    match format {
        OutputFormat::Human => {
            for key in &keys {
                let label = format!("{:<8}", kind_label(key));
                if key.is_lib() {
                    println!("{} {}", label.cyan(), key);
                } else {
                    println!("{} {}", label.dimmed(), key);
                }
            }
            println!(
                "\n{}",
                format!("{} files classified", keys.len()).green()
            );
        }
        OutputFormat::Json => {
            let files: Vec<_> = keys
                .iter()
                .map(|key| ClassifiedFile {
                    path: key.as_display_str(),
                    kind: kind_label(key),
                    library: key.is_lib(),
                    implementation: classifier
                        .implementation_of(key)
                        .map(|implementation| implementation.to_string()),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&files)?);
        }
    }

    Ok(())
}

/// Classify every file under `dir`, with paths relative to `dir`, in
/// classification order.
fn collect(classifier: &Classifier, dir: &Path) -> Result<Vec<FileKey>> {
    let mut keys = Vec::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to walk {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry.path().strip_prefix(dir).unwrap_or(entry.path());
        match classifier.classify(relative) {
            Some(key) => keys.push(key),
            None => tracing::debug!(path = %relative.display(), "skipping unclassified file"),
        }
    }

    keys.sort();
    Ok(keys)
}

const fn kind_label(key: &FileKey) -> &'static str {
    match key {
        FileKey::LibFile(_) => "lib",
        FileKey::SourceFile(_) => "source",
        FileKey::JsonFile(_) => "json",
        FileKey::ResourceFile(_) => "resource",
        FileKey::Builtins => "builtins",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use srcloc_config::SourceConfig;
    use std::fs;

    #[test]
    fn test_collect_sorts_by_classification() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("decls")).unwrap();
        fs::create_dir_all(root.join("src")).unwrap();
        fs::write(root.join("logo.svg"), "").unwrap();
        fs::write(root.join("src/b.js"), "").unwrap();
        fs::write(root.join("src/a.js"), "").unwrap();
        fs::write(root.join("package.json"), "{}").unwrap();
        fs::write(root.join("decls/react.js"), "").unwrap();
        fs::write(root.join("NOTES.md"), "").unwrap();

        let classifier = Classifier::new(SourceConfig {
            libs: vec!["decls/**".to_string()],
            ..SourceConfig::default()
        })
        .unwrap();

        let keys = collect(&classifier, root).unwrap();
        let rendered: Vec<_> = keys
            .iter()
            .map(|key| format!("{} {}", kind_label(key), key))
            .collect();

        let sep = std::path::MAIN_SEPARATOR;
        assert_eq!(
            rendered,
            vec![
                format!("lib decls{sep}react.js"),
                "json package.json".to_string(),
                format!("source src{sep}a.js"),
                format!("source src{sep}b.js"),
                "resource logo.svg".to_string(),
            ]
        );
    }

    #[test]
    fn test_kind_label() {
        assert_eq!(kind_label(&FileKey::Builtins), "builtins");
        assert_eq!(kind_label(&FileKey::JsonFile("a".to_string())), "json");
    }
}
