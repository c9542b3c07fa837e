use anyhow::{bail, Context, Result};
use colored::Colorize;
use srcloc::{Containment, FileKey, Location, Position};
use srcloc_config::Classifier;
use std::path::{Path, PathBuf};
use std::process;

pub fn run(
    config_path: Option<PathBuf>,
    outer: &str,
    inner: &str,
    file: Option<PathBuf>,
) -> Result<()> {
    let source = file
        .map(|path| source_for(config_path, &path))
        .transpose()?;

    let outer = parse_location(source.clone(), outer).context("Invalid outer span")?;
    let inner = parse_location(source, inner).context("Invalid inner span")?;

    println!("outer: {outer}");
    println!("inner: {inner}");

    let containment = outer.span_compare(&inner);
    match containment {
        Containment::Contains => println!("{}", "✓ outer contains inner".green()),
        Containment::EscapesLeft => {
            println!("{}", "✗ inner starts before outer".red());
        }
        Containment::EscapesRight => {
            println!("{}", "✗ inner ends after outer".red());
        }
        Containment::OtherSource(_) => {
            println!("{}", "✗ spans are in different sources".red());
        }
    }

    if !containment.is_contained() {
        process::exit(1);
    }

    Ok(())
}

/// Classify `path` under the config nearest to the file itself. Files no
/// rule matches are treated as ordinary source.
fn source_for(config_path: Option<PathBuf>, path: &Path) -> Result<FileKey> {
    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let config = super::resolve_config(config_path, dir)?;
    let classifier = Classifier::new(config).context("Invalid classification config")?;
    Ok(classifier
        .classify(path)
        .unwrap_or_else(|| FileKey::SourceFile(path.display().to_string())))
}

/// Parse `L:C-L:C` into a location. Offsets are unknown and left at zero.
fn parse_location(source: Option<FileKey>, span: &str) -> Result<Location> {
    let Some((start, end)) = span.split_once('-') else {
        bail!("expected LINE:COLUMN-LINE:COLUMN, got {span:?}");
    };
    Ok(Location::new(
        source,
        parse_position(start)?,
        parse_position(end)?,
    ))
}

fn parse_position(position: &str) -> Result<Position> {
    let Some((line, column)) = position.trim().split_once(':') else {
        bail!("expected LINE:COLUMN, got {position:?}");
    };
    let line = line
        .parse::<usize>()
        .with_context(|| format!("invalid line in {position:?}"))?;
    let column = column
        .parse::<usize>()
        .with_context(|| format!("invalid column in {position:?}"))?;
    Ok(Position::new(line, column, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_parse_location() {
        let location = parse_location(None, "1:0-1:5").unwrap();
        assert_eq!(location.start, Position::new(1, 0, 0));
        assert_eq!(location.end, Position::new(1, 5, 0));
        assert!(location.source.is_none());
    }

    #[test]
    fn test_parse_location_keeps_inverted_span() {
        let location = parse_location(None, "4:2 - 1:0").unwrap();
        assert_eq!(location.start, Position::new(4, 2, 0));
        assert_eq!(location.end, Position::new(1, 0, 0));
    }

    #[test]
    fn test_parse_location_errors() {
        assert!(parse_location(None, "1:0").is_err());
        assert!(parse_location(None, "1-2").is_err());
        assert!(parse_location(None, "a:0-1:0").is_err());
        assert!(parse_location(None, "1:0-1:-3").is_err());
    }

    #[test]
    fn test_source_uses_config_next_to_file() -> anyhow::Result<()> {
        let temp_dir = tempfile::tempdir()?;
        let project = temp_dir.path().join("project");
        fs::create_dir_all(project.join("src"))?;
        fs::write(
            project.join(".srclocrc.yml"),
            "declarationSuffixes: [\".decl\"]",
        )?;
        let file = project.join("src").join("types.decl");
        fs::write(&file, "")?;

        let key = source_for(None, &file)?;
        assert!(matches!(key, FileKey::LibFile(_)), "{key:?}");
        Ok(())
    }

    #[test]
    fn test_source_prefers_explicit_config() -> anyhow::Result<()> {
        let temp_dir = tempfile::tempdir()?;
        fs::write(temp_dir.path().join(".srclocrc.yml"), "declarationSuffixes: [\".decl\"]")?;
        let explicit = temp_dir.path().join("srcloc.config.json");
        fs::write(&explicit, r#"{"declarationSuffixes": [".flow"]}"#)?;
        let file = temp_dir.path().join("types.decl");
        fs::write(&file, "")?;

        let key = source_for(Some(explicit), &file)?;
        assert!(matches!(key, FileKey::SourceFile(_)), "{key:?}");
        Ok(())
    }

    #[test]
    fn test_parsed_spans_contain() {
        let source = Some(FileKey::SourceFile("f".to_string()));
        let outer = parse_location(source.clone(), "1:0-1:5").unwrap();
        let inner = parse_location(source, "1:2-1:3").unwrap();
        assert!(outer.contains(&inner));
        assert_eq!(inner.span_compare(&outer), Containment::EscapesLeft);
    }
}
