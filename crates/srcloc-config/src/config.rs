use serde::{Deserialize, Serialize};

/// Rules for turning file paths into source classifications.
///
/// Every field has a default, so an empty config file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SourceConfig {
    /// Extensions (without the dot) of ordinary source files
    pub source_extensions: Vec<String>,

    /// Extensions of JSON files treated as source
    pub json_extensions: Vec<String>,

    /// Extensions of assets that are referenced but never parsed
    pub resource_extensions: Vec<String>,

    /// Glob patterns for library files
    pub libs: Vec<String>,

    /// Path suffixes that mark declaration files (e.g. `.flow` in `foo.js.flow`)
    pub declaration_suffixes: Vec<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            source_extensions: to_strings(&["js", "jsx", "mjs", "cjs"]),
            json_extensions: to_strings(&["json"]),
            resource_extensions: to_strings(&["css", "png", "jpg", "jpeg", "gif", "svg"]),
            libs: Vec::new(),
            declaration_suffixes: to_strings(&[".flow"]),
        }
    }
}

impl SourceConfig {
    /// All configured entries, labelled by the field they come from.
    pub(crate) fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        let fields: [(&'static str, &Vec<String>); 5] = [
            ("sourceExtensions", &self.source_extensions),
            ("jsonExtensions", &self.json_extensions),
            ("resourceExtensions", &self.resource_extensions),
            ("libs", &self.libs),
            ("declarationSuffixes", &self.declaration_suffixes),
        ];
        fields
            .into_iter()
            .flat_map(|(field, values)| values.iter().map(move |v| (field, v.as_str())))
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}
