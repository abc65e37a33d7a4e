//! Extraction options.

use propdoc_common::limits;

/// Configuration for one extraction pass. Plain data handed to the driver;
/// defaults cover React's component type aliases.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Package identifier of the UI framework (`import ... from '<this>'`).
    pub framework_module: String,
    /// Names under which the framework exports its generic function
    /// component type. React has exported the same type under several
    /// aliases over time.
    pub component_type_names: Vec<String>,
    /// Bound on the heritage resolution depth; exceeding it fails with
    /// `ResolutionDepthExceeded`.
    pub max_heritage_depth: u32,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        ExtractOptions {
            framework_module: "react".to_string(),
            component_type_names: ["StatelessComponent", "SFC", "FunctionComponent", "FC"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            max_heritage_depth: limits::MAX_HERITAGE_DEPTH,
        }
    }
}

impl ExtractOptions {
    /// Whether `name` is one of the framework's component type names
    /// (as exported by the framework, before any import rename).
    pub fn is_component_type_name(&self, name: &str) -> bool {
        self.component_type_names.iter().any(|n| n == name)
    }
}
