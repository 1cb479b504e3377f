use crate::error::{Result, ToolmatchError};
use crate::types::tool::{Category, Tool};
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::path::Path;

const EMBEDDED_CATALOG: &str = include_str!("../data/catalog.json");

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    tools: Vec<Tool>,
}

/// Read-only tool catalog. Order is the catalog's authoring order and is
/// what ties are broken by when ranking.
#[derive(Debug, Clone)]
pub struct Catalog {
    tools: Vec<Tool>,
    fingerprint: String,
}

impl Catalog {
    pub fn new(tools: Vec<Tool>) -> Result<Self> {
        let canonical = serde_json::to_vec(&tools)?;
        Self::with_fingerprint(tools, &canonical)
    }

    pub fn embedded() -> Result<Self> {
        Self::from_json_str(EMBEDDED_CATALOG)
    }

    pub fn from_json_str(input: &str) -> Result<Self> {
        let document: CatalogDocument = serde_json::from_str(input)
            .map_err(|e| ToolmatchError::InvalidCatalog(e.to_string()))?;
        Self::with_fingerprint(document.tools, input.as_bytes())
    }

    pub fn from_toml_str(input: &str) -> Result<Self> {
        let document: CatalogDocument =
            toml::from_str(input).map_err(|e| ToolmatchError::InvalidCatalog(e.to_string()))?;
        Self::with_fingerprint(document.tools, input.as_bytes())
    }

    /// Loads `.toml` files as TOML and everything else as JSON.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ToolmatchError::PathNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        if is_toml {
            Self::from_toml_str(&content)
        } else {
            Self::from_json_str(&content)
        }
    }

    fn with_fingerprint(tools: Vec<Tool>, source: &[u8]) -> Result<Self> {
        validate_tools(&tools)?;
        Ok(Self {
            tools,
            fingerprint: sha256_hex(source),
        })
    }

    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Tool> {
        self.tools.iter().find(|tool| tool.id == id)
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Tool> {
        self.tools
            .iter()
            .filter(move |tool| tool.category == category)
    }

    /// SHA-256 of the catalog source, hex encoded.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}

fn validate_tools(tools: &[Tool]) -> Result<()> {
    let mut seen = HashSet::new();
    for tool in tools {
        if tool.id.trim().is_empty() {
            return Err(ToolmatchError::InvalidCatalog(format!(
                "tool {:?} has an empty id",
                tool.name
            )));
        }
        if !seen.insert(tool.id.as_str()) {
            return Err(ToolmatchError::InvalidCatalog(format!(
                "duplicate tool id: {}",
                tool.id
            )));
        }
        if tool.popularity > 100 {
            return Err(ToolmatchError::InvalidCatalog(format!(
                "{}: popularity must be between 0 and 100 (found {})",
                tool.id, tool.popularity
            )));
        }
    }
    Ok(())
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    digest.iter().map(|byte| format!("{byte:02x}")).collect()
}
