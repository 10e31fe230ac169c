//! Toolchain detection for service directories.

use serde::Serialize;
use std::fmt;
use std::path::Path;

/// Toolchain family of a service directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolchainKind {
    Rust,
    Node,
    Unknown,
}

impl fmt::Display for ToolchainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolchainKind::Rust => write!(f, "rust"),
            ToolchainKind::Node => write!(f, "node"),
            ToolchainKind::Unknown => write!(f, "unknown"),
        }
    }
}

/// Detect which toolchain a service directory belongs to
///
/// Looks for manifest marker files at the directory root:
/// - Rust: Cargo.toml
/// - Node: package.json
///
/// The precedence is fixed: Cargo.toml wins when both markers exist.
/// Existing CI configurations depend on this ordering while services
/// migrate between ecosystems, so it must not change.
pub fn detect_toolchain(project_dir: &Path) -> ToolchainKind {
    if project_dir.join("Cargo.toml").exists() {
        ToolchainKind::Rust
    } else if project_dir.join("package.json").exists() {
        ToolchainKind::Node
    } else {
        ToolchainKind::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_detect_rust() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Cargo.toml"), "[package]\nname = \"svc\"").unwrap();

        assert_eq!(detect_toolchain(temp.path()), ToolchainKind::Rust);
    }

    #[test]
    fn test_detect_node() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), "{}").unwrap();

        assert_eq!(detect_toolchain(temp.path()), ToolchainKind::Node);
    }

    #[test]
    fn test_rust_marker_wins_over_node() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Cargo.toml"), "[package]\nname = \"svc\"").unwrap();
        fs::write(temp.path().join("package.json"), "{}").unwrap();

        assert_eq!(detect_toolchain(temp.path()), ToolchainKind::Rust);
    }

    #[test]
    fn test_detect_nothing() {
        let temp = TempDir::new().unwrap();

        assert_eq!(detect_toolchain(temp.path()), ToolchainKind::Unknown);
    }

    #[test]
    fn test_marker_must_be_at_root() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("sub");
        fs::create_dir(&nested).unwrap();
        fs::write(nested.join("Cargo.toml"), "[package]\nname = \"svc\"").unwrap();

        assert_eq!(detect_toolchain(temp.path()), ToolchainKind::Unknown);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ToolchainKind::Rust), "rust");
        assert_eq!(format!("{}", ToolchainKind::Node), "node");
        assert_eq!(format!("{}", ToolchainKind::Unknown), "unknown");
    }

    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ToolchainKind::Node).unwrap(), "\"node\"");
        assert_eq!(serde_json::to_string(&ToolchainKind::Rust).unwrap(), "\"rust\"");
    }
}
