//! The generated barrel file.

use std::path::{Path, PathBuf};

use cooper_core::{FileRules, GeneratedFile};

/// A barrel file to be written as `index<extension>` inside its target
/// directory. Always a whole-file overwrite; never patched incrementally.
pub struct BarrelFile {
    extension: String,
    statements: Vec<String>,
}

impl BarrelFile {
    pub fn new(extension: impl Into<String>, statements: Vec<String>) -> Self {
        Self {
            extension: extension.into(),
            statements,
        }
    }

    /// `index<extension>`
    pub fn file_name(&self) -> String {
        format!("index{}", self.extension)
    }

    /// Number of export statements.
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl GeneratedFile for BarrelFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.file_name())
    }

    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    fn render(&self) -> String {
        let mut content = String::new();
        for statement in &self.statements {
            content.push_str(statement);
            content.push('\n');
        }
        content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_one_statement_per_line() {
        let barrel = BarrelFile::new(
            ".ts",
            vec![
                "export * from './utils';".to_string(),
                "export { default as Button } from './Button';".to_string(),
            ],
        );
        assert_eq!(
            barrel.render(),
            "export * from './utils';\nexport { default as Button } from './Button';\n"
        );
    }

    #[test]
    fn test_render_empty_barrel() {
        let barrel = BarrelFile::new(".ts", Vec::new());
        assert_eq!(barrel.render(), "");
    }

    #[test]
    fn test_path_uses_extension() {
        let barrel = BarrelFile::new(".tsx", Vec::new());
        assert_eq!(
            barrel.path(Path::new("/src/components")),
            Path::new("/src/components/index.tsx")
        );
    }
}
