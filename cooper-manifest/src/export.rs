//! Export strategies for barrel entries.

use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Deserializer};

/// How a child module is re-exported from the barrel file.
///
/// Conversion from strings never fails: anything other than the two
/// literal strategies is a signal to detect the export form by reading
/// the module, so `"detect"`, a typo, or any future value all map to
/// [`ExportType::Detect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportType {
    /// `export * from './<stem>';`
    Named,
    /// `export { default as <stem> } from './<stem>';`
    Default,
    /// Read the module and pick the default template when a line starts
    /// with `export default`, the named template otherwise.
    Detect,
}

impl ExportType {
    /// Returns the strategy identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportType::Named => "named",
            ExportType::Default => "default",
            ExportType::Detect => "detect",
        }
    }
}

impl From<&str> for ExportType {
    fn from(s: &str) -> Self {
        match s {
            "named" => ExportType::Named,
            "default" => ExportType::Default,
            _ => ExportType::Detect,
        }
    }
}

impl fmt::Display for ExportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExportType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.into())
    }
}

impl<'de> Deserialize<'de> for ExportType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.as_str().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(ExportType::from_str("named").unwrap(), ExportType::Named);
        assert_eq!(ExportType::from_str("default").unwrap(), ExportType::Default);
        assert_eq!(ExportType::from_str("detect").unwrap(), ExportType::Detect);
    }

    #[test]
    fn test_unknown_strings_signal_detection() {
        assert_eq!(ExportType::from("auto"), ExportType::Detect);
        assert_eq!(ExportType::from("Named"), ExportType::Detect);
        assert_eq!(ExportType::from(""), ExportType::Detect);
    }

    #[test]
    fn test_display() {
        assert_eq!(ExportType::Named.to_string(), "named");
        assert_eq!(ExportType::Default.to_string(), "default");
        assert_eq!(ExportType::Detect.to_string(), "detect");
    }

    #[test]
    fn test_deserialize() {
        #[derive(Deserialize)]
        struct Wrapper {
            export_type: ExportType,
        }

        let named: Wrapper = toml::from_str(r#"export_type = "named""#).unwrap();
        assert_eq!(named.export_type, ExportType::Named);

        let other: Wrapper = toml::from_str(r#"export_type = "whatever""#).unwrap();
        assert_eq!(other.export_type, ExportType::Detect);
    }
}
