//! YAML processing utilities

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use yaml_rust_davvid::YamlEmitter;

/// Serialize data structure to YAML string, emitting license texts as block scalars
pub fn to_yaml<T: Serialize>(data: &T) -> Result<String> {
    let serde_value = serde_yaml::to_value(data).context("Failed to serialize to serde value")?;
    let yaml_rust_value = convert_serde_to_yaml_rust(&serde_value)?;

    let mut output = String::new();
    let mut emitter = YamlEmitter::new(&mut output);
    emitter.multiline_strings(true);
    emitter
        .dump(&yaml_rust_value)
        .context("Failed to emit YAML")?;

    Ok(output)
}

/// Convert serde_yaml::Value to yaml_rust_davvid::Yaml
fn convert_serde_to_yaml_rust(value: &serde_yaml::Value) -> Result<yaml_rust_davvid::Yaml> {
    use yaml_rust_davvid::Yaml;

    match value {
        serde_yaml::Value::Null => Ok(Yaml::Null),
        serde_yaml::Value::Bool(b) => Ok(Yaml::Boolean(*b)),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Yaml::Integer(i))
            } else if let Some(f) = n.as_f64() {
                Ok(Yaml::Real(f.to_string()))
            } else {
                Ok(Yaml::String(n.to_string()))
            }
        }
        serde_yaml::Value::String(s) => Ok(Yaml::String(s.clone())),
        serde_yaml::Value::Sequence(seq) => {
            let yaml_seq: Result<Vec<_>> = seq.iter().map(convert_serde_to_yaml_rust).collect();
            Ok(Yaml::Array(yaml_seq?))
        }
        serde_yaml::Value::Mapping(map) => {
            let mut yaml_map = yaml_rust_davvid::yaml::Hash::new();
            for (k, v) in map {
                yaml_map.insert(convert_serde_to_yaml_rust(k)?, convert_serde_to_yaml_rust(v)?);
            }
            Ok(Yaml::Hash(yaml_map))
        }
        serde_yaml::Value::Tagged(tagged) => convert_serde_to_yaml_rust(&tagged.value),
    }
}

/// Deserialize YAML string to data structure
pub fn from_yaml<T: for<'de> Deserialize<'de>>(yaml: &str) -> Result<T> {
    serde_yaml::from_str(yaml).context("Failed to deserialize YAML")
}

/// Read and parse YAML file
pub fn read_yaml_file<T: for<'de> Deserialize<'de>, P: AsRef<Path>>(path: P) -> Result<T> {
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read file: {}", path.as_ref().display()))?;

    from_yaml(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contributors::Contributor;

    #[test]
    fn null_email_is_emitted() {
        let yaml = to_yaml(&vec![Contributor {
            name: "John Smith".to_string(),
            email: None,
            contributions: 2,
        }])
        .unwrap();

        assert!(yaml.contains("name: John Smith"));
        assert!(yaml.contains("email: ~") || yaml.contains("email: null"));
        assert!(yaml.contains("contributions: 2"));
    }

    #[test]
    fn multiline_license_uses_block_scalar() {
        let yaml = to_yaml(&serde_yaml::Value::String(
            "MIT License\n\nCopyright (c) acme\n".to_string(),
        ))
        .unwrap();
        assert!(yaml.contains('|'));
        assert!(yaml.contains("Copyright (c) acme"));
        assert!(!yaml.contains("\\n"));
    }

    #[test]
    fn from_yaml_reports_errors() {
        let parsed: Result<Vec<String>> = from_yaml("key: [unterminated");
        assert!(parsed.is_err());
    }
}
