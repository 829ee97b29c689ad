// SPDX-FileCopyrightText: © 2026 Radflow contributors
// SPDX-License-Identifier: MIT

//! JSON interchange form of a descriptor.
//!
//! Manifests are what the orchestrator sees during discovery. Import goes
//! back through the builder, so a deserialized manifest is validated exactly
//! like a hand-written declaration.

use crate::descriptor::{FunctionDescriptor, InputSpec, OutputSpec};
use crate::error::DescriptorError;
use crate::value::{DataType, Value};

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FunctionManifest {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default)]
    pub inputs: Vec<InputManifest>,
    pub command: String,
    #[serde(default)]
    pub outputs: Vec<OutputManifest>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InputManifest {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: DataType,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<String>>,
    #[serde(default)]
    pub optional: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub when_absent: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OutputManifest {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: DataType,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub path: String,
    #[serde(default)]
    pub optional: bool,
}

impl FunctionDescriptor {
    pub fn to_manifest(&self) -> FunctionManifest {
        FunctionManifest {
            name: self.name().to_string(),
            description: self.description().to_string(),
            inputs: self
                .inputs()
                .iter()
                .map(|input| InputManifest {
                    name: input.name.clone(),
                    data_type: input.data_type,
                    description: input.description.clone(),
                    default: input.default.as_ref().map(Value::to_json),
                    path: input.path.clone(),
                    extensions: input.extensions.clone(),
                    optional: input.optional,
                    when_absent: input.when_absent.clone(),
                })
                .collect(),
            command: self.command_template().to_string(),
            outputs: self
                .outputs()
                .iter()
                .map(|output| OutputManifest {
                    name: output.name.clone(),
                    data_type: output.data_type,
                    description: output.description.clone(),
                    path: output.path.clone(),
                    optional: output.optional,
                })
                .collect(),
        }
    }

    pub fn from_manifest(manifest: &FunctionManifest) -> Result<Self, DescriptorError> {
        let mut builder = FunctionDescriptor::build(&manifest.name).description(&manifest.description);
        for input in &manifest.inputs {
            builder = builder.input(InputSpec {
                name: input.name.clone(),
                data_type: input.data_type,
                description: input.description.clone(),
                default: default_value(&manifest.name, input)?,
                path: input.path.clone(),
                extensions: input.extensions.clone(),
                optional: input.optional,
                when_absent: input.when_absent.clone(),
            });
        }
        builder = builder.command(&manifest.command);
        for output in &manifest.outputs {
            builder = builder.output(OutputSpec {
                name: output.name.clone(),
                data_type: output.data_type,
                description: output.description.clone(),
                path: output.path.clone(),
                optional: output.optional,
            });
        }
        builder.finish()
    }
}

/// Convert a manifest default to a typed value, honoring the declared
/// input type so that re-imported descriptors render identically.
fn default_value(function: &str, input: &InputManifest) -> Result<Option<Value>, DescriptorError> {
    let Some(raw) = &input.default else {
        return Ok(None);
    };
    let invalid = || DescriptorError::InvalidDefault {
        function: function.to_string(),
        input: input.name.clone(),
        data_type: input.data_type,
    };
    let value = match (input.data_type, raw) {
        (DataType::String, serde_json::Value::String(s)) => Value::Str(s.clone()),
        (DataType::File | DataType::Folder, serde_json::Value::String(s)) => {
            Value::Path(std::path::PathBuf::from(s))
        }
        (DataType::Float, serde_json::Value::Number(n)) => Value::Float(n.as_f64().ok_or_else(invalid)?),
        (DataType::Integer, serde_json::Value::Number(n)) => Value::Integer(n.as_i64().ok_or_else(invalid)?),
        (DataType::List, serde_json::Value::Array(_)) | (DataType::Dict, serde_json::Value::Object(_)) => {
            Value::from_json(raw).ok_or_else(invalid)?
        }
        _ => return Err(invalid()),
    };
    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annual_metrics() -> FunctionDescriptor {
        FunctionDescriptor::build("annual-daylight-metrics")
            .description("Calculate annual daylight metrics.")
            .input(InputSpec::folder("folder").path("raw_results"))
            .input(InputSpec::file("schedule").path("schedule.txt").optional(""))
            .input(InputSpec::string("thresholds").default("-t 300 -lt 100 -ut 3000"))
            .input(InputSpec::float("scale").default(2000.0))
            .command("annual-daylight raw_results --schedule schedule.txt {{thresholds}} --scale {{scale}}")
            .output(OutputSpec::folder("metrics", "metrics"))
            .output(OutputSpec::file("config", "metrics/config.json"))
            .finish()
            .unwrap()
    }

    #[test]
    fn manifests_round_trip() {
        let descriptor = annual_metrics();
        let manifest = descriptor.to_manifest();
        let restored = FunctionDescriptor::from_manifest(&manifest).unwrap();
        assert_eq!(restored, descriptor);
    }

    #[test]
    fn json_round_trip_preserves_rendered_commands() {
        let descriptor = annual_metrics();
        let serialized = serde_json::to_string(&descriptor.to_manifest()).unwrap();
        let manifest: FunctionManifest = serde_json::from_str(&serialized).unwrap();
        let restored = FunctionDescriptor::from_manifest(&manifest).unwrap();
        let binding = std::collections::HashMap::new();
        assert_eq!(
            restored.render_command(&binding).unwrap(),
            descriptor.render_command(&binding).unwrap()
        );
    }

    #[test]
    fn input_types_serialize_lowercase() {
        let manifest = annual_metrics().to_manifest();
        let json = serde_json::to_value(&manifest).unwrap();
        assert_eq!(json["inputs"][0]["type"], "folder");
        assert_eq!(json["outputs"][1]["type"], "file");
    }

    #[test]
    fn malformed_manifests_are_rejected_on_import() {
        let mut manifest = annual_metrics().to_manifest();
        manifest.command = "annual-daylight {{undeclared}}".to_string();
        let result = FunctionDescriptor::from_manifest(&manifest);
        assert!(matches!(result, Err(DescriptorError::MalformedTemplate { .. })));
    }

    #[test]
    fn mistyped_defaults_are_rejected_on_import() {
        let mut manifest = annual_metrics().to_manifest();
        manifest.inputs[3].default = Some(serde_json::Value::from("not a number"));
        let result = FunctionDescriptor::from_manifest(&manifest);
        assert!(matches!(result, Err(DescriptorError::InvalidDefault { .. })));
    }
}
