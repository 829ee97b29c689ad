// SPDX-FileCopyrightText: © 2026 Radflow contributors
// SPDX-License-Identifier: MIT

//! Function descriptors: typed inputs, one command template, typed outputs.
//!
//! Descriptors are immutable once built. All structural validation happens in
//! [`DescriptorBuilder::finish`] so that a malformed declaration fails at
//! construction, not when the orchestrator renders it.

use crate::error::{DescriptorError, RenderError};
use crate::template::{self, Template};
use crate::value::{DataType, Value};

static KEBAB_NAME: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();

fn kebab_name_regex() -> &'static regex::Regex {
    KEBAB_NAME.get_or_init(|| regex::Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap())
}

/// One named, typed input of a function.
///
/// `path` is the relative filename the orchestrator materializes the value
/// as inside the execution folder; commands that mention the file literally
/// rely on it. `when_absent` is the literal segment substituted for an
/// optional input with no bound value, declared explicitly per input.
#[derive(Debug, Clone, PartialEq)]
pub struct InputSpec {
    pub name: String,
    pub data_type: DataType,
    pub description: String,
    pub default: Option<Value>,
    pub path: Option<String>,
    pub extensions: Option<Vec<String>>,
    pub optional: bool,
    pub when_absent: String,
}

impl InputSpec {
    fn typed(name: &str, data_type: DataType) -> Self {
        Self {
            name: name.to_string(),
            data_type,
            description: String::new(),
            default: None,
            path: None,
            extensions: None,
            optional: false,
            when_absent: String::new(),
        }
    }

    pub fn file(name: &str) -> Self {
        Self::typed(name, DataType::File)
    }

    pub fn folder(name: &str) -> Self {
        Self::typed(name, DataType::Folder)
    }

    pub fn string(name: &str) -> Self {
        Self::typed(name, DataType::String)
    }

    pub fn float(name: &str) -> Self {
        Self::typed(name, DataType::Float)
    }

    pub fn integer(name: &str) -> Self {
        Self::typed(name, DataType::Integer)
    }

    pub fn list(name: &str) -> Self {
        Self::typed(name, DataType::List)
    }

    pub fn dict(name: &str) -> Self {
        Self::typed(name, DataType::Dict)
    }

    pub fn description(mut self, text: &str) -> Self {
        self.description = text.to_string();
        self
    }

    pub fn path(mut self, path: &str) -> Self {
        self.path = Some(path.to_string());
        self
    }

    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn extensions(mut self, extensions: &[&str]) -> Self {
        self.extensions = Some(extensions.iter().map(|e| e.to_string()).collect());
        self
    }

    /// Mark the input optional and declare the literal segment used when no
    /// value is bound.
    pub fn optional(mut self, when_absent: &str) -> Self {
        self.optional = true;
        self.when_absent = when_absent.to_string();
        self
    }
}

/// One named, typed output of a function, at a path relative to the
/// execution folder. List and dict outputs point at JSON files written by
/// the external binaries; their content is opaque at this layer.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputSpec {
    pub name: String,
    pub data_type: DataType,
    pub description: String,
    pub path: String,
    pub optional: bool,
}

impl OutputSpec {
    fn typed(name: &str, path: &str, data_type: DataType) -> Self {
        Self {
            name: name.to_string(),
            data_type,
            description: String::new(),
            path: path.to_string(),
            optional: false,
        }
    }

    pub fn file(name: &str, path: &str) -> Self {
        Self::typed(name, path, DataType::File)
    }

    pub fn folder(name: &str, path: &str) -> Self {
        Self::typed(name, path, DataType::Folder)
    }

    pub fn list(name: &str, path: &str) -> Self {
        Self::typed(name, path, DataType::List)
    }

    pub fn dict(name: &str, path: &str) -> Self {
        Self::typed(name, path, DataType::Dict)
    }

    pub fn description(mut self, text: &str) -> Self {
        self.description = text.to_string();
        self
    }

    /// Absence of the file after execution is tolerated; callers check
    /// existence before using the resolved path.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// A declarative unit describing one invocation of the simulation toolchain.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDescriptor {
    name: String,
    description: String,
    inputs: Vec<InputSpec>,
    command: Template,
    outputs: Vec<OutputSpec>,
}

impl FunctionDescriptor {
    pub fn build(name: &str) -> DescriptorBuilder {
        DescriptorBuilder {
            name: name.to_string(),
            description: String::new(),
            inputs: Vec::new(),
            command: None,
            outputs: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn inputs(&self) -> &[InputSpec] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[OutputSpec] {
        &self.outputs
    }

    pub fn command_template(&self) -> &str {
        self.command.as_str()
    }

    pub fn input(&self, name: &str) -> Option<&InputSpec> {
        self.inputs.iter().find(|input| input.name == name)
    }

    pub fn output(&self, name: &str) -> Option<&OutputSpec> {
        self.outputs.iter().find(|output| output.name == name)
    }

    /// Render the shell command for a concrete input binding.
    ///
    /// Each placeholder resolves, in order, to: the bound value's string
    /// form, the declared default, the materialization path for file/folder
    /// inputs, the `when_absent` segment for optional inputs. A required
    /// input with none of those fails with [`RenderError::MissingInput`].
    ///
    /// Rendering is pure: the same descriptor and binding always produce
    /// byte-identical commands. Bindings that disagree with the declared
    /// type or extensions are tolerated with a warning.
    pub fn render_command(
        &self,
        binding: &std::collections::HashMap<String, Value>,
    ) -> Result<String, RenderError> {
        for (name, value) in binding {
            match self.input(name) {
                None => log::warn!("function '{}': binding provides unknown input '{}'", self.name, name),
                Some(input) => {
                    if !value.matches(input.data_type) {
                        log::warn!(
                            "function '{}': input '{}' expects a {} value",
                            self.name,
                            name,
                            input.data_type
                        );
                    }
                    if let (Some(extensions), Value::Path(path)) = (&input.extensions, value) {
                        let accepted = path
                            .extension()
                            .map(|ext| extensions.iter().any(|allowed| ext == allowed.as_str()))
                            .unwrap_or(false);
                        if !accepted {
                            log::warn!(
                                "function '{}': input '{}' expects one of the extensions {:?}",
                                self.name,
                                name,
                                extensions
                            );
                        }
                    }
                }
            }
        }

        self.command.render(|placeholder| {
            if let Some(value) = binding.get(placeholder) {
                return Ok(value.render());
            }
            let input = self.input(placeholder).ok_or_else(|| RenderError::MissingInput {
                function: self.name.clone(),
                input: placeholder.to_string(),
            })?;
            if let Some(default) = &input.default {
                Ok(default.render())
            } else if let (DataType::File | DataType::Folder, Some(path)) = (input.data_type, &input.path) {
                Ok(path.clone())
            } else if input.optional {
                Ok(input.when_absent.clone())
            } else {
                Err(RenderError::MissingInput {
                    function: self.name.clone(),
                    input: placeholder.to_string(),
                })
            }
        })
    }

    /// Map every declared output to its absolute path under the execution
    /// folder. Infallible: output paths are validated at construction.
    pub fn resolve_outputs(
        &self,
        execution_folder: &std::path::Path,
    ) -> std::collections::HashMap<String, std::path::PathBuf> {
        self.outputs
            .iter()
            .map(|output| (output.name.clone(), execution_folder.join(&output.path)))
            .collect()
    }
}

/// Accumulates the parts of a [`FunctionDescriptor`] and validates them.
pub struct DescriptorBuilder {
    name: String,
    description: String,
    inputs: Vec<InputSpec>,
    command: Option<String>,
    outputs: Vec<OutputSpec>,
}

impl DescriptorBuilder {
    pub fn description(mut self, text: &str) -> Self {
        self.description = text.to_string();
        self
    }

    pub fn input(mut self, input: InputSpec) -> Self {
        self.inputs.push(input);
        self
    }

    pub fn command(mut self, template: &str) -> Self {
        self.command = Some(template.to_string());
        self
    }

    pub fn output(mut self, output: OutputSpec) -> Self {
        self.outputs.push(output);
        self
    }

    /// Validate the declaration and freeze it into a descriptor.
    pub fn finish(self) -> Result<FunctionDescriptor, DescriptorError> {
        if !kebab_name_regex().is_match(&self.name) {
            return Err(DescriptorError::InvalidName(self.name));
        }

        let mut input_names = std::collections::HashSet::new();
        for input in &self.inputs {
            if !input_names.insert(input.name.as_str()) {
                return Err(DescriptorError::DuplicateInput {
                    function: self.name,
                    input: input.name.clone(),
                });
            }
        }
        let mut output_names = std::collections::HashSet::new();
        for output in &self.outputs {
            if !output_names.insert(output.name.as_str()) {
                return Err(DescriptorError::DuplicateOutput {
                    function: self.name,
                    output: output.name.clone(),
                });
            }
        }

        let command = match self.command {
            Some(command) if !command.is_empty() => command,
            _ => return Err(DescriptorError::MissingCommand(self.name)),
        };
        let command = Template::parse(&command);
        for placeholder in command.placeholders() {
            if !input_names.contains(placeholder) {
                return Err(DescriptorError::MalformedTemplate {
                    function: self.name,
                    placeholder: placeholder.to_string(),
                });
            }
        }

        for output in &self.outputs {
            if output.path.is_empty() || std::path::Path::new(&output.path).is_absolute() {
                return Err(DescriptorError::OutputPathNotRelative {
                    function: self.name,
                    output: output.name.clone(),
                    path: output.path.clone(),
                });
            }
            if template::contains_placeholder(&output.path) {
                return Err(DescriptorError::PlaceholderInOutputPath {
                    function: self.name,
                    output: output.name.clone(),
                });
            }
        }

        Ok(FunctionDescriptor {
            name: self.name,
            description: self.description,
            inputs: self.inputs,
            command,
            outputs: self.outputs,
        })
    }
}
