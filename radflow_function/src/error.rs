// SPDX-FileCopyrightText: © 2026 Radflow contributors
// SPDX-License-Identifier: MIT

use crate::value::DataType;

/// Structural problems detected when a descriptor is constructed.
///
/// All of these are authoring mistakes: they are raised at declaration time,
/// never while rendering a command.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DescriptorError {
    #[error("function name '{0}' is not kebab-case")]
    InvalidName(String),
    #[error("duplicate input '{input}' in function '{function}'")]
    DuplicateInput { function: String, input: String },
    #[error("duplicate output '{output}' in function '{function}'")]
    DuplicateOutput { function: String, output: String },
    #[error("command template of function '{function}' references undeclared input '{placeholder}'")]
    MalformedTemplate { function: String, placeholder: String },
    #[error("function '{0}' has no command template")]
    MissingCommand(String),
    #[error("output '{output}' of function '{function}' has non-relative path '{path}'")]
    OutputPathNotRelative {
        function: String,
        output: String,
        path: String,
    },
    #[error("output '{output}' of function '{function}' contains a placeholder, output paths must be literal")]
    PlaceholderInOutputPath { function: String, output: String },
    #[error("default for input '{input}' of function '{function}' is not a valid {data_type} value")]
    InvalidDefault {
        function: String,
        input: String,
        data_type: DataType,
    },
}

/// Registry lookup and insertion failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("a function named '{0}' is already registered")]
    DuplicateName(String),
    #[error("no function named '{0}' is registered")]
    NotFound(String),
}

/// An input binding was incomplete at render time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("no value bound for required input '{input}' of function '{function}'")]
    MissingInput { function: String, input: String },
}
