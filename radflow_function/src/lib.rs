// SPDX-FileCopyrightText: © 2026 Radflow contributors
// SPDX-License-Identifier: MIT

//! Declarative descriptors for command-line invocations of the Radiance
//! daylight/glare toolchain.
//!
//! A [`descriptor::FunctionDescriptor`] pairs typed inputs, one command
//! template, and typed outputs. An external workflow engine discovers
//! descriptors through a [`registry::FunctionRegistry`], renders their
//! commands with concrete input bindings, and resolves their outputs against
//! the execution folder. This crate owns only that metadata layer: it never
//! runs the simulation binaries.

pub mod descriptor;
pub mod error;
pub mod manifest;
pub mod registry;
pub mod template;
pub mod value;

pub use descriptor::{DescriptorBuilder, FunctionDescriptor, InputSpec, OutputSpec};
pub use error::{DescriptorError, RegistryError, RenderError};
pub use registry::FunctionRegistry;
pub use value::{DataType, Value};
