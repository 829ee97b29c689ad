// SPDX-FileCopyrightText: © 2026 Radflow contributors
// SPDX-License-Identifier: MIT

use crate::descriptor::FunctionDescriptor;
use crate::error::RegistryError;

/// Append-only catalog of function descriptors, keyed by function name.
///
/// Registration takes the write lock, discovery the read lock, so the
/// orchestrator may look descriptors up while registration is still going
/// on elsewhere. Descriptors are handed out behind `Arc`: once registered
/// they are shared, never replaced.
pub struct FunctionRegistry {
    descriptors: std::sync::RwLock<std::collections::HashMap<String, std::sync::Arc<FunctionDescriptor>>>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self {
            descriptors: std::sync::RwLock::new(std::collections::HashMap::new()),
        }
    }

    /// Add a descriptor to the catalog. The registry is unchanged if the
    /// name is already taken.
    pub fn register(&self, descriptor: FunctionDescriptor) -> Result<(), RegistryError> {
        let mut descriptors = self.descriptors.write().unwrap();
        if descriptors.contains_key(descriptor.name()) {
            return Err(RegistryError::DuplicateName(descriptor.name().to_string()));
        }
        log::debug!("registering function '{}'", descriptor.name());
        descriptors.insert(descriptor.name().to_string(), std::sync::Arc::new(descriptor));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<std::sync::Arc<FunctionDescriptor>, RegistryError> {
        self.descriptors
            .read()
            .unwrap()
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }

    /// Registered function names, sorted for deterministic listings.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.descriptors.read().unwrap().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.descriptors.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.read().unwrap().is_empty()
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
