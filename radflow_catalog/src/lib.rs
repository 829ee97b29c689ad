// SPDX-FileCopyrightText: © 2026 Radflow contributors
// SPDX-License-Identifier: MIT

//! The descriptor catalog for the honeybee-radiance toolchain.
//!
//! One module per simulation domain; each public function declares a single
//! [`radflow_function::FunctionDescriptor`]. Declarations are data: the
//! commands they render are executed by an external workflow engine, never
//! here.

pub mod glare;
pub mod matrix;
pub mod multiphase;
pub mod post_process;
pub mod translate;

use radflow_function::{DescriptorError, FunctionDescriptor, FunctionRegistry};

/// Every catalog descriptor, in declaration order.
pub fn all() -> Result<Vec<FunctionDescriptor>, DescriptorError> {
    Ok(vec![
        glare::dcglare_glare_autonomy()?,
        glare::dcglare()?,
        glare::dcglare_occupancy()?,
        translate::create_radiance_folder()?,
        translate::create_radiance_folder_grid()?,
        translate::create_radiance_folder_view()?,
        translate::create_radiant_enclosure_info()?,
        matrix::add_remove_sky_matrix()?,
        matrix::merge_folder_data()?,
        multiphase::view_matrix()?,
        multiphase::daylight_matrix()?,
        post_process::annual_daylight_metrics()?,
        post_process::annual_irradiance_metrics()?,
        post_process::convert_to_binary()?,
        post_process::sum_row()?,
        post_process::leed_illuminance_credits()?,
        post_process::solar_tracking_synthesis()?,
        post_process::daylight_factor_config()?,
    ])
}

/// A registry preloaded with the whole catalog.
pub fn default_registry() -> anyhow::Result<FunctionRegistry> {
    let registry = FunctionRegistry::new();
    for descriptor in all()? {
        registry.register(descriptor)?;
    }
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_descriptor_constructs_and_registers() {
        let registry = default_registry().unwrap();
        assert_eq!(registry.len(), all().unwrap().len());
    }

    #[test]
    fn catalog_names_are_unique_and_kebab_case() {
        let descriptors = all().unwrap();
        let names: std::collections::HashSet<_> = descriptors.iter().map(|d| d.name().to_string()).collect();
        assert_eq!(names.len(), descriptors.len());
    }

    #[test]
    fn manifests_survive_a_json_round_trip() {
        for descriptor in all().unwrap() {
            let serialized = serde_json::to_string(&descriptor.to_manifest()).unwrap();
            let manifest = serde_json::from_str(&serialized).unwrap();
            let restored = FunctionDescriptor::from_manifest(&manifest).unwrap();
            assert_eq!(restored, descriptor, "manifest of '{}' did not round trip", descriptor.name());
        }
    }
}
