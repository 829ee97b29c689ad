// SPDX-FileCopyrightText: © 2026 Radflow contributors
// SPDX-License-Identifier: MIT

//! View and daylight matrix generation for multi-phase simulations.

use radflow_function::{DescriptorError, FunctionDescriptor, InputSpec, OutputSpec};

fn radiance_parameters(default: &str) -> InputSpec {
    InputSpec::string("radiance_parameters")
        .description("Radiance parameters for the matrix calculation.")
        .default(default)
}

fn fixed_radiance_parameters(default: &str) -> InputSpec {
    InputSpec::string("fixed_radiance_parameters")
        .description("Radiance parameters that are not subject to user change.")
        .default(default)
}

/// View matrix from a sensor grid to a receiver.
pub fn view_matrix() -> Result<FunctionDescriptor, DescriptorError> {
    FunctionDescriptor::build("view-matrix")
        .description("Calculate view matrix for a receiver file.")
        .input(radiance_parameters("-ab 2 -ad 5000 -lw 2e-05"))
        .input(fixed_radiance_parameters("-aa 0.0 -I -c 1"))
        .input(InputSpec::integer("sensor_count").description("Number of sensors in the sensor grid."))
        .input(InputSpec::file("receiver_file").description("Path to receiver file.").path("receiver.rad"))
        .input(InputSpec::file("sensor_grid").description("Path to sensor grid file.").path("grid.pts"))
        .input(InputSpec::file("scene_file").description("Path to an octree file of the scene.").path("scene.oct"))
        .input(
            InputSpec::folder("bsdf_folder")
                .description("Folder containing any BSDF files needed for the simulation.")
                .path("model/bsdf")
                .optional(""),
        )
        .command(
            "honeybee-radiance multi-phase view-matrix receiver.rad scene.oct grid.pts --sensor-count {{sensor_count}} --rad-params \"{{radiance_parameters}}\" --rad-params-locked \"{{fixed_radiance_parameters}}\" --output-folder vmtx",
        )
        .output(OutputSpec::folder("view_mtx", "vmtx").description("Folder with view matrix files."))
        .finish()
}

/// Daylight matrix from the sky dome to a receiver.
pub fn daylight_matrix() -> Result<FunctionDescriptor, DescriptorError> {
    FunctionDescriptor::build("daylight-matrix")
        .description("Calculate daylight matrix for a receiver file.")
        .input(radiance_parameters("-ab 2 -ad 5000 -lw 2e-05"))
        .input(fixed_radiance_parameters("-aa 0.0"))
        .input(InputSpec::file("sky_dome").description("Path to sky dome file.").path("sky.dome"))
        .input(InputSpec::file("receiver_file").description("Path to receiver file.").path("receiver.rad"))
        .input(InputSpec::file("scene_file").description("Path to an octree file of the scene.").path("scene.oct"))
        .input(
            InputSpec::folder("bsdf_folder")
                .description("Folder containing any BSDF files needed for the simulation.")
                .path("model/bsdf")
                .optional(""),
        )
        .command(
            "honeybee-radiance multi-phase daylight-matrix sky.dome receiver.rad scene.oct --rad-params \"{{radiance_parameters}}\" --rad-params-locked \"{{fixed_radiance_parameters}}\" --output-folder dmtx",
        )
        .output(OutputSpec::folder("daylight_mtx", "dmtx").description("Folder with daylight matrix files."))
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn view_matrix_requires_the_sensor_count() {
        let function = view_matrix().unwrap();
        assert_eq!(function.name(), "view-matrix");
        assert!(function.render_command(&HashMap::new()).is_err());
        let binding = HashMap::from([("sensor_count".to_string(), radflow_function::Value::Integer(200))]);
        assert_eq!(
            function.render_command(&binding).unwrap(),
            "honeybee-radiance multi-phase view-matrix receiver.rad scene.oct grid.pts \
             --sensor-count 200 --rad-params \"-ab 2 -ad 5000 -lw 2e-05\" \
             --rad-params-locked \"-aa 0.0 -I -c 1\" --output-folder vmtx"
        );
    }

    #[test]
    fn daylight_matrix_renders_with_defaults() {
        let function = daylight_matrix().unwrap();
        assert_eq!(function.name(), "daylight-matrix");
        assert_eq!(
            function.render_command(&HashMap::new()).unwrap(),
            "honeybee-radiance multi-phase daylight-matrix sky.dome receiver.rad scene.oct \
             --rad-params \"-ab 2 -ad 5000 -lw 2e-05\" --rad-params-locked \"-aa 0.0\" \
             --output-folder dmtx"
        );
    }
}
