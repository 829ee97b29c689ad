// SPDX-FileCopyrightText: © 2026 Radflow contributors
// SPDX-License-Identifier: MIT

//! Matrix algebra and distributed-folder restructuring.

use radflow_function::{DescriptorError, FunctionDescriptor, InputSpec, OutputSpec};

/// Combine total, direct and sunlight matrices (total − direct + sun) with an
/// optional conversion multiplier handed to rmtxop.
pub fn add_remove_sky_matrix() -> Result<FunctionDescriptor, DescriptorError> {
    FunctionDescriptor::build("add-remove-sky-matrix")
        .description("Multiply a matrix with conversion numbers.")
        .input(
            InputSpec::file("total_sky_matrix")
                .description("Path to matrix for total sky contribution.")
                .path("sky.ill")
                .extensions(&["ill", "dc"]),
        )
        .input(
            InputSpec::file("direct_sky_matrix")
                .description("Path to matrix for direct sky contribution.")
                .path("sky_dir.ill")
                .extensions(&["ill", "dc"]),
        )
        .input(
            InputSpec::file("sunlight_matrix")
                .description("Path to matrix for direct sunlight contribution.")
                .path("sun.ill")
                .extensions(&["ill", "dc"]),
        )
        .input(
            InputSpec::string("conversion")
                .description("Conversion as a string which will be passed to rmtxop -c option.")
                .default(""),
        )
        .command(
            "honeybee-radiance-postprocess mtxop operate-three {{total_sky_matrix}} {{direct_sky_matrix}} {{sunlight_matrix}} --operator-one - --operator-two + --conversion \"{{conversion}}\" --name output",
        )
        .output(OutputSpec::file("results_file", "output.npy").description("Results as a npy file."))
        .finish()
}

/// Restructure files in a distributed folder.
pub fn merge_folder_data() -> Result<FunctionDescriptor, DescriptorError> {
    FunctionDescriptor::build("merge-folder-data")
        .description("Restructure files in a distributed folder.")
        .input(
            InputSpec::folder("input_folder")
                .description("Input sensor grids folder.")
                .path("input_folder"),
        )
        .input(
            InputSpec::string("extension")
                .description("Extension of the files to collect data from. It will be pts for sensor files. Another common extension is ill for the results of daylight studies."),
        )
        .input(
            InputSpec::file("dist_info")
                .description("Distribution information file.")
                .path("dist_info.json")
                .optional(""),
        )
        .command(
            "honeybee-radiance-postprocess grid merge-folder ./input_folder ./output_folder {{extension}} --dist-info dist_info.json",
        )
        .output(
            OutputSpec::folder("output_folder", "output_folder")
                .description("Output folder with newly generated files."),
        )
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn sky_matrix_operate_renders_with_materialized_paths() {
        let function = add_remove_sky_matrix().unwrap();
        assert_eq!(function.name(), "add-remove-sky-matrix");
        assert_eq!(
            function.render_command(&HashMap::new()).unwrap(),
            "honeybee-radiance-postprocess mtxop operate-three sky.ill sky_dir.ill sun.ill \
             --operator-one - --operator-two + --conversion \"\" --name output"
        );
    }

    #[test]
    fn conversion_string_is_substituted_verbatim() {
        let function = add_remove_sky_matrix().unwrap();
        let binding = HashMap::from([(
            "conversion".to_string(),
            radflow_function::Value::Str("47.4 119.9 11.6".to_string()),
        )]);
        let command = function.render_command(&binding).unwrap();
        assert!(command.contains("--conversion \"47.4 119.9 11.6\""));
    }

    #[test]
    fn merge_folder_requires_the_extension() {
        let function = merge_folder_data().unwrap();
        assert!(function.render_command(&HashMap::new()).is_err());
        let binding = HashMap::from([("extension".to_string(), radflow_function::Value::Str("ill".to_string()))]);
        assert_eq!(
            function.render_command(&binding).unwrap(),
            "honeybee-radiance-postprocess grid merge-folder ./input_folder ./output_folder ill --dist-info dist_info.json"
        );
    }
}
