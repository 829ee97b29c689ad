// SPDX-FileCopyrightText: © 2026 Radflow contributors
// SPDX-License-Identifier: MIT

//! HBJSON model translation to Radiance folders and enclosure info.

use radflow_function::{DescriptorError, FunctionDescriptor, InputSpec, OutputSpec};

fn input_model() -> InputSpec {
    InputSpec::file("input_model")
        .description("Path to input HBJSON file.")
        .path("model.hbjson")
        .extensions(&["hbjson", "json"])
}

fn grid_filter() -> InputSpec {
    InputSpec::string("grid_filter")
        .description(
            "Text for a grid identifier or a pattern to filter the sensor grids of the model that are simulated. For instance, first_floor_* will simulate only the sensor grids that have an identifier that starts with first_floor_. By default, all grids in the model will be simulated.",
        )
        .default("*")
}

fn view_filter() -> InputSpec {
    InputSpec::string("view_filter")
        .description(
            "Text for a view identifier or a pattern to filter the views of the model that are simulated. For instance, first_floor_* will simulate only the views that have an identifier that starts with first_floor_. By default, all views in the model will be simulated.",
        )
        .default("*")
}

/// Radiance folder from an HBJSON file, without sensor-grid or view info.
pub fn create_radiance_folder() -> Result<FunctionDescriptor, DescriptorError> {
    FunctionDescriptor::build("create-radiance-folder")
        .description("Create a Radiance folder from a HBJSON input file.")
        .input(input_model())
        .input(grid_filter())
        .input(view_filter())
        .command(
            "honeybee-radiance translate model-to-rad-folder model.hbjson --grid \" {{grid_filter}} \" --view \"{{view_filter}}\"",
        )
        .output(OutputSpec::folder("model_folder", "model").description("Radiance folder."))
        .output(
            OutputSpec::list("receivers", "model/receiver/_info.json")
                .description("Information for all the receivers.")
                .optional(),
        )
        .finish()
}

/// Grid-checked Radiance folder, exposing sensor-grid information.
pub fn create_radiance_folder_grid() -> Result<FunctionDescriptor, DescriptorError> {
    FunctionDescriptor::build("create-radiance-folder-grid")
        .description("Create a Radiance folder from a HBJSON input file.")
        .input(input_model())
        .input(grid_filter())
        .command(
            "honeybee-radiance translate model-to-rad-folder model.hbjson --grid \" {{grid_filter}} \" --grid-check --create-grids",
        )
        .output(OutputSpec::folder("model_folder", "model").description("Radiance folder."))
        .output(
            OutputSpec::file("output_model", "output_model.hbjson")
                .description("Output HBJSON file.")
                .optional(),
        )
        .output(
            OutputSpec::folder("bsdf_folder", "model/bsdf")
                .description("Folder containing any BSDF files needed for the simulation.")
                .optional(),
        )
        .output(
            OutputSpec::list("sensor_grids", "model/grid/_info.json")
                .description("Information for exported sensor grids in the grids subfolder."),
        )
        .output(
            OutputSpec::file("sensor_grids_file", "model/grid/_info.json")
                .description("Information JSON file for exported sensor grids in the grids subfolder."),
        )
        .output(
            OutputSpec::list("model_sensor_grids", "model/grid/_model_grids_info.json")
                .description("Sensor grids information from the HB model."),
        )
        .output(
            OutputSpec::file("model_sensor_grids_file", "model/grid/_model_grids_info.json")
                .description("Sensor grids information from the HB model as a JSON file."),
        )
        .output(
            OutputSpec::list("receivers", "model/receiver/_info.json")
                .description("Information for the states for all dynamic apertures.")
                .optional(),
        )
        .finish()
}

/// View-checked Radiance folder, exposing view information.
pub fn create_radiance_folder_view() -> Result<FunctionDescriptor, DescriptorError> {
    FunctionDescriptor::build("create-radiance-folder-view")
        .description("Create a Radiance folder from a HBJSON input file.")
        .input(input_model())
        .input(view_filter())
        .command(
            "honeybee-radiance translate model-to-rad-folder model.hbjson --view \" {{view_filter}} \" --view-check",
        )
        .output(OutputSpec::folder("model_folder", "model").description("Radiance folder."))
        .output(
            OutputSpec::folder("bsdf_folder", "model/bsdf")
                .description("Folder containing any BSDF files needed for the simulation.")
                .optional(),
        )
        .output(OutputSpec::list("views", "model/view/_info.json").description("Views information."))
        .output(
            OutputSpec::file("views_file", "model/view/_info.json")
                .description("Views information JSON file."),
        )
        .output(
            OutputSpec::list("receivers", "model/receiver/_info.json")
                .description("Information for the states for all dynamic apertures.")
                .optional(),
        )
        .finish()
}

/// Radiant enclosure JSONs for thermal mapping.
pub fn create_radiant_enclosure_info() -> Result<FunctionDescriptor, DescriptorError> {
    FunctionDescriptor::build("create-radiant-enclosure-info")
        .description("Create JSONs with radiant enclosure information from a HBJSON input file.")
        .input(InputSpec::file("model").description("Path to input HBJSON file.").path("model.hbjson"))
        .command(
            "honeybee-radiance translate model-radiant-enclosure-info model.hbjson --folder output --log-file enclosure_list.json",
        )
        .output(
            OutputSpec::dict("enclosure_list", "enclosure_list.json")
                .description("A list of dictionaries that include information about generated radiant enclosure files."),
        )
        .output(
            OutputSpec::file("enclosure_list_file", "enclosure_list.json")
                .description("A JSON file that includes information about generated radiant enclosure files."),
        )
        .output(
            OutputSpec::folder("output_folder", "output")
                .description("Output folder with the enclosure info JSONs for each grid."),
        )
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn folder_translation_renders_with_default_filters() {
        let function = create_radiance_folder().unwrap();
        assert_eq!(function.name(), "create-radiance-folder");
        assert_eq!(
            function.render_command(&HashMap::new()).unwrap(),
            "honeybee-radiance translate model-to-rad-folder model.hbjson --grid \" * \" --view \"*\""
        );
    }

    #[test]
    fn grid_variant_accepts_a_custom_filter() {
        let function = create_radiance_folder_grid().unwrap();
        let binding = HashMap::from([(
            "grid_filter".to_string(),
            radflow_function::Value::Str("first_floor_*".to_string()),
        )]);
        assert_eq!(
            function.render_command(&binding).unwrap(),
            "honeybee-radiance translate model-to-rad-folder model.hbjson --grid \" first_floor_* \" --grid-check --create-grids"
        );
    }

    #[test]
    fn grid_variant_exposes_sensor_grid_info() {
        let function = create_radiance_folder_grid().unwrap();
        let resolved = function.resolve_outputs(std::path::Path::new("/run/42"));
        assert_eq!(
            resolved["sensor_grids_file"],
            std::path::PathBuf::from("/run/42/model/grid/_info.json")
        );
        assert!(function.output("bsdf_folder").unwrap().optional);
    }

    #[test]
    fn view_variant_renders() {
        let function = create_radiance_folder_view().unwrap();
        assert_eq!(
            function.render_command(&HashMap::new()).unwrap(),
            "honeybee-radiance translate model-to-rad-folder model.hbjson --view \" * \" --view-check"
        );
    }

    #[test]
    fn enclosure_info_has_a_literal_command() {
        let function = create_radiant_enclosure_info().unwrap();
        assert_eq!(
            function.render_command(&HashMap::new()).unwrap(),
            function.command_template()
        );
    }
}
