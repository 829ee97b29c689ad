// SPDX-FileCopyrightText: © 2026 Radflow contributors
// SPDX-License-Identifier: MIT

//! Post-processing of raw annual simulation results into metrics.

use radflow_function::{DescriptorError, FunctionDescriptor, InputSpec, OutputSpec};

/// Annual daylight metrics (DA, cDA, UDI) from raw annual results.
pub fn annual_daylight_metrics() -> Result<FunctionDescriptor, DescriptorError> {
    FunctionDescriptor::build("annual-daylight-metrics")
        .description("Calculate annual daylight metrics for annual daylight simulation.")
        .input(
            InputSpec::folder("folder")
                .description("Output folder of an annual daylight recipe, including grids_info.json and sun-up-hours.txt. The command uses the list in grids_info.json to find the result files for each sensor grid.")
                .path("raw_results"),
        )
        .input(
            InputSpec::file("schedule")
                .description("Path to an annual schedule file. Values should be 0-1 separated by new line. If not provided an 8-5 annual schedule will be created.")
                .path("schedule.txt")
                .optional(""),
        )
        .input(
            InputSpec::string("thresholds")
                .description("A string to change the threshold for daylight autonomy and useful daylight illuminance. Valid keys are -t for daylight autonomy threshold, -lt for the lower threshold for useful daylight illuminance and -ut for the upper threshold. The order of the keys is not important and you can include one or all of them.")
                .default("-t 300 -lt 100 -ut 3000"),
        )
        .command(
            "honeybee-radiance-postprocess post-process annual-daylight raw_results --schedule schedule.txt {{thresholds}} --sub_folder ../metrics",
        )
        .output(
            OutputSpec::folder("annual_metrics", "metrics")
                .description("Annual metrics folder. This folder includes all the other subfolders which are also exposed as separate outputs."),
        )
        .output(
            OutputSpec::file("metrics_info", "metrics/config.json")
                .description("A config file with metrics subfolders information for visualization."),
        )
        .output(OutputSpec::folder("daylight_autonomy", "metrics/da").description("Daylight autonomy results."))
        .output(
            OutputSpec::folder("continuous_daylight_autonomy", "metrics/cda")
                .description("Continuous daylight autonomy results."),
        )
        .output(
            OutputSpec::folder("useful_daylight_illuminance_lower", "metrics/udi_lower")
                .description("Lower useful daylight illuminance results."),
        )
        .output(
            OutputSpec::folder("useful_daylight_illuminance", "metrics/udi")
                .description("Useful daylight illuminance results."),
        )
        .output(
            OutputSpec::folder("useful_daylight_illuminance_upper", "metrics/udi_upper")
                .description("Upper useful daylight illuminance results."),
        )
        .finish()
}

/// Average/peak irradiance and cumulative radiation from raw annual results.
pub fn annual_irradiance_metrics() -> Result<FunctionDescriptor, DescriptorError> {
    FunctionDescriptor::build("annual-irradiance-metrics")
        .description("Calculate annual irradiance metrics for an annual irradiance simulation.")
        .input(
            InputSpec::folder("folder")
                .description("Output folder of an annual irradiance recipe.")
                .path("raw_results"),
        )
        .input(
            InputSpec::file("wea")
                .description("The wea file used in the simulation.")
                .path("wea.wea")
                .extensions(&["wea"]),
        )
        .input(
            InputSpec::integer("timestep")
                .description("Timestep of the simulation in hours.")
                .default(1_i64),
        )
        .command(
            "honeybee-radiance-postprocess post-process annual-irradiance raw_results wea.wea --timestep {{timestep}} --sub-folder ../metrics",
        )
        .output(
            OutputSpec::folder("annual_metrics", "metrics")
                .description("Annual irradiance metrics folder."),
        )
        .output(
            OutputSpec::file("metrics_info", "metrics/config.json")
                .description("A config file with metrics subfolders information for visualization."),
        )
        .finish()
}

/// Matrix to 0-1 matrix given a value range.
pub fn convert_to_binary() -> Result<FunctionDescriptor, DescriptorError> {
    FunctionDescriptor::build("convert-to-binary")
        .description("Convert a matrix to a new matrix with 0-1 values.")
        .input(InputSpec::file("input_mtx").description("Input matrix file.").path("input.mtx"))
        .input(
            InputSpec::float("minimum")
                .description("Minimum range for the values that will be converted to 1.")
                .default(0.0),
        )
        .input(
            InputSpec::float("maximum")
                .description("Maximum range for the values that will be converted to 1.")
                .default(10000.0),
        )
        .command(
            "honeybee-radiance-postprocess post-process convert-to-binary input.mtx --minimum {{minimum}} --maximum {{maximum}} --output binary.mtx",
        )
        .output(OutputSpec::file("output_mtx", "binary.mtx").description("Binary matrix."))
        .finish()
}

/// Sum each row of a matrix into a single-column matrix.
pub fn sum_row() -> Result<FunctionDescriptor, DescriptorError> {
    FunctionDescriptor::build("sum-row")
        .description("Sum values in each row of a matrix.")
        .input(InputSpec::file("input_mtx").description("Input matrix file.").path("input.mtx"))
        .input(
            InputSpec::float("divisor")
                .description("An optional number, that the summed row will be divided by.")
                .default(1.0),
        )
        .command(
            "honeybee-radiance-postprocess post-process sum-row input.mtx --divisor {{divisor}} --output sum.mtx",
        )
        .output(OutputSpec::file("output_mtx", "sum.mtx").description("Single-column matrix with summed rows."))
        .finish()
}

/// Synthesized annual daylight results for a dynamically tracking system,
/// picking the best tracking state for each sun-up hour.
pub fn solar_tracking_synthesis() -> Result<FunctionDescriptor, DescriptorError> {
    FunctionDescriptor::build("solar-tracking-synthesis")
        .description("Synthesize annual daylight results for a dynamically tracking system.")
        .input(
            InputSpec::folder("folder")
                .description("Results folder containing the simulated result folders for each tracking state.")
                .path("results"),
        )
        .input(
            InputSpec::file("sun_up_hours")
                .description("Path to the sun-up-hours file of the annual simulation.")
                .path("sun-up-hours.txt"),
        )
        .input(
            InputSpec::file("location")
                .description("A JSON file with the location information used to compute sun positions.")
                .path("location.json")
                .extensions(&["json"]),
        )
        .input(
            InputSpec::float("north")
                .description("Angle in degrees between true north and the Y axis of the model.")
                .default(0.0),
        )
        .input(
            InputSpec::integer("tracking_increment")
                .description("Increment of the tracking system rotation in degrees.")
                .default(5_i64),
        )
        .command(
            "honeybee-radiance post-process solar-tracking results location.json sun-up-hours.txt --tracking-increment {{tracking_increment}} --north {{north}} --sub-folder final",
        )
        .output(
            OutputSpec::folder("synthesized_results", "final")
                .description("Folder with synthesized results for the tracking system."),
        )
        .finish()
}

/// Visualization config file for daylight factor results.
pub fn daylight_factor_config() -> Result<FunctionDescriptor, DescriptorError> {
    FunctionDescriptor::build("daylight-factor-config")
        .description("Create a visualization config file for daylight factor results.")
        .input(
            InputSpec::folder("factor")
                .description("Daylight factor results folder.")
                .path("factor"),
        )
        .command("honeybee-radiance post-process daylight-factor-config factor --output factor/config.json")
        .output(
            OutputSpec::file("config", "factor/config.json")
                .description("A config file with daylight factor folder information for visualization."),
        )
        .finish()
}

/// LEED daylight-credit summary from an illuminance results folder.
pub fn leed_illuminance_credits() -> Result<FunctionDescriptor, DescriptorError> {
    FunctionDescriptor::build("leed-illuminance-credits")
        .description("Estimate LEED daylight credits from two point-in-time illuminance simulations.")
        .input(
            InputSpec::folder("folder")
                .description("Folder with illuminance results for the 9AM and 3PM simulations.")
                .path("results"),
        )
        .command(
            "honeybee-radiance-postprocess post-process leed-illuminance results --sub-folder pass_fail",
        )
        .output(
            OutputSpec::folder("pass_fail_results", "pass_fail")
                .description("Folder with pass/fail results for each sensor."),
        )
        .output(
            OutputSpec::dict("credit_summary", "pass_fail/credit_summary.json")
                .description("Summary of the credits achieved."),
        )
        .output(
            OutputSpec::file("credit_summary_file", "pass_fail/credit_summary.json")
                .description("Summary of the credits achieved as a JSON file."),
        )
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn annual_daylight_metrics_renders_with_defaults() {
        let function = annual_daylight_metrics().unwrap();
        assert_eq!(function.name(), "annual-daylight-metrics");
        assert_eq!(
            function.render_command(&HashMap::new()).unwrap(),
            "honeybee-radiance-postprocess post-process annual-daylight raw_results \
             --schedule schedule.txt -t 300 -lt 100 -ut 3000 --sub_folder ../metrics"
        );
    }

    #[test]
    fn daylight_autonomy_resolves_under_the_execution_folder() {
        let function = annual_daylight_metrics().unwrap();
        let resolved = function.resolve_outputs(std::path::Path::new("/run/123"));
        assert_eq!(
            resolved["daylight_autonomy"],
            std::path::PathBuf::from("/run/123/metrics/da")
        );
    }

    #[test]
    fn custom_thresholds_replace_the_default() {
        let function = annual_daylight_metrics().unwrap();
        let binding = HashMap::from([(
            "thresholds".to_string(),
            radflow_function::Value::Str("-ut 2000".to_string()),
        )]);
        let command = function.render_command(&binding).unwrap();
        assert!(command.contains(" -ut 2000 --sub_folder"));
        assert!(!command.contains("-t 300"));
    }

    #[test]
    fn irradiance_metrics_use_an_integer_timestep() {
        let function = annual_irradiance_metrics().unwrap();
        assert_eq!(function.name(), "annual-irradiance-metrics");
        let command = function.render_command(&HashMap::new()).unwrap();
        assert!(command.contains("--timestep 1 "));
    }

    #[test]
    fn convert_to_binary_renders_stable_thresholds() {
        let function = convert_to_binary().unwrap();
        assert_eq!(function.name(), "convert-to-binary");
        assert_eq!(
            function.render_command(&HashMap::new()).unwrap(),
            "honeybee-radiance-postprocess post-process convert-to-binary input.mtx \
             --minimum 0 --maximum 10000 --output binary.mtx"
        );
    }

    #[test]
    fn sum_row_divisor_accepts_fractions() {
        let function = sum_row().unwrap();
        assert_eq!(function.name(), "sum-row");
        let binding = HashMap::from([("divisor".to_string(), radflow_function::Value::Float(8760.0))]);
        let command = function.render_command(&binding).unwrap();
        assert!(command.contains("--divisor 8760 "));
    }

    #[test]
    fn solar_tracking_renders_with_defaults() {
        let function = solar_tracking_synthesis().unwrap();
        assert_eq!(function.name(), "solar-tracking-synthesis");
        assert_eq!(
            function.render_command(&HashMap::new()).unwrap(),
            "honeybee-radiance post-process solar-tracking results location.json sun-up-hours.txt \
             --tracking-increment 5 --north 0 --sub-folder final"
        );
    }

    #[test]
    fn solar_tracking_accepts_a_custom_north() {
        let function = solar_tracking_synthesis().unwrap();
        let binding = HashMap::from([("north".to_string(), radflow_function::Value::Float(12.5))]);
        let command = function.render_command(&binding).unwrap();
        assert!(command.contains("--north 12.5 "));
    }

    #[test]
    fn daylight_factor_config_points_at_the_factor_folder() {
        let function = daylight_factor_config().unwrap();
        assert_eq!(function.name(), "daylight-factor-config");
        assert_eq!(function.render_command(&HashMap::new()).unwrap(), function.command_template());
        let resolved = function.resolve_outputs(std::path::Path::new("/run/7"));
        assert_eq!(resolved["config"], std::path::PathBuf::from("/run/7/factor/config.json"));
    }

    #[test]
    fn leed_credits_expose_the_summary_twice() {
        let function = leed_illuminance_credits().unwrap();
        assert_eq!(function.name(), "leed-illuminance-credits");
        let resolved = function.resolve_outputs(std::path::Path::new("/run/9"));
        assert_eq!(resolved["credit_summary"], resolved["credit_summary_file"]);
    }
}
