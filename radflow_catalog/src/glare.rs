// SPDX-FileCopyrightText: © 2026 Radflow contributors
// SPDX-License-Identifier: MIT

//! Imageless glare from daylight-coefficient matrices (dcglare).

use radflow_function::{DescriptorError, FunctionDescriptor, InputSpec, OutputSpec};

fn dcglare_inputs(builder: radflow_function::DescriptorBuilder) -> radflow_function::DescriptorBuilder {
    builder
        .input(InputSpec::file("dc_direct").description("Path to dcdirect.").path("dc_direct.mtx"))
        .input(InputSpec::file("dc_total").description("Path to dctotal.").path("dc_total.mtx"))
        .input(InputSpec::file("sky_vector").description("Path to sky vector.").path("sky.smx"))
        .input(InputSpec::file("view_rays").description("Path to view ray.").path("view_rays.ray"))
        .input(
            InputSpec::float("threshold_factor")
                .description("Constant threshold factor in cd/m2.")
                .default(2000.0),
        )
}

/// Glare autonomy is the fraction of occupied hours without any detected
/// glare; detection is controlled by the glare limit.
pub fn dcglare_glare_autonomy() -> Result<FunctionDescriptor, DescriptorError> {
    dcglare_inputs(FunctionDescriptor::build("dcglare-glare-autonomy"))
        .description("Calculate glare autonomy, the fraction of occupied hours without any detected glare.")
        .input(
            InputSpec::float("glare_limit")
                .description("Glare limit indicating presence of glare.")
                .default(0.4),
        )
        .input(
            InputSpec::file("occupancy_schedule")
                .description("Path to occupancy schedule.")
                .path("occupancy_schedule.csv"),
        )
        .command(
            "honeybee-radiance dcglare two-phase dc_direct.mtx dc_total.mtx sky.smx view_rays.ray --glare-limit {{glare_limit}} --threshold-factor \"{{threshold_factor}}\" --occupancy-schedule {{occupancy_schedule}} --output occupied.ga",
        )
        .output(OutputSpec::file("glare_autonomy", "occupied.ga").description("Glare autonomy results."))
        .finish()
}

/// DGP for all sky conditions in the sky matrix.
pub fn dcglare() -> Result<FunctionDescriptor, DescriptorError> {
    dcglare_inputs(FunctionDescriptor::build("dcglare"))
        .description("Calculate DGP for all sky conditions in the sky matrix.")
        .command(
            "honeybee-radiance dcglare two-phase dc_direct.mtx dc_total.mtx sky.smx view_rays.ray --threshold-factor \"{{threshold_factor}}\" --output view_rays.dgp",
        )
        .output(OutputSpec::file("view_rays_dgp", "view_rays.dgp").description("DGP per view ray."))
        .finish()
}

/// DGP filtered by an occupancy schedule: unoccupied hours report zero DGP.
pub fn dcglare_occupancy() -> Result<FunctionDescriptor, DescriptorError> {
    dcglare_inputs(FunctionDescriptor::build("dcglare-occupancy"))
        .description("Calculate DGP for all sky conditions, filtered by an occupancy schedule.")
        .input(
            InputSpec::file("occupancy_schedule")
                .description("Path to occupancy schedule.")
                .path("occupancy_schedule.csv"),
        )
        .command(
            "honeybee-radiance dcglare two-phase dc_direct.mtx dc_total.mtx sky.smx view_rays.ray --threshold-factor \"{{threshold_factor}}\" --occupancy-schedule {{occupancy_schedule}} --output occupied.dgp",
        )
        .output(OutputSpec::file("occupied_dgp", "occupied.dgp").description("DGP during occupied hours."))
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn glare_autonomy_renders_with_defaults() {
        let function = dcglare_glare_autonomy().unwrap();
        assert_eq!(function.name(), "dcglare-glare-autonomy");
        assert_eq!(
            function.render_command(&HashMap::new()).unwrap(),
            "honeybee-radiance dcglare two-phase dc_direct.mtx dc_total.mtx sky.smx view_rays.ray \
             --glare-limit 0.4 --threshold-factor \"2000\" --occupancy-schedule occupancy_schedule.csv \
             --output occupied.ga"
        );
    }

    #[test]
    fn dcglare_uses_the_threshold_default() {
        let function = dcglare().unwrap();
        assert_eq!(function.name(), "dcglare");
        let command = function.render_command(&HashMap::new()).unwrap();
        assert!(command.contains("--threshold-factor \"2000\""));
        assert_eq!(function.resolve_outputs(std::path::Path::new("/run/123"))["view_rays_dgp"], std::path::PathBuf::from("/run/123/view_rays.dgp"));
    }

    #[test]
    fn occupancy_variant_points_at_the_schedule() {
        let function = dcglare_occupancy().unwrap();
        let command = function.render_command(&HashMap::new()).unwrap();
        assert!(command.ends_with("--occupancy-schedule occupancy_schedule.csv --output occupied.dgp"));
    }
}
