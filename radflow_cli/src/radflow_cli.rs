// SPDX-FileCopyrightText: © 2026 Radflow contributors
// SPDX-License-Identifier: MIT

//! Inspection CLI for the radflow descriptor catalog.
//!
//! Lists registered functions, dumps their manifests, renders commands for
//! concrete bindings, and resolves output paths. It never executes anything.

use clap::Parser;

use radflow_function::Value;

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Print the names of all registered functions.
    List {},
    /// Print the manifest of one function as pretty JSON.
    Show { function_name: String },
    /// Render the shell command of one function.
    Render {
        function_name: String,
        /// Input bindings as name=value pairs; numeric values are bound as
        /// integers or floats, everything else as strings.
        #[arg(short, long = "set", value_name = "NAME=VALUE")]
        set: Vec<String>,
    },
    /// Print the resolved output paths of one function.
    Outputs {
        function_name: String,
        #[arg(short, long, default_value_t = String::from("."))]
        execution_folder: String,
    },
}

#[derive(Debug, clap::Parser)]
#[command(long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,
}

fn parse_binding(assignments: &[String]) -> anyhow::Result<std::collections::HashMap<String, Value>> {
    let mut binding = std::collections::HashMap::new();
    for assignment in assignments {
        let Some((name, text)) = assignment.split_once('=') else {
            anyhow::bail!("invalid binding '{}', expected NAME=VALUE", assignment);
        };
        let value = if let Ok(x) = text.parse::<i64>() {
            Value::Integer(x)
        } else if let Ok(x) = text.parse::<f64>() {
            Value::Float(x)
        } else {
            Value::Str(text.to_string())
        };
        binding.insert(name.to_string(), value);
    }
    Ok(binding)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let registry = radflow_catalog::default_registry()?;
    match args.command {
        Some(Commands::List {}) => {
            for name in registry.names() {
                println!("{}", name);
            }
        }
        Some(Commands::Show { function_name }) => {
            let function = registry.get(&function_name)?;
            println!("{}", serde_json::to_string_pretty(&function.to_manifest())?);
        }
        Some(Commands::Render { function_name, set }) => {
            let function = registry.get(&function_name)?;
            let binding = parse_binding(&set)?;
            log::debug!("rendering '{}' with {} bound inputs", function_name, binding.len());
            println!("{}", function.render_command(&binding)?);
        }
        Some(Commands::Outputs {
            function_name,
            execution_folder,
        }) => {
            let function = registry.get(&function_name)?;
            let mut resolved: Vec<_> = function
                .resolve_outputs(std::path::Path::new(&execution_folder))
                .into_iter()
                .collect();
            resolved.sort();
            for (name, path) in resolved {
                println!("{}\t{}", name, path.display());
            }
        }
        None => anyhow::bail!("command not specified, try --help"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bindings_parse_by_shape() {
        let binding = parse_binding(&[
            "sensor_count=200".to_string(),
            "glare_limit=0.35".to_string(),
            "grid_filter=first_floor_*".to_string(),
        ])
        .unwrap();
        assert_eq!(binding["sensor_count"], Value::Integer(200));
        assert_eq!(binding["glare_limit"], Value::Float(0.35));
        assert_eq!(binding["grid_filter"], Value::Str("first_floor_*".to_string()));
    }

    #[test]
    fn malformed_bindings_are_rejected() {
        assert!(parse_binding(&["no-equals-sign".to_string()]).is_err());
    }
}
