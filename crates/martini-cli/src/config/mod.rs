mod defaults;
mod file;

pub use defaults::DefaultsConfig;
pub use file::FileConfig;

use crate::cli::GenerateArgs;
use crate::error::{CliError, Result};
use martini_paircoeffs::engine::config::{GeneratorConfig, GeneratorConfigBuilder};
use martini_paircoeffs::engine::error::EngineError;
use std::path::PathBuf;
use std::str::FromStr;

/// Merges command-line flags, `--set` values, the config file and built-in
/// defaults, in that order of precedence.
pub fn build_config(args: &GenerateArgs) -> Result<GeneratorConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let input = file_config.input.take().unwrap_or_default();
    let pair = file_config.pair.take().unwrap_or_default();
    let output = file_config.output.take().unwrap_or_default();

    let mapping_path = args
        .mapping
        .clone()
        .or(input.mapping_path)
        .unwrap_or_else(|| PathBuf::from(&defaults.mapping_path));
    let database_path = args
        .database
        .clone()
        .or(input.database_path)
        .unwrap_or_else(|| PathBuf::from(&defaults.database_path));
    let output_path = args
        .output
        .clone()
        .or(output.path)
        .unwrap_or_else(|| PathBuf::from(&defaults.output_path));
    let pair_style = args
        .pair_style
        .clone()
        .or(pair.style)
        .unwrap_or(defaults.pair_style);
    let cutoff = args.cutoff.or(pair.cutoff).unwrap_or(defaults.cutoff);
    let inner_cutoff = args
        .inner_cutoff
        .or(pair.inner_cutoff)
        .unwrap_or(defaults.inner_cutoff);

    GeneratorConfigBuilder::new()
        .mapping_path(mapping_path)
        .database_path(database_path)
        .output_path(output_path)
        .pair_style(pair_style)
        .cutoff(cutoff)
        .inner_cutoff(inner_cutoff)
        .build()
        .map_err(|e| CliError::Engine(EngineError::from(e)))
}

fn parse_value<T: FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value.parse().map_err(|_| {
        CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value))
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };

        match key {
            "input.mapping-path" => {
                config.input.get_or_insert_with(Default::default).mapping_path =
                    Some(PathBuf::from(value_str));
            }
            "input.database-path" => {
                config.input.get_or_insert_with(Default::default).database_path =
                    Some(PathBuf::from(value_str));
            }
            "pair.style" => {
                config.pair.get_or_insert_with(Default::default).style =
                    Some(value_str.to_string());
            }
            "pair.cutoff" => {
                config.pair.get_or_insert_with(Default::default).cutoff =
                    Some(parse_value(key, value_str, "float")?);
            }
            "pair.inner-cutoff" => {
                config.pair.get_or_insert_with(Default::default).inner_cutoff =
                    Some(parse_value(key, value_str, "float")?);
            }
            "output.path" => {
                config.output.get_or_insert_with(Default::default).path =
                    Some(PathBuf::from(value_str));
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use martini_paircoeffs::core::models::style::{Cutoffs, PairStyle};
    use martini_paircoeffs::engine::config::ConfigError;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn defaults_apply_when_nothing_is_given() {
        let config = build_config(&GenerateArgs::default()).expect("build ok");

        assert_eq!(config.mapping_path, PathBuf::from("martini.inp"));
        assert_eq!(config.database_path, PathBuf::from("martini_v3.0.0.itp"));
        assert_eq!(config.output_path, PathBuf::from("paircoeffs.txt"));
        assert_eq!(config.pair_style, PairStyle::LjGromacs);
        assert_eq!(config.cutoffs, Cutoffs::in_nm(1.2, 0.9));
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("config.toml");
        fs::write(
            &cfg_path,
            r#"
            [input]
            mapping-path = "types.inp"

            [pair]
            style = "lj/cut"
            cutoff = 1.1
            "#,
        )
        .unwrap();

        let args = GenerateArgs {
            config: Some(cfg_path),
            ..Default::default()
        };
        let config = build_config(&args).expect("build ok");

        assert_eq!(config.mapping_path, PathBuf::from("types.inp"));
        assert_eq!(config.database_path, PathBuf::from("martini_v3.0.0.itp"));
        assert_eq!(config.pair_style, PairStyle::LjCut);
        assert_eq!(config.cutoffs, Cutoffs::in_nm(1.1, 0.9));
    }

    #[test]
    fn cli_overrides_set_values_and_file() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("config.toml");
        fs::write(&cfg_path, "[pair]\ncutoff = 1.0\n[output]\npath = \"file.txt\"\n").unwrap();

        let args = GenerateArgs {
            config: Some(cfg_path),
            cutoff: Some(1.4),
            set_values: vec![
                "pair.cutoff=1.3".to_string(),
                "output.path=set.txt".to_string(),
                "pair.inner-cutoff=1.0".to_string(),
            ],
            ..Default::default()
        };
        let config = build_config(&args).expect("build ok");

        assert_eq!(config.cutoffs, Cutoffs::in_nm(1.4, 1.0));
        assert_eq!(config.output_path, PathBuf::from("set.txt"));
    }

    #[test]
    fn set_values_cover_every_key() {
        let args = GenerateArgs {
            set_values: vec![
                "input.mapping-path=a.inp".to_string(),
                "input.database-path=b.itp".to_string(),
                "pair.style=lj/cut".to_string(),
                "pair.cutoff=1.5".to_string(),
                "pair.inner-cutoff=1.0".to_string(),
                "output.path=c.txt".to_string(),
            ],
            ..Default::default()
        };
        let config = build_config(&args).expect("build ok");

        assert_eq!(config.mapping_path, PathBuf::from("a.inp"));
        assert_eq!(config.database_path, PathBuf::from("b.itp"));
        assert_eq!(config.output_path, PathBuf::from("c.txt"));
        assert_eq!(config.pair_style, PairStyle::LjCut);
        assert_eq!(config.cutoffs, Cutoffs::in_nm(1.5, 1.0));
    }

    #[test]
    fn unsupported_style_surfaces_as_engine_config_error() {
        let args = GenerateArgs {
            pair_style: Some("lj/foo".to_string()),
            ..Default::default()
        };
        let err = build_config(&args).unwrap_err();
        assert!(matches!(
            err,
            CliError::Engine(EngineError::Config(ConfigError::UnsupportedPairStyle(_)))
        ));
    }

    #[test]
    fn malformed_set_values_are_rejected() {
        for bad in ["pair.cutoff", "pair.cutoff=abc", "pair.shift=yes"] {
            let args = GenerateArgs {
                set_values: vec![bad.to_string()],
                ..Default::default()
            };
            let err = build_config(&args).unwrap_err();
            assert!(matches!(err, CliError::Config(_)), "accepted '{}'", bad);
        }
    }
}
