use std::{fs, ops::RangeInclusive};

use anyhow::{ensure, Context, Result};
use clap::Parser;
use serde::Deserialize;

use circq::QueueConfig;

#[derive(Parser, Debug, Clone, Deserialize)]
#[command(name = "replay")]
#[command(author, version, about, long_about = None)]
pub struct AppConfig {
    #[clap(long)]
    #[arg(short = 'c')]
    #[serde(default)]
    pub config: Option<String>,
    #[clap(long, env)]
    #[arg(default_value_t = 32)]
    #[serde(default = "default_initial_capacity")]
    pub initial_capacity: usize,
    #[clap(long, env)]
    #[arg(short = 'n', default_value_t = 10000)]
    #[serde(default = "default_operations")]
    pub operations: usize,
    #[clap(long, env)]
    #[arg(value_parser = ratio_in_range, default_value_t = 50)]
    #[serde(default = "default_enqueue_ratio")]
    pub enqueue_ratio: u8,
    #[clap(long, env)]
    #[arg(default_value_t = 0)]
    #[serde(default)]
    pub seed: u64,
    #[clap(long, env)]
    #[arg(default_value_t = String::from("replay=info,circq=debug"))]
    #[serde(default = "default_rust_log")]
    pub rust_log: String,
    #[clap(long, env)]
    #[arg(default_value_t = false)]
    #[serde(default)]
    pub json: bool,
}

impl AppConfig {
    /// Swaps in the file named by `--config` when one was given. Values
    /// from the file replace every command-line value.
    pub fn resolve(self) -> Result<Self> {
        match self.config.as_deref() {
            Some(path) => load(path),
            None => Ok(self),
        }
    }

    pub fn queue(&self) -> QueueConfig {
        QueueConfig {
            initial_capacity: self.initial_capacity,
        }
    }
}

fn default_initial_capacity() -> usize {
    32
}

fn default_operations() -> usize {
    10000
}

fn default_enqueue_ratio() -> u8 {
    50
}

fn default_rust_log() -> String {
    String::from("replay=info,circq=debug")
}

const RATIO_RANGE: RangeInclusive<u8> = 0..=100;

fn ratio_in_range(s: &str) -> Result<u8, String> {
    let ratio: u8 = s
        .parse()
        .map_err(|_| format!("`{s}` isn't a percentage"))?;
    if RATIO_RANGE.contains(&ratio) {
        Ok(ratio)
    } else {
        Err(format!(
            "ratio not in range {}-{}",
            RATIO_RANGE.start(),
            RATIO_RANGE.end()
        ))
    }
}

pub fn load(cfg: &str) -> Result<AppConfig> {
    let content =
        fs::read_to_string(cfg).context("could not read config file")?;
    parse(&content)
}

fn parse(content: &str) -> Result<AppConfig> {
    let config: AppConfig =
        toml::from_str(content).context("could not parse config file")?;
    ensure!(
        RATIO_RANGE.contains(&config.enqueue_ratio),
        "enqueue_ratio {} not in range {}-{}",
        config.enqueue_ratio,
        RATIO_RANGE.start(),
        RATIO_RANGE.end()
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::{env, process};

    use super::*;

    #[test]
    fn toml_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config.initial_capacity, 32);
        assert_eq!(config.operations, 10000);
        assert_eq!(config.enqueue_ratio, 50);
        assert_eq!(config.seed, 0);
        assert_eq!(config.rust_log, "replay=info,circq=debug");
        assert!(!config.json);
    }

    #[test]
    fn toml_values() {
        let config = parse(
            r#"
            initial_capacity = 100
            operations = 500
            enqueue_ratio = 70
            seed = 42
            json = true
            "#,
        )
        .unwrap();
        assert_eq!(config.queue().initial_capacity, 100);
        assert_eq!(config.operations, 500);
        assert_eq!(config.enqueue_ratio, 70);
        assert_eq!(config.seed, 42);
        assert!(config.json);
    }

    #[test]
    fn toml_rejects_ratio() {
        assert!(parse("enqueue_ratio = 101").is_err());
    }

    #[test]
    fn config_file_with_other_flags() {
        let path = env::temp_dir()
            .join(format!("replay-config-{}.toml", process::id()));
        fs::write(&path, "operations = 123\njson = true\n").unwrap();
        let path_str = path.to_str().unwrap();

        let config = AppConfig::try_parse_from([
            "replay",
            "-c",
            path_str,
            "--rust-log",
            "off",
        ])
        .unwrap()
        .resolve()
        .unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.operations, 123);
        assert!(config.json);
        assert_eq!(config.config, None);
    }

    #[test]
    fn config_file_missing() {
        let config =
            AppConfig::try_parse_from(["replay", "-c", "/nonexistent.toml"])
                .unwrap();
        assert!(config.resolve().is_err());
    }

    #[test]
    fn no_config_file_keeps_args() {
        let config = AppConfig::try_parse_from(["replay", "-n", "7"])
            .unwrap()
            .resolve()
            .unwrap();
        assert_eq!(config.operations, 7);
    }

    #[test]
    fn cli_args() {
        let config = AppConfig::try_parse_from([
            "replay",
            "--initial-capacity",
            "64",
            "-n",
            "20",
            "--enqueue-ratio",
            "80",
        ])
        .unwrap();
        assert_eq!(config.initial_capacity, 64);
        assert_eq!(config.operations, 20);
        assert_eq!(config.enqueue_ratio, 80);
        assert!(AppConfig::try_parse_from(["replay", "--enqueue-ratio", "120"])
            .is_err());
        assert!(AppConfig::try_parse_from(["replay", "--enqueue-ratio", "x"])
            .is_err());
    }
}
