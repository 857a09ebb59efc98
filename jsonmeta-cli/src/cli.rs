//! Command-line settings.

use anyhow::Context;
use clap::Parser;
use jsonmeta_codegen::{Direction, GenerateOptions};
use std::str::FromStr;

/// Generate C# JSON conversion code from a schema read on stdin.
#[derive(Parser, Debug)]
#[command(name = "jsonmeta", version, about, long_about = None)]
pub struct Cli {
    /// Settings: gen=from|to, namespace=<name>, using=<name> (repeatable), class=<name>
    #[arg(value_name = "KEY=VALUE")]
    pub settings: Vec<Setting>,
}

/// One `key=value` setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Setting {
    /// Conversion direction.
    Gen(Direction),
    /// Target namespace.
    Namespace(String),
    /// Extra imported namespace.
    Using(String),
    /// Class name override.
    Class(String),
}

impl FromStr for Setting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, value) = s
            .split_once('=')
            .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))?;

        match key {
            "gen" => value.parse().map(Self::Gen),
            "namespace" => Ok(Self::Namespace(value.to_string())),
            "using" => Ok(Self::Using(value.to_string())),
            "class" => Ok(Self::Class(value.to_string())),
            other => Err(format!("unknown setting '{other}'")),
        }
    }
}

impl Cli {
    /// Folds the settings into a direction and generation options.
    ///
    /// Later `gen`, `namespace` and `class` settings override earlier ones;
    /// `using` settings accumulate in order.
    ///
    /// # Errors
    /// Returns an error if no `gen` setting was given.
    pub fn config(&self) -> anyhow::Result<(Direction, GenerateOptions)> {
        let mut direction = None;
        let mut options = GenerateOptions::default();

        for setting in &self.settings {
            match setting {
                Setting::Gen(value) => direction = Some(*value),
                Setting::Namespace(name) => options.namespace.clone_from(name),
                Setting::Using(name) => options.usings.push(name.clone()),
                Setting::Class(name) => options.class_name = Some(name.clone()),
            }
        }

        let direction = direction.context("You must specify either gen=from or gen=to")?;
        Ok((direction, options))
    }
}
