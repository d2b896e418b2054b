use clap::{Subcommand, ValueEnum};
use std::fmt;
use std::path::PathBuf;

pub mod decode;
pub mod run;
pub mod sum;

/// How a fixed pipeline is assembled
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Style {
    /// Static composition of typed functions
    Compose,
    /// Failure-threading monad
    Monad,
    /// Sequential code under a panic boundary
    Bridge,
}

impl Style {
    pub fn as_str(self) -> &'static str {
        match self {
            Style::Compose => "compose",
            Style::Monad => "monad",
            Style::Bridge => "bridge",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Read a file of base64-encoded JSON and print the decoded value
    Decode {
        /// File holding base64 text
        file: PathBuf,

        /// Composition style to run the pipeline with
        #[arg(long, value_enum, default_value_t = Style::Compose)]
        style: Style,
    },

    /// Parse every argument as an integer and print the sum
    Sum {
        /// Integers to add; the first unparsable one fails the command
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<String>,

        /// Composition style to run the pipeline with
        #[arg(long, value_enum, default_value_t = Style::Compose)]
        style: Style,
    },

    /// Run a pipeline of named steps chosen at runtime
    Run {
        /// Seed value, passed to the first step as text
        input: String,

        /// Step names in order (read, utf8, bytes, base64, b64encode, json, int, random)
        #[arg(short, long = "step", value_name = "NAME", required = true)]
        steps: Vec<String>,

        /// Print the final payload as tagged JSON
        #[arg(long)]
        json: bool,
    },
}
