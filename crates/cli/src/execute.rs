use crate::commands::{decode, run, sum, Commands};
use stepwise_core::Result;

impl Commands {
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Decode { file, style } => decode::execute(file, style),
            Commands::Sum { values, style } => sum::execute(values, style),
            Commands::Run { input, steps, json } => run::execute(input, steps, json),
        }
    }
}
