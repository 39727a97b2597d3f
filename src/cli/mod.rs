//! CLI routing and command dispatch.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod dockerfile;
pub mod script;

#[derive(Parser, Debug)]
#[command(
    name = "dionysos-dbgen",
    version,
    about = "Render the dionysos database Dockerfile and start script from a credentials .json file"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Dockerfile(args) => dockerfile::run(args),
            Commands::StartScript(args) => script::run(args),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a Dockerfile for the postgres:13 database image
    Dockerfile(dockerfile::DockerfileArgs),
    /// Generate the shell script that starts the database container
    StartScript(script::StartScriptArgs),
}
