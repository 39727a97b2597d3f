use crate::constants;
use crate::core::{credentials, script_gen};
use crate::util::fs as artifact_fs;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct StartScriptArgs {
    /// Path to the .json file holding the database credentials
    pub credentials: PathBuf,

    /// Output path of the created shell script
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

pub fn run(args: StartScriptArgs) -> Result<()> {
    let creds = credentials::load(&args.credentials)?;
    let script = script_gen::generate_start_script(&creds)?;

    // The default lands in database_config/; missing parent directories are
    // a write error, not something to create on the fly.
    let out_file = args
        .output
        .unwrap_or_else(|| PathBuf::from(constants::DEFAULT_SCRIPT_PATH));
    artifact_fs::write_artifact(&out_file, &script, constants::SCRIPT_MODE)?;
    println!("Wrote {}", out_file.display());
    Ok(())
}
