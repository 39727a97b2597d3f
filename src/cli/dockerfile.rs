use crate::constants;
use crate::core::{credentials, dockerfile_gen};
use crate::util::fs as artifact_fs;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct DockerfileArgs {
    /// Path to the .json file holding the database credentials
    pub credentials: PathBuf,

    /// Output path of the created Dockerfile
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

pub fn run(args: DockerfileArgs) -> Result<()> {
    let creds = credentials::load(&args.credentials)?;
    let dockerfile = dockerfile_gen::generate_dockerfile(&creds)?;

    let out_file = args
        .output
        .unwrap_or_else(|| PathBuf::from(constants::DEFAULT_DOCKERFILE_PATH));
    artifact_fs::write_artifact(&out_file, &dockerfile, constants::DOCKERFILE_MODE)?;
    println!("Wrote {}", out_file.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;

    fn write_credentials(dir: &tempfile::TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("credentials.json");
        let mut f = fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    const VALID: &str = r#"{
        "postgres-user": "alice",
        "postgres-password": "p@ss",
        "postgres-port": "5432",
        "postgres-dir": "/data"
    }"#;

    #[test]
    fn test_run_writes_dockerfile() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("Dockerfile");
        let args = DockerfileArgs {
            credentials: write_credentials(&dir, VALID),
            output: Some(out.clone()),
        };
        run(args).unwrap();

        let content = fs::read_to_string(&out).unwrap();
        assert!(content.contains("ENV POSTGRES_USER=alice\n"));
        assert!(content.contains("ENV POSTGRES_PASSWORD=p@ss\n"));
        assert!(content.contains("EXPOSE 5432"));
    }

    #[test]
    fn test_run_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let creds = write_credentials(&dir, VALID);
        let out = dir.path().join("Dockerfile");

        for _ in 0..2 {
            run(DockerfileArgs {
                credentials: creds.clone(),
                output: Some(out.clone()),
            })
            .unwrap();
        }
        let first = fs::read(&out).unwrap();
        run(DockerfileArgs {
            credentials: creds,
            output: Some(out.clone()),
        })
        .unwrap();
        assert_eq!(fs::read(&out).unwrap(), first);
    }

    #[test]
    fn test_run_missing_key_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let creds = write_credentials(
            &dir,
            r#"{"postgres-user": "alice", "postgres-password": "p@ss", "postgres-port": "5432"}"#,
        );
        let out = dir.path().join("Dockerfile");
        let err = run(DockerfileArgs {
            credentials: creds,
            output: Some(out.clone()),
        })
        .unwrap_err();
        assert!(err.to_string().contains("'postgres-dir'"));
        assert!(!out.exists());
    }

    #[test]
    fn test_run_failure_keeps_existing_output() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("Dockerfile");
        fs::write(&out, "previous contents").unwrap();

        let creds = write_credentials(&dir, "{not json");
        assert!(run(DockerfileArgs {
            credentials: creds,
            output: Some(out.clone()),
        })
        .is_err());
        assert_eq!(fs::read_to_string(&out).unwrap(), "previous contents");
    }

    #[test]
    fn test_run_malformed_json_fails() {
        let dir = tempfile::tempdir().unwrap();
        let creds = write_credentials(&dir, "{not json");
        let out = dir.path().join("Dockerfile");
        let err = run(DockerfileArgs {
            credentials: creds,
            output: Some(out.clone()),
        })
        .unwrap_err();
        assert!(err.to_string().contains("parse credentials file"));
        assert!(!out.exists());
    }
}
