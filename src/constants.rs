//! Centralized constants for images, credential keys, paths, and modes.

/// Base image of the generated Dockerfile.
pub const BASE_IMAGE: &str = "postgres:13";

/// Database the postgres image creates on first start.
pub const DATABASE_NAME: &str = "dionysos";

/// Image the generated start script runs.
pub const RUNTIME_IMAGE: &str = "dionysos-volante:alpha";

/// Port postgres listens on inside the container.
pub const CONTAINER_PORT: u16 = 5432;

/// Data directory of the postgres image, bound to the host volume.
pub const DATA_MOUNT: &str = "/var/lib/postgresql/data";

/// Default output path of the `dockerfile` subcommand.
pub const DEFAULT_DOCKERFILE_PATH: &str = "./Dockerfile";

/// Default output path of the `start-script` subcommand.
pub const DEFAULT_SCRIPT_PATH: &str = "./database_config/start_database.sh";

/// Credential key holding the postgres superuser name.
pub const KEY_USER: &str = "postgres-user";

/// Credential key holding the postgres superuser password.
pub const KEY_PASSWORD: &str = "postgres-password";

/// Credential key holding the host port to publish.
pub const KEY_PORT: &str = "postgres-port";

/// Credential key holding the host directory bound to the data volume.
pub const KEY_DIR: &str = "postgres-dir";

/// Keys the `dockerfile` subcommand requires. `postgres-dir` does not appear
/// in the rendered output but stays in the contract so one credentials file
/// serves both subcommands.
pub const DOCKERFILE_REQUIRED_KEYS: &[&str] = &[KEY_USER, KEY_PASSWORD, KEY_PORT, KEY_DIR];

/// Keys the `start-script` subcommand requires.
pub const SCRIPT_REQUIRED_KEYS: &[&str] = &[KEY_PORT, KEY_DIR];

/// Permission mode for the generated Dockerfile.
pub const DOCKERFILE_MODE: u32 = 0o644;

/// Permission mode for the generated start script.
pub const SCRIPT_MODE: u32 = 0o755;
