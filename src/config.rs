use std::sync::LazyLock;

use derive_from_env::FromEnv;

/// Environment-driven defaults for [`Manager`](crate::Manager), read once
/// from `LOGKEEP_PATH` and `LOGKEEP_MAX_FILES`.
#[derive(FromEnv)]
#[from_env(prefix = "LOGKEEP")]
#[allow(non_snake_case)]
pub struct LogkeepConfig {
    #[from_env(default = ".")]
    pub PATH: String,
    #[from_env(default = "0")]
    pub MAX_FILES: usize,
}

pub static LOGKEEP_CONFIG: LazyLock<LogkeepConfig> =
    LazyLock::new(|| LogkeepConfig::from_env().unwrap());
