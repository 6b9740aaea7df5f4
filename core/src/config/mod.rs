mod load;
mod types;

pub use load::{
    apply_overrides, get_data_dir, load_default, load_from, parse, ENV_ERROR_LEVEL, ENV_LOG_LEVEL,
};
pub use types::{AppConfig, FormatKind, LoggerConfig};
