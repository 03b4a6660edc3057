//! CLI command implementations.

pub mod config;
pub mod ls;
pub mod options;

pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use ls::{LsOptions, cmd_ls, parse_filter_arg};
pub use options::cmd_options;
