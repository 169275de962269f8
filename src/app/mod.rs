mod config;

pub use config::{get_config_dir, init_config, load_config, load_config_file, save_config, Config};
