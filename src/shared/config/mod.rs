mod global;
mod model;


pub use global::CONFIG;
pub use model::{LoggingConfig, MergeConfig, Settings, load_settings, load_settings_from};
