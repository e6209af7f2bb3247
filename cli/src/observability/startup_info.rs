use tracing::debug;

use ico_to_svg_application::config::VERSION;
use ico_to_svg_application::infrastructure_config::{Config, ConversionConfig};

pub fn log_effective_config(config: &Config) {
    debug!("ico-to-svg {}", VERSION);
    log_conversion_defaults(&config.conversion);
    debug!(
        "Logging: level {}, format {:?}, location {}",
        config.logging.level, config.logging.format, config.logging.include_location
    );
}

fn log_conversion_defaults(conversion: &ConversionConfig) {
    debug!(
        "Conversion defaults: mode {}, alpha threshold {}, background {}",
        conversion.mode, conversion.alpha_threshold, conversion.background
    );
}
