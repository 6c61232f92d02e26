use crate::config::LogFormat;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Builds the filter used when `RUST_LOG` is not set.
///
/// `level` comes from the config file; `verbose` always wins over it.
pub fn default_filter(verbose: bool, level: Option<&str>) -> String {
    if verbose {
        "shadow_knows=debug,info".to_string()
    } else {
        format!("shadow_knows={}", level.unwrap_or("info"))
    }
}

pub fn init_cli_logger(verbose: bool, level: Option<&str>, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose, level)));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    match format {
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.compact())
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.json())
            .init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(false, None), "shadow_knows=info");
        assert_eq!(default_filter(false, Some("warn")), "shadow_knows=warn");
        assert_eq!(default_filter(true, Some("warn")), "shadow_knows=debug,info");
    }
}
