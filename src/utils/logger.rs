use tracing_subscriber::fmt::format::{DefaultFields, Format};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 報價結果走 stdout，日誌一律寫到 stderr
type StderrLayer<S> = fmt::Layer<S, DefaultFields, Format, fn() -> std::io::Stderr>;

fn filter_directives(verbose: bool) -> &'static str {
    if verbose {
        "shipping_rate=debug,info"
    } else {
        "shipping_rate=info"
    }
}

/// RUST_LOG 優先，否則用預設 directives
fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_directives(verbose)))
}

fn stderr_layer<S>() -> StderrLayer<S> {
    fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr as fn() -> std::io::Stderr)
}

pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(stderr_layer().compact())
        .init();
}

pub fn init_json_logger() {
    tracing_subscriber::registry()
        .with(env_filter(false))
        .with(stderr_layer().json())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directives() {
        assert_eq!(filter_directives(false), "shipping_rate=info");
        assert!(filter_directives(true).starts_with("shipping_rate=debug"));
    }
}
