//! Tracing subscriber setup for hosts embedding the session engine.

/// Install a formatted tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the configured level is used.
/// Safe to call once per process; subsequent calls are ignored.
pub fn init(default_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level.to_string()));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init("info");
        // A second call must not panic even though a subscriber is installed.
        init("debug");
    }
}
