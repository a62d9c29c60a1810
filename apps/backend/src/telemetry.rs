use tracing_subscriber::EnvFilter;

/// Install the global JSON subscriber for the server binary.
///
/// `RUST_LOG` overrides the default filter; the default keeps request
/// logs visible while quieting sqlx/sea_orm query chatter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,actix_web=info,sqlx=warn,sea_orm=warn"));

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_ansi(false)
        .init();
}
