//! not251: interactive shell for the music-theory algebra

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("not251=info".parse()?))
        .init();

    tracing::info!("Starting not251 REPL");

    not251::repl::start()
}
