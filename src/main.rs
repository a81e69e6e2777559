//! rInternHours main entrypoint.

use rinternhours::run;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "rinternhours=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run() {
        rinternhours::ui::messages::error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
