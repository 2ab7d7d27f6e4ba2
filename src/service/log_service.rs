use crate::prelude::*;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn setup_logging() -> Result<()> {
    tracing_subscriber::registry().with(fmt::layer()).init();

    Ok(())
}
