// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use veranda::app::{self, Flags};

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args
            .opt_value_from_str("--lang")
            .ok()
            .flatten(),
        source: args
            .finish()
            .into_iter()
            .next()
            .map(PathBuf::from),
    };

    app::run(flags)
}
