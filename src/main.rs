// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, Flags};
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = pico_args::Arguments::from_env();
    let flags = Flags {
        api_base: args.opt_value_from_str("--api-base").unwrap(),
        image_base: args.opt_value_from_str("--image-base").unwrap(),
        limit: args.opt_value_from_str("--limit").unwrap(),
    };

    app::run(flags)
}
