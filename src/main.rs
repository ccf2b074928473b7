// SPDX-License-Identifier: MPL-2.0
use iced_segments::app::{self, Flags};

const HELP: &str = "\
iced_segments: segmented control demo

USAGE:
  iced_segments [OPTIONS]

OPTIONS:
  --lang <LOCALE>        UI language (e.g. en-US, fr)
  --config-dir <DIR>     Directory holding settings.toml
  --mode <MODE>          Initial toolbar target: single, multiple or momentary
  -h, --help             Print this help
";

fn main() -> iced::Result {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or_else(|err| {
            log::warn!("ignoring --lang: {err}");
            None
        }),
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
            log::warn!("ignoring --config-dir: {err}");
            None
        }),
        mode: args.opt_value_from_str("--mode").unwrap_or_else(|err| {
            log::warn!("ignoring --mode: {err}");
            None
        }),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("unused arguments: {remaining:?}");
    }

    app::run(flags)
}
