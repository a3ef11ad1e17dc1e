// SPDX-License-Identifier: MPL-2.0
use iced_video_controls::app::{self, Flags};
use std::path::PathBuf;

const HELP: &str = "\
Video controls demo

USAGE:
  iced_video_controls [OPTIONS]

OPTIONS:
  --lang <LOCALE>            UI language (e.g. en-US, fr)
  --config-dir <DIR>         Directory holding settings.toml
  --diagnostics-out <FILE>   Where Ctrl+D writes the diagnostics report
  --duration <SECONDS>       Length of the simulated media
  -h, --help                 Print this help
";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        diagnostics_out: args.opt_value_from_str::<_, PathBuf>("--diagnostics-out")?,
        duration_secs: args.opt_value_from_str("--duration")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("ignoring unexpected arguments: {remaining:?}");
    }
    Ok(flags)
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}
