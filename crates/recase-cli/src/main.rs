mod cli;
mod colors;
mod commands;

use cli::{DetectParams, SplitParams, StylesParams, ToParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();
    init_logging(matches.get_count("verbose"));

    match matches.subcommand() {
        Some(("to", m)) => {
            let params = ToParams::from_matches(m);
            commands::to::run(params.into());
        }
        Some(("detect", m)) => {
            let params = DetectParams::from_matches(m);
            commands::detect::run(params.into());
        }
        Some(("split", m)) => {
            let params = SplitParams::from_matches(m);
            commands::split::run(params.into());
        }
        Some(("styles", m)) => {
            let params = StylesParams::from_matches(m);
            commands::styles::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

/// `-v` enables debug logs, `-vv` trace logs; otherwise `RUST_LOG` decides.
fn init_logging(verbose: u8) {
    let env = env_logger::Env::default().default_filter_or("warn");
    let mut builder = env_logger::Builder::from_env(env);
    builder.format_timestamp(None);
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(log::LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(log::LevelFilter::Trace);
        }
    }
    builder.init();
}
