pub mod detect;
pub mod error;
pub mod input;
pub mod split;
pub mod style_resolver;
pub mod styles;
pub mod to;

#[cfg(test)]
mod input_tests;

use error::CommandError;

/// Print `error: ...` (and a hint, if any) to stderr and exit with status 1.
pub fn exit_on_error(result: Result<(), CommandError>) {
    let Err(err) = result else {
        return;
    };

    log::debug!("command failed: {err:?}");
    eprintln!("error: {err}");
    if let Some(hint) = err.hint() {
        eprintln!();
        eprintln!("{hint}");
    }
    std::process::exit(1);
}
