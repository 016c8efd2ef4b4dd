use clap::Parser;
use wasm_bindgen::prelude::*;

mod board;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    board: board::BoardProps,
}

/// Parses arguments out of a location hash such as `#--rows=3&--cols=4&-vv`.
fn parse_args(location_hash: &str) -> Result<Args, clap::Error> {
    let args = location_hash.split(['#', '&']).filter(|arg| !arg.is_empty());
    Args::try_parse_from(core::iter::once(env!("CARGO_PKG_NAME")).chain(args))
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let (args, parse_error) = match parse_args(&location_hash) {
        Ok(args) => (args, None),
        Err(err) => (
            parse_args("").expect("default arguments must parse"),
            Some(err),
        ),
    };
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    if let Some(err) = parse_error {
        log::error!("ignoring invalid arguments {:?}: {}", location_hash, err);
    }

    let root = document()
        .get_element_by_id("lights-out")
        .expect("Could not find id=\"lights-out\" element");

    log::debug!("App started");
    yew::Renderer::<board::BoardView>::with_root_and_props(root, args.board).render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_hash_uses_defaults() {
        let args = parse_args("").unwrap();

        assert_eq!(args.board.rows, 5);
        assert_eq!(args.board.cols, 5);
        assert_eq!(args.board.chance, 0.25);
        assert_eq!(args.board.seed, None);
    }

    #[test]
    fn hash_overrides_board_settings() {
        let args = parse_args("#--rows=3&--cols=7&--chance=0.5&--seed=42&-vv").unwrap();

        assert_eq!(args.board.rows, 3);
        assert_eq!(args.board.cols, 7);
        assert_eq!(args.board.chance, 0.5);
        assert_eq!(args.board.seed, Some(42));
        assert_eq!(args.verbose.log_level(), Some(log::Level::Info));
    }

    #[test]
    fn invalid_hash_is_an_error() {
        assert!(parse_args("#--rows=300").is_err());
        assert!(parse_args("#--chance=lots").is_err());
        assert!(parse_args("#--bogus").is_err());
    }
}
