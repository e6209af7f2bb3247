use std::io::Write;

use crate::bootstrap::state::AppState;
use ico_to_svg_adapters::incoming::cli_clap::{
    args::Command,
    handlers::{handle_convert, handle_info},
};
use ico_to_svg_application::error::AppResult;
use ico_to_svg_application::infrastructure_config::Config;

/// Routes a parsed subcommand to its use case, writing the report to `out`.
pub fn dispatch<W: Write>(
    state: &AppState,
    command: &Command,
    config: &Config,
    out: &mut W,
) -> AppResult<()> {
    match command {
        Command::Convert(args) => handle_convert(
            state.convert_use_case.as_ref(),
            args,
            &config.conversion,
            out,
        ),
        Command::Info(args) => handle_info(state.info_use_case.as_ref(), args, out),
    }
}
