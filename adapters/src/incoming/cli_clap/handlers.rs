use std::io::Write;
use tracing::instrument;

use crate::incoming::cli_clap::{
    args::{ConvertArgs, InfoArgs},
    report::{render_conversion, render_sizes_json, render_sizes_text},
};
use ico_to_svg_application::error::AppResult;
use ico_to_svg_application::infrastructure_config::ConversionConfig;
use ico_to_svg_application::ports::incoming::{convert::ConvertUseCase, info::InfoUseCase};

#[instrument(skip_all, fields(input = %args.input.display(), output = %args.output.display()))]
pub fn handle_convert<W: Write>(
    use_case: &dyn ConvertUseCase,
    args: &ConvertArgs,
    defaults: &ConversionConfig,
    out: &mut W,
) -> AppResult<()> {
    let request = args.to_request(defaults)?;
    let report = use_case.convert(&request)?;
    out.write_all(render_conversion(&report).as_bytes())?;
    Ok(())
}

#[instrument(skip_all, fields(input = %args.input.display(), json = args.json))]
pub fn handle_info<W: Write>(
    use_case: &dyn InfoUseCase,
    args: &InfoArgs,
    out: &mut W,
) -> AppResult<()> {
    let request = args.to_request()?;
    let sizes = use_case.list_sizes(&request)?;

    let rendered = if args.json {
        render_sizes_json(&sizes)?
    } else {
        render_sizes_text(&sizes)
    };
    out.write_all(rendered.as_bytes())?;
    Ok(())
}
