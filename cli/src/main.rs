use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    ico_to_svg::entrypoint(env::args_os())
}
