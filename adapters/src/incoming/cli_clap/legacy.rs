use std::ffi::OsString;

const SUBCOMMANDS: &[&str] = &["convert", "info", "help"];
const CONFIG_FLAG: &str = "--config";

/// Rewrites `ico-to-svg in.ico out.svg ...` into `ico-to-svg convert in.ico out.svg ...`.
///
/// Leading `--config FILE` (or `--config=FILE`) is skipped; the next argument
/// gets `convert` in front when it is neither a known subcommand nor a flag.
pub fn normalize_legacy_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().collect();

    let mut position = 1;
    while let Some(arg) = args.get(position) {
        let arg = arg.to_string_lossy();
        if arg == CONFIG_FLAG {
            position += 2;
        } else if arg.starts_with("--config=") {
            position += 1;
        } else {
            break;
        }
    }

    let needs_convert = args.get(position).is_some_and(|first| {
        let first = first.to_string_lossy();
        !first.starts_with('-') && !SUBCOMMANDS.contains(&first.as_ref())
    });

    if needs_convert {
        args.insert(position, OsString::from("convert"));
    }
    args
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(args: &[&str]) -> Vec<String> {
        normalize_legacy_args(args.iter().map(OsString::from))
            .into_iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn inserts_convert_before_positional_input() {
        assert_eq!(
            normalize(&["ico-to-svg", "in.ico", "out.svg", "--mode", "vector"]),
            vec!["ico-to-svg", "convert", "in.ico", "out.svg", "--mode", "vector"]
        );
    }

    #[test]
    fn skips_leading_config_flag() {
        assert_eq!(
            normalize(&["ico-to-svg", "--config", "f.toml", "in.ico", "out.svg"]),
            vec!["ico-to-svg", "--config", "f.toml", "convert", "in.ico", "out.svg"]
        );
        assert_eq!(
            normalize(&["ico-to-svg", "--config=f.toml", "in.ico", "out.svg"]),
            vec!["ico-to-svg", "--config=f.toml", "convert", "in.ico", "out.svg"]
        );
        assert_eq!(
            normalize(&["ico-to-svg", "--config", "f.toml", "info", "in.ico"]),
            vec!["ico-to-svg", "--config", "f.toml", "info", "in.ico"]
        );
    }

    #[test]
    fn leaves_subcommands_and_flags_alone() {
        for args in [
            vec!["ico-to-svg", "convert", "in.ico", "out.svg"],
            vec!["ico-to-svg", "info", "in.ico"],
            vec!["ico-to-svg", "--version"],
            vec!["ico-to-svg", "-h"],
            vec!["ico-to-svg", "help"],
            vec!["ico-to-svg", "--config"],
        ] {
            assert_eq!(normalize(&args), args);
        }
    }

    #[test]
    fn empty_invocation_is_untouched() {
        assert_eq!(normalize(&["ico-to-svg"]), vec!["ico-to-svg"]);
        assert!(normalize(&[]).is_empty());
    }
}
