pub mod cli_clap;
