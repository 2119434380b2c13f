use clap::error::ErrorKind;
use clap::Parser;
use std::process;
use uplcfile::cli::Cli;
use uplcfile::commands;

fn main() {
    env_logger::init();

    // try_parse instead of parse: a missing argument must exit 1, not
    // clap's default 2.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = err.print();
            process::exit(code);
        }
    };

    if commands::write::handle_write(&cli.filename, &cli.content).is_err() {
        process::exit(1);
    }
}
