use std::io;
use std::path::PathBuf;
use std::process;

use clap::{CommandFactory, Parser};
use clap_complete::Shell;

/// longlines — report lines longer than 80 characters in a text file.
#[derive(Parser)]
#[command(name = "longlines", version, about)]
struct Cli {
    /// File whose line lengths are checked.
    #[arg(required_unless_present = "completions")]
    file: Option<PathBuf>,

    /// Print shell completions for the given shell.
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too; only real usage
            // mistakes get a failing status.
            let _ = e.print();
            process::exit(i32::from(e.use_stderr()));
        }
    };

    // Shell completions
    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "longlines", &mut io::stdout());
        return;
    }

    let Some(file) = cli.file else {
        eprintln!("usage: longlines <FILE>");
        process::exit(1);
    };

    match longlines::check_file(&file) {
        Ok(report) => {
            print!("{}", longlines::format::render(&report));
            // A mid-stream read failure still printed partial tallies,
            // but the run did not cover the whole file.
            if report.failure.is_some() {
                process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{e}");
            process::exit(e.exit_code());
        }
    }
}
