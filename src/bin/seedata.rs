use clap::Parser;
use clap::error::ErrorKind;
use seedata::file::{self, SourceFormat};
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "seedata",
    about = "Convert a data file between its binary and text encodings"
)]
struct Cli {
    /// Input file; the converted output lands next to it with a .bin or
    /// .txt extension
    file: String,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(1);
        }
    };

    let data = match file::load(&cli.file) {
        Ok(data) => data,
        Err(err) => {
            eprintln!("{:#}", err);
            return ExitCode::from(2);
        }
    };

    let out_path = file::output_path(&cli.file, data.format);
    let encoded = match data.format {
        SourceFormat::Binary => data.to_text(),
        SourceFormat::Text => data.to_binary(),
    };

    let written = encoded
        .map_err(anyhow::Error::from)
        .and_then(|bytes| file::save(&out_path, &bytes));
    if let Err(err) = written {
        eprintln!("{:#}", err);
        return ExitCode::from(3);
    }

    println!("Converted {} to {}", cli.file, out_path);
    ExitCode::SUCCESS
}
