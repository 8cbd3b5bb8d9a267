//! kaxabu-json CLI - convert the Kaxabu word list to application JSON
//!
//! ```bash
//! kaxabu-json                              # look for the default word list file
//! kaxabu-json words.xlsx                   # writes kaxabu_words.json
//! kaxabu-json words.csv -o out/words.json  # explicit output
//! kaxabu-json words.xlsx --sheet 分級       # read another worksheet
//! ```
//!
//! Exit status: `0` on success, `2` when the input file is missing, `1` on
//! any other failure.

use clap::Parser;
use kaxabu::logs::{log_error, log_info, log_success, set_quiet};
use kaxabu::{convert_file, resolve_input, ConvertError, ConvertOptions, DEFAULT_OUTPUT};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "kaxabu-json")]
#[command(about = "Convert the Kaxabu vocabulary table (XLSX/CSV) to JSON", long_about = None)]
struct Cli {
    /// Input spreadsheet or CSV file (default: the word list in the current directory)
    input: Option<PathBuf>,

    /// Output JSON file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// CSV delimiter (auto-detect if not specified)
    #[arg(short, long)]
    delimiter: Option<char>,

    /// Worksheet name (first sheet if not specified)
    #[arg(short, long)]
    sheet: Option<String>,

    /// Skip the record schema check
    #[arg(long)]
    no_validate: bool,

    /// Only print errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();
    set_quiet(cli.quiet);

    if let Err(e) = run(cli) {
        log_error(format!("Error: {}", e));
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<(), ConvertError> {
    let input = resolve_input(cli.input.as_deref(), Path::new("."))?;

    let options = ConvertOptions {
        output: cli.output,
        delimiter: cli.delimiter,
        sheet: cli.sheet,
        skip_validation: cli.no_validate,
    };

    let summary = convert_file(&input, &options)?;

    if summary.placeholder_ids > 0 {
        log_info(format!(
            "{} records without id got a positional placeholder",
            summary.placeholder_ids
        ));
    }
    log_success(format!("✨ Done: {} records", summary.records));
    Ok(())
}
