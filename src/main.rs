use std::time::Instant;

use structopt::StructOpt;

use prefix_tools::wordlist::wordlist::{FileFormat, Wordlist};

/// Load a word list and print every stored word matching a prefix.
#[derive(StructOpt)]
struct Cli {
    /// The path to the word list to read
    #[structopt(parse(from_os_str))]
    path: std::path::PathBuf,
    prefix: String,
    /// Column delimiter; when set, the first column holds the word
    #[structopt(short, long)]
    delimiter: Option<char>,
    /// Zero-based column holding per-word payload data (JSON or plain text)
    #[structopt(short, long)]
    payload_column: Option<usize>,
}

fn main() {
    let args = Cli::from_args();

    let format = match (args.delimiter, args.payload_column) {
        (Some(delimiter), Some(column)) => FileFormat::builder()
            .delimiter(delimiter)
            .payload_column(column)
            .build(),
        (Some(delimiter), None) => FileFormat::builder().delimiter(delimiter).build(),
        (None, _) => FileFormat::builder().build(),
    };

    let wl = Wordlist::new();
    wl.load_file(args.path.as_path().to_str().unwrap(), format).unwrap();

    let start = Instant::now();
    let results = wl.find(&args.prefix);
    println!("{} matches in {:#?}s",
             results.len(), start.elapsed().as_millis() as f64 / 1000.0);
    println!("{}", serde_json::to_string_pretty(&results).unwrap());
}
