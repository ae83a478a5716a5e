//! chapterize - turn rendered chapter HTML into typed content elements

use std::io::Read;
use std::process::ExitCode;

use clap::Parser;

use chapterize::{ChapterContent, transform_chapter};

#[derive(Parser)]
#[command(name = "chapterize")]
#[command(version, about = "Transform rendered chapter HTML into typed content elements", long_about = None)]
#[command(after_help = "EXAMPLES:
    chapterize ch01.html                Print elements and images as JSON
    chapterize --id ch01 ch01.html      Tag the output with a chapter id
    cat ch01.html | chapterize -        Read the fragment from stdin")]
struct Cli {
    /// Chapter HTML fragment file, or - for stdin
    #[arg(value_name = "INPUT")]
    input: String,

    /// Chapter identifier echoed into the JSON output
    #[arg(long, default_value = "chapter")]
    id: String,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pretty: bool,
}

#[derive(serde::Serialize)]
struct Output<'a> {
    chapter: &'a str,
    #[serde(flatten)]
    content: &'a ChapterContent,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let html = if cli.input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| e.to_string())?;
        buf
    } else {
        std::fs::read_to_string(&cli.input)
            .map_err(|e| format!("{}: {e}", cli.input))?
    };

    let content = transform_chapter(&html).map_err(|e| e.to_string())?;
    let output = Output {
        chapter: &cli.id,
        content: &content,
    };

    let json = if cli.pretty {
        serde_json::to_string_pretty(&output)
    } else {
        serde_json::to_string(&output)
    }
    .map_err(|e| e.to_string())?;
    println!("{json}");

    Ok(())
}
