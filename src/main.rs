//! resume-forge – command-line resume JSON → PDF converter.
//!
//! Usage:
//!   resume-forge <resume.json> [output.pdf] [--template modern] [--title "My Resume"]
//!
//! If `output.pdf` is omitted the PDF is written next to the input file with
//! the same stem (e.g. `ada.json` → `ada.pdf`).

use std::{env, fs, path::PathBuf, process};

use resume_forge::model::Resume;
use resume_forge::pipeline::{render_resume, RenderConfig};
use resume_forge::profile::TemplateId;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let mut input_path: Option<PathBuf> = None;
    let mut output_path: Option<PathBuf> = None;
    let mut template = TemplateId::default();
    let mut title: Option<String> = None;
    let mut positional = 0usize;

    let mut iter = args.iter().skip(1).peekable();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--template" | "-T" => match iter.next() {
                Some(v) => match v.parse::<TemplateId>() {
                    Ok(t) => template = t,
                    Err(e) => {
                        eprintln!("{e}");
                        process::exit(1);
                    }
                },
                None => {
                    eprintln!("--template requires a value (modern, classic, minimal)");
                    process::exit(1);
                }
            },
            "--title" | "-t" => match iter.next() {
                Some(v) => title = Some(v.clone()),
                None => {
                    eprintln!("--title requires a value");
                    process::exit(1);
                }
            },
            "--help" | "-h" => {
                print_usage(&args[0]);
                process::exit(0);
            }
            other if other.starts_with('-') => {
                eprintln!("Unknown flag: {other}");
                print_usage(&args[0]);
                process::exit(1);
            }
            path => {
                if positional == 0 {
                    input_path = Some(PathBuf::from(path));
                } else if positional == 1 {
                    output_path = Some(PathBuf::from(path));
                } else {
                    eprintln!("Unexpected argument: {path}");
                    print_usage(&args[0]);
                    process::exit(1);
                }
                positional += 1;
            }
        }
    }

    let input = match input_path {
        Some(p) => p,
        None => {
            eprintln!("Error: no input file specified.");
            print_usage(&args[0]);
            process::exit(1);
        }
    };

    // Default output: same directory + same stem as input, but with .pdf
    let output = output_path.unwrap_or_else(|| {
        let mut o = input.clone();
        o.set_extension("pdf");
        o
    });

    let json = match fs::read_to_string(&input) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading '{}': {e}", input.display());
            process::exit(1);
        }
    };

    let resume: Resume = match serde_json::from_str(&json) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error parsing '{}': {e}", input.display());
            process::exit(1);
        }
    };

    // Default title: the candidate's name, falling back to the file stem.
    let default_title = if resume.personal_info.name.is_empty() {
        input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("resume")
            .to_string()
    } else {
        resume.personal_info.name.clone()
    };

    let config = RenderConfig {
        title: title.unwrap_or(default_title),
        ..RenderConfig::default()
    };

    match render_resume(&resume, template, &config) {
        Ok((bytes, layout)) => {
            if let Some(parent) = output.parent() {
                if !parent.as_os_str().is_empty() {
                    if let Err(e) = fs::create_dir_all(parent) {
                        eprintln!("Error creating output directory: {e}");
                        process::exit(1);
                    }
                }
            }
            if let Err(e) = fs::write(&output, &bytes) {
                eprintln!("Error writing '{}': {e}", output.display());
                process::exit(1);
            }
            let pages = layout.pages.len();
            eprintln!(
                "Wrote '{}' ({} bytes, {} page{}, template '{}')",
                output.display(),
                bytes.len(),
                pages,
                if pages == 1 { "" } else { "s" },
                template
            );
        }
        Err(e) => {
            eprintln!("Error generating PDF: {e}");
            process::exit(1);
        }
    }
}

fn print_usage(prog: &str) {
    eprintln!("resume-forge – resume JSON to PDF converter");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  {prog} <resume.json> [output.pdf] [--template modern] [--title \"My Resume\"]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  <resume.json>  Resume data (see the Resume model; missing fields default to empty)");
    eprintln!("  [output.pdf]   Output path  (default: same stem as input with .pdf)");
    eprintln!();
    eprintln!("Flags:");
    eprintln!("  --template, -T  Visual template: modern, classic, or minimal (default: classic)");
    eprintln!("  --title, -t     Document title in PDF metadata (default: candidate name)");
    eprintln!("  --help          Print this message");
}
