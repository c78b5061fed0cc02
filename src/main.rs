// Entry point: program main
// Handles --store, --site, --help, and runs the TUI
//
// TUI Docs: https://github.com/whit3rabbit/bubbletea-rs look for related crates there and examples on each of them.

use std::env;
use std::path::PathBuf;
use std::process;

use quill::store::Store;
use quill::ui::run;

fn print_help() {
    println!("quill - interactive prompt composer with keyword autocomplete");
    println!();
    println!("Usage:");
    println!("  quill [--store <path>] [--site <host>]");
    println!();
    println!("Options:");
    println!("  --store <path>   Storage file to load and persist settings, keywords and");
    println!("                   usage counts. Defaults to ~/.quill.json.");
    println!("  --site <host>    Check <host> against the stored allowlist before arming");
    println!("                   the suggester; off-list hosts run with suggestions off.");
    println!("  --help           Show this help message.");
    println!();
    println!("Description:");
    println!("  Type your prompt into the field. '#' opens the keyword categories,");
    println!("  '#sty' filters them by prefix, and a bare category name (e.g. 'color')");
    println!("  opens that category's options. Options are ranked by how often you have");
    println!("  picked them. Enter with the dropdown closed prints the prompt and exits.");
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let mut store_path: Option<PathBuf> = None;
    let mut site: Option<String> = None;
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                return;
            }
            "--store" if i + 1 < args.len() => {
                store_path = Some(PathBuf::from(&args[i + 1]));
                i += 2;
            }
            "--site" if i + 1 < args.len() => {
                site = Some(args[i + 1].clone());
                i += 2;
            }
            "--store" | "--site" => {
                eprintln!("missing value for {}", args[i]);
                process::exit(2);
            }
            other => {
                eprintln!("unknown argument: {other}");
                process::exit(2);
            }
        }
    }

    let store = Store::open(store_path.unwrap_or_else(Store::default_path));

    match run(store, site).await {
        Ok(Some(prompt)) => {
            if !prompt.is_empty() {
                println!("{prompt}");
            }
            process::exit(0);
        }
        Ok(None) => {
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{e}");
            process::exit(2);
        }
    }
}
