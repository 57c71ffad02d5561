//! Word Ladder CLI
//!
//! Command-line interface for the shortest word ladder solver.

use std::fs;
use std::process;

use word_ladder::LadderSolver;

const USAGE_TEXT: &str = include_str!("text/usage.txt");

/// Read a newline-delimited word list, one word per line, skipping empty
/// lines.
fn load_words(path: &str) -> Vec<String> {
    match fs::read_to_string(path) {
        Ok(contents) => contents
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| line.to_string())
            .collect(),
        Err(err) => {
            eprintln!("Cannot read dictionary file {}: {}", path, err);
            process::exit(1);
        }
    }
}

fn run_solve(args: &[String]) {
    if args.len() < 5 {
        eprintln!("Usage: word-ladder solve <dictfile> <root> <target> [max_depth]");
        process::exit(1);
    }

    let root = &args[3];
    let target = &args[4];

    // Only substitutions are allowed, so words of different lengths can
    // never be connected; reject before touching the dictionary.
    if root.is_empty() || root.len() != target.len() {
        eprintln!("Root and target must be non-empty words of the same length.");
        process::exit(1);
    }

    let words = load_words(&args[2]);
    let mut solver = LadderSolver::new(words, root.len());
    if let Some(max_depth) = args.get(5).and_then(|s| s.parse().ok()) {
        solver = solver.with_max_depth(max_depth);
    }

    match solver.find_path(root, target) {
        Ok(path) => {
            println!("{}", path.join(" -> "));
        }
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    }
}

fn run_reach(args: &[String]) {
    if args.len() < 4 {
        eprintln!("Usage: word-ladder reach <dictfile> <root>");
        process::exit(1);
    }

    let root = &args[3];
    if root.is_empty() {
        eprintln!("Root must be a non-empty word.");
        process::exit(1);
    }

    let words = load_words(&args[2]);
    let solver = LadderSolver::new(words, root.len());

    if !solver.dictionary().contains(root) {
        eprintln!("word not found in dictionary: {}", root);
        process::exit(1);
    }

    let reachable = solver.reachable_from(root);
    println!(
        "{} of {} words reachable from {}:",
        reachable.len(),
        solver.dictionary().len(),
        root
    );
    for (word, length) in &reachable {
        println!("{:>4}  {}", length, word);
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("{}", USAGE_TEXT);
        process::exit(1);
    }

    match args[1].as_str() {
        "--help" | "-h" => {
            println!("{}", USAGE_TEXT);
        }
        "solve" => {
            run_solve(&args);
        }
        "reach" => {
            run_reach(&args);
        }
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            eprintln!("Use --help for usage information.");
            process::exit(1);
        }
    }
}
