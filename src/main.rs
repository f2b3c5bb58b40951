//! Word Chain CLI
//!
//! Command-line interface for the word ladder and anagram services, plus the
//! `serve` mode that runs the HTTP API.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use word_chain::server::{self, AppState};
use word_chain::{
    fold, load_dictionary, load_dictionary_from, neighbors, ChainService, WORD_LENGTH,
};

const BANNER_TEXT: &str = include_str!("text/banner.txt");
const USAGE_TEXT: &str = include_str!("text/usage.txt");

fn print_banner() {
    for line in BANNER_TEXT.lines().take(6) {
        println!("{}", line);
    }
}

fn print_help() {
    println!("{}", BANNER_TEXT);
}

/// Words from the file named by `WORDLIST`, falling back to the embedded
/// dictionary.
fn load_words() -> Vec<String> {
    match std::env::var("WORDLIST") {
        Ok(path) => match load_dictionary_from(&path) {
            Ok(words) => words,
            Err(e) => {
                eprintln!("Failed to read word list {}: {}", path, e);
                std::process::exit(1);
            }
        },
        Err(_) => load_dictionary(),
    }
}

fn print_chain(service: &ChainService, source: &str, target: &str) {
    match service.find_chain(source, target) {
        Err(e) => println!("Error: {}", e),
        Ok(None) => println!("No chain connects {} and {}.", source, target),
        Ok(Some(chain)) => {
            println!("{} steps:", chain.len() - 1);
            println!("  {}", chain.join(" -> "));
        }
    }
}

fn print_anagrams(service: &ChainService, word: &str) {
    match service.anagrams(word) {
        Err(e) => println!("Error: {}", e),
        Ok(hits) if hits.is_empty() => println!("No anagrams of {} in the dictionary.", word),
        Ok(hits) => println!("{}", hits.join(" ")),
    }
}

fn run_interactive() {
    print_banner();

    println!("Loading dictionary...");
    let words = load_words();
    let service = ChainService::new(&words, WORD_LENGTH);
    println!(
        "Indexed {} words of length {}.",
        service.index().len(),
        WORD_LENGTH
    );
    println!("Type 'help' for commands.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush().unwrap();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap() == 0 {
            break;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0].to_lowercase().as_str() {
            "help" | "h" | "?" => {
                print_help();
            }
            "quit" | "exit" | "q" => {
                println!("Goodbye!");
                break;
            }
            "chain" | "c" => {
                if parts.len() < 3 {
                    println!("Usage: chain <source> <target>");
                    continue;
                }
                print_chain(&service, parts[1], parts[2]);
            }
            "anagram" | "a" => {
                if parts.len() < 2 {
                    println!("Usage: anagram <word>");
                    continue;
                }
                print_anagrams(&service, parts[1]);
            }
            "neighbors" | "n" => {
                if parts.len() < 2 {
                    println!("Usage: neighbors <word>");
                    continue;
                }
                let word = fold(parts[1]);
                let hits: Vec<&str> = neighbors(&word, service.index()).collect();
                if hits.is_empty() {
                    println!("No neighbors of {} in the dictionary.", word);
                } else {
                    println!("{}", hits.join(" "));
                }
            }
            "count" => {
                println!("{} words indexed.", service.index().len());
            }
            "alphabet" => {
                let letters: String = service.index().alphabet().iter().collect();
                println!("{} letters: {}", service.index().alphabet().len(), letters);
            }
            _ => {
                println!("Unknown command: {}", parts[0]);
                println!("Type 'help' for available commands.");
            }
        }
    }
}

fn run_serve(bind: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let words = load_words();
    let state = Arc::new(AppState {
        chains: ChainService::new(&words, WORD_LENGTH),
    });

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to start runtime: {}", e);
            std::process::exit(1);
        }
    };
    if let Err(e) = runtime.block_on(server::serve(state, bind)) {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--help" | "-h" => {
                println!("{}", USAGE_TEXT);
            }
            "chain" => {
                if args.len() < 4 {
                    eprintln!("Usage: word-chain chain <source> <target>");
                    std::process::exit(1);
                }
                let words = load_words();
                let service = ChainService::new(&words, WORD_LENGTH);
                print_chain(&service, &args[2], &args[3]);
            }
            "anagram" => {
                if args.len() < 3 {
                    eprintln!("Usage: word-chain anagram <word>");
                    std::process::exit(1);
                }
                let words = load_words();
                let service = ChainService::new(&words, WORD_LENGTH);
                print_anagrams(&service, &args[2]);
            }
            "serve" => {
                let bind = args
                    .get(2)
                    .cloned()
                    .or_else(|| std::env::var("WORD_CHAIN_BIND").ok())
                    .unwrap_or_else(|| "0.0.0.0:5000".to_string());
                run_serve(&bind);
            }
            _ => {
                eprintln!("Unknown command: {}", args[1]);
                eprintln!("Use --help for usage information.");
                std::process::exit(1);
            }
        }
    } else {
        run_interactive();
    }
}
