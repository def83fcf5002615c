use clap::Parser;
use language_alphabet::alphabet::AlphabetResolver;
use language_alphabet::builtin::{load_module, Expr, MessageLog, SymbolTable};
use language_alphabet::config::Config;
use language_alphabet::{logging, server};
use std::path::PathBuf;
use std::sync::Arc;

/// Alphabet — lowercase letters of a language or locale
///
/// Resolves a display language (e.g. "Ukrainian") or a locale identifier
/// (e.g. "es", "en_NZ") to its basic exemplar letters.
///
/// Examples:
///   alphabet
///   alphabet Ukrainian
///   alphabet es --json
///   alphabet --list
///   alphabet --serve --port 8080
#[derive(Parser)]
#[command(name = "alphabet", version, about, long_about = None)]
struct Cli {
    /// Language name or locale id. Defaults to the configured language ("English").
    #[arg(index = 1)]
    language: Option<String>,

    /// Print the resolved alphabet as JSON.
    #[arg(long)]
    json: bool,

    /// List known language names and the locale each maps to.
    #[arg(long, short = 'l')]
    list: bool,

    /// Serve the HTTP API instead of printing.
    #[arg(long)]
    serve: bool,

    /// Server bind host (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Server port (overrides config).
    #[arg(long, short = 'p')]
    port: Option<u16>,

    /// Config file path. Defaults to ~/.config/language-alphabet/config.json.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    // ── Config & logging ────────────────────────────────────────

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    logging::init(&config.log_filter);

    let resolver = Arc::new(AlphabetResolver::new());

    // ── Server ──────────────────────────────────────────────────

    if cli.serve {
        let host = cli.host.clone().unwrap_or_else(|| config.host.clone());
        let port = cli.port.unwrap_or(config.port);
        let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
            eprintln!("Error: Cannot start runtime: {}", e);
            std::process::exit(1);
        });
        if let Err(e) = runtime.block_on(server::start(&host, port, resolver, &config.default_language)) {
            eprintln!("Error: Cannot serve on {}:{}: {}", host, port, e);
            std::process::exit(1);
        }
        return;
    }

    // ── Listing ─────────────────────────────────────────────────

    if cli.list {
        for (name, locale) in resolver.catalog().languages() {
            println!("{:<24} {}", name, locale);
        }
        return;
    }

    // ── Evaluate Alphabet[...] ──────────────────────────────────

    if cli.json {
        let name = cli.language.as_deref().unwrap_or(&config.default_language);
        match resolver.resolve(name) {
            Ok(alphabet) => match serde_json::to_string_pretty(&alphabet) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            },
            Err(e) => {
                match e.message_tag() {
                    Some(tag) => eprintln!("Alphabet::{}: {}", tag, e),
                    None => eprintln!("Error: {}", e),
                }
                std::process::exit(1);
            }
        }
        return;
    }

    let mut symbols = SymbolTable::new();
    load_module(&mut symbols, resolver, &config.default_language);

    let args: Vec<Expr> = cli.language.iter().map(Expr::string).collect();
    let mut log = MessageLog::new();
    let result = symbols.call("Alphabet", &args, &mut log);

    for message in log.messages() {
        eprintln!("{}", message);
    }
    match result {
        Some(expr) => println!("{}", expr),
        None => std::process::exit(1),
    }
}
