use clap::{Parser as ClapParser, Subcommand};
use expresso::cli::{self, CliError, EvalOptions};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "expresso")]
#[command(about = "Expresso - evaluate small arithmetic and logical expressions against JSON")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an expression
    Eval {
        /// The expression to evaluate
        expression: String,

        /// JSON object used as context (reads from stdin if not provided)
        #[arg(short, long)]
        context: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Print the scanned tokens of an expression
    Tokens {
        /// The expression to scan
        expression: String,
    },

    /// Print an expression in postfix order
    Postfix {
        /// The expression to convert
        expression: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Eval {
            expression,
            context,
            pretty,
        } => run_eval(expression, context, pretty),
        Commands::Tokens { expression } => {
            for line in cli::render_tokens(&expression) {
                println!("{}", line);
            }
            Ok(())
        }
        Commands::Postfix { expression } => {
            println!("{}", cli::render_postfix(&expression));
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_eval(expression: String, context: Option<String>, pretty: bool) -> Result<(), CliError> {
    let context = match context {
        Some(s) => Some(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Some(buffer)
        }
        None => None,
    };

    let options = EvalOptions {
        expression,
        context,
        pretty,
    };

    println!("{}", cli::execute_eval(&options)?);
    Ok(())
}
