use std::io::Write;

use clap::Parser;
use reckon::{
    Error,
    interpreter::{lexer::tokenize, parser::core::parse},
    registered_macros,
};

/// reckon is an easy to use command line calculator with support for
/// brace-delimited macros such as `sqrt{2}` and `pow{2,10}`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Start an interactive session instead of evaluating the arguments.
    #[arg(short, long)]
    interactive: bool,

    /// Print the token stream and the syntax tree before evaluating.
    /// Also enabled when the DEBUG environment variable is set.
    #[arg(short, long)]
    debug: bool,

    /// The expression to evaluate. Multiple arguments are joined without
    /// separators, so `reckon 2 + 3` and `reckon 2+3` are the same input.
    expression: Vec<String>,
}

fn main() {
    let args = Args::parse();
    let debug = args.debug || std::env::var_os("DEBUG").is_some();

    if args.interactive {
        run_interactive(debug);
        return;
    }

    if args.expression.is_empty() {
        print_usage();
        return;
    }

    match run(&args.expression.join(""), debug) {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}

/// Evaluates one input, optionally dumping the intermediate stages.
fn run(input: &str, debug: bool) -> Result<f64, Error> {
    let tokens = tokenize(input)?;
    if debug {
        eprintln!("the lexer read the following tokens:");
        for token in &tokens {
            eprintln!("\t{token:?}");
        }
    }

    let root = parse(&tokens)?;
    if debug {
        eprintln!("the parser built the following tree:");
        eprintln!("{root:#?}");
    }

    Ok(root.eval()?)
}

/// Reads expressions from stdin line by line until `exit` or end of input.
fn run_interactive(debug: bool) {
    let stdin = std::io::stdin();

    loop {
        print!("> ");
        let _ = std::io::stdout().flush();

        let mut line = String::new();
        match stdin.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }

        let line = line.trim();
        if line == "exit" {
            println!("bye");
            break;
        }

        match run(line, debug) {
            Ok(value) => println!("{value}"),
            Err(e) => eprintln!("{e}"),
        }
    }
}

/// Prints a short usage summary together with the registered macros.
fn print_usage() {
    println!("Usage:");
    println!("  either evaluate a single expression:");
    println!("    reckon <expression>");
    println!("  or start the interactive mode:");
    println!("    reckon --interactive");
    println!();
    println!("Registered macros:");
    println!("  {}", registered_macros().join(", "));
}
