mod debug_report;

use reductor::{Features, Options, evaluate_verbose};
use std::io::{self, IsTerminal, Read};

fn main() {
    env_logger::init();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let mut features = Features::GATE_RULES;
    if config.nodes {
        features |= Features::RECORD_NODES;
    }
    let opts = Options { features };

    match evaluate_verbose(&config.input, &opts) {
        Ok(res) => debug_report::print_run(&res, config.color),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

struct CliConfig {
    input: String,
    color: bool,
    nodes: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut color = io::stdout().is_terminal();
    let mut nodes = false;
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                println!("{}", help_text());
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("reductor {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--nodes" => nodes = true,
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                set_input(&mut input, value)?;
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    set_input(&mut input, rest)?;
                }
                break;
            }
            _ if arg.starts_with("--input=") => {
                set_input(&mut input, arg.trim_start_matches("--input=").to_string())?;
            }
            // A leading minus is also how negative numbers start.
            _ if arg.starts_with("--") || (arg.starts_with('-') && !arg[1..].starts_with(|c: char| c.is_ascii_digit())) => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                set_input(&mut input, rest)?;
                break;
            }
        }
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    Ok(CliConfig { input, color, nodes })
}

fn set_input(slot: &mut Option<String>, value: String) -> Result<(), String> {
    if slot.is_some() {
        return Err("error: input provided multiple times".to_string());
    }
    *slot = Some(value);
    Ok(())
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer.trim_end_matches(['\r', '\n']).to_string())
}

fn help_text() -> String {
    format!(
        "reductor {version}

Evaluate an expression with the stock rule tables and trace the reduction.

Usage:
  reductor [OPTIONS] [--] <input...>
  reductor [OPTIONS] --input <text>

Options:
  -i, --input <text>         Input text to evaluate. If omitted, reads remaining
                             args or stdin when no args are provided.
  --nodes                    Record and print the nodes produced by each pass.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Set RUST_LOG=debug (or trace) for engine logs on stderr.

Exit codes:
  0  Success.
  1  A rule or modifier failed.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
    )
}
