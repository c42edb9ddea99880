use postfix::shell::{self, Command};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

const HISTORY_FILE: &str = ".rpn_history";

fn init_logging() {
    use tracing_subscriber::{
        filter::{LevelFilter, Targets},
        fmt::Layer,
        prelude::*,
    };

    // RPN_LOG=debug shows each evaluation, trace shows every stack step
    let level = std::env::var("RPN_LOG")
        .ok()
        .and_then(|l| l.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::WARN);

    tracing_subscriber::registry()
        .with(Layer::new()
            .with_writer(std::io::stderr)
            .with_filter(Targets::new().with_default(level))
        )
        .init();
}

// one shot: `rpn 3 4 +`, `rpn deriv sin 0`, `rpn integ sin 0 3.1416`
fn run_args(args: Vec<String>) {
    let command = Command::from_line(&args[0]);
    let input = match command {
        Command::Eval => args.join(" "),
        _ => args[1..].join(" "),
    };
    println!("{}", shell::report(command.run(&input)));
}

fn repl() -> Result<(), String> {
    let mut rl = DefaultEditor::new().map_err(|e| e.to_string())?;
    let history = dirs::home_dir().map(|home| home.join(HISTORY_FILE));
    if let Some(ref path) = history {
        let _ = rl.load_history(path);
    }
    println!("Enter expression in postfix notation (e.g., '3 4 + 2 * 7 / log'),");
    println!("or 'deriv' / 'integ' for calculus on log, sin, cos, tan");

    let result = loop {
        let line = match rl.readline(">> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break Ok(()),
            Err(e) => break Err(format!("Readline err: {:?}", e)),
            Ok(line) => line,
        };
        let _ = rl.add_history_entry(&line);
        let command = Command::from_line(&line);
        let args = match command {
            Command::Eval => line,
            Command::Deriv | Command::Integ => {
                let prompt = match command {
                    Command::Deriv => "<func> <x>: ",
                    _ => "<func> <a> <b> [n]: ",
                };
                match rl.readline(prompt) {
                    Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break Ok(()),
                    Err(e) => break Err(format!("Readline err: {:?}", e)),
                    Ok(args) => {
                        let _ = rl.add_history_entry(&args);
                        args
                    }
                }
            }
        };
        println!("{}", shell::report(command.run(&args)));
    };

    if let Some(ref path) = history {
        if let Err(e) = rl.save_history(path) {
            tracing::warn!(error = %e, "couldn't save history");
        }
    }
    result
}

fn main() -> Result<(), String> {
    init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        run_args(args);
        return Ok(());
    }
    repl()
}
