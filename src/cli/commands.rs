//! Command implementations for the Dragoman CLI.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::intent::ConversationContext;
use crate::interpreter::Interpreter;
use crate::vocabulary::InterpreterConfig;

/// Execute a CLI command.
pub fn execute_command(args: DragomanArgs) -> Result<()> {
    match &args.command {
        Command::Interpret(interpret_args) => interpret_transcript(interpret_args.clone(), &args),
        Command::Repl(repl_args) => run_repl(repl_args.clone(), &args),
        Command::Vocab(vocab_args) => show_vocabulary(vocab_args.clone(), &args),
    }
}

/// Load the vocabulary configuration, falling back to the built-ins.
fn load_config(path: &Option<PathBuf>) -> Result<InterpreterConfig> {
    match path {
        Some(path) => InterpreterConfig::from_json_file(path),
        None => Ok(InterpreterConfig::default()),
    }
}

/// Build a conversation context from CLI arguments.
fn parse_context(
    last_intent: &Option<String>,
    last_entity: &Option<String>,
) -> Result<ConversationContext> {
    let last_intent = match last_intent {
        Some(label) => Some(label.parse()?),
        None => None,
    };
    Ok(ConversationContext {
        last_intent,
        last_entity: last_entity.clone(),
    })
}

/// Interpret a single transcript.
fn interpret_transcript(args: InterpretArgs, cli_args: &DragomanArgs) -> Result<()> {
    let interpreter = Interpreter::with_config(load_config(&args.config)?)?;
    let context = parse_context(&args.last_intent, &args.last_entity)?;

    if cli_args.verbosity() > 1 {
        println!("Rule order: {}", interpreter.rule_names().join(" -> "));
    }

    let result = interpreter.interpret(&args.transcript, args.path.as_deref(), &context);
    render_result(&result, cli_args)
}

/// Interactive loop; each turn's intent and category feed the next turn's
/// context, the way a real caller drives follow-ups.
fn run_repl(args: ReplArgs, cli_args: &DragomanArgs) -> Result<()> {
    let interpreter = Interpreter::with_config(load_config(&args.config)?)?;
    let mut context = ConversationContext::default();

    if cli_args.verbosity() > 0 {
        println!("Speak a command per line; 'exit' to leave.");
    }

    let stdin = io::stdin();
    prompt()?;
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() {
            prompt()?;
            continue;
        }
        if line == "exit" || line == "quit" {
            break;
        }

        let result = interpreter.interpret(line, args.path.as_deref(), &context);
        render_result(&result, cli_args)?;

        context = ConversationContext {
            last_intent: Some(result.intent),
            last_entity: result.category.clone(),
        };
        prompt()?;
    }
    Ok(())
}

fn prompt() -> Result<()> {
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}

/// Print the configured vocabularies.
fn show_vocabulary(args: VocabArgs, cli_args: &DragomanArgs) -> Result<()> {
    let config = load_config(&args.config)?;
    render_vocabulary(&config, cli_args)
}
