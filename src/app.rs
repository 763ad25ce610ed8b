use std::io::{self, BufRead, IsTerminal, Write};
use std::process::ExitCode;

use crate::cli::{CalcRequest, Commands, REPL_HELP, ReplCommand};
use crate::core::{Calculation, Session};
use crate::error::{AppError, CalcError};
use crate::output::{
    calculation_json, constants_json, error_json, error_line, history_json, message_error_json,
    render_constants_table, render_history_table, success_line,
};

const PROMPT: &str = "scicalc> ";

#[derive(Debug, Clone, Copy)]
pub(crate) struct CommandContext {
    pub(crate) json: bool,
    pub(crate) use_color: bool,
    pub(crate) history_limit: usize,
}

/// Text for a finished computation, and whether it succeeded
fn render_outcome(outcome: &Result<Calculation, CalcError>, ctx: &CommandContext) -> (String, bool) {
    match outcome {
        Ok(calc) if ctx.json => (calculation_json(calc), true),
        Ok(calc) => (success_line(&calc.message, ctx.use_color), true),
        Err(e) if ctx.json => (error_json(e), false),
        Err(e) => (error_line(&e.to_string(), ctx.use_color), false),
    }
}

fn render_app_error(error: &AppError, ctx: &CommandContext) -> String {
    if ctx.json {
        message_error_json(&error.to_string())
    } else {
        error_line(&error.to_string(), ctx.use_color)
    }
}

fn render_history(session: &Session, limit: usize, ctx: &CommandContext) -> String {
    if ctx.json {
        history_json(session.history(), limit)
    } else {
        render_history_table(session.history(), limit, ctx.use_color)
    }
}

fn render_constants(session: &Session, ctx: &CommandContext) -> String {
    if ctx.json {
        constants_json(session.constants())
    } else {
        render_constants_table(session.constants(), ctx.use_color)
    }
}

/// Run one line of the interactive session and return what to print
fn execute(session: &mut Session, command: ReplCommand, ctx: &CommandContext) -> Option<String> {
    let outcome = match command {
        ReplCommand::Calc(req) => session.arithmetic(req.op, req.a, req.b),
        ReplCommand::Eval(formula) => session.evaluate(&formula),
        ReplCommand::Convert { value, from, to } => session.convert(value, &from, &to),
        ReplCommand::History(n) => {
            return Some(render_history(session, n.unwrap_or(ctx.history_limit), ctx));
        }
        ReplCommand::Constants => return Some(render_constants(session, ctx)),
        ReplCommand::Help => {
            return Some(if ctx.json {
                serde_json::json!({ "help": REPL_HELP }).to_string()
            } else {
                REPL_HELP.to_string()
            });
        }
        ReplCommand::Quit | ReplCommand::Empty => return None,
    };
    Some(render_outcome(&outcome, ctx).0)
}

/// Read commands line by line until `quit` or end of input.
///
/// Calculation and usage errors are printed inline; the session keeps going.
pub(crate) fn run_repl<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    out: &mut W,
    ctx: &CommandContext,
    interactive: bool,
) -> io::Result<()> {
    if interactive && !ctx.json {
        writeln!(out, "Type `help` for commands, `quit` to leave.")?;
    }
    let mut lines = input.lines();
    loop {
        if interactive {
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        match ReplCommand::parse(&line) {
            Ok(ReplCommand::Quit) => break,
            Ok(command) => {
                if let Some(text) = execute(session, command, ctx) {
                    writeln!(out, "{text}")?;
                }
            }
            Err(e) => writeln!(out, "{}", render_app_error(&e, ctx))?,
        }
    }
    Ok(())
}

/// Run a one-shot subcommand (or the interactive session)
pub(crate) fn run_command(
    session: &mut Session,
    command: Commands,
    ctx: &CommandContext,
) -> ExitCode {
    let outcome = match command {
        Commands::Calc { op, a, b } => match CalcRequest::new(&op, a, b) {
            Ok(req) => session.arithmetic(req.op, req.a, req.b),
            Err(e) => {
                report_failure(&render_app_error(&e, ctx), ctx);
                return ExitCode::FAILURE;
            }
        },
        Commands::Eval { formula } => session.evaluate(&formula.join(" ")),
        Commands::Convert { value, from, to } => session.convert(value, &from, &to),
        Commands::Constants => {
            println!("{}", render_constants(session, ctx));
            return ExitCode::SUCCESS;
        }
        Commands::Repl => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            let mut stdout = io::stdout().lock();
            return match run_repl(session, stdin.lock(), &mut stdout, ctx, interactive) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("Failed to read input: {e}");
                    ExitCode::FAILURE
                }
            };
        }
    };

    let (text, ok) = render_outcome(&outcome, ctx);
    if ok {
        println!("{text}");
        ExitCode::SUCCESS
    } else {
        report_failure(&text, ctx);
        ExitCode::FAILURE
    }
}

/// JSON failures go to stdout so they stay machine-readable; text goes to stderr
fn report_failure(text: &str, ctx: &CommandContext) {
    if ctx.json {
        println!("{text}");
    } else {
        eprintln!("{text}");
    }
}
