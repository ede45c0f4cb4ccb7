//! Interactive loop: reads commands, drives the form, prints snapshots.

use std::io::{BufRead, Write};

use userform_lib::Form;

use crate::command::Command;
use crate::error::CliError;
use crate::render;

/// Whether the loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Runs one command against the form, writing any output.
pub fn execute(form: &mut Form, command: Command, out: &mut impl Write) -> Result<Flow, CliError> {
    match command {
        Command::Set { field, value } => {
            form.on_field_change(field, value);
        }
        Command::Clear(field) => {
            form.on_field_change(field, "");
        }
        Command::Submit => {
            let state = form.on_submit();
            if state.success {
                log::info!("Form submitted");
            } else {
                log::info!("Form rejected: {} error(s)", state.errors.error_count());
            }
            write!(out, "{}", render::render_state(state))?;
        }
        Command::Reset => {
            let state = form.on_reset();
            write!(out, "{}", render::render_state(state))?;
        }
        Command::Show => write!(out, "{}", render::render_state(form.state()))?,
        Command::Json => writeln!(out, "{}", serde_json::to_string_pretty(form.state())?)?,
        Command::Options => write!(out, "{}", render::render_options())?,
        Command::Help => write!(out, "{}", render::render_help())?,
        Command::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

/// Reads lines until EOF or `quit`.
///
/// Bad commands are reported on `err` and the loop carries on.
pub fn run(
    form: &mut Form,
    input: impl BufRead,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<(), CliError> {
    write!(out, "{}", render::render_help())?;
    write!(out, "> ")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        form.tick();

        match Command::parse(&line) {
            Ok(None) => {}
            Ok(Some(command)) => {
                log::debug!("Command: {:?}", command);
                if execute(form, command, out)? == Flow::Quit {
                    return Ok(());
                }
            }
            Err(e) => {
                log::warn!("{}", e);
                writeln!(err, "{}", e)?;
            }
        }

        write!(out, "> ")?;
        out.flush()?;
    }
    Ok(())
}
