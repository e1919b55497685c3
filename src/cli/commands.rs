//! `daas-env` subcommand implementations.

use std::io::Write;

use crate::{
    api::Alias,
    cli::{CommandError, CommandResult, ConfigService, Console, SaveOutcome},
    ui::{
        ContainerModel, Event,
        draft::{env_key, set_var, unset_var},
        render_row,
    },
};

fn ensure_loaded<S: ConfigService>(console: &Console<S>) -> CommandResult<()> {
    match console.list().error() {
        Some(failure) => Err(CommandError::Fetch(failure.clone())),
        None => Ok(()),
    }
}

fn find<'c, S: ConfigService>(
    console: &'c Console<S>,
    alias: &Alias,
) -> CommandResult<&'c ContainerModel> {
    ensure_loaded(console)?;
    console
        .list()
        .get(alias)
        .ok_or_else(|| CommandError::UnknownAlias(alias.clone()))
}

fn find_editable<'c, S: ConfigService>(
    console: &'c Console<S>,
    alias: &Alias,
) -> CommandResult<&'c ContainerModel> {
    let container = find(console, alias)?;
    if !container.is_editable() {
        return Err(CommandError::ReadOnly(alias.clone()));
    }
    Ok(container)
}

pub fn list<S: ConfigService>(console: &Console<S>, out: &mut dyn Write) -> CommandResult<()> {
    ensure_loaded(console)?;
    write!(out, "{}", console.view())?;
    Ok(())
}

pub fn show<S: ConfigService>(
    console: &Console<S>,
    alias: &Alias,
    out: &mut dyn Write,
) -> CommandResult<()> {
    let container = find(console, alias)?;
    writeln!(out, "{}", container.text())?;
    Ok(())
}

/// Current draft text of an editable container, used to seed an editor.
pub fn draft_text<S: ConfigService>(console: &Console<S>, alias: &Alias) -> CommandResult<String> {
    Ok(find_editable(console, alias)?.text())
}

/// Replaces the env of `alias` with the lines of `text` and saves it.
pub fn edit<S: ConfigService>(
    console: &mut Console<S>,
    alias: &Alias,
    text: &str,
    out: &mut dyn Write,
) -> CommandResult<()> {
    // an empty env reads back as one empty line, which would look like an edit
    if find_editable(console, alias)?.text() == text {
        return unchanged(alias, out);
    }
    console.edit(alias, text);
    save(console, alias, out)
}

/// Applies `KEY=VALUE` assignments to the env of `alias` and saves it.
pub fn set<S: ConfigService>(
    console: &mut Console<S>,
    alias: &Alias,
    assignments: &[String],
    out: &mut dyn Write,
) -> CommandResult<()> {
    let mut env = find_editable(console, alias)?.draft().to_vec();
    for assignment in assignments {
        if !assignment.contains('=') || env_key(assignment).is_empty() {
            return Err(CommandError::InvalidAssignment(assignment.clone()));
        }
        env = set_var(&env, assignment);
    }
    replace_and_save(console, alias, env, out)
}

/// Removes variables from the env of `alias` and saves it.
pub fn unset<S: ConfigService>(
    console: &mut Console<S>,
    alias: &Alias,
    keys: &[String],
    out: &mut dyn Write,
) -> CommandResult<()> {
    let env = keys
        .iter()
        .fold(find_editable(console, alias)?.draft().to_vec(), |env, key| {
            unset_var(&env, key)
        });
    replace_and_save(console, alias, env, out)
}

fn replace_and_save<S: ConfigService>(
    console: &mut Console<S>,
    alias: &Alias,
    env: Vec<String>,
    out: &mut dyn Write,
) -> CommandResult<()> {
    console.dispatch(Event::EnvReplaced {
        alias: alias.clone(),
        env,
    });
    save(console, alias, out)
}

fn save<S: ConfigService>(
    console: &mut Console<S>,
    alias: &Alias,
    out: &mut dyn Write,
) -> CommandResult<()> {
    match console.save(alias) {
        SaveOutcome::Saved => {
            writeln!(out, "saved {alias}")?;
            if let Some(failure) = console.list().error() {
                return Err(CommandError::Refresh {
                    alias: alias.clone(),
                    failure: failure.clone(),
                });
            }
            if let Some(container) = console.list().get(alias) {
                write!(out, "{}", render_row(container))?;
            }
            Ok(())
        }
        SaveOutcome::Unchanged => unchanged(alias, out),
        SaveOutcome::Failed(failure) => Err(CommandError::Save {
            alias: alias.clone(),
            failure,
        }),
    }
}

fn unchanged(alias: &Alias, out: &mut dyn Write) -> CommandResult<()> {
    writeln!(out, "{alias}: no changes")?;
    Ok(())
}
