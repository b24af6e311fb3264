use std::path::Path;

use tracing::debug;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::model::task::TaskFields;
use crate::ops::session::{Applied, Effect, Mutation, MutationError, Session};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(
    command: Commands,
    path: &Path,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = open_session(path)?;
    match command {
        Commands::Add(args) => cmd_add(&mut session, args, json),
        Commands::List(args) => cmd_list(&session, args, json),
        Commands::Show(args) => cmd_show(&session, args, json),
        Commands::Update(args) => cmd_update(&mut session, args, json),
        Commands::Delete(args) => cmd_delete(&mut session, args, json),
        Commands::Toggle(args) => cmd_toggle(&mut session, args, json),
    }
}

/// Load the document. Unlike the TUI, the CLI refuses to run against a
/// document it cannot read, so a one-shot command never replaces it.
fn open_session(path: &Path) -> Result<Session, Box<dyn std::error::Error>> {
    let (session, load_error) = Session::initialize(path);
    if let Some(err) = load_error {
        return Err(err.into());
    }
    debug!(path = %path.display(), tasks = session.store().len(), "opened task document");
    Ok(session)
}

/// Convert a 1-based row number to a store position
fn position_for(row: usize) -> Result<usize, Box<dyn std::error::Error>> {
    row.checked_sub(1)
        .ok_or_else(|| "row numbers start at 1".into())
}

/// Apply a mutation; a write failure is an error here since the process
/// exits right after and the change would be lost.
fn apply(session: &mut Session, mutation: Mutation) -> Result<Effect, Box<dyn std::error::Error>> {
    match session.apply_mutation(mutation) {
        Ok(Applied {
            save_error: Some(err),
            ..
        }) => Err(err.into()),
        Ok(Applied { effect, .. }) => Ok(effect),
        Err(MutationError::Range(e)) => Err(format!(
            "no task at row {} (there are {})",
            row_number(e.position),
            e.len
        )
        .into()),
        Err(e) => Err(e.into()),
    }
}

fn print_task(session: &Session, position: usize, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let Some(task) = session.store().get(position) else {
        return Ok(());
    };
    if json {
        println!("{}", serde_json::to_string_pretty(&task_to_json(position, task))?);
    } else {
        for line in format_task_detail(position, task) {
            println!("{}", line);
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_list(session: &Session, args: ListArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let query = args.search.as_deref().unwrap_or("").trim();
    let rows = session.query_view(query);

    if json {
        let out: Vec<TaskJson> = rows.iter().map(row_to_json).collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else if rows.is_empty() {
        if query.is_empty() {
            println!("no tasks");
        } else {
            println!("no tasks match '{}'", query);
        }
    } else {
        for row in &rows {
            println!("{}", format_row_line(row));
        }
    }
    Ok(())
}

fn cmd_show(session: &Session, args: RowArg, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let position = position_for(args.row)?;
    if session.store().get(position).is_none() {
        return Err(format!(
            "no task at row {} (there are {})",
            args.row,
            session.store().len()
        )
        .into());
    }
    print_task(session, position, json)
}

// ---------------------------------------------------------------------------
// Write commands
// ---------------------------------------------------------------------------

fn cmd_add(session: &mut Session, args: AddArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let fields = TaskFields {
        topic: args.topic,
        description: args.description,
        date: args.date,
        time: args.time,
        priority: args.priority,
    };
    let Effect::Created { position } = apply(session, Mutation::Create(fields))? else {
        return Ok(());
    };
    if json {
        print_task(session, position, true)
    } else {
        if let Some(task) = session.store().get(position) {
            println!("added row {}: {}", row_number(position), task.topic);
        }
        Ok(())
    }
}

fn cmd_update(
    session: &mut Session,
    args: UpdateArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let position = position_for(args.row)?;
    // Start from the stored values; only the given flags change
    let target = session.field_snapshot(position).map(|mut fields| {
        if let Some(topic) = args.topic {
            fields.topic = topic;
        }
        if let Some(description) = args.description {
            fields.description = description;
        }
        if let Some(date) = args.date {
            fields.date = date;
        }
        if let Some(time) = args.time {
            fields.time = time;
        }
        if let Some(priority) = args.priority {
            fields.priority = priority;
        }
        fields
    });
    let fields = target.unwrap_or_default();
    apply(
        session,
        Mutation::Update {
            target: Some(position),
            fields,
        },
    )?;
    if json {
        print_task(session, position, true)
    } else {
        if let Some(task) = session.store().get(position) {
            println!("updated row {}: {}", args.row, task.topic);
        }
        Ok(())
    }
}

fn cmd_delete(
    session: &mut Session,
    args: DeleteArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let position = position_for(args.row)?;
    if !args.yes {
        return Err(format!("refusing to delete row {} without --yes", args.row).into());
    }
    let Effect::Deleted { task } = apply(session, Mutation::Delete { target: Some(position) })? else {
        return Ok(());
    };
    if json {
        println!("{}", serde_json::to_string_pretty(&task_to_json(position, &task))?);
    } else {
        println!("deleted row {}: {}", args.row, task.topic);
    }
    Ok(())
}

fn cmd_toggle(
    session: &mut Session,
    args: RowArg,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let position = position_for(args.row)?;
    let Effect::Toggled { completed, .. } =
        apply(session, Mutation::Toggle { target: Some(position) })?
    else {
        return Ok(());
    };
    if json {
        print_task(session, position, true)
    } else {
        let status = if completed { "Complete" } else { "Pending" };
        println!("row {} is now {}", args.row, status);
        Ok(())
    }
}
