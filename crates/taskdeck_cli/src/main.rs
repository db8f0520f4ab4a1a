//! Terminal presentation shell for taskdeck.
//!
//! # Responsibility
//! - Map commands onto task store operations.
//! - Render the three derived views and the stats line after every change.
//! - Own user-facing prompts; core never talks to the terminal.

use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use taskdeck_core::{
    due_date_groups, priority_groups, sorted_view, stats, FileBlobStore, Priority, Task, TaskId,
    TaskStore,
};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let Some(command) = args.first() else {
        print_usage();
        return Ok(());
    };

    match command.as_str() {
        "version" => {
            println!("taskdeck {}", taskdeck_core::core_version());
            return Ok(());
        }
        "help" | "--help" | "-h" => {
            print_usage();
            return Ok(());
        }
        _ => {}
    }

    let data_dir = data_dir();
    init_logging_best_effort(&data_dir);
    let mut store =
        TaskStore::open(FileBlobStore::new(&data_dir)).map_err(|err| err.to_string())?;

    match command.as_str() {
        "add" => {
            let [text, priority, due_date] = expect_args(args, "add <text> <priority> <date>")?;
            let priority: Priority = priority.parse().map_err(|err| format!("{err}"))?;
            let task = store
                .add_task(text, priority, due_date)
                .map_err(|err| err.to_string())?;
            println!("added task {}", task.id);
            render_all(store.load_all());
            Ok(())
        }
        "edit" => {
            let [id, text, priority, due_date] =
                expect_args(args, "edit <id> <text> <priority> <date>")?;
            let id = parse_id(id)?;
            let priority: Priority = priority.parse().map_err(|err| format!("{err}"))?;
            let task = store
                .update_task(id, text, priority, due_date)
                .map_err(|err| err.to_string())?;
            println!("updated task {}", task.id);
            render_all(store.load_all());
            Ok(())
        }
        "toggle" => {
            let [id] = expect_args(args, "toggle <id>")?;
            let id = parse_id(id)?;
            let task = store.toggle_completion(id).map_err(|err| err.to_string())?;
            println!(
                "task {} is now {}",
                task.id,
                if task.completed { "completed" } else { "open" }
            );
            render_all(store.load_all());
            Ok(())
        }
        "delete" => {
            let id = args
                .get(1)
                .ok_or_else(|| "usage: taskdeck delete <id> [--yes]".to_string())?;
            let id = parse_id(id)?;
            let skip_prompt = args.iter().any(|arg| arg == "--yes");
            if !skip_prompt && !confirm("Are you sure you want to delete this task? [y/N] ")? {
                println!("delete cancelled");
                return Ok(());
            }
            store.delete_task(id).map_err(|err| err.to_string())?;
            println!("deleted task {id}");
            render_all(store.load_all());
            Ok(())
        }
        "list" => {
            render_list(store.load_all());
            Ok(())
        }
        "board" => {
            render_board(store.load_all());
            Ok(())
        }
        "agenda" => {
            render_agenda(store.load_all());
            Ok(())
        }
        "stats" => {
            render_stats(store.load_all());
            Ok(())
        }
        other => Err(format!("unknown command `{other}`; run `taskdeck help`")),
    }
}

fn print_usage() {
    println!("taskdeck — priority and due-date task board");
    println!();
    println!("usage:");
    println!("  taskdeck add <text> <priority> <date>        create a task (priority A-D, date YYYY-MM-DD)");
    println!("  taskdeck edit <id> <text> <priority> <date>  edit text, priority and due date");
    println!("  taskdeck toggle <id>                         flip completion");
    println!("  taskdeck delete <id> [--yes]                 remove a task");
    println!("  taskdeck list                                sorted task list");
    println!("  taskdeck board                               tasks grouped by priority");
    println!("  taskdeck agenda                              tasks grouped by due date");
    println!("  taskdeck stats                               total/completed counters");
    println!("  taskdeck version                             print version");
    println!();
    println!("data directory: $TASKDECK_DATA_DIR, falling back to ~/.taskdeck");
}

fn data_dir() -> PathBuf {
    if let Ok(dir) = env::var("TASKDECK_DATA_DIR") {
        return PathBuf::from(dir);
    }
    if let Ok(home) = env::var("HOME") {
        return PathBuf::from(home).join(".taskdeck");
    }
    env::temp_dir().join("taskdeck")
}

fn init_logging_best_effort(data_dir: &std::path::Path) {
    let log_dir = data_dir.join("logs");
    if let Some(log_dir) = log_dir.to_str() {
        // A failed logging bootstrap must not block task operations.
        if let Err(message) =
            taskdeck_core::init_logging(taskdeck_core::default_log_level(), log_dir)
        {
            eprintln!("warning: logging disabled: {message}");
        }
    }
}

fn expect_args<'a, const N: usize>(
    args: &'a [String],
    usage: &str,
) -> Result<[&'a str; N], String> {
    let values = &args[1..];
    if values.len() != N {
        return Err(format!("usage: taskdeck {usage}"));
    }
    let mut out = [""; N];
    for (slot, value) in out.iter_mut().zip(values) {
        *slot = value.as_str();
    }
    Ok(out)
}

fn parse_id(value: &str) -> Result<TaskId, String> {
    TaskId::parse_str(value).map_err(|_| format!("invalid task id `{value}`"))
}

fn confirm(prompt: &str) -> Result<bool, String> {
    print!("{prompt}");
    io::stdout()
        .flush()
        .map_err(|err| format!("failed to flush prompt: {err}"))?;
    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .map_err(|err| format!("failed to read confirmation: {err}"))?;
    let answer = answer.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}

fn render_all(tasks: &[Task]) {
    render_list(tasks);
    render_board(tasks);
    render_agenda(tasks);
    render_stats(tasks);
}

fn render_list(tasks: &[Task]) {
    println!();
    println!("== Tasks ==");
    let view = sorted_view(tasks);
    if view.is_empty() {
        println!("  No tasks yet. Add your first task to get started!");
        return;
    }
    for task in &view {
        let marker = if task.completed { "x" } else { " " };
        println!(
            "  [{marker}] {}  ({}, due {})  {}",
            task.text, task.priority, task.due_date, task.id
        );
    }
}

fn render_board(tasks: &[Task]) {
    println!();
    println!("== Priorities ==");
    for (tier, group) in priority_groups(tasks) {
        println!("  Priority {tier}:");
        if group.is_empty() {
            println!("    No tasks");
            continue;
        }
        for task in &group {
            println!("    {}  (due {})", task.text, task.due_date);
        }
    }
}

fn render_agenda(tasks: &[Task]) {
    println!();
    println!("== Due dates ==");
    let groups = due_date_groups(tasks);
    if groups.is_empty() {
        println!("  No upcoming tasks");
        return;
    }
    for (date, group) in &groups {
        println!("  {date}:");
        for task in group {
            println!("    {}  [{}]", task.text, task.priority);
        }
    }
}

fn render_stats(tasks: &[Task]) {
    let counters = stats(tasks);
    let noun = if counters.total == 1 { "task" } else { "tasks" };
    println!();
    println!(
        "{} {noun}, {} completed",
        counters.total, counters.completed
    );
}
