use chrono::{Local, TimeZone};
use clap::{Parser, Subcommand};
use colored::Colorize;
use eyre::Result;
use std::path::PathBuf;
use taskpad::{ConnectivityMonitor, Session, Store, Task, ViewFilter, connectivity};

#[derive(Parser)]
#[command(name = "taskpad")]
#[command(about = "Offline-first task list persisted to a single local JSON slot")]
#[command(version)]
struct Cli {
    /// Path to the task store file (default: per-user data directory)
    #[arg(short, long)]
    store_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new task
    Add {
        /// Task text; surrounding whitespace is trimmed
        text: String,
    },

    /// List tasks
    List {
        /// Which subset to show
        #[arg(long, value_enum, default_value_t = ViewFilter::All)]
        filter: ViewFilter,
    },

    /// Flip a task between active and completed
    Toggle { id: i64 },

    /// Delete a task
    Delete { id: i64 },

    /// Remove every completed task
    ClearCompleted,

    /// Show collection counts and progress
    Stats,

    /// Show current network connectivity
    Status,
}

fn main() -> Result<()> {
    // Setup tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let store = match cli.store_path {
        Some(path) => Store::new(path),
        None => Store::new(Store::default_path()?),
    };
    let mut session = Session::start(store);

    match cli.command {
        Commands::Add { text } => match session.add(&text) {
            Some(task) => {
                println!("Added {} {}", format!("#{}", task.id).as_str().bold(), task.text)
            }
            None => println!("Nothing to add: text was empty"),
        },
        Commands::List { filter } => {
            println!("Tasks [{}] {}", filter, connectivity_badge());
            let view = session.tasks().filtered_view(filter);
            if view.is_empty() {
                println!("  No tasks in {} view", filter);
            }
            for task in view {
                print_task(task);
            }
        }
        Commands::Toggle { id } => {
            if session.toggle(id) {
                // toggle succeeded, so the task is present
                if let Some(task) = session.tasks().get(id) {
                    let state = if task.completed { "completed" } else { "active" };
                    println!("Task #{} is now {}", id, state);
                }
            } else {
                println!("No task with id {}", id);
            }
        }
        Commands::Delete { id } => {
            if session.delete(id) {
                println!("Deleted task #{}", id);
            } else {
                println!("No task with id {}", id);
            }
        }
        Commands::ClearCompleted => {
            let removed = session.clear_completed();
            println!("Removed {} completed task(s)", removed);
        }
        Commands::Stats => {
            let tasks = session.tasks();
            println!("Total:     {}", tasks.total());
            println!("Active:    {}", tasks.active_count());
            println!("Completed: {}", tasks.completed_count());
            println!("Progress:  {}%", tasks.progress_percent());
        }
        Commands::Status => {
            println!("Network: {}", connectivity_badge());
        }
    }

    Ok(())
}

fn connectivity_badge() -> colored::ColoredString {
    let monitor = ConnectivityMonitor::new(connectivity::platform_online());
    if monitor.is_online() {
        "online".green()
    } else {
        "offline".red()
    }
}

fn print_task(task: &Task) {
    let date = Local
        .timestamp_millis_opt(task.created_at)
        .single()
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();

    if task.completed {
        println!(
            "  [x] {} {} {}",
            format!("#{}", task.id).as_str().dimmed(),
            task.text.as_str().strikethrough().dimmed(),
            date.as_str().dimmed()
        );
    } else {
        println!(
            "  [ ] {} {} {}",
            format!("#{}", task.id).as_str().bold(),
            task.text,
            date.as_str().dimmed()
        );
    }
}
