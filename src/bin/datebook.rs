use std::path::PathBuf;

use clap::{Parser, Subcommand};

use datebook::assembler::Field;
use datebook::persistence::Persistence;
use datebook::storage::FileStorage;
use datebook::{Session, TaskId, TaskStore};

/// A task list with quick date and time entry
#[derive(Parser, Debug)]
#[command(name = "datebook", about = "A task list with quick date and time entry")]
struct Cli {
    /// Folder the task list is stored in
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every task, in order
    List,
    /// Add a task
    Add {
        /// `04` (day of this month), `0405` (day and month) or `040525`
        #[arg(long, default_value = "")]
        date: String,
        /// `0830`, or `08` for a full hour
        #[arg(long, default_value = "")]
        time: String,
        text: Vec<String>,
    },
    /// Change some fields of a task
    Edit {
        id: TaskId,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        time: Option<String>,
        #[arg(long)]
        text: Option<String>,
    },
    /// Mark a task as done, or not done anymore
    Done { id: TaskId },
    /// Delete a task
    Delete { id: TaskId },
    /// Delete every task
    Clear {
        /// Confirm that every task should be deleted
        #[arg(long)]
        yes: bool,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let folder = cli.data_dir.unwrap_or_else(datebook::config::data_folder);
    log::debug!("Using data folder {:?}", folder);

    let persistence = Persistence::new(FileStorage::new(&folder));
    let mut session = Session::new(TaskStore::load(persistence));

    match cli.command.unwrap_or(Command::List) {
        Command::List => {},
        Command::Add { date, time, text } => {
            // Fields are typed one after the other, like in an input row. A full date submits right away.
            let mut created = session.type_new(Field::Text, &text.join(" "));
            if created.is_none() {
                created = session.type_new(Field::Time, &time);
            }
            if created.is_none() {
                created = session.type_new(Field::Date, &date);
            }
            if created.is_none() {
                created = session.submit_new();
            }
            match created {
                Some(id) => println!("Added task {}", id),
                None => println!("Nothing to add"),
            }
        },
        Command::Edit { id, date, time, text } => {
            if session.start_editing(id) == false {
                println!("No task {}", id);
                return;
            }
            let mut saved = false;
            for (field, value) in vec![(Field::Text, text), (Field::Time, time), (Field::Date, date)] {
                if let Some(value) = value {
                    saved = session.type_edit(field, &value);
                    if saved {
                        break;
                    }
                }
            }
            if saved == false && session.save_edit() == false {
                println!("A task cannot be left completely empty");
                return;
            }
        },
        Command::Done { id } => session.toggle_done(id),
        Command::Delete { id } => session.delete(id),
        Command::Clear { yes } => {
            if yes == false {
                println!("This deletes every task. Run again with --yes to confirm.");
                return;
            }
            session.clear_all();
        },
    }

    datebook::utils::print_task_list(session.store().tasks());
}
