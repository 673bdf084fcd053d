use std::path::PathBuf;

use clap::{Parser, Subcommand};
use student_roster::config::{DATA_FILE_ENV, DEFAULT_DATA_FILE, RosterConfig};
use student_roster::io::csv_file::CsvFileBackend;
use student_roster::io::excel_write::{self, EXPORT_MIME_TYPE};
use student_roster::model::StudentRecord;
use student_roster::render::{bar_chart, format_table};
use student_roster::store::StudentStore;
use student_roster::{Result, RosterError, logging};

const MIN_AGE: i64 = 5;
const MAX_AGE: i64 = 20;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = logging::init().and_then(|()| run(cli)) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = RosterConfig::default().with_data_file(cli.data_file);
    match cli.command {
        Command::Add(args) => execute_add(&config, args),
        Command::Search(args) => execute_search(&config, args),
        Command::Edit(args) => execute_edit(&config, args),
        Command::Delete { name } => execute_delete(&config, &name),
        Command::List { json } => execute_list(&config, json),
        Command::Stats { json } => execute_stats(&config, json),
        Command::Export { output } => {
            let config = match output {
                Some(path) => config.with_export_file(path),
                None => config,
            };
            execute_export(&config)
        }
    }
}

fn execute_add(config: &RosterConfig, args: AddArgs) -> Result<()> {
    if args.class.is_empty() || args.name.is_empty() {
        return Err(RosterError::InvalidInput(
            "Please enter valid Name and Class.".into(),
        ));
    }

    let mut store = config.open_store()?;
    store.add(&args.class, args.age, &args.name)?;
    println!("Student '{}' added.", args.name);
    Ok(())
}

fn execute_search(config: &RosterConfig, args: SearchArgs) -> Result<()> {
    if args.keyword.is_empty() {
        return Err(RosterError::InvalidInput("Please enter a search term.".into()));
    }

    let store = config.open_store()?;
    let results = store.search(&args.keyword);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else if results.is_empty() {
        println!("No students found.");
    } else {
        print!("{}", format_table(&results));
    }
    Ok(())
}

fn execute_edit(config: &RosterConfig, args: EditArgs) -> Result<()> {
    let mut store = config.open_store()?;
    let Some(current) = store.find(&args.old_name).cloned() else {
        return Err(RosterError::NotFound("Update failed.".into()));
    };

    let class = args.class.unwrap_or(current.class);
    let name = args.name.unwrap_or(current.name);
    let age = args.age.unwrap_or(current.age);
    if class.is_empty() || name.is_empty() {
        return Err(RosterError::InvalidInput(
            "Please enter valid Name and Class.".into(),
        ));
    }

    if store.update(&args.old_name, &class, age, &name)? {
        println!("Student '{}' updated.", args.old_name);
        Ok(())
    } else {
        Err(RosterError::NotFound("Update failed.".into()))
    }
}

fn execute_delete(config: &RosterConfig, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(RosterError::InvalidInput("Please enter a name.".into()));
    }

    let mut store = config.open_store()?;
    if store.delete(name)? {
        println!("Student '{name}' deleted.");
        Ok(())
    } else {
        Err(RosterError::NotFound(format!(
            "No student named '{name}' found."
        )))
    }
}

fn execute_list(config: &RosterConfig, json: bool) -> Result<()> {
    let store = config.open_store()?;
    if json {
        println!("{}", serde_json::to_string_pretty(store.list_all())?);
    } else if store.is_empty() {
        println!("No student data available.");
    } else {
        let rows: Vec<&StudentRecord> = store.list_all().iter().collect();
        print!("{}", format_table(&rows));
    }
    Ok(())
}

fn execute_stats(config: &RosterConfig, json: bool) -> Result<()> {
    let store = config.open_store()?;
    if json {
        let summary = serde_json::json!({
            "students_per_class": store.count_by_class(),
            "average_age_per_class": store.average_age_by_class(),
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    if store.is_empty() {
        println!("No data to show chart.");
        return Ok(());
    }

    print_charts(&store);
    Ok(())
}

fn print_charts(store: &StudentStore<CsvFileBackend>) {
    let counts = store
        .count_by_class()
        .into_iter()
        .map(|(class, count)| (class, count as f64));
    println!("{}", bar_chart("Students Per Class", counts, 0));
    print!(
        "{}",
        bar_chart("Average Age Per Class", store.average_age_by_class(), 1)
    );
}

fn execute_export(config: &RosterConfig) -> Result<()> {
    let store = config.open_store()?;
    if store.is_empty() {
        println!("No data to export.");
        return Ok(());
    }

    excel_write::export_to_file(store.list_all(), &config.export_file)?;
    println!(
        "Exported {} students to {} ({EXPORT_MIME_TYPE}).",
        store.len(),
        config.export_file.display()
    );
    Ok(())
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Manage a roster of students stored in a CSV file."
)]
struct Cli {
    /// CSV file holding the student table.
    #[arg(long, global = true, env = DATA_FILE_ENV, default_value = DEFAULT_DATA_FILE)]
    data_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add a student.
    Add(AddArgs),
    /// Find students whose name or class contains a keyword.
    Search(SearchArgs),
    /// Edit the first student with the given name.
    Edit(EditArgs),
    /// Delete every student with exactly the given name.
    Delete {
        /// Exact, case-sensitive name to remove.
        name: String,
    },
    /// Show every student.
    List {
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Chart students per class and average age per class.
    Stats {
        /// Print JSON instead of charts.
        #[arg(long)]
        json: bool,
    },
    /// Export the table to an Excel workbook.
    Export {
        /// Destination file. Defaults to `students.xlsx`.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(clap::Args)]
struct AddArgs {
    /// Class the student belongs to.
    #[arg(long)]
    class: String,

    /// Age of the student.
    #[arg(long, value_parser = clap::value_parser!(i64).range(MIN_AGE..=MAX_AGE))]
    age: i64,

    /// Name of the student.
    #[arg(long)]
    name: String,
}

#[derive(clap::Args)]
struct SearchArgs {
    /// Text to look for in names and classes, ignoring case.
    keyword: String,

    /// Print JSON instead of a table.
    #[arg(long)]
    json: bool,
}

#[derive(clap::Args)]
struct EditArgs {
    /// Current name of the student to edit.
    old_name: String,

    /// New class. Defaults to the current one.
    #[arg(long)]
    class: Option<String>,

    /// New age. Defaults to the current one.
    #[arg(long, value_parser = clap::value_parser!(i64).range(MIN_AGE..=MAX_AGE))]
    age: Option<i64>,

    /// New name. Defaults to the current one.
    #[arg(long)]
    name: Option<String>,
}
