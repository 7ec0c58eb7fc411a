//! CLI host for the roster list engine.
//!
//! Pipeline: load store -> gather input -> policy gate -> modify -> sync.
//! All user input is collected before the engine runs; the engine's prompts
//! replay it from a script, so no operation ever blocks mid-pipeline.

use async_trait::async_trait;
use clap::{Parser, Subcommand};
use roster_core::error::{RosterError, RosterResult};
use roster_core::types::{ItemId, ListItem, RosterEntry};
use roster_engine::build_manager;
use roster_provider::{
    AllowAll, ErrorSink, JsonFileStore, LogSink, MemoryRoster, MutationPolicy, NameRules,
    NullRemote, QuotaPolicy, RecordingSink, RemoteStore, ScriptedPrompts,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "roster", version, about = "Ordered list keeper with a pluggable sync pipeline")]
struct Cli {
    /// Path of the JSON store.
    #[arg(short, long, env = "ROSTER_FILE", default_value = "roster.json")]
    file: PathBuf,

    /// Cap on the number of items; unlimited when omitted.
    #[arg(long, env = "ROSTER_LIMIT")]
    limit: Option<usize>,

    /// Run the full pipeline but write nothing.
    #[arg(long, default_value_t = false)]
    dry_run: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Append a new item.
    Add {
        /// Name for the new item; prompts on stdin when omitted.
        name: Option<String>,
    },
    /// Rename an item by id.
    Rename {
        id: String,

        /// Replacement name; prompts on stdin when omitted.
        name: Option<String>,
    },
    /// Delete an item by id.
    Remove {
        id: String,

        /// Skip the confirmation prompt.
        #[arg(short, long, default_value_t = false)]
        yes: bool,
    },
    /// Move the item at one position to another (1-based).
    Move { from: usize, to: usize },
    /// Print the list.
    Show {
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

/// What to run once the pipeline is wired.
enum Plan {
    Add,
    Rename { target: RosterEntry },
    Remove { target: RosterEntry },
    Reorder { list: Vec<RosterEntry> },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // 1. Load the stored list.
    let store = JsonFileStore::<RosterEntry>::new(&cli.file);
    let entries = store.load().await?;
    tracing::info!(items = entries.len(), file = %cli.file.display(), "loaded roster");

    // 2. Gather user input up front; the engine's prompts replay it.
    let (plan, answers): (Plan, Vec<String>) = match &cli.command {
        Commands::Add { name } => {
            let name = match name {
                Some(n) => n.clone(),
                None => read_line("New name: ")?,
            };
            (Plan::Add, vec![name])
        }
        Commands::Rename { id, name } => {
            let target = find_or_stub(&entries, id);
            let name = match name {
                Some(n) => n.clone(),
                None => read_line(&format!("New name for '{}': ", target.name()))?,
            };
            (Plan::Rename { target }, vec![name])
        }
        Commands::Remove { id, yes } => {
            let target = find_or_stub(&entries, id);
            if !*yes {
                let answer = read_line(&format!("Remove '{}'? [y/N] ", target.name()))?;
                if !matches!(answer.trim(), "y" | "Y" | "yes") {
                    println!("Aborted.");
                    return Ok(());
                }
            }
            (Plan::Remove { target }, Vec::new())
        }
        Commands::Move { from, to } => {
            let list = reorder(&entries, *from, *to)?;
            (Plan::Reorder { list }, Vec::new())
        }
        Commands::Show { json } => {
            print_roster(&entries, *json)?;
            return Ok(());
        }
    };

    // 3. Wire the pipeline.
    let policy: Arc<dyn MutationPolicy> = match cli.limit {
        Some(limit) => {
            let quota = QuotaPolicy::new(limit);
            quota.set_count(entries.len());
            Arc::new(quota)
        }
        None => Arc::new(AllowAll),
    };

    let recorder = Arc::new(RecordingSink::new());
    let sink = Arc::new(TeeSink {
        log: LogSink,
        record: recorder.clone(),
    });

    let remote = Arc::new(if cli.dry_run {
        tracing::info!("dry_run mode: uploads are discarded");
        CliRemote::Null(NullRemote::new())
    } else {
        CliRemote::File(JsonFileStore::new(&cli.file))
    });

    let manager = build_manager(
        remote,
        Arc::new(MemoryRoster::from_entries(entries)),
        policy,
        Arc::new(ScriptedPrompts::with_answers(answers)),
        Arc::new(NameRules::new()),
        sink,
    );

    // 4. Run the operation.
    match plan {
        Plan::Add => manager.add_new().await,
        Plan::Rename { target } => manager.edit(&target).await,
        Plan::Remove { target } => manager.delete(&target).await,
        Plan::Reorder { list } => manager.upload_reordered_list(&list).await,
    }

    // 5. Surface the outcome. Failures already went through the log sink.
    if !recorder.is_empty() {
        std::process::exit(1);
    }
    if cli.dry_run {
        println!("ok (dry run, {} unchanged)", cli.file.display());
    } else {
        print_roster(&store.load().await?, false)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Host adapters
// ---------------------------------------------------------------------------

/// Remote selection: the real file store, or a discard for `--dry-run`.
enum CliRemote {
    File(JsonFileStore<RosterEntry>),
    Null(NullRemote<RosterEntry>),
}

#[async_trait]
impl RemoteStore for CliRemote {
    type Item = RosterEntry;

    async fn upload(&self, list: &[RosterEntry], removed: Option<&RosterEntry>) -> RosterResult<()> {
        match self {
            Self::File(store) => store.upload(list, removed).await,
            Self::Null(null) => null.upload(list, removed).await,
        }
    }
}

/// Logs every failure for the operator and records it for the exit code.
struct TeeSink {
    log: LogSink,
    record: Arc<RecordingSink>,
}

impl ErrorSink for TeeSink {
    fn report(&self, error: &RosterError) {
        self.log.report(error);
        self.record.report(error);
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_line(prompt: &str) -> std::io::Result<String> {
    use std::io::Write;

    print!("{prompt}");
    std::io::stdout().flush()?;

    let mut buf = String::new();
    std::io::stdin().read_line(&mut buf)?;
    Ok(buf.trim_end_matches(['\r', '\n']).to_string())
}

/// Unknown ids still go through the engine so the miss surfaces through the
/// standard error sink rather than a bespoke CLI message.
fn find_or_stub(entries: &[RosterEntry], id: &str) -> RosterEntry {
    entries
        .iter()
        .find(|e| e.id().as_str() == id)
        .cloned()
        .unwrap_or_else(|| RosterEntry::new(ItemId::from(id), id))
}

fn reorder(
    entries: &[RosterEntry],
    from: usize,
    to: usize,
) -> Result<Vec<RosterEntry>, Box<dyn std::error::Error>> {
    let len = entries.len();
    if from == 0 || from > len || to == 0 || to > len {
        return Err(format!("positions are 1..={len}, got {from} and {to}").into());
    }
    let mut list = entries.to_vec();
    let item = list.remove(from - 1);
    list.insert(to - 1, item);
    Ok(list)
}

fn print_roster(entries: &[RosterEntry], json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(entries)?);
    } else if entries.is_empty() {
        println!("(empty roster)");
    } else {
        for (i, e) in entries.iter().enumerate() {
            println!("{:>3}. {}  [{}]", i + 1, e.name(), e.id());
        }
    }
    Ok(())
}
