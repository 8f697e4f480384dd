use clap::Parser;
use tracing_subscriber::EnvFilter;
use tradejournal::cli::commands::{Cli, Commands, FilterArgs};
use tradejournal::domain::entities::journal_entry::JournalEntryDraft;
use tradejournal::domain::entities::trade::{Trade, TradeDraft};
use tradejournal::domain::values::breakdown::Dimension;
use tradejournal::domain::values::time_window::TimeWindow;
use tradejournal::domain::values::trade_filter::TradeFilter;
use tradejournal::TradeJournal;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let db_path = std::env::var("TRADEJOURNAL_DB").unwrap_or_else(|_| "./tradejournal.db".into());

    let journal = match TradeJournal::new(&db_path) {
        Ok(journal) => journal,
        Err(e) => {
            eprintln!("Error initializing trade journal: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(&journal, cli.command) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_command(journal: &TradeJournal, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Add { json } => {
            let draft: TradeDraft = serde_json::from_str(&json)?;
            let trade = journal.trade_add(draft)?;
            println!("{}", serde_json::to_string_pretty(&trade)?);
        }
        Commands::Update { json } => {
            let trade: Trade = serde_json::from_str(&json)?;
            let trade = journal.trade_update(trade)?;
            println!("{}", serde_json::to_string_pretty(&trade)?);
        }
        Commands::Close {
            id,
            result,
            exit_price,
        } => {
            let trade = journal.trade_close(&id, result, exit_price)?;
            println!("{}", serde_json::to_string_pretty(&trade)?);
        }
        Commands::Remove { id } => {
            let trade = journal.trade_remove(&id)?;
            println!("Trade {} ({}) removed", trade.id, trade.instrument);
        }
        Commands::Show { id } => {
            let trade = journal.trade_get(&id)?;
            println!("{}", serde_json::to_string_pretty(&trade)?);
        }
        Commands::Trades { filter, limit } => {
            let filter = parse_filter(&filter)?;
            let trades = journal.trade_list(&filter, Some(limit))?;
            println!("{}", serde_json::to_string_pretty(&trades)?);
        }
        Commands::Stats { window } => {
            let window: TimeWindow = window.parse().map_err(|e: String| e)?;
            let report = journal.stats(window)?;
            println!("{}", serde_json::to_string_pretty(&*report)?);
        }
        Commands::Breakdown { dimension, window } => {
            let dimension: Dimension = dimension.parse().map_err(|e: String| e)?;
            let window: TimeWindow = window.parse().map_err(|e: String| e)?;
            let groups = journal.breakdown(dimension, window)?;
            println!("{}", serde_json::to_string_pretty(&groups)?);
        }
        Commands::Insights { window } => {
            let window: TimeWindow = window.parse().map_err(|e: String| e)?;
            let insights = journal.insights(window)?;
            println!("{}", serde_json::to_string_pretty(&insights)?);
        }
        Commands::Journal { json } => {
            let draft: JournalEntryDraft = serde_json::from_str(&json)?;
            let entry = journal.journal_submit(&draft)?;
            println!("{}", serde_json::to_string_pretty(&entry)?);
        }
        Commands::Export { filter } => {
            let filter = parse_filter(&filter)?;
            let trades = journal.trade_list(&filter, None)?;
            println!("{}", serde_json::to_string_pretty(&trades)?);
        }
    }
    Ok(())
}

fn parse_filter(args: &FilterArgs) -> Result<TradeFilter, String> {
    Ok(TradeFilter {
        search: args.search.clone(),
        instrument: args.instrument.parse()?,
        emotion: args.emotion.parse()?,
        result: args.result.parse()?,
        window: args.window.as_deref().map(str::parse::<TimeWindow>).transpose()?,
    })
}
