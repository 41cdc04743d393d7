use clap::Parser;
use valoruf::cli::{
    handle_completions, handle_config_init, handle_fetch, Cli, Commands, ConfigCommands, FetchArgs,
};
use valoruf::query::QueryMode;

async fn run_fetch(mode: QueryMode, args: &FetchArgs) -> Result<(), Box<dyn std::error::Error>> {
    let output = handle_fetch(mode, args).await?;
    println!("{}", output);
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Value(args) => {
            run_fetch(QueryMode::Single { date: args.date }, &args.fetch).await
        }
        Commands::Range(args) => {
            run_fetch(
                QueryMode::Range {
                    start: args.start,
                    end: args.end,
                },
                &args.fetch,
            )
            .await
        }
        Commands::Today(args) => run_fetch(QueryMode::Today, &args).await,
        Commands::LastWeek(args) => run_fetch(QueryMode::LastWeek, &args).await,
        Commands::Cached(args) => run_fetch(QueryMode::CachedAll, &args).await,
        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::Init(args) => handle_config_init(&args),
        },
        Commands::Completions(args) => {
            handle_completions(&args);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
