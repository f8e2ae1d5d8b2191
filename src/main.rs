use clap::Parser;
use notedesk::application::{list_notes, ConfigService, InitService, NoteFilter};
use notedesk::cli::{
    format_category_list, format_note_detail, format_note_list, format_statistics, Cli, Commands,
};
use notedesk::domain::NoteId;
use notedesk::error::NoteError;
use notedesk::infrastructure::Workspace;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = init_tracing() {
        eprintln!("Warning: could not initialize logging: {}", e);
    }

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_tracing() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
}

fn parse_id(raw: &str) -> Result<NoteId, NoteError> {
    raw.parse()
}

fn run(cli: Cli) -> Result<(), NoteError> {
    match cli.command {
        Commands::Init { path } => {
            InitService::execute(&path)?;
            println!("Initialized notedesk workspace at {}", path.display());
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(Workspace::discover()?);

            if list {
                let config = service.list()?;
                println!("default_category = {}", config.default_category);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: notedesk config [--list | <key> [<value>]]");
                println!("Valid keys: default_category, created");
                Ok(())
            }
        }
        command => run_note_command(command),
    }
}

fn run_note_command(command: Commands) -> Result<(), NoteError> {
    let workspace = Workspace::discover()?;
    let repo = workspace.open_repository()?;

    match command {
        Commands::Add {
            title,
            content,
            category,
        } => {
            let category = match category {
                Some(c) => c,
                None => workspace.load_config()?.default_category,
            };
            let note = repo.create(&title, &content, Some(&category))?;
            repo.flush()?;
            println!("{}", note.id);
        }
        Commands::List {
            category,
            favorites,
            limit,
        } => {
            let filter = match (category, favorites) {
                (Some(c), _) => NoteFilter::Category(c),
                (None, true) => NoteFilter::Favorites,
                (None, false) => NoteFilter::All,
            };
            print!("{}", format_note_list(&list_notes(&repo, &filter, limit)?));
        }
        Commands::Search { query } => {
            let notes = list_notes(&repo, &NoteFilter::Search(query), None)?;
            print!("{}", format_note_list(&notes));
        }
        Commands::Show { id } => {
            let id = parse_id(&id)?;
            let note = repo.get(id)?.ok_or(NoteError::NotFound(id))?;
            print!("{}", format_note_detail(&note));
        }
        Commands::Edit {
            id,
            title,
            content,
            category,
        } => {
            let id = parse_id(&id)?;
            if !repo.update(id, &title, &content, category.as_deref())? {
                return Err(NoteError::NotFound(id));
            }
            repo.flush()?;
            println!("Updated {}", id);
        }
        Commands::Fav { id } => {
            let id = parse_id(&id)?;
            let favorite = repo.toggle_favorite(id)?;
            repo.flush()?;
            if favorite {
                println!("Marked {} as favorite", id);
            } else {
                println!("Unmarked {} as favorite", id);
            }
        }
        Commands::Rm { id } => {
            let id = parse_id(&id)?;
            if !repo.delete(id)? {
                return Err(NoteError::NotFound(id));
            }
            repo.flush()?;
            println!("Deleted {}", id);
        }
        Commands::Stats => {
            print!("{}", format_statistics(&repo.statistics()?));
        }
        Commands::Categories => {
            print!("{}", format_category_list(&repo.categories()?));
        }
        Commands::Init { .. } | Commands::Config { .. } => {}
    }

    Ok(())
}
