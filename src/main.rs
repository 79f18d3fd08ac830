use chrono::Local;
use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use weekplan::application::init::init;
use weekplan::application::manage_config::ConfigService;
use weekplan::application::{
    export_week, import_week, list_weeks, EditWeekService, EntryTarget, ImportOptions,
};
use weekplan::cli::{
    format_quarter, format_stats, format_week, format_week_list, Cli, Commands, LineFilter,
};
use weekplan::domain::{Locale, WeekId, WeekReference};
use weekplan::error::WeekplanError;
use weekplan::infrastructure::{FileSystemRepository, WeekRepository};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Resolve an optional week argument against today's date
fn resolve_week(week: Option<&str>) -> Result<WeekId, WeekplanError> {
    WeekReference::parse(week.unwrap_or("this"))?.resolve(Local::now().date_naive())
}

fn read_stdin() -> Result<String, WeekplanError> {
    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;
    Ok(text)
}

fn parse_locale(value: &str) -> Result<Locale, WeekplanError> {
    Locale::from_str(value).map_err(WeekplanError::Config)
}

fn show_week(week: Option<&str>, filter: LineFilter) -> Result<(), WeekplanError> {
    let repo = FileSystemRepository::discover()?;
    let locale = repo.load_config()?.get_locale();
    let id = resolve_week(week)?;
    let week = EditWeekService::new(repo).load(id)?;
    print!("{}", format_week(&week, id, locale, filter));
    Ok(())
}

fn run(cli: Cli) -> Result<(), WeekplanError> {
    match cli.command {
        Some(Commands::Init { path, locale }) => init(&path, parse_locale(&locale)?),
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("locale = {}", config.locale);
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
                println!("Usage: weekplan config [--list | <key> [<value>]]");
                println!("Valid keys: locale, created");
                Ok(())
            }
        }
        Some(Commands::Show { week, incomplete }) => {
            let filter = if incomplete {
                LineFilter::Incomplete
            } else {
                LineFilter::All
            };
            show_week(week.as_deref(), filter)
        }
        Some(Commands::Set { target, text, week }) => {
            let repo = FileSystemRepository::discover()?;
            let id = resolve_week(week.as_deref())?;
            let target = EntryTarget::from_str(&target)?;

            let content = if text.is_empty() {
                let input = read_stdin()?;
                input.trim_end_matches(['\n', '\r']).to_string()
            } else {
                text.join(" ")
            };

            EditWeekService::new(repo).set_entry(id, target, &content)?;
            match target {
                EntryTarget::Focus => println!("Updated focus for {}", id),
                EntryTarget::Day(day_index) => {
                    println!("Updated {} of {}", id.dates()[day_index], id)
                }
            }
            Ok(())
        }
        Some(Commands::Stats { week }) => {
            let repo = FileSystemRepository::discover()?;
            let locale = repo.load_config()?.get_locale();
            let id = resolve_week(week.as_deref())?;
            let week = EditWeekService::new(repo).load(id)?;
            println!("{}", id);
            print!("{}", format_stats(&week, locale));
            Ok(())
        }
        Some(Commands::Quarter { week }) => {
            let repo = FileSystemRepository::discover()?;
            let locale = repo.load_config()?.get_locale();
            let id = resolve_week(week.as_deref())?;
            print!("{}", format_quarter(id, locale)?);
            Ok(())
        }
        Some(Commands::List { limit }) => {
            let repo = FileSystemRepository::discover()?;
            let weeks = list_weeks(&repo, limit)?;
            let output = format_week_list(&weeks);
            print!("{}", output);
            if weeks.is_empty() {
                println!();
            }
            Ok(())
        }
        Some(Commands::Export {
            week,
            output,
            stdout,
            locale,
        }) => {
            let repo = FileSystemRepository::discover()?;
            let locale = match locale {
                Some(value) => parse_locale(&value)?,
                None => repo.load_config()?.get_locale(),
            };
            let id = resolve_week(week.as_deref())?;
            let export = export_week(&repo, id, locale)?;

            if stdout {
                println!("{}", export.text);
            } else {
                let target = output.unwrap_or_else(|| PathBuf::from(&export.filename));
                let path = export.write_to(&target)?;
                println!("Exported {} to {}", id, path.display());
            }
            Ok(())
        }
        Some(Commands::Import { file, week, yes }) => {
            let repo = FileSystemRepository::discover()?;
            let locale = repo.load_config()?.get_locale();
            let id = resolve_week(week.as_deref())?;

            let text = match file.as_deref() {
                Some(path) if path != Path::new("-") => fs::read_to_string(path)?,
                _ => read_stdin()?,
            };

            import_week(
                &repo,
                &text,
                ImportOptions {
                    week: id,
                    locale,
                    yes,
                },
            )?;
            Ok(())
        }
        None => show_week(cli.week.as_deref(), LineFilter::All),
    }
}
