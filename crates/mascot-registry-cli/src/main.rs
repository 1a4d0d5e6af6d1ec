use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;
use tracing::debug;

use mascot_registry_core::config::Config;
use mascot_registry_core::{Registry, RegistryError, Result, TriggerKey};

mod args;
mod logging;
use args::{Cli, Commands, ConfigAction, Shell};

/// Registry-related global flags.
struct SourceOverrides {
    file: Option<PathBuf>,
    no_builtin: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet);

    let base_dir = resolve_base_dir(cli.base_dir);
    let overrides = SourceOverrides {
        file: cli.file,
        no_builtin: cli.no_builtin,
    };

    let result = match cli.command {
        Some(Commands::Taxonomy { json }) => {
            load_registry(&base_dir, &overrides).and_then(|r| handle_taxonomy(&r, json))
        }
        Some(Commands::Lookup {
            ring_type,
            material,
            gemstone,
            json,
        }) => load_registry(&base_dir, &overrides)
            .and_then(|r| handle_lookup(&r, &ring_type, &material, &gemstone, json)),
        Some(Commands::Triggers { json }) => {
            load_registry(&base_dir, &overrides).and_then(|r| handle_triggers(&r, json))
        }
        Some(Commands::Validate { path }) => {
            load_config(&base_dir, &overrides).and_then(|config| {
                let path = path.or(config.registry.file);
                handle_validate(path.as_deref(), config.registry.include_builtin)
            })
        }
        Some(Commands::Export) => load_registry(&base_dir, &overrides).and_then(|r| {
            print!("{}", r.to_definition().to_toml_string()?);
            Ok(())
        }),
        Some(Commands::Config { action }) => handle_config(action, &base_dir),
        Some(Commands::Completions { shell }) => {
            handle_completions(shell);
            Ok(())
        }
        None => {
            Cli::command().print_help().ok();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let shell = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    };
    generate(shell, &mut cmd, "mascot-registry", &mut io::stdout());
}

fn resolve_base_dir(cli_base: Option<PathBuf>) -> PathBuf {
    if let Some(base) = cli_base {
        return base;
    }

    if let Ok(base) = std::env::var("MASCOT_REGISTRY_BASE") {
        return PathBuf::from(base);
    }

    dirs::home_dir()
        .map(|h| h.join(".mascot-registry"))
        .unwrap_or_else(|| PathBuf::from(".mascot-registry"))
}

/// Config file with the registry flags applied on top.
fn load_config(base_dir: &Path, overrides: &SourceOverrides) -> Result<Config> {
    let mut config = Config::load(base_dir)?;
    if let Some(file) = &overrides.file {
        config.registry.file = Some(file.clone());
    }
    if overrides.no_builtin {
        config.registry.include_builtin = false;
    }
    Ok(config)
}

fn load_registry(base_dir: &Path, overrides: &SourceOverrides) -> Result<Registry> {
    let config = load_config(base_dir, overrides)?;
    if let Some(path) = &config.registry.file {
        debug!(
            path = %path.display(),
            include_builtin = config.registry.include_builtin,
            "loading registry definition"
        );
    }
    Registry::from_config(&config)
}

fn handle_taxonomy(registry: &Registry, json: bool) -> Result<()> {
    let taxonomy = registry.taxonomy();
    if json {
        println!("{}", serde_json::to_string_pretty(taxonomy)?);
        return Ok(());
    }

    println!();
    println!(
        "{} {} / {}",
        "Category:".bold(),
        taxonomy.category,
        taxonomy.subcategory
    );

    print_section(
        "Ring types",
        taxonomy
            .ring_types
            .iter()
            .map(|r| (r.as_str(), r.label()))
            .collect(),
    );
    print_section(
        "Materials",
        taxonomy
            .materials
            .iter()
            .map(|m| (m.as_str(), m.label()))
            .collect(),
    );
    print_section(
        "Gemstones",
        taxonomy
            .gemstones
            .iter()
            .map(|g| (g.as_str(), g.label()))
            .collect(),
    );
    println!();

    Ok(())
}

fn print_section(title: &str, items: Vec<(&str, String)>) {
    println!();
    println!("{} ({}):", title.bold(), items.len());
    for (tag, label) in items {
        println!("  {:<18} {}", tag.cyan(), label.dimmed());
    }
}

fn handle_lookup(
    registry: &Registry,
    ring_type: &str,
    material: &str,
    gemstone: &str,
    json: bool,
) -> Result<()> {
    let entry = match TriggerKey::parse(ring_type, material, gemstone) {
        Ok(key) => registry.lookup(&key),
        Err(e) => {
            debug!("combination is outside the taxonomy: {}", e);
            None
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&entry)?);
        return Ok(());
    }

    let combination = format!("({}, {}, {})", ring_type, material, gemstone);
    match entry {
        Some(entry) => {
            println!();
            println!("{} {}", "Trigger:".green(), combination);
            println!("  {:<16} {}", "mascot_trigger".cyan(), entry.mascot_trigger);
            println!("  {:<16} {}", "overlay".cyan(), entry.overlay);
            println!("  {:<16} {}", "sound_effect".cyan(), entry.sound_effect);
            println!();
        }
        None => {
            println!(
                "{} {} (default presentation)",
                "No trigger:".yellow(),
                combination
            );
        }
    }

    Ok(())
}

fn handle_triggers(registry: &Registry, json: bool) -> Result<()> {
    if json {
        let definition = registry.to_definition();
        println!("{}", serde_json::to_string_pretty(&definition.triggers)?);
        return Ok(());
    }

    if registry.is_empty() {
        println!("No triggers registered.");
        return Ok(());
    }

    println!();
    for (key, entry) in registry.triggers() {
        println!("{}", key.to_string().cyan());
        println!(
            "  {} / {} / {}",
            entry.mascot_trigger, entry.overlay, entry.sound_effect
        );
    }
    println!();
    println!("{} trigger(s)", registry.len());

    Ok(())
}

fn handle_validate(path: Option<&Path>, include_builtin: bool) -> Result<()> {
    let (registry, origin) = match path {
        Some(path) => (
            Registry::load(path, include_builtin)?,
            path.display().to_string(),
        ),
        None => (Registry::builtin(), "builtin".to_string()),
    };

    let taxonomy = registry.taxonomy();
    println!(
        "{} {} ({} triggers; {} ring types, {} materials, {} gemstones)",
        "Valid:".green(),
        origin,
        registry.len(),
        taxonomy.ring_types.len(),
        taxonomy.materials.len(),
        taxonomy.gemstones.len()
    );

    Ok(())
}

fn handle_config(action: ConfigAction, base_dir: &Path) -> Result<()> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load(base_dir)?;
            match config.get(&key) {
                Some(value) => {
                    println!("{}", value);
                }
                None => {
                    return Err(RegistryError::ConfigKeyNotFound { key });
                }
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load(base_dir)?;
            config.set(&key, &value)?;
            config.save(base_dir)?;
            let stored = config.get(&key).unwrap_or(value);
            println!("{} {} = {}", "Set:".green(), key, stored);
        }
        ConfigAction::List => {
            let config = Config::load(base_dir)?;
            println!();
            for (key, value) in config.list() {
                println!("{} = {}", key.cyan(), value);
            }
            println!();
        }
        ConfigAction::Path => {
            let path = Config::path(base_dir);
            println!("{}", path.display());
        }
        ConfigAction::Init => {
            let path = Config::init(base_dir)?;
            println!("{} {}", "Initialized:".green(), path.display());
        }
    }

    Ok(())
}
