use std::path::Path;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io::{self, CONFIG_FILE};
use crate::io::prefs::{self, DARK_MODE_KEY, FilePrefStore, MemoryPrefStore, PrefStore};
use crate::ops::TaskList;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let dir = config_io::config_dir(cli.config_dir.as_deref());

    match cli.command {
        // No subcommand → launch TUI
        None => cmd_tui(&dir, cli.no_persist),
        Some(Commands::Theme(args)) => cmd_theme(&dir, args, cli.no_persist, json),
        Some(Commands::Paths) => cmd_paths(&dir, json),
    }
}

/// Open the preference store for this run. With `--no-persist` the stored
/// value is still read, but changes stay in memory.
fn open_store(dir: &Path, no_persist: bool) -> Box<dyn PrefStore> {
    let file = FilePrefStore::in_dir(dir);
    if no_persist {
        let dark = prefs::load_dark_mode(&file);
        Box::new(MemoryPrefStore::with(
            DARK_MODE_KEY,
            if dark { "true" } else { "false" },
        ))
    } else {
        Box::new(file)
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_tui(dir: &Path, no_persist: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = config_io::read_config(dir)?;
    let list = TaskList::new(open_store(dir, no_persist));
    crate::tui::run(list, config.ui)
}

fn cmd_theme(
    dir: &Path,
    args: ThemeArgs,
    no_persist: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut list = TaskList::new(open_store(dir, no_persist));
    match args.mode {
        None => {}
        Some(ThemeChoice::Dark) => list.set_dark_mode(true)?,
        Some(ThemeChoice::Light) => list.set_dark_mode(false)?,
        Some(ThemeChoice::Toggle) => list.toggle_dark_mode()?,
    }

    let dark = list.dark_mode();
    if json {
        let out = ThemeJson {
            mode: mode_name(dark),
            dark_mode: dark,
            persisted: !no_persist,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", mode_name(dark));
    }
    Ok(())
}

fn cmd_paths(dir: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config_file = dir.join(CONFIG_FILE);
    let prefs_file = dir.join(prefs::PREFS_FILE);
    if json {
        let out = PathsJson {
            config_dir: dir.display().to_string(),
            config_file: config_file.display().to_string(),
            prefs_file: prefs_file.display().to_string(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("config dir:  {}", dir.display());
        println!("config file: {}", config_file.display());
        println!("prefs file:  {}", prefs_file.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn no_persist_reads_but_does_not_write() {
        let tmp = TempDir::new().unwrap();
        let mut file = FilePrefStore::in_dir(tmp.path());
        prefs::store_dark_mode(&mut file, true).unwrap();

        let mut store = open_store(tmp.path(), true);
        assert!(prefs::load_dark_mode(store.as_ref()));
        prefs::store_dark_mode(store.as_mut(), false).unwrap();

        assert!(prefs::load_dark_mode(&FilePrefStore::in_dir(tmp.path())));
    }

    #[test]
    fn persistent_store_writes_file() {
        let tmp = TempDir::new().unwrap();
        let mut store = open_store(tmp.path(), false);
        prefs::store_dark_mode(store.as_mut(), true).unwrap();
        assert!(prefs::load_dark_mode(&FilePrefStore::in_dir(tmp.path())));
    }
}
