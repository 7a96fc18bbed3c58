mod paths;
mod settings;

use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use herowars_lib::error::{LoadError, TableError};
use herowars_lib::hero;
use herowars_lib::render::{RenderOptions, render_page};
use herowars_lib::table::TableView;
use log::{debug, error, info};
use simplelog::{Config, LevelFilter, WriteLogger};
use thiserror::Error;

use settings::{Settings, SettingsError};

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("failed to load heroes: {0}")]
    Load(#[from] LoadError),
    #[error("invalid table settings: {0}")]
    Table(#[from] TableError),
    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Start logging to the cache directory, keeping earlier runs' logs.
fn init_logging() {
    let rotation = paths::rotate_logs();
    let Some(path) = paths::log_file() else {
        eprintln!("Could not determine cache directory, logging disabled");
        return;
    };
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    match File::create(&path) {
        Ok(file) => {
            if let Err(e) = WriteLogger::init(LevelFilter::Debug, Config::default(), file) {
                eprintln!("Failed to initialize logger: {}", e);
                return;
            }
            if let Some(archived) = &rotation.archived {
                debug!("Archived previous log to {}", archived.display());
            }
            if rotation.pruned > 0 {
                debug!("Pruned {} old log(s)", rotation.pruned);
            }
        }
        Err(e) => eprintln!("Failed to create log file {}: {}", path.display(), e),
    }
}

/// Render the hero page and return where it was written.
fn run() -> Result<PathBuf, AppError> {
    let settings = Settings::load()?;
    let records = settings.load_records()?;

    let mut view = TableView::new(&records, hero::hero_columns());
    settings.apply(&mut view)?;

    let options = RenderOptions {
        title: settings.title.clone(),
        ..RenderOptions::default()
    };
    let html = render_page(&view, &options);

    if let Some(dir) = settings.output.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|source| AppError::Write {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    fs::write(&settings.output, html).map_err(|source| AppError::Write {
        path: settings.output.clone(),
        source,
    })?;

    info!(
        "Rendered {} of {} heroes to {}",
        view.rows().len(),
        records.len(),
        settings.output.display()
    );
    Ok(settings.output)
}

fn main() -> ExitCode {
    init_logging();

    match run() {
        Ok(path) => {
            println!("Wrote {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
