//! vinoteca-gui - Wine Tasting Notebook
//!
//! A desktop wine tasting journal built with Iced, centered on an
//! interactive radar chart for recording taste characteristics.

mod app;
mod message;
mod services;
mod state;
mod theme;
mod views;
mod widgets;

use app::VinotecaGui;
use clap::Parser;
use fs2::FileExt;
use iced::{window, Size};
use std::fs::{self, File};
use std::path::PathBuf;
use std::process;

/// vinoteca-gui - Wine Tasting Notebook
#[derive(Parser, Debug)]
#[command(name = "vinoteca-gui", version, about)]
struct Args {
    /// Override the records directory
    #[arg(short, long)]
    records_dir: Option<String>,
}

/// Get the lock file path
fn lock_file_path() -> PathBuf {
    directories::ProjectDirs::from("", "", "vinoteca")
        .map(|d| d.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("vinoteca-gui.lock")
}

/// Try to acquire single-instance lock
/// Returns the lock file handle if successful (must be kept alive)
fn acquire_instance_lock() -> Option<File> {
    let lock_path = lock_file_path();

    // Ensure parent directory exists
    if let Some(parent) = lock_path.parent() {
        let _ = fs::create_dir_all(parent);
    }

    let file = match File::create(&lock_path) {
        Ok(f) => f,
        Err(e) => {
            log::error!("Failed to create lock file: {}", e);
            return None;
        }
    };

    // Exclusive, non-blocking
    match file.try_lock_exclusive() {
        Ok(()) => {
            log::debug!("Acquired instance lock at {:?}", lock_path);
            Some(file)
        }
        Err(_) => {
            log::info!("Another instance of vinoteca-gui is already running");
            None
        }
    }
}

fn main() -> iced::Result {
    // Initialize logging with wgpu noise filtered out
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("wgpu_hal", log::LevelFilter::Error)
        .filter_module("wgpu_core", log::LevelFilter::Error)
        .init();

    let args = Args::parse();

    if let Some(dir) = &args.records_dir {
        // The store reads this on startup
        std::env::set_var("VINOTECA_RECORDS_DIR", dir);
    }

    log::info!("Starting vinoteca-gui");

    // Check for existing instance
    let _lock = match acquire_instance_lock() {
        Some(lock) => lock,
        None => {
            eprintln!("vinoteca-gui is already running. Only one instance allowed.");
            process::exit(1);
        }
    };

    // Note: _lock is kept alive for the duration of the app
    iced::application(VinotecaGui::title, VinotecaGui::update, VinotecaGui::view)
        .subscription(VinotecaGui::subscription)
        .theme(VinotecaGui::theme)
        .window(window::Settings {
            size: Size::new(1100.0, 760.0),
            min_size: Some(Size::new(860.0, 580.0)),
            ..Default::default()
        })
        .antialiasing(true)
        .run_with(VinotecaGui::new)
}
