#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use pocketpay_core::WalletConfig;
use tracing_subscriber::EnvFilter;

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Global wallet configuration, set from command line
static WALLET_CONFIG: OnceLock<WalletConfig> = OnceLock::new();

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(default_data_dir)
}

/// Get the wallet configuration (set from command line or default)
pub fn get_wallet_config() -> WalletConfig {
    WALLET_CONFIG.get().cloned().unwrap_or_default()
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pocketpay")
}

/// PocketPay - mobile wallet front-end
#[derive(Parser, Debug)]
#[command(name = "pocketpay-desktop")]
#[command(about = "PocketPay - wallet front-end with motion and gesture widgets")]
struct Args {
    /// Data directory for storage (use different dirs for multiple instances)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Instance name (creates data dir: pocketpay-<name>)
    #[arg(short, long)]
    name: Option<String>,

    /// PIN accepted by the lock screen
    #[arg(long)]
    pin: Option<String>,

    /// Maximum card tilt in degrees
    #[arg(long)]
    max_tilt: Option<f64>,

    /// Email address the simulated sign-in always rejects
    #[arg(long)]
    reject_email: Option<String>,
}

impl Args {
    fn data_dir(&self) -> (PathBuf, String) {
        if let Some(dir) = &self.data_dir {
            let label = dir
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("custom")
                .to_string();
            (dir.clone(), label)
        } else if let Some(name) = &self.name {
            let base = dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(format!("pocketpay-{}", name));
            (base, name.clone())
        } else {
            (default_data_dir(), String::new())
        }
    }

    fn wallet_config(&self) -> WalletConfig {
        let mut config = WalletConfig::default();
        if let Some(pin) = &self.pin {
            config = config.with_pin(pin.clone());
        }
        if let Some(max_tilt) = self.max_tilt {
            config = config.with_max_tilt(max_tilt);
        }
        if let Some(email) = &self.reject_email {
            config = config.with_rejected_email(email.clone());
        }
        config
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let (data_dir, display_name) = args.data_dir();

    let config = args.wallet_config();
    if let Err(e) = config.validate() {
        tracing::error!("Invalid configuration: {}", e);
        std::process::exit(2);
    }

    let _ = DATA_DIR.set(data_dir.clone());
    let _ = WALLET_CONFIG.set(config);

    // Phone-shaped window
    let window_width = 420.0;
    let window_height = 860.0;

    let title = if !display_name.is_empty() {
        format!("PocketPay - {}", display_name)
    } else {
        "PocketPay".to_string()
    };

    tracing::info!("Starting '{}' with data dir: {:?}", display_name, data_dir);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
