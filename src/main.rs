#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use tracing_subscriber::prelude::*;

fn init_logging() {
    if let Some(proj_dirs) = directories::ProjectDirs::from("com", "", "ideadash") {
        let log_dir = proj_dirs.data_dir().join("logs");
        let _ = std::fs::create_dir_all(&log_dir);

        let log_path = log_dir.join("ideadash.log");

        let file = match std::fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(&log_path)
        {
            Ok(file) => file,
            Err(e) => {
                eprintln!("Failed to open log file {}: {}", log_path.display(), e);
                return;
            }
        };

        // GUI framework (eframe, egui, glow) logs are captured via the
        // tracing-log bridge
        let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            tracing_subscriber::EnvFilter::new(
                "ideadash=info,eframe=info,egui=warn,glow=warn,glutin=warn,winit=warn",
            )
        });

        let subscriber = tracing_subscriber::registry().with(filter).with(
            tracing_subscriber::fmt::layer()
                .with_writer(move || file.try_clone().expect("Failed to clone file handle"))
                .with_ansi(false), // No ANSI colors in file
        );

        if tracing::subscriber::set_global_default(subscriber).is_err() {
            eprintln!("Failed to set tracing subscriber");
            return;
        }

        // Bridge log crate events to tracing (for eframe, egui, glow, etc.)
        // This must be done AFTER setting the tracing subscriber
        if let Err(e) = tracing_log::LogTracer::init() {
            eprintln!("Failed to initialize log-to-tracing bridge: {}", e);
        }

        tracing::info!("Logging initialized to: {:?}", log_path);
    }
}

fn setup_panic_handler() {
    // Catches panics even if normal logging hasn't been initialized yet
    std::panic::set_hook(Box::new(|panic_info| {
        let crash_msg = format!(
            "ideadash crashed!\n\
             Panic occurred at: {}\n\
             Details: {}\n\
             Backtrace:\n{:?}\n",
            panic_info
                .location()
                .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
                .unwrap_or_else(|| "unknown location".to_string()),
            panic_info
                .payload()
                .downcast_ref::<&str>()
                .copied()
                .or_else(|| panic_info
                    .payload()
                    .downcast_ref::<String>()
                    .map(|s| s.as_str()))
                .unwrap_or("unknown panic"),
            std::backtrace::Backtrace::force_capture()
        );

        if let Some(proj_dirs) = directories::ProjectDirs::from("com", "", "ideadash") {
            let log_dir = proj_dirs.data_dir().join("logs");
            let _ = std::fs::create_dir_all(&log_dir);
            let crash_log_path = log_dir.join("crash.log");

            if let Ok(mut file) = std::fs::OpenOptions::new()
                .append(true)
                .create(true)
                .open(&crash_log_path)
            {
                use std::io::Write;
                let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
                let _ = writeln!(file, "\n=== CRASH at {} ===\n{}", timestamp, crash_msg);
            }

            eprintln!("\n{}", crash_msg);
            eprintln!("Crash log written to: {:?}", crash_log_path);
        } else {
            eprintln!("\n{}", crash_msg);
        }
    }));
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_panic_handler();
    init_logging();

    tracing::info!("ideadash starting");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "App Idea Generator",
        native_options,
        Box::new(|cc| Ok(Box::new(ideadash::IdeaDashApp::new(cc)))),
    )?;

    Ok(())
}
