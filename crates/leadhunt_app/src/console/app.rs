use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;

use anyhow::Context;
use hunt_logging::{hunt_info, hunt_warn};
use leadhunt_core::Msg;
use leadhunt_engine::{ControllerSettings, JobController, ReqwestLeadService, ServiceSettings};
use tokio::sync::mpsc;

use super::commands::{self, Command, HELP};
use super::{logging, render};

const DEFAULT_ROLE: &str = "Founder";
const DEFAULT_INDUSTRY: &str = "Fintech";

pub fn run() -> anyhow::Result<()> {
    logging::initialize(Path::new(logging::LOG_FILE));

    // Single-threaded event loop: every state change happens on this thread.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build tokio runtime")?;
    runtime.block_on(run_console())
}

async fn run_console() -> anyhow::Result<()> {
    let service_settings = ServiceSettings::from_env();
    hunt_info!("Using lead service at {}", service_settings.base_url);
    let service = ReqwestLeadService::new(service_settings).context("failed to build HTTP client")?;

    let export_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let settings = ControllerSettings {
        export_dir,
        ..ControllerSettings::default()
    };
    let mut controller = JobController::new(Arc::new(service), settings);
    controller.dispatch(Msg::RoleChanged(DEFAULT_ROLE.to_string()));
    controller.dispatch(Msg::IndustryChanged(DEFAULT_INDUSTRY.to_string()));
    controller.mount();

    println!("{HELP}");
    render::render(&controller.view());
    controller.consume_dirty();

    let mut input_rx = spawn_stdin_reader();
    loop {
        tokio::select! {
            line = input_rx.recv() => {
                let Some(line) = line else {
                    hunt_info!("stdin closed; exiting");
                    break;
                };
                match commands::parse(&line) {
                    Ok(Some(Command::Dispatch(msgs))) => {
                        for msg in msgs {
                            controller.dispatch(msg);
                        }
                    }
                    Ok(Some(Command::Show)) => render::render(&controller.view()),
                    Ok(Some(Command::Help)) => println!("{HELP}"),
                    Ok(Some(Command::Quit)) => break,
                    Ok(None) => {}
                    Err(err) => println!("{err}"),
                }
            }
            _ = controller.step() => {}
        }

        if controller.consume_dirty() {
            render::render(&controller.view());
        }
    }

    // Dropping the controller cancels any running hunt's timers.
    drop(controller);
    Ok(())
}

/// Reads stdin lines on a dedicated thread and forwards them to the event loop.
fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    hunt_warn!("Failed to read stdin: {}", err);
                    break;
                }
            }
        }
    });
    rx
}
