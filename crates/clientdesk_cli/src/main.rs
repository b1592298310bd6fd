//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `clientdesk_core` wiring.
//! - Keep output deterministic for quick local sanity checks.

use clientdesk_core::{
    core_version, default_log_level, init_logging, ContactDirectory, FixtureContactRepository,
    FixtureNewsRepository, FixtureTriggerRepository, NewsDesk, TriggerBoard,
};
use std::error::Error;

fn main() {
    if let Err(err) = run() {
        eprintln!("clientdesk: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    // Logging is opt-in for the smoke binary; CLIENTDESK_LOG_DIR enables it.
    if let Ok(log_dir) = std::env::var("CLIENTDESK_LOG_DIR") {
        let level =
            std::env::var("CLIENTDESK_LOG").unwrap_or_else(|_| default_log_level().to_string());
        init_logging(&level, &log_dir)?;
    }

    println!("clientdesk_core version={}", core_version());

    let contacts = ContactDirectory::new(FixtureContactRepository::try_new()?)?;
    println!(
        "contacts rows={} companies={}",
        contacts.rows().len(),
        contacts.company_options().len()
    );

    let news = NewsDesk::new(FixtureNewsRepository::try_new()?)?;
    println!("news rows={}", news.rows().len());

    let triggers = TriggerBoard::new(FixtureTriggerRepository::try_new()?)?;
    println!("triggers rows={}", triggers.rows().len());

    Ok(())
}
