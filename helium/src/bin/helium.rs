use anyhow::{bail, Result};
use clap::{arg, command, value_parser};
use helium_core::Manager;
use std::path::PathBuf;
use x11rb_display_server::{X11rbDisplayServer, X11rbWindowHandle};

fn main() -> Result<()> {
    let matches = command!("helium")
        .about("A minimal floating window manager")
        .args(&[
            arg!(-c --config <PATH> "Reads the configuration from PATH instead of the XDG config directory.")
                .required(false)
                .value_parser(value_parser!(PathBuf)),
            arg!(--check "Checks the configuration and exits."),
            arg!(-v --verbose "Prints each check as it runs, and the loaded configuration."),
        ])
        .get_matches();

    let config_path = matches.get_one::<PathBuf>("config");
    let verbose = matches.get_flag("verbose");

    if matches.get_flag("check") {
        return check(config_path, verbose);
    }

    helium::utils::log::setup_logging();
    tracing::info!("helium booted!");

    let config = helium::load(config_path.map(PathBuf::as_path));
    let findings = config.check(false);
    if !findings.is_empty() {
        tracing::warn!("The configuration has {} problem(s)", findings.len());
    }

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let _rt_guard = rt.enter();

    let manager = Manager::<X11rbWindowHandle, helium::Config, X11rbDisplayServer>::new(config)?;
    let exit_status = rt.block_on(manager.start_event_loop());
    match &exit_status {
        Ok(()) => tracing::info!("Completed"),
        Err(err) => tracing::error!("Completed with error: {}", err),
    }
    Ok(exit_status?)
}

fn check(config_path: Option<&PathBuf>, verbose: bool) -> Result<()> {
    println!("\x1b[0;94m::\x1b[0m Loading configuration . . .");
    let config = match config_path {
        Some(path) => helium::load_from_file(path)?,
        None => helium::load_from_xdg()?,
    };
    println!("\x1b[0;92m    -> Configuration loaded OK \x1b[0m");
    if verbose {
        dbg!(&config);
    }
    println!("\x1b[0;94m::\x1b[0m Checking configuration . . .");
    let findings = config.check(verbose);
    if !findings.is_empty() {
        bail!("{} problem(s) found", findings.len());
    }
    println!("\x1b[0;92m    -> Configuration is valid \x1b[0m");
    Ok(())
}
