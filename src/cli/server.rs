use anyhow::Result;
use console::style;

use super::theme::{print_info, print_success};
use super::ServerAction;
use crate::config::Config;
use crate::server::{find_debug_server, pick_port, start_debug_server, LastLaunchStore};

pub fn run_server(action: &ServerAction, config: &Config) -> Result<()> {
    let settings = &config.debug_server;

    match action {
        ServerAction::Locate => {
            let path = find_debug_server(settings)?;
            println!("{}", path.display());
        }
        ServerAction::Port => {
            let port = pick_port(settings)?;
            println!("{}", port);
        }
        ServerAction::Launch { port } => {
            let store = LastLaunchStore::default_location();
            let info = start_debug_server(settings, &store, *port)?;
            print_success(&format!(
                "Debug server started on {}:{} (pid {})",
                info.address,
                style(info.port).cyan(),
                info.pid
            ));
        }
        ServerAction::Last { json } => {
            let store = LastLaunchStore::default_location();
            match store.load()? {
                Some(info) if *json => println!("{}", serde_json::to_string_pretty(&info)?),
                Some(info) => {
                    println!("  Executable: {}", info.executable.display());
                    println!("  Address:    {}:{}", info.address, style(info.port).cyan());
                    println!("  PID:        {}", info.pid);
                    println!(
                        "  Started:    {}",
                        style(info.started_at.format("%Y-%m-%d %H:%M:%S")).dim()
                    );
                }
                None => print_info("No debug server has been launched yet."),
            }
        }
    }

    Ok(())
}
