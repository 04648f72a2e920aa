// Domguard CLI
// Replays scripted DOM events through a binding table and reports which
// handlers fire

use std::path::PathBuf;

use clap::Parser;

use domguard_core::{BindingConfig, BindingSet, EventScript, NativeEvent};

/// Replay DOM events against modifier-guarded bindings
#[derive(Parser, Debug)]
#[command(name = "domguard")]
#[command(author = "domguard contributors")]
#[command(version)]
#[command(about = "Replay DOM events against modifier-guarded bindings", long_about = None)]
struct Args {
    /// TOML binding table (defaults to the user config dir)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// TOML event script to replay
    #[arg(short, long, value_name = "SCRIPT")]
    events: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Validate the binding table and exit
    #[arg(long)]
    check_config: bool,
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn resolve_config_path(args: &Args) -> Result<PathBuf, Box<dyn std::error::Error>> {
    args.config
        .clone()
        .or_else(BindingConfig::default_path)
        .ok_or_else(|| "--config is required when no config directory is available".into())
}

/// One line per event: what was delivered, what fired, what side effects ran
fn describe(index: usize, event: &NativeEvent, fired: &[String]) -> String {
    let fired = if fired.is_empty() {
        "-".to_string()
    } else {
        fired.join(", ")
    };
    format!(
        "#{:<3} {:<12} fired: {}  (stop={}, prevent={})",
        index,
        event.event_type(),
        fired,
        event.propagation_stop_count(),
        event.default_prevent_count()
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config_path = resolve_config_path(&args)?;
    let config = BindingConfig::from_file(&config_path)?;
    log::info!(
        "loaded {} bindings from {}",
        config.len(),
        config_path.display()
    );

    if args.check_config {
        println!("Configuration is valid ({} bindings)", config.len());
        return Ok(());
    }

    let script_path = args
        .events
        .clone()
        .ok_or("--events is required unless --check-config is given")?;
    let script = EventScript::from_file(&script_path)?;

    let mut bindings = BindingSet::from_config(&config);
    for (index, event) in script.events().iter().enumerate() {
        let fired = bindings.dispatch(event);
        println!("{}", describe(index, event, &fired));
    }

    Ok(())
}
