//! CLI entry point for media-panel-builder
//!
//! Provides a command-line interface for listing element ids, validating
//! configurations, rendering assembled panels and watching a configuration
//! file for changes.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use colored::*;
use media_panel_builder::{
    config::{self, apply_overrides, ConfigResolver, PartialConfiguration},
    core::{Document, ElementId, ElementRegistry, NodeId, Tag},
    ui::{components::standard_registry, render, ConfigWatcher, Controller, WatchStatus},
};
use std::{
    cell::RefCell,
    path::{Path, PathBuf},
    rc::Rc,
    time::Duration,
};

#[derive(Parser)]
#[command(name = "media-panel-builder")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log filter, e.g. `info` or `media_panel_builder=debug`
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Debug, Default)]
struct ConfigArgs {
    /// JSON configuration file (omitted fields use defaults)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override a field, e.g. `addSeekBar=false` or `controlPanelElements=mute,fullscreen`
    #[arg(short = 's', long = "set", value_name = "KEY=VALUE")]
    overrides: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List every known element id
    Ids,

    /// Validate a configuration and print it fully resolved
    Check {
        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Assemble a panel into a scratch player and print it
    Render {
        #[command(flatten)]
        config: ConfigArgs,

        /// Emit HTML instead of an outline
        #[arg(long)]
        html: bool,

        /// Write the rendering to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write the default configuration to a file
    Init {
        /// Destination file
        #[arg(default_value = "panel.json")]
        path: PathBuf,

        /// Replace an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Re-render whenever a configuration file changes
    Watch {
        /// JSON configuration file to watch
        path: PathBuf,

        /// Overrides applied on top of every reload
        #[arg(short = 's', long = "set", value_name = "KEY=VALUE")]
        overrides: Vec<String>,
    },

    /// Open a GTK4 window showing the assembled panel
    #[cfg(feature = "gui")]
    Preview {
        #[command(flatten)]
        config: ConfigArgs,
    },
}

fn setup_logger(log_level: &str) {
    let mut log_builder = env_logger::Builder::new();

    log_builder
        .format_timestamp_millis()
        .parse_filters(log_level);

    // notify's inotify backend is chatty at debug
    if log_level.eq_ignore_ascii_case("debug") {
        log_builder.filter_module("notify", log::LevelFilter::Info);
    }

    log_builder.init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logger(&cli.log_level);

    let registry = standard_registry()?;

    match cli.command {
        Commands::Ids => list_ids(registry),
        Commands::Check { config } => check_config(registry, &config)?,
        Commands::Render { config, html, output } => render_panel(registry, &config, html, output)?,
        Commands::Init { path, force } => init_config(&path, force)?,
        Commands::Watch { path, overrides } => watch_config(registry, path, overrides)?,
        #[cfg(feature = "gui")]
        Commands::Preview { config } => preview_panel(registry, &config)?,
    }

    Ok(())
}

/// Reads the configuration file (if any) and layers `--set` overrides on top
fn load_partial(args: &ConfigArgs) -> anyhow::Result<PartialConfiguration> {
    let base = match &args.config {
        Some(path) => config::load_config_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => PartialConfiguration::new(),
    };

    Ok(apply_overrides(base, &args.overrides)?)
}

/// Builds a scratch player: `body > div > video`
fn scratch_player() -> anyhow::Result<(Document, NodeId, NodeId)> {
    let mut document = Document::new();
    let container = document.create_element(Tag::Div);
    let video = document.create_video_element();
    document.append_child(document.body(), container)?;
    document.append_child(container, video)?;
    Ok((document, container, video))
}

/// List every id with its placement and class name
fn list_ids(registry: &ElementRegistry) {
    println!("{}", "Element ids\n".bold());

    for id in ElementId::ALL {
        let status = if registry.contains(id) {
            "✓".green()
        } else {
            "✗".red()
        };
        println!(
            "{} {:<18} {:<14} {}",
            status,
            id.as_str().cyan().bold(),
            id.placement().to_string(),
            id.class_name().dimmed()
        );
    }

    println!("\n{} {} registered", "✓".green(), registry.len());
}

/// Validate a configuration, exiting with status 1 if it is rejected
fn check_config(registry: &ElementRegistry, args: &ConfigArgs) -> anyhow::Result<()> {
    let partial = load_partial(args)?;

    match ConfigResolver::new(registry).resolve(&partial) {
        Ok(resolved) => {
            println!("{} {}", "✓".green().bold(), "Configuration is valid".bold());
            println!("{}", resolved.to_json_pretty()?);
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    }
}

/// Assemble into a scratch player and print or save the result
fn render_panel(
    registry: &ElementRegistry,
    args: &ConfigArgs,
    html: bool,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let partial = load_partial(args)?;
    let (document, container, video) = scratch_player()?;
    let document = Rc::new(RefCell::new(document));

    let _controller = Controller::new(Rc::clone(&document), container, video, registry, &partial)?;

    let document = document.borrow();
    let rendered = if html {
        render::render_html(&document, container)
    } else {
        render::render_outline(&document, container)
    };

    match output {
        Some(path) => {
            config::write_atomically(&path, &rendered)?;
            println!("{} Wrote {}", "✓".green(), path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

/// Write the defaults so users have something to edit
fn init_config(path: &Path, force: bool) -> anyhow::Result<()> {
    let expanded = config::expand_path(path)?;
    if expanded.exists() && !force {
        anyhow::bail!("{} already exists (use --force to replace it)", expanded.display());
    }

    config::save_config_file(&expanded, &config::Configuration::default())?;
    println!("{} Wrote default configuration to {}", "✓".green(), expanded.display());

    Ok(())
}

/// Keep a scratch player in sync with a configuration file
fn watch_config(registry: &ElementRegistry, path: PathBuf, overrides: Vec<String>) -> anyhow::Result<()> {
    let path = config::expand_path(&path)?;
    let args = ConfigArgs {
        config: Some(path.clone()),
        overrides,
    };

    let (document, container, video) = scratch_player()?;
    let document = Rc::new(RefCell::new(document));
    let controller = Controller::new(
        Rc::clone(&document),
        container,
        video,
        registry,
        &load_partial(&args)?,
    )?;
    print!("{}", render::render_outline(&document.borrow(), container));

    let watcher = ConfigWatcher::new(path.clone())
        .with_context(|| format!("Failed to watch {}", path.display()))?;
    println!("{} Watching {} (Ctrl+C to stop)", "→".cyan(), watcher.path().display());

    loop {
        match watcher.wait_for_change(Duration::from_secs(3600)) {
            WatchStatus::Changed => {}
            WatchStatus::TimedOut => continue,
            WatchStatus::Closed => anyhow::bail!("File watcher for {} shut down", path.display()),
        }

        // Keep the previous panel when the new file is rejected
        let result = load_partial(&args).and_then(|partial| Ok(controller.configure(&partial)?));
        match result {
            Ok(()) => {
                println!("\n{} Reloaded", "✓".green());
                print!("{}", render::render_outline(&document.borrow(), container));
            }
            Err(e) => println!("\n{} {:#}", "✗".red().bold(), e),
        }
    }
}

#[cfg(feature = "gui")]
fn preview_panel(registry: &ElementRegistry, args: &ConfigArgs) -> anyhow::Result<()> {
    let partial = load_partial(args)?;
    let (document, container, video) = scratch_player()?;
    let document = Rc::new(RefCell::new(document));

    let _controller = Controller::new(Rc::clone(&document), container, video, registry, &partial)?;

    let code = media_panel_builder::ui::preview::run_preview(
        &document.borrow(),
        container,
        "Media panel preview",
    );
    if code != glib::ExitCode::SUCCESS {
        anyhow::bail!("Preview exited with an error");
    }

    Ok(())
}
