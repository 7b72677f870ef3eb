//! CLI definitions and entry point

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use todobar::app;
use todobar::config::ConfigLayer;
use todobar::credentials::KeyringStore;
use todobar::paths;

/// todobar - pending Todoist tasks for the menu bar
#[derive(Parser, Debug)]
#[command(
    name = "todobar",
    version,
    about = "List pending Todoist tasks as a SwiftBar/xbar plugin",
    long_about = "List pending Todoist tasks as a SwiftBar/xbar plugin.\n\n\
                  Options are read from flags, TODOBAR_* environment variables \
                  and the config file, in that order."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Config file (defaults to the user config directory)
    #[arg(long, env = "TODOBAR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Project to list tasks for [default: Inbox]
    #[arg(long, env = "TODOBAR_PROJECT")]
    pub project: Option<String>,

    /// Project ID (overrides --project when positive)
    #[arg(long, env = "TODOBAR_PROJECT_ID", allow_negative_numbers = true)]
    pub project_id: Option<i64>,

    /// Todoist API token (read from the keychain when unset)
    #[arg(long, env = "TODOBAR_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Todoist REST API base URL
    #[arg(long, env = "TODOBAR_API_URL")]
    pub api_url: Option<String>,

    /// Menu bar title template
    #[arg(long, env = "TODOBAR_TITLE")]
    pub title: Option<String>,

    /// Title color
    #[arg(long, env = "TODOBAR_TITLE_COLOR")]
    pub title_color: Option<String>,

    /// Menu bar title template when no tasks are pending
    #[arg(long, env = "TODOBAR_EMPTY_TITLE")]
    pub empty_title: Option<String>,

    /// Title color when no tasks are pending
    #[arg(long, env = "TODOBAR_EMPTY_TITLE_COLOR")]
    pub empty_title_color: Option<String>,

    /// Template file for output
    #[arg(long, env = "TODOBAR_OUTPUT_TEMPLATE")]
    pub output_template: Option<PathBuf>,

    /// Character to substitute for pipes in task names
    #[arg(long, env = "TODOBAR_PIPE_SUB")]
    pub pipe_sub: Option<String>,
}

impl Cli {
    fn overrides(&self) -> ConfigLayer {
        ConfigLayer {
            project: self.project.clone(),
            project_id: self.project_id,
            api_token: self.api_token.clone(),
            api_url: self.api_url.clone(),
            title: self.title.clone(),
            title_color: self.title_color.clone(),
            empty_title: self.empty_title.clone(),
            empty_title_color: self.empty_title_color.clone(),
            output_template: self.output_template.clone(),
            pipe_sub: self.pipe_sub.clone(),
        }
    }
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let config_path = cli.config.clone().unwrap_or_else(paths::global_config);
    let file_layer = ConfigLayer::load(&config_path)?;
    let settings = cli.overrides().merge(file_layer).into_settings();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    app::print_tasks(&settings, &KeyringStore::new(), &mut out).context("failed to list tasks")
}
