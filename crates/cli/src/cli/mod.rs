//! Command definitions and dispatch.
//!
//! - `extract`, `generate`: text to configuration
//! - `validate`, `render`, `merge`: configuration files
//! - `tools`, `check-tool`, `models`, `template`: catalogs and examples

use cf_core::llm::ProviderKind;
use cf_core::merge::UpdateMode;
use cf_protocol::config_models::{Framework, UpdateScope};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod catalog;
mod configs;
mod io;

/// Generate CrewAI and LangGraph agent configurations
#[derive(Parser, Debug)]
#[command(name = "crewforge")]
#[command(about = "Generate CrewAI and LangGraph agent configurations")]
#[command(version)]
pub struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root holding `.crewforge/` and `.env`
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract a crew from `Agent:` / `Task:` blocks
    Extract(ExtractArgs),
    /// Generate a configuration with a chat model
    Generate(GenerateArgs),
    /// Validate and repair a JSON configuration
    Validate(ValidateArgs),
    /// Render a JSON configuration as Python source
    Render(RenderArgs),
    /// Combine two JSON configurations
    Merge(MergeArgs),
    /// List the tool catalog
    Tools(ToolsArgs),
    /// Check parameters for one tool
    CheckTool(CheckToolArgs),
    /// List models offered by OpenRouter
    Models(ModelsArgs),
    /// Print the prompt template, suggestions or scenarios
    Template(TemplateArgs),
}

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Text file to read; stdin when omitted or `-`
    pub input: Option<PathBuf>,

    /// Report which details the text is missing instead of extracting
    #[arg(long)]
    pub check: bool,

    /// Write the configuration here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Text file to read; stdin when omitted or `-`
    pub input: Option<PathBuf>,

    #[arg(short, long, default_value = "crewai")]
    pub framework: Framework,

    /// Defaults to OpenRouter when its key is set, else OpenAI
    #[arg(short, long)]
    pub provider: Option<ProviderKind>,

    /// Overrides the provider's default model
    #[arg(short, long)]
    pub model: Option<String>,

    /// Current configuration to refine (crewai only)
    #[arg(long)]
    pub existing: Option<PathBuf>,

    /// Part of the existing configuration to regenerate
    #[arg(long, default_value = "all")]
    pub scope: UpdateScope,

    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// JSON file to read; stdin when omitted or `-`
    pub input: Option<PathBuf>,

    #[arg(short, long, default_value = "crewai")]
    pub framework: Framework,

    /// Fail when any repair was needed
    #[arg(long)]
    pub strict: bool,

    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// JSON file to read; stdin when omitted or `-`
    pub input: Option<PathBuf>,

    #[arg(short, long, default_value = "crewai")]
    pub framework: Framework,

    /// Write the script and `.env.template` into this directory
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct MergeArgs {
    /// Current configuration
    pub current: PathBuf,

    /// Configuration to combine into it
    pub incoming: PathBuf,

    #[arg(long, default_value = "merge")]
    pub mode: UpdateMode,

    #[arg(short, long, default_value = "crewai")]
    pub framework: Framework,

    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ToolsArgs {
    /// Only these tools
    pub ids: Vec<String>,

    /// Print environment variables each tool needs
    #[arg(long)]
    pub env: bool,

    /// Print the catalog as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct CheckToolArgs {
    pub tool: String,

    /// Parameter as `key=value`; values are read as JSON when they parse
    #[arg(short, long = "param", value_name = "KEY=VALUE")]
    pub params: Vec<String>,
}

#[derive(Args, Debug)]
pub struct ModelsArgs {
    /// Only free-tier models
    #[arg(long)]
    pub free: bool,

    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct TemplateArgs {
    /// Print complete example prompts
    #[arg(long, conflicts_with = "scenarios")]
    pub suggestions: bool,

    /// Print example scenarios for `generate`
    #[arg(long)]
    pub scenarios: bool,
}

/// Run the CLI command
pub async fn run(cli: Cli) -> color_eyre::Result<()> {
    let env_file = cli.root.join(".env");
    if env_file.exists() {
        let _ = dotenvy::from_path(&env_file);
    }

    match cli.command {
        Some(Commands::Extract(args)) => configs::extract(args),
        Some(Commands::Generate(args)) => configs::generate(&cli.root, args).await,
        Some(Commands::Validate(args)) => configs::validate(args),
        Some(Commands::Render(args)) => configs::render(args),
        Some(Commands::Merge(args)) => configs::merge(args),
        Some(Commands::Tools(args)) => catalog::tools(args),
        Some(Commands::CheckTool(args)) => catalog::check_tool(args),
        Some(Commands::Models(args)) => catalog::models(args).await,
        Some(Commands::Template(args)) => catalog::template(args),
        None => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            cmd.print_help()?;
            println!();
            Ok(())
        }
    }
}
