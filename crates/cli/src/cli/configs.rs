//! Commands producing or transforming configurations.

use super::io::{emit, read_input, read_json, report_warnings, to_json};
use super::{ExtractArgs, GenerateArgs, MergeArgs, RenderArgs, ValidateArgs};
use cf_core::codegen::{crewai, env_template, langgraph, script_artifact, Artifact};
use cf_core::config::load_settings;
use cf_core::extract::{analyze_completeness, extract_crew};
use cf_core::llm::{GenerateRequest, LlmExtractor};
use cf_core::merge::{apply_graph_update, apply_update};
use cf_core::validate::{validate_crew, validate_graph};
use cf_core::Outcome;
use cf_protocol::config_models::{CrewConfig, CrewDraft, Framework, GraphConfig, GraphDraft};
use color_eyre::eyre::{bail, eyre, WrapErr};
use color_eyre::Result;
use colored::Colorize;
use std::path::Path;
use tracing::info;

/// A validated configuration of either variant.
enum Validated {
    Crew(CrewConfig),
    Graph(GraphConfig),
}

impl Validated {
    fn to_json(&self) -> Result<String> {
        match self {
            Validated::Crew(config) => to_json(config),
            Validated::Graph(config) => to_json(config),
        }
    }

    fn render(&self) -> String {
        match self {
            Validated::Crew(config) => crewai::render(config),
            Validated::Graph(config) => langgraph::render(config),
        }
    }

    fn used_tools(&self) -> Vec<String> {
        match self {
            Validated::Crew(config) => config.used_tools(),
            Validated::Graph(config) => config.used_tools(),
        }
    }
}

/// Read and validate a draft of the framework's variant.
fn load_validated(path: Option<&Path>, framework: Framework) -> Result<Outcome<Validated>> {
    Ok(match framework {
        Framework::CrewAi => validate_crew(read_json::<CrewDraft>(path)?).map(Validated::Crew),
        Framework::LangGraph => {
            validate_graph(read_json::<GraphDraft>(path)?).map(Validated::Graph)
        }
    })
}

pub fn extract(args: ExtractArgs) -> Result<()> {
    let text = read_input(args.input.as_deref())?;

    if args.check {
        let report = analyze_completeness(&text);
        return emit(&to_json(&report)?, args.output.as_deref());
    }

    let outcome = extract_crew(&text);
    report_warnings(&outcome.warnings);
    emit(&to_json(&outcome.config)?, args.output.as_deref())
}

pub async fn generate(root: &Path, args: GenerateArgs) -> Result<()> {
    let text = read_input(args.input.as_deref())?;
    if text.trim().is_empty() {
        bail!("Nothing to generate from: the input is empty");
    }

    let settings = load_settings(root).await?;
    let provider = args.provider.unwrap_or_else(|| settings.preferred_provider());
    let extractor = LlmExtractor::from_settings(&settings)?;
    info!(provider = %provider, framework = %args.framework, "Generating configuration");

    let json = match args.framework {
        Framework::CrewAi => {
            let mut request = GenerateRequest::new(text, provider);
            if let Some(model) = args.model {
                request = request.with_model(model);
            }
            if let Some(path) = args.existing.as_deref() {
                let existing = validate_crew(read_json::<CrewDraft>(Some(path))?);
                report_warnings(&existing.warnings);
                request = request.with_existing(existing.config, args.scope);
            }
            let outcome = extractor.generate(&request).await;
            report_warnings(&outcome.warnings);
            to_json(&outcome.config)?
        }
        Framework::LangGraph => {
            if args.existing.is_some() {
                bail!("--existing is only supported with --framework crewai");
            }
            let outcome = extractor
                .generate_graph(&text, provider, args.model.as_deref())
                .await;
            report_warnings(&outcome.warnings);
            to_json(&outcome.config)?
        }
    };

    emit(&json, args.output.as_deref())
}

pub fn validate(args: ValidateArgs) -> Result<()> {
    let outcome = load_validated(args.input.as_deref(), args.framework)?;
    report_warnings(&outcome.warnings);

    if args.strict && outcome.has_warnings() {
        return Err(eyre!(
            "{} repair(s) were needed; the configuration is not valid as written",
            outcome.warnings.len()
        ));
    }
    emit(&outcome.config.to_json()?, args.output.as_deref())
}

fn write_artifact(dir: &Path, artifact: &Artifact) -> Result<()> {
    let path = dir.join(&artifact.file_name);
    std::fs::write(&path, &artifact.content)
        .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
    eprintln!("{} {}", "wrote".green().bold(), path.display());
    Ok(())
}

pub fn render(args: RenderArgs) -> Result<()> {
    let outcome = load_validated(args.input.as_deref(), args.framework)?;
    report_warnings(&outcome.warnings);

    let code = outcome.config.render();
    let Some(dir) = args.out_dir else {
        return emit(&code, None);
    };

    std::fs::create_dir_all(&dir)
        .wrap_err_with(|| format!("Failed to create {}", dir.display()))?;
    write_artifact(&dir, &script_artifact(args.framework, code))?;
    if let Some(env) = env_template(args.framework, &outcome.config.used_tools()) {
        write_artifact(&dir, &env)?;
    }
    Ok(())
}

pub fn merge(args: MergeArgs) -> Result<()> {
    let current = load_validated(Some(&args.current), args.framework)?;
    let incoming = load_validated(Some(&args.incoming), args.framework)?;
    report_warnings(&current.warnings);
    report_warnings(&incoming.warnings);

    let merged = match (current.config, incoming.config) {
        (Validated::Crew(current), Validated::Crew(incoming)) => {
            Validated::Crew(apply_update(current, incoming, args.mode))
        }
        (Validated::Graph(current), Validated::Graph(incoming)) => {
            Validated::Graph(apply_graph_update(current, incoming, args.mode))
        }
        _ => bail!("Both configurations must use the same framework"),
    };

    emit(&merged.to_json()?, args.output.as_deref())
}
