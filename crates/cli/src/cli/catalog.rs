//! Commands that print catalogs and examples.

use super::io::to_json;
use super::{CheckToolArgs, ModelsArgs, TemplateArgs, ToolsArgs};
use cf_core::catalog::{self, EnvScope, ToolDescriptor};
use cf_core::llm::fetch_models;
use cf_core::templates::{example_scenarios, prompt_suggestions, prompt_template};
use color_eyre::eyre::{bail, eyre};
use color_eyre::Result;
use colored::Colorize;
use serde_json::{Map, Value};

fn selected_tools(ids: &[String]) -> Result<Vec<&'static ToolDescriptor>> {
    if ids.is_empty() {
        return Ok(catalog::list().iter().collect());
    }
    ids.iter()
        .map(|id| catalog::get(id).ok_or_else(|| eyre!("Unknown tool '{id}'")))
        .collect()
}

pub fn tools(args: ToolsArgs) -> Result<()> {
    let tools = selected_tools(&args.ids)?;

    if args.json {
        println!("{}", to_json(&tools)?);
        return Ok(());
    }

    if args.env {
        let requirements = if args.ids.is_empty() {
            catalog::env_requirements(EnvScope::All)
        } else {
            catalog::env_requirements(EnvScope::Many(&args.ids))
        };
        if requirements.is_empty() {
            println!("No environment variables required.");
        }
        for req in requirements {
            println!("{}  {}", req.env_var.cyan().bold(), req.description);
        }
        return Ok(());
    }

    let width = tools.iter().map(|t| t.id.len()).max().unwrap_or(0);
    for tool in tools {
        println!("{}  {}", format!("{:<width$}", tool.id).bold(), tool.description);
        for param in tool.parameters {
            let marker = if param.required { "*" } else { " " };
            let default = param
                .default
                .map(|d| format!(" (default {d})"))
                .unwrap_or_default();
            println!(
                "{:<width$}    {marker} {}: {}{default}",
                "",
                param.name,
                param.kind.to_string().dimmed()
            );
        }
    }
    Ok(())
}

/// Parse `key=value`; the value is taken as JSON when it parses, else as text.
fn parse_param(raw: &str) -> Result<(String, Value)> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| eyre!("Expected KEY=VALUE, got '{raw}'"))?;
    let key = key.trim();
    if key.is_empty() {
        bail!("Parameter name is empty in '{raw}'");
    }
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

pub fn check_tool(args: CheckToolArgs) -> Result<()> {
    let mut values = Map::new();
    for raw in &args.params {
        let (key, value) = parse_param(raw)?;
        values.insert(key, value);
    }

    let errors = catalog::validate_parameters(&args.tool, &values);
    if !errors.is_empty() {
        for error in &errors {
            eprintln!("{} {error}", "error:".red().bold());
        }
        bail!("{} problem(s) with parameters for '{}'", errors.len(), args.tool);
    }

    println!("{}", to_json(&catalog::format_tool_config(&args.tool, &values))?);
    Ok(())
}

pub async fn models(args: ModelsArgs) -> Result<()> {
    let models = fetch_models(args.free).await?;

    if args.json {
        println!("{}", to_json(&models)?);
        return Ok(());
    }

    for model in &models {
        let via = model
            .provider
            .as_deref()
            .map(|p| format!(" via {p}"))
            .unwrap_or_default();
        println!(
            "{} by {}{via} ({})",
            model.name.bold(),
            model.author,
            model.model_id.dimmed()
        );
    }
    Ok(())
}

pub fn template(args: TemplateArgs) -> Result<()> {
    if args.suggestions {
        for (i, suggestion) in prompt_suggestions().iter().enumerate() {
            if i > 0 {
                println!("\n---\n");
            }
            println!("{suggestion}");
        }
    } else if args.scenarios {
        for scenario in example_scenarios() {
            println!("{}\n  {}", scenario.title.bold(), scenario.prompt);
        }
    } else {
        print!("{}", prompt_template());
    }
    Ok(())
}
