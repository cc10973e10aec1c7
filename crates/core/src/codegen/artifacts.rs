//! Downloadable artifacts built from generated code.

use crate::catalog::{self, EnvScope};
use cf_protocol::config_models::Framework;
use serde::Serialize;

pub const TEXT_MIME: &str = "text/plain";
pub const ENV_TEMPLATE_FILE: &str = ".env.template";

/// A named text file offered for download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    pub file_name: String,
    pub mime_type: &'static str,
    pub content: String,
}

/// File name of the generated script for a framework.
pub fn script_file_name(framework: Framework) -> &'static str {
    match framework {
        Framework::CrewAi => "crew_ai_script.py",
        Framework::LangGraph => "langgraph_script.py",
    }
}

pub fn script_artifact(framework: Framework, code: String) -> Artifact {
    Artifact {
        file_name: script_file_name(framework).to_string(),
        mime_type: TEXT_MIME,
        content: code,
    }
}

/// Builds a `.env.template` listing the variables the given tools need.
///
/// Variables appear once each, in the order the catalog reports them.
/// Returns `None` when none of the tools needs a variable.
pub fn env_template(framework: Framework, tools: &[String]) -> Option<Artifact> {
    let mut vars: Vec<&str> = Vec::new();
    for req in catalog::env_requirements(EnvScope::Many(tools)) {
        if !vars.contains(&req.env_var) {
            vars.push(req.env_var);
        }
    }
    if vars.is_empty() {
        return None;
    }

    let mut content = format!("# Environment variables for {}\n", framework.display_name());
    for var in vars {
        content.push_str(var);
        content.push_str("=your_value_here\n");
    }

    Some(Artifact {
        file_name: ENV_TEMPLATE_FILE.to_string(),
        mime_type: TEXT_MIME,
        content,
    })
}
