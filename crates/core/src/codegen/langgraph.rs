//! LangGraph script generator.

use super::{credential_vars, emit_env_checks, py_dstr, py_ident, tool_idents, Idents, Source};
use crate::catalog;
use cf_protocol::config_models::GraphConfig;

/// Renders a graph configuration as a LangGraph Python script.
///
/// Tools become `BaseTool` stubs to be filled in by hand; edges targeting
/// `END` are wired to LangGraph's `END` marker.
pub fn render(config: &GraphConfig) -> String {
    let mut src = Source::default();
    let used = config.used_tools();
    let agent_idents = Idents::assign(config.agents.iter().map(|a| a.name.as_str()));

    src.line("from langgraph.graph import StateGraph, END");
    src.line("from langchain_core.messages import BaseMessage, HumanMessage, AIMessage");
    src.line("from langchain_openai import ChatOpenAI");
    src.line("from langchain_core.tools import BaseTool");
    src.line("from typing import Dict, List, Tuple, Any, TypedDict, Annotated");
    src.line("import operator");
    emit_env_checks(&mut src, &credential_vars(&used));
    src.blank();

    src.line("# Define state");
    src.line("class AgentState(TypedDict):");
    src.line("    messages: List[BaseMessage]");
    src.line("    next: str");
    src.blank();

    emit_tool_stubs(&mut src, &used);

    for agent in &config.agents {
        src.line(format!("# Agent: {}", agent.name));
        src.line(format!(
            "def {}_agent(state: AgentState) -> AgentState:",
            agent_idents.get(&agent.name)
        ));
        src.line(format!("    \"\"\"Agent that handles {}.\"\"\"", docstring(&agent.role)));
        src.line("    # Create LLM");
        src.line(format!("    llm = ChatOpenAI(model={})", py_dstr(&agent.llm)));
        src.line("    # Get the most recent message");
        src.line("    messages = state['messages']");
        src.line("    response = llm.invoke(messages)");
        src.line("    # Add the response to the messages");
        src.line("    return {");
        src.line("        \"messages\": messages + [response],");
        src.line("        \"next\": state.get(\"next\", \"\")");
        src.line("    }");
        src.blank();
    }

    src.line("# Define routing logic");
    src.line("def router(state: AgentState) -> str:");
    src.line("    \"\"\"Route to the next node.\"\"\"");
    src.line("    return state.get(\"next\", \"END\")");
    src.blank();

    src.line("# Define the graph");
    src.line("workflow = StateGraph(AgentState)");
    src.blank();
    src.line("# Add nodes to the graph");
    for node in &config.nodes {
        src.line(format!(
            "workflow.add_node({}, {}_agent)",
            py_dstr(&node.name),
            agent_idents.get(&node.agent)
        ));
    }
    src.blank();

    src.line("# Add edges");
    for edge in &config.edges {
        if let Some(condition) = &edge.condition {
            src.line(format!("# Condition: {}", single_line(condition)));
        }
        let target = if edge.is_terminal() {
            "END".to_string()
        } else {
            py_dstr(&edge.target)
        };
        src.line(format!("workflow.add_edge({}, {target})", py_dstr(&edge.source)));
    }

    if let Some(first) = config.nodes.first() {
        src.blank();
        src.line("# Set entry point");
        src.line(format!("workflow.set_entry_point({})", py_dstr(&first.name)));
    }

    src.blank();
    src.line("# Compile the graph");
    src.line("app = workflow.compile()");
    src.blank();
    src.line("# Run the graph");
    src.line("def run_agent(query: str) -> List[BaseMessage]:");
    src.line("    \"\"\"Run the agent on a query.\"\"\"");
    src.line("    result = app.invoke({");
    src.line("        \"messages\": [HumanMessage(content=query)],");
    src.line("        \"next\": \"\"");
    src.line("    })");
    src.line("    return result[\"messages\"]");
    src.blank();
    src.line("# Example usage");
    src.line("if __name__ == \"__main__\":");
    src.line("    result = run_agent(\"Your query here\")");
    src.line("    for message in result:");
    src.line("        print(f\"{message.type}: {message.content}\")");

    src.finish()
}

fn emit_tool_stubs(src: &mut Source, used: &[String]) {
    let mut tools: Vec<&String> = used.iter().collect();
    tools.sort();
    if tools.is_empty() {
        return;
    }

    src.line("# Define tools");
    for tool in &tools {
        let description = catalog::describe(tool)
            .map(str::to_string)
            .unwrap_or_else(|| format!("Tool for {tool} operations"));
        src.line(format!("class {}(BaseTool):", py_ident(tool)));
        src.line(format!("    name: str = {}", py_dstr(tool)));
        src.line(format!("    description: str = {}", py_dstr(&description)));
        src.blank();
        src.line("    def _run(self, query: str) -> str:");
        src.line("        # Implement actual functionality here");
        src.line("        return \"Result from \" + self.name + \" tool: \" + query");
        src.blank();
        src.line("    async def _arun(self, query: str) -> str:");
        src.line("        # Implement actual functionality here");
        src.line("        return \"Result from \" + self.name + \" tool: \" + query");
        src.blank();
    }

    src.line("tools = [");
    for ident in tool_idents(tools.iter().copied()) {
        src.line(format!("    {ident}(),"));
    }
    src.line("]");
    src.blank();
}

/// Text safe to place inside a triple-quoted docstring.
fn docstring(text: &str) -> String {
    single_line(text).replace('\\', "\\\\").replace('"', "\\\"")
}

fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
