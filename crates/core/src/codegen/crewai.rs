//! CrewAI script generator.

use super::{
    credential_vars, emit_env_checks, py_bool, py_ident, py_str, tool_idents, Idents, Source,
};
use cf_protocol::config_models::CrewConfig;

/// Renders a flat configuration as a CrewAI Python script.
pub fn render(config: &CrewConfig) -> String {
    let mut src = Source::default();
    let used = config.used_tools();
    let agent_idents = Idents::assign(config.agents.iter().map(|a| a.name.as_str()));
    let task_idents = Idents::assign(config.tasks.iter().map(|t| t.name.as_str()));

    src.line("from crewai import Agent, Task, Crew");
    let imports = tool_idents(&used);
    if !imports.is_empty() {
        src.line("from crewai_tools import (");
        src.line(format!("    {}", imports.join(",\n    ")));
        src.line(")");
        emit_env_checks(&mut src, &credential_vars(&used));
    }
    src.blank();

    for agent in &config.agents {
        let ident = agent_idents.get(&agent.name);
        src.line(format!("# Agent: {}", agent.name));
        if !agent.tools.is_empty() {
            let instances: Vec<String> = agent.tools.iter().map(|t| instantiate(t)).collect();
            src.line(format!("tools_{ident} = [{}]", instances.join(", ")));
        }
        src.line(format!("agent_{ident} = Agent("));
        src.line(format!("    role={},", py_str(&agent.role)));
        src.line(format!("    goal={},", py_str(&agent.goal)));
        src.line(format!("    backstory={},", py_str(&agent.backstory)));
        src.line(format!("    verbose={},", py_bool(agent.verbose)));
        src.line(format!("    allow_delegation={},", py_bool(agent.allow_delegation)));
        if agent.tools.is_empty() {
            src.line("    tools=[]");
        } else {
            src.line(format!("    tools=tools_{ident}"));
        }
        src.line(")");
        src.blank();
    }

    for task in &config.tasks {
        let ident = task_idents.get(&task.name);
        src.line(format!("# Task: {}", task.name));
        src.line(format!("task_{ident} = Task("));
        src.line(format!("    description={},", py_str(&task.description)));
        src.line(format!("    agent=agent_{},", agent_idents.get(&task.agent)));
        src.line(format!("    expected_output={}", py_str(&task.expected_output)));
        src.line(")");
        src.blank();
    }

    let agents: Vec<String> = config
        .agents
        .iter()
        .map(|a| format!("agent_{}", agent_idents.get(&a.name)))
        .collect();
    let tasks: Vec<String> = config
        .tasks
        .iter()
        .map(|t| format!("task_{}", task_idents.get(&t.name)))
        .collect();

    src.line("# Crew Configuration");
    src.line("crew = Crew(");
    src.line(format!("    agents=[{}],", agents.join(", ")));
    src.line(format!("    tasks=[{}]", tasks.join(", ")));
    src.line(")");
    src.blank();
    src.line("# Run the crew");
    src.line("result = crew.kickoff()");

    src.finish()
}

/// Constructor call for a tool; a few tools need an argument to be usable.
fn instantiate(tool: &str) -> String {
    let ident = py_ident(tool);
    match tool {
        "DirectoryReadTool" => format!("{ident}(directory_path='.')"),
        "FileReadTool" => format!("{ident}(file_path='example.txt')"),
        _ => format!("{ident}()"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cf_protocol::agent_models::CrewAgent;
    use cf_protocol::task_models::CrewTask;

    #[test]
    fn test_render_without_tools() {
        let config = CrewConfig {
            agents: vec![CrewAgent::new("writer", "Writer", "Write it")],
            tasks: vec![CrewTask::new("draft", "Write a draft", "A draft", "writer")],
        };

        insta::assert_snapshot!(render(&config), @r##"
        from crewai import Agent, Task, Crew

        # Agent: writer
        agent_writer = Agent(
            role='Writer',
            goal='Write it',
            backstory='',
            verbose=True,
            allow_delegation=False,
            tools=[]
        )

        # Task: draft
        task_draft = Task(
            description='Write a draft',
            agent=agent_writer,
            expected_output='A draft'
        )

        # Crew Configuration
        crew = Crew(
            agents=[agent_writer],
            tasks=[task_draft]
        )

        # Run the crew
        result = crew.kickoff()
        "##);
    }

    #[test]
    fn test_render_with_tools_and_credentials() {
        let config = CrewConfig {
            agents: vec![
                CrewAgent::new("researcher", "Researcher", "Find sources")
                    .with_backstory("Ex-librarian")
                    .with_tools(["SerperDevTool", "FileReadTool"]),
                CrewAgent::new("browser", "Browser", "Browse").with_tools(["BrowserTool"]),
            ],
            tasks: vec![CrewTask::new("search", "Search the web", "Links", "researcher")],
        };

        insta::assert_snapshot!(render(&config), @r##"
        from crewai import Agent, Task, Crew
        from crewai_tools import (
            BrowserTool,
            FileReadTool,
            SerperDevTool
        )

        import os
        from dotenv import load_dotenv

        # Load environment variables
        load_dotenv()

        if 'BROWSERLESS_API_KEY' not in os.environ:
            raise ValueError("Please set the BROWSERLESS_API_KEY environment variable")
        if 'SERPER_API_KEY' not in os.environ:
            raise ValueError("Please set the SERPER_API_KEY environment variable")


        # Agent: researcher
        tools_researcher = [SerperDevTool(), FileReadTool(file_path='example.txt')]
        agent_researcher = Agent(
            role='Researcher',
            goal='Find sources',
            backstory='Ex-librarian',
            verbose=True,
            allow_delegation=False,
            tools=tools_researcher
        )

        # Agent: browser
        tools_browser = [BrowserTool()]
        agent_browser = Agent(
            role='Browser',
            goal='Browse',
            backstory='',
            verbose=True,
            allow_delegation=False,
            tools=tools_browser
        )

        # Task: search
        task_search = Task(
            description='Search the web',
            agent=agent_researcher,
            expected_output='Links'
        )

        # Crew Configuration
        crew = Crew(
            agents=[agent_researcher, agent_browser],
            tasks=[task_search]
        )

        # Run the crew
        result = crew.kickoff()
        "##);
    }

    #[test]
    fn test_colliding_names_get_distinct_identifiers() {
        let config = CrewConfig {
            agents: vec![
                CrewAgent::new("a-1", "First", "Go"),
                CrewAgent::new("a_1", "Second", "Go"),
            ],
            tasks: vec![
                CrewTask::new("t-1", "One", "Done", "a_1"),
                CrewTask::new("t_1", "Two", "Done", "a-1"),
            ],
        };

        insta::assert_snapshot!(render(&config), @r##"
        from crewai import Agent, Task, Crew

        # Agent: a-1
        agent_a_1 = Agent(
            role='First',
            goal='Go',
            backstory='',
            verbose=True,
            allow_delegation=False,
            tools=[]
        )

        # Agent: a_1
        agent_a_1_2 = Agent(
            role='Second',
            goal='Go',
            backstory='',
            verbose=True,
            allow_delegation=False,
            tools=[]
        )

        # Task: t-1
        task_t_1 = Task(
            description='One',
            agent=agent_a_1_2,
            expected_output='Done'
        )

        # Task: t_1
        task_t_1_2 = Task(
            description='Two',
            agent=agent_a_1,
            expected_output='Done'
        )

        # Crew Configuration
        crew = Crew(
            agents=[agent_a_1, agent_a_1_2],
            tasks=[task_t_1, task_t_1_2]
        )

        # Run the crew
        result = crew.kickoff()
        "##);
    }

    #[test]
    fn test_text_is_escaped() {
        let config = CrewConfig {
            agents: vec![CrewAgent::new("a1", "Editor's aide", "Line one\nLine two")],
            tasks: Vec::new(),
        };
        let code = render(&config);
        assert!(code.contains(r"role='Editor\'s aide',"));
        assert!(code.contains(r"goal='Line one\nLine two',"));
        assert!(code.contains("    tasks=[]\n"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let config = CrewConfig {
            agents: vec![CrewAgent::new("a", "R", "G").with_tools(["SerperDevTool", "BrowserTool"])],
            tasks: vec![CrewTask::new("t", "D", "O", "a")],
        };
        assert_eq!(render(&config), render(&config.clone()));
    }
}
