//! The static tool registry.
//!
//! Registration order is significant: fuzzy matching in the pattern
//! extractor takes the first tool whose identifier matches.

use super::{EnvRequirement, ParamDefault, ParamSpec, ParamType, ToolDescriptor};

const fn required(name: &'static str, kind: ParamType, description: &'static str) -> ParamSpec {
    ParamSpec {
        name,
        kind,
        required: true,
        default: None,
        description,
    }
}

const fn optional(
    name: &'static str,
    kind: ParamType,
    default: Option<ParamDefault>,
    description: &'static str,
) -> ParamSpec {
    ParamSpec {
        name,
        kind,
        required: false,
        default,
        description,
    }
}

const fn env(env_var: &'static str, description: &'static str) -> EnvRequirement {
    EnvRequirement {
        env_var,
        description,
    }
}

use ParamDefault::{Bool, Float, Int, Str as Text};
use ParamType::{Bool as B, Dict, Float as F, Int as I, List, Str as S};

pub(crate) static TOOLS: &[ToolDescriptor] = &[
    ToolDescriptor {
        id: "SerperDevTool",
        description: "Serper.dev API for web search",
        parameters: &[
            required("api_key", S, "Your Serper.dev API key"),
            optional("search_type", S, Some(Text("search")), "Type of search (search/images/news)"),
            optional("include_answer", B, Some(Bool(false)), "Whether to include an answer"),
            optional("include_images", B, Some(Bool(false)), "Whether to include images"),
            optional("num_results", I, Some(Int(10)), "Number of search results"),
        ],
        env: &[env("SERPER_API_KEY", "API key for Serper.dev search service")],
    },
    ToolDescriptor {
        id: "SearXSearchTool",
        description: "SearX meta search engine tool",
        parameters: &[
            required("searx_host", S, "SearX host address"),
            optional("engines", List, None, "Search engines to use"),
            optional("num_results", I, Some(Int(10)), "Number of search results"),
            optional("language", S, Some(Text("en")), "Language for search results"),
        ],
        env: &[],
    },
    ToolDescriptor {
        id: "GoogleSearchTool",
        description: "Google Search API tool",
        parameters: &[
            required("api_key", S, "Your Google Search API key"),
            required("cse_id", S, "Custom Search Engine ID"),
            optional("num_results", I, Some(Int(10)), "Number of search results"),
        ],
        env: &[
            env("GOOGLE_API_KEY", "API key for Google Search"),
            env("GOOGLE_CSE_ID", "Custom Search Engine ID for Google Search"),
        ],
    },
    ToolDescriptor {
        id: "BrowserTool",
        description: "Browser tool for web browsing and scraping",
        parameters: &[
            optional("headless", B, Some(Bool(true)), "Run browser in headless mode"),
            optional("browser_type", S, Some(Text("chromium")), "Browser type to use"),
            optional("proxy", S, None, "Proxy server to use"),
        ],
        env: &[],
    },
    ToolDescriptor {
        id: "FileReadTool",
        description: "Tool to read file contents",
        parameters: &[
            required("file_path", S, "Path to file to read"),
            optional("encoding", S, Some(Text("utf-8")), "File encoding"),
        ],
        env: &[],
    },
    ToolDescriptor {
        id: "FileWriteTool",
        description: "Tool to write content to files",
        parameters: &[
            required("directory_path", S, "Directory to write files to"),
            optional("overwrite", B, Some(Bool(false)), "Whether to overwrite existing files"),
        ],
        env: &[],
    },
    ToolDescriptor {
        id: "PythonREPLTool",
        description: "Python REPL for executing code",
        parameters: &[optional(
            "timeout",
            I,
            Some(Int(10)),
            "Timeout in seconds for code execution",
        )],
        env: &[],
    },
    ToolDescriptor {
        id: "TavilySearchTool",
        description: "Tavily AI search API",
        parameters: &[
            required("api_key", S, "Your Tavily API key"),
            optional("search_depth", S, Some(Text("basic")), "Search depth (basic/advanced)"),
            optional("max_results", I, Some(Int(5)), "Maximum number of results"),
            optional("include_answer", B, Some(Bool(true)), "Whether to include an answer"),
            optional("include_images", B, Some(Bool(false)), "Whether to include images"),
            optional("include_raw_content", B, Some(Bool(false)), "Whether to include raw content"),
        ],
        env: &[env("TAVILY_API_KEY", "API key for Tavily Search API")],
    },
    ToolDescriptor {
        id: "BrowserbaseLoadTool",
        description: "A tool for interacting with and extracting data from web browsers",
        parameters: &[
            required("url", S, "URL to load in the browser"),
            required("browserbase_key", S, "Your Browserbase API key"),
        ],
        env: &[env("BROWSERBASE_API_KEY", "API key for Browserbase")],
    },
    ToolDescriptor {
        id: "CodeDocsSearchTool",
        description: "A RAG tool optimized for searching through code documentation and related technical documents",
        parameters: &[
            required("docs_path", S, "Path to code documentation"),
            optional("top_k", I, Some(Int(5)), "Number of top documents to retrieve"),
        ],
        env: &[],
    },
    ToolDescriptor {
        id: "CodeInterpreterTool",
        description: "A tool for interpreting python code",
        parameters: &[
            optional("allow_filesystem_access", B, Some(Bool(true)), "Whether to allow filesystem access"),
            optional("allow_network_access", B, Some(Bool(false)), "Whether to allow network access"),
        ],
        env: &[],
    },
    ToolDescriptor {
        id: "ComposioTool",
        description: "Enables use of Composio tools",
        parameters: &[
            required("api_key", S, "Your Composio API key"),
            required("tool_name", S, "Name of the Composio tool to use"),
        ],
        env: &[env("COMPOSIO_API_KEY", "API key for Composio")],
    },
    ToolDescriptor {
        id: "CSVSearchTool",
        description: "A RAG tool designed for searching within CSV files, tailored to handle structured data",
        parameters: &[
            required("csv_file", S, "Path to CSV file"),
            optional("top_k", I, Some(Int(5)), "Number of top records to retrieve"),
        ],
        env: &[],
    },
    ToolDescriptor {
        id: "DALL-E Tool",
        description: "A tool for generating images using the DALL-E API",
        parameters: &[
            required("api_key", S, "Your OpenAI API key"),
            optional("model", S, Some(Text("dall-e-3")), "DALL-E model to use"),
            optional("size", S, Some(Text("1024x1024")), "Image size (1024x1024, 1792x1024, etc.)"),
            optional("quality", S, Some(Text("standard")), "Image quality (standard/hd)"),
        ],
        env: &[env("OPENAI_API_KEY", "API key for OpenAI DALL-E")],
    },
    ToolDescriptor {
        id: "DirectorySearchTool",
        description: "A RAG tool for searching within directories, useful for navigating through file systems",
        parameters: &[
            required("directory_path", S, "Directory path to search"),
            optional("recursive", B, Some(Bool(true)), "Whether to search recursively"),
            optional("top_k", I, Some(Int(5)), "Number of top results to retrieve"),
        ],
        env: &[],
    },
    ToolDescriptor {
        id: "DOCXSearchTool",
        description: "A RAG tool aimed at searching within DOCX documents, ideal for processing Word files",
        parameters: &[
            required("docx_file", S, "Path to DOCX file"),
            optional("top_k", I, Some(Int(5)), "Number of top sections to retrieve"),
        ],
        env: &[],
    },
    ToolDescriptor {
        id: "DirectoryReadTool",
        description: "Facilitates reading and processing of directory structures and their contents",
        parameters: &[
            required("directory_path", S, "Directory path to read"),
            optional("recursive", B, Some(Bool(false)), "Whether to read recursively"),
            optional("file_pattern", S, None, "File pattern to match (glob)"),
        ],
        env: &[],
    },
    ToolDescriptor {
        id: "EXASearchTool",
        description: "A tool designed for performing exhaustive searches across various data sources",
        parameters: &[
            required("api_key", S, "Your EXA API key"),
            optional("num_results", I, Some(Int(10)), "Number of search results"),
            optional("use_highlights", B, Some(Bool(false)), "Whether to include highlights"),
        ],
        env: &[env("EXA_API_KEY", "API key for EXA search service")],
    },
    ToolDescriptor {
        id: "FirecrawlSearchTool",
        description: "A tool to search webpages using Firecrawl and return the results",
        parameters: &[
            required("api_key", S, "Your Firecrawl API key"),
            optional("max_results", I, Some(Int(10)), "Maximum number of search results"),
        ],
        env: &[env("FIRECRAWL_API_KEY", "API key for Firecrawl search service")],
    },
    ToolDescriptor {
        id: "FirecrawlCrawlWebsiteTool",
        description: "A tool for crawling webpages using Firecrawl",
        parameters: &[
            required("api_key", S, "Your Firecrawl API key"),
            required("url", S, "Website URL to crawl"),
            optional("max_pages_to_crawl", I, Some(Int(100)), "Maximum number of pages to crawl"),
            optional("max_depth", I, Some(Int(10)), "Maximum depth for crawling"),
            optional("enable_javascript", B, Some(Bool(true)), "Whether to enable JavaScript"),
        ],
        env: &[env("FIRECRAWL_API_KEY", "API key for Firecrawl crawl service")],
    },
    ToolDescriptor {
        id: "FirecrawlScrapeWebsiteTool",
        description: "A tool for scraping webpages URL using Firecrawl and returning its contents",
        parameters: &[
            required("api_key", S, "Your Firecrawl API key"),
            required("url", S, "Website URL to scrape"),
            optional("enable_javascript", B, Some(Bool(true)), "Whether to enable JavaScript"),
        ],
        env: &[env("FIRECRAWL_API_KEY", "API key for Firecrawl scrape service")],
    },
    ToolDescriptor {
        id: "GithubSearchTool",
        description: "A RAG tool for searching within GitHub repositories, useful for code and documentation search",
        parameters: &[
            required("token", S, "GitHub personal access token"),
            required("repo", S, "GitHub repository in format 'owner/repo'"),
            optional("branch", S, Some(Text("main")), "Repository branch to search"),
            optional("top_k", I, Some(Int(5)), "Number of top results to retrieve"),
        ],
        env: &[env("GITHUB_TOKEN", "Personal access token for GitHub")],
    },
    ToolDescriptor {
        id: "TXTSearchTool",
        description: "A RAG tool focused on searching within text (.txt) files, suitable for unstructured data",
        parameters: &[
            required("txt_file", S, "Path to text file"),
            optional("top_k", I, Some(Int(5)), "Number of top chunks to retrieve"),
        ],
        env: &[],
    },
    ToolDescriptor {
        id: "JSONSearchTool",
        description: "A RAG tool designed for searching within JSON files, catering to structured data handling",
        parameters: &[
            required("json_file", S, "Path to JSON file"),
            optional("top_k", I, Some(Int(5)), "Number of top results to retrieve"),
        ],
        env: &[],
    },
    ToolDescriptor {
        id: "LlamaIndexTool",
        description: "Enables the use of LlamaIndex tools",
        parameters: &[
            required("index_path", S, "Path to LlamaIndex index"),
            optional("query_engine_kwargs", Dict, None, "Additional arguments for the query engine"),
        ],
        env: &[],
    },
    ToolDescriptor {
        id: "MDXSearchTool",
        description: "A RAG tool tailored for searching within Markdown (MDX) files, useful for documentation",
        parameters: &[
            required("mdx_file", S, "Path to MDX file"),
            optional("top_k", I, Some(Int(5)), "Number of top sections to retrieve"),
        ],
        env: &[],
    },
    ToolDescriptor {
        id: "PDFSearchTool",
        description: "A RAG tool aimed at searching within PDF documents, ideal for processing scanned documents",
        parameters: &[
            required("pdf_file", S, "Path to PDF file"),
            optional("top_k", I, Some(Int(5)), "Number of top sections to retrieve"),
        ],
        env: &[],
    },
    ToolDescriptor {
        id: "PGSearchTool",
        description: "A RAG tool optimized for searching within PostgreSQL databases, suitable for database queries",
        parameters: &[
            required("connection_string", S, "PostgreSQL connection string"),
            required("table_name", S, "Database table name"),
            optional("top_k", I, Some(Int(5)), "Number of top results to retrieve"),
        ],
        env: &[env("DATABASE_URL", "PostgreSQL connection string")],
    },
    ToolDescriptor {
        id: "Vision Tool",
        description: "A tool for describing images using the OpenAI Vision API",
        parameters: &[
            required("api_key", S, "Your OpenAI API key"),
            optional("model", S, Some(Text("gpt-4-vision-preview")), "Vision model to use"),
        ],
        env: &[env("OPENAI_API_KEY", "API key for OpenAI Vision API")],
    },
    ToolDescriptor {
        id: "RagTool",
        description: "A general-purpose RAG tool capable of handling various data sources and types",
        parameters: &[
            required("data_source", S, "Source of data for RAG"),
            optional("embeddings_model", S, None, "Model to use for embeddings"),
            optional("top_k", I, Some(Int(5)), "Number of top results to retrieve"),
        ],
        env: &[],
    },
    ToolDescriptor {
        id: "ScrapeElementFromWebsiteTool",
        description: "Enables scraping specific elements from websites, useful for targeted data extraction",
        parameters: &[
            required("url", S, "Website URL to scrape elements from"),
            required("selector", S, "CSS selector for the element"),
            optional("headless", B, Some(Bool(true)), "Whether to run browser in headless mode"),
            optional("wait_for", F, Some(Float(0.0)), "Time to wait for page load in seconds"),
        ],
        env: &[],
    },
    ToolDescriptor {
        id: "ScrapeWebsiteTool",
        description: "Facilitates scraping entire websites, ideal for comprehensive data collection",
        parameters: &[
            required("url", S, "Website URL to scrape"),
            optional("headless", B, Some(Bool(true)), "Whether to run browser in headless mode"),
            optional("wait_for", F, Some(Float(0.0)), "Time to wait for page load in seconds"),
        ],
        env: &[],
    },
    ToolDescriptor {
        id: "WebsiteSearchTool",
        description: "A RAG tool for searching website content, optimized for web data extraction",
        parameters: &[
            required("url", S, "Website URL to search"),
            optional("top_k", I, Some(Int(5)), "Number of top results to retrieve"),
            optional("enable_javascript", B, Some(Bool(true)), "Whether to enable JavaScript"),
        ],
        env: &[],
    },
    ToolDescriptor {
        id: "XMLSearchTool",
        description: "A RAG tool designed for searching within XML files, suitable for structured data formats",
        parameters: &[
            required("xml_file", S, "Path to XML file"),
            optional("top_k", I, Some(Int(5)), "Number of top elements to retrieve"),
        ],
        env: &[],
    },
    ToolDescriptor {
        id: "YoutubeChannelSearchTool",
        description: "A RAG tool for searching within YouTube channels, useful for video content analysis",
        parameters: &[
            required("channel_id", S, "YouTube channel ID"),
            required("api_key", S, "YouTube API key"),
            optional("max_results", I, Some(Int(10)), "Maximum number of results"),
            optional("caption_language", S, Some(Text("en")), "Language for captions"),
        ],
        env: &[env("YOUTUBE_API_KEY", "API key for YouTube Data API")],
    },
    ToolDescriptor {
        id: "YoutubeVideoSearchTool",
        description: "A RAG tool aimed at searching within YouTube videos, ideal for video data extraction",
        parameters: &[
            required("video_id", S, "YouTube video ID"),
            required("api_key", S, "YouTube API key"),
            optional("caption_language", S, Some(Text("en")), "Language for captions"),
            optional("top_k", I, Some(Int(5)), "Number of top sections to retrieve"),
        ],
        env: &[env("YOUTUBE_API_KEY", "API key for YouTube Data API")],
    },
];
