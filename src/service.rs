use anyhow::Result;
use rmcp::{
    handler::server::{wrapper::Parameters, ServerHandler, tool::ToolRouter},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};

use crate::client::LookupClient;
use crate::config::Config;
use crate::error::LookupError;
use crate::models::{DefineWordRequest, GetWeatherRequest};

/// MCP service exposing the dictionary and weather lookups as tools
#[derive(Clone)]
pub struct Lookup {
    client: LookupClient,
    tool_router: ToolRouter<Self>,
}

impl Lookup {
    /// Creates a new Lookup service instance
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self {
            client: LookupClient::new(config)?,
            tool_router: Self::tool_router(),
        })
    }

    fn to_mcp_error(context: &str, e: LookupError) -> McpError {
        if e.is_invalid_input() {
            McpError::invalid_params(e.to_string(), None)
        } else {
            tracing::warn!("{}: {}", context, e);
            McpError::internal_error(format!("{}: {}", context, e), None)
        }
    }
}

#[tool_handler]
impl ServerHandler for Lookup {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "mcp-lookup".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "Looks up English word definitions (dictionaryapi.dev) and weather reports (wttr.in). \
                Both tools take a slash-delimited key expression and use its last segment as the word or city."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl Lookup {
    /// Lists the definitions of a word
    #[tool(description = "Define an English word. Provide a slash-delimited key expression whose last segment is the word (e.g., 'dictionary/hello').")]
    async fn define_word(
        &self,
        Parameters(request): Parameters<DefineWordRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Defining word for key expression: {}", request.key_expr);

        let definitions = self
            .client
            .define(&request.key_expr)
            .await
            .map_err(|e| Self::to_mcp_error("Failed to fetch definition", e))?;

        Ok(CallToolResult::success(vec![Content::text(definitions)]))
    }

    /// Gets the weather report for a city
    #[tool(description = "Get the weather report for a city. Provide a slash-delimited key expression whose last segment is the city name (e.g., 'weather/Paris').")]
    async fn get_weather(
        &self,
        Parameters(request): Parameters<GetWeatherRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting weather for key expression: {}", request.key_expr);

        let report = self
            .client
            .weather(&request.key_expr)
            .await
            .map_err(|e| Self::to_mcp_error("Failed to fetch weather", e))?;

        Ok(CallToolResult::success(vec![Content::text(report)]))
    }
}
