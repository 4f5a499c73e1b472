use display_name_mcp::config::resolver::StrategyResolver;
use display_name_mcp::config::GenerationConfig;
use display_name_mcp::handler::DisplayNameServerHandler;
use rust_mcp_sdk::schema::{
    Implementation, InitializeResult, ServerCapabilities, ServerCapabilitiesTools,
    LATEST_PROTOCOL_VERSION,
};
use rust_mcp_sdk::{
    error::SdkResult,
    mcp_server::{server_runtime, McpServerOptions, ServerRuntime, ToMcpServerHandler},
    McpServer, StdioTransport, TransportOptions,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> SdkResult<()> {
    color_eyre::install().ok();
    env_logger::init();

    log::info!("Display Name MCP Server starting");

    // Strategy declarations come from the file named by DISPLAY_NAME_CONFIG
    let config = match GenerationConfig::from_env() {
        Ok(config) => config,
        Err(report) => {
            eprintln!("{report:?}");
            std::process::exit(1);
        }
    };
    log::info!(
        "Loaded {} grouping declaration(s)",
        config.groupings.len()
    );

    // Custom generator declarations must resolve before serving any call
    let resolver = StrategyResolver::new(config);
    if let Err(error) = resolver.validate_declarations() {
        eprintln!("{:?}", eyre::Report::new(error));
        std::process::exit(1);
    }

    // Define server details and capabilities
    let server_details = InitializeResult {
        server_info: Implementation {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            title: Some("Display Name MCP Server".to_string()),
            description: None,
            icons: vec![],
            website_url: None,
        },
        capabilities: ServerCapabilities {
            tools: Some(ServerCapabilitiesTools { list_changed: None }),
            ..Default::default()
        },
        meta: None,
        instructions: Some(
            "Generates human-readable display names for test classes, nested test classes and test methods.".to_string(),
        ),
        protocol_version: LATEST_PROTOCOL_VERSION.to_string(),
    };

    // Create stdio transport
    let transport = StdioTransport::new(TransportOptions::default())?;

    // Create handler
    let handler = DisplayNameServerHandler::new(resolver);

    // Create and start MCP server
    let server: Arc<ServerRuntime> =
        server_runtime::create_server(McpServerOptions {
            server_details,
            transport,
            handler: handler.to_mcp_server_handler(),
            task_store: None,
            client_task_store: None,
        });

    if let Err(start_error) = server.start().await {
        eprintln!(
            "{}",
            start_error
                .rpc_error_message()
                .unwrap_or(&start_error.to_string())
        );
    }

    log::info!("Display Name MCP Server stopping");

    Ok(())
}
