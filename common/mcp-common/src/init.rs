//! Server startup: tracing setup and the `serve_stdio!` macro

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing for an MCP server
///
/// Logs go to stderr since stdout carries the MCP protocol. `RUST_LOG`
/// controls filtering, with `<crate_name>=info` added by default.
/// `LOG_FORMAT=json` switches to structured JSON lines.
pub fn init_tracing(crate_name: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::from_default_env().add_directive(default_directive(crate_name).parse()?);

    let registry = tracing_subscriber::registry().with(filter);

    if json_requested(std::env::var("LOG_FORMAT").ok().as_deref()) {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .init();
    }

    Ok(())
}

fn default_directive(crate_name: &str) -> String {
    format!("{}=info", crate_name)
}

fn json_requested(log_format: Option<&str>) -> bool {
    log_format.is_some_and(|v| v.eq_ignore_ascii_case("json"))
}

/// Generate `main` for a stdio MCP server
///
/// Initializes tracing, builds the server, serves it over stdio and waits
/// for the client to disconnect.
///
/// ```rust,ignore
/// // Server with an infallible `new()`
/// serve_stdio!(MyServer, "my_mcp");
///
/// // Server built by a fallible constructor returning `anyhow::Result<Self>`
/// serve_stdio!(TodoistMcpServer, "todoist_mcp", from_env);
/// ```
#[macro_export]
macro_rules! serve_stdio {
    (@main $crate_name:expr, $build:block) => {
        #[tokio::main]
        async fn main() -> anyhow::Result<()> {
            use rmcp::ServiceExt;

            $crate::init_tracing($crate_name)?;

            tracing::info!(concat!("Starting ", $crate_name, " MCP Server"));

            let server = $build;
            let service = server.serve(rmcp::transport::stdio()).await?;

            tracing::info!("Server running, waiting for requests...");

            service.waiting().await?;

            tracing::info!("Server shutting down");
            Ok(())
        }
    };
    ($server_type:ty, $crate_name:expr) => {
        $crate::serve_stdio!(@main $crate_name, { <$server_type>::new() });
    };
    ($server_type:ty, $crate_name:expr, $constructor:ident) => {
        $crate::serve_stdio!(@main $crate_name, { <$server_type>::$constructor()? });
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    // The global subscriber can only be installed once per process, so only
    // the pure pieces are tested here.

    #[test]
    fn test_default_directive_parses() {
        let directive = default_directive("todoist_mcp");
        assert_eq!(directive, "todoist_mcp=info");
        assert!(directive.parse::<tracing_subscriber::filter::Directive>().is_ok());
    }

    #[test]
    fn test_json_requested() {
        assert!(json_requested(Some("json")));
        assert!(json_requested(Some("JSON")));
        assert!(!json_requested(Some("text")));
        assert!(!json_requested(None));
    }
}
