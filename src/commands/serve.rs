use std::net::SocketAddr;

use axum::Router;
use tower_http::services::ServeDir;

use crate::{ServeArgs, commands::Project};

pub async fn run(args: &ServeArgs) -> Result<(), anyhow::Error> {
    let project = Project::load(args.config_file.as_deref())?;

    // Build the site first
    println!("Building site...");
    let result = project.build(&project.builder())?;
    println!(
        "Built {} pages, {} static files",
        result.pages, result.assets
    );

    // Create the static file server
    let serve_dir = ServeDir::new(project.output_dir()).append_index_html_on_directories(true);
    let app = Router::new().fallback_service(serve_dir);

    // Parse the address
    let addr: SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;

    // Determine the URL to display
    let display_host = if args.bind == "0.0.0.0" {
        "localhost"
    } else {
        &args.bind
    };
    let url = format!("http://{}:{}", display_host, args.port);

    println!("\nServing site at {}", url);
    println!("Press Ctrl+C to stop\n");

    // Open browser if requested
    if args.open
        && let Err(e) = open::that(&url)
    {
        tracing::warn!("failed to open browser: {e}");
    }

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
