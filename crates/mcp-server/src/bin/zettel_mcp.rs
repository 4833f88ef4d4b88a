use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    zettel_mcp::main_entry().await
}
