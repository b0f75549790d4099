use std::path::PathBuf;

use anyhow::Result;

use docgate::client::{ApiClient, GatewayApi};

/// Print the document listing from a running gateway
pub async fn handle_list(gateway_url: String) -> Result<()> {
    let api = ApiClient::new(&gateway_url);
    let documents = api.list().await?;

    if documents.is_empty() {
        println!("No documents uploaded yet");
        return Ok(());
    }

    println!("Documents ({}):", documents.len());
    for doc in &documents {
        println!("  {}  {}", doc.file_name, doc.file_url);
    }

    Ok(())
}

/// Upload one file through a running gateway
pub async fn handle_upload(gateway_url: String, path: PathBuf) -> Result<()> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow::anyhow!("Path has no usable file name: {}", path.display()))?
        .to_string();

    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read '{}': {}", path.display(), e))?;

    let api = ApiClient::new(&gateway_url);
    api.upload(&file_name, bytes).await?;

    println!("Uploaded {}", file_name);
    Ok(())
}

/// Delete one document through a running gateway
pub async fn handle_delete(gateway_url: String, filename: String) -> Result<()> {
    let api = ApiClient::new(&gateway_url);
    api.delete(&filename).await?;

    println!("Successfully deleted {}", filename);
    Ok(())
}
