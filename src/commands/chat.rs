use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use docgate::client::{ApiClient, GatewayApi};
use docgate::session::{ChatTranscript, DocumentRegistry, Navigator, Screen};
use docgate::types::Role;

const GREETING: &str = "Hello! I can analyze documents you upload. \
Would you like to upload a document or chat about existing ones?";

/// Interactive terminal session against a running gateway.
///
/// Drives the same three-screen flow as the browser UI: a greeting screen
/// routed by keyword, an upload screen that takes file paths, and a chat
/// screen. `/back` returns to the previous screen; an empty line quits.
pub async fn handle_chat(gateway_url: String) -> Result<()> {
    let api = ApiClient::new(&gateway_url);

    let mut registry = DocumentRegistry::new();
    registry.refresh(&api).await;
    if let Some(error) = registry.error() {
        anyhow::bail!("Could not reach gateway at {}: {}", gateway_url, error);
    }

    let mut nav = Navigator::new();
    let mut transcript = ChatTranscript::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}\n", GREETING);

    loop {
        match nav.current() {
            Screen::Initial => {
                let Some(input) = prompt(&mut lines, "[upload/chat] > ").await? else {
                    break;
                };
                let choice = input.to_lowercase();
                if choice.contains("upload") {
                    nav.request_upload();
                } else if choice.contains("chat") || choice.contains("existing") {
                    registry.refresh(&api).await;
                    nav.request_chat(registry.has_documents());
                    if nav.current() == Screen::Upload {
                        println!("No documents uploaded yet; let's upload one first.");
                    }
                } else {
                    println!("Please answer 'upload' or 'chat'.");
                }
            }
            Screen::Upload => {
                print_documents(&registry);
                let Some(input) = prompt(&mut lines, "file path > ").await? else {
                    break;
                };
                if input == "/back" {
                    nav.back();
                    continue;
                }
                match upload_file(&api, &input).await {
                    Ok(file_name) => {
                        println!("Uploaded {}", file_name);
                        registry.refresh(&api).await;
                        nav.upload_complete();
                    }
                    Err(e) => println!("Upload failed: {}", e),
                }
            }
            Screen::Chat => {
                let Some(question) = prompt(&mut lines, "> ").await? else {
                    break;
                };
                if question == "/back" {
                    nav.back();
                    continue;
                }
                transcript.send(&api, &question).await;
                if let Some(answer) = transcript
                    .messages()
                    .iter()
                    .rev()
                    .find(|m| m.role == Role::Assistant)
                {
                    println!("\n{}\n", answer.content);
                    if !answer.sources.is_empty() {
                        println!("Sources:");
                        for source in &answer.sources {
                            println!("  - {}", source);
                        }
                        println!();
                    }
                }
            }
        }
    }

    Ok(())
}

/// Read one trimmed line; None on EOF or an empty line
async fn prompt(lines: &mut Lines<BufReader<Stdin>>, label: &str) -> Result<Option<String>> {
    print!("{}", label);
    std::io::stdout().flush()?;
    let Some(line) = lines.next_line().await? else {
        return Ok(None);
    };
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    Ok(Some(trimmed.to_string()))
}

fn print_documents(registry: &DocumentRegistry) {
    if registry.documents().is_empty() {
        println!("No documents uploaded yet.");
        return;
    }
    println!("Documents:");
    for doc in registry.documents() {
        println!("  - {}", doc.file_name);
    }
}

async fn upload_file(api: &ApiClient, path: &str) -> Result<String> {
    let path = PathBuf::from(path);
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow::anyhow!("Path has no usable file name: {}", path.display()))?
        .to_string();
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read '{}': {}", path.display(), e))?;
    api.upload(&file_name, bytes).await?;
    Ok(file_name)
}
