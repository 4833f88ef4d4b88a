#![allow(dead_code)]

use anyhow::{Context, Result};
use rmcp::{
    model::{CallToolRequestParam, CallToolResult},
    service::{RoleClient, RunningService, ServiceExt},
    transport::TokioChildProcess,
};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::process::Command;

pub const TIMEOUT: Duration = Duration::from_secs(10);

pub fn locate_zettel_mcp_bin() -> Result<PathBuf> {
    if let Some(path) = option_env!("CARGO_BIN_EXE_zettel-mcp") {
        return Ok(PathBuf::from(path));
    }

    // `.../target/{debug|release}/deps/<test>` -> `.../target/{debug|release}/zettel-mcp`
    if let Ok(exe) = std::env::current_exe() {
        if let Some(target_profile_dir) = exe.parent().and_then(|p| p.parent()) {
            let candidate = target_profile_dir.join("zettel-mcp");
            if candidate.exists() {
                return Ok(candidate);
            }
        }
    }

    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let repo_root = manifest_dir
        .ancestors()
        .nth(2)
        .context("failed to resolve repo root from CARGO_MANIFEST_DIR")?;
    for rel in ["target/debug/zettel-mcp", "target/release/zettel-mcp"] {
        let candidate = repo_root.join(rel);
        if candidate.exists() {
            return Ok(candidate);
        }
    }

    anyhow::bail!("failed to locate zettel-mcp binary; build with: cargo build -p zettel-mcp")
}

/// A throwaway config: `config.toml`, a template, and an output directory under `root`.
pub struct CardWorkspace {
    pub root: PathBuf,
    pub config: PathBuf,
    pub out_dir: PathBuf,
}

impl CardWorkspace {
    pub fn create(root: &Path, template: &str) -> Result<Self> {
        let template_path = root.join("template.md");
        std::fs::write(&template_path, template).context("write template")?;
        let out_dir = root.join("cards");
        let config = root.join("config.toml");
        std::fs::write(
            &config,
            format!(
                "template_file = '{}'\noutput_directory = '{}'\n\n[file_operations]\ncreate_backup = true\nfilename_sanitization = true\n",
                template_path.display(),
                out_dir.display()
            ),
        )
        .context("write config.toml")?;
        Ok(Self {
            root: root.to_path_buf(),
            config,
            out_dir,
        })
    }
}

pub async fn start_server(config: &Path) -> Result<RunningService<RoleClient, ()>> {
    let bin = locate_zettel_mcp_bin()?;
    let mut cmd = Command::new(bin);
    cmd.env_remove("CONFIG_PATH");
    cmd.env("ZETTELKASTEN_CONFIG", config);
    cmd.env("RUST_LOG", "warn");

    let transport = TokioChildProcess::new(cmd).context("spawn mcp server")?;
    let service = tokio::time::timeout(TIMEOUT, ().serve(transport))
        .await
        .context("timeout starting MCP server")??;
    Ok(service)
}

pub async fn call(
    service: &RunningService<RoleClient, ()>,
    name: &str,
    arguments: serde_json::Value,
) -> Result<CallToolResult> {
    let result = tokio::time::timeout(
        TIMEOUT,
        service.call_tool(CallToolRequestParam {
            name: name.to_string().into(),
            arguments: arguments.as_object().cloned(),
        }),
    )
    .await
    .with_context(|| format!("timeout calling {name}"))??;
    Ok(result)
}

pub fn first_text(result: &CallToolResult) -> Option<&str> {
    result
        .content
        .first()
        .and_then(|c| c.as_text())
        .map(|t| t.text.as_str())
}
