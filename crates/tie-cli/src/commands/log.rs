use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tie_core::feedback::{ConversationLog, SpeechBalloonDict};

pub fn inspect(path: &Path) -> Result<()> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let log = parse_log(&content)
        .with_context(|| format!("Invalid conversation log {}", path.display()))?;

    tracing::debug!("Parsed {} balloon(s) from {:?}", log.len(), path);
    print!("{}", summarize(&log));
    Ok(())
}

fn parse_log(content: &str) -> Result<ConversationLog> {
    let dicts: Vec<SpeechBalloonDict> = serde_json::from_str(content)?;
    Ok(ConversationLog::from_dicts(&dicts)?)
}

fn summarize(log: &ConversationLog) -> String {
    let mut out = format!(
        "{} balloon(s), {} code submission(s), {} feedback balloon(s)\n",
        log.len(),
        log.num_code_submissions(),
        log.len() - log.num_code_submissions()
    );
    if let Some(code) = log.last_code_submission() {
        out.push_str("Last submission:\n");
        out.push_str(code);
        if !code.ends_with('\n') {
            out.push('\n');
        }
    }
    out
}
