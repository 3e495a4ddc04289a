use idfmt::{Engine, FormatError, Policy, SequenceStore};
use serde_json::{Value, json};

use super::config::{Action, CliConfig};

/// The printable result of one invocation.
#[derive(Debug)]
pub struct Outcome {
    pub output: String,
    /// False when `check` rejected the format.
    pub success: bool,
}

impl Outcome {
    fn ok(output: String) -> Self {
        Self {
            output,
            success: true,
        }
    }
}

pub fn run(config: &CliConfig) -> anyhow::Result<Outcome> {
    let engine = Engine::new().with_policy(config.policy);

    match &config.action {
        Action::Preview { format } => {
            let preview = engine.preview(format)?;
            Ok(Outcome::ok(serde_json::to_string_pretty(&preview)?))
        }
        Action::Generate {
            format,
            inventory,
            count,
            seed,
        } => {
            let format = engine.compile(format)?;
            if let Some(seed) = *seed {
                engine.store().restore(*inventory, seed);
            }

            let ids: Vec<String> = (0..*count)
                .map(|_| engine.generate_format(*inventory, &format))
                .collect();
            tracing::info!(%inventory, count, "generated identifiers");
            Ok(Outcome::ok(ids.join("\n")))
        }
        Action::Check { format } => {
            let (report, success) = check(format, &config.policy);
            Ok(Outcome {
                output: serde_json::to_string_pretty(&report)?,
                success,
            })
        }
    }
}

/// Describes `text` as JSON: its canonical form and tokens if it compiles,
/// otherwise the error and its class.
pub fn check(text: &str, policy: &Policy) -> (Value, bool) {
    match idfmt::Format::compile(text, policy) {
        Ok(format) => (
            json!({
                "valid": true,
                "canonical": format.to_string(),
                "tokens": format,
            }),
            true,
        ),
        Err(err) => (
            json!({
                "valid": false,
                "class": classify(&err),
                "error": err.to_string(),
            }),
            false,
        ),
    }
}

fn classify(err: &FormatError) -> &'static str {
    match err {
        FormatError::InvalidArgument { .. } => "argument",
        err if err.is_limit_error() => "limit",
        _ => "syntax",
    }
}
