use anyhow::bail;
use clap::{Parser, Subcommand};
use idfmt::{
    DEFAULT_MAX_PER_KIND, DEFAULT_MAX_TOKENS, DEFAULT_PREVIEW_EXAMPLES, InventoryId, Policy,
};

/// Upper bound on `--count`, so a typo cannot flood the terminal.
pub const MAX_COUNT: usize = 100_000;

/// Runtime configuration for the `idfmt` binary.
///
/// Limits mirror [`Policy`] and can be set once per shell through the
/// environment (or a `.env` file) instead of on every invocation.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "idfmt",
    version,
    about = "Preview, check and generate custom inventory IDs"
)]
pub struct CliArgs {
    /// Maximum number of tokens of any single kind in a format.
    ///
    /// Environment variable: `IDFMT_MAX_PER_KIND`
    #[arg(long, global = true, env = "IDFMT_MAX_PER_KIND", default_value_t = DEFAULT_MAX_PER_KIND)]
    pub max_per_kind: usize,

    /// Maximum number of tokens in a format.
    ///
    /// Environment variable: `IDFMT_MAX_TOKENS`
    #[arg(long, global = true, env = "IDFMT_MAX_TOKENS", default_value_t = DEFAULT_MAX_TOKENS)]
    pub max_tokens: usize,

    /// Number of extra samples `preview` prints alongside the preview.
    ///
    /// Environment variable: `IDFMT_PREVIEW_EXAMPLES`
    #[arg(long, global = true, env = "IDFMT_PREVIEW_EXAMPLES", default_value_t = DEFAULT_PREVIEW_EXAMPLES)]
    pub preview_examples: usize,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Render a format without reserving sequence values; prints JSON.
    Preview {
        /// Canonical format string, e.g. `ITEM-{SEQ}`.
        format: String,
    },
    /// Mint identifiers against an in-process sequence store.
    Generate {
        /// Canonical format string, e.g. `ITEM-{SEQ}`.
        format: String,

        /// Inventory whose counter is advanced.
        ///
        /// Environment variable: `IDFMT_INVENTORY`
        #[arg(long, env = "IDFMT_INVENTORY", default_value_t = 1)]
        inventory: u64,

        /// Number of identifiers to mint.
        #[arg(long, short = 'n', default_value_t = 1)]
        count: usize,

        /// First sequence number to hand out (defaults to 1).
        #[arg(long)]
        start: Option<u64>,
    },
    /// Parse and validate a format; prints its canonical form and tokens.
    Check {
        /// Canonical format string, e.g. `ITEM-{SEQ}`.
        format: String,
    },
}

/// What to do once the limits are known to be sane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Preview {
        format: String,
    },
    Generate {
        format: String,
        inventory: InventoryId,
        count: usize,
        /// Counter value to restore before minting, i.e. `start - 1`.
        seed: Option<u64>,
    },
    Check {
        format: String,
    },
}

#[derive(Debug, Clone)]
pub struct CliConfig {
    pub policy: Policy,
    pub action: Action,
}

impl TryFrom<CliArgs> for CliConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if args.max_per_kind == 0 {
            bail!("IDFMT_MAX_PER_KIND must be greater than 0");
        }

        if args.max_tokens == 0 {
            bail!("IDFMT_MAX_TOKENS must be greater than 0");
        }

        if args.max_per_kind > args.max_tokens {
            bail!(
                "IDFMT_MAX_PER_KIND ({}) exceeds IDFMT_MAX_TOKENS ({})",
                args.max_per_kind,
                args.max_tokens
            );
        }

        let action = match args.command {
            Command::Preview { format } => Action::Preview { format },
            Command::Check { format } => Action::Check { format },
            Command::Generate {
                format,
                inventory,
                count,
                start,
            } => {
                if count == 0 || count > MAX_COUNT {
                    bail!("--count must be between 1 and {MAX_COUNT} (got {count})");
                }
                let seed = match start {
                    Some(0) => bail!("--start must be at least 1"),
                    Some(start) => Some(start - 1),
                    None => None,
                };
                Action::Generate {
                    format,
                    inventory: InventoryId::new(inventory),
                    count,
                    seed,
                }
            }
        };

        Ok(Self {
            policy: Policy::default()
                .with_max_per_kind(args.max_per_kind)
                .with_max_tokens(args.max_tokens)
                .with_preview_examples(args.preview_examples),
            action,
        })
    }
}
