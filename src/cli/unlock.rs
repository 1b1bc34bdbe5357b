//! `plan unlock` command implementation

use anyhow::Result;
use clap::Args;

use crate::config::Config;

#[derive(Args)]
pub struct UnlockArgs {
    /// Override the configured redirect URL
    #[arg(long)]
    url: Option<String>,
}

pub fn run(args: UnlockArgs) -> Result<()> {
    let mut unlock = Config::load()?.unlock;
    if let Some(url) = args.url {
        unlock.redirect_url = url;
    }

    crate::unlock::run(&unlock)
}
