//! The `urai prompt` command: print the instruction sent for a platform.

use clap::Args;
use urai_core::{build_prompt, Platform};

use super::types::PlatformArg;

/// Arguments for the `prompt` command.
#[derive(Args, Debug)]
pub struct PromptArgs {
    /// Platform to show; lists every platform when omitted
    #[arg(short, long, value_enum)]
    pub platform: Option<PlatformArg>,

    /// Extra context to append, as `describe --context` would
    #[arg(short, long)]
    pub context: Option<String>,
}

pub fn execute(args: PromptArgs) -> anyhow::Result<()> {
    print!("{}", render(&args));
    Ok(())
}

fn render(args: &PromptArgs) -> String {
    let context = args.context.as_deref();
    match args.platform {
        Some(platform) => format!("{}\n", build_prompt(platform.into(), context)),
        None => Platform::ALL
            .into_iter()
            .map(|platform| {
                format!(
                    "{} ({platform})\n  {}\n\n",
                    platform.title(),
                    build_prompt(platform, context)
                )
            })
            .collect(),
    }
}
