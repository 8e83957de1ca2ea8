use crate::cli::commands::Ctx;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::policy::DeadlineAnchor;
use crate::utils::time::format_duration;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, ctx: &Ctx) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd {
        if *print_config {
            println!("📄 {}\n", Config::config_file().display());
            println!("{}", ctx.cfg.to_yaml()?);
        }

        let anchor = match ctx.policy.anchor {
            DeadlineAnchor::CohortEnd => "cohort end",
            DeadlineAnchor::MeetingEnd => "meeting end",
        };
        println!(
            "Effective policy: opens {} after meeting start, closes {} after {}",
            format_duration(ctx.policy.open_delay),
            format_duration(ctx.policy.close_deadline),
            anchor
        );
    }
    Ok(())
}
