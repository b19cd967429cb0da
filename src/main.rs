use anyhow::Context;
use clap::Parser;
use vet_schedule::logging;
use vet_schedule::{ClinicConfig, ClinicScheduler, CliConfig, OutputFormat, ScheduleKpi};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logging::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    let mut config = match &cli.config {
        Some(path) => ClinicConfig::from_file(path)
            .with_context(|| format!("failed to load clinic config {}", path.display()))?,
        None => ClinicConfig::default(),
    };
    if let Some(policy) = cli.policy {
        config = config.with_policy(policy);
    }

    let mut scheduler = ClinicScheduler::from_config(&config)?;
    let outcome = scheduler.run().context("scheduling run failed")?;

    match cli.format {
        OutputFormat::Text => {
            print!("{}", outcome.report.render_text());
            if cli.summary {
                for line in ScheduleKpi::calculate(&scheduler, &outcome).summary_lines() {
                    println!("{line}");
                }
            }
        }
        OutputFormat::Json => {
            if cli.summary {
                let kpi = ScheduleKpi::calculate(&scheduler, &outcome);
                let body = serde_json::json!({ "report": outcome.report, "summary": kpi });
                println!("{}", serde_json::to_string_pretty(&body)?);
            } else {
                println!("{}", outcome.report.to_json()?);
            }
        }
    }

    Ok(())
}
