use anyhow::Result;
use clap::Command;
use log::LevelFilter;

use dipole_summary::config::PipelineConfig;
use dipole_summary::pipeline::run_pipeline;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("DIPOLE_LOG", "error,dipole_summary=info"))
        .init();

    Command::new("dipole-summary")
        .version(clap::crate_version!())
        .about(
            "Write per-run rescaled prior parameters and minimum dipole amplitude \
             to ../data/beta_event_amplitude.csv",
        )
        .get_matches();

    let config = PipelineConfig::default();
    let table = run_pipeline(&config)?;
    log::info!("[dipole-summary] Completed {} runs.", table.nrows());
    Ok(())
}
