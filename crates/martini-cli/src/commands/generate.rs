use crate::cli::GenerateArgs;
use crate::config;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use martini_paircoeffs::engine::progress::ProgressReporter;
use martini_paircoeffs::workflows;
use tracing::info;

pub fn run(args: GenerateArgs) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let config = config::build_config(&args)?;
    info!(
        "Generating {} coefficients from {:?} with database {:?}.",
        config.pair_style, config.mapping_path, config.database_path
    );

    let reporter = if args.no_progress {
        ProgressReporter::new()
    } else {
        ProgressReporter::with_callback(CliProgressHandler::new().get_callback())
    };

    let result = workflows::generate::run(&config, &reporter)?;

    println!(
        "✓ {} pair coefficients for {} bead types written to: {}",
        result.coefficients.len(),
        result.mapping.len(),
        config.output_path.display()
    );
    Ok(())
}
