use crate::cli::LookupArgs;
use crate::config::DefaultsConfig;
use crate::error::Result;
use martini_paircoeffs::workflows;
use std::path::PathBuf;

pub fn run(args: LookupArgs) -> Result<()> {
    let database_path = args
        .database
        .unwrap_or_else(|| PathBuf::from(DefaultsConfig::default().database_path));

    let found = workflows::lookup::run(&database_path, &args.first, &args.second)?;

    println!("{} {}", found.first, found.second);
    println!(
        "  epsilon: {:>12.6} kJ/mol   {:>12.6} kcal/mol",
        found.gromacs.epsilon, found.lammps.epsilon
    );
    println!(
        "  sigma:   {:>12.6} nm       {:>12.6} Å",
        found.gromacs.sigma, found.lammps.sigma
    );
    Ok(())
}
