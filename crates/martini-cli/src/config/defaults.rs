pub struct DefaultsConfig {
    pub mapping_path: String,
    pub database_path: String,
    pub output_path: String,
    pub pair_style: String,
    pub cutoff: f64,
    pub inner_cutoff: f64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            mapping_path: "martini.inp".to_string(),
            database_path: "martini_v3.0.0.itp".to_string(),
            output_path: "paircoeffs.txt".to_string(),
            pair_style: "lj/gromacs".to_string(),
            cutoff: 1.2,
            inner_cutoff: 0.9,
        }
    }
}
