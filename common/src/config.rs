/// Runtime options for a circ session, assembled from the command line.
pub struct Config {
    /// Skips the startup banner.
    pub no_banner: bool,
    /// Suppresses decorative output.
    ///
    /// Level 1 drops headers and separators, level 2 additionally drops
    /// the catalog trees, leaving bare log lines.
    pub quiet: u8,
    /// Preloads the demo catalog and borrowers at startup.
    pub seed: bool,
}
