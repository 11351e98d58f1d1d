pub struct Config {
    /// Hides the version banner.
    pub no_banner: bool,
    /// Verbosity reduction requested with `-q`.
    ///
    /// `1` hides headers and summaries, `2` also hides warnings.
    /// The rendered contract is never affected.
    pub quiet: u8,
}
