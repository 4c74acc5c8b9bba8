/// What a storage consumer does when its storage has nothing under a requested key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingKeyPolicy {
    /// Clear the held content and report the key as absent.
    #[default]
    Empty,
    /// Leave the held content untouched and fail with [`crate::DiError::KeyNotFound`].
    Fail,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Suppresses headers and the banner when greater than zero.
    pub quiet: u8,
    pub no_banner: bool,
    /// Applied to every poem the assembler builds.
    pub missing_key: MissingKeyPolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_permissive() {
        let cfg = Config::default();
        assert_eq!(cfg.missing_key, MissingKeyPolicy::Empty);
        assert_eq!(cfg.quiet, 0);
        assert!(!cfg.no_banner);
    }
}
