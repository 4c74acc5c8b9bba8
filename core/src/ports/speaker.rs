/// Defines the contract for presenting a message to an audience.
#[cfg_attr(test, mockall::automock)]
pub trait Speaker: Send + Sync {
    /// Renders `message` in the speaker's own manner and returns what was said.
    fn speak(&self, message: &str) -> String;

    /// Display label. Consumers must not branch on it.
    fn kind(&self) -> &'static str;
}
