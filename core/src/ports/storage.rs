/// Defines the contract for keeping content somewhere and getting it back.
#[cfg_attr(test, mockall::automock)]
pub trait Storage: Send + Sync {
    /// Persists `content` under `name`.
    fn save(&self, name: &str, content: &[u8]);

    /// Retrieves content previously saved under `name`.
    ///
    /// # Returns
    /// * `Some(bytes)` - The content the storage holds for this name.
    /// * `None` - If the storage has nothing for this name.
    fn load(&self, name: &str) -> Option<Vec<u8>>;

    /// Display label. Consumers must not branch on it.
    fn kind(&self) -> &'static str;
}
