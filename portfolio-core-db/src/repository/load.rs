use async_trait::async_trait;

/// Repository trait for loading a record that exists exactly once in the data store
///
/// Used for singleton content such as the portfolio owner's personal information.
///
/// # Type Parameters
/// * `T` - The record type
///
/// # Example
/// ```ignore
/// impl Load<PersonalInfo> for InMemoryPortfolioRepository {
///     async fn load(&self) -> Result<PersonalInfo, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait Load<T>: Send + Sync {
    /// Load the record
    ///
    /// # Returns
    /// * `Ok(T)` - The loaded record
    /// * `Err` - An error if the record is missing or could not be read
    async fn load(&self) -> Result<T, Box<dyn std::error::Error + Send + Sync>>;
}
