use async_trait::async_trait;

/// Repository trait for loading a whole collection
///
/// Items are returned in data store order, which is also the display order.
///
/// # Type Parameters
/// * `T` - The record type
#[async_trait]
pub trait LoadAll<T>: Send + Sync {
    /// Load every record of the collection
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - All records, possibly empty
    /// * `Err` - An error if the collection could not be read
    async fn load_all(&self) -> Result<Vec<T>, Box<dyn std::error::Error + Send + Sync>>;
}
