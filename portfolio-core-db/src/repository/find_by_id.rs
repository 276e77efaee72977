use async_trait::async_trait;
use portfolio_core_api::Identifiable;

use super::load_all::LoadAll;

/// Repository trait for finding a record by its id
///
/// Returns an Option to handle cases where the record might not exist.
/// Collections that can be loaded whole get a linear scan for free.
///
/// # Type Parameters
/// * `T` - The record type that must implement Identifiable trait
#[async_trait]
pub trait FindById<T: Identifiable>: Send + Sync {
    /// Find a record by its identifier
    ///
    /// # Returns
    /// * `Ok(Some(T))` - The found record
    /// * `Ok(None)` - If the record does not exist
    /// * `Err` - An error if the collection could not be read
    async fn find_by_id(&self, id: i64) -> Result<Option<T>, Box<dyn std::error::Error + Send + Sync>>;
}

#[async_trait]
impl<R, T> FindById<T> for R
where
    R: LoadAll<T>,
    T: Identifiable + Send + 'static,
{
    async fn find_by_id(&self, id: i64) -> Result<Option<T>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.load_all().await?.into_iter().find(|item| item.get_id() == id))
    }
}
