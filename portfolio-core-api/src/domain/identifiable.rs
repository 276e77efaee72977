/// Trait for records that carry a dataset-assigned numeric id
pub trait Identifiable {
    /// Returns the unique identifier of the record
    fn get_id(&self) -> i64;
}
