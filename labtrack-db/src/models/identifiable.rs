/// Trait for entities that carry a store-assigned identifier
pub trait Identifiable {
    /// Returns the unique identifier of the entity
    fn get_id(&self) -> i64;
}
