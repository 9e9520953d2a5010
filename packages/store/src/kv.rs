/// A string key-value area with the semantics of the browser's `localStorage`.
///
/// Implementations swallow storage errors: a read that fails is a miss and a write
/// that fails is dropped. The data kept here is a convenience hand-off, never the
/// only copy of anything.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
    /// Every key currently present, in no particular order.
    fn keys(&self) -> Vec<String>;
    fn clear(&self);
}
