/// Behaviour shared by stored records, whatever the backing store.
pub trait Record: Clone + Send + Sync + 'static {
    /// Singular lower-case name used in messages and logs.
    const KIND: &'static str;

    /// Per-collection unique key.
    fn email(&self) -> &str;
}
