/// Cache key for a single `lookup` call.
///
/// Equality and hashing are structural over all three fields and byte-exact;
/// no case or locale folding happens. The path is expected to be normalized
/// before the key is built so separator differences never cause misses.
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct LookupCacheKey {
    subject: String,
    path: String,
    index: i32,
}

impl LookupCacheKey {
    /// Create a key from the original subject, normalized path, and index.
    pub fn new(subject: impl Into<String>, path: impl Into<String>, index: i32) -> Self {
        Self {
            subject: subject.into(),
            path: path.into(),
            index,
        }
    }

    /// The subject text exactly as passed to `lookup`.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// The normalized dictionary path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The requested form index.
    pub fn index(&self) -> i32 {
        self.index
    }
}
