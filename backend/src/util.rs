use once_cell::sync::OnceCell;

/// Global slot for a value loaded at startup, before the server is spawned.
///
/// Holds the parsed `config.toml`: `init` must be called exactly once,
/// dereferencing before that panics.
pub struct LateInit<T> { cell: OnceCell<T> }

impl<T> LateInit<T> {
    pub const fn new() -> Self {
        Self { cell: OnceCell::new() }
    }
    
    pub fn init(&self, value: T) {
        assert!(self.cell.set(value).is_ok())
    }
}

impl<T> std::ops::Deref for LateInit<T> {
    type Target = T;
    fn deref(&self) -> &T {
        self.cell.get().unwrap()
    }
}
