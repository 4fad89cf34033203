use crate::{Binding, Db, Record, Result};

/// A lazily bound table.
///
/// The first successful [`Table::fetch`] builds the binding; later calls
/// return it without touching the database. A failed fetch leaves the table
/// unbound.
pub struct Table<R> {
    binding: Option<Binding<R>>,
}

impl<R: Record> Table<R> {
    pub const fn new() -> Self {
        Self { binding: None }
    }

    /// Binds the table `name` to `R`, unless already bound.
    pub async fn fetch(&mut self, db: &Db, name: &str) -> Result<&Binding<R>> {
        let binding = match self.binding.take() {
            Some(binding) => {
                if binding.name() != name {
                    log::debug!(
                        "table already bound; bound={}; requested={name}",
                        binding.name()
                    );
                }
                binding
            }
            None => Binding::build(db, name).await?,
        };

        Ok(&*self.binding.insert(binding))
    }

    /// Returns the binding if the table has been fetched.
    pub fn get(&self) -> Option<&Binding<R>> {
        self.binding.as_ref()
    }

    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }
}

impl<R: Record> Default for Table<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> std::fmt::Debug for Table<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Table")
            .field("binding", &self.binding)
            .finish()
    }
}
