/// Growable record collection with its own id counter.
///
/// Ids start at 1 and are handed out in order. Rows are never removed, so the
/// row for id `n` always sits at index `n - 1`.
#[derive(Debug)]
pub struct Arena<T> {
    rows: Vec<T>,
    next_id: u64,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }
}

impl<T: Clone> Arena<T> {
    /// Build a row with the next id and store it. Returns a copy of the row.
    pub fn insert_with<F>(&mut self, build: F) -> T
    where
        F: FnOnce(u64) -> T,
    {
        let id = self.next_id;
        self.next_id += 1;
        let row = build(id);
        self.rows.push(row.clone());
        row
    }

    pub fn get(&self, id: u64) -> Option<&T> {
        let index = usize::try_from(id.checked_sub(1)?).ok()?;
        self.rows.get(index)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut T> {
        let index = usize::try_from(id.checked_sub(1)?).ok()?;
        self.rows.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.rows.iter()
    }

    pub fn all(&self) -> Vec<T> {
        self.rows.clone()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
