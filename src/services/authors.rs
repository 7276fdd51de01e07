//! In-process author directory backing the `authors` query and the
//! `addAuthor` mutation.
//!
//! Records live for the lifetime of the process only. The sequence is
//! append-only and keeps insertion order.

use parking_lot::RwLock;
use tracing::info;
use uuid::{uuid, Uuid};

use crate::domain::models::Author;

const SEED_AUTHORS: [(&str, Uuid); 5] = [
    ("Robert Martin", uuid!("afa51ab0-344d-11e9-a414-719c6709cf3e")),
    ("Martin Fowler", uuid!("afa5b6f0-344d-11e9-a414-719c6709cf3e")),
    ("Fyodor Dostoevsky", uuid!("afa5b6f1-344d-11e9-a414-719c6709cf3e")),
    ("Joshua Kerievsky", uuid!("afa5b6f2-344d-11e9-a414-719c6709cf3e")),
    ("Sandi Metz", uuid!("afa5b6f3-344d-11e9-a414-719c6709cf3e")),
];

/// Ordered author store shared by all requests.
#[derive(Debug, Default)]
pub struct AuthorDirectory {
    authors: RwLock<Vec<Author>>,
}

impl AuthorDirectory {
    pub fn new(authors: Vec<Author>) -> Self {
        Self {
            authors: RwLock::new(authors),
        }
    }

    /// Directory pre-populated with the five fixed records.
    pub fn seeded() -> Self {
        Self::new(
            SEED_AUTHORS
                .iter()
                .map(|(name, id)| Author {
                    id: *id,
                    name: Some((*name).to_string()),
                })
                .collect(),
        )
    }

    /// Snapshot of every author in insertion order.
    pub fn list(&self) -> Vec<Author> {
        self.authors.read().clone()
    }

    /// Appends an author under a freshly generated identifier.
    ///
    /// A missing name is stored as-is.
    pub fn add(&self, name: Option<String>) -> Author {
        let author = Author::new(name);
        self.authors.write().push(author.clone());
        info!(author_id = %author.id, "author added");
        author
    }

    pub fn len(&self) -> usize {
        self.authors.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.authors.read().is_empty()
    }
}
