//! Favorites: the dogs the user has picked as match candidates.

use crate::models::Dog;

/// Insertion-ordered set of dogs, unique by id.
///
/// Order matters: [`Favorites::ids`] is the exact body sent to the match
/// endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    dogs: Vec<Dog>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a dog. Returns false (and changes nothing) if its id is already present.
    pub fn add(&mut self, dog: Dog) -> bool {
        if self.contains(&dog.id) {
            return false;
        }
        self.dogs.push(dog);
        true
    }

    /// Remove by id. Returns false if the id was not present.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.dogs.len();
        self.dogs.retain(|d| d.id != id);
        self.dogs.len() != before
    }

    /// Add if absent, remove if present. Returns true when the dog is a
    /// favorite afterwards.
    pub fn toggle(&mut self, dog: &Dog) -> bool {
        if self.remove(&dog.id) {
            false
        } else {
            self.dogs.push(dog.clone());
            true
        }
    }

    pub fn clear(&mut self) {
        self.dogs.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.dogs.iter().any(|d| d.id == id)
    }

    /// Ids in insertion order.
    pub fn ids(&self) -> Vec<String> {
        self.dogs.iter().map(|d| d.id.clone()).collect()
    }

    pub fn dogs(&self) -> &[Dog] {
        &self.dogs
    }

    pub fn get(&self, index: usize) -> Option<&Dog> {
        self.dogs.get(index)
    }

    pub fn len(&self) -> usize {
        self.dogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dogs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dog(id: &str) -> Dog {
        Dog {
            id: id.to_string(),
            img: String::new(),
            name: id.to_uppercase(),
            age: 1,
            zip_code: "00000".to_string(),
            breed: "Mutt".to_string(),
        }
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut favorites = Favorites::new();
        assert!(favorites.add(dog("d1")));
        assert!(!favorites.add(dog("d1")));
        assert_eq!(favorites.len(), 1);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut favorites = Favorites::new();
        favorites.add(dog("d1"));
        assert!(!favorites.remove("nope"));
        assert_eq!(favorites.ids(), vec!["d1"]);
    }

    #[test]
    fn test_ids_preserve_insertion_order() {
        let mut favorites = Favorites::new();
        favorites.add(dog("d3"));
        favorites.add(dog("d1"));
        favorites.add(dog("d2"));
        favorites.remove("d1");
        favorites.add(dog("d1"));
        assert_eq!(favorites.ids(), vec!["d3", "d2", "d1"]);
    }

    #[test]
    fn test_toggle() {
        let mut favorites = Favorites::new();
        assert!(favorites.toggle(&dog("d1")));
        assert!(favorites.contains("d1"));
        assert!(!favorites.toggle(&dog("d1")));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut favorites = Favorites::new();
        favorites.add(dog("d1"));
        favorites.add(dog("d2"));
        favorites.clear();
        assert!(favorites.is_empty());
        assert!(favorites.ids().is_empty());
    }

    #[test]
    fn test_matches_reference_model_for_mixed_sequence() {
        // (add?, id) operations compared against a plain Vec model
        let ops = [
            (true, "a"),
            (true, "b"),
            (true, "a"),
            (false, "c"),
            (true, "c"),
            (false, "a"),
            (true, "b"),
            (true, "a"),
            (false, "b"),
        ];
        let mut favorites = Favorites::new();
        let mut model: Vec<&str> = Vec::new();
        for (add, id) in ops {
            if add {
                favorites.add(dog(id));
                if !model.contains(&id) {
                    model.push(id);
                }
            } else {
                favorites.remove(id);
                model.retain(|m| *m != id);
            }
        }
        assert_eq!(favorites.ids(), model);
    }
}
