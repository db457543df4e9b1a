use crate::error::SeedError;
use crate::model::ProductCategory;
use commerce_host::RecordId;
use std::collections::HashMap;

/// Category name -> id, built once from the categories a run created.
#[derive(Debug, Clone, Default)]
pub struct CategoryIndex {
    by_name: HashMap<String, RecordId>,
}

impl CategoryIndex {
    /// When two categories share a name the first one wins.
    pub fn new(categories: &[ProductCategory]) -> Self {
        let mut by_name = HashMap::with_capacity(categories.len());
        for category in categories {
            by_name
                .entry(category.name.clone())
                .or_insert_with(|| category.id.clone());
        }
        Self { by_name }
    }

    /// Exact, case-sensitive lookup.
    pub fn id(&self, name: &str) -> Result<&RecordId, SeedError> {
        self.by_name
            .get(name)
            .ok_or_else(|| SeedError::MissingCategory(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(seq: u32, name: &str) -> ProductCategory {
        ProductCategory {
            id: RecordId::new("pcat", seq),
            name: name.into(),
            handle: name.to_lowercase(),
            is_active: true,
        }
    }

    #[test]
    fn test_lookup_is_exact() {
        let index = CategoryIndex::new(&[category(1, "Shirts"), category(2, "Pants")]);
        assert_eq!(index.id("Pants").unwrap().as_str(), "pcat_2");
        assert!(matches!(index.id("shirts"), Err(SeedError::MissingCategory(name)) if name == "shirts"));
    }

    #[test]
    fn test_first_duplicate_wins() {
        let index = CategoryIndex::new(&[category(1, "Merch"), category(2, "Merch")]);
        assert_eq!(index.len(), 1);
        assert_eq!(index.id("Merch").unwrap().as_str(), "pcat_1");
    }
}
