use brandwatch_domain::{Brand, DomainError};
use std::collections::HashMap;

const SAMPLE_LABELS: usize = 5;

/// Case- and punctuation-insensitive lookup from free-text brand labels to brand ids.
///
/// Built once per import run from every brand, active or not. Both the
/// uppercased name and the uppercased code of each brand are keys. A label is
/// tried as-is (uppercased) first, then with every non-alphanumeric character
/// removed. Nothing fuzzier than that is attempted.
pub struct BrandResolver {
    labels: HashMap<String, i64>,
    sample: Vec<String>,
}

impl BrandResolver {
    pub fn new(brands: &[Brand]) -> Self {
        let mut labels = HashMap::with_capacity(brands.len() * 2);
        let mut sample = Vec::new();

        for brand in brands {
            let Some(id) = brand.id else { continue };
            for label in [&brand.name, &brand.code] {
                let key = label.trim().to_uppercase();
                if !labels.contains_key(&key) {
                    if sample.len() < SAMPLE_LABELS {
                        sample.push(key.clone());
                    }
                    labels.insert(key, id);
                }
            }
        }

        Self { labels, sample }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn resolve(&self, label: &str) -> Result<i64, DomainError> {
        let upper = label.trim().to_uppercase();
        if let Some(id) = self.labels.get(&upper) {
            return Ok(*id);
        }

        let stripped: String = upper.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
        if let Some(id) = self.labels.get(&stripped) {
            return Ok(*id);
        }

        Err(DomainError::UnknownBrand(format!(
            "Brand '{}' not found. Available brands: {}...",
            label.trim(),
            self.sample.join(", ")
        )))
    }
}
