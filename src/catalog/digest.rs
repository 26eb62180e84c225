use sha2::{Digest, Sha256};

/// Running SHA-256 over the catalog sources, so a report can name exactly
/// which catalog produced it.
#[derive(Default)]
pub struct CatalogDigest {
    hasher: Sha256,
}

impl CatalogDigest {
    pub fn update(&mut self, name: &str, bytes: &[u8]) {
        self.hasher.update(name.as_bytes());
        self.hasher.update([0u8]);
        self.hasher.update(bytes);
    }

    pub fn finish(self) -> String {
        self.hasher
            .finalize()
            .iter()
            .map(|byte| format!("{byte:02x}"))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_depends_on_names_and_content() {
        let mut a = CatalogDigest::default();
        a.update("a.json", b"{}");
        let mut b = CatalogDigest::default();
        b.update("b.json", b"{}");
        let mut c = CatalogDigest::default();
        c.update("a.json", b"{}");

        let a = a.finish();
        assert_eq!(a.len(), 64);
        assert_ne!(a, b.finish());
        assert_eq!(a, c.finish());
    }
}
