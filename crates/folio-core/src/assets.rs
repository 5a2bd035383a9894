use fnv::FnvHashMap;

pub const DEFAULT_ASSET_BASE: &str = "assets";

/// Image keys the page refers to, with their file names.
pub const DEFAULT_ASSETS: [(&str, &str); 4] = [
    ("profile", "profile.jpg"),
    ("project1", "project1.png"),
    ("project2", "project2.png"),
    ("project3", "project3.png"),
];

/// Resolves image keys to URLs under a base path.
#[derive(Clone, Debug)]
pub struct AssetRegistry {
    base: String,
    files: FnvHashMap<&'static str, &'static str>,
}

impl AssetRegistry {
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self {
            base,
            files: FnvHashMap::default(),
        }
    }

    /// The page's images under `base`.
    pub fn with_defaults(base: impl Into<String>) -> Self {
        let mut reg = Self::new(base);
        for (key, file) in DEFAULT_ASSETS {
            reg.register(key, file);
        }
        reg
    }

    pub fn register(&mut self, key: &'static str, file: &'static str) {
        self.files.insert(key, file);
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// URL for `key`, or `None` when the key is unknown.
    pub fn resolve(&self, key: &str) -> Option<String> {
        let file = self.files.get(key)?;
        if self.base.is_empty() {
            Some(file.to_string())
        } else {
            Some(format!("{}/{}", self.base, file))
        }
    }
}

impl Default for AssetRegistry {
    fn default() -> Self {
        Self::with_defaults(DEFAULT_ASSET_BASE)
    }
}
