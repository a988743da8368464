
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Asset {
    Found(PathBuf),
    Placeholder(String),
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Asset::Found(path) => write!(f, "[🖼 {}]", path.display()),
            Asset::Placeholder(text) => f.write_str(text),
        }
    }
}

/// Directory the page images are looked up in.
#[derive(Debug, Clone)]
pub struct AssetDir {
    root: PathBuf,
}

impl AssetDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// A missing image turns into `[IMAGEN NAME.PNG]`.
    pub fn image(&self, file_name: &str) -> Asset {
        self.lookup(file_name, || format!("[IMAGEN {}]", file_name.to_uppercase()))
    }

    pub fn logo(&self) -> Asset {
        self.lookup("logo.png", || "[LOGO]".to_string())
    }

    fn lookup(&self, file_name: &str, placeholder: impl FnOnce() -> String) -> Asset {
        let path = self.root.join(file_name);
        if path.is_file() {
            Asset::Found(path)
        } else {
            Asset::Placeholder(placeholder())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_assets_become_placeholders() {
        let assets = AssetDir::new("/nonexistent/lavanderos/assets");
        assert_eq!(assets.image("gerente.png"), Asset::Placeholder("[IMAGEN GERENTE.PNG]".to_string()));
        assert_eq!(assets.logo().to_string(), "[LOGO]");
    }

    #[test]
    fn present_assets_resolve() {
        let dir = std::env::temp_dir().join(format!("lavanderos-assets-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("logo.png"), b"png").unwrap();

        let assets = AssetDir::new(&dir);
        assert_eq!(assets.logo(), Asset::Found(dir.join("logo.png")));
        assert!(matches!(assets.image("inventario.png"), Asset::Placeholder(_)));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
