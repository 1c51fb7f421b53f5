pub mod config {
    use std::path::Path;

    use anyhow::Context as _;
    use kestrel_state::{QueryParams, SortOrder};
    use serde::{Deserialize, Serialize, de::DeserializeOwned};

    /// Load a TOML config file, falling back to `T::default()` if it doesn't exist.
    pub fn load_config<T: Default + DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents)
                .with_context(|| format!("failed to parse {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("no config file at {}, using defaults", path.display());
                Ok(T::default())
            }
            Err(e) => Err(e).with_context(|| format!("failed to read {}", path.display())),
        }
    }

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    #[serde(default)]
    pub struct Server {
        pub base_url: String,
        pub username: String,
        pub password: String,
    }
    impl Default for Server {
        fn default() -> Self {
            Self {
                base_url: "http://localhost:4533".to_string(),
                username: "YOUR_USERNAME".to_string(),
                password: "YOUR_PASSWORD".to_string(),
            }
        }
    }

    /// The query and order a search view opens with when nothing else says otherwise.
    #[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
    #[serde(default)]
    pub struct Search {
        pub query: String,
        pub order: SortOrder,
    }
    impl Search {
        pub fn params(&self) -> QueryParams {
            QueryParams {
                query: self.query.clone(),
                order: self.order,
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[derive(Debug, Default, Deserialize, PartialEq)]
        #[serde(default)]
        struct TestConfig {
            server: Server,
            search: Search,
        }

        #[test]
        fn missing_file_gives_defaults() {
            let config: TestConfig =
                load_config(Path::new("definitely/not/a/real/kestrel.toml")).unwrap();
            assert_eq!(config, TestConfig::default());
        }

        #[test]
        fn partial_sections_fill_in_defaults() {
            let config: TestConfig = toml::from_str(
                r#"
                [server]
                base_url = "https://music.example.com"

                [search]
                order = "desc"
                "#,
            )
            .unwrap();
            assert_eq!(config.server.base_url, "https://music.example.com");
            assert_eq!(config.server.username, "YOUR_USERNAME");
            assert_eq!(config.search.query, "");
            assert_eq!(config.search.order, SortOrder::Descending);
        }

        #[test]
        fn malformed_file_is_an_error() {
            let path = std::env::temp_dir().join(format!(
                "kestrel-shared-malformed-{}.toml",
                std::process::id()
            ));
            std::fs::write(&path, "[server\nbase_url = ").unwrap();
            let result = load_config::<TestConfig>(&path);
            std::fs::remove_file(&path).unwrap();
            assert!(result.is_err());
        }
    }
}
