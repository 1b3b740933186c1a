use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub storage_path: String,
    pub db_path: String,
    pub static_dir: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let storage_path = env::var("CAREHUB_STORAGE_PATH").unwrap_or("./".to_string());
        let db_path = format!("{}/db", storage_path);
        let static_dir =
            env::var("CAREHUB_STATIC_DIR").unwrap_or_else(|_| "./web-ui".to_string());

        Self {
            storage_path,
            db_path,
            static_dir,
        }
    }
}
