use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    pub data_dir: String,
    pub frontend_dir: String,
    pub cors_origin: String,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        Ok(Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
            data_dir: std::env::var("DATA_DIR").unwrap_or_else(|_| "data".into()),
            frontend_dir: std::env::var("FRONTEND_DIR")
                .unwrap_or_else(|_| "dist/public".into()),
            cors_origin: std::env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5173,http://127.0.0.1:5173".into()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5000,
            data_dir: "data".into(),
            frontend_dir: "dist/public".into(),
            cors_origin: "http://localhost:5173,http://127.0.0.1:5173".into(),
        }
    }
}
