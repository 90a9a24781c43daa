use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_minutes: i64,
    pub refresh_ttl_minutes: i64,
}

/// USDA FoodData Central search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct UsdaConfig {
    pub api_key: String,
    pub search_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierConfig {
    /// Classification is disabled when no key is configured.
    pub api_key: Option<String>,
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
    pub usda: UsdaConfig,
    pub classifier: ClassifierConfig,
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.into())
}

fn env_parse_or(key: &str, default: i64) -> i64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<i64>().ok())
        .unwrap_or(default)
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET")?,
            issuer: env_or("JWT_ISSUER", "platewise"),
            audience: env_or("JWT_AUDIENCE", "platewise-users"),
            ttl_minutes: env_parse_or("JWT_TTL_MINUTES", 60),
            refresh_ttl_minutes: env_parse_or("JWT_REFRESH_TTL_MINUTES", 60 * 24 * 14),
        };
        let usda = UsdaConfig {
            api_key: env_or("USDA_API_KEY", "DEMO_KEY"),
            search_url: env_or("USDA_API_URL", "https://api.nal.usda.gov/fdc/v1/foods/search"),
        };
        let classifier = ClassifierConfig {
            api_key: std::env::var("SPOONACULAR_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            base_url: env_or("SPOONACULAR_API_URL", "https://api.spoonacular.com"),
        };
        Ok(Self {
            database_url,
            jwt,
            usda,
            classifier,
        })
    }
}
