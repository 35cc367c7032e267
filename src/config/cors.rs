use std::env;

/// Cross-origin policy the pipeline applies.
///
/// The allow-list variant reflects credentialed headers for configured
/// origins only; the permissive variant answers any origin and never
/// reflects credentials.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CorsPolicy {
    AllowList(Vec<String>),
    AllowAny,
}

#[derive(Clone, Debug)]
pub struct CorsConfig {
    pub policy: CorsPolicy,
}

impl CorsConfig {
    pub fn from_env() -> Self {
        let allow_any = env::var("CORS_ALLOW_ANY")
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        if allow_any {
            return Self {
                policy: CorsPolicy::AllowAny,
            };
        }

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Self {
            policy: CorsPolicy::AllowList(allowed_origins),
        }
    }
}
