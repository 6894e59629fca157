/// Default host of the user-registration API.
const DEFAULT_BACKEND_URL: &str = "https://core-backend-znph.onrender.com";

/// Base URL of the registration backend. Set `BEMLIDOS_BACKEND_URL` when
/// building to point a local `trunk serve` at another host.
pub fn get_backend_url() -> &'static str {
    match option_env!("BEMLIDOS_BACKEND_URL") {
        Some(url) if !url.is_empty() => url,
        _ => DEFAULT_BACKEND_URL,
    }
}

pub fn users_endpoint() -> String {
    users_endpoint_for(get_backend_url())
}

fn users_endpoint_for(base: &str) -> String {
    format!("{}/v1/users", base.trim_end_matches('/'))
}

// Toasts
pub const TOAST_DURATION_MS: u32 = 4_000;
pub const MAX_VISIBLE_TOASTS: usize = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint_is_the_hosted_users_api() {
        assert_eq!(
            users_endpoint_for(DEFAULT_BACKEND_URL),
            "https://core-backend-znph.onrender.com/v1/users"
        );
    }

    #[test]
    fn trailing_slash_on_base_is_dropped() {
        assert_eq!(
            users_endpoint_for("http://localhost:8080/"),
            "http://localhost:8080/v1/users"
        );
    }

    #[test]
    fn users_endpoint_targets_v1_users() {
        assert!(users_endpoint().ends_with("/v1/users"));
        assert!(!users_endpoint().contains("//v1"));
    }
}
