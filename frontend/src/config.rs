pub struct Config;

impl Config {
    /// Origin of the VERSUS analytics backend. There is no same-origin
    /// proxy for this app; every call goes to the deployed service unless
    /// a build sets VERSUS_API_URL (useful for staging copies).
    pub fn api_base_url() -> String {
        option_env!("VERSUS_API_URL")
            .unwrap_or("https://admin2-neon.vercel.app")
            .to_string()
    }

    /// Feedback lives behind a separate deployment with its own origin
    pub fn feedback_base_url() -> String {
        option_env!("VERSUS_FEEDBACK_URL")
            .unwrap_or("https://vbackk.vercel.app")
            .to_string()
    }

    /// Identity service handling onboarding signups
    pub fn identity_base_url() -> String {
        option_env!("VERSUS_IDENTITY_URL")
            .unwrap_or("https://admin2-neon.vercel.app")
            .to_string()
    }

    /// Shared admin passphrase for the console gate. A build can override
    /// it with VERSUS_ADMIN_PASSPHRASE; there are no per-admin accounts.
    pub fn admin_passphrase() -> String {
        option_env!("VERSUS_ADMIN_PASSPHRASE")
            .unwrap_or("PBRADMIN2024")
            .to_string()
    }
}
