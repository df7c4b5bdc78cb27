use clap::Parser;

/// prepbot — interview preparation assistant in your terminal.
#[derive(Parser, Debug)]
#[command(name = "prepbot", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (e.g. "prepbot=debug").
    #[arg(long)]
    pub log_level: Option<String>,

    /// Chat backend base URL, overriding `gateway.base_url`.
    #[arg(long)]
    pub base_url: Option<String>,

    /// Email to identify as, instead of reading the user record.
    #[arg(long)]
    pub email: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_overrides() {
        let args = Args::parse_from([
            "prepbot",
            "--base-url",
            "https://prep.example.com/api",
            "--email",
            "me@example.com",
            "--log-level",
            "prepbot=debug",
        ]);
        assert_eq!(args.base_url.as_deref(), Some("https://prep.example.com/api"));
        assert_eq!(args.email.as_deref(), Some("me@example.com"));
        assert_eq!(args.log_level.as_deref(), Some("prepbot=debug"));
        assert!(args.config.is_none());
    }
}
