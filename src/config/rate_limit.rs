use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitRule {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitRule {
    const fn new(per_second: u64, burst_size: u32) -> Self {
        Self {
            per_second,
            burst_size,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RateLimitConfig {
    pub enabled: bool,
    pub auth: RateLimitRule,
    pub public_read: RateLimitRule,
    pub protected: RateLimitRule,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            auth: RateLimitRule::new(5, 10),
            public_read: RateLimitRule::new(30, 60),
            protected: RateLimitRule::new(10, 20),
        }
    }
}

impl RateLimitConfig {
    /// `RATE_LIMIT_ENABLED` toggles the layers; `RATE_LIMIT_CONFIG` overrides
    /// rules, either globally ("10:20") or per group
    /// ("auth=5:10,public=30:60,protected=10:20").
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(raw) = env::var("RATE_LIMIT_ENABLED") {
            cfg.enabled = matches!(
                raw.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            );
        }

        if let Ok(raw) = env::var("RATE_LIMIT_CONFIG") {
            match parse_rate_limit_config(&raw) {
                Ok(parsed) => cfg.apply(parsed),
                Err(err) => tracing::warn!("Invalid RATE_LIMIT_CONFIG '{}': {}", raw, err),
            }
        }

        cfg
    }

    fn apply(&mut self, parsed: Vec<(Group, RateLimitRule)>) {
        for (group, rule) in parsed {
            match group {
                Group::All => {
                    self.auth = rule;
                    self.public_read = rule;
                    self.protected = rule;
                }
                Group::Auth => self.auth = rule,
                Group::PublicRead => self.public_read = rule,
                Group::Protected => self.protected = rule,
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Group {
    All,
    Auth,
    PublicRead,
    Protected,
}

fn parse_rate_limit_config(raw: &str) -> Result<Vec<(Group, RateLimitRule)>, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("empty value".to_string());
    }

    if !trimmed.contains('=') {
        return Ok(vec![(Group::All, parse_rule(trimmed)?)]);
    }

    let mut parsed = Vec::new();
    for item in trimmed.split(',').filter(|s| !s.trim().is_empty()) {
        let (name, raw_rule) = item
            .trim()
            .split_once('=')
            .ok_or_else(|| format!("invalid item '{}', expected name=per:burst", item.trim()))?;
        let group = match name.trim().to_ascii_lowercase().as_str() {
            "auth" => Group::Auth,
            "public" | "public_read" | "public-read" => Group::PublicRead,
            "protected" => Group::Protected,
            other => return Err(format!("unknown group '{}'", other)),
        };
        parsed.push((group, parse_rule(raw_rule.trim())?));
    }

    Ok(parsed)
}

fn parse_rule(raw: &str) -> Result<RateLimitRule, String> {
    let (per_second_raw, burst_raw) = raw
        .split_once(':')
        .ok_or_else(|| format!("invalid rule '{}', expected per:burst", raw))?;

    let per_second: u64 = per_second_raw
        .trim()
        .parse()
        .map_err(|_| format!("invalid per_second '{}'", per_second_raw.trim()))?;
    let burst_size: u32 = burst_raw
        .trim()
        .parse()
        .map_err(|_| format!("invalid burst_size '{}'", burst_raw.trim()))?;

    if per_second == 0 || burst_size == 0 {
        return Err("per_second and burst_size must be > 0".to_string());
    }

    Ok(RateLimitRule::new(per_second, burst_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_global_rule() {
        let mut cfg = RateLimitConfig::default();
        cfg.apply(parse_rate_limit_config("12:24").unwrap());
        assert_eq!(cfg.auth, RateLimitRule::new(12, 24));
        assert_eq!(cfg.public_read, RateLimitRule::new(12, 24));
        assert_eq!(cfg.protected, RateLimitRule::new(12, 24));
    }

    #[test]
    fn parse_grouped_rules() {
        let mut cfg = RateLimitConfig::default();
        cfg.apply(parse_rate_limit_config("auth=1:2,public=3:4,protected=5:6").unwrap());
        assert_eq!(cfg.auth, RateLimitRule::new(1, 2));
        assert_eq!(cfg.public_read, RateLimitRule::new(3, 4));
        assert_eq!(cfg.protected, RateLimitRule::new(5, 6));
    }

    #[test]
    fn parse_invalid_rule() {
        let err = parse_rate_limit_config("auth=abc").unwrap_err();
        assert!(err.contains("invalid rule"));
    }

    #[test]
    fn zero_rule_rejected() {
        assert!(parse_rate_limit_config("0:5").is_err());
    }
}
