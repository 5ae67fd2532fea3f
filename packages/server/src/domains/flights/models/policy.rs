use anyhow::Result;
use serde::Serialize;

/// How per-source results are joined.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FanInPolicy {
    /// Any exhausted source fails the whole aggregation
    #[default]
    RequireAll,
    /// Keep the sources that answered, report the rest
    BestEffort,
}

impl std::fmt::Display for FanInPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FanInPolicy::RequireAll => write!(f, "require-all"),
            FanInPolicy::BestEffort => write!(f, "best-effort"),
        }
    }
}

impl std::str::FromStr for FanInPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "require-all" => Ok(FanInPolicy::RequireAll),
            "best-effort" => Ok(FanInPolicy::BestEffort),
            _ => Err(anyhow::anyhow!("Invalid fan-in policy: {}", s)),
        }
    }
}

/// Which offer survives when several share an identity.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum CollapsePolicy {
    /// Earliest offer in merge order wins
    KeepFirst,
    /// Latest offer in merge order wins, so later sources supersede earlier ones
    #[default]
    KeepLast,
}

impl std::fmt::Display for CollapsePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollapsePolicy::KeepFirst => write!(f, "keep-first"),
            CollapsePolicy::KeepLast => write!(f, "keep-last"),
        }
    }
}

impl std::str::FromStr for CollapsePolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "keep-first" => Ok(CollapsePolicy::KeepFirst),
            "keep-last" => Ok(CollapsePolicy::KeepLast),
            _ => Err(anyhow::anyhow!("Invalid collapse policy: {}", s)),
        }
    }
}
