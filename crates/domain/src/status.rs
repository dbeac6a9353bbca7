use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! status_enum {
    ($name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $text)]
                $variant,
            )+
            #[default]
            #[serde(rename = "unknown")]
            Unknown,
        }

        impl $name {
            pub fn to_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                    $name::Unknown => "unknown",
                }
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    "unknown" => Ok($name::Unknown),
                    other => Err(format!(
                        "invalid {} '{}'",
                        stringify!($name),
                        other
                    )),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.to_str())
            }
        }
    };
}

status_enum!(UptimeStatus { Up => "up", Down => "down" });
status_enum!(BlockStatus { Blocked => "blocked", NotBlocked => "not_blocked" });
status_enum!(EdgeCacheStatus { Active => "active", Inactive => "inactive" });
status_enum!(IndexStatus { Indexed => "indexed", NotIndexed => "not_indexed" });

/// One independently-checked status dimension of a domain record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusFacet<S> {
    pub status: S,
    pub last_checked: Option<DateTime<Utc>>,
}

impl<S> StatusFacet<S> {
    pub fn checked(status: S, at: DateTime<Utc>) -> Self {
        Self {
            status,
            last_checked: Some(at),
        }
    }
}

/// Block-status facet; `blocked_id` is only ever set while `status` is blocked.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BlockFacet {
    pub status: BlockStatus,
    pub blocked_id: Option<String>,
    pub last_checked: Option<DateTime<Utc>>,
}

impl BlockFacet {
    pub fn blocked(marker: String, at: DateTime<Utc>) -> Self {
        Self {
            status: BlockStatus::Blocked,
            blocked_id: Some(marker),
            last_checked: Some(at),
        }
    }

    pub fn accessible(at: DateTime<Utc>) -> Self {
        Self {
            status: BlockStatus::NotBlocked,
            blocked_id: None,
            last_checked: Some(at),
        }
    }

    pub fn is_blocked(&self) -> bool {
        self.status == BlockStatus::Blocked
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DomainStatus {
    pub uptime: StatusFacet<UptimeStatus>,
    pub nawala: BlockFacet,
    pub cloudflare: StatusFacet<EdgeCacheStatus>,
    pub google: StatusFacet<IndexStatus>,
}

/// A single observation reported by the external checking system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanObservation {
    pub blocked: bool,
    pub marker: Option<String>,
}

impl ScanObservation {
    /// Anything other than the literal `"blocked"` counts as accessible.
    pub fn from_status(status: &str, marker: Option<String>) -> Self {
        Self {
            blocked: status == "blocked",
            marker,
        }
    }
}

/// Partial manual edit of the status facets. Each present facet is re-stamped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusPatch {
    pub uptime: Option<UptimeStatus>,
    pub nawala: Option<(BlockStatus, Option<String>)>,
    pub cloudflare: Option<EdgeCacheStatus>,
    pub google: Option<IndexStatus>,
}

impl StatusPatch {
    pub fn is_empty(&self) -> bool {
        self.uptime.is_none()
            && self.nawala.is_none()
            && self.cloudflare.is_none()
            && self.google.is_none()
    }

    /// Applies the patch onto `status`, stamping every touched facet with `at`.
    pub fn apply_to(&self, status: &mut DomainStatus, at: DateTime<Utc>) {
        if let Some(s) = self.uptime {
            status.uptime = StatusFacet::checked(s, at);
        }
        if let Some((s, ref marker)) = self.nawala {
            status.nawala = BlockFacet {
                status: s,
                blocked_id: if s == BlockStatus::Blocked {
                    marker.clone()
                } else {
                    None
                },
                last_checked: Some(at),
            };
        }
        if let Some(s) = self.cloudflare {
            status.cloudflare = StatusFacet::checked(s, at);
        }
        if let Some(s) = self.google {
            status.google = StatusFacet::checked(s, at);
        }
    }
}
