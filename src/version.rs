// src/version.rs
use regex::Regex;
use std::sync::OnceLock;

/// Version components extracted from a dotted-numeric version string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    pub const ZERO: Self = Self {
        major: 0,
        minor: 0,
        patch: 0,
    };

    /// Parse the leading `major.minor.patch` triple of `raw`.
    ///
    /// Trailing suffixes (`1.2.3-rc.1`, `1.2.3+build5`) are discarded.
    /// Returns `None` when the string does not start with three dotted
    /// numbers or a component does not fit in `u32`.
    pub fn parse(raw: &str) -> Option<Self> {
        static RE: OnceLock<Regex> = OnceLock::new();
        let re = RE.get_or_init(|| Regex::new(r"^(\d+)\.(\d+)\.(\d+)").unwrap());
        let caps = re.captures(raw)?;
        Some(Self {
            major: caps[1].parse().ok()?,
            minor: caps[2].parse().ok()?,
            patch: caps[3].parse().ok()?,
        })
    }

    /// Composite encoding `major * 10000 + minor * 100 + patch`.
    ///
    /// Minor and patch are assumed to fit in two decimal digits; a value of
    /// 100 or more spills into the neighbouring field. Downstream consumers
    /// compare against this exact formula, so the encoding is not widened.
    pub fn as_int(&self) -> u32 {
        self.major * 10000 + self.minor * 100 + self.patch
    }
}
