use chrono_tz::Tz;

/// Supplies the display timezone timestamps are bucketed in.
pub trait ITimezoneProvider: Send + Sync {
    /// `None` when the host has no usable timezone configured.
    fn timezone(&self) -> Option<Tz>;
}

/// A provider that always answers with the same zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTimezone(pub Tz);

impl ITimezoneProvider for FixedTimezone {
    fn timezone(&self) -> Option<Tz> {
        Some(self.0)
    }
}

/// A provider backed by an IANA zone name, e.g. from host configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedTimezone(pub String);

impl ITimezoneProvider for NamedTimezone {
    fn timezone(&self) -> Option<Tz> {
        match self.0.parse::<Tz>() {
            Ok(tz) => Some(tz),
            Err(_) => {
                tracing::warn!(timezone = %self.0, "unknown timezone name");
                None
            }
        }
    }
}

/// Resolve the provider's zone, falling back to UTC.
pub fn resolve_timezone(provider: &dyn ITimezoneProvider) -> Tz {
    provider.timezone().unwrap_or(Tz::UTC)
}
