/// Backend reachability as last reported by the health probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HealthStatus {
    #[default]
    Loading,
    Healthy,
    Unhealthy,
}

impl HealthStatus {
    pub fn from_probe(reachable: bool) -> Self {
        if reachable {
            HealthStatus::Healthy
        } else {
            HealthStatus::Unhealthy
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HealthStatus::Loading => "Checking...",
            HealthStatus::Healthy => "Connected",
            HealthStatus::Unhealthy => "Disconnected",
        }
    }
}
