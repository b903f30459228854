use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_ROOMS: u32 = 100;

// Manager configuration options
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ManagerConfig {
    // Room threshold used by `find_with_default_min_rooms`
    pub default_min_rooms: u32,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            default_min_rooms: DEFAULT_MIN_ROOMS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold() {
        assert_eq!(ManagerConfig::default().default_min_rooms, 100);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: ManagerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ManagerConfig::default());

        let config: ManagerConfig =
            serde_json::from_str(r#"{"default_min_rooms": 150}"#).unwrap();
        assert_eq!(config.default_min_rooms, 150);
    }
}
