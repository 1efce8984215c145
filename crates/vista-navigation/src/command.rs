//! Toolbar commands

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationCommand {
    Back,
    Forward,
    Reload,
}

impl NavigationCommand {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavigationCommand::Back => "back",
            NavigationCommand::Forward => "forward",
            NavigationCommand::Reload => "reload",
        }
    }
}

impl std::fmt::Display for NavigationCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_names() {
        assert_eq!(NavigationCommand::Back.to_string(), "back");
        assert_eq!(NavigationCommand::Forward.to_string(), "forward");
        assert_eq!(NavigationCommand::Reload.to_string(), "reload");
    }

    #[test]
    fn test_command_from_json() {
        let command: NavigationCommand = serde_json::from_str(r#""reload""#).unwrap();
        assert_eq!(command, NavigationCommand::Reload);
        assert!(serde_json::from_str::<NavigationCommand>(r#""stop""#).is_err());
    }
}
