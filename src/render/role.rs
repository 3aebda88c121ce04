use serde::Serialize;

/// Icon category shown next to a player's role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleIcon {
    Duelist,
    Sentinel,
    Controller,
    Initiator,
    Igl,
    Default,
}

impl RoleIcon {
    /// Map free-text role to an icon. Case-insensitive substring match, first
    /// rule wins: duelist, sentinel, controller/smoker, initiator, igl.
    pub fn from_role(role: &str) -> Self {
        let role = role.to_lowercase();

        if role.contains("duelist") {
            RoleIcon::Duelist
        } else if role.contains("sentinel") {
            RoleIcon::Sentinel
        } else if role.contains("controller") || role.contains("smoker") {
            RoleIcon::Controller
        } else if role.contains("initiator") {
            RoleIcon::Initiator
        } else if role.contains("igl") {
            RoleIcon::Igl
        } else {
            RoleIcon::Default
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RoleIcon::Duelist => "duelist",
            RoleIcon::Sentinel => "sentinel",
            RoleIcon::Controller => "controller",
            RoleIcon::Initiator => "initiator",
            RoleIcon::Igl => "igl",
            RoleIcon::Default => "default",
        }
    }

    pub fn icon_path(&self, base_path: &str) -> String {
        format!("{}/{}.svg", base_path.trim_end_matches('/'), self.as_str())
    }
}
