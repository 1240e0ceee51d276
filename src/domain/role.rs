text_enum! {
    /// What a registered user does on the marketplace.
    pub enum Role {
        Owner => "owner",
        Walker => "walker",
    }
}

impl Role {
    /// Page the client is sent to after a successful login.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Role::Owner => "/owner-dashboard.html",
            Role::Walker => "/walker-dashboard.html",
        }
    }
}
