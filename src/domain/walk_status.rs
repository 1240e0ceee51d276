text_enum! {
    /// Lifecycle of a walk request: open -> accepted -> completed, or cancelled.
    pub enum WalkRequestStatus {
        Open => "open",
        Accepted => "accepted",
        Completed => "completed",
        Cancelled => "cancelled",
    }
}

text_enum! {
    /// State of a walker's application to a walk request.
    pub enum ApplicationStatus {
        Pending => "pending",
        Accepted => "accepted",
        Rejected => "rejected",
    }
}
