text_enum! {
    pub enum DogSize {
        Small => "small",
        Medium => "medium",
        Large => "large",
    }
}
