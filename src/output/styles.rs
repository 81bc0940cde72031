pub struct TreeChars {
    pub branch: &'static str,
    pub last: &'static str,
    pub pipe: &'static str,
    pub blank: &'static str,
}

impl Default for TreeChars {
    fn default() -> Self {
        Self {
            branch: "├── ",
            last: "└── ",
            pipe: "│   ",
            blank: "    ",
        }
    }
}
