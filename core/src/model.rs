use std::fmt;

pub type TileId = usize;

pub const WILDCARD_TAG: &str = "all";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImagePhase {
    Pending,
    Loaded,
    Failed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterTag {
    All,
    Category(String),
}

impl FilterTag {
    pub fn parse(value: &str) -> Self {
        if value == WILDCARD_TAG {
            FilterTag::All
        } else {
            FilterTag::Category(value.to_string())
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            FilterTag::All => true,
            FilterTag::Category(tag) => tag == category,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FilterTag::All => WILDCARD_TAG,
            FilterTag::Category(tag) => tag,
        }
    }
}

impl fmt::Display for FilterTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TileState {
    pub category: String,
    pub phase: ImagePhase,
    pub shown: bool,
    pub span: Option<u32>,
}

impl TileState {
    pub fn new(category: String) -> Self {
        Self {
            category,
            phase: ImagePhase::Pending,
            shown: false,
            span: None,
        }
    }
}
