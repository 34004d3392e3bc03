/// What an element renders inside its box.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<super::Element>),
}

impl Content {
    pub fn is_none(&self) -> bool {
        matches!(self, Content::None)
    }

    /// Collect the plain text carried by this content, depth-first.
    pub fn plain_text(&self) -> String {
        match self {
            Content::None => String::new(),
            Content::Text(s) => s.clone(),
            Content::Children(children) => {
                let mut out = String::new();
                for child in children {
                    let text = child.content.plain_text();
                    if !text.is_empty() {
                        if !out.is_empty() {
                            out.push(' ');
                        }
                        out.push_str(&text);
                    }
                }
                out
            }
        }
    }
}

impl From<&str> for Content {
    fn from(s: &str) -> Self {
        Content::Text(s.to_string())
    }
}

impl From<String> for Content {
    fn from(s: String) -> Self {
        Content::Text(s)
    }
}
