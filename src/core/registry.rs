// The command registry: turns the host's option identifiers into button descriptors.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    // State is queried from and applied by the native formatting capability.
    Inline,
    // State comes from the ancestor chain; applied by the block transformer.
    Block,
    Link,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Inline => "inline",
            Category::Block => "block",
            Category::Link => "link",
        }
    }
}

/// One configured toolbar button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattingOption {
    /// The identifier the host configured (`"justify-left"`).
    pub id: String,
    /// Display name, also the native command id for inline buttons (`"justifyLeft"`).
    pub name: String,
    pub category: Category,
    pub has_icon: bool,
}

// "indent" -> "Indent"
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// "justify-left" -> "justifyLeft"
fn camel_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '-' {
            match chars.next() {
                Some(next) => out.extend(next.to_uppercase()),
                None => out.push(c),
            }
        } else {
            out.push(c);
        }
    }
    out
}

fn lookup(id: &str) -> Option<FormattingOption> {
    let (name, category, has_icon) = match id {
        "bold" | "italic" | "underline" | "strikethrough" => (id.to_string(), Category::Inline, true),
        "indent" | "outdent" => (capitalize(id), Category::Inline, true),
        "clear" | "blockquote" => (id.to_string(), Category::Block, true),
        "justify-left" | "justify-right" | "justify-center" | "justify-full" => {
            (camel_case(id), Category::Inline, true)
        }
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => (id.to_string(), Category::Block, false),
        "link" => (id.to_string(), Category::Link, true),
        _ => return None,
    };
    Some(FormattingOption {
        id: id.to_string(),
        name,
        category,
        has_icon,
    })
}

/// Expand option identifiers in display order. Unknown identifiers are dropped.
pub fn expand<I, S>(option_names: I) -> Vec<FormattingOption>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    option_names
        .into_iter()
        .filter_map(|name| lookup(name.as_ref()))
        .collect()
}
