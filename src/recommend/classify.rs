use std::fmt;

const WEB_SEARCH_URL: &str = "https://www.google.com/search?q=";
const VIDEO_SEARCH_URL: &str = "https://www.youtube.com/results?search_query=";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Book,
    Activity,
    YouTube,
}

impl Category {
    const ALL: [Category; 3] = [Category::Book, Category::Activity, Category::YouTube];

    pub fn label(self) -> &'static str {
        match self {
            Category::Book => "Book",
            Category::Activity => "Activity",
            Category::YouTube => "YouTube",
        }
    }

    /// Lowercase line prefix, e.g. "book:"
    fn prefix(self) -> &'static str {
        match self {
            Category::Book => "book:",
            Category::Activity => "activity:",
            Category::YouTube => "youtube:",
        }
    }

    fn search_url(self, query: &str) -> String {
        let base = match self {
            Category::Book | Category::Activity => WEB_SEARCH_URL,
            Category::YouTube => VIDEO_SEARCH_URL,
        };
        format!("{}{}", base, urlencoding::encode(query))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One non-blank line of a recommendation reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    /// The line as the service wrote it, trimmed
    pub text: String,
    pub category: Option<Category>,
    pub url: Option<String>,
}

impl Recommendation {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            category: None,
            url: None,
        }
    }

    pub fn is_link(&self) -> bool {
        self.url.is_some()
    }
}

/// Classify every non-blank line of a reply
pub fn classify_recommendations(reply: &str) -> Vec<Recommendation> {
    reply.lines().filter_map(classify_line).collect()
}

/// Classify a single line. Blank lines yield None.
pub fn classify_line(line: &str) -> Option<Recommendation> {
    let text = line.trim();
    if text.is_empty() {
        return None;
    }

    let unstarred = strip_list_marker(text).replace('*', "");
    let cleaned = unstarred.trim().trim_start_matches('_');

    for category in Category::ALL {
        let prefix = category.prefix();
        let matches = cleaned
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix));
        if !matches {
            continue;
        }

        let query = cleaned[prefix.len()..].trim_start_matches('_').trim();
        if query.is_empty() {
            return Some(Recommendation::plain(text));
        }
        return Some(Recommendation {
            text: text.to_string(),
            category: Some(category),
            url: Some(category.search_url(query)),
        });
    }

    // Lines that only mention the platform still go to a video search
    if text.to_lowercase().contains("youtube") {
        return Some(Recommendation {
            text: text.to_string(),
            category: Some(Category::YouTube),
            url: Some(Category::YouTube.search_url(cleaned)),
        });
    }

    Some(Recommendation::plain(text))
}

/// Drop bullet and numbering markers: "* ", "- ", "• ", "2. ", "3) "
fn strip_list_marker(line: &str) -> &str {
    let line = line.trim_start_matches(|c: char| {
        matches!(c, '*' | '-' | '+' | '•' | '>' | '#') || c.is_whitespace()
    });

    let digits = line.len() - line.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits > 0 {
        let rest = &line[digits..];
        if let Some(rest) = rest.strip_prefix('.').or_else(|| rest.strip_prefix(')')) {
            return rest.trim_start();
        }
    }
    line
}
