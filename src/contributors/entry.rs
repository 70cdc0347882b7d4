//! Parsing of `Display Name <email>` history entries.

/// One `(display name, email)` pair observed on a single commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawContribution {
    /// Display name with stray angle brackets removed.
    pub name: String,
    /// Grouping key; never empty.
    pub email: String,
}

impl RawContribution {
    /// Parses a `Display Name <email>` entry.
    ///
    /// The split happens at the right-most `<`. Entries without one use the
    /// whole trimmed string, minus any stray `>`, as both name and email. An empty `<>` falls back
    /// to the display name as the key. Blank entries yield `None`.
    pub fn parse(entry: &str) -> Option<Self> {
        let entry = entry.trim();
        if entry.is_empty() {
            return None;
        }

        let Some((name_part, email_part)) = entry.rsplit_once('<') else {
            let name = strip_brackets(entry);
            return (!name.is_empty()).then(|| Self {
                email: name.clone(),
                name,
            });
        };

        let name = strip_brackets(name_part);
        let email = strip_brackets(email_part);

        match (name.is_empty(), email.is_empty()) {
            (true, true) => None,
            (false, true) => Some(Self {
                email: name.clone(),
                name,
            }),
            (true, false) => Some(Self {
                name: email.clone(),
                email,
            }),
            (false, false) => Some(Self { name, email }),
        }
    }
}

fn strip_brackets(s: &str) -> String {
    s.replace(['<', '>'], "").trim().to_string()
}
