use crate::LinkType;
use serde::{Deserialize, Serialize};

const PLAN_PAGE: &str = "plan.php";
const TYPE_KEY: &str = "type";

/// A hyperlink embedded in a course cell.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub text: String,

    pub href: String,
}

impl Link {
    pub fn new(text: impl Into<String>, href: impl Into<String>) -> Link {
        Link {
            text: text.into(),
            href: href.into(),
        }
    }

    /// Reads the `type` code out of a `plan.php?...` href. Links pointing
    /// anywhere else, or carrying an unknown code, have no kind.
    pub fn kind(&self) -> Option<LinkType> {
        let start = self.href.find(PLAN_PAGE)?;
        let rest = &self.href[start + PLAN_PAGE.len()..];
        let query = &rest[rest.find('?')? + 1..];

        for pair in query.split('&') {
            // Scraped hrefs sometimes keep the entity-encoded separator.
            let pair = pair.strip_prefix("amp;").unwrap_or(pair);
            let (key, value) = match pair.split_once('=') {
                Some(kv) => kv,
                None => continue,
            };
            if key == TYPE_KEY {
                return serde_json::from_str::<LinkType>(value.trim()).ok();
            }
        }

        None
    }
}
