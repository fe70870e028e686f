use yew::prelude::*;
use yew_router::prelude::*;
use serde::{Serialize, Deserialize};

/// Listing query, as found in location url
#[derive(Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Total page count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<u32>,
}

impl ListQuery {
    /// Query string with leading `?`, or empty string if there is no query
    pub fn to_query_string(&self) -> String {
        match serde_urlencoded::to_string(self) {
            Ok(q) if !q.is_empty() => format!("?{q}"),
            _ => String::new(),
        }
    }
}

/// Retrieve listing query from location url
#[hook]
pub fn use_list_query() -> ListQuery {
    use_location()
        .and_then(|location| location.query().ok())
        .unwrap_or_default()
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Index,
    #[not_found]
    #[at("/not_found")]
    NotFound,
}

#[test]
fn test_query_string() {
    let query = ListQuery {
        keywords: Some("graph nets".into()),
        page: Some(3),
        pages: None,
    };
    assert_eq!(query.to_query_string(), "?keywords=graph+nets&page=3");
    assert_eq!(ListQuery::default().to_query_string(), "");
}
