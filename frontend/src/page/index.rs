use crate::component::paginator::Paginator;

use super::prelude::*;

/// Page count used when url does not specify one
const DEFAULT_PAGE_COUNT: u32 = 20;

#[function_component]
pub fn Index() -> Html {
    let query = use_list_query();

    // Pages start from 1
    let current = query.page.unwrap_or(1);
    let last = query.pages.unwrap_or(DEFAULT_PAGE_COUNT).max(1);
    let path = query.to_query_string();

    html! {
        <div class="index-page">
            <div class="label">
                if let Some(keywords) = &query.keywords {
                    { "Results for \"" }{ keywords }{ "\", " }
                }
                { "page " }{ current }{ " of " }{ last }
            </div>
            <div class="paginator-bottom">
                <Paginator {current} {last} path={path} />
            </div>
        </div>
    }
}
