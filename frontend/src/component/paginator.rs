use super::prelude::*;
use super::layout::use_layout_mode;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub current: u32,
    #[prop_or(1)]
    pub first: u32,
    pub last: u32,
    /// Current request path, page links are derived from it
    #[prop_or_default]
    pub path: AttrValue,

    #[prop_or(MOBILE_MAX_WIDTH)]
    pub mobile_max_width: u32,
    #[prop_or_default]
    pub middle_labels: MiddleLabels,
}

/// Inline style of an element that may be hidden
fn display(visible: bool) -> Option<&'static str> {
    (!visible).then_some("display: none")
}

#[function_component]
pub fn Paginator(props: &Props) -> Html {
    let layout = use_layout_mode(props.mobile_max_width);

    let Some(range) = PageRange::new(props.first, props.last) else {
        return html! {};
    };

    let pagination = Pagination::new(props.current, range, &props.path)
        .with_middle_labels(props.middle_labels);
    let state = PaginatorState::rendered(&pagination, layout);

    let slot = |idx: usize| {
        let slot = &state.slots[idx];
        let class = classes!("num-item", slot.active.then_some("active"));
        html! {
            <li {class} style={display(slot.visible)}>
                <a href={slot.href.clone()}>{ slot.label }</a>
            </li>
        }
    };

    let ellipsis = |visible: bool, class: &'static str| html! {
        <li class={classes!("ellipsis", class)} style={display(visible)}>
            { "…" }
        </li>
    };

    let path = &pagination.path;
    let current = props.current;
    let prev = (current > range.first).then(|| path.href(current - 1));
    let next = (current < range.last).then(|| path.href(current + 1));

    html! {
        <div class="paginator">
            <ul class="desktop" style={display(!state.layout.is_mobile())}>
                { slot(0) }
                { ellipsis(state.ellipsis.show_leading, "first-ellipsis") }
                { for (1..SLOT_COUNT - 1).map(slot) }
                { ellipsis(state.ellipsis.show_trailing, "last-ellipsis") }
                { slot(SLOT_COUNT - 1) }
            </ul>
            <ul class="mobile" style={display(state.layout.is_mobile())}>
                if let Some(href) = prev {
                    <li class="prev"><a {href}>{ "‹" }</a></li>
                }
                <li class="num-item active">
                    { current }{ " of " }{ range.last }
                </li>
                if let Some(href) = next {
                    <li class="next"><a {href}>{ "›" }</a></li>
                }
            </ul>
        </div>
    }
}
