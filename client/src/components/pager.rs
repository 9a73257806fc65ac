//! Previous/next pager for paginated listings.

use leptos::prelude::*;

use crate::state::recipes::Pagination;

/// Emits the requested page number through `on_page`. Both buttons are
/// disabled while `loading` is set.
#[component]
pub fn Pager(
    #[prop(into)] pagination: Signal<Pagination>,
    #[prop(into)] loading: Signal<bool>,
    on_page: Callback<u32>,
) -> impl IntoView {
    let prev_disabled = move || !pagination.get().can_prev(loading.get());
    let next_disabled = move || !pagination.get().can_next(loading.get());

    view! {
        <div class="pager">
            <button
                class="btn pager__prev"
                disabled=prev_disabled
                on:click=move |_| on_page.run(pagination.get_untracked().page.saturating_sub(1).max(1))
            >
                "Prev"
            </button>
            <span class="pager__label">{move || pagination.get().label()}</span>
            <button
                class="btn pager__next"
                disabled=next_disabled
                on:click=move |_| on_page.run(pagination.get_untracked().page.saturating_add(1))
            >
                "Next"
            </button>
        </div>
    }
}
