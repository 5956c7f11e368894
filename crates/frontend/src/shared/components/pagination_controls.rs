use leptos::prelude::*;

use crate::shared::icons::icon;

/// Pagination controls for server-side paginated lists (1-indexed pages,
/// matching the `{items, total, page, size, pages}` envelope).
#[component]
pub fn PaginationControls(
    #[prop(into)] page: Signal<i64>,
    #[prop(into)] pages: Signal<i64>,
    #[prop(into)] total: Signal<i64>,
    on_page_change: Callback<i64>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=move || page.get() <= 1
                title="Primera página"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let p = page.get();
                    if p > 1 {
                        on_page_change.run(p - 1);
                    }
                }
                disabled=move || page.get() <= 1
                title="Página anterior"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || format!("{} / {} ({})", page.get(), pages.get().max(1), total.get())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let p = page.get();
                    if p < pages.get() {
                        on_page_change.run(p + 1);
                    }
                }
                disabled=move || page.get() >= pages.get()
                title="Página siguiente"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let last = pages.get();
                    if last > 0 {
                        on_page_change.run(last);
                    }
                }
                disabled=move || page.get() >= pages.get()
                title="Última página"
            >
                {icon("chevrons-right")}
            </button>
        </div>
    }
}
