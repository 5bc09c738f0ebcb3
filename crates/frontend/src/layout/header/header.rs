use contracts::shared::page::{Page, NAV_ITEMS};
use leptos::prelude::*;

use crate::layout::global_context::use_app;
use crate::shared::icons::icon;

#[component]
pub fn Header() -> impl IntoView {
    let app = use_app();
    let (menu_open, set_menu_open) = signal(false);

    let go = move |page: Page| {
        app.navigate(page);
        set_menu_open.set(false);
    };

    let nav_links = move || {
        NAV_ITEMS
            .iter()
            .map(|item| {
                let page = item.page;
                let label = item.label;
                view! {
                    <button
                        class=move || if app.page() == page { "nav__link nav__link--active" } else { "nav__link" }
                        on:click=move |_| go(page)
                    >
                        {move || app.text(label)}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <header data-zone="header" class="site-header">
            <div class="site-header__content">
                <button class="site-header__logo" on:click=move |_| go(Page::Home)>
                    <span class="logo__mark">"XTREME"</span>
                    <span class="logo__sub">"PLAY"</span>
                </button>

                <nav class="nav nav--desktop">{nav_links}</nav>

                <div class="site-header__actions">
                    <button class="cart-button" aria-label="Cart" on:click=move |_| go(Page::Cart)>
                        {icon("fa-cart-shopping")}
                        <Show when=move || { app.cart_count() > 0 }>
                            <span class="cart-button__badge">{move || app.cart_count()}</span>
                        </Show>
                    </button>
                    <button class="button button--ghost lang-toggle" on:click=move |_| app.toggle_language()>
                        {move || app.lang().switch_label()}
                    </button>
                    <button
                        class="button button--ghost menu-toggle"
                        aria-label="Menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { icon("fa-xmark") } else { icon("fa-bars") }}
                    </button>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <nav class="nav nav--mobile">{nav_links}</nav>
            </Show>
        </header>
    }
}
