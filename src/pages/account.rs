use leptos::*;
use leptos_router::use_location;

use crate::components::{account_tabs::AccountTabs, navbar::Navbar};
use crate::utils::query::single_query_value;

/// `/account`. Forwards a single `tab` query value to the tab switcher.
#[component]
pub fn AccountPage() -> impl IntoView {
    let location = use_location();
    let initial_tab = location
        .search
        .with_untracked(|search| single_query_value(search, "tab"));

    view! {
        <Navbar/>
        <main class="account">
            <h1>{ "My account" }</h1>
            <AccountTabs initial_tab=initial_tab/>
        </main>
    }
}
