use leptos::*;

use crate::components::reviews_list::ReviewsList;
use crate::models::review::Review;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AccountTab {
    #[default]
    Profile,
    Orders,
    Reviews,
}

impl AccountTab {
    pub const ALL: [AccountTab; 3] = [AccountTab::Profile, AccountTab::Orders, AccountTab::Reviews];

    pub fn as_str(self) -> &'static str {
        match self {
            AccountTab::Profile => "profile",
            AccountTab::Orders => "orders",
            AccountTab::Reviews => "reviews",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AccountTab::Profile => "Profile",
            AccountTab::Orders => "Orders",
            AccountTab::Reviews => "Reviews",
        }
    }

    /// Unknown or missing names open the default tab.
    pub fn from_param(param: Option<&str>) -> Self {
        Self::ALL
            .into_iter()
            .find(|tab| Some(tab.as_str()) == param)
            .unwrap_or_default()
    }
}

#[component]
pub fn AccountTabs(
    initial_tab: Option<String>,
    #[prop(optional)] reviews: Vec<Review>,
) -> impl IntoView {
    let (active, set_active) = create_signal(AccountTab::from_param(initial_tab.as_deref()));
    let reviews = store_value(reviews);

    view! {
        <section class="account-tabs" data-active-tab=move || active.get().as_str()>
            <nav role="tablist">
                {
                    AccountTab::ALL.into_iter().map(|tab| {
                        view! {
                            <button
                                type="button"
                                role="tab"
                                class:active=move || active.get() == tab
                                aria-selected=move || (active.get() == tab).to_string()
                                on:click=move |_| set_active.set(tab)
                            >
                                { tab.label() }
                            </button>
                        }
                    }).collect::<Vec<_>>()
                }
            </nav>
            <div role="tabpanel">
                {move || match active.get() {
                    AccountTab::Profile => view! {
                        <p>{ "Manage your name, email and saved addresses." }</p>
                    }.into_view(),
                    AccountTab::Orders => view! {
                        <p>{ "You have no orders yet." }</p>
                    }.into_view(),
                    AccountTab::Reviews => view! {
                        <ReviewsList reviews=reviews.get_value()/>
                    }.into_view(),
                }}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_names_map_to_tabs() {
        assert_eq!(AccountTab::from_param(Some("reviews")), AccountTab::Reviews);
        assert_eq!(AccountTab::from_param(Some("orders")), AccountTab::Orders);
        assert_eq!(AccountTab::from_param(Some("settings")), AccountTab::Profile);
        assert_eq!(AccountTab::from_param(None), AccountTab::Profile);
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn renders_requested_tab() {
        let html = crate::components::render_html(|| {
            view! { <AccountTabs initial_tab=Some("reviews".to_string())/> }
        });
        assert!(html.contains(r#"data-active-tab="reviews""#));
        assert!(html.contains("written any reviews yet"));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn renders_default_tab_without_initial_tab() {
        let html = crate::components::render_html(|| view! { <AccountTabs initial_tab=None/> });
        assert!(html.contains(r#"data-active-tab="profile""#));
    }
}
