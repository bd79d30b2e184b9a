use leptos::prelude::*;

use groceryglide::session::Session;

use crate::{
    icons::{Icon, LucideIcon},
    shop::use_shop,
};

const ACCOUNT_LINKS: [(Icon, &str); 5] = [
    (Icon::User, "Personal Info"),
    (Icon::MapPin, "Addresses"),
    (Icon::CreditCard, "Payment Methods"),
    (Icon::Bell, "Notifications"),
    (Icon::Settings, "Settings"),
];

/// Profile page tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum ProfileTab {
    #[default]
    Personal,
    Preferences,
    Security,
}

impl ProfileTab {
    const ALL: [Self; 3] = [Self::Personal, Self::Preferences, Self::Security];

    fn label(self) -> &'static str {
        match self {
            Self::Personal => "Personal Info",
            Self::Preferences => "Preferences",
            Self::Security => "Security",
        }
    }
}

#[component]
fn Field(
    id: &'static str,
    label: &'static str,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional)] value: &'static str,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <label for=id class="label">{label}</label>
            <input id=id type=kind class="input" value=value />
        </div>
    }
}

#[component]
fn SaveButton(label: &'static str) -> impl IntoView {
    let shop = use_shop();

    view! {
        <button type="button" class="button" on:click=move |_| shop.notify(Session::save_profile())>
            {label}
        </button>
    }
}

#[component]
fn Sidebar() -> impl IntoView {
    view! {
        <aside class="col-span-1">
            <div class="panel mb-4 flex flex-col items-center p-4 py-8">
                <div class="avatar mb-2">"JD"</div>
                <h3 class="text-lg font-bold">"John Doe"</h3>
                <p class="text-sm text-muted">"john.doe@example.com"</p>
            </div>
            <div class="panel">
                <nav class="space-y-1 p-2">
                    {ACCOUNT_LINKS
                        .into_iter()
                        .enumerate()
                        .map(|(index, (icon, label))| view! {
                            <a href="#" class="account-link" class:account-link-active=index == 0>
                                <LucideIcon icon=icon class="mr-2 h-4 w-4" />
                                {label}
                            </a>
                        })
                        .collect_view()}
                </nav>
                <div class="border-t p-2">
                    <a href="#" class="account-link">
                        <LucideIcon icon=Icon::LogOut class="mr-2 h-4 w-4" />
                        "Logout"
                    </a>
                </div>
            </div>
        </aside>
    }
}

#[component]
fn TabPanel(tab: ProfileTab) -> impl IntoView {
    let categories = use_shop().data.catalog.categories().to_vec();

    match tab {
        ProfileTab::Personal => view! {
            <div class="panel p-6">
                <h2 class="mb-4 text-lg font-semibold">"Basic Information"</h2>
                <div class="mb-6 grid grid-cols-1 gap-4 md:grid-cols-2">
                    <Field id="firstName" label="First Name" value="John" />
                    <Field id="lastName" label="Last Name" value="Doe" />
                    <Field id="email" label="Email" kind="email" value="john.doe@example.com" />
                    <Field id="phone" label="Phone" kind="tel" value="+1 (555) 123-4567" />
                </div>
                <SaveButton label="Save Changes" />
            </div>
        }
        .into_any(),
        ProfileTab::Preferences => view! {
            <div class="panel p-6">
                <h2 class="mb-4 text-lg font-semibold">"Shopping Preferences"</h2>
                <div class="mb-6 space-y-2">
                    <label for="defaultCategory" class="label">"Default Category"</label>
                    <select id="defaultCategory" class="input">
                        <option value="">"All Categories"</option>
                        {categories
                            .into_iter()
                            .map(|category| view! { <option value=category.id>{category.name}</option> })
                            .collect_view()}
                    </select>
                </div>
                <SaveButton label="Save Preferences" />
            </div>
        }
        .into_any(),
        ProfileTab::Security => view! {
            <div class="panel p-6">
                <h2 class="mb-4 text-lg font-semibold">"Change Password"</h2>
                <div class="mb-6 space-y-4">
                    <Field id="currentPassword" label="Current Password" kind="password" />
                    <Field id="newPassword" label="New Password" kind="password" />
                    <Field id="confirmPassword" label="Confirm New Password" kind="password" />
                </div>
                <SaveButton label="Update Password" />
            </div>
        }
        .into_any(),
    }
}

/// Mocked account settings.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let active = RwSignal::new(ProfileTab::default());

    view! {
        <div class="mx-auto max-w-4xl py-8">
            <h1 class="page-title mb-8">"My Profile"</h1>
            <div class="grid grid-cols-1 gap-6 md:grid-cols-4">
                <Sidebar />
                <div class="col-span-1 md:col-span-3">
                    <div class="tab-list mb-6" role="tablist">
                        {ProfileTab::ALL
                            .into_iter()
                            .map(|tab| view! {
                                <button
                                    type="button"
                                    role="tab"
                                    class="tab"
                                    class:tab-active=move || active.get() == tab
                                    aria-selected=move || (active.get() == tab).to_string()
                                    on:click=move |_| active.set(tab)
                                >
                                    {tab.label()}
                                </button>
                            })
                            .collect_view()}
                    </div>
                    {move || view! { <TabPanel tab=active.get() /> }}
                </div>
            </div>
        </div>
    }
}
