//! Home Page
//!
//! Welcome message, one card per section and the API connection setting.

use leptos::*;
use leptos_router::*;
use octofit::ResourceKind;

use crate::api;

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="space-y-10">
            <div class="text-center">
                <h1 class="text-4xl font-bold text-blue-400 mb-4">"Welcome to OctoFit Tracker! 🐙"</h1>
                <p class="text-lg text-gray-300">"Track your fitness journey at Mergington High School"</p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-5 gap-4">
                {ResourceKind::ALL
                    .into_iter()
                    .map(|kind| view! { <SectionCard kind=kind /> })
                    .collect_view()}
            </div>

            <ApiSettings />
        </div>
    }
}

#[component]
fn SectionCard(kind: ResourceKind) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-6 text-center flex flex-col">
            <h5 class="text-lg font-semibold mb-2">{format!("{} {}", kind.icon(), kind.title())}</h5>
            <p class="text-gray-400 flex-1 mb-4">{kind.blurb()}</p>
            <A
                href=format!("/{}", kind.name())
                class="px-4 py-2 bg-blue-600 hover:bg-blue-700 rounded-lg font-medium"
            >
                {format!("View {}", kind.title())}
            </A>
        </div>
    }
}

/// API base URL, stored in local storage
#[component]
fn ApiSettings() -> impl IntoView {
    let (api_url, set_api_url) = create_signal(api::get_api_base());
    let (saved, set_saved) = create_signal(false);

    let save_url = move |_| {
        api::set_api_base(&api_url.get());
        set_api_url.set(api::get_api_base());
        set_saved.set(true);
    };

    let reset_url = move |_| {
        api::set_api_base(api::DEFAULT_API_BASE);
        set_api_url.set(api::get_api_base());
        set_saved.set(true);
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"API Connection"</h2>
            <div class="flex items-center space-x-2">
                <input
                    type="text"
                    class="flex-1 bg-gray-900 border border-gray-700 rounded-lg px-3 py-2"
                    prop:value=move || api_url.get()
                    on:input=move |ev| {
                        set_saved.set(false);
                        set_api_url.set(event_target_value(&ev));
                    }
                />
                <button class="px-4 py-2 bg-blue-600 hover:bg-blue-700 rounded-lg" on:click=save_url>
                    "Save"
                </button>
                <button class="px-4 py-2 border border-gray-600 hover:bg-gray-700 rounded-lg" on:click=reset_url>
                    "Reset"
                </button>
            </div>
            <Show when=move || saved.get()>
                <p class="text-green-400 text-sm mt-2">"Saved. Views use the new URL the next time they load."</p>
            </Show>
        </section>
    }
}
