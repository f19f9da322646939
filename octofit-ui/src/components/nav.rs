//! Navigation Component
//!
//! Header navigation bar with logo and links.

use leptos::*;
use leptos_router::*;
use octofit::ResourceKind;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="bg-blue-700 border-b border-blue-800">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🐙"</span>
                        <span class="text-xl font-bold text-white">"OctoFit Tracker"</span>
                    </A>

                    // One link per resource view
                    <div class="flex items-center space-x-1">
                        {ResourceKind::ALL
                            .into_iter()
                            .map(|kind| view! { <NavLink kind=kind /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(kind: ResourceKind) -> impl IntoView {
    view! {
        <A
            href=format!("/{}", kind.name())
            class="px-4 py-2 rounded-lg text-blue-100 hover:text-white hover:bg-blue-600 transition-colors"
            active_class="bg-blue-800 text-white"
        >
            {kind.title()}
        </A>
    }
}
