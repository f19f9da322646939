//! Loading Component

use leptos::*;

/// Centered spinner with a screen-reader label
#[component]
pub fn Loading(#[prop(into)] label: String) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12" role="status">
            <div class="loading-spinner w-8 h-8" />
            <span class="sr-only">{label}</span>
        </div>
    }
}
