//! Resource View Component
//!
//! Browser host for one resource list. The list state lives in a signal and
//! every state change re-renders the view tree as HTML.

use std::cell::Cell as Flag;
use std::rc::Rc;

use leptos::*;
use octofit::render::{
    render, Action, ActionKind, Card, Cell, EmptyState, ErrorPanel, Listing, Podium, Table, Tone,
    ViewTree,
};
use octofit::resource::{join_endpoint, parse_items, ListResource, ResourceSpec};
use serde::de::DeserializeOwned;

use crate::api;
use crate::components::Loading;

/// Mount a resource view and load it once.
///
/// Responses that arrive after the page is left are dropped.
pub fn resource_view<T>(spec: ResourceSpec<T>) -> impl IntoView
where
    T: DeserializeOwned + Clone + 'static,
{
    let endpoint = join_endpoint(&api::get_api_base(), spec.path());
    let state = create_rw_signal(ListResource::<T>::new(spec.name(), endpoint));
    let spec = store_value(spec);

    let mounted = Rc::new(Flag::new(true));
    on_cleanup({
        let mounted = Rc::clone(&mounted);
        move || mounted.set(false)
    });

    let load = Callback::new(move |_: ()| {
        if !mounted.get() {
            return;
        }

        state.update(ListResource::begin_load);
        let endpoint = state.with_untracked(|s| s.endpoint().to_string());
        let mounted = Rc::clone(&mounted);

        spawn_local(async move {
            let result = match api::fetch_list(&endpoint).await {
                Ok(body) => parse_items::<T>(&body),
                Err(e) => Err(e),
            };

            if !mounted.get() {
                web_sys::console::warn_1(&format!("Discarding response from {}", endpoint).into());
                return;
            }

            if let Err(e) = &result {
                web_sys::console::error_1(&format!("Error fetching {}: {}", endpoint, e).into());
            }

            state.try_update(|s| {
                s.complete(result);
            });
        });
    });

    // Fetch on mount
    create_effect(move |_| load.call(()));

    move || {
        let tree = state.with(|s| spec.with_value(|spec| render(s, spec)));
        tree_view(tree, load)
    }
}

fn tree_view(tree: ViewTree, load: Callback<()>) -> View {
    match tree {
        ViewTree::Loading(indicator) => view! { <Loading label=indicator.label /> }.into_view(),
        ViewTree::Failed(panel) => error_view(panel, load),
        ViewTree::Empty(empty) => empty_view(empty),
        ViewTree::Populated(listing) => listing_view(listing, load),
    }
}

fn error_view(panel: ErrorPanel, load: Callback<()>) -> View {
    view! {
        <div class="bg-red-900/40 border border-red-700 rounded-xl p-6" role="alert">
            <h4 class="text-xl font-semibold text-red-300 mb-2">{panel.heading}</h4>
            <p class="text-red-200">{panel.message}</p>
            <hr class="my-4 border-red-800" />
            {action_button(panel.retry, load)}
        </div>
    }
    .into_view()
}

fn empty_view(empty: EmptyState) -> View {
    view! {
        <div class="bg-gray-800 rounded-xl py-12 text-center">
            <h4 class="text-xl font-semibold text-gray-400 mb-2">{empty.title}</h4>
            <p class="mb-6">{empty.message}</p>
            <button class="px-6 py-3 bg-blue-600 hover:bg-blue-700 rounded-lg font-medium">
                {empty.action.label}
            </button>
        </div>
    }
    .into_view()
}

fn listing_view(listing: Listing, load: Callback<()>) -> View {
    let Listing {
        title,
        subtitle,
        refresh,
        podium,
        table,
        cards,
        total,
        total_label,
    } = listing;

    view! {
        <div class="space-y-8">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">{title}</h1>
                    <p class="text-gray-400 mt-1">{subtitle}</p>
                </div>
                {action_button(refresh, load)}
            </div>

            {podium.map(podium_view)}

            <section class="bg-gray-800 rounded-xl overflow-hidden">
                {table_view(table)}
                <div class="px-4 py-3 border-t border-gray-700 text-sm text-gray-400">
                    {total_label}": " <strong class="text-white">{total}</strong>
                </div>
            </section>

            <section class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                {cards.into_iter().map(card_view).collect_view()}
            </section>
        </div>
    }
    .into_view()
}

fn action_button(action: Action, load: Callback<()>) -> View {
    let class = match action.kind {
        ActionKind::Retry => "px-4 py-2 border border-red-500 text-red-300 hover:bg-red-800 rounded-lg",
        ActionKind::Refresh => "px-4 py-2 border border-blue-500 text-blue-300 hover:bg-blue-800 rounded-lg",
        ActionKind::Placeholder => "px-4 py-2 bg-blue-600 rounded-lg",
    };

    match action.kind {
        ActionKind::Retry | ActionKind::Refresh => view! {
            <button class=class on:click=move |_| load.call(())>{action.label}</button>
        }
        .into_view(),
        ActionKind::Placeholder => view! { <button class=class>{action.label}</button> }.into_view(),
    }
}

fn podium_view(podium: Podium) -> View {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"🎉 Top Performers"</h2>
            <div class="grid grid-cols-3 gap-4 text-center items-end">
                {podium
                    .places
                    .into_iter()
                    .map(|place| {
                        let lift = if place.rank == 1 { "-mt-5" } else { "" };
                        view! {
                            <div class=format!("bg-gray-900 rounded-lg p-4 {}", lift)>
                                <div class="text-3xl">{place.medal}</div>
                                <div class="font-bold mt-2">{place.name}</div>
                                <div class="text-gray-400">{place.score}</div>
                                <span class=badge_class(place.tone)>{place.title}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
    .into_view()
}

fn table_view(table: Table) -> View {
    view! {
        <table class="w-full text-left">
            <thead class="bg-gray-900">
                <tr>
                    {table
                        .headers
                        .into_iter()
                        .map(|h| view! { <th class="px-4 py-3" scope="col">{h}</th> })
                        .collect_view()}
                </tr>
            </thead>
            <tbody>
                {table
                    .rows
                    .into_iter()
                    .map(|row| {
                        view! {
                            <tr class="border-t border-gray-700 hover:bg-gray-700/50">
                                {row
                                    .cells
                                    .into_iter()
                                    .map(|cell| view! { <td class="px-4 py-3">{cell_view(cell)}</td> })
                                    .collect_view()}
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
    .into_view()
}

fn card_view(card: Card) -> View {
    view! {
        <div class="bg-gray-800 rounded-lg p-4">
            <h5 class="text-lg font-semibold mb-2">{card.title}</h5>
            <div class="space-x-2 mb-2">
                {card.badges.into_iter().map(cell_view).collect_view()}
            </div>
            {card
                .fields
                .into_iter()
                .map(|field| {
                    view! {
                        <p class="text-sm mb-1">
                            {field.label.map(|label| view! { <strong>{label}": "</strong> })}
                            {cell_view(field.value)}
                        </p>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_view()
}

fn cell_view(cell: Cell) -> View {
    match cell {
        Cell::Text { text } => text.into_view(),
        Cell::Strong { text } => view! { <strong>{text}</strong> }.into_view(),
        Cell::Muted { text } => view! { <span class="text-gray-400">{text}</span> }.into_view(),
        Cell::Badge { text, tone } => view! { <span class=badge_class(tone)>{text}</span> }.into_view(),
        Cell::Progress { percent, label } => view! {
            <div class="w-full bg-gray-700 rounded h-5" role="progressbar">
                <div
                    class="bg-green-600 h-5 rounded text-xs text-center leading-5"
                    style=format!("width: {}%", percent)
                >
                    {label}
                </div>
            </div>
        }
        .into_view(),
        Cell::Mailto { address } => view! {
            <a href=format!("mailto:{}", address) class="text-blue-300 hover:underline">{address}</a>
        }
        .into_view(),
        Cell::Avatar { initial } => view! {
            <span class="inline-flex items-center justify-center w-10 h-10 rounded-full bg-blue-600 font-bold">
                {initial.to_string()}
            </span>
        }
        .into_view(),
    }
}

fn badge_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Primary => "px-2 py-1 rounded text-xs bg-blue-600 text-white",
        Tone::Secondary => "px-2 py-1 rounded text-xs bg-gray-600 text-white",
        Tone::Success => "px-2 py-1 rounded text-xs bg-green-600 text-white",
        Tone::Warning => "px-2 py-1 rounded text-xs bg-yellow-400 text-gray-900",
        Tone::Danger => "px-2 py-1 rounded text-xs bg-red-600 text-white",
        Tone::Info => "px-2 py-1 rounded text-xs bg-cyan-600 text-white",
    }
}
