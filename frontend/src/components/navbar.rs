use leptos::*;
use leptos_router::*;
use shared::{MenuState, NavEvent, NavLink, PRIMARY_LINKS, QUICK_ACCESS_LINKS};
use wasm_bindgen::JsCast;

use crate::config::use_site_config;
use crate::utils::{scroll_offset, WindowListener};

/// Apply an event; the signal is written only when the state changed.
fn dispatch(state: RwSignal<MenuState>, event: NavEvent) {
    let mut next = state.get_untracked();
    if next.apply(event) {
        state.set(next);
    }
}

/// Whether the element receiving focus is `container` or one of its
/// descendants. No related target means focus left the document.
fn focus_stays_within(container: &web_sys::Node, related: Option<web_sys::EventTarget>) -> bool {
    related
        .as_ref()
        .and_then(|target| target.dyn_ref::<web_sys::Node>())
        .map(|node| container.contains(Some(node)))
        .unwrap_or(false)
}

/// Join a base class list with the `active` marker.
fn with_active(base: &str, active: bool) -> String {
    if active {
        format!("{} active", base)
    } else {
        base.to_string()
    }
}

fn chevron_class(open: bool) -> &'static str {
    if open {
        "chevron rotate-180"
    } else {
        "chevron"
    }
}

fn navbar_class(compact: bool) -> &'static str {
    if compact {
        "glass-navbar w-full max-w-5xl mx-auto rounded-2xl transition-all duration-300 py-2 scrolled"
    } else {
        "glass-navbar w-full max-w-5xl mx-auto rounded-2xl transition-all duration-300 py-3"
    }
}

/// Fixed navigation bar with the quick-access dropdown and the mobile menu.
#[component]
pub fn Navbar() -> impl IntoView {
    let config = use_site_config();
    let location = use_location();
    let current = location.pathname;

    let state = create_rw_signal(MenuState::new(config.scroll_compact_threshold));

    let scroll_listener = WindowListener::register("scroll", move |_| {
        dispatch(
            state,
            NavEvent::Scrolled {
                offset_y: scroll_offset(),
            },
        );
    });
    on_cleanup(move || drop(scroll_listener));

    let on_link = move |_: ev::MouseEvent| dispatch(state, NavEvent::LinkActivated);

    let dropdown_ref = create_node_ref::<html::Li>();
    let on_dropdown_focusout = move |ev: ev::FocusEvent| {
        // Only close when focus lands outside the dropdown container.
        let focus_within = dropdown_ref
            .get_untracked()
            .map(|container| focus_stays_within(&container, ev.related_target()))
            .unwrap_or(false);
        dispatch(state, NavEvent::DropdownFocusLost { focus_within });
    };

    let needle = config.quick_access_needle.clone();
    let trigger_class = move || {
        let highlighted = current.with(|path| state.get().quick_access_highlighted(path, &needle));
        with_active(
            "nav-link flex items-center gap-1.5 px-4 py-2 rounded-xl text-sm font-medium",
            highlighted,
        )
    };

    let link_item = move |link: &'static NavLink, base: &'static str| {
        view! {
            <a
                href=link.path
                class=move || current.with(|path| with_active(base, link.is_active(path)))
                on:click=on_link
            >
                {link.label}
            </a>
        }
    };

    view! {
        <div class="fixed top-0 left-0 right-0 z-50 px-4 pt-3">
            <nav class=move || navbar_class(state.get().is_compact())>
                <div class="flex justify-between items-center px-5">
                    <a href="/" class="navbar-brand flex items-center gap-2 group" on:click=on_link>
                        <span class="text-lg font-bold tracking-tight">{config.brand_name.clone()}</span>
                    </a>

                    <ul class="hidden md:flex items-center gap-1">
                        {PRIMARY_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <li>
                                        {link_item(link, "nav-link px-4 py-2 rounded-xl text-sm font-medium")}
                                    </li>
                                }
                            })
                            .collect_view()}

                        <li
                            class="relative"
                            tabindex="-1"
                            node_ref=dropdown_ref
                            on:focusout=on_dropdown_focusout
                        >
                            <button
                                class=trigger_class
                                on:click=move |_| dispatch(state, NavEvent::ToggleDesktopDropdown)
                            >
                                "Quick Access"
                                <span class=move || chevron_class(state.get().desktop_dropdown_open())>"▾"</span>
                            </button>

                            <Show when=move || state.get().desktop_dropdown_open() fallback=|| ()>
                                <div class="dropdown-menu absolute right-0 mt-2 py-2 w-52 rounded-xl overflow-hidden">
                                    {QUICK_ACCESS_LINKS
                                        .iter()
                                        .map(|link| link_item(link, "dropdown-item block px-4 py-2.5 text-sm"))
                                        .collect_view()}
                                </div>
                            </Show>
                        </li>
                    </ul>

                    <button
                        class=move || with_active("md:hidden p-2 rounded-lg mobile-toggle", state.get().mobile_menu_open())
                        aria-label="Toggle mobile menu"
                        on:click=move |_| dispatch(state, NavEvent::ToggleMobileMenu)
                    >
                        {move || if state.get().mobile_menu_open() { "✕" } else { "☰" }}
                    </button>
                </div>

                <Show when=move || state.get().mobile_menu_open() fallback=|| ()>
                    <div class="md:hidden mt-3 mx-3 mb-3 p-4 rounded-xl mobile-menu">
                        <ul class="flex flex-col gap-1">
                            {PRIMARY_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <li>
                                            {link_item(link, "nav-link block px-4 py-2.5 rounded-lg text-sm font-medium")}
                                        </li>
                                    }
                                })
                                .collect_view()}

                            <li>
                                <button
                                    class=move || with_active(
                                        "nav-link w-full flex items-center justify-between px-4 py-2.5 rounded-lg text-sm font-medium",
                                        state.get().mobile_dropdown_open(),
                                    )
                                    on:click=move |_| dispatch(state, NavEvent::ToggleMobileDropdown)
                                >
                                    <span>"Quick Access"</span>
                                    <span class=move || chevron_class(state.get().mobile_dropdown_open())>"▾"</span>
                                </button>

                                <Show when=move || state.get().mobile_dropdown_open() fallback=|| ()>
                                    <div class="mt-1 ml-4 pl-4 border-l">
                                        {QUICK_ACCESS_LINKS
                                            .iter()
                                            .map(|link| link_item(link, "dropdown-item block px-4 py-2 rounded-lg text-sm"))
                                            .collect_view()}
                                    </div>
                                </Show>
                            </li>
                        </ul>
                    </div>
                </Show>
            </nav>
        </div>
    }
}
