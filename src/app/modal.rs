use std::time::Duration;

use leptos::{ev, html, portal::Portal, prelude::*, tachys::html::element::ElementType};
use leptos_use::{use_document, use_event_listener};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, Node};

use crate::focus::{ClickTarget, DialogAction, DialogSession};

#[derive(Debug, Clone, Copy)]
struct DialogFocus {
    session: StoredValue<DialogSession<HtmlElement>, LocalStorage>,
}

/// Modal dialog that traps keyboard focus while `open` is true.
///
/// Nothing is rendered, and no listener is attached, while the dialog is
/// closed. Every close path (Escape, backdrop click, the close button or the
/// owner flipping `open`) unmounts the body, which is where focus and
/// scrolling are handed back.
#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    move || {
        open.get().then(|| {
            let children = children.clone();
            view! {
                <DialogBody title on_close>
                    {children()}
                </DialogBody>
            }
        })
    }
}

#[component]
fn DialogBody(title: Signal<String>, on_close: Callback<()>, children: ChildrenFn) -> impl IntoView {
    let dialog_ref = NodeRef::<html::Div>::new();
    let close_ref = NodeRef::<html::Button>::new();

    let previously_focused = document()
        .active_element()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    let session = StoredValue::new_local(DialogSession::open(previously_focused));
    provide_context(DialogFocus { session });
    use_focusable(close_ref);

    set_scroll_locked(true);
    let focus_timer = set_timeout_with_handle(
        move || {
            if let Some(el) = dialog_ref.get_untracked() {
                _ = el.focus();
            }
        },
        Duration::ZERO,
    )
    .ok();

    // removed by leptos-use when this body unmounts
    _ = use_event_listener(use_document(), ev::keydown, move |ev| {
        let action = session.with_value(|s| {
            s.handle_key(&ev.key(), ev.shift_key(), is_enabled, is_active)
        });
        match action {
            DialogAction::Close => on_close.run(()),
            DialogAction::Focus(el) => {
                ev.prevent_default();
                _ = el.focus();
            }
            DialogAction::Pass => {}
        }
    });

    on_cleanup(move || {
        if let Some(timer) = focus_timer {
            timer.clear();
        }
        set_scroll_locked(false);
        if let Some(el) = session.try_update_value(|s| s.take_restore_target()).flatten() {
            _ = el.focus();
        }
    });

    let on_click = move |target: ClickTarget| {
        let close = session.with_value(|s| matches!(s.handle_click(target), DialogAction::Close));
        if close {
            on_close.run(());
        }
    };

    view! {
        <Portal>
            <div
                class="fixed inset-0 z-50 flex items-center justify-center bg-black/80 backdrop-blur-sm"
                role="presentation"
                on:click=move |_| on_click(ClickTarget::Backdrop)
            >
                <div
                    node_ref=dialog_ref
                    role="dialog"
                    aria-modal="true"
                    aria-label=move || title.get()
                    tabindex="-1"
                    class="relative m-4 w-full max-w-3xl rounded-lg border border-muted/30 bg-background p-8 text-left shadow-2xl focus:outline-none"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_click(ClickTarget::Content);
                    }
                >
                    <button
                        node_ref=close_ref
                        type="button"
                        class="absolute right-4 top-4 h-9 w-9 rounded-full border border-muted/30 text-muted hover:text-foreground"
                        on:click=move |_| on_close.run(())
                    >
                        <span aria-hidden="true">"✕"</span>
                        <span class="sr-only">"Close modal"</span>
                    </button>
                    <div class="space-y-6">
                        <header>
                            <h3 class="text-2xl font-bold">{move || title.get()}</h3>
                        </header>
                        <div class="space-y-4 text-sm">{children()}</div>
                    </div>
                </div>
            </div>
        </Portal>
    }
}

/// Adds the element behind `node_ref` to the enclosing dialog's tab cycle.
///
/// Members cycle in the order this hook is called. Outside of a [`Modal`]
/// it does nothing.
pub fn use_focusable<E>(node_ref: NodeRef<E>)
where
    E: ElementType + 'static,
    E::Output: JsCast + Clone + 'static,
{
    let Some(focus) = use_context::<DialogFocus>() else {
        return;
    };
    let Some(slot) = focus.session.try_update_value(|s| s.ring_mut().reserve()) else {
        return;
    };

    Effect::new(move |_| {
        if let Some(el) = node_ref.get() {
            let el = el.unchecked_into::<HtmlElement>();
            focus.session.update_value(|s| s.ring_mut().attach(slot, el));
        }
    });

    on_cleanup(move || {
        focus.session.try_update_value(|s| s.ring_mut().release(slot));
    });
}

fn is_active(el: &HtmlElement) -> bool {
    let node: &Node = el.as_ref();
    document()
        .active_element()
        .is_some_and(|active| active.is_same_node(Some(node)))
}

fn is_enabled(el: &HtmlElement) -> bool {
    !el.has_attribute("disabled")
}

fn set_scroll_locked(locked: bool) {
    let Some(body) = document().body() else {
        return;
    };
    let style = body.style();
    let res = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
    if res.is_err() {
        log::warn!("couldn't update body scroll lock");
    }
}
