use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Overlay dialog. Escape, the close button and a click on the overlay
/// all run `on_close`.
#[component]
pub fn Modal(
    #[prop(into)]
    title: String,
    on_close: Callback<()>,
    /// Extra class for the dialog surface, e.g. a width modifier.
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let keydown = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || keydown.remove());

    let stop_propagation = move |ev: ev::MouseEvent| ev.stop_propagation();

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class=format!("modal {}", class) on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
