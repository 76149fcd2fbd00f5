use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Input, InputType, Spinner};

use super::view_model::DatasourceDetailsVm;
use crate::shared::icons::icon;

fn text_field(
    label: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
    input_type: InputType,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>{label}</label>
            <Input value=value input_type=input_type placeholder=placeholder />
        </div>
    }
}

#[component]
pub fn DatasourceForm(
    vm: DatasourceDetailsVm,
    /// A test or save request is in flight.
    #[prop(into)]
    is_busy: Signal<bool>,
) -> impl IntoView {
    let fields = vm.fields;
    let is_valid = {
        let vm = vm.clone();
        Signal::derive(move || vm.current().is_complete())
    };
    let error = vm.error;
    let is_loading = vm.is_loading;
    let save_label = if vm.is_edit_mode() { "Update" } else { "Save" };
    let vm_test = vm.clone();
    let vm_save = vm.clone();

    view! {
        <div class="details-form datasource-form">
            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
            <Show when=move || is_loading.get()>
                <div class="page-loading"><Spinner /></div>
            </Show>

            {text_field("Connection Identifier", "Ex: dataviz-pg-connection", fields.project_id, InputType::Text)}
            {text_field("Host address", "db.example.com", fields.database_url, InputType::Text)}
            {text_field("Port", "5432", fields.port, InputType::Text)}
            {text_field("Database Name", "my_database", fields.database_name, InputType::Text)}
            {text_field("Username", "Username", fields.username, InputType::Text)}
            {text_field("Password", "********", fields.password, InputType::Password)}

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| vm_test.test_command()
                    disabled=Signal::derive(move || is_busy.get() || !is_valid.get())
                >
                    {icon("play")}
                    "Test Connection"
                </Button>
                <div class="details-actions__spacer"></div>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| vm.cancel_command()>
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm_save.save_command()
                    disabled=Signal::derive(move || is_busy.get() || !is_valid.get())
                >
                    {icon("save")}
                    {save_label}
                </Button>
            </div>
        </div>
    }
}
