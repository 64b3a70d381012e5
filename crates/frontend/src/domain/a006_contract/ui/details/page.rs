//! Contract details page

use super::view_model::ContractDetailsVm;
use crate::shared::components::DayPicker;
use crate::shared::icons::icon;
use chrono::NaiveDate;
use contracts::domain::a001_building::Building;
use contracts::enums::ContractType;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ContractDetails(
    id: Option<String>,
    #[prop(into)] on_saved: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ContractDetailsVm::new();
    vm.load_buildings();

    if let Some(existing_id) = id {
        vm.load(existing_id);
    }

    view! {
        <div class="page page--detail">
            <Header vm=vm.clone() on_saved=on_saved on_cancel=on_cancel />
            <div class="page__content">
                {
                    let error = vm.error;
                    move || error.get().map(|e| view! { <div class="warning-box">{e}</div> })
                }
                <Form vm=vm />
            </div>
        </div>
    }
}

// ── Header ────────────────────────────────────────────────────────────────────

#[component]
fn Header(vm: ContractDetailsVm, on_saved: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let is_edit_mode = vm.is_edit_mode();
    let is_save_disabled = vm.is_save_disabled();

    let handle_save = {
        let vm = vm.clone();
        move |_| vm.save(on_saved)
    };

    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">
                    {move || if is_edit_mode.get() { "Редактирование договора" } else { "Новый договор" }}
                </h1>
            </div>
            <div class="page__header-right">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=handle_save
                    disabled=is_save_disabled
                >
                    {icon("save")} " Сохранить"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_cancel.run(())
                >
                    {icon("x")} " Закрыть"
                </Button>
            </div>
        </div>
    }
}

// ── Form ──────────────────────────────────────────────────────────────────────

#[component]
fn Form(vm: ContractDetailsVm) -> impl IntoView {
    let buildings = vm.buildings;
    let date_of_signing = vm.date_of_signing;

    view! {
        <div class="details-grid--2col">
            <div class="form__group">
                <label class="form__label">"Дом *"</label>
                <Select value=vm.building_id>
                    <option value="">"-- Выберите дом --"</option>
                    <For
                        each=move || buildings.get()
                        key=|b: &Building| b.id.clone()
                        children=move |b: Building| view! { <option value=b.id.clone()>{b.legal_address.clone()}</option> }
                    />
                </Select>
            </div>

            <div class="form__group">
                <label class="form__label">"Вид договора"</label>
                <Select value=vm.contract_type>
                    {ContractType::all()
                        .into_iter()
                        .map(|t| view! { <option value=t.code().to_string()>{t.label()}</option> })
                        .collect_view()}
                </Select>
            </div>

            <div class="form__group">
                <label class="form__label">"Номер *"</label>
                <Input value=vm.contract_number placeholder="Например, 17/24" />
            </div>

            <div class="form__group">
                <DayPicker
                    label="Дата подписания *"
                    value=date_of_signing
                    on_change={
                        let vm = vm.clone();
                        move |date: NaiveDate| vm.set_signed_on(date)
                    }
                    required=true
                />
            </div>

            <div class="form__group" style="grid-column: 1 / -1;">
                <label class="form__label">"Название *"</label>
                <Input value=vm.title placeholder="Предмет договора" />
            </div>

            <div class="form__group" style="grid-column: 1 / -1;">
                <label class="form__label">"Описание"</label>
                <Textarea value=vm.description placeholder="Опционально" attr:rows=3 />
            </div>
        </div>
    }
}
