use super::view_model::ServiceDetailsVm;
use crate::shared::components::CodeSelect;
use crate::shared::icons::icon;
use contracts::domain::a001_building::Building;
use contracts::enums::ServiceType;
use contracts::shared::format::format_amount;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ServiceDetails(
    id: Option<String>,
    #[prop(into)] on_saved: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ServiceDetailsVm::new();
    vm.load_buildings();

    if let Some(existing_id) = id {
        vm.load(existing_id);
    }

    let is_edit_mode = vm.is_edit_mode();
    let is_save_disabled = vm.is_save_disabled();
    let sample_charge = vm.sample_charge();
    let error = vm.error;
    let buildings = vm.buildings;

    let handle_save = {
        let vm = vm.clone();
        move |_| vm.save(on_saved)
    };

    view! {
        <div class="page page--detail">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {move || if is_edit_mode.get() { "Услуга" } else { "Новая услуга" }}
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

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="warning-box">{e}</div> })}

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

                    <CodeSelect label="Услуга" value=vm.service_type options=ServiceType::options() />

                    <div class="form__group">
                        <label class="form__label">"Тариф"</label>
                        <Input value=vm.cost />
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Показание для расчёта"</label>
                        <Input value=vm.sample_indicator />
                        <span class="form__hint">
                            {move || match sample_charge.get() {
                                Some(value) => format!("Начисление: {}", format_amount(value)),
                                None => "Начисление: -".to_string(),
                            }}
                        </span>
                    </div>
                </div>
            </div>
        </div>
    }
}
