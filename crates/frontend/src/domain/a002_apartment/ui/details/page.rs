use super::view_model::ApartmentDetailsVm;
use crate::shared::icons::icon;
use contracts::domain::a001_building::Building;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ApartmentDetails(
    id: Option<String>,
    #[prop(into)] on_saved: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ApartmentDetailsVm::new();
    vm.load_buildings();

    if let Some(existing_id) = id {
        vm.load(existing_id);
    }

    let is_edit_mode = vm.is_edit_mode();
    let is_save_disabled = vm.is_save_disabled();
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
                        {move || if is_edit_mode.get() { "Квартира" } else { "Новая квартира" }}
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

                    <div class="form__group">
                        <label class="form__label">"Номер квартиры *"</label>
                        <Input value=vm.apartment_number />
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Подъезд"</label>
                        <Input value=vm.entrance_number />
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Этаж"</label>
                        <Input value=vm.floor />
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Площадь, м²"</label>
                        <Input value=vm.area />
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Телефон"</label>
                        <Input value=vm.phone_number placeholder="+380" />
                    </div>

                    <div class="form__group" style="grid-column: 1 / -1;">
                        <label class="form__label">"Примечание"</label>
                        <Textarea value=vm.remark attr:rows=2 />
                    </div>
                </div>
            </div>
        </div>
    }
}
