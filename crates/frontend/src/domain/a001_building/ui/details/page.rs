use super::view_model::BuildingDetailsVm;
use crate::shared::components::CodeSelect;
use crate::shared::icons::icon;
use contracts::domain::a009_payment::Payment;
use contracts::enums::{Construction, Elevator, Heating, Parking, Territory, Wall, Warming};
use contracts::shared::format::format_amount;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn BuildingDetails(
    id: Option<String>,
    #[prop(into)] on_saved: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = BuildingDetailsVm::new();
    vm.load_payments();

    if let Some(existing_id) = id {
        vm.load(existing_id);
    }

    let is_edit_mode = vm.is_edit_mode();
    let is_save_disabled = vm.is_save_disabled();
    let average_area = vm.average_apartment_area();
    let error = vm.error;
    let payments = vm.payments;

    let handle_save = {
        let vm = vm.clone();
        move |_| vm.save(on_saved)
    };

    view! {
        <div class="page page--detail">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {move || if is_edit_mode.get() { "Дом" } else { "Новый дом" }}
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
                    <div class="form__group" style="grid-column: 1 / -1;">
                        <label class="form__label">"Адрес *"</label>
                        <Input value=vm.legal_address placeholder="вул. Шевченка, 12" />
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Счёт для платежей"</label>
                        <Select value=vm.payment_id>
                            <option value="">"-- Не выбран --"</option>
                            <For
                                each=move || payments.get()
                                key=|p: &Payment| p.id.clone()
                                children=move |p: Payment| view! { <option value=p.id.clone()>{p.title.clone()}</option> }
                            />
                        </Select>
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Год постройки"</label>
                        <Input value=vm.built />
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Этажей"</label>
                        <Input value=vm.number_of_floors />
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Квартир"</label>
                        <Input value=vm.number_of_apartments />
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Площадь, м²"</label>
                        <Input value=vm.area />
                        <span class="form__hint">
                            {move || average_area.get().map(|a| format!("В среднем {} м² на квартиру", format_amount(a)))}
                        </span>
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Высота потолков, м"</label>
                        <Input value=vm.ceiling_height />
                    </div>

                    <CodeSelect label="Отопление" value=vm.heating options=Heating::options() />
                    <CodeSelect label="Утепление" value=vm.warming options=Warming::options() />
                    <CodeSelect label="Конструкция" value=vm.construction options=Construction::options() />
                    <CodeSelect label="Стены" value=vm.wall options=Wall::options() />
                    <CodeSelect label="Территория" value=vm.territory options=Territory::options() />
                    <CodeSelect label="Парковка" value=vm.parking options=Parking::options() />
                    <CodeSelect label="Лифт" value=vm.elevator options=Elevator::options() />

                    <div class="form__group" style="grid-column: 1 / -1;">
                        <label class="form__label">"Примечание"</label>
                        <Textarea value=vm.remark attr:rows=2 />
                    </div>
                </div>
            </div>
        </div>
    }
}
