use super::view_model::PersonDetailsVm;
use crate::shared::components::{CodeSelect, DayPicker};
use crate::shared::date_utils::today;
use crate::shared::icons::icon;
use chrono::NaiveDate;
use contracts::domain::a002_apartment::Apartment;
use contracts::enums::Gender;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn PersonDetails(
    id: Option<String>,
    #[prop(into)] on_saved: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = PersonDetailsVm::new();
    vm.load_apartments();

    if let Some(existing_id) = id {
        vm.load(existing_id);
    }

    let is_edit_mode = vm.is_edit_mode();
    let is_save_disabled = vm.is_save_disabled();
    let age = vm.age(today());
    let error = vm.error;
    let apartments = vm.apartments;
    let date_of_birth = vm.date_of_birth;
    let owned_since = vm.owned_since;

    let handle_save = {
        let vm = vm.clone();
        move |_| vm.save(on_saved)
    };

    view! {
        <div class="page page--detail">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {move || if is_edit_mode.get() { "Жилец" } else { "Новый жилец" }}
                    </h1>
                    {move || age.get().map(|age| view! { <span class="badge">{format!("{} лет", age)}</span> })}
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
                        <label class="form__label">"Фамилия *"</label>
                        <Input value=vm.second_name />
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Имя *"</label>
                        <Input value=vm.first_name />
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Отчество"</label>
                        <Input value=vm.middle_name />
                    </div>

                    <CodeSelect label="Пол" value=vm.gender options=Gender::options() />

                    <div class="form__group">
                        <DayPicker
                            label="Дата рождения"
                            value=date_of_birth
                            on_change=move |date: NaiveDate| date_of_birth.set(Some(date))
                        />
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Квартира *"</label>
                        <Select value=vm.apartment_id>
                            <option value="">"-- Выберите квартиру --"</option>
                            <For
                                each=move || apartments.get()
                                key=|a: &Apartment| a.id.clone()
                                children=move |a: Apartment| view! {
                                    <option value=a.id.clone()>{format!("№{}", a.apartment_number)}</option>
                                }
                            />
                        </Select>
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Телефон"</label>
                        <Input value=vm.phone_number placeholder="+380" />
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Email"</label>
                        <Input value=vm.email />
                    </div>

                    <div class="form__group">
                        <DayPicker
                            label="Собственник с"
                            value=owned_since
                            on_change=move |date: NaiveDate| owned_since.set(Some(date))
                        />
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Доля собственности, %"</label>
                        <Input value=vm.ownership_percentage />
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
