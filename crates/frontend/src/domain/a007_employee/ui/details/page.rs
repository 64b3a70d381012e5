use super::view_model::EmployeeDetailsVm;
use crate::shared::components::{CodeSelect, DayPicker};
use crate::shared::icons::icon;
use chrono::NaiveDate;
use contracts::enums::{Currency, EmployeeType, Gender};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn EmployeeDetails(
    id: Option<String>,
    #[prop(into)] on_saved: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = EmployeeDetailsVm::new();

    if let Some(existing_id) = id {
        vm.load(existing_id);
    }

    let is_edit_mode = vm.is_edit_mode();
    let is_save_disabled = vm.is_save_disabled();
    let error = vm.error;
    let date_of_birth = vm.date_of_birth;

    let handle_save = {
        let vm = vm.clone();
        move |_| vm.save(on_saved)
    };

    view! {
        <div class="page page--detail">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {move || if is_edit_mode.get() { "Сотрудник" } else { "Новый сотрудник" }}
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

                    <CodeSelect label="Форма занятости" value=vm.employee_type options=EmployeeType::options() />

                    <div class="form__group">
                        <label class="form__label">"Телефон"</label>
                        <Input value=vm.phone_number placeholder="+380" />
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Email"</label>
                        <Input value=vm.email />
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Зарплата"</label>
                        <Input value=vm.salary />
                    </div>

                    <CodeSelect label="Валюта" value=vm.currency options=Currency::options() />

                    <div class="form__group" style="grid-column: 1 / -1;">
                        <label class="form__label">"Примечание"</label>
                        <Textarea value=vm.remark attr:rows=2 />
                    </div>
                </div>
            </div>
        </div>
    }
}
