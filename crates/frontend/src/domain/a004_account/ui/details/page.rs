use super::view_model::AccountDetailsVm;
use crate::shared::components::CodeSelect;
use crate::shared::icons::icon;
use contracts::domain::a002_apartment::Apartment;
use contracts::enums::ServiceType;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn AccountDetails(
    id: Option<String>,
    #[prop(into)] on_saved: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = AccountDetailsVm::new();
    vm.load_apartments();

    if let Some(existing_id) = id {
        vm.load(existing_id);
    }

    let is_edit_mode = vm.is_edit_mode();
    let is_save_disabled = vm.is_save_disabled();
    let is_in_debt = vm.is_in_debt();
    let error = vm.error;
    let apartments = vm.apartments;

    let handle_save = {
        let vm = vm.clone();
        move |_| vm.save(on_saved)
    };

    view! {
        <div class="page page--detail">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {move || if is_edit_mode.get() { "Лицевой счёт" } else { "Новый лицевой счёт" }}
                    </h1>
                    <Show when=move || is_in_debt.get()>
                        <span class="badge badge--danger">"Долг"</span>
                    </Show>
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
                        <label class="form__label">"Номер счёта *"</label>
                        <Input value=vm.account_number />
                    </div>

                    <CodeSelect label="Услуга" value=vm.service_type options=ServiceType::options() />

                    <div class="form__group">
                        <label class="form__label">"Баланс"</label>
                        <Input value=vm.balance />
                    </div>
                </div>
            </div>
        </div>
    }
}
