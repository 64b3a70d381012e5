use super::view_model::InvoiceDetailsVm;
use crate::shared::components::{CodeSelect, MonthPicker};
use crate::shared::icons::icon;
use chrono::NaiveDate;
use contracts::domain::a002_apartment::Apartment;
use contracts::enums::InvoiceType;
use contracts::shared::calendar::YearMonth;
use contracts::shared::format::format_amount;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn InvoiceDetails(
    id: Option<String>,
    #[prop(into)] on_saved: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = InvoiceDetailsVm::new();
    vm.load_apartments();

    if let Some(existing_id) = id {
        vm.load(existing_id);
    }

    let is_edit_mode = vm.is_edit_mode();
    let is_save_disabled = vm.is_save_disabled();
    let charge = vm.charge();
    let error = vm.error;
    let apartments = vm.apartments;
    let period = vm.period;

    let handle_save = {
        let vm = vm.clone();
        move |_| vm.save(on_saved)
    };
    let handle_charge = {
        let vm = vm.clone();
        move |_| vm.apply_charge()
    };

    view! {
        <div class="page page--detail">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {move || if is_edit_mode.get() { "Счёт" } else { "Новый счёт" }}
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
                        <label class="form__label">"Период *"</label>
                        <MonthPicker
                            value=period
                            on_change=move |first_day: NaiveDate| {
                                period.set(Some(YearMonth::from_date(first_day)))
                            }
                        />
                    </div>

                    <CodeSelect label="Услуга" value=vm.invoice_type options=InvoiceType::options() />

                    <div class="form__group">
                        <label class="form__label">"Лицевой счёт *"</label>
                        <Input value=vm.account_number />
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Показание"</label>
                        <Input value=vm.indicator />
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Тариф"</label>
                        <Input value=vm.cost />
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Остаток на начало"</label>
                        <Input value=vm.balance />
                    </div>

                    <div class="form__group">
                        <label class="form__label">"К оплате"</label>
                        <div class="form__row">
                            <Input value=vm.total />
                            <Button
                                appearance=ButtonAppearance::Subtle
                                on_click=handle_charge
                                disabled=Signal::derive(move || charge.get().is_none())
                            >
                                {move || match charge.get() {
                                    Some(value) => format!("= {}", format_amount(value)),
                                    None => "=".to_string(),
                                }}
                            </Button>
                        </div>
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Плательщик"</label>
                        <Input value=vm.payer />
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Доля собственности, %"</label>
                        <Input value=vm.ownership_percentage />
                    </div>
                </div>
            </div>
        </div>
    }
}
